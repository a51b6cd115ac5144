//! Checkout: cart summary plus the delivery form that places the booking.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful booking stores an [`OrderConfirmation`] in the app-level
//! context and navigates to `/order-status`, appending `?id=` when the
//! order service returned an id.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::feedback::{ErrorBanner, LoadingPanel};
use crate::components::navbar::Navbar;
use crate::net::types::{CartItem, UserType};
use crate::state::cart::{total_items, total_price};
use crate::state::checkout::{DeliveryForm, OrderConfirmation};
use crate::state::session::SessionStore;
use crate::state::view::{ListView, LoadKind, ViewPhase};
use crate::util::auth::install_role_redirect;
use crate::util::format::format_list_price;
use crate::util::request_guard::RequestGuard;
use crate::util::task;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let confirmation = expect_context::<RwSignal<OrderConfirmation>>();
    let navigate = use_navigate();
    install_role_redirect(session, UserType::Customer, navigate.clone());

    let cart = RwSignal::new(ListView::<CartItem>::default());
    let form = RwSignal::new(DeliveryForm::default());
    let submitting = RwSignal::new(false);
    let form_error = RwSignal::new(None::<String>);

    let guard = RequestGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.retire()
    });

    let load = {
        let guard = guard.clone();
        move |kind: LoadKind| {
            let Some(customer_id) = session.get_untracked().customer_id() else {
                return;
            };
            let ticket = guard.begin();
            cart.update(ListView::begin);
            task::spawn_guarded(
                guard.clone(),
                ticket,
                crate::net::cart::list_customer_cart(Some(customer_id)),
                move |result| match result {
                    Ok(items) => cart.update(|view| view.succeed(items)),
                    Err(e) => cart.update(|view| view.fail(kind, e.describe("load cart"))),
                },
            );
        }
    };

    let customer = Memo::new(move |_| session.get().customer_id());
    {
        let load = load.clone();
        Effect::new(move || {
            if customer.get().is_some() {
                load(LoadKind::Mount);
            }
        });
    }
    let on_retry = Callback::new(move |()| load(LoadKind::Manual));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(customer_id) = session.get_untracked().customer_id() else {
            form_error.set(Some("Please log in as a customer to place an order.".to_owned()));
            return;
        };
        let cart_len = cart.with_untracked(|view| view.items.len());
        let booking = match form.with_untracked(|draft| draft.to_booking(customer_id, cart_len)) {
            Ok(booking) => booking,
            Err(message) => {
                form_error.set(Some(message.to_owned()));
                return;
            }
        };
        form_error.set(None);
        submitting.set(true);

        let guard = guard.clone();
        let navigate = navigate.clone();
        task::spawn(async move {
            let result = crate::net::order::make_booking(&booking).await;
            if !guard.is_live() {
                return;
            }
            submitting.set(false);
            match result {
                Ok(order_id) => {
                    confirmation.set(OrderConfirmation::placed(order_id));
                    let target = order_id.map_or_else(|| "/order-status".to_owned(), |id| format!("/order-status?id={id}"));
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => form_error.set(Some(e.describe("place order"))),
            }
        });
    };

    let count = Signal::derive(move || cart.with(|view| total_items(&view.items)));

    view! {
        <Navbar cart_count=count />
        <main class="page checkout-page">
            <header class="page__header">
                <h1>"Checkout"</h1>
            </header>

            <ErrorBanner message=Signal::derive(move || cart.with(|view| view.error.clone())) on_retry=on_retry />

            <div class="checkout-page__layout">
                <section class="checkout-summary">
                    <h2>"Order Summary"</h2>
                    {move || match cart.with(ListView::phase) {
                        ViewPhase::Loading => view! { <LoadingPanel message="Loading your cart..." /> }.into_any(),
                        ViewPhase::Failed => ().into_any(),
                        ViewPhase::Empty => {
                            view! {
                                <div class="empty-state empty-state--compact">
                                    <p>"Your cart is empty"</p>
                                    <a class="btn" href="/home">
                                        "Continue Shopping"
                                    </a>
                                </div>
                            }
                                .into_any()
                        }
                        ViewPhase::Populated => {
                            view! {
                                <ul class="checkout-summary__lines">
                                    <For each=move || cart.get().items key=|item| item.id let:item>
                                        <li class="checkout-summary__line">
                                            <span>{format!("{} x{}", item.item_name, item.quantity)}</span>
                                            <span>{format_list_price(item.price)}</span>
                                        </li>
                                    </For>
                                </ul>
                                <p class="checkout-summary__total">
                                    {move || {
                                        cart.with(|view| {
                                            format!("Total ({} items): ${:.2}", total_items(&view.items), total_price(&view.items))
                                        })
                                    }}
                                </p>
                            }
                                .into_any()
                        }
                    }}
                </section>

                <form class="checkout-form" on:submit=on_submit>
                    <h2>"Delivery Details"</h2>
                    <label class="field">
                        <span>"Delivery Address *"</span>
                        <textarea
                            class="input"
                            rows="3"
                            prop:value=move || form.with(|draft| draft.address.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|draft| draft.address = value);
                            }
                        ></textarea>
                    </label>
                    <label class="field">
                        <span>"Phone"</span>
                        <input
                            class="input"
                            type="tel"
                            prop:value=move || form.with(|draft| draft.phone.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|draft| draft.phone = value);
                            }
                        />
                    </label>
                    <label class="field">
                        <span>"Notes"</span>
                        <textarea
                            class="input"
                            rows="2"
                            prop:value=move || form.with(|draft| draft.notes.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|draft| draft.notes = value);
                            }
                        ></textarea>
                    </label>
                    <Show when=move || form_error.get().is_some()>
                        <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Placing Order..." } else { "Place Order" }}
                    </button>
                </form>
            </div>
        </main>
    }
}
