//! Full-page cart for signed-in customers.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::feedback::{ErrorBanner, LoadingPanel};
use crate::components::navbar::Navbar;
use crate::config::api_config;
use crate::net::types::{CartItem, Id, UserType};
use crate::state::cart::{remove_local, total_items, total_price};
use crate::state::session::SessionStore;
use crate::state::view::{ListView, LoadKind, ViewPhase};
use crate::util::auth::install_role_redirect;
use crate::util::format::{format_list_price, pluralize};
use crate::util::image::product_image_url;
use crate::util::request_guard::RequestGuard;
use crate::util::task;

#[component]
pub fn CartPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    install_role_redirect(session, UserType::Customer, use_navigate());

    let cart = RwSignal::new(ListView::<CartItem>::default());
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

    let on_remove = Callback::new(move |item_id: Id| {
        cart.update(|view| {
            remove_local(&mut view.items, item_id);
        });
        let guard = guard.clone();
        task::spawn(async move {
            if let Err(e) = crate::net::cart::remove_from_cart(item_id).await {
                leptos::logging::warn!("cart remove failed for item {item_id}: {e}");
                if guard.is_live() {
                    cart.update(|view| view.report(e.describe("remove item")));
                }
            }
        });
    });
    let on_retry = Callback::new(move |()| load(LoadKind::Manual));

    let count = Signal::derive(move || cart.with(|view| total_items(&view.items)));

    view! {
        <Navbar cart_count=count />
        <main class="page cart-page">
            <header class="page__header">
                <h1>"Shopping Cart"</h1>
            </header>

            <ErrorBanner message=Signal::derive(move || cart.with(|view| view.error.clone())) on_retry=on_retry />

            {move || match cart.with(ListView::phase) {
                ViewPhase::Loading => view! { <LoadingPanel message="Loading your cart..." /> }.into_any(),
                ViewPhase::Failed => ().into_any(),
                ViewPhase::Empty => {
                    view! {
                        <div class="empty-state">
                            <h2>"Your cart is empty"</h2>
                            <p>"Browse the catalog and add something you like."</p>
                            <a class="btn btn--primary" href="/home">
                                "Continue Shopping"
                            </a>
                        </div>
                    }
                        .into_any()
                }
                ViewPhase::Populated => {
                    view! {
                        <section class="cart-page__items">
                            <For each=move || cart.get().items key=|item| item.id let:item>
                                <CartRow item=item on_remove=on_remove />
                            </For>
                        </section>
                        <footer class="cart-page__summary">
                            <p>{move || format!("Total items: {}", count.get())}</p>
                            <p class="cart-page__total">
                                {move || format!("Total: ${:.2}", cart.with(|view| total_price(&view.items)))}
                            </p>
                            <div class="cart-page__actions">
                                <a class="btn" href="/home">
                                    "Continue Shopping"
                                </a>
                                <a class="btn btn--primary" href="/checkout">
                                    "Proceed to Checkout"
                                </a>
                            </div>
                        </footer>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}

#[component]
fn CartRow(item: CartItem, on_remove: Callback<Id>) -> impl IntoView {
    let CartItem { id, item_name, quantity, status, price, image } = item;
    let image = product_image_url(&api_config().assets, image.as_deref());

    view! {
        <article class="cart-row">
            <img class="cart-row__image" src=image alt=item_name.clone() />
            <div class="cart-row__info">
                <h3>{item_name}</h3>
                <p class="muted">{pluralize(quantity, "unit")}</p>
                <p class="cart-row__status">{status}</p>
            </div>
            <span class="cart-row__price">{format_list_price(price)}</span>
            <button class="btn btn--danger" on:click=move |_| on_remove.run(id)>
                "Remove"
            </button>
        </article>
    }
}
