//! Customer order history with a summary panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches once the session is restored and again whenever the customer
//! identity changes. Without a customer session the page shows an explicit
//! error and issues no request.

use leptos::prelude::*;

use crate::components::feedback::{ErrorBanner, LoadingPanel};
use crate::components::navbar::Navbar;
use crate::components::status_badge::StatusBadge;
use crate::net::types::Order;
use crate::state::orders::{HistoryRequest, NO_CUSTOMER_MESSAGE, OrderSummary, is_trackable_status, offers_retry};
use crate::state::session::SessionStore;
use crate::state::view::{ListView, LoadKind, ViewPhase};
use crate::util::format::{format_delivery_time, format_price, pluralize};
use crate::util::request_guard::RequestGuard;
use crate::util::task;

#[component]
pub fn MyOrdersPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let orders = RwSignal::new(ListView::<Order>::default());
    let guard = RequestGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.retire()
    });

    let load = move |kind: LoadKind| {
        let customer_id = match HistoryRequest::for_session(&session.get_untracked()) {
            HistoryRequest::Pending => return,
            HistoryRequest::NoCustomer => {
                guard.begin();
                orders.update(|view| view.fail(LoadKind::Mount, NO_CUSTOMER_MESSAGE.to_owned()));
                return;
            }
            HistoryRequest::Fetch(customer_id) => customer_id,
        };
        let ticket = guard.begin();
        orders.update(ListView::begin);
        task::spawn_guarded(
            guard.clone(),
            ticket,
            crate::net::order::list_my_orders(customer_id),
            move |result| match result {
                Ok(items) => orders.update(|view| view.succeed(items)),
                Err(e) => orders.update(|view| view.fail(kind, e.describe("load orders"))),
            },
        );
    };

    let request = Memo::new(move |_| HistoryRequest::for_session(&session.get()));
    let load_on_identity = load.clone();
    Effect::new(move || {
        if request.get() != HistoryRequest::Pending {
            load_on_identity(LoadKind::Mount);
        }
    });
    let on_retry = Callback::new(move |()| load(LoadKind::Manual));

    let error = move || orders.with(|view| view.error.clone());

    let phase = move || orders.with(ListView::phase);
    let summary = move || orders.with(|view| OrderSummary::from_orders(&view.items));

    view! {
        <Navbar />
        <main class="page orders-page">
            <header class="page__header">
                <h1>"My Orders"</h1>
                <p class="page__subtitle">"Track and manage your order history"</p>
            </header>

            <ErrorBanner message=Signal::derive(move || error().filter(|e| offers_retry(e))) on_retry=on_retry />
            <ErrorBanner message=Signal::derive(move || error().filter(|e| !offers_retry(e))) />

            {move || match phase() {
                ViewPhase::Loading => view! { <LoadingPanel message="Loading your orders..." /> }.into_any(),
                ViewPhase::Failed => ().into_any(),
                ViewPhase::Empty => {
                    view! {
                        <div class="empty-state">
                            <h2>"No orders found"</h2>
                            <p>"You haven't placed any orders yet. Start shopping to see your orders here."</p>
                            <a class="btn btn--primary" href="/home">
                                "Start Shopping"
                            </a>
                        </div>
                    }
                        .into_any()
                }
                ViewPhase::Populated => {
                    view! {
                        <section class="orders-page__list">
                            <For each=move || orders.get().items key=|order| order.id let:order>
                                <OrderCard order=order />
                            </For>
                        </section>
                        <OrderSummaryPanel summary=Signal::derive(summary) />
                    }
                        .into_any()
                }
            }}
        </main>
    }
}

#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let Order { id, status, price, address, delivery_time, products } = order;
    let product_count = i64::try_from(products.len()).unwrap_or(i64::MAX);
    let trackable = is_trackable_status(&status);
    let details_href = format!("/order-status?id={id}");
    let track_href = details_href.clone();

    view! {
        <article class="order-card">
            <header class="order-card__header">
                <div class="order-card__title">
                    <h3>{format!("Order #{id}")}</h3>
                    <StatusBadge status=status />
                </div>
                <div class="order-card__totals">
                    <p class="order-card__price">{format_price(price)}</p>
                    <p class="order-card__count">{pluralize(product_count, "item")}</p>
                </div>
            </header>
            <div class="order-card__details">
                <div class="order-card__section">
                    <h4>"Delivery Address"</h4>
                    <p>{address}</p>
                </div>
                <div class="order-card__section">
                    <h4>"Delivery Time"</h4>
                    <p>{format_delivery_time(delivery_time.as_ref())}</p>
                </div>
                <div class="order-card__section">
                    <h4>{format!("Products ({product_count})")}</h4>
                    {if products.is_empty() {
                        view! { <p class="muted">"No products listed"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="order-card__products">
                                {products.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                            </ul>
                        }
                            .into_any()
                    }}
                </div>
            </div>
            <footer class="order-card__footer">
                <span class="muted">{format!("Order ID: {id}")}</span>
                <div class="order-card__actions">
                    <a class="btn" href=details_href>
                        "View Details"
                    </a>
                    <Show when=move || trackable>
                        <a class="btn btn--accent" href=track_href.clone()>
                            "Track Order"
                        </a>
                    </Show>
                </div>
            </footer>
        </article>
    }
}

#[component]
fn OrderSummaryPanel(summary: Signal<OrderSummary>) -> impl IntoView {
    view! {
        <section class="order-summary">
            <h3>"Order Summary"</h3>
            <div class="order-summary__grid">
                <div class="order-summary__cell">
                    <strong>{move || summary.get().total_orders}</strong>
                    <span>"Total Orders"</span>
                </div>
                <div class="order-summary__cell order-summary__cell--green">
                    <strong>{move || summary.get().confirmed}</strong>
                    <span>"Confirmed"</span>
                </div>
                <div class="order-summary__cell order-summary__cell--blue">
                    <strong>{move || summary.get().processing}</strong>
                    <span>"Processing"</span>
                </div>
                <div class="order-summary__cell order-summary__cell--indigo">
                    <strong>{move || summary.get().total_items}</strong>
                    <span>"Total Items"</span>
                </div>
                <div class="order-summary__cell order-summary__cell--orange">
                    <strong>{move || format_price(Some(summary.get().total_value))}</strong>
                    <span>"Total Value"</span>
                </div>
            </div>
        </section>
    }
}
