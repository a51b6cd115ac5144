//! Post-checkout confirmation with the placed order's live status.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::feedback::{ErrorBanner, LoadingPanel};
use crate::components::navbar::Navbar;
use crate::components::status_badge::StatusBadge;
use crate::net::types::{Id, Order};
use crate::state::checkout::{OrderConfirmation, parse_order_id};
use crate::util::format::{format_delivery_time, format_price};
use crate::util::request_guard::RequestGuard;
use crate::util::task;

const NEXT_STEPS: [(&str, &str); 4] = [
    ("Order Review", "Our team reviews your order and forwards it to distributors."),
    ("Quotations", "Distributors respond with prices and delivery estimates."),
    ("Confirmation", "We confirm the best offer and contact you with the details."),
    ("Delivery", "Your gadgets are shipped to the address you provided."),
];

#[component]
pub fn OrderStatusPage() -> impl IntoView {
    let confirmation = expect_context::<RwSignal<OrderConfirmation>>();
    let query = use_query_map();

    let order_id = Memo::new(move |_| {
        let from_query = query.with(|params| parse_order_id(params.get("id").as_deref()));
        from_query.or_else(|| confirmation.with(|c| c.order_id))
    });

    let order = RwSignal::new(None::<Order>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let guard = RequestGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.retire()
    });

    let load = move |id: Id| {
        let ticket = guard.begin();
        loading.set(true);
        error.set(None);
        task::spawn_guarded(guard.clone(), ticket, crate::net::order::get_order(id), move |result| {
            loading.set(false);
            match result {
                Ok(found) => order.set(Some(found)),
                Err(e) => error.set(Some(e.describe("load order status"))),
            }
        });
    };

    {
        let load = load.clone();
        Effect::new(move || {
            if let Some(id) = order_id.get() {
                load(id);
            }
        });
    }
    let on_retry = Callback::new(move |()| {
        if let Some(id) = order_id.get_untracked() {
            load(id);
        }
    });

    view! {
        <Navbar />
        <main class="page order-status-page">
            <section class="confirmation-card">
                <div class="confirmation-card__icon" aria-hidden="true">
                    "✓"
                </div>
                <h1>"Order Placed Successfully!"</h1>
                <p class="confirmation-card__message">{move || confirmation.with(|c| c.message_text().to_owned())}</p>
                <Show when=move || order_id.get().is_some()>
                    <p class="confirmation-card__order-id">
                        "Order ID: "
                        <strong>{move || order_id.get().map(|id| format!("#{id}")).unwrap_or_default()}</strong>
                    </p>
                </Show>
            </section>

            <ErrorBanner message=error on_retry=on_retry />

            <Show when=move || loading.get()>
                <LoadingPanel message="Checking order status..." />
            </Show>
            {move || {
                order
                    .get()
                    .map(|current| {
                        view! {
                            <section class="order-status-card">
                                <header class="order-status-card__header">
                                    <h2>{format!("Order #{}", current.id)}</h2>
                                    <StatusBadge status=current.status.clone() />
                                </header>
                                <dl class="order-status-card__facts">
                                    <dt>"Total"</dt>
                                    <dd>{format_price(current.price)}</dd>
                                    <dt>"Delivery Address"</dt>
                                    <dd>{current.address.clone()}</dd>
                                    <dt>"Delivery Time"</dt>
                                    <dd>{format_delivery_time(current.delivery_time.as_ref())}</dd>
                                </dl>
                            </section>
                        }
                    })
            }}

            <section class="next-steps">
                <h2>"What happens next?"</h2>
                <ol class="next-steps__list">
                    {NEXT_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, (title, body))| {
                            view! {
                                <li class="next-steps__item">
                                    <span class="next-steps__number">{index + 1}</span>
                                    <div>
                                        <h3>{*title}</h3>
                                        <p>{*body}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>

            <div class="order-status-page__actions">
                <a class="btn" href="/home">
                    "Continue Shopping"
                </a>
                <a class="btn btn--primary" href="/myOrders">
                    "View Order Details"
                </a>
            </div>
        </main>
    }
}
