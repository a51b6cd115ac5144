//! Distributor dashboard: confirmed order items and quotation submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads every confirmed item, then fans out one quotation request per item.
//! The fan-out shares the item load's ticket, so a retry or unmount discards
//! every straggler from the previous round. After a successful submission
//! only the submitted item's quotations are fetched again.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::feedback::{ErrorBanner, LoadingPanel};
use crate::components::navbar::Navbar;
use crate::net::types::{CartItem, Id, UserType};
use crate::state::quotations::{DashboardState, QuotationForm};
use crate::state::session::SessionStore;
use crate::state::view::{LoadKind, ViewPhase};
use crate::util::auth::install_role_redirect;
use crate::util::request_guard::{RequestGuard, Ticket};
use crate::util::task;

/// Fetch one item's quotations under `ticket` and file the result by id.
fn fetch_item_quotations(dashboard: RwSignal<DashboardState>, guard: &RequestGuard, ticket: Ticket, item_id: Id) {
    task::spawn_guarded(
        guard.clone(),
        ticket,
        crate::net::quotation::list_item_quotations(item_id),
        move |result| {
            let result = result.map_err(|e| {
                leptos::logging::warn!("quotations for item {item_id} failed: {e}");
                e.to_string()
            });
            dashboard.update(|state| state.quotations_loaded(item_id, result));
        },
    );
}

#[component]
pub fn DistributorDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    install_role_redirect(session, UserType::Distributor, use_navigate());

    let dashboard = RwSignal::new(DashboardState::default());
    let form = RwSignal::new(QuotationForm::default());
    let guard = RequestGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.retire()
    });

    let load = {
        let guard = guard.clone();
        move |kind: LoadKind| {
            let ticket = guard.begin();
            dashboard.update(|state| state.items.begin());
            let fan_out = guard.clone();
            task::spawn_guarded(guard.clone(), ticket, crate::net::cart::list_confirmed_items(), move |result| {
                match result {
                    Ok(items) => {
                        let ids: Vec<Id> = items.iter().map(|item| item.id).collect();
                        dashboard.update(|state| state.items_loaded(items));
                        for item_id in ids {
                            fetch_item_quotations(dashboard, &fan_out, ticket, item_id);
                        }
                    }
                    Err(e) => dashboard.update(|state| state.items.fail(kind, e.describe("load confirmed items"))),
                }
            });
        }
    };

    let distributor = Memo::new(move |_| session.get().distributor_id());
    {
        let load = load.clone();
        Effect::new(move || {
            if distributor.get().is_some() {
                load(LoadKind::Mount);
            }
        });
    }
    let on_retry = Callback::new(move |()| load(LoadKind::Manual));

    let close_form = move || {
        dashboard.update(|state| {
            state.selected = None;
            state.submit_error = None;
        });
        form.set(QuotationForm::default());
    };

    let on_select = Callback::new(move |item_id: Id| {
        dashboard.update(|state| {
            state.selected = Some(item_id);
            state.submit_error = None;
        });
        form.set(QuotationForm::default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(item_id) = dashboard.with_untracked(|state| (!state.submitting).then_some(state.selected).flatten()) else {
            return;
        };
        let Some(distributor_id) = session.get_untracked().distributor_id() else {
            dashboard.update(|state| state.submit_error = Some("No distributor ID found. Please log in again.".to_owned()));
            return;
        };
        let request = match form.with_untracked(|draft| draft.to_request(distributor_id, item_id)) {
            Ok(request) => request,
            Err(message) => {
                dashboard.update(|state| state.submit_error = Some(message.to_owned()));
                return;
            }
        };
        dashboard.update(|state| {
            state.submitting = true;
            state.submit_error = None;
        });

        let guard = guard.clone();
        task::spawn(async move {
            let result = crate::net::quotation::submit_quotation(&request).await;
            if !guard.is_live() {
                return;
            }
            dashboard.update(|state| state.submitting = false);
            match result {
                Ok(()) => {
                    close_form();
                    dashboard.update(|state| state.quotations_reloading(item_id));
                    fetch_item_quotations(dashboard, &guard, guard.current(), item_id);
                }
                Err(e) => dashboard.update(|state| state.submit_error = Some(e.describe("submit quotation"))),
            }
        });
    };

    let welcome = move || format!("Welcome back, {}", session.get().display_name().unwrap_or("Distributor"));
    let selected_name = move || dashboard.with(|state| state.selected_item().map(|item| item.item_name.clone()));

    view! {
        <Navbar />
        <main class="page dashboard-page">
            <header class="page__header">
                <h1>"Distributor Dashboard"</h1>
                <p class="page__subtitle">{welcome}</p>
            </header>

            <ErrorBanner
                message=Signal::derive(move || dashboard.with(|state| state.items.error.clone()))
                on_retry=on_retry
            />

            <div class="dashboard-page__layout">
                <section class="panel">
                    <h2>"Confirmed Orders"</h2>
                    {move || match dashboard.with(|state| state.items.phase()) {
                        ViewPhase::Loading => {
                            view! { <LoadingPanel message="Loading distributor dashboard..." /> }.into_any()
                        }
                        ViewPhase::Failed => ().into_any(),
                        ViewPhase::Empty => {
                            view! {
                                <div class="empty-state empty-state--compact">
                                    <h3>"No confirmed orders"</h3>
                                    <p>"No confirmed orders are available at the moment."</p>
                                </div>
                            }
                                .into_any()
                        }
                        ViewPhase::Populated => {
                            view! {
                                <For
                                    each=move || dashboard.with(|state| state.items.items.clone())
                                    key=|item| item.id
                                    children=move |item: CartItem| {
                                        view! { <ConfirmedItemRow item=item dashboard=dashboard on_select=on_select /> }
                                    }
                                />
                            }
                                .into_any()
                        }
                    }}
                </section>

                <section class="panel">
                    <h2>"Submit Quotation"</h2>
                    <Show
                        when=move || selected_name().is_some()
                        fallback=|| {
                            view! {
                                <div class="empty-state empty-state--compact">
                                    <h3>"Select an item"</h3>
                                    <p>"Choose an item from the confirmed orders to submit a quotation."</p>
                                </div>
                            }
                        }
                    >
                        <form class="quotation-form" on:submit=on_submit.clone()>
                            <p class="quotation-form__item">
                                "Item: "
                                <strong>{move || selected_name().unwrap_or_default()}</strong>
                            </p>
                            <label class="field">
                                <span>"Price per unit"</span>
                                <input
                                    class="input"
                                    type="number"
                                    step="0.01"
                                    placeholder="Enter price per unit"
                                    prop:value=move || form.with(|draft| draft.price.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|draft| draft.price = value);
                                    }
                                />
                            </label>
                            <label class="field">
                                <span>"Available Quantity"</span>
                                <input
                                    class="input"
                                    type="number"
                                    placeholder="Enter available quantity"
                                    prop:value=move || form.with(|draft| draft.quantity.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|draft| draft.quantity = value);
                                    }
                                />
                            </label>
                            <label class="field">
                                <span>"Estimated Delivery Date"</span>
                                <input
                                    class="input"
                                    type="date"
                                    prop:value=move || form.with(|draft| draft.delivery_date.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|draft| draft.delivery_date = value);
                                    }
                                />
                            </label>
                            <Show when=move || dashboard.with(|state| state.submit_error.is_some())>
                                <p class="form-error">
                                    {move || dashboard.with(|state| state.submit_error.clone().unwrap_or_default())}
                                </p>
                            </Show>
                            <div class="quotation-form__actions">
                                <button
                                    class="btn btn--primary"
                                    type="submit"
                                    disabled=move || dashboard.with(|state| state.submitting)
                                >
                                    {move || {
                                        if dashboard.with(|state| state.submitting) { "Submitting..." } else { "Submit Quotation" }
                                    }}
                                </button>
                                <button class="btn" type="button" on:click=move |_| close_form()>
                                    "Cancel"
                                </button>
                            </div>
                        </form>
                    </Show>
                </section>
            </div>
        </main>
    }
}

#[component]
fn ConfirmedItemRow(item: CartItem, dashboard: RwSignal<DashboardState>, on_select: Callback<Id>) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let CartItem { id, item_name, quantity, status, .. } = item;
    let quotation_status = move || {
        let distributor_id = session.get().distributor_id();
        dashboard
            .with(|state| state.status_for(id, distributor_id))
            .map_or("Loading...", |status| status.label())
    };

    view! {
        <article class="confirmed-item">
            <div class="confirmed-item__info">
                <h3>{item_name}</h3>
                <p>{format!("Quantity: {quantity}")}</p>
                <p>{format!("Status: {status}")}</p>
                <p>"Quotation Status: " <strong>{quotation_status}</strong></p>
            </div>
            <button class="btn btn--primary" on:click=move |_| on_select.run(id)>
                "Submit Quotation"
            </button>
        </article>
    }
}
