//! Product catalog with debounced search and the cart drawer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Products load on mount. Typing in the search box waits for
//! [`SEARCH_DEBOUNCE`] of quiet before asking the product service; when that
//! search fails the grid falls back to a local match. Signed-in customers
//! also get their cart loaded for the drawer and the navbar badge.
//!
//! Three independent request guards cover the product list, the search, and
//! the cart, so a slow catalog reload never discards a fresh cart response.

use leptos::prelude::*;

use crate::components::cart_drawer::CartDrawer;
use crate::components::feedback::{ErrorBanner, LoadingPanel};
use crate::components::navbar::Navbar;
use crate::components::product_card::ProductCard;
use crate::config::SEARCH_DEBOUNCE;
use crate::net::types::{AddToCartRequest, CartItem, Id, Product};
use crate::state::cart::{QuantityChange, adjust_quantity, remove_local, total_items};
use crate::state::catalog::{CatalogState, LOGIN_TO_ADD_MESSAGE};
use crate::state::session::SessionStore;
use crate::state::view::{ListView, LoadKind};
use crate::util::request_guard::RequestGuard;
use crate::util::task;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let catalog = RwSignal::new(CatalogState::default());
    let cart = RwSignal::new(ListView::<CartItem>::default());
    let show_cart = RwSignal::new(false);

    let products_guard = RequestGuard::new();
    let search_guard = RequestGuard::new();
    let cart_guard = RequestGuard::new();
    on_cleanup({
        let guards = [products_guard.clone(), search_guard.clone(), cart_guard.clone()];
        move || guards.iter().for_each(RequestGuard::retire)
    });

    let load_products = {
        let guard = products_guard.clone();
        move |kind: LoadKind| {
            let ticket = guard.begin();
            catalog.update(|state| state.products.begin());
            task::spawn_guarded(guard.clone(), ticket, crate::net::product::list_products(), move |result| {
                match result {
                    Ok(products) => catalog.update(|state| state.products_loaded(products)),
                    Err(e) => catalog.update(|state| state.products_failed(kind, e.describe("load products"))),
                }
            });
        }
    };

    let load_cart = {
        let guard = cart_guard.clone();
        move |kind: LoadKind| {
            let ticket = guard.begin();
            let Some(customer_id) = session.get_untracked().customer_id() else {
                cart.update(|view| view.succeed(Vec::new()));
                return;
            };
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

    let remove_remote = {
        let guard = cart_guard.clone();
        move |item_id: Id| {
            let guard = guard.clone();
            task::spawn(async move {
                if let Err(e) = crate::net::cart::remove_from_cart(item_id).await {
                    leptos::logging::warn!("cart remove failed for item {item_id}: {e}");
                    if guard.is_live() {
                        cart.update(|view| view.report(e.describe("remove item")));
                    }
                }
            });
        }
    };

    {
        let load_products = load_products.clone();
        Effect::new(move || load_products(LoadKind::Mount));
    }

    let customer = Memo::new(move |_| {
        let state = session.get();
        state.restored.then(|| state.customer_id())
    });
    {
        let load_cart = load_cart.clone();
        Effect::new(move || {
            if customer.get().is_some() {
                load_cart(LoadKind::Mount);
            }
        });
    }

    let on_search_input = {
        let guard = search_guard.clone();
        move |ev: leptos::ev::Event| {
            let term = event_target_value(&ev);
            catalog.update(|state| state.set_search_term(term.clone()));
            let ticket = guard.begin();
            if term.trim().is_empty() {
                return;
            }
            let debounced = {
                let guard = guard.clone();
                let term = term.trim().to_owned();
                async move {
                    task::sleep(SEARCH_DEBOUNCE).await;
                    if !guard.accepts(ticket) {
                        return None;
                    }
                    Some((crate::net::product::search_products(&term).await, term))
                }
            };
            task::spawn_guarded(guard.clone(), ticket, debounced, move |outcome| {
                let Some((result, term)) = outcome else {
                    return;
                };
                if !catalog.with_untracked(|state| state.is_current_term(&term)) {
                    return;
                }
                match result {
                    Ok(results) => catalog.update(|state| state.search_succeeded(results)),
                    Err(e) => {
                        leptos::logging::warn!("search failed, filtering locally: {e}");
                        catalog.update(CatalogState::search_failed);
                    }
                }
            });
        }
    };

    let on_add = {
        let guard = cart_guard.clone();
        let load_cart = load_cart.clone();
        Callback::new(move |product: Product| {
            let Some(customer_id) = session.get_untracked().customer_id() else {
                catalog.update(|state| state.cart_error = Some(LOGIN_TO_ADD_MESSAGE.to_owned()));
                return;
            };
            let product_id = product.id;
            catalog.update(|state| {
                state.adding.insert(product_id);
                state.cart_error = None;
            });
            let request = AddToCartRequest { customer_id, product_id, quantity: 1 };
            let guard = guard.clone();
            let load_cart = load_cart.clone();
            task::spawn(async move {
                let result = crate::net::cart::add_to_cart(&request).await;
                if !guard.is_live() {
                    return;
                }
                catalog.update(|state| {
                    state.adding.remove(&product_id);
                });
                match result {
                    Ok(()) => load_cart(LoadKind::Manual),
                    Err(e) => catalog.update(|state| state.cart_error = Some(e.describe("add item to cart"))),
                }
            });
        })
    };

    let on_remove = {
        let remove_remote = remove_remote.clone();
        Callback::new(move |item_id: Id| {
            cart.update(|view| {
                remove_local(&mut view.items, item_id);
            });
            remove_remote(item_id);
        })
    };

    let on_adjust = Callback::new(move |(item_id, delta): (Id, i64)| {
        let change = cart.try_update(|view| adjust_quantity(&mut view.items, item_id, delta)).flatten();
        if change == Some(QuantityChange::Removed) {
            remove_remote(item_id);
        }
    });

    let on_retry_products = {
        let load_products = load_products.clone();
        Callback::new(move |()| load_products(LoadKind::Manual))
    };
    let on_retry_cart = Callback::new(move |()| {
        catalog.update(|state| state.cart_error = None);
        load_cart(LoadKind::Manual);
    });

    let cart_count = Signal::derive(move || cart.with(|view| total_items(&view.items)));
    let cart_message = Signal::derive(move || {
        catalog
            .with(|state| state.cart_error.clone())
            .or_else(|| cart.with(|view| view.error.clone()))
    });
    let is_customer = move || session.get().customer_id().is_some();

    view! {
        <Navbar cart_count=cart_count />
        <main class="page catalog-page">
            <header class="catalog-page__hero">
                <h1>"Welcome to GadgetHub"</h1>
                <p class="page__subtitle">"Discover the latest gadgets at the best prices"</p>
                <div class="catalog-page__toolbar">
                    <input
                        class="input catalog-page__search"
                        type="search"
                        placeholder="Search products..."
                        prop:value=move || catalog.with(|state| state.search_term.clone())
                        on:input=on_search_input
                    />
                    <Show when=is_customer>
                        <button class="btn btn--primary catalog-page__cart-toggle" on:click=move |_| show_cart.update(|open| *open = !*open)>
                            {move || format!("Cart ({})", cart_count.get())}
                        </button>
                    </Show>
                </div>
            </header>

            <ErrorBanner
                message=Signal::derive(move || catalog.with(|state| state.products.error.clone()))
                on_retry=on_retry_products
            />
            <ErrorBanner message=cart_message on_retry=on_retry_cart />

            {move || {
                let (loading, failed_empty, empty) = catalog.with(|state| {
                    (
                        state.products.loading,
                        state.products.items.is_empty() && state.products.error.is_some(),
                        state.results.is_empty(),
                    )
                });
                if loading {
                    view! { <LoadingPanel message="Loading products..." /> }.into_any()
                } else if failed_empty {
                    ().into_any()
                } else if empty {
                    let (title, hint) = catalog.with(CatalogState::empty_message);
                    view! {
                        <div class="empty-state">
                            <h2>{title}</h2>
                            <p>{hint}</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <section class="product-grid">
                            <For
                                each=move || catalog.with(|state| state.results.clone())
                                key=|product| product.id
                                children=move |product: Product| {
                                    let id = product.id;
                                    view! {
                                        <ProductCard
                                            product=product
                                            adding=Signal::derive(move || catalog.with(|state| state.is_adding(id)))
                                            on_add=on_add
                                        />
                                    }
                                }
                            />
                        </section>
                    }
                        .into_any()
                }
            }}

            <Show when=move || show_cart.get() && is_customer()>
                <CartDrawer
                    items=Signal::derive(move || cart.with(|view| view.items.clone()))
                    on_remove=on_remove
                    on_adjust=on_adjust
                    on_close=Callback::new(move |()| show_cart.set(false))
                />
            </Show>
        </main>
    }
}
