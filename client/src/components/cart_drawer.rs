//! Slide-over cart shown on the catalog page.
//!
//! DESIGN
//! ======
//! Purely presentational: quantity and removal changes are reported through
//! callbacks and the owning page decides how to apply them.

use leptos::prelude::*;

use crate::config::api_config;
use crate::net::types::{CartItem, Id};
use crate::state::cart::{total_items, total_price};
use crate::util::format::{format_list_price, pluralize};
use crate::util::image::product_image_url;

#[component]
pub fn CartDrawer(
    #[prop(into)] items: Signal<Vec<CartItem>>,
    on_remove: Callback<Id>,
    /// `(item id, delta)` for the `-` / `+` buttons.
    on_adjust: Callback<(Id, i64)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let count = move || items.with(|items| total_items(items));
    let total = move || items.with(|items| total_price(items));

    view! {
        <aside class="cart-drawer" aria-label="Shopping cart">
            <header class="cart-drawer__header">
                <h2>"Shopping Cart"</h2>
                <button class="btn cart-drawer__close" on:click=move |_| on_close.run(()) aria-label="Close cart">
                    "✕"
                </button>
            </header>
            <div class="cart-drawer__items">
                <Show
                    when=move || items.with(|items| !items.is_empty())
                    fallback=|| {
                        view! {
                            <div class="empty-state empty-state--compact">
                                <h3>"Your cart is empty"</h3>
                                <p>"Start shopping to add items to your cart"</p>
                            </div>
                        }
                    }
                >
                    <For each=move || items.get() key=|item| (item.id, item.quantity) let:item>
                        <CartDrawerLine item=item on_remove=on_remove on_adjust=on_adjust />
                    </For>
                </Show>
            </div>
            <Show when=move || items.with(|items| !items.is_empty())>
                <footer class="cart-drawer__footer">
                    <div class="cart-drawer__totals">
                        <span>{move || pluralize(count(), "item")}</span>
                        <strong>{move || format!("${:.2}", total())}</strong>
                    </div>
                    <a class="btn btn--primary cart-drawer__checkout" href="/checkout">
                        "Proceed to Checkout"
                    </a>
                </footer>
            </Show>
        </aside>
    }
}

#[component]
fn CartDrawerLine(item: CartItem, on_remove: Callback<Id>, on_adjust: Callback<(Id, i64)>) -> impl IntoView {
    let id = item.id;
    let image = product_image_url(&api_config().assets, item.image.as_deref());

    view! {
        <div class="cart-line">
            <img class="cart-line__image" src=image alt=item.item_name.clone() />
            <div class="cart-line__info">
                <h4 class="cart-line__name">{item.item_name.clone()}</h4>
                <p class="cart-line__price">{format_list_price(item.price)}</p>
            </div>
            <div class="cart-line__controls">
                <button class="btn cart-line__step" on:click=move |_| on_adjust.run((id, -1)) aria-label="Decrease quantity">
                    "-"
                </button>
                <span class="cart-line__quantity">{item.quantity}</span>
                <button class="btn cart-line__step" on:click=move |_| on_adjust.run((id, 1)) aria-label="Increase quantity">
                    "+"
                </button>
                <button class="btn cart-line__remove" on:click=move |_| on_remove.run(id) title="Remove item">
                    "Remove"
                </button>
            </div>
        </div>
    }
}
