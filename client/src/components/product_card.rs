//! Catalog grid card with an add-to-cart action.

use leptos::prelude::*;

use crate::config::api_config;
use crate::net::types::Product;
use crate::util::format::format_list_price;
use crate::util::image::{PLACEHOLDER_IMAGE, product_image_url};

#[component]
pub fn ProductCard(
    product: Product,
    /// True while this product's add-to-cart request is in flight.
    #[prop(into)]
    adding: Signal<bool>,
    on_add: Callback<Product>,
) -> impl IntoView {
    let image_url = product_image_url(&api_config().assets, product.image.as_deref());
    let image_failed = RwSignal::new(false);
    let price = format_list_price(product.price);
    let name = product.name.clone();
    let alt = product.name.clone();
    let description = product.description.clone();

    let on_click = move |_| {
        if !adding.get_untracked() {
            on_add.run(product.clone());
        }
    };

    view! {
        <article class="product-card">
            <div class="product-card__media">
                <img
                    class="product-card__image"
                    src=move || if image_failed.get() { PLACEHOLDER_IMAGE.to_owned() } else { image_url.clone() }
                    alt=alt
                    loading="lazy"
                    on:error=move |_| image_failed.set(true)
                />
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{name}</h3>
                <p class="product-card__description">{description}</p>
                <div class="product-card__footer">
                    <span class="product-card__price">{price}</span>
                    <button
                        class="btn btn--primary product-card__add"
                        disabled=move || adding.get()
                        on:click=on_click
                    >
                        {move || if adding.get() { "Adding..." } else { "Add to Cart" }}
                    </button>
                </div>
            </div>
        </article>
    }
}
