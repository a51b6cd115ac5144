//! Colored pill for an order status.

use leptos::prelude::*;

use crate::util::status::OrderStatus;

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let parsed = OrderStatus::parse(&status);
    let class = format!("status-badge {}", parsed.tone().class());
    let path = parsed.icon().svg_path();

    view! {
        <span class=class>
            <svg class="status-badge__icon" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
                <path fill-rule="evenodd" clip-rule="evenodd" d=path></path>
            </svg>
            <span class="status-badge__label">{parsed.label()}</span>
        </span>
    }
}
