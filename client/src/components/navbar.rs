//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by every page. Links depend on the signed-in role: distributors
//! get the dashboard, customers get checkout, order history, and the cart
//! with an item-count badge.

use leptos::prelude::*;

use crate::net::types::UserType;
use crate::state::session::SessionStore;
use crate::util::task;

#[component]
pub fn Navbar(
    /// Item count for the cart badge; hidden when absent or zero.
    #[prop(optional)]
    cart_count: Option<Signal<i64>>,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let role = move || session.get().user_type();
    let badge = move || cart_count.map_or(0, |count| count.get());

    let on_logout = move |_| {
        session.clear();
        task::spawn(async {
            if let Err(e) = crate::net::auth::logout().await {
                leptos::logging::warn!("logout request failed: {e}");
            }
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            }
        });
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "GadgetHub"
            </a>
            <div class="navbar__links">
                <a href="/home" class="navbar__link">
                    "Home"
                </a>
                <Show when=move || role() == Some(UserType::Distributor)>
                    <a href="/distributor-dashboard" class="navbar__link">
                        "Dashboard"
                    </a>
                </Show>
                <Show when=move || role() == Some(UserType::Customer)>
                    <a href="/checkout" class="navbar__link">
                        "Checkout"
                    </a>
                    <a href="/myOrders" class="navbar__link">
                        "My Orders"
                    </a>
                    <a href="/cart" class="navbar__link navbar__cart">
                        "Cart"
                        <Show when=move || { badge() > 0 }>
                            <span class="navbar__badge">{badge}</span>
                        </Show>
                    </a>
                </Show>
                <Show
                    when=move || session.get().session.is_some()
                    fallback=|| {
                        view! {
                            <a href="/login" class="btn navbar__login">
                                "Login"
                            </a>
                            <a href="/register" class="btn btn--primary navbar__signup">
                                "Sign Up"
                            </a>
                        }
                    }
                >
                    <span class="navbar__welcome">
                        "Welcome, "
                        {move || session.get().display_name().unwrap_or_default().to_owned()}
                    </span>
                    <button class="btn btn--danger navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
