//! Root component, HTML shell, and route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the two pieces of app-wide state every page may read:
//! the [`SessionStore`] and the [`OrderConfirmation`] handed from checkout to
//! the confirmation page. The session is restored from `localStorage` once
//! the app is running in the browser.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::cart::CartPage;
use crate::pages::checkout::CheckoutPage;
use crate::pages::distributor_dashboard::DistributorDashboardPage;
use crate::pages::home::HomePage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::my_orders::MyOrdersPage;
use crate::pages::order_status::OrderStatusPage;
use crate::pages::register::RegisterPage;
use crate::state::checkout::OrderConfirmation;
use crate::state::session::SessionStore;

/// Document shell used by the server renderer.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    provide_context(session);
    provide_context(RwSignal::new(OrderConfirmation::default()));

    // Effects only run in the browser, after hydration.
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css" />
        <Title text="GadgetHub" />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/home") view=HomePage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/cart") view=CartPage />
                <Route path=path!("/checkout") view=CheckoutPage />
                <Route path=path!("/order-status") view=OrderStatusPage />
                <Route path=path!("/distributor-dashboard") view=DistributorDashboardPage />
                <Route path=path!("/myOrders") view=MyOrdersPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="page not-found">
            <h1>"Page not found"</h1>
            <a class="btn btn--primary" href="/">
                "Back to GadgetHub"
            </a>
        </main>
    }
}
