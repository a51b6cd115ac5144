//! Public landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

const FEATURES: [&str; 4] = ["Fast Delivery", "Best Prices", "Trusted Quality", "24/7 Support"];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Navbar />
        <main class="landing">
            <section class="landing__hero">
                <span class="landing__tag">"New Products Available"</span>
                <h1>"Discover Top Tech at " <span class="landing__brand">"Gadget Hub"</span></h1>
                <p class="landing__lead">
                    "Your one-stop destination for the latest gadgets from trusted distributors. "
                    "Compare prices, shop with confidence, and enjoy fast doorstep delivery."
                </p>
                <ul class="landing__features">
                    {FEATURES
                        .into_iter()
                        .map(|feature| view! { <li class="landing__feature">"✓ " {feature}</li> })
                        .collect_view()}
                </ul>
                <div class="landing__actions">
                    <a class="btn btn--primary" href="/register">
                        "Get Started"
                    </a>
                    <a class="btn" href="/login">
                        "Sign In"
                    </a>
                    <a class="btn btn--accent" href="/home">
                        "Shop Now"
                    </a>
                </div>
            </section>
        </main>
    }
}
