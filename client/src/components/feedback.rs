//! Loading spinner and error banner shared by every data-backed page.

use leptos::prelude::*;

/// Centered spinner with a caption.
#[component]
pub fn LoadingPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-panel" role="status">
            <span class="loading-panel__spinner" aria-hidden="true"></span>
            <p class="loading-panel__message">{message}</p>
        </div>
    }
}

/// Red banner shown while `message` is set. With `on_retry`, renders a Retry
/// button that re-runs the originating request.
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-banner__text">{move || message.get().unwrap_or_default()}</span>
                {on_retry
                    .map(|retry| {
                        view! {
                            <button class="btn error-banner__retry" on:click=move |_| retry.run(())>
                                "Retry"
                            </button>
                        }
                    })}
            </div>
        </Show>
    }
}
