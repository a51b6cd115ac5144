//! Email + password sign-in for customers and distributors.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::role_toggle::RoleToggle;
use crate::net::types::UserType;
use crate::state::account::LoginForm;
use crate::state::session::SessionStore;
use crate::util::auth::home_route;
use crate::util::task;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (user_type, credentials) = match form.with_untracked(|draft| draft.to_credentials().map(|c| (draft.user_type, c))) {
            Ok(parts) => parts,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let navigate = navigate.clone();
        task::spawn(async move {
            match crate::net::auth::login(user_type, &credentials).await {
                Ok(signed_in) => {
                    session.replace(signed_in);
                    navigate(home_route(user_type), NavigateOptions::default());
                }
                Err(e) => {
                    info.set(e.describe("sign in"));
                    busy.set(false);
                }
            }
        });
    };

    let role = Signal::derive(move || form.with(|draft| draft.user_type));
    let on_role = Callback::new(move |user_type: UserType| form.update(|draft| draft.user_type = user_type));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"GadgetHub"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <RoleToggle role=role on_change=on_role />
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.with(|draft| draft.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|draft| draft.email = value);
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.with(|draft| draft.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|draft| draft.password = value);
                        }
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || format!("Sign in as {}", role.get().label())}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "New here? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
