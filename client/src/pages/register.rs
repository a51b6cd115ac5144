//! Account creation for customers and distributors.
//!
//! When the auth service echoes the new identity the visitor is signed in
//! immediately; a bare acknowledgement sends them to `/login` instead.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::role_toggle::RoleToggle;
use crate::net::types::UserType;
use crate::state::account::RegisterForm;
use crate::state::session::SessionStore;
use crate::util::auth::home_route;
use crate::util::task;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (user_type, registration) =
            match form.with_untracked(|draft| draft.to_registration().map(|r| (draft.user_type, r))) {
                Ok(parts) => parts,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let navigate = navigate.clone();
        task::spawn(async move {
            match crate::net::auth::register(user_type, &registration).await {
                Ok(Some(created)) => {
                    session.replace(created);
                    navigate(home_route(user_type), NavigateOptions::default());
                }
                Ok(None) => navigate("/login", NavigateOptions::default()),
                Err(e) => {
                    info.set(e.describe("register"));
                    busy.set(false);
                }
            }
        });
    };

    let role = Signal::derive(move || form.with(|draft| draft.user_type));
    let on_role = Callback::new(move |user_type: UserType| form.update(|draft| draft.user_type = user_type));

    let field = move |field: Field| {
        view! {
            <input
                class="login-input"
                type=field.input_type()
                placeholder=field.placeholder()
                prop:value=move || form.with(|draft| field.value(draft).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|draft| *field.slot(draft) = value);
                }
            />
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"GadgetHub"</h1>
                <p class="login-card__subtitle">"Create your account"</p>
                <RoleToggle role=role on_change=on_role />
                <form class="login-form" on:submit=on_submit>
                    {Field::ALL.into_iter().map(field).collect_view()}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || format!("Register as {}", role.get().label())}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Address,
}

impl Field {
    const ALL: [Self; 6] = [Self::Name, Self::Email, Self::Password, Self::ConfirmPassword, Self::Phone, Self::Address];

    fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "you@example.com",
            Self::Password => "Password (min. 6 characters)",
            Self::ConfirmPassword => "Confirm password",
            Self::Phone => "Phone (optional)",
            Self::Address => "Address (optional)",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Name | Self::Address => "text",
            Self::Email => "email",
            Self::Password | Self::ConfirmPassword => "password",
            Self::Phone => "tel",
        }
    }

    fn value(self, form: &RegisterForm) -> &str {
        match self {
            Self::Name => &form.name,
            Self::Email => &form.email,
            Self::Password => &form.password,
            Self::ConfirmPassword => &form.confirm_password,
            Self::Phone => &form.phone,
            Self::Address => &form.address,
        }
    }

    fn slot(self, form: &mut RegisterForm) -> &mut String {
        match self {
            Self::Name => &mut form.name,
            Self::Email => &mut form.email,
            Self::Password => &mut form.password,
            Self::ConfirmPassword => &mut form.confirm_password,
            Self::Phone => &mut form.phone,
            Self::Address => &mut form.address,
        }
    }
}
