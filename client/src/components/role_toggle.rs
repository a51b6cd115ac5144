//! Customer / distributor switch used by the sign-in and sign-up forms.

use leptos::prelude::*;

use crate::net::types::UserType;

#[component]
pub fn RoleToggle(role: Signal<UserType>, on_change: Callback<UserType>) -> impl IntoView {
    let option = move |user_type: UserType| {
        view! {
            <button
                type="button"
                class="role-toggle__option"
                class:role-toggle__option--active=move || role.get() == user_type
                on:click=move |_| on_change.run(user_type)
            >
                {user_type.label()}
            </button>
        }
    };

    view! {
        <div class="role-toggle" role="group" aria-label="Account type">
            {option(UserType::Customer)}
            {option(UserType::Distributor)}
        </div>
    }
}
