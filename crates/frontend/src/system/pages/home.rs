use crate::system::auth::context::use_auth;
use leptos::prelude::*;

/// Landing page; visible to every signed-in session.
#[component]
pub fn HomePage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let greeting = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| u.full_name.clone().unwrap_or_else(|| u.username.clone()))
                .unwrap_or_default()
        })
    };
    let limited = move || {
        auth_state.with(|s| s.access.as_ref().map(|a| a.is_fail_closed()).unwrap_or(false))
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">{move || format!("Добро пожаловать, {}", greeting())}</h1>
            </div>
            <div class="page__content">
                <Show when=limited>
                    <div class="alert alert--warning">
                        "Не удалось загрузить права доступа. Разделы, требующие прав, скрыты."
                    </div>
                </Show>
            </div>
        </div>
    }
}
