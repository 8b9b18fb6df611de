//! Ключ вкладки → содержимое. Ключи совпадают с маршрутами меню.

use crate::system::pages::home::HomePage;
use crate::system::records::resources::resource_for_route;
use crate::system::records::ui::RecordListPage;
use crate::system::users::ui::UsersListPage;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    if let Some(resource) = resource_for_route(key) {
        return view! { <RecordListPage resource=resource /> }.into_any();
    }

    match key {
        "home" => view! { <HomePage /> }.into_any(),
        "users" => view! { <UsersListPage /> }.into_any(),
        unknown => {
            log::warn!("no page registered for tab '{}'", unknown);
            let message = format!("Страница не найдена: {}", unknown);
            view! { <div class="alert alert--warning">{message}</div> }.into_any()
        }
    }
}
