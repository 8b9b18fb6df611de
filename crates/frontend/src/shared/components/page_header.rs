use crate::shared::components::ui::Badge;
use leptos::prelude::*;

/// Заголовок страницы списка: название, счётчик записей и кнопки действий
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Счётчик рядом с заголовком
    #[prop(optional, into)]
    count: MaybeProp<usize>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || {
                    count
                        .get()
                        .map(|n| view! { <Badge variant="primary">{n.to_string()}</Badge> })
                }}
            </div>
            <div class="page__header-right">{children()}</div>
        </div>
    }
}
