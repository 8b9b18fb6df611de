use crate::shared::icons::icon;
use contracts::shared::grid::PAGE_SIZE_OPTIONS;
use leptos::prelude::*;

/// Навигация по страницам списка (страницы с 1)
#[component]
pub fn PaginationControls(
    /// Текущая страница, начиная с 1
    #[prop(into)]
    current_page: Signal<usize>,
    /// Всего страниц; 0 при пустом списке
    #[prop(into)]
    total_pages: Signal<usize>,
    /// Всего записей после поиска и фильтров
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let on_first = move || current_page.get() <= 1;
    let on_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="Первая страница"
                disabled=on_first
                on:click=move |_| on_page_change.run(1)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Предыдущая страница"
                disabled=on_first
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                title="Следующая страница"
                disabled=on_last
                on:click=move |_| {
                    if !on_last() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Последняя страница"
                disabled=on_last
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
