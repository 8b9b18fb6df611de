//! Ячейка заголовка с переключением сортировки по клику

use crate::shared::list_utils::sort_indicator;
use contracts::shared::grid::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    /// Ключ колонки, он же путь поля
    #[prop(into)]
    column_key: String,
    #[prop(into)] sort: Signal<Option<SortState>>,
    /// `None` для колонок без сортировки
    #[prop(optional_no_strip)]
    on_sort: Option<Callback<String>>,
) -> impl IntoView {
    let Some(on_sort) = on_sort else {
        return view! {
            <TableHeaderCell resizable=false>{label}</TableHeaderCell>
        }
        .into_any();
    };

    let key_for_click = column_key.clone();
    view! {
        <TableHeaderCell resizable=false>
            <div
                class="table__sortable-header"
                on:click=move |_| on_sort.run(key_for_click.clone())
            >
                {label}
                <span class="table__sort-indicator">
                    {move || sort.with(|s| sort_indicator(s.as_ref(), &column_key))}
                </span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}
