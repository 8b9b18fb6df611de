//! Чекбокс выбора строки

use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellCheckbox(
    #[prop(into)] checked: Signal<bool>,
    /// Вызывается с id строки при любом клике
    #[prop(into)]
    item_id: String,
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(item_id.clone())
            />
        </TableCell>
    }
}
