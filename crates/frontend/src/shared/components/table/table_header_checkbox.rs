//! Чекбокс «выбрать все» в заголовке таблицы

use contracts::shared::grid::SelectionState;
use leptos::prelude::*;
use thaw::*;

/// Три состояния: ничего, часть (indeterminate), все видимые строки.
///
/// `on_change(true)` просит выбрать все видимые строки, `false` снять выбор.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)] state: Signal<SelectionState>,
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate задаётся только через DOM
    Effect::new(move |_| {
        let partial = state.get() == SelectionState::Partial;
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(partial);
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == SelectionState::All
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
