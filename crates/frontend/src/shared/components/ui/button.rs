use crate::shared::icons::icon;
use leptos::prelude::*;

/// Маленькая кнопка-иконка для действий в строке таблицы
#[component]
pub fn IconButton(
    icon_name: &'static str,
    #[prop(into)] title: String,
    /// "danger" для разрушающих действий
    #[prop(optional)]
    variant: &'static str,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="icon-button"
            class:icon-button--danger={variant == "danger"}
            title=title
            on:click=move |ev| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            {icon(icon_name)}
        </button>
    }
}
