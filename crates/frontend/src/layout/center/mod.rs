pub mod registry;

use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::prelude::*;
use registry::render_tab_content;

/// Полоса вкладок и содержимое открытых страниц.
///
/// Неактивные вкладки скрываются, а не удаляются, поэтому состояние списка
/// (поиск, выбор, страница) живёт, пока вкладка открыта.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-tabs">
            <div class="tabs__bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: Tab| view! { <TabHandle tab=tab /> }
                />
            </div>
            <div class="tabs__content">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: Tab| view! { <TabPage tab=tab /> }
                />
            </div>
        </div>
    }
}

#[component]
fn TabHandle(tab: Tab) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let key = tab.key.clone();
    let key_for_click = tab.key.clone();
    let key_for_close = tab.key;
    let is_active = Memo::new(move |_| ctx.active.with(|a| a.as_deref() == Some(key.as_str())));

    view! {
        <div
            class="tab"
            class:active=move || is_active.get()
            on:click=move |_| ctx.activate_tab(&key_for_click)
        >
            <span>{tab.title}</span>
            <button
                class="tab-close"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.close_tab(&key_for_close);
                }
            >
                {crate::shared::icons::icon("x")}
            </button>
        </div>
    }
}

#[component]
fn TabPage(tab: Tab) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let key = tab.key.clone();
    let is_active = move || ctx.active.with(|a| a.as_deref() == Some(key.as_str()));

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key.clone()
        >
            {render_tab_content(&tab.key)}
        </div>
    }
}
