//! Боковое меню. Показывает только пункты, доступные текущей сессии.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_access, use_auth};
use contracts::shared::navigation::{NavMenuConfig, NavNode};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let access = use_access();

    // None пока права не загружены: меню не рисуется до готовности оценщика
    let menu = Signal::derive(move || {
        let flags = auth_state.with(|s| s.session_flags());
        access.with(|evaluator| {
            evaluator
                .as_ref()
                .map(|ev| NavMenuConfig::default_menu().visible_items(ev, flags))
        })
    });

    view! {
        <div class="app-sidebar__content">
            {move || match menu.get() {
                None => view! { <div class="app-sidebar__loading">"Загрузка меню..."</div> }.into_any(),
                Some(items) => items
                    .into_iter()
                    .map(|node| view! { <MenuEntry node=node depth=0 /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn MenuEntry(node: NavNode, depth: usize) -> AnyView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let padding = format!("{}px", 12 + depth * 14);
    let icon_name = node.icon.clone().unwrap_or_default();

    match node.children {
        Some(children) => {
            let expanded = RwSignal::new(true);
            let children = StoredValue::new(children);
            view! {
                <div>
                    <div
                        class="app-sidebar__item"
                        style:padding-left=padding
                        on:click=move |_| expanded.update(|e| *e = !*e)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(&icon_name)}
                            <span>{node.label}</span>
                        </div>
                        <div
                            class="app-sidebar__chevron"
                            class:app-sidebar__chevron--expanded=move || expanded.get()
                        >
                            {icon("chevron-right")}
                        </div>
                    </div>
                    <Show when=move || expanded.get()>
                        <div class="app-sidebar__children">
                            {children
                                .get_value()
                                .into_iter()
                                .map(|child| view! { <MenuEntry node=child depth={depth + 1} /> })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
        None => {
            let route = node.route.unwrap_or_default();
            let route_for_active = route.clone();
            let label = node.label;
            let label_for_click = label.clone();
            view! {
                <div
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=move || {
                        ctx.active.with(|a| a.as_deref() == Some(route_for_active.as_str()))
                    }
                    style:padding-left=padding
                    on:click=move |_| ctx.open_tab(&route, &label_for_click)
                >
                    <div class="app-sidebar__item-content">
                        {icon(&icon_name)}
                        <span>{label}</span>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
