use crate::shared::icons::icon;
use contracts::shared::grid::FilterGroup;
use leptos::prelude::*;

/// Сворачиваемая панель фильтров; справа в заголовке выводится `header_center`
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    /// Число активных фильтров для бейджа
    #[prop(into)]
    active_filters_count: Signal<usize>,
    #[prop(optional, into)] header_center: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Фильтры"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">
                    {header_center.as_ref().map(|center| center.run())}
                </div>
            </div>
            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">{children()}</div>
            </Show>
        </div>
    }
}

/// Выпадающий список одной группы фильтров
#[component]
pub fn FilterSelect(
    group: FilterGroup,
    /// Выбранное значение; `"all"` когда группа неактивна
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    let key = group.key.clone();
    view! {
        <label class="filter-select">
            <span class="filter-select__label">{group.label.clone()}</span>
            <select
                class="filter-select__input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run((key.clone(), event_target_value(&ev)))
            >
                {group
                    .options
                    .into_iter()
                    .map(|opt| {
                        let current = opt.value.clone();
                        view! {
                            <option value=opt.value selected=move || value.get() == current>
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Чип активного фильтра с кнопкой сброса
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
