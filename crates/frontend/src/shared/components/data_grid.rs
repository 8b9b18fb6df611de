//! Универсальная таблица списка поверх `DataGridController`.
//!
//! Компонент ничего не знает о сущности: колонки, поиск и фильтры берутся из
//! схемы контроллера, доступные действия из `ActionGate`. Кнопки действий
//! выводятся только если разрешены и страница передала обработчик.

use super::filter_panel::{FilterPanel, FilterSelect, FilterTag};
use super::pagination_controls::PaginationControls;
use super::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use super::ui::{IconButton, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::shared::action_gate::ActionGate;
use contracts::shared::grid::{DataGridController, SelectionState, ALL_OPTION};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DataGrid<R>(
    /// Полный набор записей, загруженный страницей
    #[prop(into)]
    records: Signal<Vec<R>>,
    /// Состояние списка, принадлежит странице
    grid: RwSignal<DataGridController<R>>,
    #[prop(into)] gate: Signal<ActionGate>,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    /// Колонка, которая рисуется бейджем статуса
    #[prop(optional_no_strip)]
    status_key: Option<String>,
    #[prop(optional)] on_view: Option<Callback<R>>,
    #[prop(optional)] on_edit: Option<Callback<R>>,
    #[prop(optional)] on_delete: Option<Callback<R>>,
    /// `None` у сущностей без статуса
    #[prop(optional_no_strip)]
    on_toggle_status: Option<Callback<R>>,
    #[prop(optional)] on_add: Option<Callback<()>>,
    #[prop(optional)] on_delete_selected: Option<Callback<Vec<R>>>,
) -> impl IntoView
where
    R: Clone + Send + Sync + 'static,
{
    let accessor = grid.with_untracked(|g| g.accessor());
    let columns = grid.with_untracked(|g| g.schema().columns.clone());
    let filter_groups = grid.with_untracked(|g| g.schema().filter_groups.clone());
    let filters_expanded = RwSignal::new(false);
    let is_loading = move || loading.get().unwrap_or(false);

    // После перезагрузки или удаления страница могла оказаться за концом списка
    Effect::new(move |_| {
        records.track();
        grid.update(|g| records.with_untracked(|rs| g.clamp_page(rs)));
    });

    let search_term = Signal::derive(move || grid.with(|g| g.state().search_term.clone()));
    let sort = Signal::derive(move || grid.with(|g| g.state().sort.clone()));
    let current_page = Signal::derive(move || grid.with(|g| g.state().page));
    let page_size = Signal::derive(move || grid.with(|g| g.state().page_size));
    let visible_count =
        Signal::derive(move || records.with(|rs| grid.with(|g| g.visible(rs).len())));
    let total_pages = Signal::derive(move || records.with(|rs| grid.with(|g| g.total_pages(rs))));
    let selection: Signal<SelectionState> =
        Signal::derive(move || records.with(|rs| grid.with(|g| g.selection_state(rs))));
    let selected_count = Signal::derive(move || grid.with(|g| g.selected_count()));
    let active_filters = Signal::derive(move || grid.with(|g| g.active_filter_count()));
    let page_rows = Signal::derive(move || {
        records.with(|rs| grid.with(|g| g.page_rows(rs).into_iter().cloned().collect::<Vec<R>>()))
    });

    let page_flags = Signal::derive(move || gate.with(|g| g.page(selected_count.get())));
    let show_actions_column = Signal::derive(move || {
        let flags = gate.with(|g| g.module_actions());
        (flags.can_view && on_view.is_some())
            || (flags.can_edit && on_edit.is_some())
            || (flags.can_delete && on_delete.is_some())
            || (flags.can_toggle_status && on_toggle_status.is_some())
    });

    let on_search = Callback::new(move |term: String| grid.update(|g| g.set_search_term(term)));
    let on_filter = Callback::new(move |(key, value): (String, String)| {
        grid.update(|g| g.set_filter(&key, &value))
    });
    let on_sort = Callback::new(move |key: String| grid.update(|g| g.toggle_sort(&key)));
    let on_page_change = Callback::new(move |page: usize| grid.update(|g| g.set_page(page)));
    let on_page_size_change =
        Callback::new(move |size: usize| grid.update(|g| g.set_page_size(size)));
    let on_select_all = Callback::new(move |checked: bool| {
        if checked {
            grid.update(|g| records.with_untracked(|rs| g.select_all(rs)));
        } else {
            grid.update(|g| g.clear_selection());
        }
    });
    let on_toggle_row = Callback::new(move |id: String| grid.update(|g| g.toggle_row_selection(&id)));

    let delete_selected = move |_| {
        if let Some(handler) = on_delete_selected {
            let chosen = records.with_untracked(|rs| {
                grid.with_untracked(|g| g.selected_records(rs).into_iter().cloned().collect::<Vec<R>>())
            });
            handler.run(chosen);
        }
    };

    let filter_tags_groups = filter_groups.clone();
    let filter_tags = move || {
        grid.with(|g| {
            filter_tags_groups
                .iter()
                .filter_map(|group| {
                    let value = g.state().active_filters.get(&group.key)?;
                    let label = format!(
                        "{}: {}",
                        group.label,
                        group.label_for(value).unwrap_or(value.as_str())
                    );
                    let key = group.key.clone();
                    Some(view! {
                        <FilterTag
                            label=label
                            on_remove=Callback::new(move |_| {
                                grid.update(|g| g.set_filter(&key, ALL_OPTION))
                            })
                        />
                    })
                })
                .collect_view()
        })
    };

    let header_columns = columns.clone();
    let row_columns = columns;

    view! {
        <div class="data-grid">
            <div class="data-grid__toolbar">
                <Show when=move || page_flags.get().can_add && on_add.is_some()>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            if let Some(handler) = on_add {
                                handler.run(());
                            }
                        }
                    >
                        {icon("plus")}
                        " Добавить"
                    </Button>
                </Show>
                <Show when=move || {
                    gate.with(|g| g.module_actions().can_delete) && on_delete_selected.is_some()
                }>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || !page_flags.get().can_delete_selected)
                        on_click=delete_selected
                    >
                        {icon("trash")}
                        {move || format!(" Удалить ({})", selected_count.get())}
                    </Button>
                </Show>
            </div>

            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=active_filters
                header_center=move || {
                    view! {
                        <SearchInput value=search_term on_change=on_search />
                        <PaginationControls
                            current_page=current_page
                            total_pages=total_pages
                            total_count=visible_count
                            page_size=page_size
                            on_page_change=on_page_change
                            on_page_size_change=on_page_size_change
                        />
                    }
                }
            >
                <div class="filter-panel__row">
                    {filter_groups
                        .iter()
                        .cloned()
                        .map(|group| {
                            let key = group.key.clone();
                            let value = Signal::derive(move || grid.with(|g| g.filter_value(&key).to_string()));
                            view! { <FilterSelect group=group value=value on_change=on_filter /> }
                        })
                        .collect_view()}
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=Signal::derive(move || active_filters.get() == 0)
                        on_click=move |_| grid.update(|g| g.clear_filters())
                    >
                        "Сбросить"
                    </Button>
                </div>
                <div class="filter-panel__tags">{filter_tags.clone()}</div>
            </FilterPanel>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox state=selection on_change=on_select_all />
                            {header_columns
                                .iter()
                                .map(|col| {
                                    let on_sort = col.sortable.then_some(on_sort);
                                    view! {
                                        <SortableHeaderCell
                                            label=col.label.clone()
                                            column_key=col.key.clone()
                                            sort=sort
                                            on_sort=on_sort
                                        />
                                    }
                                })
                                .collect_view()}
                            <Show when=move || show_actions_column.get()>
                                <TableHeaderCell resizable=false class="data-grid__actions-header">
                                    "Действия"
                                </TableHeaderCell>
                            </Show>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let term = search_term.get();
                            let with_actions = show_actions_column.get();
                            page_rows
                                .get()
                                .into_iter()
                                .map(|row| {
                                    let flags = gate.with(|g| g.row(&row));
                                    let id = accessor.id(&row);
                                    let selection_cell = if id.is_empty() {
                                        view! { <TableCell class="fixed-checkbox-column">""</TableCell> }.into_any()
                                    } else {
                                        let id_for_check = id.clone();
                                        let checked = Signal::derive(move || {
                                            grid.with(|g| g.is_selected(&id_for_check))
                                        });
                                        view! {
                                            <TableCellCheckbox
                                                checked=checked
                                                item_id=id.clone()
                                                on_toggle=on_toggle_row
                                            />
                                        }
                                            .into_any()
                                    };
                                    let cells = row_columns
                                        .iter()
                                        .map(|col| {
                                            let text = col.display(&row, &accessor);
                                            let content = if status_key.as_deref() == Some(col.key.as_str()) {
                                                view! { <StatusBadge status=text /> }.into_any()
                                            } else {
                                                highlight_matches(&text, &term)
                                            };
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view();
                                    let actions = with_actions
                                        .then(|| {
                                            let buttons = [
                                                action_button(flags.can_view, on_view, "eye", "Просмотр", "", &row),
                                                action_button(flags.can_edit, on_edit, "edit", "Изменить", "", &row),
                                                action_button(
                                                    flags.can_toggle_status,
                                                    on_toggle_status,
                                                    "toggle",
                                                    "Сменить статус",
                                                    "",
                                                    &row,
                                                ),
                                                action_button(flags.can_delete, on_delete, "trash", "Удалить", "danger", &row),
                                            ];
                                            view! {
                                                <TableCell class="data-grid__actions">
                                                    {buttons.into_iter().flatten().collect_view()}
                                                </TableCell>
                                            }
                                        });
                                    view! {
                                        <TableRow>
                                            {selection_cell}
                                            {cells}
                                            {actions}
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
                <Show when=is_loading>
                    <div class="data-grid__placeholder">"Загрузка..."</div>
                </Show>
                <Show when=move || !is_loading() && visible_count.get() == 0>
                    <div class="data-grid__placeholder">"Нет данных"</div>
                </Show>
            </div>
        </div>
    }
}

/// Кнопка действия строки; `None` если действие запрещено или не подключено
fn action_button<R>(
    enabled: bool,
    handler: Option<Callback<R>>,
    icon_name: &'static str,
    title: &'static str,
    variant: &'static str,
    row: &R,
) -> Option<AnyView>
where
    R: Clone + Send + Sync + 'static,
{
    let handler = handler.filter(|_| enabled)?;
    let row = row.clone();
    Some(
        view! {
            <IconButton
                icon_name=icon_name
                title=title
                variant=variant
                on_click=Callback::new(move |_| handler.run(row.clone()))
            />
        }
        .into_any(),
    )
}
