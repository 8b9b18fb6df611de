use contracts::shared::action_gate::ActionGate;
use contracts::shared::grid::{field_text, DataGridController};
use contracts::shared::request_token::RequestSequence;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

use super::editor::RecordEditor;
use crate::shared::components::{DataGrid, PageHeader};
use crate::shared::icons::icon;
use crate::shared::modal::{FieldList, Modal};
use crate::system::auth::context::{use_access, use_auth};
use crate::system::auth::guard::RequirePermission;
use crate::system::records::api;
use crate::system::records::resources::{editable_fields, toggled_status, RecordResource};

/// Открытая форма: `id == None` для новой записи
#[derive(Debug, Clone)]
struct EditTarget {
    id: Option<String>,
    record: Value,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn RecordListPage(resource: RecordResource) -> impl IntoView {
    view! {
        <RequirePermission module=resource.module_key>
            <RecordList resource=resource />
        </RequirePermission>
    }
}

#[component]
fn RecordList(resource: RecordResource) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let access = use_access();
    let endpoint = resource.endpoint;

    let records = RwSignal::new(Vec::<Value>::new());
    let grid = RwSignal::new(DataGridController::new((resource.schema)()));
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let viewing = RwSignal::new(None::<Value>);
    let editing = RwSignal::new(None::<EditTarget>);
    let requests = StoredValue::new(RequestSequence::new());

    let gate = Signal::derive(move || {
        ActionGate::new(access.get().unwrap_or_default(), resource.module_key)
    });
    let access_token = move || auth_state.with_untracked(|s| s.access_token.clone());

    let load = move || {
        let Some(token) = access_token() else {
            return;
        };
        let Some(request) = requests.try_update_value(|r| r.begin()) else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_records(endpoint, &token).await;
            // Ответ на устаревший запрос или закрытую страницу отбрасывается
            let Some(result) = requests.try_with_value(|r| r.accept(request, result)).flatten() else {
                return;
            };
            match result {
                Ok(items) => {
                    log::debug!("{}: loaded {} records", endpoint, items.len());
                    records.set(items);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let forget = move |id: &str| {
        records.update(|rs| rs.retain(|r| field_text(r, "id") != id));
        grid.update(|g| {
            if g.is_selected(id) {
                g.toggle_row_selection(id);
            }
        });
    };

    let on_delete = Callback::new(move |row: Value| {
        let id = field_text(&row, "id");
        if id.is_empty() || !confirm("Удалить запись?") {
            return;
        }
        let Some(token) = access_token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_record(endpoint, &id, &token).await {
                Ok(()) => forget(&id),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let on_delete_selected = Callback::new(move |rows: Vec<Value>| {
        if rows.is_empty() || !confirm(&format!("Удалить выбранные записи ({})?", rows.len())) {
            return;
        }
        let Some(token) = access_token() else {
            return;
        };
        spawn_local(async move {
            for row in rows {
                let id = field_text(&row, "id");
                match api::delete_record(endpoint, &id, &token).await {
                    Ok(()) => forget(&id),
                    Err(e) => {
                        set_error.set(Some(e));
                        break;
                    }
                }
            }
        });
    });

    let on_toggle_status = Callback::new(move |row: Value| {
        let id = field_text(&row, "id");
        let Some(token) = access_token() else {
            return;
        };
        let next = toggled_status(&field_text(&row, "status"));
        spawn_local(async move {
            match api::set_record_status(endpoint, &id, next, &token).await {
                Ok(()) => records.update(|rs| {
                    let record = rs.iter_mut().find(|r| field_text(r, "id") == id);
                    if let Some(map) = record.and_then(Value::as_object_mut) {
                        map.insert("status".to_string(), Value::from(next));
                    }
                }),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let on_view = Callback::new(move |row: Value| viewing.set(Some(row)));
    let on_edit = Callback::new(move |row: Value| {
        let id = field_text(&row, "id");
        editing.set(Some(EditTarget {
            id: (!id.is_empty()).then_some(id),
            record: row,
        }))
    });
    let on_add = Callback::new(move |_: ()| {
        editing.set(Some(EditTarget {
            id: None,
            record: Value::Object(Default::default()),
        }))
    });

    let on_save = Callback::new(move |record: Value| {
        let Some(target) = editing.get_untracked() else {
            return;
        };
        let Some(token) = access_token() else {
            return;
        };
        spawn_local(async move {
            let result = match &target.id {
                Some(id) => api::update_record(endpoint, id, &record, &token).await,
                None => api::create_record(endpoint, &record, &token).await,
            };
            match result {
                Ok(()) => {
                    editing.set(None);
                    load();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let schema_fields = grid.with_untracked(|g| editable_fields(g.schema()));
    let view_fields = move |row: &Value| {
        grid.with_untracked(|g| {
            let accessor = g.accessor();
            g.schema()
                .columns
                .iter()
                .map(|c| (c.label.clone(), c.display(row, &accessor)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page">
            <PageHeader title=resource.title count=Signal::derive(move || records.with(|r| r.len()))>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| load()
                >
                    {icon("refresh")}
                    " Обновить"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}
                <DataGrid
                    records=records
                    grid=grid
                    gate=gate
                    loading=loading
                    status_key=resource.has_status.then(|| "status".to_string())
                    on_view=on_view
                    on_edit=on_edit
                    on_delete=on_delete
                    on_toggle_status=resource.has_status.then_some(on_toggle_status)
                    on_add=on_add
                    on_delete_selected=on_delete_selected
                />
            </div>

            {move || {
                viewing
                    .get()
                    .map(|row| {
                        let name = field_text(&row, "name");
                        let title = if name.is_empty() { resource.title.to_string() } else { name };
                        view! {
                            <Modal
                                title=title
                                on_close=Callback::new(move |_| viewing.set(None))
                            >
                                <FieldList fields=view_fields(&row) />
                            </Modal>
                        }
                    })
            }}
            {move || {
                let fields = schema_fields.clone();
                editing
                    .get()
                    .map(|target| {
                        let title = if target.id.is_some() { "Редактирование" } else { "Новая запись" };
                        view! {
                            <RecordEditor
                                title=title
                                fields=fields
                                record=target.record
                                on_save=on_save
                                on_close=Callback::new(move |_| editing.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
