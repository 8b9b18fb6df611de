use contracts::shared::action_gate::ActionGate;
use contracts::shared::grid::{ColumnSpec, DataGridController, FilterGroup, GridSchema};
use contracts::shared::request_token::RequestSequence;
use contracts::system::users::{UpdateUserStatusDto, User, USER_ACCESSOR};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::{DataGrid, PageHeader};
use crate::shared::icons::icon;
use crate::shared::modal::{FieldList, Modal};
use crate::system::auth::context::{use_access, use_auth};
use crate::system::auth::guard::RequirePermission;
use crate::system::users::api;

/// Модуль прав для списка пользователей
const USERS_MODULE: &str = "Users";

fn last_login_cell(user: &User) -> String {
    user.last_login_at
        .as_deref()
        .map(|s| s.replace('T', " ").chars().take(16).collect())
        .unwrap_or_else(|| "-".to_string())
}

fn users_schema() -> GridSchema<User> {
    GridSchema::new(
        USER_ACCESSOR,
        vec![
            ColumnSpec::new("username", "Логин"),
            ColumnSpec::new("full_name", "ФИО"),
            ColumnSpec::new("email", "Email"),
            ColumnSpec::new("role.name", "Роль"),
            ColumnSpec::new("status", "Статус"),
            ColumnSpec::new("last_login_at", "Последний вход").with_render(last_login_cell),
        ],
    )
    .with_search_keys(["username", "full_name", "email"])
    .with_filter(
        FilterGroup::new("status", "Статус", "Все")
            .option("active", "Активные")
            .option("inactive", "Заблокированные"),
    )
}

fn user_fields(user: &User) -> Vec<(String, String)> {
    vec![
        ("Логин".to_string(), user.username.clone()),
        ("ФИО".to_string(), user.full_name.clone().unwrap_or_default()),
        ("Email".to_string(), user.email.clone().unwrap_or_default()),
        (
            "Роль".to_string(),
            user.role.as_ref().map(|r| r.name.clone()).unwrap_or_default(),
        ),
        ("Создан".to_string(), user.created_at.clone()),
        ("Последний вход".to_string(), last_login_cell(user)),
    ]
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequirePermission module=USERS_MODULE>
            <UsersList />
        </RequirePermission>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let access = use_access();

    let users = RwSignal::new(Vec::<User>::new());
    let grid = RwSignal::new(DataGridController::new(users_schema()));
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let viewing = RwSignal::new(None::<User>);
    let requests = StoredValue::new(RequestSequence::new());

    let gate = Signal::derive(move || ActionGate::new(access.get().unwrap_or_default(), USERS_MODULE));
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
            let result = api::fetch_users(&token).await;
            let Some(result) = requests.try_with_value(|r| r.accept(request, result)).flatten() else {
                return;
            };
            match result {
                Ok(items) => {
                    users.set(items);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let on_toggle_status = Callback::new(move |user: User| {
        let Some(token) = access_token() else {
            return;
        };
        let dto = UpdateUserStatusDto {
            id: user.id.clone(),
            is_active: !user.is_active,
        };
        spawn_local(async move {
            let id = dto.id.clone();
            let is_active = dto.is_active;
            match api::update_status(dto, &token).await {
                Ok(()) => users.update(|list| {
                    if let Some(u) = list.iter_mut().find(|u| u.id == id) {
                        u.is_active = is_active;
                    }
                }),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let delete_ids = move |ids: Vec<String>| {
        let Some(token) = access_token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_users(ids.clone(), &token).await {
                Ok(()) => {
                    users.update(|list| list.retain(|u| !ids.contains(&u.id)));
                    grid.update(|g| g.clear_selection());
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let on_delete = Callback::new(move |user: User| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Удалить пользователя {}?", user.username)).ok())
            .unwrap_or(false);
        if confirmed {
            delete_ids(vec![user.id]);
        }
    });
    let on_delete_selected = Callback::new(move |selected: Vec<User>| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Удалить пользователей ({})?", selected.len()))
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            delete_ids(selected.into_iter().map(|u| u.id).collect());
        }
    });
    let on_view = Callback::new(move |user: User| viewing.set(Some(user)));

    view! {
        <div class="page">
            <PageHeader title="Пользователи" count=Signal::derive(move || users.with(|u| u.len()))>
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
                    records=users
                    grid=grid
                    gate=gate
                    loading=loading
                    status_key=Some("status".to_string())
                    on_view=on_view
                    on_delete=on_delete
                    on_toggle_status=Some(on_toggle_status)
                    on_delete_selected=on_delete_selected
                />
            </div>

            {move || {
                viewing
                    .get()
                    .map(|user| {
                        view! {
                            <Modal title=user.username.clone() on_close=Callback::new(move |_| viewing.set(None))>
                                <FieldList fields=user_fields(&user) />
                            </Modal>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::users::RoleRef;

    fn user(id: &str, active: bool, last_login: Option<&str>) -> User {
        User {
            id: id.to_string(),
            username: format!("user{id}"),
            email: Some(format!("user{id}@example.com")),
            full_name: None,
            is_active: active,
            role: Some(RoleRef {
                id: "r1".into(),
                name: "Manager".into(),
            }),
            created_at: "2024-01-01T00:00:00Z".into(),
            last_login_at: last_login.map(String::from),
        }
    }

    #[test]
    fn test_users_schema_filters_by_status_and_searches_email() {
        let data = vec![
            user("1", true, Some("2024-05-01T09:30:12Z")),
            user("2", false, None),
        ];
        let mut grid = DataGridController::new(users_schema());
        grid.set_filter("status", "inactive");
        let visible: Vec<&str> = grid.visible(&data).iter().map(|u| u.id.as_str()).collect();
        assert_eq!(visible, vec!["2"]);

        grid.clear_filters();
        grid.set_search_term("user1@");
        let visible: Vec<&str> = grid.visible(&data).iter().map(|u| u.id.as_str()).collect();
        assert_eq!(visible, vec!["1"]);
    }

    #[test]
    fn test_last_login_cell() {
        assert_eq!(last_login_cell(&user("1", true, Some("2024-05-01T09:30:12Z"))), "2024-05-01 09:30");
        assert_eq!(last_login_cell(&user("2", true, None)), "-");
    }
}
