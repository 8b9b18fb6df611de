use crate::shared::grid::RecordAccessor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub role: Option<RoleRef>,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

impl User {
    /// Grid field lookup; unknown paths and unset options are empty.
    pub fn field_text(&self, path: &str) -> String {
        match path {
            "id" => self.id.clone(),
            "username" => self.username.clone(),
            "email" => self.email.clone().unwrap_or_default(),
            "full_name" => self.full_name.clone().unwrap_or_default(),
            "status" => (if self.is_active { "active" } else { "inactive" }).to_string(),
            "is_active" => self.is_active.to_string(),
            "role.id" => self.role.as_ref().map(|r| r.id.clone()).unwrap_or_default(),
            "role.name" => self.role.as_ref().map(|r| r.name.clone()).unwrap_or_default(),
            "created_at" => self.created_at.clone(),
            "last_login_at" => self.last_login_at.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }
}

fn user_field(user: &User, path: &str) -> String {
    user.field_text(path)
}

fn user_id(user: &User) -> String {
    user.id.clone()
}

pub const USER_ACCESSOR: RecordAccessor<User> = RecordAccessor::new(user_field, user_id);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserStatusDto {
    pub id: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUsersDto {
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::grid::{ColumnSpec, DataGridController, FilterGroup, GridSchema};

    fn user(id: &str, name: &str, active: bool, role: Option<&str>) -> User {
        User {
            id: id.to_string(),
            username: name.to_string(),
            email: None,
            full_name: None,
            is_active: active,
            role: role.map(|r| RoleRef {
                id: r.to_lowercase(),
                name: r.to_string(),
            }),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_typed_records_through_grid() {
        let users = vec![
            user("u1", "anna", true, Some("Manager")),
            user("u2", "boris", false, Some("Manager")),
            user("u3", "clara", true, None),
        ];
        let schema = GridSchema::new(
            USER_ACCESSOR,
            vec![
                ColumnSpec::new("username", "Login"),
                ColumnSpec::new("role.name", "Role"),
            ],
        )
        .with_filter(
            FilterGroup::new("status", "Status", "All")
                .option("active", "Active")
                .option("inactive", "Inactive"),
        );
        let mut grid = DataGridController::new(schema);

        grid.set_search_term("manager");
        let names: Vec<&str> = grid.visible(&users).iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["anna", "boris"]);

        grid.set_filter("status", "active");
        let names: Vec<&str> = grid.visible(&users).iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["anna"]);

        grid.select_all(&users);
        assert!(grid.is_selected("u1"));
        assert_eq!(grid.selected_count(), 1);
    }

    #[test]
    fn test_unknown_path_is_empty() {
        let u = user("u1", "anna", true, None);
        assert_eq!(u.field_text("role.name"), "");
        assert_eq!(u.field_text("nope"), "");
        assert_eq!(u.field_text("status"), "active");
    }
}
