//! Описания списков: модуль прав, REST-ресурс, колонки и фильтры.

use contracts::shared::grid::{field_text, ColumnSpec, FilterGroup, GridSchema, RecordAccessor};
use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub struct RecordResource {
    pub title: &'static str,
    /// Модуль в списке прав, например "Admin Role"
    pub module_key: &'static str,
    pub endpoint: &'static str,
    /// Поле `status` со значениями active/inactive
    pub has_status: bool,
    pub schema: fn() -> GridSchema<Value>,
}

/// Ресурс по ключу маршрута меню
pub fn resource_for_route(route: &str) -> Option<RecordResource> {
    match route {
        "admin_roles" => Some(ADMIN_ROLES),
        "service_categories" => Some(SERVICE_CATEGORIES),
        "services" => Some(SERVICES),
        "orders" => Some(ORDERS),
        "gallery" => Some(GALLERY),
        _ => None,
    }
}

pub const ADMIN_ROLES: RecordResource = RecordResource {
    title: "Роли администраторов",
    module_key: "Admin Role",
    endpoint: "/api/admin/roles",
    has_status: true,
    schema: admin_roles_schema,
};

pub const SERVICE_CATEGORIES: RecordResource = RecordResource {
    title: "Категории услуг",
    module_key: "Service Category",
    endpoint: "/api/service-categories",
    has_status: true,
    schema: service_categories_schema,
};

pub const SERVICES: RecordResource = RecordResource {
    title: "Услуги",
    module_key: "Services",
    endpoint: "/api/services",
    has_status: true,
    schema: services_schema,
};

pub const ORDERS: RecordResource = RecordResource {
    title: "Заказы",
    module_key: "Orders",
    endpoint: "/api/orders",
    has_status: false,
    schema: orders_schema,
};

pub const GALLERY: RecordResource = RecordResource {
    title: "Галерея",
    module_key: "Gallery",
    endpoint: "/api/gallery",
    has_status: true,
    schema: gallery_schema,
};

fn status_filter() -> FilterGroup {
    FilterGroup::new("status", "Статус", "Все")
        .option("active", "Активные")
        .option("inactive", "Неактивные")
}

fn money(record: &Value, path: &str) -> String {
    let raw = field_text(record, path);
    match raw.trim().parse::<f64>() {
        Ok(amount) => format!("{:.2}", amount),
        Err(_) => raw,
    }
}

fn price_cell(record: &Value) -> String {
    money(record, "price")
}

fn total_cell(record: &Value) -> String {
    money(record, "total")
}

/// "2024-03-05T10:00:00Z" → "2024-03-05 10:00"
fn date_cell(record: &Value) -> String {
    let raw = field_text(record, "created_at");
    match raw.split_once('T') {
        Some((date, time)) => format!("{} {}", date, time.get(..5).unwrap_or(time)),
        None => raw,
    }
}

fn admin_roles_schema() -> GridSchema<Value> {
    GridSchema::new(
        RecordAccessor::json(),
        vec![
            ColumnSpec::new("name", "Название"),
            ColumnSpec::new("description", "Описание"),
            ColumnSpec::new("status", "Статус"),
            ColumnSpec::new("created_at", "Создана").with_render(date_cell),
        ],
    )
    .with_search_keys(["name", "description"])
    .with_filter(status_filter())
}

fn service_categories_schema() -> GridSchema<Value> {
    GridSchema::new(
        RecordAccessor::json(),
        vec![
            ColumnSpec::new("name", "Название"),
            ColumnSpec::new("description", "Описание"),
            ColumnSpec::new("services_count", "Услуг"),
            ColumnSpec::new("status", "Статус"),
        ],
    )
    .with_search_keys(["name", "description"])
    .with_filter(status_filter())
}

fn services_schema() -> GridSchema<Value> {
    GridSchema::new(
        RecordAccessor::json(),
        vec![
            ColumnSpec::new("name", "Название"),
            ColumnSpec::new("category.name", "Категория"),
            ColumnSpec::new("price", "Цена").with_render(price_cell),
            ColumnSpec::new("status", "Статус"),
        ],
    )
    .with_search_keys(["name", "category.name", "description"])
    .with_filter(status_filter())
}

fn orders_schema() -> GridSchema<Value> {
    GridSchema::new(
        RecordAccessor::json(),
        vec![
            ColumnSpec::new("number", "Номер"),
            ColumnSpec::new("customer.name", "Клиент"),
            ColumnSpec::new("service.name", "Услуга"),
            ColumnSpec::new("total", "Сумма").with_render(total_cell),
            ColumnSpec::new("order_status", "Состояние"),
            ColumnSpec::new("created_at", "Создан").with_render(date_cell),
        ],
    )
    .with_search_keys(["number", "customer.name", "customer.phone", "service.name"])
    .with_filter(
        FilterGroup::new("order_status", "Состояние", "Все")
            .option("pending", "Новые")
            .option("confirmed", "Подтверждённые")
            .option("completed", "Выполненные")
            .option("cancelled", "Отменённые"),
    )
}

fn gallery_schema() -> GridSchema<Value> {
    GridSchema::new(
        RecordAccessor::json(),
        vec![
            ColumnSpec::new("title", "Заголовок"),
            ColumnSpec::new("image_url", "Изображение").unsortable(),
            ColumnSpec::new("status", "Статус"),
        ],
    )
    .with_search_keys(["title"])
    .with_filter(status_filter())
}

/// Поля формы редактирования: верхнего уровня, кроме служебных
pub fn editable_fields(schema: &GridSchema<Value>) -> Vec<(String, String)> {
    const READ_ONLY: [&str; 3] = ["id", "status", "created_at"];
    schema
        .columns
        .iter()
        .filter(|c| !c.key.contains('.') && !c.key.ends_with("_count"))
        .filter(|c| !READ_ONLY.contains(&c.key.as_str()))
        .map(|c| (c.key.clone(), c.label.clone()))
        .collect()
}

/// Статус после переключения
pub fn toggled_status(current: &str) -> &'static str {
    if current.eq_ignore_ascii_case("active") {
        "inactive"
    } else {
        "active"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_menu_route_with_records_resolves() {
        for route in ["admin_roles", "service_categories", "services", "orders", "gallery"] {
            let resource = resource_for_route(route).unwrap();
            let schema = (resource.schema)();
            assert!(!schema.columns.is_empty(), "{route}");
        }
        assert!(resource_for_route("users").is_none());
    }

    #[test]
    fn test_cell_renderers() {
        let order = json!({"total": "1250.5", "created_at": "2024-03-05T10:07:31Z"});
        assert_eq!(total_cell(&order), "1250.50");
        assert_eq!(date_cell(&order), "2024-03-05 10:07");
        assert_eq!(price_cell(&json!({"price": "n/a"})), "n/a");
        assert_eq!(date_cell(&json!({})), "");
    }

    #[test]
    fn test_editable_fields_skip_nested_and_service_columns() {
        let keys: Vec<String> = editable_fields(&services_schema())
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["name", "price"]);

        let keys: Vec<String> = editable_fields(&service_categories_schema())
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["name", "description"]);
    }

    #[test]
    fn test_toggled_status() {
        assert_eq!(toggled_status("active"), "inactive");
        assert_eq!(toggled_status("Active"), "inactive");
        assert_eq!(toggled_status("inactive"), "active");
        assert_eq!(toggled_status(""), "active");
    }
}
