use leptos::prelude::*;

/// Бейдж: "primary", "success", "warning", "error", иначе "neutral"
#[component]
pub fn Badge(
    #[prop(optional)] variant: &'static str,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! { <span class=format!("badge {}", variant_class)>{children()}</span> }
}

/// Статус записи: `active` зелёный, всё остальное серое
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let active = status.eq_ignore_ascii_case("active");
    let label = if active { "Активен" } else { "Неактивен" };
    view! {
        <span
            class="badge badge--status"
            class:badge--success=active
            class:badge--neutral={!active}
            title=status
        >
            {label}
        </span>
    }
}
