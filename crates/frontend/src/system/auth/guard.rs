use contracts::shared::access::Permission;
use leptos::prelude::*;

use super::context::use_auth;

/// Renders children only when the session may view `module`.
///
/// While the grant list is still loading a placeholder is shown instead of a
/// denial, so a slow restore never flashes "access denied".
#[component]
pub fn RequirePermission(
    /// Module key as used in grants, e.g. "Admin Role"
    #[prop(into)]
    module: String,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let permission = Permission::view(module);

    let decision = move || {
        auth_state.with(|s| s.access.as_ref().map(|access| access.can(&permission)))
    };

    view! {
        {move || match decision() {
            None => view! { <div class="page__loading">"Загрузка прав доступа..."</div> }.into_any(),
            Some(false) => view! { <div class="alert alert--error">"Доступ запрещён"</div> }.into_any(),
            Some(true) => children().into_any(),
        }}
    }
}
