use contracts::system::auth::Permissions;
use leptos::prelude::*;

use super::context::use_auth;

/// Permission selector for [`RequirePermission`].
pub type PermissionCheck = fn(&Permissions) -> bool;

/// Whether the current user holds a permission. Admins pass every check.
pub fn has_permission(check: PermissionCheck) -> bool {
    let (auth_state, _) = use_auth();
    auth_state
        .get()
        .user_info
        .as_ref()
        .map(|u| u.is_admin || check(&u.permissions))
        .unwrap_or(false)
}

/// Renders children only when the current user holds the permission.
///
/// ```text
/// view! {
///     <RequirePermission check=|p| p.can_assign_reviews>
///         <AssignmentStep />
///     </RequirePermission>
/// }
/// ```
#[component]
pub fn RequirePermission(check: PermissionCheck, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    let allowed = move || {
        auth_state
            .get()
            .user_info
            .as_ref()
            .map(|u| u.is_admin || check(&u.permissions))
            .unwrap_or(false)
    };

    view! {
        <Show when=allowed fallback=|| view! { <></> }>
            {children()}
        </Show>
    }
}
