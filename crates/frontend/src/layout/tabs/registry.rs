//! Tab content registry - single source of truth for tab.key → View.
//!
//! `render_tab_content` resolves a tab key to its view. All tab keys are
//! collected here in one place.

use leptos::logging::log;
use leptos::prelude::*;

use crate::dashboards::overview::DashboardOverview;
use crate::domain::a001_material::ui::details::MaterialDetails;
use crate::domain::a001_material::ui::list::MaterialList;
use crate::domain::a002_review::ui::details::ReviewDetails;
use crate::domain::a003_assignment::ui::my_reviews::MyReviewsPage;
use crate::domain::a005_lookup::ui::list::LookupAdminPage;
use crate::domain::a006_audit::ui::list::AuditLogPage;
use crate::domain::a007_notification::ui::list::NotificationsPage;
use crate::domain::a007_notification::ui::preferences::NotificationPreferencesPage;
use crate::layout::global_context::AppGlobalContext;
use crate::system::rbac::ui::roles::RolesPage;
use crate::system::rbac::ui::sme_expertise::SmeExpertisePage;
use crate::system::rbac::ui::user_roles::UserRolesPage;
use crate::usecases::u101_upload_sap_data::UploadWidget;

/// Render the content for a tab by its key.
///
/// Detail keys carry their target in the suffix:
/// - `a001_material_detail_<material_number>`
/// - `a002_review_detail_<material_number>_<review_id>`
/// - `a002_review_new_<material_number>`
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    match key {
        "dashboard" => view! { <DashboardOverview /> }.into_any(),

        // a001: Materials
        "a001_material" => view! { <MaterialList /> }.into_any(),
        k if k.starts_with("a001_material_detail_") => {
            let number: i64 = k
                .strip_prefix("a001_material_detail_")
                .unwrap()
                .parse()
                .unwrap_or_default();
            view! { <MaterialDetails material_number=number /> }.into_any()
        }

        // a002: Review wizard
        k if k.starts_with("a002_review_detail_") => {
            let rest = k.strip_prefix("a002_review_detail_").unwrap();
            let Some((material, review)) = rest.split_once('_') else {
                log!("Bad review tab key: {}", k);
                return view! { <div class="placeholder">{"Bad review tab key"}</div> }
                    .into_any();
            };
            let material_number: i64 = material.parse().unwrap_or_default();
            let review_id: i64 = review.parse().unwrap_or_default();
            view! {
                <ReviewDetails
                    material_number=material_number
                    review_id=Some(review_id)
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }
        k if k.starts_with("a002_review_new_") => {
            let material_number: i64 = k
                .strip_prefix("a002_review_new_")
                .unwrap()
                .parse()
                .unwrap_or_default();
            view! {
                <ReviewDetails
                    material_number=material_number
                    review_id=None
                    on_close=Callback::new({
                        let key_for_close = key_for_close.clone();
                        move |_| {
                            tabs_store.close_tab(&key_for_close);
                        }
                    })
                />
            }
            .into_any()
        }

        // a003: My reviews
        "a003_my_reviews" => view! { <MyReviewsPage /> }.into_any(),

        // a005: Lookup options administration
        "a005_lookup" => view! { <LookupAdminPage /> }.into_any(),

        // a006: Audit log
        "a006_audit" => view! { <AuditLogPage /> }.into_any(),

        // a007: Notifications
        "a007_notifications" => view! { <NotificationsPage /> }.into_any(),
        "a007_notification_preferences" => {
            view! { <NotificationPreferencesPage /> }.into_any()
        }

        // Use cases
        "u101_upload_sap_data" => view! { <UploadWidget /> }.into_any(),

        // System
        "sys_roles" => view! { <RolesPage /> }.into_any(),
        "sys_user_roles" => view! { <UserRolesPage /> }.into_any(),
        "sys_sme_expertise" => view! { <SmeExpertisePage /> }.into_any(),

        _ => {
            log!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
