//! Tab labels - single source of truth for tab titles.
//!
//! Detail tabs (material card, review wizard) set their titles when they
//! are opened, so only fixed keys are listed here.

/// Readable tab title for a given key. Fallback: a generic placeholder.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "dashboard" => "Dashboard",
        "a001_material" => "Materials",
        "a003_my_reviews" => "My reviews",
        "a005_lookup" => "Lookup options",
        "a006_audit" => "Audit log",
        "a007_notifications" => "Notifications",
        "a007_notification_preferences" => "Notification preferences",
        "u101_upload_sap_data" => "SAP data upload",
        "sys_roles" => "Roles",
        "sys_user_roles" => "User roles",
        "sys_sme_expertise" => "SME expertise",
        k if k.starts_with("a001_material_detail_") => "Material",
        k if k.starts_with("a002_review_") => "Review",
        _ => "Unknown",
    }
}
