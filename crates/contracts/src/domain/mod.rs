pub mod common;

pub mod a001_material;
pub mod a002_review;
pub mod a003_assignment;
pub mod a004_comment;
pub mod a005_lookup;
pub mod a006_audit;
pub mod a007_notification;
pub mod a008_upload;
