pub mod roles;
pub mod sme_expertise;
pub mod user_roles;
