pub mod aggregate;
pub mod workflow;

pub use workflow::{ReviewStatus, ReviewStep};
