pub mod labels;
pub mod meeting;
pub mod resource;
pub mod toner;

pub use labels::Label;
pub use resource::{RecordId, ResourceKind, UpdateRequest};
