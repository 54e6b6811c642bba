pub mod globals;
pub mod render_data;

pub use crate::domain::DomainError;
pub use globals::{Globals, ViewConfig};
pub use render_data::RenderData;
