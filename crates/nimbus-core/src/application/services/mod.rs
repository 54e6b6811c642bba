//! Application services.

pub mod app_context;
pub mod view_manager;

pub use app_context::AppContext;
pub use view_manager::ViewManager;
