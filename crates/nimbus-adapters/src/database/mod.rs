//! Database adapters.

mod mock;

pub use mock::{MockConnection, MockStatement};
