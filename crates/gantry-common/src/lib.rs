pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, GantryError};
pub use events::{Event, EventBus};
pub use types::ViewId;

pub type Result<T> = std::result::Result<T, GantryError>;
