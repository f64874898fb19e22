pub mod config;
pub mod error;
pub mod lifecycle;
pub mod types;

pub use config::AppConfig;
pub use error::{CreatorError, CreatorResult};
pub use lifecycle::Lifecycle;
pub use types::Record;
