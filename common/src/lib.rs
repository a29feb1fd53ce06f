pub mod config;
pub mod error;
pub mod network;

mod macros;

pub use tracing;
pub use tracing::{debug, error, info, warn};
