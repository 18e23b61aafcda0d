pub mod error;
pub mod host;
pub mod models;
pub mod replay;
pub mod services;
pub mod state;
pub mod utils;

pub use error::*;
pub use host::*;
pub use models::*;
pub use state::*;

pub const MODULE_NAME: &str = "CS2 InfoTimeLimit";
pub const MODULE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const MODULE_AUTHOR: &str = "K4ryuu";
