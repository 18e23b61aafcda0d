pub mod config;
pub mod event;
pub mod immunity;
pub mod penalty;
pub mod phrases;
pub mod player;

pub use config::*;
pub use event::*;
pub use immunity::*;
pub use penalty::*;
pub use phrases::*;
pub use player::*;
