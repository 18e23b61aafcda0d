pub mod comm_state;
pub mod config_loader;
pub mod immunity;
pub mod lifecycle;
pub mod notifier;
pub mod scheduler;
