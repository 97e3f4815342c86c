pub mod app;
pub mod clipboard;
pub mod config;
pub mod dom;
pub mod logging;
pub mod timers;
pub mod ui;

pub use app::{EventOutcome, PageApp};
