//! booking-console
//!
//! Console front end for the booking engine: the interactive menu,
//! scripted replay, configuration, and the engine task that owns the
//! `BookingEngine`.

pub mod config;
pub mod types;
pub mod console;
pub mod engine_task;
pub mod replay;

pub use config::ConsoleConfig;
pub use console::Console;
pub use engine_task::spawn_engine;
pub use types::EngineHandle;
