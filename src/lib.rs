// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod collect;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod model;
pub mod progress;
pub mod report;
pub mod store;

pub use error::{CollectError, LoadError};
pub use model::{Item, Rating};
