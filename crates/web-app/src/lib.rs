#![warn(clippy::pedantic)]

pub use settings::{Settings, Theme};

pub mod connectivity;
pub mod log;
pub mod service_worker;
mod settings;
