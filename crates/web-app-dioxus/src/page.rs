pub mod log;
pub mod not_found;
pub mod workout;
