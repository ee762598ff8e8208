#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::slice::Iter;

pub use catalog::{Catalog, CatalogError, Category, CategoryError};
pub use duration::{Duration, DurationError};
pub use exercise::{Exercise, ExerciseType};
pub use view::WorkoutView;
pub use workout::{RandomSource, generate};

mod catalog;
mod duration;
mod exercise;
mod view;
mod workout;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
