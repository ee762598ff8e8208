use log::debug;
use rand::Rng;

use crate::{Catalog, Category, Duration, Exercise, Property};

/// Source of the uniform draws used to assemble a workout.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn draw(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn draw(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Draws `duration.exercise_count()` exercises of the given category with replacement.
///
/// The result keeps the draw order and may contain the same exercise several times.
pub fn generate(
    duration: Duration,
    category: Category,
    catalog: &Catalog,
    rng: &mut impl RandomSource,
) -> Vec<Exercise> {
    let exercises = catalog.exercises(category);
    let workout = (0..duration.exercise_count())
        .map(|_| exercises[rng.draw(exercises.len())])
        .collect::<Vec<_>>();
    debug!(
        "generated {duration}-minute {} workout with {} exercises",
        category.name(),
        workout.len()
    );
    workout
}
