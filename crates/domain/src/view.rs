use log::{debug, info};

use crate::{Catalog, Category, Duration, Exercise, Property, RandomSource, generate};

/// State of the workout screen.
///
/// A workout is generated on construction, so there is never an empty initial state. Changing
/// the duration or the category generates a new workout. The selected exercise is kept across
/// regenerations, as the detail overlay shows its own copy of the record.
pub struct WorkoutView<'c, R> {
    catalog: &'c Catalog,
    rng: R,
    duration: Duration,
    category: Category,
    workout: Vec<Exercise>,
    selected_exercise: Option<Exercise>,
    is_offline: bool,
}

impl<'c, R: RandomSource> WorkoutView<'c, R> {
    pub fn new(catalog: &'c Catalog, rng: R) -> Self {
        let mut view = Self {
            catalog,
            rng,
            duration: Duration::default(),
            category: Category::default(),
            workout: vec![],
            selected_exercise: None,
            is_offline: false,
        };
        view.regenerate();
        view
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn workout(&self) -> &[Exercise] {
        &self.workout
    }

    #[must_use]
    pub fn selected_exercise(&self) -> Option<&Exercise> {
        self.selected_exercise.as_ref()
    }

    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.is_offline
    }

    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "Your {}-Minute {} Workout",
            self.duration,
            self.category.name()
        )
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
        self.regenerate();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.regenerate();
    }

    pub fn regenerate(&mut self) {
        self.workout = generate(self.duration, self.category, self.catalog, &mut self.rng);
    }

    pub fn select_exercise(&mut self, exercise: Option<Exercise>) {
        if let Some(exercise) = &exercise {
            debug!("showing details of {}", exercise.name);
        }
        self.selected_exercise = exercise;
    }

    pub fn on_connectivity_change(&mut self, is_offline: bool) {
        if is_offline != self.is_offline {
            info!("connection {}", if is_offline { "lost" } else { "restored" });
        }
        self.is_offline = is_offline;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::workout::tests::Scripted;

    #[fixture]
    fn view() -> WorkoutView<'static, StdRng> {
        WorkoutView::new(Catalog::builtin(), StdRng::seed_from_u64(0))
    }

    fn assert_consistent(view: &WorkoutView<'_, impl RandomSource>) {
        assert_eq!(view.workout().len(), view.duration().exercise_count());
        assert!(
            view.workout()
                .iter()
                .all(|e| view.catalog().exercises(view.category()).contains(e))
        );
    }

    #[rstest]
    fn test_initial_state(view: WorkoutView<'static, StdRng>) {
        assert_eq!(*view.duration(), 5);
        assert_eq!(view.category(), Category::Strength);
        assert_eq!(view.workout().len(), 3);
        assert_eq!(view.selected_exercise(), None);
        assert!(!view.is_offline());
        assert_consistent(&view);
    }

    #[rstest]
    #[case(10, 5)]
    #[case(15, 8)]
    #[case(5, 3)]
    fn test_set_duration(
        mut view: WorkoutView<'static, StdRng>,
        #[case] minutes: u32,
        #[case] expected_len: usize,
    ) {
        view.set_duration(Duration::new(minutes).unwrap());

        assert_eq!(*view.duration(), minutes);
        assert_eq!(view.category(), Category::Strength);
        assert_eq!(view.workout().len(), expected_len);
        assert_consistent(&view);
    }

    #[rstest]
    fn test_set_category(mut view: WorkoutView<'static, StdRng>) {
        view.set_category(Category::Cardio);

        assert_eq!(view.category(), Category::Cardio);
        assert_eq!(*view.duration(), 5);
        assert!(
            view.workout()
                .iter()
                .all(|e| ["Jumping Jacks", "High Knees"].contains(&e.name))
        );
        assert_consistent(&view);
    }

    #[rstest]
    fn test_regenerate(mut view: WorkoutView<'static, StdRng>) {
        view.set_duration(Duration::new(15).unwrap());
        view.set_category(Category::Gym);

        view.regenerate();
        assert_consistent(&view);
        view.regenerate();
        assert_consistent(&view);
        assert_eq!(*view.duration(), 15);
        assert_eq!(view.category(), Category::Gym);
    }

    #[test]
    fn test_regenerate_draws_new_workout() {
        let strength = Catalog::builtin().exercises(Category::Strength);
        let mut view = WorkoutView::new(
            Catalog::builtin(),
            Scripted(VecDeque::from([0, 0, 0, 2, 1, 0])),
        );
        assert_eq!(view.workout(), &[strength[0], strength[0], strength[0]]);

        view.regenerate();
        assert_eq!(view.workout(), &[strength[2], strength[1], strength[0]]);
    }

    #[rstest]
    fn test_select_exercise(mut view: WorkoutView<'static, StdRng>) {
        let exercise = view.workout()[1];

        view.select_exercise(Some(exercise));
        assert_eq!(view.selected_exercise(), Some(&exercise));

        view.select_exercise(None);
        assert_eq!(view.selected_exercise(), None);
    }

    #[rstest]
    fn test_selected_exercise_kept_on_regeneration(mut view: WorkoutView<'static, StdRng>) {
        let exercise = view.workout()[0];
        view.select_exercise(Some(exercise));

        view.set_category(Category::Flexibility);
        view.set_duration(Duration::new(10).unwrap());
        view.regenerate();

        assert_eq!(view.selected_exercise(), Some(&exercise));
    }

    #[rstest]
    fn test_on_connectivity_change(mut view: WorkoutView<'static, StdRng>) {
        view.set_category(Category::Gym);
        let exercise = view.workout()[0];
        view.select_exercise(Some(exercise));
        let workout = view.workout().to_vec();

        view.on_connectivity_change(true);

        assert!(view.is_offline());
        assert_eq!(view.workout(), workout.as_slice());
        assert_eq!(*view.duration(), 5);
        assert_eq!(view.category(), Category::Gym);
        assert_eq!(view.selected_exercise(), Some(&exercise));

        view.on_connectivity_change(false);

        assert!(!view.is_offline());
        assert_eq!(view.workout(), workout.as_slice());
    }

    #[rstest]
    fn test_title(mut view: WorkoutView<'static, StdRng>) {
        assert_eq!(view.title(), "Your 5-Minute strength Workout");

        view.set_duration(Duration::new(15).unwrap());
        view.set_category(Category::Cardio);
        assert_eq!(view.title(), "Your 15-Minute cardio Workout");
    }
}
