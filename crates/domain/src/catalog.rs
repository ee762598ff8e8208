use std::{collections::BTreeMap, slice::Iter, str::FromStr};

use crate::{Exercise, ExerciseType, Property};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    #[default]
    Strength,
    Flexibility,
    Cardio,
    Gym,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 4] = [
            Category::Strength,
            Category::Flexibility,
            Category::Cardio,
            Category::Gym,
        ];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Strength => "strength",
            Category::Flexibility => "flexibility",
            Category::Cardio => "cardio",
            Category::Gym => "gym",
        }
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::iter()
            .find(|c| c.name() == s)
            .copied()
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CategoryError {
    #[error("Unknown category \"{0}\"")]
    Unknown(String),
}

/// Exercises grouped by category.
///
/// Every category maps to at least one exercise, so a lookup never yields an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    exercises: BTreeMap<Category, Vec<Exercise>>,
}

impl Catalog {
    pub fn new(exercises: BTreeMap<Category, Vec<Exercise>>) -> Result<Self, CatalogError> {
        for category in Category::iter() {
            match exercises.get(category) {
                None => return Err(CatalogError::MissingCategory(*category)),
                Some(e) if e.is_empty() => return Err(CatalogError::EmptyCategory(*category)),
                Some(_) => {}
            }
        }
        Ok(Self { exercises })
    }

    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    #[must_use]
    pub fn exercises(&self, category: Category) -> &[Exercise] {
        self.exercises.get(&category).map_or(&[], Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.exercises.keys().copied()
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("No exercises defined for category {}", .0.name())]
    MissingCategory(Category),
    #[error("Empty exercise list for category {}", .0.name())]
    EmptyCategory(Category),
}

static BUILTIN: std::sync::LazyLock<Catalog> = std::sync::LazyLock::new(|| Catalog {
    exercises: BTreeMap::from([
        (Category::Strength, STRENGTH.to_vec()),
        (Category::Flexibility, FLEXIBILITY.to_vec()),
        (Category::Cardio, CARDIO.to_vec()),
        (Category::Gym, GYM.to_vec()),
    ]),
});

const STRENGTH: [Exercise; 3] = [
    Exercise {
        name: "Push-ups",
        description: "Standard chest and arm exercise",
        demo_url: "/demos/pushups.mp4",
        kind: ExerciseType::Bodyweight,
        equipment: None,
    },
    Exercise {
        name: "Squats",
        description: "Full lower body strength exercise",
        demo_url: "/demos/squats.mp4",
        kind: ExerciseType::Bodyweight,
        equipment: None,
    },
    Exercise {
        name: "Lunges",
        description: "Leg strength and balance",
        demo_url: "/demos/lunges.mp4",
        kind: ExerciseType::Bodyweight,
        equipment: None,
    },
];

const FLEXIBILITY: [Exercise; 2] = [
    Exercise {
        name: "Standing Hamstring Stretch",
        description: "Stretch back of thighs",
        demo_url: "/demos/hamstring-stretch.mp4",
        kind: ExerciseType::Bodyweight,
        equipment: None,
    },
    Exercise {
        name: "Shoulder Rolls",
        description: "Upper body mobility",
        demo_url: "/demos/shoulder-rolls.mp4",
        kind: ExerciseType::Bodyweight,
        equipment: None,
    },
];

const CARDIO: [Exercise; 2] = [
    Exercise {
        name: "Jumping Jacks",
        description: "Full body cardio warmup",
        demo_url: "/demos/jumping-jacks.mp4",
        kind: ExerciseType::Bodyweight,
        equipment: None,
    },
    Exercise {
        name: "High Knees",
        description: "Intense cardio movement",
        demo_url: "/demos/high-knees.mp4",
        kind: ExerciseType::Bodyweight,
        equipment: None,
    },
];

const GYM: [Exercise; 6] = [
    Exercise {
        name: "Barbell Bench Press",
        description: "Chest and triceps strength exercise",
        demo_url: "/demos/barbell-bench-press.mp4",
        kind: ExerciseType::Weights,
        equipment: Some("Barbell"),
    },
    Exercise {
        name: "Deadlift",
        description: "Full body strength and posterior chain exercise",
        demo_url: "/demos/deadlift.mp4",
        kind: ExerciseType::Weights,
        equipment: Some("Barbell"),
    },
    Exercise {
        name: "Dumbbell Shoulder Press",
        description: "Shoulder muscle development",
        demo_url: "/demos/dumbbell-shoulder-press.mp4",
        kind: ExerciseType::Weights,
        equipment: Some("Dumbbells"),
    },
    Exercise {
        name: "Leg Press",
        description: "Lower body strength training",
        demo_url: "/demos/leg-press.mp4",
        kind: ExerciseType::Machine,
        equipment: Some("Leg Press Machine"),
    },
    Exercise {
        name: "Cable Tricep Pushdown",
        description: "Targeted tricep isolation exercise",
        demo_url: "/demos/cable-tricep-pushdown.mp4",
        kind: ExerciseType::Machine,
        equipment: Some("Cable Machine"),
    },
    Exercise {
        name: "Pull-ups",
        description: "Upper body pulling strength",
        demo_url: "/demos/pull-ups.mp4",
        kind: ExerciseType::Bodyweight,
        equipment: Some("Pull-up Bar"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_covers_all_categories() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.categories().collect::<Vec<_>>(),
            Category::iter().copied().collect::<Vec<_>>()
        );
        for category in Category::iter() {
            assert!(!catalog.exercises(*category).is_empty());
        }
    }

    #[test]
    fn test_builtin_unique_names_per_category() {
        for category in Category::iter() {
            let exercises = Catalog::builtin().exercises(*category);
            let names = exercises.iter().map(|e| e.name).collect::<HashSet<_>>();
            assert_eq!(names.len(), exercises.len(), "{}", category.name());
        }
    }

    #[test]
    fn test_builtin_equipment() {
        for category in [Category::Strength, Category::Flexibility, Category::Cardio] {
            assert!(
                Catalog::builtin()
                    .exercises(category)
                    .iter()
                    .all(|e| e.equipment.is_none())
            );
        }
        assert!(
            Catalog::builtin()
                .exercises(Category::Gym)
                .iter()
                .all(|e| e.equipment.is_some())
        );
    }

    #[test]
    fn test_builtin_cardio() {
        assert_eq!(
            Catalog::builtin()
                .exercises(Category::Cardio)
                .iter()
                .map(|e| e.name)
                .collect::<Vec<_>>(),
            vec!["Jumping Jacks", "High Knees"]
        );
    }

    #[rstest]
    #[case("strength", Ok(Category::Strength))]
    #[case("flexibility", Ok(Category::Flexibility))]
    #[case("cardio", Ok(Category::Cardio))]
    #[case("gym", Ok(Category::Gym))]
    #[case("Cardio", Err(CategoryError::Unknown("Cardio".to_string())))]
    #[case("", Err(CategoryError::Unknown(String::new())))]
    fn test_category_from_str(#[case] key: &str, #[case] expected: Result<Category, CategoryError>) {
        assert_eq!(key.parse::<Category>(), expected);
    }

    #[test]
    fn test_catalog_new() {
        let exercises = Category::iter()
            .map(|c| (*c, vec![CARDIO[0]]))
            .collect::<BTreeMap<_, _>>();
        assert_eq!(
            Catalog::new(exercises.clone()).map(|c| c.exercises(Category::Gym).to_vec()),
            Ok(vec![CARDIO[0]])
        );

        let mut missing = exercises.clone();
        missing.remove(&Category::Flexibility);
        assert_eq!(
            Catalog::new(missing),
            Err(CatalogError::MissingCategory(Category::Flexibility))
        );

        let mut empty = exercises;
        empty.insert(Category::Gym, vec![]);
        assert_eq!(
            Catalog::new(empty),
            Err(CatalogError::EmptyCategory(Category::Gym))
        );
    }

    #[test]
    fn test_catalog_error_display() {
        assert_eq!(
            CatalogError::EmptyCategory(Category::Cardio).to_string(),
            "Empty exercise list for category cardio"
        );
    }
}
