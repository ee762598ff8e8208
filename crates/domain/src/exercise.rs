use std::slice::Iter;

use crate::Property;

/// A single entry of the catalog.
///
/// The demo URL is handed to the media player as is and never checked for existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub name: &'static str,
    pub description: &'static str,
    pub demo_url: &'static str,
    pub kind: ExerciseType,
    pub equipment: Option<&'static str>,
}

impl Exercise {
    #[must_use]
    pub fn summary(&self) -> String {
        match self.equipment {
            Some(equipment) => format!("{} ({equipment})", self.description),
            None => self.description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseType {
    Bodyweight,
    Weights,
    Machine,
}

impl Property for ExerciseType {
    fn iter() -> Iter<'static, ExerciseType> {
        static TYPES: [ExerciseType; 3] = [
            ExerciseType::Bodyweight,
            ExerciseType::Weights,
            ExerciseType::Machine,
        ];
        TYPES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseType::Bodyweight => "Bodyweight",
            ExerciseType::Weights => "Weights",
            ExerciseType::Machine => "Machine",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::without_equipment(None, "Full lower body strength exercise")]
    #[case::with_equipment(Some("Barbell"), "Full lower body strength exercise (Barbell)")]
    fn test_exercise_summary(#[case] equipment: Option<&'static str>, #[case] expected: &str) {
        let exercise = Exercise {
            name: "Squats",
            description: "Full lower body strength exercise",
            demo_url: "/demos/squats.mp4",
            kind: ExerciseType::Bodyweight,
            equipment,
        };
        assert_eq!(exercise.summary(), expected);
    }

    #[test]
    fn test_exercise_type_names() {
        assert_eq!(
            ExerciseType::iter()
                .map(|t| t.name())
                .collect::<Vec<_>>(),
            vec!["Bodyweight", "Weights", "Machine"]
        );
    }
}
