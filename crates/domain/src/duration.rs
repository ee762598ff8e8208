use std::slice::Iter;

use derive_more::{Deref, Display, Into};

use crate::Property;

/// Length of a workout in minutes.
///
/// Only the offered values can be constructed.
#[derive(Deref, Into, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(u32);

impl Duration {
    pub const OFFERED: [Duration; 3] = [Duration(5), Duration(10), Duration(15)];

    pub fn new(minutes: u32) -> Result<Self, DurationError> {
        let duration = Duration(minutes);
        if !Self::OFFERED.contains(&duration) {
            return Err(DurationError::NotOffered(minutes));
        }
        Ok(duration)
    }

    /// One exercise per started two minutes.
    #[must_use]
    pub fn exercise_count(self) -> usize {
        self.0.div_ceil(2) as usize
    }
}

impl Property for Duration {
    fn iter() -> Iter<'static, Duration> {
        static DURATIONS: [Duration; 3] = Duration::OFFERED;
        DURATIONS.iter()
    }

    fn name(self) -> &'static str {
        match self.0 {
            5 => "5 mins",
            10 => "10 mins",
            15 => "15 mins",
            _ => unreachable!("duration of {} minutes is not offered", self.0),
        }
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::OFFERED[0]
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DurationError {
    #[error("Duration of {0} minutes is not offered")]
    NotOffered(u32),
}
