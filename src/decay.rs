use std::iter::FusedIterator;

use crate::quantity::mass::Milligrams;

/// Share of the caffeine still in the body one hour later.
pub const HOURLY_RETENTION: f64 = 0.87;

/// Number of hours covered by the report.
pub const HORIZON_HOURS: u32 = 24;

/// Hour-by-hour remaining caffeine, starting from the first hour after consumption.
#[must_use]
pub struct Decay {
    initial: Milligrams,
    hour: u32,
}

impl Decay {
    pub const fn new(initial: Milligrams) -> Self {
        Self { initial, hour: 0 }
    }

    /// Caffeine left after the specified number of hours.
    ///
    /// Every hour is a separate multiplication starting from the initial amount.
    #[must_use]
    pub fn remaining_after(initial: Milligrams, hours: u32) -> Milligrams {
        let mut remaining = initial;
        for _ in 0..hours {
            remaining *= HOURLY_RETENTION;
        }
        remaining
    }
}

impl Iterator for Decay {
    type Item = (u32, Milligrams);

    fn next(&mut self) -> Option<Self::Item> {
        if self.hour >= HORIZON_HOURS {
            return None;
        }
        self.hour += 1;
        Some((self.hour, Self::remaining_after(self.initial, self.hour)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (HORIZON_HOURS - self.hour) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Decay {}

impl FusedIterator for Decay {}
