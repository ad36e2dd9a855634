//! Rational time and time ranges

use std::ops::Add;

/// A point or length in time expressed as `value / rate` seconds
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RationalTime {
    /// Number of units (e.g. frames or samples)
    pub value: f64,
    /// Units per second
    pub rate: f64,
}

impl RationalTime {
    /// Creates a new rational time
    pub fn new(value: f64, rate: f64) -> Self {
        Self { value, rate }
    }

    /// Creates a rational time at `rate` from a number of seconds
    pub fn from_seconds(seconds: f64, rate: f64) -> Self {
        Self {
            value: seconds * rate,
            rate,
        }
    }

    /// Returns the number of units
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the units per second
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// True when the time cannot be converted to seconds
    pub fn is_invalid_time(&self) -> bool {
        !self.value.is_finite() || !self.rate.is_finite() || self.rate <= 0.0
    }

    /// Converts to seconds
    pub fn to_seconds(&self) -> f64 {
        self.value / self.rate
    }

    /// Expresses the same instant at a different rate
    pub fn rescaled_to(&self, rate: f64) -> Self {
        if self.rate == rate {
            return *self;
        }
        Self {
            value: self.value * rate / self.rate,
            rate,
        }
    }
}

impl Default for RationalTime {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Add for RationalTime {
    type Output = RationalTime;

    // Mixed rates resolve to the finer of the two timebases.
    fn add(self, rhs: RationalTime) -> RationalTime {
        if self.rate == rhs.rate {
            return RationalTime::new(self.value + rhs.value, self.rate);
        }
        let rate = self.rate.max(rhs.rate);
        RationalTime::new(
            self.rescaled_to(rate).value + rhs.rescaled_to(rate).value,
            rate,
        )
    }
}

/// A span of time starting at `start_time` and lasting `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeRange {
    /// Start of the range
    pub start_time: RationalTime,
    /// Length of the range
    pub duration: RationalTime,
}

impl TimeRange {
    /// Creates a new time range
    pub fn new(start_time: RationalTime, duration: RationalTime) -> Self {
        Self {
            start_time,
            duration,
        }
    }

    /// Returns the first instant past the end of the range
    pub fn end_time_exclusive(&self) -> RationalTime {
        self.start_time + self.duration
    }
}
