//! Duration value type.
//!
//! [`Time`] stores a duration as milliseconds and converts to and from the
//! other units. Durations can also be parsed from compact strings:
//!
//! ```
//! use colorkit::time::Time;
//!
//! let duration: Time = "1h 30m".parse().unwrap();
//! assert_eq!(duration.to_minutes(), 90.0);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

/// Unit of time, each carrying its span in milliseconds.
///
/// A month is one twelfth of a year; a year is 365 days and 6 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// The span of this unit in milliseconds.
    #[must_use]
    pub const fn milliseconds(self) -> u64 {
        match self {
            Self::Millisecond => 1,
            Self::Second => 1_000,
            Self::Minute => 60_000,
            Self::Hour => 3_600_000,
            Self::Day => 86_400_000,
            Self::Week => 604_800_000,
            Self::Month => 2_629_800_000,
            Self::Year => 31_557_600_000,
        }
    }

    #[expect(clippy::cast_precision_loss, reason = "unit spans are far below 2^53")]
    const fn as_f64(self) -> f64 {
        self.milliseconds() as f64
    }
}

/// Convert a value in the given unit to milliseconds.
#[must_use]
pub fn to_milliseconds(value: f64, unit: TimeUnit) -> f64 {
    value * unit.as_f64()
}

/// Error type for duration construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Argument has the wrong shape (e.g. a non-finite float).
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
    /// Argument has the right type but an out-of-bounds value.
    OutOfRange {
        field: &'static str,
        constraint: &'static str,
    },
    /// String does not match the duration grammar.
    Syntax { input: String },
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType { field, expected } => {
                write!(f, "`{field}` must be {expected}")
            }
            Self::OutOfRange { field, constraint } => {
                write!(f, "`{field}` must be {constraint}")
            }
            Self::Syntax { input } => {
                write!(f, "`{input}` is not a valid duration (e.g. `1h 30m`)")
            }
        }
    }
}

impl std::error::Error for TimeError {}

/// A non-negative time duration held in milliseconds.
///
/// Constructed from any unit; all arithmetic happens on the millisecond
/// value. `subtract` mirrors `add` and is not clamped, so a duration can be
/// driven below zero by subtraction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Time {
    ms: f64,
}

/// Unit token alternation shared by the duration grammar regexes.
const UNIT_TOKENS: &str = "(?:milliseconds?|msecs?|msec|ms|seconds?|secs?|sec|s\
|minutes?|mins?|min|m|hours?|hrs?|hr|h|days?|d|weeks?|wks?|wk|w\
|months?|mos?|mo|years?|yrs?|yr|y)";

impl Time {
    fn from_unit(field: &'static str, value: f64, unit: TimeUnit) -> Result<Self, TimeError> {
        if !value.is_finite() {
            return Err(TimeError::InvalidType {
                field,
                expected: "a finite number",
            });
        }
        if value < 0.0 {
            return Err(TimeError::OutOfRange {
                field,
                constraint: "0 or greater",
            });
        }

        Ok(Self {
            ms: value * unit.as_f64(),
        })
    }

    /// Create a duration from milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error when `ms` is non-finite or negative.
    pub fn from_milliseconds(ms: f64) -> Result<Self, TimeError> {
        Self::from_unit("ms", ms, TimeUnit::Millisecond)
    }

    /// Create a duration from seconds.
    ///
    /// # Errors
    ///
    /// Returns an error when `seconds` is non-finite or negative.
    pub fn from_seconds(seconds: f64) -> Result<Self, TimeError> {
        Self::from_unit("seconds", seconds, TimeUnit::Second)
    }

    /// Create a duration from minutes.
    ///
    /// # Errors
    ///
    /// Returns an error when `minutes` is non-finite or negative.
    pub fn from_minutes(minutes: f64) -> Result<Self, TimeError> {
        Self::from_unit("minutes", minutes, TimeUnit::Minute)
    }

    /// Create a duration from hours.
    ///
    /// # Errors
    ///
    /// Returns an error when `hours` is non-finite or negative.
    pub fn from_hours(hours: f64) -> Result<Self, TimeError> {
        Self::from_unit("hours", hours, TimeUnit::Hour)
    }

    /// Create a duration from days.
    ///
    /// # Errors
    ///
    /// Returns an error when `days` is non-finite or negative.
    pub fn from_days(days: f64) -> Result<Self, TimeError> {
        Self::from_unit("days", days, TimeUnit::Day)
    }

    /// Create a duration from weeks.
    ///
    /// # Errors
    ///
    /// Returns an error when `weeks` is non-finite or negative.
    pub fn from_weeks(weeks: f64) -> Result<Self, TimeError> {
        Self::from_unit("weeks", weeks, TimeUnit::Week)
    }

    /// Create a duration from years (365 days and 6 hours each).
    ///
    /// # Errors
    ///
    /// Returns an error when `years` is non-finite or negative.
    pub fn from_years(years: f64) -> Result<Self, TimeError> {
        Self::from_unit("years", years, TimeUnit::Year)
    }

    #[must_use]
    pub const fn to_milliseconds(&self) -> f64 {
        self.ms
    }

    #[must_use]
    pub fn to_seconds(&self) -> f64 {
        self.ms / TimeUnit::Second.as_f64()
    }

    #[must_use]
    pub fn to_minutes(&self) -> f64 {
        self.ms / TimeUnit::Minute.as_f64()
    }

    #[must_use]
    pub fn to_hours(&self) -> f64 {
        self.ms / TimeUnit::Hour.as_f64()
    }

    #[must_use]
    pub fn to_days(&self) -> f64 {
        self.ms / TimeUnit::Day.as_f64()
    }

    #[must_use]
    pub fn to_weeks(&self) -> f64 {
        self.ms / TimeUnit::Week.as_f64()
    }

    #[must_use]
    pub fn to_years(&self) -> f64 {
        self.ms / TimeUnit::Year.as_f64()
    }

    /// Add another duration in place.
    pub fn add(&mut self, time: Time) -> &mut Self {
        self.ms += time.ms;
        self
    }

    /// Add raw milliseconds in place.
    pub fn add_ms(&mut self, ms: f64) -> &mut Self {
        self.ms += ms;
        self
    }

    /// Subtract another duration in place. Not clamped at zero.
    pub fn subtract(&mut self, time: Time) -> &mut Self {
        self.ms -= time.ms;
        self
    }

    /// Subtract raw milliseconds in place. Not clamped at zero.
    pub fn subtract_ms(&mut self, ms: f64) -> &mut Self {
        self.ms -= ms;
        self
    }

    /// The duration in every unit as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "ms": self.ms,
            "seconds": self.to_seconds(),
            "minutes": self.to_minutes(),
            "hours": self.to_hours(),
            "days": self.to_days(),
            "weeks": self.to_weeks(),
            "years": self.to_years(),
        })
    }
}

fn unit_from_token(token: &str) -> Option<TimeUnit> {
    Some(match token {
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => TimeUnit::Millisecond,
        "s" | "sec" | "secs" | "second" | "seconds" => TimeUnit::Second,
        "m" | "min" | "mins" | "minute" | "minutes" => TimeUnit::Minute,
        "h" | "hr" | "hrs" | "hour" | "hours" => TimeUnit::Hour,
        "d" | "day" | "days" => TimeUnit::Day,
        "w" | "wk" | "wks" | "week" | "weeks" => TimeUnit::Week,
        "mo" | "mos" | "month" | "months" => TimeUnit::Month,
        "y" | "yr" | "yrs" | "year" | "years" => TimeUnit::Year,
        _ => return None,
    })
}

impl FromStr for Time {
    type Err = TimeError;

    /// Parse a compact duration string such as `"90s"` or `"1h 30m"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static FORMAT_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!(
                r"^\s*(?:\d+(?:\.\d+)?\s*{UNIT_TOKENS}\b)(?:\s+\d+(?:\.\d+)?\s*{UNIT_TOKENS}\b)*\s*$"
            ))
            .expect("valid regex")
        });
        static UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(&format!(r"(\d+(?:\.\d+)?)\s*({UNIT_TOKENS})\b")).expect("valid regex")
        });

        if !FORMAT_RE.is_match(s) {
            return Err(TimeError::Syntax {
                input: s.to_string(),
            });
        }

        log::trace!("parsing duration {s:?}");

        let mut ms = 0.0;
        for caps in UNIT_RE.captures_iter(s) {
            let value: f64 = caps[1].parse().expect("digits validated by the grammar");
            let unit = unit_from_token(&caps[2]).expect("token validated by the grammar");
            ms += value * unit.as_f64();
        }

        Ok(Self { ms })
    }
}

impl fmt::Display for Time {
    /// Humanized breakdown, largest unit first: `"1 minute, 10 seconds"`.
    /// Zero components are skipped; a zero duration renders as the empty
    /// string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNITS: [(TimeUnit, &str); 6] = [
            (TimeUnit::Year, "year"),
            (TimeUnit::Week, "week"),
            (TimeUnit::Day, "day"),
            (TimeUnit::Hour, "hour"),
            (TimeUnit::Minute, "minute"),
            (TimeUnit::Second, "second"),
        ];

        let mut left = self.ms;
        let mut parts: Vec<String> = Vec::new();

        for (unit, name) in UNITS {
            let count = (left / unit.as_f64()).floor();
            if count > 0.0 {
                let plural = if count > 1.0 { "s" } else { "" };
                parts.push(format!("{count} {name}{plural}"));
                left -= count * unit.as_f64();
            }
        }

        if left > 0.0 {
            let plural = if left > 1.0 { "s" } else { "" };
            parts.push(format!("{left} millisecond{plural}"));
        }

        write!(f, "{}", parts.join(", "))
    }
}

impl From<Time> for f64 {
    fn from(time: Time) -> Self {
        time.to_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_convert_to_ms() {
        assert_eq!(Time::from_seconds(1.0).unwrap().to_milliseconds(), 1000.0);
        assert_eq!(Time::from_minutes(2.0).unwrap().to_milliseconds(), 120_000.0);
        assert_eq!(
            Time::from_hours(3.0).unwrap().to_milliseconds(),
            10_800_000.0
        );
        assert_eq!(
            Time::from_days(4.0).unwrap().to_milliseconds(),
            345_600_000.0
        );
        assert_eq!(
            Time::from_weeks(1.0).unwrap().to_milliseconds(),
            604_800_000.0
        );
        assert_eq!(
            Time::from_years(1.0).unwrap().to_milliseconds(),
            31_557_600_000.0
        );
    }

    #[test]
    fn test_constructor_validation() {
        assert!(matches!(
            Time::from_milliseconds(f64::NAN),
            Err(TimeError::InvalidType { field: "ms", .. })
        ));
        assert!(matches!(
            Time::from_seconds(-1.0),
            Err(TimeError::OutOfRange {
                field: "seconds",
                ..
            })
        ));
    }

    #[test]
    fn test_conversions() {
        let time = Time::from_milliseconds(90_000.0).unwrap();
        assert_eq!(time.to_seconds(), 90.0);
        assert_eq!(time.to_minutes(), 1.5);
        assert_eq!(time.to_hours(), 0.025);
    }

    #[test]
    fn test_add_and_subtract() {
        let mut time = Time::from_milliseconds(1000.0).unwrap();
        time.add(Time::from_milliseconds(500.0).unwrap());
        assert_eq!(time.to_milliseconds(), 1500.0);

        time.subtract_ms(300.0);
        assert_eq!(time.to_milliseconds(), 1200.0);

        // Subtraction is not clamped.
        time.subtract(Time::from_seconds(2.0).unwrap());
        assert_eq!(time.to_milliseconds(), -800.0);
    }

    #[test]
    fn test_to_milliseconds_helper() {
        assert_eq!(to_milliseconds(1.0, TimeUnit::Second), 1000.0);
        assert_eq!(to_milliseconds(1.0, TimeUnit::Month), 2_629_800_000.0);
        assert_eq!(to_milliseconds(500.0, TimeUnit::Millisecond), 500.0);
    }

    #[test]
    fn test_display_humanizes() {
        let time = Time::from_milliseconds(70_000.0).unwrap();
        assert_eq!(time.to_string(), "1 minute, 10 seconds");

        let long = Time::from_milliseconds(3_661_000.0).unwrap();
        assert_eq!(long.to_string(), "1 hour, 1 minute, 1 second");

        let with_ms = Time::from_milliseconds(1500.0).unwrap();
        assert_eq!(with_ms.to_string(), "1 second, 500 milliseconds");
    }

    #[test]
    fn test_display_of_zero_is_empty() {
        assert_eq!(Time::from_milliseconds(0.0).unwrap().to_string(), "");
    }

    #[test]
    fn test_parse_single_unit() {
        let time: Time = "90s".parse().unwrap();
        assert_eq!(time.to_seconds(), 90.0);
    }

    #[test]
    fn test_parse_compound() {
        let time: Time = "1h 30m".parse().unwrap();
        assert_eq!(time.to_minutes(), 90.0);

        let verbose: Time = "2 days 4 hours".parse().unwrap();
        assert_eq!(verbose.to_hours(), 52.0);
    }

    #[test]
    fn test_parse_fractional_and_aliases() {
        let time: Time = "1.5 hrs".parse().unwrap();
        assert_eq!(time.to_minutes(), 90.0);

        let months: Time = "1mo".parse().unwrap();
        assert_eq!(months.to_milliseconds(), 2_629_800_000.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "fast", "10", "5 parsecs", "h1"] {
            assert!(
                matches!(bad.parse::<Time>(), Err(TimeError::Syntax { .. })),
                "{bad:?} should be a syntax error"
            );
        }
    }

    #[test]
    fn test_to_json_shape() {
        let json = Time::from_milliseconds(60_000.0).unwrap().to_json();
        assert_eq!(json["ms"], 60_000.0);
        assert_eq!(json["seconds"], 60.0);
        assert_eq!(json["minutes"], 1.0);
    }

    #[test]
    fn test_value_of() {
        let time = Time::from_milliseconds(1000.0).unwrap();
        assert_eq!(f64::from(time), 1000.0);
    }
}
