//! Per-minute occurrence buckets for modifier tallies
//!
//! Query timestamps carry no date, only a time of day, so the timeline is a
//! dense array of 1440 minute buckets. Seconds are accepted on input and
//! ignored for bucketing.

use thiserror::Error;

/// Number of minute buckets in a timeline
pub const MINUTES_PER_DAY: usize = 24 * 60;

/// Error for a timestamp that is not a valid time of day
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid time of day: {0:?}")]
pub struct InvalidTime(pub String);

/// A clock time truncated to the minute, parsed from "HH:MM" or "HH:MM:SS"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MinuteOfDay(u16);

impl MinuteOfDay {
    /// Parse "HH:MM" or "HH:MM:SS"; hours may be one or two digits.
    pub fn parse(text: &str) -> Result<Self, InvalidTime> {
        let invalid = || InvalidTime(text.to_string());
        let mut parts = text.split(':');

        let hour: u16 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minute: u16 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        if let Some(seconds) = parts.next() {
            let seconds: u16 = seconds.parse().map_err(|_| invalid())?;
            if seconds >= 60 {
                return Err(invalid());
            }
        }
        if parts.next().is_some() || hour >= 24 || minute >= 60 {
            return Err(invalid());
        }

        Ok(Self(hour * 60 + minute))
    }

    /// Bucket index in the 0..1440 range
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Render as "HH:MM"
    pub fn label(self) -> String {
        format!("{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Modifier occurrence counts per minute of day for one corpus
#[derive(Debug, Clone)]
pub struct Timeline {
    buckets: Vec<u64>,
}

impl Timeline {
    /// Create an empty timeline
    pub fn new() -> Self {
        Self {
            buckets: vec![0; MINUTES_PER_DAY],
        }
    }

    /// Add occurrences to the bucket for the given minute
    pub fn add(&mut self, at: MinuteOfDay, count: u64) {
        self.buckets[at.index()] += count;
    }

    /// All 1440 buckets, minute 00:00 first
    pub fn buckets(&self) -> &[u64] {
        &self.buckets
    }

    /// Largest bucket value
    pub fn max(&self) -> u64 {
        self.buckets.iter().copied().max().unwrap_or(0)
    }

    /// Sum over all buckets
    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hh_mm() {
        assert_eq!(MinuteOfDay::parse("00:00").unwrap().index(), 0);
        assert_eq!(MinuteOfDay::parse("23:59").unwrap().index(), 1439);
        assert_eq!(MinuteOfDay::parse("12:30").unwrap().index(), 750);
    }

    #[test]
    fn test_parse_hh_mm_ss_ignores_seconds() {
        let a = MinuteOfDay::parse("12:30:00").unwrap();
        let b = MinuteOfDay::parse("12:30:59").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.index(), 750);
    }

    #[test]
    fn test_parse_single_digit_hour() {
        assert_eq!(MinuteOfDay::parse("9:05").unwrap().index(), 545);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(MinuteOfDay::parse("24:00").is_err());
        assert!(MinuteOfDay::parse("12:60").is_err());
        assert!(MinuteOfDay::parse("12:30:60").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(MinuteOfDay::parse("").is_err());
        assert!(MinuteOfDay::parse("noon").is_err());
        assert!(MinuteOfDay::parse("12").is_err());
        assert!(MinuteOfDay::parse("12:30:00:00").is_err());
        assert!(MinuteOfDay::parse("-1:30").is_err());
    }

    #[test]
    fn test_label_round_trip() {
        let t = MinuteOfDay::parse("07:05:33").unwrap();
        assert_eq!(t.label(), "07:05");
    }

    #[test]
    fn test_timeline_accumulates() {
        let mut timeline = Timeline::new();
        let noon = MinuteOfDay::parse("12:00").unwrap();
        timeline.add(noon, 2);
        timeline.add(noon, 3);
        timeline.add(MinuteOfDay::parse("00:00").unwrap(), 1);

        assert_eq!(timeline.buckets()[noon.index()], 5);
        assert_eq!(timeline.buckets()[0], 1);
        assert_eq!(timeline.max(), 5);
        assert_eq!(timeline.total(), 6);
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::new();
        assert_eq!(timeline.buckets().len(), MINUTES_PER_DAY);
        assert_eq!(timeline.max(), 0);
        assert_eq!(timeline.total(), 0);
    }
}
