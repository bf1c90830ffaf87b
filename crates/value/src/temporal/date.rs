//! Date type with shared mutable storage
//!
//! A [`Date`] is a handle to a millisecond Unix timestamp. Unlike the
//! immutable scalars, the stored instant can be changed after construction,
//! and every handle to the same container sees the change.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};
use parking_lot::RwLock;

use crate::core::error::{ValueError, ValueResult};

/// Internal instant storage
///
/// The millisecond count lives behind a lock so that every handle to the
/// same container observes mutations made through any other handle.
#[derive(Debug)]
pub struct DateInner {
    millis: RwLock<i64>,
}

impl DateInner {
    fn new(millis: i64) -> Self {
        Self {
            millis: RwLock::new(millis),
        }
    }
}

/// An instant-in-time container with shared mutable storage
///
/// `Date` wraps a millisecond Unix timestamp. Cloning the handle is cheap and
/// shares the container (two handles, one instant); producing an independent
/// container is the job of the deep-clone operation, which rebuilds a `Date`
/// from [`Date::timestamp_millis`].
#[derive(Debug, Clone)]
pub struct Date {
    inner: Arc<DateInner>,
}

impl Date {
    // ==================== Constructors ====================

    /// Creates from a Unix timestamp in milliseconds
    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self {
            inner: Arc::new(DateInner::new(millis)),
        }
    }

    /// Creates from a Unix timestamp in seconds
    pub fn from_timestamp(timestamp: i64) -> Self {
        Self::from_timestamp_millis(timestamp.saturating_mul(1000))
    }

    /// Creates a Date for the current moment (UTC)
    pub fn now() -> Self {
        Self::from_timestamp_millis(Utc::now().timestamp_millis())
    }

    /// Creates a Date at the Unix epoch
    pub fn unix_epoch() -> Self {
        Self::from_timestamp_millis(0)
    }

    /// Parses from an ISO 8601 / RFC 3339 string
    ///
    /// Accepts a full RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS[.fff]`
    /// datetime (interpreted as UTC, `T` or space separated) or a bare
    /// `YYYY-MM-DD` date (midnight UTC).
    pub fn parse_iso(s: &str) -> ValueResult<Self> {
        let s = s.trim();

        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_timestamp_millis(dt.timestamp_millis()));
        }

        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Self::from_timestamp_millis(
                    naive.and_utc().timestamp_millis(),
                ));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let midnight = date.and_time(NaiveTime::MIN);
            return Ok(Self::from_timestamp_millis(
                midnight.and_utc().timestamp_millis(),
            ));
        }

        Err(ValueError::parse_error("ISO 8601 date", s))
    }

    /// Parses from an RFC 3339 string
    pub fn parse_rfc3339(s: &str) -> ValueResult<Self> {
        chrono::DateTime::parse_from_rfc3339(s)
            .map(|dt| Self::from_timestamp_millis(dt.timestamp_millis()))
            .map_err(|e| ValueError::parse_error("RFC 3339 date", format!("{}: {}", s, e)))
    }

    // ==================== Basic Properties ====================

    /// Returns the Unix timestamp in milliseconds
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        *self.inner.millis.read()
    }

    /// Returns the Unix timestamp in seconds
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.timestamp_millis().div_euclid(1000)
    }

    /// Converts to a chrono UTC datetime, if the instant is representable
    pub fn datetime(&self) -> Option<chrono::DateTime<Utc>> {
        chrono::DateTime::from_timestamp_millis(self.timestamp_millis())
    }

    /// Converts to a chrono UTC datetime
    pub fn try_datetime(&self) -> ValueResult<chrono::DateTime<Utc>> {
        let millis = self.timestamp_millis();
        chrono::DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            ValueError::out_of_range(
                format!("{} ms", millis),
                "representable instant range",
                "representable instant range",
            )
        })
    }

    // ==================== Mutation ====================

    /// Replaces the stored instant
    ///
    /// Visible through every handle sharing this container.
    pub fn set_timestamp_millis(&self, millis: i64) {
        *self.inner.millis.write() = millis;
    }

    // ==================== Identity ====================

    /// Checks whether two handles share the same container
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // ==================== Formatting ====================

    /// Returns an ISO 8601 / RFC 3339 string with millisecond precision
    ///
    /// Instants outside the representable chrono range render as a raw
    /// millisecond count.
    pub fn to_iso_string(&self) -> String {
        match self.datetime() {
            Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
            None => format!("{} ms since epoch", self.timestamp_millis()),
        }
    }

    /// Formats using a chrono format string
    pub fn format(&self, fmt: &str) -> ValueResult<String> {
        let dt = self.try_datetime()?;
        Ok(dt.format(fmt).to_string())
    }
}

// ==================== Trait Implementations ====================

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso_string())
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::unix_epoch()
    }
}

impl FromStr for Date {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp_millis() == other.timestamp_millis()
    }
}

impl Eq for Date {}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.timestamp_millis().cmp(&other.timestamp_millis())
    }
}

// ==================== From Implementations ====================

impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for Date {
    fn from(dt: chrono::DateTime<Tz>) -> Self {
        Self::from_timestamp_millis(dt.timestamp_millis())
    }
}

// ==================== Send + Sync ====================

// Static assertions to ensure the container stays thread-safe
// This catches issues at compile time if inner types change
static_assertions::assert_impl_all!(DateInner: Send, Sync);
static_assertions::assert_impl_all!(Date: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let date = Date::from_timestamp_millis(1_735_129_845_123);
        assert_eq!(date.timestamp_millis(), 1_735_129_845_123);
        assert_eq!(date.timestamp(), 1_735_129_845);
    }

    #[test]
    fn test_epoch() {
        let epoch = Date::unix_epoch();
        assert_eq!(epoch.timestamp_millis(), 0);
        assert_eq!(epoch, Date::default());
    }

    #[test]
    fn test_negative_timestamp() {
        let date = Date::from_timestamp_millis(-500);
        assert_eq!(date.timestamp(), -1);
    }

    #[test]
    fn test_parsing() {
        let date = Date::parse_iso("2024-12-25T14:30:45Z").unwrap();
        assert_eq!(date.to_iso_string(), "2024-12-25T14:30:45.000Z");

        let with_millis = Date::parse_iso("2024-12-25T14:30:45.123Z").unwrap();
        assert_eq!(with_millis.timestamp_millis() % 1000, 123);

        let naive = Date::parse_iso("2024-12-25T14:30:45").unwrap();
        assert_eq!(naive, date);

        let spaced = Date::parse_iso("2024-12-25 14:30:45").unwrap();
        assert_eq!(spaced, date);

        let midnight = Date::parse_iso("2024-12-25").unwrap();
        assert_eq!(midnight.to_iso_string(), "2024-12-25T00:00:00.000Z");

        assert!(Date::parse_iso("not-a-date").is_err());
    }

    #[test]
    fn test_from_str() {
        let date: Date = "2024-12-25T14:30:45Z".parse().unwrap();
        assert_eq!(date.to_iso_string(), "2024-12-25T14:30:45.000Z");
    }

    #[test]
    fn test_display_roundtrip() {
        let date = Date::from_timestamp_millis(1_735_129_845_123);
        let parsed = Date::parse_iso(&date.to_string()).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_mutation() {
        let date = Date::from_timestamp_millis(1000);
        date.set_timestamp_millis(2000);
        assert_eq!(date.timestamp_millis(), 2000);
    }

    #[test]
    fn test_clone_shares_container() {
        let date = Date::from_timestamp_millis(1000);
        let alias = date.clone();
        assert!(date.ptr_eq(&alias));

        alias.set_timestamp_millis(9999);
        assert_eq!(date.timestamp_millis(), 9999);
    }

    #[test]
    fn test_fresh_containers_are_distinct() {
        let a = Date::from_timestamp_millis(1000);
        let b = Date::from_timestamp_millis(1000);
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));

        b.set_timestamp_millis(2000);
        assert_eq!(a.timestamp_millis(), 1000);
        assert_ne!(a, b);
    }

    #[test]
    fn test_ordering() {
        let earlier = Date::from_timestamp_millis(1000);
        let later = Date::from_timestamp_millis(2000);
        assert!(earlier < later);
    }

    #[test]
    fn test_from_chrono() {
        let chrono_dt = Utc.with_ymd_and_hms(2024, 12, 25, 14, 30, 45).unwrap();
        let date: Date = chrono_dt.into();
        assert_eq!(date.timestamp_millis(), chrono_dt.timestamp_millis());
        assert_eq!(date.datetime().unwrap(), chrono_dt);
    }

    #[test]
    fn test_out_of_range_formatting() {
        let date = Date::from_timestamp_millis(i64::MAX);
        assert!(date.datetime().is_none());
        assert!(date.try_datetime().is_err());
        assert!(date.to_iso_string().contains("ms since epoch"));
    }
}
