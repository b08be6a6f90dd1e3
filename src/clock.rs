//! Wall-clock access in an explicit time zone.
//!
//! Alarm matching and the tomorrow/yesterday views all work on zone-local
//! `NaiveDateTime`s. The zone is chosen once from configuration, so nothing
//! below the event loop reads the ambient system clock directly.

use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use std::fmt;

/// Time zone used to interpret alarm times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Whatever the process's local zone is
    Local,
    /// A named IANA zone
    Named(Tz),
}

impl Zone {
    /// Parse an IANA zone name; "local" (any case) selects the process zone
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Some(Self::Local);
        }
        trimmed.parse::<Tz>().ok().map(Self::Named)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// Source of "now"
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system clock and converts it into a zone
#[derive(Debug, Clone, Copy)]
pub struct ZoneClock {
    zone: Zone,
}

impl ZoneClock {
    pub fn new(zone: Zone) -> Self {
        Self { zone }
    }
}

impl Clock for ZoneClock {
    fn now(&self) -> NaiveDateTime {
        match self.zone {
            Zone::Local => Local::now().naive_local(),
            Zone::Named(tz) => Utc::now().with_timezone(&tz).naive_local(),
        }
    }
}

/// Clock pinned to a settable instant
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: std::rc::Rc<std::cell::Cell<NaiveDateTime>>,
}

#[cfg(test)]
impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: std::rc::Rc::new(std::cell::Cell::new(now)),
        }
    }

    /// Move every handle sharing this clock to `now`
    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn test_zone_parse() {
        assert_eq!(Zone::parse("local"), Some(Zone::Local));
        assert_eq!(Zone::parse(" LOCAL "), Some(Zone::Local));
        assert_eq!(
            Zone::parse("Europe/Madrid"),
            Some(Zone::Named(chrono_tz::Europe::Madrid))
        );
        assert_eq!(Zone::parse("Mars/Olympus_Mons"), None);
    }

    #[test]
    fn test_zone_display() {
        assert_eq!(Zone::Local.to_string(), "local");
        assert_eq!(Zone::Named(chrono_tz::Asia::Tokyo).to_string(), "Asia/Tokyo");
    }

    #[test]
    fn test_named_zone_offsets_from_utc() {
        let utc = ZoneClock::new(Zone::Named(chrono_tz::UTC)).now();
        let tokyo = ZoneClock::new(Zone::Named(chrono_tz::Asia::Tokyo)).now();

        // Tokyo has no DST and sits nine hours ahead
        let offset = tokyo - utc;
        assert!((offset - Duration::hours(9)).num_seconds().abs() < 5);
    }

    #[test]
    fn test_fixed_clock_shared_handle() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let clock = FixedClock::new(start);
        let handle = clock.clone();

        handle.set(start + Duration::minutes(30));

        assert_eq!(clock.now(), start + Duration::minutes(30));
        assert_eq!(clock.today(), start.date());
    }
}
