use chrono::{NaiveDate, NaiveDateTime, Utc};

/// Source of "now" for status classification and the transaction log.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Current UTC wall-clock time.
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Pin the clock to noon of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self(date.and_hms_opt(12, 0, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
