//! Clock sources. The engine never reads the wall clock directly so runs can
//! be replayed at a fixed instant.

use chrono::{Duration, Local, NaiveDateTime};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a given instant; can be moved by hand.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }

    pub fn set(&mut self, at: NaiveDateTime) {
        self.at = at;
    }

    pub fn advance(&mut self, by: Duration) {
        self.at += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}

/// Either clock, picked at startup from the `--now` override.
#[derive(Debug, Clone, Copy)]
pub enum AnyClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl AnyClock {
    pub fn from_override(at: Option<NaiveDateTime>) -> Self {
        match at {
            Some(at) => AnyClock::Fixed(FixedClock::new(at)),
            None => AnyClock::System(SystemClock),
        }
    }
}

impl Clock for AnyClock {
    fn now(&self) -> NaiveDateTime {
        match self {
            AnyClock::System(c) => c.now(),
            AnyClock::Fixed(c) => c.now(),
        }
    }
}
