use chrono::{DateTime, Duration, Utc};

use crate::State;

/// Virtual clock.
///
/// The app loop moves it to the wall clock every frame; tests move it by hand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { virt: now }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.virt
    }

    pub fn advance(&mut self, by: Duration) {
        self.virt += by;
    }
}

impl State for Time {
    const TYPE: &'static str = "time";
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
