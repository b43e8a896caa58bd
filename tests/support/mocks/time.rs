use chrono::{DateTime, Utc};
use imprint_core::application::ports::time::Clock;

/// Clock pinned to a single instant so tests can assert timestamps.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
