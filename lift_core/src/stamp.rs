//! Identity and clock source for newly created records.
//!
//! Parsing is otherwise a pure function of the report text; the only
//! non-deterministic inputs (record id and "now") come through [`Stamp`]
//! so tests can pin them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Supplies the id and timestamp for a freshly created record
pub trait Stamp {
    fn now(&self) -> DateTime<Utc>;
    fn new_id(&self) -> Uuid;
}

/// Wall clock and random v4 ids
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemStamp;

impl Stamp for SystemStamp {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn new_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Always returns the same id and timestamp
#[derive(Clone, Copy, Debug)]
pub struct FixedStamp {
    pub at: DateTime<Utc>,
    pub id: Uuid,
}

impl FixedStamp {
    pub fn new(at: DateTime<Utc>, id: Uuid) -> Self {
        Self { at, id }
    }
}

impl Stamp for FixedStamp {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }

    fn new_id(&self) -> Uuid {
        self.id
    }
}
