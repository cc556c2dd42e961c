//! Id generation for records created through `RecordStore::add`.

use chrono::Utc;

/// Source of fresh record ids
pub trait IdGenerator: Send {
    /// Produce an id never returned before by this generator
    fn next_id(&mut self) -> String;
}

/// Millisecond-timestamp ids, strictly increasing within one generator.
///
/// Two calls inside the same millisecond get consecutive values, so rapid
/// successive adds never collide.
#[derive(Debug, Default)]
pub struct MonotonicIds {
    last: i64,
}

impl MonotonicIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for MonotonicIds {
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}

/// Counter ids ("1", "2", ...) for deterministic tests
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting after `last`
    pub fn starting_after(last: u64) -> Self {
        Self { next: last }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        self.next.to_string()
    }
}
