use chrono::Utc;

/// Hands out transaction ids derived from the creation time in milliseconds.
///
/// Two ids requested within the same millisecond (or after the clock moved
/// backwards) are bumped past the last one issued, so ids stay unique and
/// strictly increasing for a single writer.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts issuing ids after `last`, e.g. the largest restored id.
    pub fn seeded(last: u64) -> Self {
        Self { last }
    }

    pub fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    pub fn next_at(&mut self, now_millis: u64) -> u64 {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    pub fn last_issued(&self) -> u64 {
        self.last
    }
}
