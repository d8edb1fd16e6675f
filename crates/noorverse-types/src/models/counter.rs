//! Tasbeeh (dhikr) counter.

/// A persisted tap counter.
///
/// The stored form is the plain decimal count, so anything unreadable in
/// storage restarts the counter at zero rather than poisoning it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tasbeeh {
    count: u64,
}

impl Tasbeeh {
    /// Restore from a stored string, falling back to zero on garbage.
    pub fn from_stored(raw: &str) -> Self {
        Self {
            count: raw.trim().parse().unwrap_or(0),
        }
    }

    /// Current count.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// One tap.
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// String form written back to storage.
    pub fn to_stored(&self) -> String {
        self.count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restores_a_saved_count() {
        assert_eq!(Tasbeeh::from_stored("33").count(), 33);
        assert_eq!(Tasbeeh::from_stored(" 7 ").count(), 7);
    }

    #[test]
    fn garbage_resets_to_zero() {
        assert_eq!(Tasbeeh::from_stored("").count(), 0);
        assert_eq!(Tasbeeh::from_stored("NaN").count(), 0);
        assert_eq!(Tasbeeh::from_stored("-4").count(), 0);
        assert_eq!(Tasbeeh::from_stored("lots").count(), 0);
    }

    #[test]
    fn a_round_of_dhikr() {
        let mut counter = Tasbeeh::default();
        for _ in 0..33 {
            counter.increment();
        }
        assert_eq!(counter.count(), 33);
        assert_eq!(counter.to_stored(), "33");
        counter.reset();
        assert_eq!(counter.count(), 0);
    }
}
