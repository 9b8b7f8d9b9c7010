use std::sync::atomic::{AtomicU64, Ordering};

/// Mints process-unique identifiers of the form `{prefix}-{n}`.
///
/// The counter is atomic, so one generator can be shared by reference
/// between threads. Each generator is independent; there is no global state.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl IdGenerator {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }

    /// Returns the next identifier. Never returns the same value twice.
    #[must_use]
    pub fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("roundel")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn ids_are_sequential() {
        let ids = IdGenerator::new("clip");
        assert_eq!(ids.next_id(), "clip-0");
        assert_eq!(ids.next_id(), "clip-1");
        assert_eq!(ids.prefix(), "clip");
    }

    #[test]
    fn generators_are_independent() {
        let a = IdGenerator::default();
        let b = IdGenerator::default();
        assert_eq!(a.next_id(), b.next_id());
    }

    #[test]
    fn ids_are_unique_across_threads() {
        let ids = Arc::new(IdGenerator::new("t"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..100).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();
        let mut seen = HashSet::new();
        for h in handles {
            for id in h.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 400);
    }
}
