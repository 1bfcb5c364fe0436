/// Trailing-edge debounce, bookkeeping half.
///
/// Every raw input restarts the quiescence window by handing out a fresh
/// generation number; the wasm glue schedules one timer per generation and
/// cancels the previous one. When a timer fires it calls [`Debounce::fire`]
/// with its generation, and only the latest generation yields a value, so
/// exactly one value is emitted per settling period.
///
/// Value equality is deliberately not special-cased: typing a character and
/// deleting it again still restarts the window.
#[derive(Debug, Default)]
pub struct Debounce {
    pending: Option<String>,
    generation: u64,
}

impl Debounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a raw change and return the generation the caller should
    /// schedule a timer for. Any previously handed-out generation becomes
    /// stale immediately.
    pub fn input(&mut self, value: impl Into<String>) -> u64 {
        self.pending = Some(value.into());
        self.generation += 1;
        self.generation
    }

    /// Timer callback for `generation`. Yields the settled value only if no
    /// newer input arrived in the meantime.
    pub fn fire(&mut self, generation: u64) -> Option<String> {
        if generation == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Invalidate whatever is pending (controller teardown).
    pub fn cancel(&mut self) {
        self.pending = None;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_last_value_of_a_burst() {
        let mut d = Debounce::new();
        let g1 = d.input("a");
        let g2 = d.input("ab");
        let g3 = d.input("abc");
        // timers for superseded generations fire later but yield nothing
        assert_eq!(d.fire(g1), None);
        assert_eq!(d.fire(g2), None);
        assert_eq!(d.fire(g3), Some("abc".to_string()));
    }

    #[test]
    fn fires_at_most_once_per_settling_period() {
        let mut d = Debounce::new();
        let g = d.input("x");
        assert_eq!(d.fire(g), Some("x".to_string()));
        assert_eq!(d.fire(g), None);
    }

    #[test]
    fn returning_to_previous_value_still_restarts() {
        let mut d = Debounce::new();
        let g1 = d.input("abc");
        assert_eq!(d.fire(g1), Some("abc".to_string()));
        // user types a char and deletes it before the window elapses
        let g2 = d.input("abcd");
        let g3 = d.input("abc");
        assert_eq!(d.fire(g2), None);
        assert_eq!(d.fire(g3), Some("abc".to_string()));
    }

    #[test]
    fn cancel_drops_pending_value() {
        let mut d = Debounce::new();
        let g = d.input("abc");
        d.cancel();
        assert_eq!(d.fire(g), None);
    }
}
