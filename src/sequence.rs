//! Connection-scoped generator for cyclic packet counters.
//!
//! The generator performs no locking: the link actor owns exactly one
//! instance per logical connection and stamps packets in transmission order,
//! so calls to [`SequenceGenerator::next`] are serialized by construction.

use crate::packet::Counter;

/// Produces consecutive [`Counter`] values with wraparound.
///
/// # Examples
///
/// ```
/// use gattlink::packet::Counter;
/// use gattlink::sequence::SequenceGenerator;
///
/// let mut seq = SequenceGenerator::new();
/// assert_eq!(seq.next().get(), 0);
/// assert_eq!(seq.next().get(), 1);
/// seq.reset();
/// assert_eq!(seq.next(), Counter::ZERO);
/// ```
#[derive(Clone, Debug)]
pub struct SequenceGenerator {
    next_value: Counter,
}

impl Default for SequenceGenerator {
    fn default() -> Self { Self::new() }
}

impl SequenceGenerator {
    /// Create a generator starting at [`Counter::ZERO`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_value: Counter::ZERO,
        }
    }

    /// Return the current counter and advance with wraparound.
    #[expect(clippy::should_implement_trait, reason = "not an iterator; mirrors the protocol operation")]
    pub fn next(&mut self) -> Counter {
        let value = self.next_value;
        self.next_value = value.wrapping_next();
        value
    }

    /// Return the generator to its initial value for a new logical connection.
    pub fn reset(&mut self) { self.next_value = Counter::ZERO; }
}

#[cfg(test)]
mod tests {
    use super::SequenceGenerator;
    use crate::packet::Counter;

    #[test]
    fn next_advances_by_one_modulo_the_space() {
        let mut seq = SequenceGenerator::new();
        let mut previous = seq.next();
        for _ in 0..(u16::from(Counter::SPACE) * 2) {
            let current = seq.next();
            assert_eq!(current, previous.wrapping_next());
            previous = current;
        }
    }

    #[test]
    fn counter_wraps_to_zero_after_the_space() {
        let mut seq = SequenceGenerator::new();
        for expected in 0..Counter::SPACE {
            assert_eq!(seq.next().get(), expected);
        }
        assert_eq!(seq.next(), Counter::ZERO);
    }

    #[test]
    fn reset_returns_to_the_initial_value() {
        let mut seq = SequenceGenerator::new();
        seq.next();
        seq.next();
        seq.next();
        seq.reset();
        assert_eq!(seq.next(), Counter::ZERO);
    }
}
