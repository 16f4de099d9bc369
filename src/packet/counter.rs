//! Cyclic sequence counter carried in every packet header.
//!
//! The counter occupies [`COUNTER_BITS`] bits and wraps after
//! [`Counter::SPACE`] values. A small space keeps header overhead minimal
//! while still catching the loss and duplication patterns of a stop-and-wait
//! link where at most one write is ever outstanding.

use derive_more::{Display, Into};

/// Width of the counter field in bits.
pub const COUNTER_BITS: u8 = 3;

/// Cyclic per-packet sequence counter.
///
/// Values live in `[0, Counter::SPACE)`; the only way to obtain one is via
/// [`Counter::new`] or [`Counter::wrapping_next`], so an out-of-range counter
/// is unrepresentable.
///
/// # Examples
///
/// ```
/// use gattlink::packet::Counter;
/// let c = Counter::new(7).expect("within the cyclic space");
/// assert_eq!(c.wrapping_next(), Counter::ZERO);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Into)]
#[display("{_0}")]
pub struct Counter(u8);

impl Counter {
    /// Number of distinct counter values before wraparound.
    pub const SPACE: u8 = 1 << COUNTER_BITS;

    /// The initial counter value on a fresh logical connection.
    pub const ZERO: Counter = Counter(0);

    /// Construct a counter, returning `None` when `value` exceeds the space.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value < Self::SPACE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Return the raw counter value.
    #[must_use]
    pub const fn get(self) -> u8 { self.0 }

    /// Return the counter that follows this one, wrapping to zero.
    #[must_use]
    pub const fn wrapping_next(self) -> Self { Self((self.0 + 1) % Self::SPACE) }
}
