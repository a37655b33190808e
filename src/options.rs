//! Hand configuration options.

/// How [`Hand::exchange_with`](crate::Hand::exchange_with) behaves when the
/// deck runs out of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ExchangeMode {
    /// Replace cards one at a time. If the deck empties partway through, the
    /// cards already replaced stay replaced and `EmptyDeck` is returned.
    #[default]
    Sequential,
    /// Check that the deck can cover every replacement before touching the
    /// hand or the deck; fail with `InsufficientCards` otherwise.
    Atomic,
}

/// Configuration options for hand operations.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pokerhand::{ExchangeMode, HandOptions};
///
/// let options = HandOptions::default().with_exchange(ExchangeMode::Atomic);
/// assert_eq!(options.exchange, ExchangeMode::Atomic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandOptions {
    /// Exchange behaviour on deck exhaustion.
    pub exchange: ExchangeMode,
}

impl HandOptions {
    /// Sets the exchange behaviour.
    #[must_use]
    pub const fn with_exchange(mut self, exchange: ExchangeMode) -> Self {
        self.exchange = exchange;
        self
    }
}
