//! Explicit rounding direction.

/// Direction in which an inexact division is resolved.
///
/// Every division in the engine names its direction so that rounding
/// always favors the pool: amounts owed to the pool round up, amounts paid
/// out round down.
///
/// # Examples
///
/// ```
/// use liquidity_bins::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(!Rounding::Down.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Towards positive infinity (ceiling).
    Up,
    /// Towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` for [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}
