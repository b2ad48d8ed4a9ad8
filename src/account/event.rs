use crate::types::Amount;

/// A single change to an account balance. Every mutation an [`Account`](super::Account) goes
/// through is first expressed as one of these and then applied.
#[derive(Debug, Clone, Copy)]
pub(crate) enum AccountEvent {
    Deposited { amount: Amount },
    Withdrawn { amount: Amount },
}

impl AccountEvent {
    /// Returns the balance obtained by applying this event on top of `balance`.
    ///
    /// Arithmetic wraps on overflow: amounts are never validated and applying an event can't fail.
    pub(crate) const fn apply(self, balance: Amount) -> Amount {
        match self {
            Self::Deposited { amount } => balance.wrapping_add(amount),
            Self::Withdrawn { amount } => balance.wrapping_sub(amount),
        }
    }
}
