use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::account::event::AccountEvent;
use crate::types::Amount;

mod event;

/// An account holding a signed balance.
///
/// Balances are never validated: withdrawing more than what is available simply takes the
/// balance below zero, and negative amounts are accepted everywhere.
#[derive(Debug, Serialize)]
pub struct Account {
    id: String,
    balance: Amount,
}

impl Account {
    /// Creates an empty account identified by `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            balance: 0,
        }
    }

    pub fn deposit(&mut self, amount: Amount) {
        self.apply_event(AccountEvent::Deposited { amount });
    }

    pub fn withdraw(&mut self, amount: Amount) {
        self.apply_event(AccountEvent::Withdrawn { amount });
    }

    /// Moves `amount` from this account into `target`.
    ///
    /// This is a withdraw from `self` followed by a deposit into `target`; the two are separate
    /// mutations and nothing makes them atomic.
    #[tracing::instrument(skip_all, fields(from = %self.id, to = %target.id, amount = amount))]
    pub fn transfer(&mut self, amount: Amount, target: &mut Account) {
        self.withdraw(amount);
        target.deposit(amount);
    }

    fn apply_event(&mut self, event: AccountEvent) {
        self.balance = event.apply(self.balance);
        tracing::debug!(account_id = %self.id, ?event, balance = self.balance, "account event applied");
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} balance = {}", self.id, self.balance)
    }
}
