//! Shared expense tracking and settlement.
//!
//! The settlement core ([`compute_balances`], [`compute_settlements`]) is a
//! set of pure functions over an expense snapshot. [`Engine`] wraps the
//! expense store and feeds the core with a snapshot read in one database
//! transaction.

pub use error::EngineError;
pub use expenses::{Expense, ExpenseCmd};
pub use money::MoneyCents;
pub use ops::{Engine, EngineBuilder};
pub use people::normalize_person;
pub use settlement::{
    Balances, PersonBalance, Settlement, SettlementTransfer, compute_balances,
    compute_settlements, settle,
};

mod error;
mod expenses;
mod money;
mod ops;
mod people;
mod settlement;

type ResultEngine<T> = Result<T, EngineError>;
