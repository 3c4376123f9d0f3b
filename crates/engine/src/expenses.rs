//! Expense records.
//!
//! An expense is a single payment made by one person on behalf of the group.
//! The payer name is stored as entered; grouping by person happens only when
//! balances are computed.

use sea_orm::entity::prelude::*;

use crate::{EngineError, MoneyCents, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub amount_minor: i64,
    pub description: String,
    pub paid_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A stored expense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: i32,
    pub amount: MoneyCents,
    pub description: String,
    pub paid_by: String,
}

impl Expense {
    /// Builds an unsaved expense, mostly useful to feed the settlement
    /// functions directly.
    pub fn new(
        id: i32,
        amount: MoneyCents,
        description: impl Into<String>,
        paid_by: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            description: description.into(),
            paid_by: paid_by.into(),
        }
    }
}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            amount: MoneyCents::new(model.amount_minor),
            description: model.description,
            paid_by: model.paid_by,
        }
    }
}

/// Input for creating or replacing an expense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseCmd {
    pub amount: MoneyCents,
    pub description: String,
    pub paid_by: String,
}

/// A validated [`ExpenseCmd`] with trimmed text fields.
pub(crate) struct ValidExpense {
    pub(crate) amount: MoneyCents,
    pub(crate) description: String,
    pub(crate) paid_by: String,
}

impl ExpenseCmd {
    pub(crate) fn validate(&self) -> ResultEngine<ValidExpense> {
        if !self.amount.is_positive() {
            return Err(EngineError::InvalidAmount(
                "Amount must be positive".to_string(),
            ));
        }
        let description = self.description.trim();
        let paid_by = self.paid_by.trim();
        if description.is_empty() || paid_by.is_empty() {
            return Err(EngineError::MissingField("Missing fields".to_string()));
        }
        Ok(ValidExpense {
            amount: self.amount,
            description: description.to_string(),
            paid_by: paid_by.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(cents: i64, description: &str, paid_by: &str) -> ExpenseCmd {
        ExpenseCmd {
            amount: MoneyCents::new(cents),
            description: description.to_string(),
            paid_by: paid_by.to_string(),
        }
    }

    #[test]
    fn rejects_non_positive_amounts() {
        for cents in [0, -1, -10_000] {
            let err = cmd(cents, "Dinner", "Alice").validate().err();
            assert_eq!(
                err,
                Some(EngineError::InvalidAmount(
                    "Amount must be positive".to_string()
                ))
            );
        }
    }

    #[test]
    fn rejects_blank_text_fields() {
        for (description, paid_by) in [("", "Alice"), ("Dinner", ""), ("  ", "Alice")] {
            let err = cmd(100, description, paid_by).validate().err();
            assert_eq!(
                err,
                Some(EngineError::MissingField("Missing fields".to_string()))
            );
        }
    }

    #[test]
    fn trims_text_fields() {
        let valid = cmd(100, " Dinner ", " alice ").validate().unwrap();
        assert_eq!(valid.description, "Dinner");
        assert_eq!(valid.paid_by, "alice");
        assert_eq!(valid.amount, MoneyCents::new(100));
    }
}
