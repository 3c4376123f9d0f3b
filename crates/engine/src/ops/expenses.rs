use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{EngineError, Expense, ExpenseCmd, ResultEngine, expenses};

use super::{Engine, all_expenses, with_tx};

fn not_found() -> EngineError {
    EngineError::KeyNotFound("Expense".to_string())
}

impl Engine {
    /// Validates and stores a new expense.
    pub async fn add_expense(&self, cmd: ExpenseCmd) -> ResultEngine<Expense> {
        let valid = cmd.validate()?;
        let model = expenses::ActiveModel {
            id: ActiveValue::NotSet,
            amount_minor: ActiveValue::Set(valid.amount.cents()),
            description: ActiveValue::Set(valid.description),
            paid_by: ActiveValue::Set(valid.paid_by),
        }
        .insert(&self.database)
        .await?;

        tracing::debug!(id = model.id, "expense added");
        Ok(model.into())
    }

    /// Lists every expense, oldest first.
    pub async fn list_expenses(&self) -> ResultEngine<Vec<Expense>> {
        all_expenses(&self.database).await
    }

    /// Replaces every field of an existing expense.
    pub async fn update_expense(&self, id: i32, cmd: ExpenseCmd) -> ResultEngine<Expense> {
        let valid = cmd.validate()?;
        let model = with_tx!(self, |db_tx| {
            match expenses::Entity::find_by_id(id).one(&db_tx).await? {
                Some(model) => {
                    let mut active: expenses::ActiveModel = model.into();
                    active.amount_minor = ActiveValue::Set(valid.amount.cents());
                    active.description = ActiveValue::Set(valid.description);
                    active.paid_by = ActiveValue::Set(valid.paid_by);
                    active.update(&db_tx).await.map_err(EngineError::from)
                }
                None => Err(not_found()),
            }
        })?;

        tracing::debug!(id, "expense updated");
        Ok(model.into())
    }

    pub async fn delete_expense(&self, id: i32) -> ResultEngine<()> {
        let result = expenses::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(not_found());
        }

        tracing::debug!(id, "expense deleted");
        Ok(())
    }
}
