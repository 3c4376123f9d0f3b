use sea_orm::{ConnectionTrait, QueryOrder, prelude::*};

use crate::{Expense, ResultEngine};

mod expenses;
mod settlements;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// Shared-expense engine backed by the expense store.
///
/// The engine owns no state besides the connection pool: balances and
/// settlements are recomputed from a fresh snapshot on every call.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// Reads every expense, oldest first.
async fn all_expenses<C: ConnectionTrait>(db: &C) -> ResultEngine<Vec<Expense>> {
    let models = crate::expenses::Entity::find()
        .order_by_asc(crate::expenses::Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Expense::from).collect())
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
