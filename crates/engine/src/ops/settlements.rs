use sea_orm::TransactionTrait;

use crate::{
    Balances, ResultEngine, Settlement, SettlementTransfer, compute_balances, settle,
};

use super::{Engine, all_expenses, with_tx};

impl Engine {
    /// Distinct normalized payer names, in order of first appearance.
    pub async fn people(&self) -> ResultEngine<Vec<String>> {
        let balances = self.balances().await?;
        Ok(balances.people().map(ToString::to_string).collect())
    }

    /// Per-person balances over the current expenses.
    pub async fn balances(&self) -> ResultEngine<Balances> {
        let expenses = with_tx!(self, |db_tx| all_expenses(&db_tx).await)?;
        Ok(compute_balances(&expenses))
    }

    /// Balances and the transfers that settle them.
    pub async fn settlement(&self) -> ResultEngine<Settlement> {
        let expenses = with_tx!(self, |db_tx| all_expenses(&db_tx).await)?;
        let settlement = settle(&expenses);
        tracing::debug!(
            expenses = expenses.len(),
            people = settlement.balances.len(),
            transfers = settlement.transfers.len(),
            residual = settlement.balances.residual().cents(),
            "settlement computed"
        );
        Ok(settlement)
    }

    pub async fn settlements(&self) -> ResultEngine<Vec<SettlementTransfer>> {
        Ok(self.settlement().await?.transfers)
    }
}
