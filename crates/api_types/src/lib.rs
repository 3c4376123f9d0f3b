//! Request and response bodies of the HTTP API.
//!
//! Amounts travel as JSON numbers in major units (`12.5` is twelve and a
//! half); every list response carries a `success` flag.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

pub mod expense {
    use super::*;

    /// Body for creating or replacing an expense.
    ///
    /// Every field is optional at the serde level so that a missing field is
    /// reported as a validation error instead of a decoding failure.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseNew {
        #[serde(default)]
        pub amount: Option<f64>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub paid_by: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: i32,
        pub amount: f64,
        pub description: String,
        pub paid_by: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseSaved {
        pub success: bool,
        pub data: ExpenseView,
        pub message: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseList {
        pub success: bool,
        pub data: Vec<ExpenseView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseDeleted {
        pub success: bool,
        pub message: String,
    }
}

pub mod people {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PeopleResponse {
        pub success: bool,
        /// Distinct normalized names, in order of first appearance.
        pub people: Vec<String>,
    }
}

pub mod settlement {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransferView {
        pub from: String,
        pub to: String,
        pub amount: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SettlementsResponse {
        pub success: bool,
        pub settlements: Vec<TransferView>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct BalanceView {
        pub person: String,
        pub total_paid: f64,
        /// Positive when the person is owed money.
        pub balance: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalancesResponse {
        pub success: bool,
        pub total_spent: f64,
        pub fair_share: f64,
        pub balances: Vec<BalanceView>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_new_tolerates_missing_fields() {
        let body: expense::ExpenseNew = serde_json::from_str(r#"{"amount": 12.5}"#).unwrap();
        assert_eq!(body.amount, Some(12.5));
        assert!(body.description.is_none());
        assert!(body.paid_by.is_none());
    }

    #[test]
    fn transfer_uses_from_and_to_keys() {
        let view = settlement::TransferView {
            from: "Bob".to_string(),
            to: "Alice".to_string(),
            amount: 50.0,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"from": "Bob", "to": "Alice", "amount": 50.0})
        );
    }
}
