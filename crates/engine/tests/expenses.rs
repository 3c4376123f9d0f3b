use sea_orm::{Database, DatabaseConnection};

use engine::{Engine, EngineError, Expense, ExpenseCmd, MoneyCents, SettlementTransfer};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn cmd(cents: i64, description: &str, paid_by: &str) -> ExpenseCmd {
    ExpenseCmd {
        amount: MoneyCents::new(cents),
        description: description.to_string(),
        paid_by: paid_by.to_string(),
    }
}

async fn stored(engine: &Engine, id: i32) -> Option<Expense> {
    engine
        .list_expenses()
        .await
        .unwrap()
        .into_iter()
        .find(|expense| expense.id == id)
}

fn transfer(from: &str, to: &str, cents: i64) -> SettlementTransfer {
    SettlementTransfer {
        from: from.to_string(),
        to: to.to_string(),
        amount: MoneyCents::new(cents),
    }
}

#[tokio::test]
async fn add_list_and_fetch_expenses() {
    let (engine, _db) = engine_with_db().await;

    let first = engine.add_expense(cmd(1_250, " Lunch ", " alice ")).await.unwrap();
    let second = engine.add_expense(cmd(800, "Taxi", "Bob")).await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(first.description, "Lunch");
    assert_eq!(first.paid_by, "alice");
    assert_eq!(first.amount.cents(), 1_250);

    let all = engine.list_expenses().await.unwrap();
    assert_eq!(all, vec![first.clone(), second]);
    assert_eq!(stored(&engine, first.id).await, Some(first));
}

#[tokio::test]
async fn invalid_expenses_are_not_stored() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.add_expense(cmd(0, "Lunch", "Alice")).await.unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidAmount("Amount must be positive".to_string())
    );
    let err = engine.add_expense(cmd(100, "", "Alice")).await.unwrap_err();
    assert_eq!(err, EngineError::MissingField("Missing fields".to_string()));

    assert!(engine.list_expenses().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_every_field() {
    let (engine, _db) = engine_with_db().await;
    let expense = engine.add_expense(cmd(1_000, "Lunch", "Alice")).await.unwrap();

    let updated = engine
        .update_expense(expense.id, cmd(2_500, "Dinner", "Carol"))
        .await
        .unwrap();
    assert_eq!(updated.id, expense.id);
    assert_eq!(updated.amount.cents(), 2_500);
    assert_eq!(updated.description, "Dinner");
    assert_eq!(updated.paid_by, "Carol");
    assert_eq!(stored(&engine, expense.id).await.as_ref(), Some(&updated));

    let err = engine
        .update_expense(expense.id, cmd(-1, "Dinner", "Carol"))
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));
    assert_eq!(stored(&engine, expense.id).await.as_ref(), Some(&updated));
}

#[tokio::test]
async fn missing_expenses_are_reported() {
    let (engine, _db) = engine_with_db().await;
    let not_found = EngineError::KeyNotFound("Expense".to_string());

    assert_eq!(
        engine
            .update_expense(7, cmd(100, "Lunch", "Alice"))
            .await
            .unwrap_err(),
        not_found
    );
    assert_eq!(engine.delete_expense(7).await.unwrap_err(), not_found);
    assert_eq!(not_found.to_string(), "Expense not found");
    assert!(engine.list_expenses().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_removes_expense_from_settlement() {
    let (engine, _db) = engine_with_db().await;
    engine.add_expense(cmd(10_000, "Hotel", "Alice")).await.unwrap();
    let taxi = engine.add_expense(cmd(2_000, "Taxi", "Bob")).await.unwrap();

    assert_eq!(
        engine.settlements().await.unwrap(),
        vec![transfer("Bob", "Alice", 4_000)]
    );

    engine.delete_expense(taxi.id).await.unwrap();
    assert!(engine.list_expenses().await.unwrap().len() == 1);
    assert_eq!(engine.people().await.unwrap(), vec!["Alice".to_string()]);
    assert!(engine.settlements().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_store_settles_to_nothing() {
    let (engine, _db) = engine_with_db().await;

    assert!(engine.people().await.unwrap().is_empty());
    assert!(engine.balances().await.unwrap().is_empty());
    assert!(engine.settlements().await.unwrap().is_empty());
}

#[tokio::test]
async fn settlement_groups_normalized_names() {
    let (engine, _db) = engine_with_db().await;
    engine.add_expense(cmd(3_000, "Breakfast", "alice")).await.unwrap();
    engine.add_expense(cmd(3_000, "Fuel", "BOB")).await.unwrap();
    engine.add_expense(cmd(6_000, "Dinner", "Alice ")).await.unwrap();
    engine.add_expense(cmd(1, "Gum", "carol")).await.unwrap();

    assert_eq!(
        engine.people().await.unwrap(),
        vec!["Alice".to_string(), "Bob".to_string(), "Carol".to_string()]
    );

    let settlement = engine.settlement().await.unwrap();
    let alice = settlement.balances.get("Alice").unwrap();
    assert_eq!(alice.total_paid.cents(), 9_000);
    assert_eq!(alice.balance.cents(), 5_000);
    assert_eq!(
        settlement.transfers,
        vec![
            transfer("Bob", "Alice", 1_000),
            transfer("Carol", "Alice", 3_999),
        ]
    );
}
