//! Balance aggregation and greedy settlement.
//!
//! Both stages are pure functions over an expense snapshot:
//!
//! 1. [`compute_balances`] groups expenses by normalized payer, computes the
//!    fair share (total spent / distinct people) and each person's signed
//!    balance against it.
//! 2. [`compute_settlements`] pairs debtors with creditors in discovery order
//!    and emits transfers until one side is exhausted.
//!
//! Balances are rounded once per person, half away from zero, to whole cents.
//! That rounding can leave the balances summing to a few cents instead of
//! zero (at most half a cent per person); the matcher tolerates the residual
//! by stopping as soon as either side runs out.

use std::collections::HashMap;

use crate::{
    Expense, MoneyCents,
    money::div_round_half_away,
    people::normalize_person,
};

/// Remaining amounts below this are considered settled.
const DUST: MoneyCents = MoneyCents::new(1);

/// Paid total and balance of one normalized person.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonBalance {
    pub person: String,
    pub total_paid: MoneyCents,
    /// `total_paid - fair_share`, positive when the person is owed money.
    pub balance: MoneyCents,
}

/// Per-person balances in discovery order (first appearance of each person
/// in the snapshot).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Balances {
    people: Vec<PersonBalance>,
    total_spent: MoneyCents,
    fair_share: MoneyCents,
}

impl Balances {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersonBalance> {
        self.people.iter()
    }

    /// Looks up a person by normalized identity.
    pub fn get(&self, person: &str) -> Option<&PersonBalance> {
        self.people.iter().find(|entry| entry.person == person)
    }

    /// Distinct normalized identities, in discovery order.
    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.people.iter().map(|entry| entry.person.as_str())
    }

    pub fn total_spent(&self) -> MoneyCents {
        self.total_spent
    }

    /// Fair share rounded to cents. Balances are derived from the exact
    /// value, not from this one.
    pub fn fair_share(&self) -> MoneyCents {
        self.fair_share
    }

    /// Sum of all balances; non-zero only by rounding residue.
    pub fn residual(&self) -> MoneyCents {
        let wide: i128 = self
            .people
            .iter()
            .map(|entry| i128::from(entry.balance.cents()))
            .sum();
        MoneyCents::saturating_from_wide(wide)
    }
}

impl<'a> IntoIterator for &'a Balances {
    type Item = &'a PersonBalance;
    type IntoIter = std::slice::Iter<'a, PersonBalance>;

    fn into_iter(self) -> Self::IntoIter {
        self.people.iter()
    }
}

/// A payment instruction from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementTransfer {
    pub from: String,
    pub to: String,
    pub amount: MoneyCents,
}

/// Balances together with the transfers that settle them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    pub balances: Balances,
    pub transfers: Vec<SettlementTransfer>,
}

/// Aggregates expenses into per-person balances.
///
/// An empty snapshot yields empty balances; the fair share is never computed
/// for zero people.
///
/// Sums are accumulated in `i128`. Totals and balances outside the `i64` cent
/// range saturate at its bounds.
pub fn compute_balances(expenses: &[Expense]) -> Balances {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<(String, i128)> = Vec::new();

    for expense in expenses {
        let person = normalize_person(&expense.paid_by);
        let slot = *index.entry(person.clone()).or_insert_with(|| {
            totals.push((person, 0));
            totals.len() - 1
        });
        totals[slot].1 += i128::from(expense.amount.cents());
    }

    if totals.is_empty() {
        return Balances::default();
    }

    let count = totals.len() as i128;
    let total: i128 = totals.iter().map(|(_, paid)| paid).sum();

    // balance = paid - total / count, computed as (paid * count - total) / count
    // so the fair share is never rounded before the subtraction.
    let people = totals
        .into_iter()
        .map(|(person, paid)| PersonBalance {
            person,
            total_paid: MoneyCents::saturating_from_wide(paid),
            balance: MoneyCents::saturating_from_wide(div_round_half_away(
                paid * count - total,
                count,
            )),
        })
        .collect();

    Balances {
        people,
        total_spent: MoneyCents::saturating_from_wide(total),
        fair_share: MoneyCents::saturating_from_wide(div_round_half_away(total, count)),
    }
}

/// Greedily matches debtors with creditors in discovery order.
///
/// People with a zero balance take no part. The first unresolved debtor pays
/// the first unresolved creditor `min(debt, credit)`; whichever side reaches
/// zero is advanced. Matching stops when either side is exhausted, which
/// leaves any rounding residue with the other side.
pub fn compute_settlements(balances: &Balances) -> Vec<SettlementTransfer> {
    let mut debtors: Vec<(&str, MoneyCents)> = Vec::new();
    let mut creditors: Vec<(&str, MoneyCents)> = Vec::new();
    for entry in balances {
        if entry.balance.is_negative() {
            debtors.push((entry.person.as_str(), -entry.balance));
        } else if entry.balance.is_positive() {
            creditors.push((entry.person.as_str(), entry.balance));
        }
    }

    let mut transfers = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < debtors.len() && j < creditors.len() {
        let (debtor, debt) = debtors[i];
        let (creditor, credit) = creditors[j];
        let settled = debt.min(credit);

        if settled < DUST {
            if debt <= credit {
                i += 1;
            } else {
                j += 1;
            }
            continue;
        }

        transfers.push(SettlementTransfer {
            from: debtor.to_string(),
            to: creditor.to_string(),
            amount: settled,
        });

        debtors[i].1 -= settled;
        creditors[j].1 -= settled;

        if debtors[i].1 < DUST {
            i += 1;
        }
        if creditors[j].1 < DUST {
            j += 1;
        }
    }

    transfers
}

/// Runs both stages over a snapshot.
pub fn settle(expenses: &[Expense]) -> Settlement {
    let balances = compute_balances(expenses);
    let transfers = compute_settlements(&balances);
    Settlement {
        balances,
        transfers,
    }
}
