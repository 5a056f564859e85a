//! Property-based tests for the line store.
//!
//! - Current balance equals `initial + Σincome − Σexpense` for any line mix
//! - Every line's stored balance equals the prefix sum up to and including
//!   that line under `(sequence, insertion)` order

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use arqueo_shared::types::{CompanyId, UserId};

use super::store::LineStore;
use super::types::{LineType, NewLine};
use crate::cashbox::types::{CashBox, CashBoxKind, NewCashBox};

/// Strategy to generate non-negative initial amounts (0.00 to 10,000.00).
fn initial_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive line amounts (0.01 to 1,000.00).
fn line_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a line type.
fn line_type_strategy() -> impl Strategy<Value = LineType> {
    prop_oneof![Just(LineType::Income), Just(LineType::Expense)]
}

/// Strategy to generate a user-orderable sequence.
fn sequence_strategy() -> impl Strategy<Value = i32> {
    0i32..40i32
}

fn make_box(initial: Decimal) -> CashBox {
    CashBox::new(
        CashBoxKind::Petty,
        NewCashBox::new(
            CompanyId::new(),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            UserId::new(),
            "Test responsible",
            initial,
        ),
    )
    .unwrap()
}

fn make_line(line_type: LineType, amount: Decimal, sequence: i32) -> NewLine {
    let mut input = NewLine::new(
        NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
        line_type,
        amount,
        "Generated movement",
    );
    input.sequence = Some(sequence);
    input
}

proptest! {
    #[test]
    fn prop_current_balance_matches_line_sums(
        initial in initial_amount(),
        entries in prop::collection::vec(
            (line_type_strategy(), line_amount(), sequence_strategy()),
            0..25,
        ),
    ) {
        let mut cash_box = make_box(initial);
        for (line_type, amount, sequence) in &entries {
            LineStore::add_line(&mut cash_box, make_line(*line_type, *amount, *sequence))
                .unwrap();
        }

        let income: Decimal = entries
            .iter()
            .filter(|(t, _, _)| *t == LineType::Income)
            .map(|(_, a, _)| *a)
            .sum();
        let expense: Decimal = entries
            .iter()
            .filter(|(t, _, _)| *t == LineType::Expense)
            .map(|(_, a, _)| *a)
            .sum();

        prop_assert_eq!(cash_box.current_balance(), initial + income - expense);

        let totals = cash_box.totals();
        prop_assert_eq!(totals.total_income, initial + income);
        prop_assert_eq!(totals.total_expense, expense);
    }

    #[test]
    fn prop_each_line_balance_is_prefix_sum(
        initial in initial_amount(),
        entries in prop::collection::vec(
            (line_type_strategy(), line_amount(), sequence_strategy()),
            1..25,
        ),
    ) {
        let mut cash_box = make_box(initial);
        for (line_type, amount, sequence) in entries {
            LineStore::add_line(&mut cash_box, make_line(line_type, amount, sequence))
                .unwrap();
        }

        // Reconstruct the walk order independently: stable sort by sequence
        // over insertion order.
        let mut order: Vec<usize> = (0..cash_box.lines.len()).collect();
        order.sort_by_key(|&i| cash_box.lines[i].sequence);

        let mut running = cash_box.initial_amount;
        for index in order {
            let line = &cash_box.lines[index];
            running = match line.line_type {
                LineType::Income => running + line.amount,
                LineType::Expense => running - line.amount,
            };
            prop_assert_eq!(line.balance, running);
        }

        // The last line in walk order carries the current balance.
        prop_assert_eq!(running, cash_box.current_balance());
    }

    #[test]
    fn prop_removal_preserves_invariant(
        initial in initial_amount(),
        entries in prop::collection::vec(
            (line_type_strategy(), line_amount(), sequence_strategy()),
            2..15,
        ),
        remove_index in 0usize..14,
    ) {
        let mut cash_box = make_box(initial);
        let mut ids = Vec::new();
        for (line_type, amount, sequence) in &entries {
            ids.push(
                LineStore::add_line(&mut cash_box, make_line(*line_type, *amount, *sequence))
                    .unwrap(),
            );
        }

        let victim = ids[remove_index % ids.len()];
        LineStore::remove_line(&mut cash_box, victim).unwrap();

        let income: Decimal = cash_box
            .lines
            .iter()
            .filter(|l| l.line_type == LineType::Income)
            .map(|l| l.amount)
            .sum();
        let expense: Decimal = cash_box
            .lines
            .iter()
            .filter(|l| l.line_type == LineType::Expense)
            .map(|l| l.amount)
            .sum();

        prop_assert_eq!(cash_box.current_balance(), initial + income - expense);
    }
}
