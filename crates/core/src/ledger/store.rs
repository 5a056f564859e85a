//! Line store: validation, mutation and full-box balance recomputation.

use rust_decimal::Decimal;

use arqueo_shared::types::CashLineId;

use super::error::LedgerError;
use super::types::{CashLine, DEFAULT_LINE_SEQUENCE, LineType, LineUpdate, NewLine};
use crate::cashbox::types::CashBox;

/// Stateless service managing the lines of a cash box.
///
/// Every mutation triggers a full recomputation of all line balances:
/// a prefix-sum walk in `(sequence, insertion)` order starting from the
/// box's initial amount. Incremental patching is deliberately avoided so
/// stored balances cannot drift from the line set.
pub struct LineStore;

impl LineStore {
    /// Adds a line to the box and recomputes all balances.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-positive amount or blank
    /// description, and a state error when the box's policy forbids line
    /// edits in its current state (closed boxes always do).
    pub fn add_line(cash_box: &mut CashBox, input: NewLine) -> Result<CashLineId, LedgerError> {
        let line = Self::build_line(cash_box, input)?;
        Ok(Self::attach(cash_box, line))
    }

    /// Validates `input` against the box and materializes the line without
    /// attaching it. Used by orchestrators that must post an accounting
    /// document before the line lands on the box.
    pub(crate) fn build_line(
        cash_box: &CashBox,
        input: NewLine,
    ) -> Result<CashLine, LedgerError> {
        Self::ensure_lines_editable(cash_box)?;
        if input.amount <= Decimal::ZERO {
            return Err(LedgerError::AmountNotPositive);
        }
        if input.description.trim().is_empty() {
            return Err(LedgerError::DescriptionRequired);
        }

        Ok(CashLine {
            id: CashLineId::new(),
            sequence: input.sequence.unwrap_or(DEFAULT_LINE_SEQUENCE),
            date: input.date,
            line_type: input.line_type,
            document_type: input.document_type,
            document_number: input.document_number,
            partner: input.partner,
            partner_name: input.partner_name,
            department: input.department,
            description: input.description,
            amount: input.amount,
            balance: Decimal::ZERO,
            notes: input.notes,
            invoice: input.invoice,
            payment: None,
            journal_move: None,
        })
    }

    /// Attaches an already-built line and recomputes all balances.
    pub(crate) fn attach(cash_box: &mut CashBox, line: CashLine) -> CashLineId {
        let id = line.id;
        cash_box.lines.push(line);
        Self::recompute_balances(cash_box);
        id
    }

    /// Applies a partial update to a line and recomputes all balances.
    ///
    /// # Errors
    ///
    /// Same validation and state guards as [`Self::add_line`], plus
    /// `LineNotFound` when the id does not belong to the box.
    pub fn update_line(
        cash_box: &mut CashBox,
        id: CashLineId,
        update: LineUpdate,
    ) -> Result<(), LedgerError> {
        Self::ensure_lines_editable(cash_box)?;
        if let Some(amount) = update.amount
            && amount <= Decimal::ZERO
        {
            return Err(LedgerError::AmountNotPositive);
        }
        if let Some(ref description) = update.description
            && description.trim().is_empty()
        {
            return Err(LedgerError::DescriptionRequired);
        }

        let line = cash_box
            .lines
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(LedgerError::LineNotFound(id))?;

        if let Some(date) = update.date {
            line.date = date;
        }
        if let Some(sequence) = update.sequence {
            line.sequence = sequence;
        }
        if let Some(line_type) = update.line_type {
            line.line_type = line_type;
        }
        if let Some(amount) = update.amount {
            line.amount = amount;
        }
        if let Some(description) = update.description {
            line.description = description;
        }
        if let Some(document_number) = update.document_number {
            line.document_number = Some(document_number);
        }
        if let Some(partner_name) = update.partner_name {
            line.partner_name = Some(partner_name);
        }
        if let Some(notes) = update.notes {
            line.notes = Some(notes);
        }

        Self::recompute_balances(cash_box);
        Ok(())
    }

    /// Removes a line from the box and recomputes all balances.
    ///
    /// # Errors
    ///
    /// Returns a state error when the box's policy forbids line edits, and
    /// `LineNotFound` when the id does not belong to the box.
    pub fn remove_line(cash_box: &mut CashBox, id: CashLineId) -> Result<CashLine, LedgerError> {
        Self::ensure_lines_editable(cash_box)?;
        let position = cash_box
            .lines
            .iter()
            .position(|l| l.id == id)
            .ok_or(LedgerError::LineNotFound(id))?;

        let line = cash_box.lines.remove(position);
        Self::recompute_balances(cash_box);
        Ok(line)
    }

    /// Recomputes every line's running balance.
    ///
    /// Lines are walked in `sequence` order with ties broken by insertion
    /// order (the vector order, preserved by the stable sort). The walk
    /// accumulates `+amount` for income and `-amount` for expense starting
    /// from the box's initial amount; each line stores the running total
    /// including its own amount.
    pub fn recompute_balances(cash_box: &mut CashBox) {
        let mut order: Vec<usize> = (0..cash_box.lines.len()).collect();
        order.sort_by_key(|&i| cash_box.lines[i].sequence);

        let mut running = cash_box.initial_amount;
        for index in order {
            let line = &mut cash_box.lines[index];
            running = match line.line_type {
                LineType::Income => running + line.amount,
                LineType::Expense => running - line.amount,
            };
            line.balance = running;
        }
    }

    fn ensure_lines_editable(cash_box: &CashBox) -> Result<(), LedgerError> {
        if cash_box.policy().lines_editable_in(cash_box.state) {
            Ok(())
        } else {
            Err(LedgerError::LinesLocked {
                state: cash_box.state,
            })
        }
    }
}
