//! Display-code sequencer port.
//!
//! Cash boxes and receipts are created without a number and show the
//! `"Borrador"` placeholder; a unique display code is issued exactly once,
//! on the transition out of draft. The code source is external; when it is
//! unavailable the literal `"{PREFIX}/001"` fallback is used so activation
//! never blocks on the sequence service.

use std::collections::HashMap;
use std::sync::Mutex;

/// Placeholder shown for records that have not been assigned a code yet.
pub const DRAFT_PLACEHOLDER: &str = "Borrador";

/// The record families that draw from independent code sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    /// Petty cash boxes.
    PettyCash,
    /// Distribution cash boxes.
    DistributionCash,
    /// Logistics cash boxes.
    LogisticsCash,
    /// Cash receipt vouchers.
    CashReceipt,
}

impl SequenceKind {
    /// Returns the display-code prefix for this sequence.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::PettyCash => "PCH",
            Self::DistributionCash => "DIST",
            Self::LogisticsCash => "LOG",
            Self::CashReceipt => "REC",
        }
    }

    /// Returns the literal code used when the sequence source is unavailable.
    #[must_use]
    pub fn fallback_code(&self) -> String {
        format!("{}/001", self.prefix())
    }
}

/// Issues unique, monotonically increasing display codes per sequence kind.
pub trait Sequencer {
    /// Returns the next code for `kind`, or `None` when the sequence source
    /// is unavailable.
    fn next_code(&self, kind: SequenceKind) -> Option<String>;
}

/// Returns the next code for `kind`, falling back to the literal
/// `"{PREFIX}/001"` when the sequencer yields nothing.
#[must_use]
pub fn next_code_or_fallback(sequencer: &dyn Sequencer, kind: SequenceKind) -> String {
    sequencer
        .next_code(kind)
        .unwrap_or_else(|| kind.fallback_code())
}

/// In-memory sequencer backed by per-kind counters.
///
/// Used by the API layer and tests; production deployments plug in the
/// real sequence service behind the same trait.
#[derive(Debug, Default)]
pub struct InMemorySequencer {
    counters: Mutex<HashMap<SequenceKind, u32>>,
}

impl InMemorySequencer {
    /// Creates a sequencer with all counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sequencer for InMemorySequencer {
    fn next_code(&self, kind: SequenceKind) -> Option<String> {
        let mut counters = self.counters.lock().ok()?;
        let counter = counters.entry(kind).or_insert(0);
        *counter += 1;
        Some(format!("{}/{:03}", kind.prefix(), counter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_monotonic_per_kind() {
        let sequencer = InMemorySequencer::new();
        assert_eq!(
            sequencer.next_code(SequenceKind::PettyCash).unwrap(),
            "PCH/001"
        );
        assert_eq!(
            sequencer.next_code(SequenceKind::PettyCash).unwrap(),
            "PCH/002"
        );
        // Independent counter per kind.
        assert_eq!(
            sequencer.next_code(SequenceKind::LogisticsCash).unwrap(),
            "LOG/001"
        );
    }

    #[test]
    fn test_fallback_code_when_source_unavailable() {
        struct Unavailable;
        impl Sequencer for Unavailable {
            fn next_code(&self, _kind: SequenceKind) -> Option<String> {
                None
            }
        }

        assert_eq!(
            next_code_or_fallback(&Unavailable, SequenceKind::DistributionCash),
            "DIST/001"
        );
        assert_eq!(
            next_code_or_fallback(&Unavailable, SequenceKind::CashReceipt),
            "REC/001"
        );
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(SequenceKind::PettyCash.prefix(), "PCH");
        assert_eq!(SequenceKind::DistributionCash.prefix(), "DIST");
        assert_eq!(SequenceKind::LogisticsCash.prefix(), "LOG");
        assert_eq!(SequenceKind::CashReceipt.prefix(), "REC");
    }
}
