//! "Detalle de Movimientos Realizados" statement parser (text)
//!
//! Expected extracted-text section:
//!   Detalle de Movimientos Realizados
//!   15/JAN 16/JAN T17 SPEI ENVIADO BANORTE 1,234.56
//!   0123456789 PAGO RENTA
//!   072180012345678901 BNET01234567890123456789
//!   ...
//!   Total de Movimientos
//!
//! Rows are found purely by line order and token shape; there is no column
//! detection. Reference look-ahead is page-local, so a reference that wraps
//! onto the next page is truncated.

use tracing::debug;

use crate::patterns::{
    MIN_TOKENS, REFERENCE_LOOKAHEAD, SECTION_END, SECTION_START, contains_date_token,
    find_clabe, find_tracking_key, first_amount, starts_with_date_token,
};
use crate::types::TransactionRecord;

/// Where the scanner is relative to the transactions section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    BeforeSection,
    Capturing,
    AfterSection,
}

/// Outcome of feeding one line to [`ScanState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub next: ScanState,
    /// The line should be parsed as a transaction row.
    pub candidate: bool,
}

impl ScanState {
    pub fn is_capturing(self) -> bool {
        self == ScanState::Capturing
    }

    /// Pure per-line transition. Sentinel lines never produce rows.
    pub fn advance(self, line: &str) -> Step {
        if line.contains(SECTION_START) {
            return Step {
                next: ScanState::Capturing,
                candidate: false,
            };
        }
        if line.contains(SECTION_END) {
            return Step {
                next: ScanState::AfterSection,
                candidate: false,
            };
        }

        Step {
            next: self,
            candidate: self.is_capturing() && contains_date_token(line),
        }
    }
}

/// Build a record from `lines[index]`, looking ahead within `lines` only.
///
/// Returns `None` when the row has fewer than [`MIN_TOKENS`] tokens.
pub fn parse_transaction_line(lines: &[&str], index: usize) -> Option<TransactionRecord> {
    let line = *lines.get(index)?;
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_TOKENS {
        return None;
    }

    let description_tail = parts[3..].join(" ");

    let start = index + 1;
    let end = (start + REFERENCE_LOOKAHEAD).min(lines.len());
    let reference = lines[start..end]
        .iter()
        .filter(|l| !starts_with_date_token(l))
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let reference = reference.trim();

    let mut rec = TransactionRecord::new(parts[0], parts[1], parts[2]);
    rec.charge_amount = first_amount(&description_tail);
    rec.clabe = find_clabe(reference).map(str::to_string);
    rec.tracking_key = find_tracking_key(reference).map(str::to_string);
    rec.reference = reference.to_string();

    Some(rec)
}

/// Scan one page, appending rows to `out`. Returns the state to carry into the next page.
pub fn parse_page(
    mut state: ScanState,
    page_text: &str,
    out: &mut Vec<TransactionRecord>,
) -> ScanState {
    let lines: Vec<&str> = page_text.split('\n').collect();

    for (i, line) in lines.iter().enumerate() {
        let step = state.advance(line);
        state = step.next;
        if !step.candidate {
            continue;
        }

        match parse_transaction_line(&lines, i) {
            Some(rec) => out.push(rec),
            None => debug!(line = %line.trim(), "dropping short transaction row"),
        }
    }

    state
}

/// Extract every transaction row from a document's pages, in reading order.
pub fn extract<S: AsRef<str>>(pages: &[S]) -> Vec<TransactionRecord> {
    let mut state = ScanState::default();
    let mut out = Vec::new();

    for page in pages {
        state = parse_page(state, page.as_ref(), &mut out);
    }

    debug!(pages = pages.len(), records = out.len(), final_state = ?state, "statement scanned");
    out
}
