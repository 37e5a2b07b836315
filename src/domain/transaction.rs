use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionKind {
    Advance,
    Expense,
    Settlement,
}

/// One line of a trip's append-only audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub kind: TransactionKind,
    pub text: String,
}

impl LogEntry {
    pub fn new(kind: TransactionKind, text: String) -> Self {
        Self { kind, text }
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}
