//! The crate's one recoverable error: a malformed action-string (spec §7).

use thiserror::Error;

/// Failure to parse a text action back into an action id.
///
/// Never raised by `apply` or by the legal-move generator — only by
/// `string_to_action` on caller-supplied text, per spec §7.
#[derive(Debug, Error, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ActionParseError {
    #[error("action string is empty")]
    Empty,
    #[error("unrecognized action tag {0:?}, expected 'P' or a worker digit")]
    UnknownTag(char),
    #[error("row/column digit {0:?} is not in 0..5")]
    BadCoordinate(char),
    #[error("worker index {0:?} is not 0 or 1")]
    BadWorker(char),
    #[error("direction symbol {0:?} is not in 0..8")]
    BadDirection(char),
    #[error("expected 'M' after worker index, found {0:?}")]
    ExpectedMove(char),
    #[error("expected 'B' after move direction, found {0:?}")]
    ExpectedBuild(char),
    #[error("action string {0:?} has the wrong length")]
    WrongLength(String),
    #[error("placement cells must be distinct, both mapped to cell {0}")]
    SameCell(u8),
}
