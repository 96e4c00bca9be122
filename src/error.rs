// error.rs - Idiomatic Rust error types for ferrobre.
//
// One variant per failure kind, each carrying a classic numeric code
// for callers that still print `?NN` style diagnostics.

use std::fmt;

use crate::bre::*;
use crate::regerror::{bre_error_code_to_str, bre_is_repeat_range_error};

/// Error type for pattern compilation and budgeted matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegexError {
    /// The program would exceed its capacity.
    TooLong,
    /// `\(` without `\)`, or `\)` without `\(`.
    UnmatchedParen,
    /// `[` without a closing `]`, or a newline inside a bracket expression.
    UnmatchedBracket,
    /// Malformed or out-of-range `\{m,n\}`.
    BadRepetitionRange,
    /// More than nine `\(` in one pattern.
    TooManyGroups,
    /// `\n` names a group that has not been closed yet.
    InvalidBackrefIndex,
    /// Empty pattern where no previous pattern may be reused.
    EmptyPattern,
    /// The search ran out of its retry budget.
    RetryLimitInMatchOver,
    /// Code not covered by a specific variant.
    Other(i32),
}

impl fmt::Display for RegexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexError::Other(code) => write!(f, "error code {}", code),
            _ => f.write_str(bre_error_code_to_str(self.code())),
        }
    }
}

impl std::error::Error for RegexError {}

impl From<i32> for RegexError {
    fn from(code: i32) -> Self {
        match code {
            BREERR_EXPRESSION_OVERFLOW => RegexError::TooLong,
            BREERR_PAREN_IMBALANCE => RegexError::UnmatchedParen,
            BREERR_BRACKET_IMBALANCE => RegexError::UnmatchedBracket,
            BREERR_TOO_MANY_GROUPS => RegexError::TooManyGroups,
            BREERR_BACKREF_OUT_OF_RANGE => RegexError::InvalidBackrefIndex,
            BREERR_NO_REMEMBERED_PATTERN => RegexError::EmptyPattern,
            BREERR_RETRY_LIMIT_IN_MATCH_OVER => RegexError::RetryLimitInMatchOver,
            c if bre_is_repeat_range_error(c) => RegexError::BadRepetitionRange,
            _ => RegexError::Other(code),
        }
    }
}

impl RegexError {
    /// Returns the classic numeric code.
    pub fn code(&self) -> i32 {
        match self {
            RegexError::TooLong => BREERR_EXPRESSION_OVERFLOW,
            RegexError::UnmatchedParen => BREERR_PAREN_IMBALANCE,
            RegexError::UnmatchedBracket => BREERR_BRACKET_IMBALANCE,
            RegexError::BadRepetitionRange => BREERR_FIRST_EXCEEDS_SECOND,
            RegexError::TooManyGroups => BREERR_TOO_MANY_GROUPS,
            RegexError::InvalidBackrefIndex => BREERR_BACKREF_OUT_OF_RANGE,
            RegexError::EmptyPattern => BREERR_NO_REMEMBERED_PATTERN,
            RegexError::RetryLimitInMatchOver => BREERR_RETRY_LIMIT_IN_MATCH_OVER,
            RegexError::Other(code) => *code,
        }
    }
}
