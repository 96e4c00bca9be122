// bre.rs - Public types, option flags, error codes and match results.

use std::ops::Range;

use bitflags::bitflags;
use smallvec::SmallVec;

// === Limits ===

/// Maximum number of `\(...\)` groups in one pattern.
pub const BRE_MAX_GROUPS: usize = 9;

/// Default program capacity in encoded bytes.
pub const BRE_DEFAULT_CAPACITY: usize = 512;

/// Upper-bound operand meaning "no upper bound" in `\{m,\}`.
/// Explicit bounds must stay below it.
pub const BRE_REPEAT_INFINITE: u8 = 255;

// === Error Codes ===
//
// The numbers are the historical `ed`/`sed` diagnostic numbers.
pub const BREERR_RANGE_ENDPOINT_TOO_LARGE: i32 = 11;
pub const BREERR_BAD_NUMBER: i32 = 16;
pub const BREERR_BACKREF_OUT_OF_RANGE: i32 = 25;
pub const BREERR_NO_REMEMBERED_PATTERN: i32 = 41;
pub const BREERR_PAREN_IMBALANCE: i32 = 42;
pub const BREERR_TOO_MANY_GROUPS: i32 = 43;
pub const BREERR_TOO_MANY_NUMBERS: i32 = 44;
pub const BREERR_BRACE_EXPECTED: i32 = 45;
pub const BREERR_FIRST_EXCEEDS_SECOND: i32 = 46;
pub const BREERR_BRACKET_IMBALANCE: i32 = 49;
pub const BREERR_EXPRESSION_OVERFLOW: i32 = 50;
pub const BREERR_RETRY_LIMIT_IN_MATCH_OVER: i32 = 70;

bitflags! {
    /// Options accepted by [`crate::regcomp::bre_compile`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CompileOptions: u32 {
        /// An empty pattern compiles to the null program instead of failing,
        /// so the caller can reuse its previous pattern (`s//new/`).
        const NULL_PATTERN = 1 << 0;
    }
}

/// Per-search settings for [`crate::regexec::bre_search`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Position a repetition's retreat search stops at. A greedy `*` or
    /// `\{m,n\}` never settles on this offset.
    pub floor: Option<usize>,
    /// Maximum number of `advance` steps before giving up with
    /// [`MatchOutcome::BudgetExceeded`]. `None` is unlimited.
    pub retry_limit: Option<u64>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floor(mut self, pos: usize) -> Self {
        self.floor = Some(pos);
        self
    }

    pub fn retry_limit(mut self, n: u64) -> Self {
        self.retry_limit = Some(n);
        self
    }
}

// === MatchResult ===

/// Offsets of a successful match and of every group in the program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    start: usize,
    end: usize,
    groups: SmallVec<[Option<(usize, usize)>; BRE_MAX_GROUPS]>,
}

impl MatchResult {
    pub(crate) fn new(
        start: usize,
        end: usize,
        groups: SmallVec<[Option<(usize, usize)>; BRE_MAX_GROUPS]>,
    ) -> Self {
        MatchResult { start, end, groups }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of groups the program defines (excluding the whole match).
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Span of group `i`. Group 0 is the whole match; groups that never
    /// closed give `None`.
    pub fn group(&self, i: usize) -> Option<Range<usize>> {
        if i == 0 {
            return Some(self.range());
        }
        let (beg, end) = (*self.groups.get(i - 1)?)?;
        Some(beg..end)
    }
}

// === MatchOutcome ===

/// Result of one search. "No match" is an ordinary outcome, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    Found(MatchResult),
    NotFound,
    /// Only produced when [`SearchConfig::retry_limit`] is set.
    BudgetExceeded,
}

impl MatchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchOutcome::Found(_))
    }

    pub fn as_result(&self) -> Option<&MatchResult> {
        match self {
            MatchOutcome::Found(m) => Some(m),
            _ => None,
        }
    }

    pub fn into_result(self) -> Option<MatchResult> {
        match self {
            MatchOutcome::Found(m) => Some(m),
            _ => None,
        }
    }
}
