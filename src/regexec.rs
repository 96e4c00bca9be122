// regexec.rs - Backtracking matcher: advance, bre_match, bre_search.
//
// The interpreter is recursive: straight-line ops run in a loop, and every
// repetition recurses once per retreat point to try the rest of the
// program. There is no memoization, so patterns such as `a*a*a*a*b`
// against a long run of `a` take exponential time. Callers that accept
// untrusted patterns should set `SearchConfig::retry_limit`.

use memchr::memchr;

use crate::bre::*;
use crate::regcapture::CaptureStore;
use crate::regint::*;

/// The retry budget ran out; unwinds the whole search.
#[derive(Debug)]
struct BudgetExceeded;

type StepResult = Result<bool, BudgetExceeded>;

/// State of one search. Built fresh by every entry point, so a program can
/// be used from several searches (and threads) at once.
struct MatchArg<'a, 's> {
    program: &'a Program,
    subject: &'s [u8],
    captures: CaptureStore<'s>,
    floor: Option<usize>,
    retry_limit: Option<u64>,
    retries: u64,
    match_end: usize,
}

impl<'a, 's> MatchArg<'a, 's> {
    fn new(program: &'a Program, subject: &'s [u8], config: &SearchConfig) -> Self {
        MatchArg {
            program,
            subject,
            captures: CaptureStore::new(subject),
            floor: config.floor,
            retry_limit: config.retry_limit,
            retries: 0,
            match_end: 0,
        }
    }

    fn count_retry(&mut self) -> Result<(), BudgetExceeded> {
        self.retries += 1;
        match self.retry_limit {
            Some(limit) if self.retries > limit => Err(BudgetExceeded),
            _ => Ok(()),
        }
    }

    /// Cursor after one occurrence of a consuming op at `s`.
    fn match_one(&self, op: &Op, s: usize) -> Option<usize> {
        let subject = self.subject;
        match op {
            Op::Char(c) => (subject.get(s) == Some(c)).then_some(s + 1),
            Op::Any => (s < subject.len()).then_some(s + 1),
            Op::Class(cc) => match subject.get(s) {
                Some(&b) if cc.matches(b) => Some(s + 1),
                _ => None,
            },
            Op::Backref(n) => {
                let bytes = self.captures.snapshot_bytes(*n as usize)?;
                subject
                    .get(s..)?
                    .starts_with(bytes)
                    .then_some(s + bytes.len())
            }
            _ => None,
        }
    }

    /// Run the program from `pc` with the cursor at `s`.
    fn advance(&mut self, mut s: usize, mut pc: usize) -> StepResult {
        self.count_retry()?;
        let program = self.program;

        loop {
            let Some(operation) = program.ops.get(pc) else {
                return Ok(false);
            };

            match operation.repeat {
                Repeat::None => {}
                Repeat::Star => return self.repeat(&operation.op, s, pc, 0, None),
                Repeat::Range { low, high } => {
                    let (low, high) = get_repeat_range(low, high);
                    return self.repeat(
                        &operation.op,
                        s,
                        pc,
                        low as usize,
                        high.map(usize::from),
                    );
                }
            }

            match &operation.op {
                Op::Accept => {
                    self.match_end = s;
                    return Ok(true);
                }
                Op::EndAnchor => {
                    if s != self.subject.len() {
                        return Ok(false);
                    }
                }
                Op::GroupStart(n) => self.captures.open(*n as usize, s),
                Op::GroupEnd(n) => {
                    let n = *n as usize;
                    let Some(start) = self.captures.provisional_start(n) else {
                        return Ok(false);
                    };
                    self.captures.close(n, start, s);
                }
                atom => match self.match_one(atom, s) {
                    Some(next) => s = next,
                    None => return Ok(false),
                },
            }
            pc += 1;
        }
    }

    /// Greedy-then-retreat for the repeated op at `pc`.
    ///
    /// `low` units are mandatory. After them up to `high - low` optional
    /// units are taken (no limit when `high` is `None`), then the rest of
    /// the program is tried from the longest run back down to the end of
    /// the mandatory part, one unit at a time.
    fn repeat(
        &mut self,
        op: &Op,
        mut s: usize,
        pc: usize,
        low: usize,
        high: Option<usize>,
    ) -> StepResult {
        // All units of one repetition have the same width: a single byte, or
        // the current text of the referenced group.
        let width = match op {
            Op::Backref(n) => match self.captures.snapshot_bytes(*n as usize) {
                Some(bytes) => bytes.len(),
                None => return Ok(false),
            },
            _ => 1,
        };

        for _ in 0..low {
            match self.match_one(op, s) {
                Some(next) => s = next,
                None => return Ok(false),
            }
        }

        let base = s;
        if width > 0 {
            let mut taken = 0usize;
            while high.map_or(true, |h| low + taken < h) {
                match self.match_one(op, s) {
                    Some(next) => {
                        s = next;
                        taken += 1;
                    }
                    None => break,
                }
            }
        }

        loop {
            if Some(s) == self.floor {
                break;
            }
            if self.advance(s, pc + 1)? {
                return Ok(true);
            }
            if s == base {
                break;
            }
            s -= width;
        }
        Ok(false)
    }

    /// One attempt anchored at `s`, with a clean capture table.
    fn match_at(&mut self, s: usize) -> Result<Option<MatchResult>, BudgetExceeded> {
        self.captures.reset();
        if !self.advance(s, 0)? {
            return Ok(None);
        }
        let groups = self.captures.spans(self.program.num_groups);
        Ok(Some(MatchResult::new(s, self.match_end, groups)))
    }

    fn outcome(&self, r: Result<Option<MatchResult>, BudgetExceeded>) -> MatchOutcome {
        match r {
            Ok(Some(m)) => MatchOutcome::Found(m),
            Ok(None) => MatchOutcome::NotFound,
            Err(BudgetExceeded) => {
                tracing::debug!(retries = self.retries, "retry limit in match exceeded");
                MatchOutcome::BudgetExceeded
            }
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Try to match the program starting exactly at `at`.
pub fn bre_match(
    program: &Program,
    subject: &[u8],
    at: usize,
    config: &SearchConfig,
) -> MatchOutcome {
    if at > subject.len() {
        return MatchOutcome::NotFound;
    }
    let mut msa = MatchArg::new(program, subject, config);
    let r = msa.match_at(at);
    msa.outcome(r)
}

/// Find the leftmost match at or after `start`.
///
/// An anchored program is only tried at `start` itself. Otherwise every
/// offset up to and including `subject.len()` is tried; when the match has
/// to begin with a known byte, offsets are skipped with `memchr`.
pub fn bre_search(
    program: &Program,
    subject: &[u8],
    start: usize,
    config: &SearchConfig,
) -> MatchOutcome {
    if start > subject.len() {
        return MatchOutcome::NotFound;
    }
    let mut msa = MatchArg::new(program, subject, config);

    if program.is_anchored() {
        let r = msa.match_at(start);
        return msa.outcome(r);
    }

    let first = program.first_literal();
    let mut s = start;
    loop {
        if let Some(c) = first {
            match memchr(c, &subject[s..]) {
                Some(off) => s += off,
                None => return MatchOutcome::NotFound,
            }
        }
        match msa.match_at(s) {
            Ok(None) => {}
            r => return msa.outcome(r),
        }
        if s >= subject.len() {
            return MatchOutcome::NotFound;
        }
        s += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================
