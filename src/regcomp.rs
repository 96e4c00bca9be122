// regcomp.rs - Pattern compiler.
//
// One left-to-right scan over the pattern text, emitting one Operation per
// atom or marker. Repetition operators patch the most recent atom in place.
// Every emission is charged against the capacity before it happens.

use smallvec::SmallVec;

use crate::bre::*;
use crate::error::RegexError;
use crate::regclass::parse_bracket;
use crate::regint::*;

struct Compiler<'p> {
    pattern: &'p [u8],
    delimiter: Option<u8>,
    capacity: usize,
    /// Scan position in `pattern`.
    p: usize,
    ops: Vec<Operation>,
    encoded_len: usize,
    group_stack: SmallVec<[u8; BRE_MAX_GROUPS]>,
    num_groups: usize,
    closed_groups: usize,
    backrefed: u16,
    /// Index of the op a following `*` or `\{` applies to.
    last_atom: Option<usize>,
    anchored: bool,
}

impl<'p> Compiler<'p> {
    fn new(pattern: &'p [u8], delimiter: Option<u8>, capacity: usize) -> Self {
        Compiler {
            pattern,
            delimiter,
            capacity,
            p: 0,
            ops: Vec::new(),
            encoded_len: 0,
            group_stack: SmallVec::new(),
            num_groups: 0,
            closed_groups: 0,
            backrefed: 0,
            last_atom: None,
            anchored: false,
        }
    }

    /// End of input or an unescaped delimiter at `p`.
    fn at_end(&self, p: usize) -> bool {
        match self.pattern.get(p) {
            None => true,
            Some(&c) => Some(c) == self.delimiter,
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        let c = self.pattern.get(self.p).copied();
        if c.is_some() {
            self.p += 1;
        }
        c
    }

    // ========================================================================
    // Operation management
    // ========================================================================

    fn charge(&mut self, size: usize) -> Result<(), RegexError> {
        if self.encoded_len + size > self.capacity {
            return Err(RegexError::TooLong);
        }
        self.encoded_len += size;
        Ok(())
    }

    fn add_op(&mut self, op: Op) -> Result<usize, RegexError> {
        self.charge(op.encoded_len())?;
        self.ops.push(Operation::new(op));
        Ok(self.ops.len() - 1)
    }

    /// Emit a repeatable op.
    fn add_atom(&mut self, op: Op) -> Result<(), RegexError> {
        let idx = self.add_op(op)?;
        self.last_atom = Some(idx);
        Ok(())
    }

    /// Emit an op a repetition can't attach to.
    fn add_marker(&mut self, op: Op) -> Result<(), RegexError> {
        self.add_op(op)?;
        self.last_atom = None;
        Ok(())
    }

    fn set_repeat(&mut self, idx: usize, repeat: Repeat) -> Result<(), RegexError> {
        self.charge(repeat.encoded_len())?;
        self.ops[idx].repeat = repeat;
        self.last_atom = None;
        Ok(())
    }

    // ========================================================================
    // Scanner
    // ========================================================================

    fn compile(&mut self) -> Result<(), RegexError> {
        if self.pattern.first() == Some(&b'^') {
            self.anchored = true;
            self.p = 1;
        }

        while !self.at_end(self.p) {
            let c = self.pattern[self.p];
            self.p += 1;
            match c {
                b'.' => self.add_atom(Op::Any)?,
                b'*' => match self.last_atom {
                    Some(idx) => self.set_repeat(idx, Repeat::Star)?,
                    None => self.add_atom(Op::Char(b'*'))?,
                },
                b'[' => {
                    let (cc, next) = parse_bracket(self.pattern, self.p)?;
                    self.p = next;
                    self.add_atom(Op::Class(Box::new(cc)))?;
                }
                b'$' if self.at_end(self.p) => self.add_marker(Op::EndAnchor)?,
                b'\\' => self.compile_escape()?,
                _ => self.add_atom(Op::Char(c))?,
            }
        }

        if !self.group_stack.is_empty() {
            return Err(RegexError::UnmatchedParen);
        }
        self.add_marker(Op::Accept)
    }

    fn compile_escape(&mut self) -> Result<(), RegexError> {
        let Some(e) = self.next_byte() else {
            // trailing backslash stands for itself
            return self.add_atom(Op::Char(b'\\'));
        };
        match e {
            b'(' => self.open_group(),
            b')' => self.close_group(),
            b'{' => match self.last_atom {
                Some(idx) => {
                    let repeat = self.fetch_interval()?;
                    self.set_repeat(idx, repeat)
                }
                None => self.add_atom(Op::Char(b'{')),
            },
            b'1'..=b'9' => self.add_backref(e - b'0'),
            b'n' => self.add_atom(Op::Char(b'\n')),
            _ => self.add_atom(Op::Char(e)),
        }
    }

    fn open_group(&mut self) -> Result<(), RegexError> {
        if self.num_groups >= BRE_MAX_GROUPS {
            return Err(RegexError::TooManyGroups);
        }
        self.num_groups += 1;
        let n = self.num_groups as u8;
        self.group_stack.push(n);
        self.add_marker(Op::GroupStart(n))
    }

    fn close_group(&mut self) -> Result<(), RegexError> {
        let n = self.group_stack.pop().ok_or(RegexError::UnmatchedParen)?;
        self.closed_groups += 1;
        self.add_marker(Op::GroupEnd(n))
    }

    fn add_backref(&mut self, n: u8) -> Result<(), RegexError> {
        if n as usize > self.closed_groups {
            return Err(RegexError::InvalidBackrefIndex);
        }
        self.backrefed |= 1 << n;
        self.add_atom(Op::Backref(n))
    }

    // ========================================================================
    // Interval: \{m\}, \{m,\}, \{m,n\}
    // ========================================================================

    fn scan_number(&mut self) -> Result<u8, RegexError> {
        let start = self.p;
        let mut n: u32 = 0;
        while let Some(&c) = self.pattern.get(self.p) {
            if !c.is_ascii_digit() {
                break;
            }
            n = n.saturating_mul(10).saturating_add((c - b'0') as u32);
            self.p += 1;
        }
        if self.p == start || n >= BRE_REPEAT_INFINITE as u32 {
            return Err(RegexError::BadRepetitionRange);
        }
        Ok(n as u8)
    }

    fn fetch_interval(&mut self) -> Result<Repeat, RegexError> {
        let low = self.scan_number()?;
        let high = match self.next_byte() {
            Some(b',') => {
                if self.pattern.get(self.p) == Some(&b'\\') {
                    BRE_REPEAT_INFINITE
                } else {
                    self.scan_number()?
                }
            }
            Some(b'\\') => {
                self.p -= 1;
                low
            }
            _ => return Err(RegexError::BadRepetitionRange),
        };

        if self.next_byte() != Some(b'\\') || self.next_byte() != Some(b'}') {
            return Err(RegexError::BadRepetitionRange);
        }
        if high != BRE_REPEAT_INFINITE && low > high {
            return Err(RegexError::BadRepetitionRange);
        }
        Ok(Repeat::Range { low, high })
    }

    fn finish(self, null_pattern: bool) -> Program {
        Program {
            ops: self.ops,
            anchored: self.anchored,
            num_groups: self.num_groups,
            backrefed: self.backrefed,
            pattern_len: self.p,
            encoded_len: self.encoded_len,
            null_pattern,
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Compile `pattern` up to the first unescaped `delimiter` (or the end of
/// input) into a program of at most `capacity` encoded bytes.
///
/// On error nothing is returned but the error; there is no partial program.
pub fn bre_compile(
    pattern: &[u8],
    delimiter: Option<u8>,
    capacity: usize,
    options: CompileOptions,
) -> Result<Program, RegexError> {
    let mut c = Compiler::new(pattern, delimiter, capacity);

    if c.at_end(0) {
        if !options.contains(CompileOptions::NULL_PATTERN) {
            tracing::debug!("empty pattern and no previous pattern allowed");
            return Err(RegexError::EmptyPattern);
        }
        c.add_marker(Op::Accept)?;
        return Ok(c.finish(true));
    }

    if let Err(err) = c.compile() {
        tracing::debug!(offset = c.p, code = err.code(), "pattern compile failed: {}", err);
        return Err(err);
    }

    let prog = c.finish(false);
    tracing::trace!(
        ops = prog.ops.len(),
        bytes = prog.encoded_len,
        anchored = prog.anchored,
        "pattern compiled"
    );
    Ok(prog)
}

/// Compile a whole byte string with default capacity and no delimiter.
pub fn bre_new(pattern: &[u8]) -> Result<Program, RegexError> {
    bre_compile(pattern, None, BRE_DEFAULT_CAPACITY, CompileOptions::empty())
}

// ============================================================================
// Tests
// ============================================================================
