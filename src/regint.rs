// regint.rs - Internal types: BitSet, CharClass, Op, Repeat, Operation, Program.

use std::fmt;

use crate::bre::*;

// === BitSet (256 bits, one per byte value) ===
pub const BITS_PER_BYTE: usize = 8;
pub const SINGLE_BYTE_SIZE: usize = 1 << BITS_PER_BYTE;
pub const BITS_IN_ROOM: usize = 32;
pub const BITSET_REAL_SIZE: usize = SINGLE_BYTE_SIZE / BITS_IN_ROOM;
pub type Bits = u32;
pub type BitSet = [Bits; BITSET_REAL_SIZE];

#[inline]
pub fn bs_room(pos: u8) -> usize {
    (pos as usize) >> 5
}

#[inline]
pub fn bs_bit(pos: u8) -> u32 {
    1u32 << (pos & 0x1f)
}

#[inline]
pub fn bitset_at(bs: &BitSet, pos: u8) -> bool {
    (bs[bs_room(pos)] & bs_bit(pos)) != 0
}

#[inline]
pub fn bitset_set_bit(bs: &mut BitSet, pos: u8) {
    bs[bs_room(pos)] |= bs_bit(pos);
}

/// Set every bit in `from..=to`. An empty (descending) range sets nothing.
pub fn bitset_set_range(bs: &mut BitSet, from: u8, to: u8) {
    for c in from..=to {
        bitset_set_bit(bs, c);
    }
}

// === Encoded sizes ===
//
// Capacity is charged in the byte sizes of the classic packed encoding:
// one tag byte plus operands. A bitmap costs 16 bytes when the class only
// names ASCII bytes, 32 otherwise. Star is a tag bit, a range adds two
// operand bytes.
pub const SIZE_TAG: usize = 1;
pub const SIZE_OPERAND: usize = 1;
pub const SIZE_ASCII_BITMAP: usize = 16;
pub const SIZE_FULL_BITMAP: usize = 32;
pub const SIZE_RANGE_OPERANDS: usize = 2;

// === CharClass ===

/// Bracket-expression membership table. Negation is applied when testing,
/// the bitmap always holds the listed members.
#[derive(Clone, PartialEq, Eq)]
pub struct CharClass {
    pub bs: BitSet,
    pub negated: bool,
}

impl CharClass {
    pub fn new(negated: bool) -> Self {
        CharClass {
            bs: [0; BITSET_REAL_SIZE],
            negated,
        }
    }

    #[inline]
    pub fn matches(&self, c: u8) -> bool {
        bitset_at(&self.bs, c) != self.negated
    }

    /// True when no member is >= 0x80 and newline is not a member.
    pub fn is_ascii_only(&self) -> bool {
        self.bs[BITSET_REAL_SIZE / 2..].iter().all(|&w| w == 0) && !bitset_at(&self.bs, b'\n')
    }

    pub fn encoded_len(&self) -> usize {
        if self.is_ascii_only() {
            SIZE_ASCII_BITMAP
        } else {
            SIZE_FULL_BITMAP
        }
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.negated { "[^" } else { "[" })?;
        for c in 0..=255u8 {
            if bitset_at(&self.bs, c) {
                if c.is_ascii_graphic() {
                    write!(f, "{}", c as char)?;
                } else {
                    write!(f, "\\x{:02x}", c)?;
                }
            }
        }
        f.write_str("]")
    }
}

// === Op ===

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Char(u8),
    Any,
    Class(Box<CharClass>),
    EndAnchor,
    Accept,
    GroupStart(u8),
    GroupEnd(u8),
    Backref(u8),
}

impl Op {
    pub fn encoded_len(&self) -> usize {
        match self {
            Op::Any | Op::EndAnchor | Op::Accept => SIZE_TAG,
            Op::Char(_) | Op::GroupStart(_) | Op::GroupEnd(_) | Op::Backref(_) => {
                SIZE_TAG + SIZE_OPERAND
            }
            Op::Class(cc) => SIZE_TAG + cc.encoded_len(),
        }
    }
}

// === Repeat ===

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    None,
    Star,
    /// `high == BRE_REPEAT_INFINITE` means unbounded.
    Range { low: u8, high: u8 },
}

impl Repeat {
    pub fn encoded_len(&self) -> usize {
        match self {
            Repeat::Range { .. } => SIZE_RANGE_OPERANDS,
            _ => 0,
        }
    }
}

/// Decode the two operand bytes of a `\{low,high\}` repetition.
/// `None` for the upper bound means unbounded.
pub fn get_repeat_range(low: u8, high: u8) -> (u8, Option<u8>) {
    if high == BRE_REPEAT_INFINITE {
        (low, None)
    } else {
        (low, Some(high))
    }
}

// === Operation ===

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    pub op: Op,
    pub repeat: Repeat,
}

impl Operation {
    pub fn new(op: Op) -> Self {
        Operation {
            op,
            repeat: Repeat::None,
        }
    }

    pub fn encoded_len(&self) -> usize {
        self.op.encoded_len() + self.repeat.encoded_len()
    }
}

// === Program ===

/// A compiled pattern. Immutable; share it freely between searches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub(crate) ops: Vec<Operation>,
    pub(crate) anchored: bool,
    pub(crate) num_groups: usize,
    /// Bit `i` set when some `\i` refers to group `i`.
    pub(crate) backrefed: u16,
    pub(crate) pattern_len: usize,
    pub(crate) encoded_len: usize,
    pub(crate) null_pattern: bool,
}

impl Program {
    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    /// Pattern started with `^`.
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    pub fn is_backrefed(&self, group: usize) -> bool {
        group < 16 && (self.backrefed & (1 << group)) != 0
    }

    /// Number of pattern bytes consumed, i.e. the offset of the terminating
    /// delimiter (or the input length when none was found).
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    pub fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    /// Compiled from an empty pattern under `CompileOptions::NULL_PATTERN`.
    pub fn is_null_pattern(&self) -> bool {
        self.null_pattern
    }

    /// The byte every match has to begin with, if there is one.
    pub fn first_literal(&self) -> Option<u8> {
        let first = self
            .ops
            .iter()
            .find(|o| !matches!(o.op, Op::GroupStart(_)))?;
        match (&first.op, first.repeat) {
            (Op::Char(c), Repeat::None) => Some(*c),
            (Op::Char(c), Repeat::Range { low, .. }) if low > 0 => Some(*c),
            _ => None,
        }
    }
}
