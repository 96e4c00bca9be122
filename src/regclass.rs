// regclass.rs - Bracket expression parser.
//
// Builds the membership bitmap for `[...]` and `[^...]`. Only the compiler
// calls into this module.

use crate::error::RegexError;
use crate::regint::*;

/// Parse a bracket expression. `p` indexes the byte right after `[`.
/// Returns the class and the index right after the closing `]`.
///
/// `]` directly after `[` or `[^` is a member, `-` between two members
/// spans the inclusive byte range, and a leading or trailing `-` is literal.
/// A descending range such as `z-a` contributes only its two endpoints.
/// Running off the pattern or meeting a raw newline is an error.
pub fn parse_bracket(pattern: &[u8], mut p: usize) -> Result<(CharClass, usize), RegexError> {
    let fetch = |p: &mut usize| -> Result<u8, RegexError> {
        match pattern.get(*p) {
            Some(&b'\n') | None => Err(RegexError::UnmatchedBracket),
            Some(&c) => {
                *p += 1;
                Ok(c)
            }
        }
    };

    let negated = pattern.get(p) == Some(&b'^');
    if negated {
        p += 1;
    }
    let mut cc = CharClass::new(negated);

    let mut prev: Option<u8> = None;
    let mut c = fetch(&mut p)?;
    loop {
        if c == b'-' {
            if let Some(lo) = prev {
                c = fetch(&mut p)?;
                if c == b']' {
                    bitset_set_bit(&mut cc.bs, b'-');
                    return Ok((cc, p));
                }
                bitset_set_range(&mut cc.bs, lo, c);
            }
        }
        bitset_set_bit(&mut cc.bs, c);
        prev = Some(c);

        c = fetch(&mut p)?;
        if c == b']' {
            return Ok((cc, p));
        }
    }
}
