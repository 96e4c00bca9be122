// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use ferrobre::prelude::*;
//!
//! let re = Regex::new(r"[0-9][0-9]*").unwrap();
//! let m = re.find("answer: 42").unwrap();
//! assert_eq!(m.as_str(), "42");
//! ```

pub use crate::api::{
    CaptureMatches, Captures, CapturesIter, FindIter, Match, Regex, RegexBuilder,
};
pub use crate::bre::{MatchOutcome, SearchConfig};
pub use crate::error::RegexError;
