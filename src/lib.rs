//! # ferrobre
//!
//! Pure-Rust engine for the basic regular expressions of the classic `ed`
//! and `sed` editors: literals, `.`, bracket expressions, `*`, `\{m,n\}`,
//! `^`/`$` anchors, up to nine `\(...\)` groups and `\1`..`\9`
//! backreferences. Patterns and subjects are raw bytes; there are no
//! locales and no multi-byte characters.
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrobre::prelude::*;
//!
//! let re = Regex::new(r"[0-9]\{4\}-[0-9]\{2\}-[0-9]\{2\}").unwrap();
//! let m = re.find("Date: 2026-02-12").unwrap();
//! assert_eq!(m.as_str(), "2026-02-12");
//! assert_eq!(m.start(), 6);
//! ```
//!
//! Substitution uses the editor's replacement syntax:
//!
//! ```rust
//! use ferrobre::prelude::*;
//!
//! let re = Regex::new(r"\([a-z]*\) \([a-z]*\)").unwrap();
//! assert_eq!(re.replace("hello world", r"\2 \1"), "world hello");
//! ```
//!
//! ## Low-Level API
//!
//! The compiler and matcher can be driven directly:
//!
//! ```rust
//! use ferrobre::bre::*;
//! use ferrobre::regcomp::bre_compile;
//! use ferrobre::regexec::bre_search;
//!
//! // the pattern of `s/a*b/x/`, stopping at the delimiter
//! let prog = bre_compile(b"a*b/x/", Some(b'/'), BRE_DEFAULT_CAPACITY, CompileOptions::empty())
//!     .unwrap();
//! assert_eq!(prog.pattern_len(), 3);
//!
//! let outcome = bre_search(&prog, b"xaab", 0, &SearchConfig::default());
//! assert_eq!(outcome.into_result().map(|m| m.range()), Some(1..4));
//! ```
//!
//! ## Backtracking
//!
//! The matcher backtracks without memoization. Patterns with several
//! adjacent unbounded repetitions, such as `a*a*a*a*b`, take exponential
//! time on inputs that almost match. Set [`bre::SearchConfig::retry_limit`]
//! (or [`api::RegexBuilder::retry_limit`]) when the pattern is untrusted.
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`regcomp`] | Pattern compiler |
//! | [`regclass`] | Bracket expression parser |
//! | [`regexec`] | Backtracking matcher |
//! | [`regcapture`] | Per-search capture table |
//! | [`regint`] | Internal types and program representation |
//! | [`bre`] | Public types, limits and error codes |
//! | [`regerror`] | Error messages |
//! | [`error`] | `RegexError` |
//! | [`api`] | `Regex`, `Captures`, iterators and replacement |

pub mod api;
pub mod bre;
pub mod error;
pub mod prelude;
pub mod regcapture;
pub mod regclass;
pub mod regcomp;
pub mod regerror;
pub mod regexec;
pub mod regint;
