// api.rs - Idiomatic Rust API for ferrobre.
//
// Wraps the compiler and matcher (bre_compile, bre_search) with
// Rust-native types: Regex, RegexBuilder, Match, Captures, FindIter.

use std::ops::Range;

use crate::bre::*;
use crate::error::RegexError;
use crate::regcomp::bre_compile;
use crate::regexec::bre_search;
use crate::regint::Program;

/// A compiled basic regular expression.
///
/// # Examples
///
/// ```
/// use ferrobre::api::Regex;
///
/// let re = Regex::new(r"[0-9][0-9]*").unwrap();
/// assert!(re.is_match("hello 42"));
///
/// let m = re.find("hello 42").unwrap();
/// assert_eq!(m.as_str(), "42");
/// assert_eq!(m.start(), 6);
/// assert_eq!(m.end(), 8);
/// ```
#[derive(Clone)]
pub struct Regex {
    program: Program,
    pattern_len: usize,
    retry_limit: Option<u64>,
}

impl Regex {
    /// Compile a whole pattern with default capacity and no delimiter.
    pub fn new(pattern: &str) -> Result<Regex, RegexError> {
        Self::new_bytes(pattern.as_bytes())
    }

    /// Compile a pattern from raw bytes with default options.
    pub fn new_bytes(pattern: &[u8]) -> Result<Regex, RegexError> {
        RegexBuilder::new_bytes(pattern).build()
    }

    /// Create a [`RegexBuilder`] for fine-grained control over compilation.
    pub fn builder(pattern: &str) -> RegexBuilder {
        RegexBuilder::new(pattern)
    }

    fn config(&self) -> SearchConfig {
        SearchConfig {
            floor: None,
            retry_limit: self.retry_limit,
        }
    }

    fn search(&self, text: &[u8], start: usize) -> MatchOutcome {
        bre_search(&self.program, text, start, &self.config())
    }

    /// Return the first match in `text`, or `None` if no match.
    pub fn find<'t>(&self, text: &'t str) -> Option<Match<'t>> {
        self.find_bytes(text.as_bytes())
    }

    /// Return the first match in `text` (as bytes), or `None` if no match.
    ///
    /// A search that runs out of its retry budget also yields `None`; use
    /// [`Regex::try_find_bytes`] to tell the two apart.
    pub fn find_bytes<'t>(&self, text: &'t [u8]) -> Option<Match<'t>> {
        self.find_at_bytes(text, 0)
    }

    /// Return the first match starting at or after byte offset `start`.
    ///
    /// A pattern anchored with `^` only matches at `start` itself.
    pub fn find_at_bytes<'t>(&self, text: &'t [u8], start: usize) -> Option<Match<'t>> {
        let m = self.search(text, start).into_result()?;
        Some(Match {
            text,
            start: m.start(),
            end: m.end(),
        })
    }

    /// Like [`Regex::find_bytes`], but reports an exhausted retry budget
    /// as [`RegexError::RetryLimitInMatchOver`].
    pub fn try_find_bytes<'t>(&self, text: &'t [u8]) -> Result<Option<Match<'t>>, RegexError> {
        match self.search(text, 0) {
            MatchOutcome::Found(m) => Ok(Some(Match {
                text,
                start: m.start(),
                end: m.end(),
            })),
            MatchOutcome::NotFound => Ok(None),
            MatchOutcome::BudgetExceeded => Err(RegexError::RetryLimitInMatchOver),
        }
    }

    /// Check whether `text` matches the pattern anywhere.
    pub fn is_match(&self, text: &str) -> bool {
        self.is_match_bytes(text.as_bytes())
    }

    /// Check whether `text` (as bytes) matches the pattern anywhere.
    pub fn is_match_bytes(&self, text: &[u8]) -> bool {
        self.search(text, 0).is_found()
    }

    /// Return the first match with all capture groups, or `None`.
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.captures_bytes(text.as_bytes())
    }

    /// Return the first match with all capture groups (bytes), or `None`.
    pub fn captures_bytes<'t>(&self, text: &'t [u8]) -> Option<Captures<'t>> {
        let result = self.search(text, 0).into_result()?;
        Some(Captures { text, result })
    }

    /// Run one search with explicit settings, returning the raw outcome.
    ///
    /// The regex's own retry limit is ignored; `config` is used as given.
    pub fn search_with(&self, text: &[u8], start: usize, config: &SearchConfig) -> MatchOutcome {
        bre_search(&self.program, text, start, config)
    }

    /// Iterate over all non-overlapping matches in `text`.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> FindIter<'r, 't> {
        self.find_iter_bytes(text.as_bytes())
    }

    /// Iterate over all non-overlapping matches in `text` (as bytes).
    ///
    /// Follows the rules of a global substitution: an empty match directly
    /// after the previous match is skipped, and a pattern anchored with `^`
    /// yields at most one match.
    pub fn find_iter_bytes<'r, 't>(&'r self, text: &'t [u8]) -> FindIter<'r, 't> {
        FindIter(self.captures_iter_bytes(text))
    }

    /// Iterate over the captures of all non-overlapping matches in `text`.
    pub fn captures_iter<'r, 't>(&'r self, text: &'t str) -> CaptureMatches<'r, 't> {
        self.captures_iter_bytes(text.as_bytes())
    }

    /// Iterate over the captures of all non-overlapping matches (bytes).
    pub fn captures_iter_bytes<'r, 't>(&'r self, text: &'t [u8]) -> CaptureMatches<'r, 't> {
        CaptureMatches {
            regex: self,
            text,
            pos: 0,
            last_end: None,
            done: false,
        }
    }

    /// Replace the first match in `text` with `template`, expanded as by
    /// [`Captures::expand`].
    ///
    /// Invalid UTF-8 produced by the replacement is replaced with U+FFFD.
    pub fn replace(&self, text: &str, template: &str) -> String {
        let out = self.replace_bytes(text.as_bytes(), template.as_bytes());
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Replace the first match in `text` (as bytes) with `template`.
    ///
    /// If the retry budget runs out, `text` is returned unchanged; use
    /// [`Regex::try_replace_bytes`] to detect that.
    pub fn replace_bytes(&self, text: &[u8], template: &[u8]) -> Vec<u8> {
        self.try_replace_bytes(text, template)
            .unwrap_or_else(|_| text.to_vec())
    }

    /// Like [`Regex::replace_bytes`], but reports an exhausted retry budget
    /// as [`RegexError::RetryLimitInMatchOver`].
    pub fn try_replace_bytes(&self, text: &[u8], template: &[u8]) -> Result<Vec<u8>, RegexError> {
        let result = match self.search(text, 0) {
            MatchOutcome::Found(m) => m,
            MatchOutcome::NotFound => return Ok(text.to_vec()),
            MatchOutcome::BudgetExceeded => return Err(RegexError::RetryLimitInMatchOver),
        };
        let whole = result.range();
        let caps = Captures { text, result };
        let mut out = Vec::with_capacity(text.len() + template.len());
        out.extend_from_slice(&text[..whole.start]);
        caps.expand(template, &mut out);
        out.extend_from_slice(&text[whole.end..]);
        Ok(out)
    }

    /// Replace every match in `text` with `template`.
    pub fn replace_all(&self, text: &str, template: &str) -> String {
        let out = self.replace_all_bytes(text.as_bytes(), template.as_bytes());
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Replace every match in `text` (as bytes) with `template`.
    ///
    /// If the retry budget runs out on any search, `text` is returned
    /// unchanged rather than partly substituted; use
    /// [`Regex::try_replace_all_bytes`] to detect that.
    pub fn replace_all_bytes(&self, text: &[u8], template: &[u8]) -> Vec<u8> {
        self.try_replace_all_bytes(text, template)
            .unwrap_or_else(|_| text.to_vec())
    }

    /// Like [`Regex::replace_all_bytes`], but reports an exhausted retry
    /// budget as [`RegexError::RetryLimitInMatchOver`].
    pub fn try_replace_all_bytes(
        &self,
        text: &[u8],
        template: &[u8],
    ) -> Result<Vec<u8>, RegexError> {
        let mut out = Vec::with_capacity(text.len());
        let mut copied = 0;
        let mut matches = self.captures_iter_bytes(text);
        while let Some(caps) = matches.try_next()? {
            let whole = caps.result.range();
            out.extend_from_slice(&text[copied..whole.start]);
            caps.expand(template, &mut out);
            copied = whole.end;
        }
        out.extend_from_slice(&text[copied..]);
        Ok(out)
    }

    /// Return the number of capture groups in the pattern (excluding group 0).
    pub fn captures_len(&self) -> usize {
        self.program.num_groups()
    }

    /// Number of pattern bytes consumed by compilation. With a delimiter
    /// this is the offset of the delimiter that ended the pattern.
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// Access the compiled [`Program`] for use with the low-level API.
    pub fn as_program(&self) -> &Program {
        &self.program
    }
}

impl std::fmt::Debug for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Regex")
            .field("groups", &self.program.num_groups())
            .field("anchored", &self.program.is_anchored())
            .finish_non_exhaustive()
    }
}

// === RegexBuilder ===

/// Builder for compiling a [`Regex`] with custom options.
///
/// # Examples
///
/// ```
/// use ferrobre::api::Regex;
///
/// // an ed-style command: the pattern ends at the first unescaped '/'
/// let re = Regex::builder("a\\/b/rest")
///     .delimiter(b'/')
///     .build()
///     .unwrap();
/// assert_eq!(re.pattern_len(), 4);
/// assert!(re.is_match("xa/b"));
/// ```
#[derive(Clone, Debug)]
pub struct RegexBuilder {
    pattern: Vec<u8>,
    delimiter: Option<u8>,
    capacity: usize,
    previous: Option<Program>,
    retry_limit: Option<u64>,
}

impl RegexBuilder {
    /// Create a new builder for the given pattern.
    pub fn new(pattern: &str) -> Self {
        Self::new_bytes(pattern.as_bytes())
    }

    /// Create a new builder for a pattern given as raw bytes.
    pub fn new_bytes(pattern: &[u8]) -> Self {
        RegexBuilder {
            pattern: pattern.to_vec(),
            delimiter: None,
            capacity: BRE_DEFAULT_CAPACITY,
            previous: None,
            retry_limit: None,
        }
    }

    /// Stop the pattern at the first unescaped occurrence of `delim`.
    pub fn delimiter(mut self, delim: u8) -> Self {
        self.delimiter = Some(delim);
        self
    }

    /// Program capacity in encoded bytes (default: 512).
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Reuse `prev` when the pattern turns out to be empty, as `s//x/`
    /// does in an editor. Without it an empty pattern is an error.
    pub fn previous(mut self, prev: &Regex) -> Self {
        self.previous = Some(prev.program.clone());
        self
    }

    /// Give up a search after `n` matcher steps. See [`SearchConfig::retry_limit`].
    pub fn retry_limit(mut self, n: u64) -> Self {
        self.retry_limit = Some(n);
        self
    }

    /// Compile the pattern into a [`Regex`].
    pub fn build(self) -> Result<Regex, RegexError> {
        let options = if self.previous.is_some() {
            CompileOptions::NULL_PATTERN
        } else {
            CompileOptions::empty()
        };
        let compiled = bre_compile(&self.pattern, self.delimiter, self.capacity, options)?;
        let pattern_len = compiled.pattern_len();
        let program = match self.previous {
            Some(prev) if compiled.is_null_pattern() => prev,
            _ => compiled,
        };
        Ok(Regex {
            program,
            pattern_len,
            retry_limit: self.retry_limit,
        })
    }
}

// === Match ===

/// A single match result referencing the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t [u8],
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// Byte offset of the start of the match.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset of the end of the match (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Byte range of the match.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The matched text as a byte slice.
    pub fn as_bytes(&self) -> &'t [u8] {
        &self.text[self.start..self.end]
    }

    /// The matched text as a `&str`.
    ///
    /// # Panics
    ///
    /// Panics if the matched bytes are not valid UTF-8. `.` and bracket
    /// expressions match single bytes, so a match can split a character.
    pub fn as_str(&self) -> &'t str {
        std::str::from_utf8(self.as_bytes()).expect("match is not valid UTF-8")
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// === Captures ===

/// All capture groups from a single match.
///
/// Group 0 is the entire match. Groups 1..N correspond to `\(...\)` in the
/// pattern.
#[derive(Clone)]
pub struct Captures<'t> {
    text: &'t [u8],
    result: MatchResult,
}

impl<'t> Captures<'t> {
    /// Get capture group `i`, or `None` if the group did not participate.
    pub fn get(&self, i: usize) -> Option<Match<'t>> {
        let r = self.result.group(i)?;
        Some(Match {
            text: self.text,
            start: r.start,
            end: r.end,
        })
    }

    /// Number of capture groups (including group 0).
    pub fn len(&self) -> usize {
        self.result.num_groups() + 1
    }

    /// Always `false`: group 0 is present in every match.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all capture groups.
    pub fn iter(&self) -> CapturesIter<'_, 't> {
        CapturesIter {
            captures: self,
            index: 0,
        }
    }

    /// Append `template` to `dst` with substitutions: `&` is the whole
    /// match, `\1` to `\9` the groups (empty when unset), `\n` a newline,
    /// and a backslash before any other byte makes that byte literal.
    ///
    /// ```
    /// use ferrobre::api::Regex;
    ///
    /// let re = Regex::new(r"\([a-z]*\)=\([0-9]*\)").unwrap();
    /// let caps = re.captures("x=1").unwrap();
    /// let mut out = Vec::new();
    /// caps.expand(br"\2:\1 (&)", &mut out);
    /// assert_eq!(out, b"1:x (x=1)");
    /// ```
    pub fn expand(&self, template: &[u8], dst: &mut Vec<u8>) {
        let mut bytes = template.iter().copied();
        while let Some(c) = bytes.next() {
            match c {
                b'&' => dst.extend_from_slice(&self.text[self.result.range()]),
                b'\\' => match bytes.next() {
                    Some(d @ b'1'..=b'9') => {
                        if let Some(m) = self.get((d - b'0') as usize) {
                            dst.extend_from_slice(m.as_bytes());
                        }
                    }
                    Some(b'n') => dst.push(b'\n'),
                    Some(other) => dst.push(other),
                    None => dst.push(b'\\'),
                },
                _ => dst.push(c),
            }
        }
    }
}

impl std::fmt::Debug for Captures<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// === CapturesIter ===

/// Iterator over capture groups in a [`Captures`].
pub struct CapturesIter<'c, 't> {
    captures: &'c Captures<'t>,
    index: usize,
}

impl<'c, 't> Iterator for CapturesIter<'c, 't> {
    type Item = Option<Match<'t>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.captures.len() {
            return None;
        }
        let m = self.captures.get(self.index);
        self.index += 1;
        Some(m)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.captures.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CapturesIter<'_, '_> {}

// === CaptureMatches / FindIter ===

/// Iterator over the captures of all non-overlapping matches in a text.
pub struct CaptureMatches<'r, 't> {
    regex: &'r Regex,
    text: &'t [u8],
    pos: usize,
    last_end: Option<usize>,
    done: bool,
}

impl<'r, 't> CaptureMatches<'r, 't> {
    /// Advance to the next match. An exhausted retry budget is returned as
    /// [`RegexError::RetryLimitInMatchOver`] and ends the iteration.
    pub fn try_next(&mut self) -> Result<Option<Captures<'t>>, RegexError> {
        loop {
            if self.done || self.pos > self.text.len() {
                return Ok(None);
            }
            let result = match self.regex.search(self.text, self.pos) {
                MatchOutcome::Found(m) => m,
                MatchOutcome::NotFound => {
                    self.done = true;
                    return Ok(None);
                }
                MatchOutcome::BudgetExceeded => {
                    self.done = true;
                    return Err(RegexError::RetryLimitInMatchOver);
                }
            };
            let (start, end) = (result.start(), result.end());

            // An empty match right where the previous one ended is not a
            // new match; retry one byte further on.
            if start == end && self.last_end == Some(start) {
                self.pos = start + 1;
                continue;
            }

            self.pos = if start == end { end + 1 } else { end };
            self.last_end = Some(end);
            if self.regex.program.is_anchored() {
                self.done = true;
            }
            return Ok(Some(Captures {
                text: self.text,
                result,
            }));
        }
    }
}

impl<'r, 't> Iterator for CaptureMatches<'r, 't> {
    type Item = Captures<'t>;

    /// Stops early, without an error, when the retry budget runs out; call
    /// [`CaptureMatches::try_next`] to tell that apart from the end.
    fn next(&mut self) -> Option<Captures<'t>> {
        self.try_next().ok().flatten()
    }
}

/// Iterator over all non-overlapping matches in a text.
pub struct FindIter<'r, 't>(CaptureMatches<'r, 't>);

impl<'r, 't> Iterator for FindIter<'r, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Match<'t>> {
        let caps = self.0.next()?;
        let r = caps.result.range();
        Some(Match {
            text: caps.text,
            start: r.start,
            end: r.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_new_and_find() {
        let re = Regex::new(r"[0-9][0-9]*").unwrap();
        let m = re.find("hello 42 world").unwrap();
        assert_eq!(m.as_str(), "42");
        assert_eq!(m.start(), 6);
        assert_eq!(m.end(), 8);
        assert_eq!(m.range(), 6..8);
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
    }

    #[test]
    fn regex_no_match() {
        let re = Regex::new(r"[0-9][0-9]*").unwrap();
        assert!(re.find("no digits here").is_none());
    }

    #[test]
    fn regex_is_match() {
        let re = Regex::new(r"hello").unwrap();
        assert!(re.is_match("say hello"));
        assert!(!re.is_match("say goodbye"));
    }

    #[test]
    fn regex_captures() {
        let re = Regex::new(r"\([0-9]\{4\}\)-\([0-9]\{2\}\)-\([0-9]\{2\}\)").unwrap();
        let caps = re.captures("date: 2026-02-14").unwrap();
        assert_eq!(caps.get(0).unwrap().as_str(), "2026-02-14");
        assert_eq!(caps.get(1).unwrap().as_str(), "2026");
        assert_eq!(caps.get(2).unwrap().as_str(), "02");
        assert_eq!(caps.get(3).unwrap().as_str(), "14");
        assert!(caps.get(4).is_none());
        assert_eq!(caps.len(), 4);
    }

    #[test]
    fn regex_captures_len() {
        let re = Regex::new(r"\(a\)\(b\)\(c\)").unwrap();
        assert_eq!(re.captures_len(), 3);
    }

    #[test]
    fn regex_find_iter() {
        let re = Regex::new(r"[0-9][0-9]*").unwrap();
        let matches: Vec<&str> = re.find_iter("1 + 22 = 333").map(|m| m.as_str()).collect();
        assert_eq!(matches, vec!["1", "22", "333"]);
    }

    #[test]
    fn regex_invalid_pattern() {
        assert_eq!(Regex::new(r"\(unclosed").unwrap_err(), RegexError::UnmatchedParen);
        assert_eq!(Regex::new("").unwrap_err(), RegexError::EmptyPattern);
    }

    #[test]
    fn match_as_bytes() {
        let re = Regex::new(r"world").unwrap();
        let m = re.find("hello world").unwrap();
        assert_eq!(m.as_bytes(), b"world");
    }

    #[test]
    fn captures_iter_groups() {
        let re = Regex::new(r"\(a\)\(b*\)").unwrap();
        let caps = re.captures("a").unwrap();
        let items: Vec<_> = caps.iter().collect();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_some());
        assert_eq!(items[1].map(|m| m.as_bytes()), Some(&b"a"[..]));
        // an empty group still participates
        assert_eq!(items[2].map(|m| m.range()), Some(1..1));
    }

    #[test]
    fn empty_match_find_iter() {
        let re = Regex::new(r"x*").unwrap();
        let starts: Vec<_> = re.find_iter("ab").map(|m| m.start()).collect();
        assert_eq!(starts, vec![0, 1, 2]);
    }

    #[test]
    fn find_iter_skips_empty_match_after_match() {
        let re = Regex::new(r"a*").unwrap();
        let spans: Vec<_> = re.find_iter("baaac").map(|m| m.range()).collect();
        assert_eq!(spans, vec![0..0, 1..4, 5..5]);
    }

    #[test]
    fn find_iter_anchored_yields_once() {
        let re = Regex::new(r"^a").unwrap();
        assert_eq!(re.find_iter("aaa").count(), 1);
        assert_eq!(re.find_iter("baa").count(), 0);
    }

    #[test]
    fn find_at_offset() {
        let re = Regex::new(r"ab").unwrap();
        assert_eq!(re.find_at_bytes(b"ab ab", 1).map(|m| m.range()), Some(3..5));
        assert!(re.find_at_bytes(b"ab ab", 6).is_none());
    }

    #[test]
    fn replace_first() {
        let re = Regex::new(r"\([a-z]*\)@\([a-z]*\)").unwrap();
        assert_eq!(re.replace("to: me@host!", r"\2 at \1"), "to: host at me!");
        assert_eq!(re.replace("nothing", "x"), "nothing");
    }

    #[test]
    fn replace_all_global() {
        let re = Regex::new(r"a*").unwrap();
        assert_eq!(re.replace_all("baaac", "x"), "xbxcx");
        let re = Regex::new(r"o").unwrap();
        assert_eq!(re.replace_all("foo boo", "[&]"), "f[o][o] b[o][o]");
    }

    #[test]
    fn expand_escapes() {
        let re = Regex::new(r"\(b\)").unwrap();
        let caps = re.captures("abc").unwrap();
        let mut out = Vec::new();
        caps.expand(br"<\&\n\7\1\\>\", &mut out);
        assert_eq!(out, b"<&\nb\\>\\");
    }

    #[test]
    fn builder_delimiter_and_capacity() {
        let re = Regex::builder("ab/c").delimiter(b'/').build().unwrap();
        assert_eq!(re.pattern_len(), 2);
        assert!(re.is_match("xab"));

        let err = Regex::builder("abcdef").capacity(8).build().unwrap_err();
        assert_eq!(err, RegexError::TooLong);
    }

    #[test]
    fn builder_reuses_previous_pattern() {
        let prev = Regex::new(r"b\(c\)").unwrap();
        let re = Regex::builder("/new/").delimiter(b'/').previous(&prev).build().unwrap();
        assert_eq!(re.pattern_len(), 0);
        assert_eq!(re.captures_len(), 1);
        assert_eq!(re.find("abc").map(|m| m.range()), Some(1..3));

        // a non-empty pattern is compiled normally
        let re = Regex::builder("x").previous(&prev).build().unwrap();
        assert!(re.is_match("x"));
        assert!(!re.is_match("bc"));
    }

    #[test]
    fn retry_limit_reports_error() {
        let re = Regex::builder("a*a*a*a*a*a*a*a*b")
            .retry_limit(5_000)
            .build()
            .unwrap();
        let text = vec![b'a'; 40];
        assert_eq!(re.try_find_bytes(&text), Err(RegexError::RetryLimitInMatchOver));
        assert!(re.find_bytes(&text).is_none());
        assert_eq!(re.try_find_bytes(b"aab").map(|m| m.map(|m| m.range())), Ok(Some(0..3)));
    }

    #[test]
    fn replace_all_reports_exhausted_budget() {
        let re = Regex::builder("a*a*a*a*a*a*a*a*b")
            .retry_limit(5_000)
            .build()
            .unwrap();
        let mut text = b"ab ".to_vec();
        text.extend_from_slice(&[b'a'; 40]);
        text.extend_from_slice(b" ab");

        assert_eq!(
            re.try_replace_all_bytes(&text, b"X"),
            Err(RegexError::RetryLimitInMatchOver)
        );
        // never a partial substitution
        assert_eq!(re.replace_all_bytes(&text, b"X"), text);

        let mut expected = b"X ".to_vec();
        expected.extend_from_slice(&text[2..]);
        assert_eq!(re.try_replace_bytes(&text, b"X"), Ok(expected));
    }

    #[test]
    fn capture_matches_try_next_surfaces_budget() {
        let re = Regex::builder("a*a*a*a*a*a*a*a*b")
            .retry_limit(5_000)
            .build()
            .unwrap();
        let mut text = b"ab ".to_vec();
        text.extend_from_slice(&[b'a'; 40]);
        let mut it = re.captures_iter_bytes(&text);
        assert_eq!(it.try_next().unwrap().map(|c| c.get(0).unwrap().range()), Some(0..2));
        assert_eq!(it.try_next().err(), Some(RegexError::RetryLimitInMatchOver));
        assert!(it.try_next().unwrap().is_none());
    }

    #[test]
    fn search_with_floor() {
        let re = Regex::new(r"x*").unwrap();
        let out = re.search_with(b"ab", 0, &SearchConfig::new().floor(0));
        assert_eq!(out.into_result().map(|m| m.range()), Some(1..1));
    }
}
