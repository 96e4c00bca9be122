// api_test.rs - Integration tests for the idiomatic Rust API.

use ferrobre::api::{Regex, RegexBuilder};
use ferrobre::error::RegexError;
use ferrobre::prelude::*;

// === Regex::new ===

#[test]
fn simple_pattern() {
    let re = Regex::new(r"[0-9][0-9]*").unwrap();
    let m = re.find("abc 123 def").unwrap();
    assert_eq!(m.as_str(), "123");
}

#[test]
fn no_match_returns_none() {
    let re = Regex::new(r"xyz").unwrap();
    assert!(re.find("abc").is_none());
}

#[test]
fn empty_pattern_is_an_error() {
    assert_eq!(Regex::new("").unwrap_err(), RegexError::EmptyPattern);
}

#[test]
fn invalid_pattern_errors() {
    assert_eq!(Regex::new(r"\(unclosed").unwrap_err(), RegexError::UnmatchedParen);
    assert_eq!(Regex::new(r"[]").unwrap_err(), RegexError::UnmatchedBracket);
    assert_eq!(Regex::new(r"a\{3,1\}").unwrap_err(), RegexError::BadRepetitionRange);
}

#[test]
fn error_display() {
    let err = Regex::new(r"\1").unwrap_err();
    assert_eq!(err.to_string(), "\\digit out of range");
}

// === Regex::is_match ===

#[test]
fn is_match_true() {
    let re = Regex::new(r"world").unwrap();
    assert!(re.is_match("hello world"));
}

#[test]
fn is_match_false() {
    let re = Regex::new(r"^world").unwrap();
    assert!(!re.is_match("hello world"));
}

#[test]
fn is_match_bytes_non_utf8() {
    let re = Regex::new_bytes(b"\xff[\x80-\xfe]*\xff").unwrap();
    assert!(re.is_match_bytes(b"a\xff\x90\x91\xff"));
    assert!(!re.is_match_bytes(b"\xff\x7f\xff"));
}

// === Captures ===

#[test]
fn captures_key_value() {
    let re = Regex::new(r"^\([a-z_]*\) *= *\(.*\)$").unwrap();
    let caps = re.captures("max_size = 1024").unwrap();
    assert_eq!(caps.get(1).unwrap().as_str(), "max_size");
    assert_eq!(caps.get(2).unwrap().as_str(), "1024");
    assert_eq!(caps.len(), 3);
}

#[test]
fn captures_debug_lists_groups() {
    let re = Regex::new(r"\(a\)b").unwrap();
    let caps = re.captures("ab").unwrap();
    let shown = format!("{:?}", caps);
    assert!(shown.starts_with('['));
    assert_eq!(caps.iter().len(), 2);
}

#[test]
fn captures_iter_all_matches() {
    let re = Regex::new(r"\([a-z]\)=\([0-9]\)").unwrap();
    let pairs: Vec<(String, String)> = re
        .captures_iter("a=1, b=2, c=3")
        .map(|c| {
            (
                c.get(1).unwrap().as_str().to_string(),
                c.get(2).unwrap().as_str().to_string(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
            ("c".to_string(), "3".to_string()),
        ]
    );
}

// === FindIter ===

#[test]
fn find_iter_words() {
    let re = Regex::new(r"[a-z][a-z]*").unwrap();
    let words: Vec<&str> = re.find_iter("one, two three").map(|m| m.as_str()).collect();
    assert_eq!(words, vec!["one", "two", "three"]);
}

#[test]
fn find_iter_empty_matches_between_bytes() {
    let re = Regex::new(r"x*").unwrap();
    let spans: Vec<_> = re.find_iter("axxb").map(|m| m.range()).collect();
    assert_eq!(spans, vec![0..0, 1..3, 4..4]);
}

#[test]
fn find_iter_no_match() {
    let re = Regex::new(r"q").unwrap();
    assert_eq!(re.find_iter("abc").count(), 0);
}

// === Replacement ===

#[test]
fn replace_swaps_groups() {
    let re = Regex::new(r"\([a-z]*\), \([a-z]*\)").unwrap();
    assert_eq!(re.replace("doe, john", r"\2 \1"), "john doe");
}

#[test]
fn replace_all_global_star() {
    let re = Regex::new(r"a*").unwrap();
    assert_eq!(re.replace_all("baaac", "x"), "xbxcx");
}

#[test]
fn replace_all_with_ampersand() {
    let re = Regex::new(r"[0-9][0-9]*").unwrap();
    assert_eq!(re.replace_all("1 + 22", "<&>"), "<1> + <22>");
    assert_eq!(re.replace_all("none", "<&>"), "none");
}

#[test]
fn replace_all_anchored_replaces_once() {
    let re = Regex::new(r"^a").unwrap();
    assert_eq!(re.replace_all("aaa", "b"), "baa");
}

#[test]
fn replace_escaped_ampersand_and_newline() {
    let re = Regex::new(r" ").unwrap();
    assert_eq!(re.replace("a b", r"\&\n"), "a&\nb");
}

// === RegexBuilder ===

#[test]
fn builder_delimiter() {
    let re = RegexBuilder::new(r"a\,b,c,").delimiter(b',').build().unwrap();
    assert_eq!(re.pattern_len(), 4);
    assert!(re.is_match("a,b"));
    assert!(!re.is_match("a"));
}

#[test]
fn builder_capacity_limit() {
    // 17 bytes for the class bitmap plus one for the final accept
    assert!(Regex::builder("[a-z]").capacity(18).build().is_ok());
    assert_eq!(
        Regex::builder("[a-z]").capacity(17).build().unwrap_err(),
        RegexError::TooLong
    );
}

#[test]
fn builder_previous_pattern() {
    let first = Regex::new(r"o\(.\)").unwrap();
    let again = Regex::builder("").previous(&first).build().unwrap();
    assert_eq!(again.replace("foobar", r"0\1"), "f0obar");
}

#[test]
fn builder_retry_limit() {
    let re = Regex::builder(r"a*b").retry_limit(100).build().unwrap();
    assert_eq!(re.try_find_bytes(b"aab").map(|m| m.is_some()), Ok(true));

    let re = Regex::builder(r".*.*.*.*.*x").retry_limit(20_000).build().unwrap();
    let text = vec![b'.'; 64];
    assert_eq!(re.try_find_bytes(&text), Err(RegexError::RetryLimitInMatchOver));
}

#[test]
fn replace_all_budget_is_not_swallowed() {
    let re = Regex::builder(r"a*a*a*a*a*a*a*a*b").retry_limit(5_000).build().unwrap();
    let mut text = b"ab ".to_vec();
    text.extend(std::iter::repeat(b'a').take(40));
    text.extend_from_slice(b" ab");

    assert_eq!(
        re.try_replace_all_bytes(&text, b"X"),
        Err(RegexError::RetryLimitInMatchOver)
    );
    assert_eq!(re.replace_all_bytes(&text, b"X"), text);

    // enough budget: both matches are replaced
    let re = Regex::builder(r"ab").retry_limit(5_000).build().unwrap();
    assert_eq!(re.try_replace_all_bytes(b"ab x ab", b"X"), Ok(b"X x X".to_vec()));
}

// === Low-level access ===

#[test]
fn search_with_start_offset() {
    let re = Regex::new(r"ab").unwrap();
    let outcome = re.search_with(b"ab-ab", 1, &SearchConfig::default());
    assert_eq!(outcome.into_result().map(|m| m.range()), Some(3..5));
}

#[test]
fn regex_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Regex>();

    let re = Regex::new(r"\([a-z]*\)\1").unwrap();
    std::thread::scope(|s| {
        let a = s.spawn(|| re.find("xabab").map(|m| m.range()));
        let b = s.spawn(|| re.find("zz").map(|m| m.range()));
        assert_eq!(a.join().unwrap(), Some(0..0));
        assert_eq!(b.join().unwrap(), Some(0..2));
    });
}
