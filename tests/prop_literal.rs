// prop_literal.rs - Property tests for literal patterns and simple classes.

use proptest::prelude::*;

use ferrobre::bre::*;
use ferrobre::regcomp::bre_new;
use ferrobre::regexec::bre_search;

const PROP_CASES: u32 = 256;

/// Backslash-escape every byte that can be special in a pattern.
fn escape(needle: &[u8]) -> Vec<u8> {
    let mut pat = Vec::with_capacity(needle.len() * 2);
    for &c in needle {
        if matches!(c, b'.' | b'*' | b'[' | b'\\' | b'^' | b'$') {
            pat.push(b'\\');
        }
        pat.push(c);
    }
    pat
}

fn alphabet() -> impl Strategy<Value = u8> {
    prop::sample::select(b"ab.*[\\^$\n".to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROP_CASES))]

    #[test]
    fn literal_matches_first_occurrence(
        needle in prop::collection::vec(alphabet(), 1..6),
        subject in prop::collection::vec(alphabet(), 0..40),
    ) {
        let prog = bre_new(&escape(&needle)).unwrap();
        let expected = subject
            .windows(needle.len())
            .position(|w| w == needle.as_slice())
            .map(|at| at..at + needle.len());
        let got = bre_search(&prog, &subject, 0, &SearchConfig::default())
            .into_result()
            .map(|m| m.range());
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn compile_is_deterministic(needle in prop::collection::vec(alphabet(), 1..20)) {
        let pat = escape(&needle);
        prop_assert_eq!(bre_new(&pat).unwrap(), bre_new(&pat).unwrap());
    }

    #[test]
    fn star_always_matches_at_start(subject in prop::collection::vec(any::<u8>(), 0..40)) {
        let prog = bre_new(b"a*").unwrap();
        let m = bre_search(&prog, &subject, 0, &SearchConfig::default()).into_result();
        let run = subject.iter().take_while(|&&c| c == b'a').count();
        prop_assert_eq!(m.map(|m| m.range()), Some(0..run));
    }

    #[test]
    fn range_class_membership(lo in b'a'..=b'z', hi in b'a'..=b'z', c in any::<u8>()) {
        let pat = [b'[', lo, b'-', hi, b']'];
        let prog = bre_new(&pat).unwrap();
        let expected = if lo <= hi { (lo..=hi).contains(&c) } else { c == lo || c == hi };
        prop_assert_eq!(
            bre_search(&prog, &[c], 0, &SearchConfig::default()).is_found(),
            expected
        );
    }
}
