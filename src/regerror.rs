// regerror.rs - Error code to string conversion.
//
// Maps the numeric BREERR_* codes to the classic diagnostics.

use crate::bre::*;

/// Get the message for an error code.
pub fn bre_error_code_to_str(code: i32) -> &'static str {
    match code {
        BREERR_RANGE_ENDPOINT_TOO_LARGE => "range endpoint too large",
        BREERR_BAD_NUMBER => "bad number",
        BREERR_BACKREF_OUT_OF_RANGE => "\\digit out of range",
        BREERR_NO_REMEMBERED_PATTERN => "no remembered search string",
        BREERR_PAREN_IMBALANCE => "\\( \\) imbalance",
        BREERR_TOO_MANY_GROUPS => "too many \\(",
        BREERR_TOO_MANY_NUMBERS => "more than 2 numbers given in \\{ \\}",
        BREERR_BRACE_EXPECTED => "} expected after \\",
        BREERR_FIRST_EXCEEDS_SECOND => "first number exceeds second in \\{ \\}",
        BREERR_BRACKET_IMBALANCE => "[ ] imbalance",
        BREERR_EXPRESSION_OVERFLOW => "regular expression overflow",
        BREERR_RETRY_LIMIT_IN_MATCH_OVER => "retry-limit-in-match over",
        _ => "undefined error code",
    }
}

/// Check if a code belongs to the `\{m,n\}` family.
pub fn bre_is_repeat_range_error(code: i32) -> bool {
    matches!(
        code,
        BREERR_RANGE_ENDPOINT_TOO_LARGE
            | BREERR_BAD_NUMBER
            | BREERR_TOO_MANY_NUMBERS
            | BREERR_BRACE_EXPECTED
            | BREERR_FIRST_EXCEEDS_SECOND
    )
}
