//! Repairs the non-standard JSON some backend responses contain.
//!
//! Python-based backends serialize missing floats as bare `NaN`, `Infinity` or
//! `-Infinity`, which is not valid JSON. Those tokens are rewritten to `null` before
//! parsing so a single bad value does not fail the whole response.

use std::borrow::Cow;

// Longer tokens first so "-Infinity" is not matched as "-" + "Infinity".
const NON_FINITE_TOKENS: [&str; 4] = ["-Infinity", "+Infinity", "Infinity", "NaN"];

/// Replaces bare non-finite number tokens with `null`, leaving string literals untouched.
///
/// Returns the input unchanged (borrowed) when there is nothing to repair.
///
/// # Examples
///
/// ```
/// use airquality::repair_non_finite;
///
/// let repaired = repair_non_finite(r#"{"aqi": NaN, "note": "NaN stays", "pm10": -Infinity}"#);
/// assert_eq!(repaired, r#"{"aqi": null, "note": "NaN stays", "pm10": null}"#);
/// ```
pub fn repair_non_finite(body: &str) -> Cow<'_, str> {
    if !NON_FINITE_TOKENS.iter().any(|token| body.contains(token)) {
        return Cow::Borrowed(body);
    }

    let bytes = body.as_bytes();
    let mut repaired = String::with_capacity(body.len());
    let mut copied_up_to = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if byte == b'"' {
            in_string = true;
            i += 1;
            continue;
        }
        if let Some(token) = NON_FINITE_TOKENS
            .iter()
            .find(|token| bytes[i..].starts_with(token.as_bytes()))
        {
            repaired.push_str(&body[copied_up_to..i]);
            repaired.push_str("null");
            i += token.len();
            copied_up_to = i;
            continue;
        }
        i += 1;
    }

    repaired.push_str(&body[copied_up_to..]);
    Cow::Owned(repaired)
}
