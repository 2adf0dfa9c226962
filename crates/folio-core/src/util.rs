/// Parses the leading decimal number of `text`, the way `parseFloat` reads
/// CSS values such as `"18px"` or `" 0.75 "`.
///
/// Returns `None` when no numeric prefix exists or the result is not finite.
pub fn parse_leading_f64(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    while end < bytes.len() {
        match bytes[end] {
            b'+' | b'-' if end == 0 => {}
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot && !seen_exp => seen_dot = true,
            b'e' | b'E' if seen_digit && !seen_exp => {
                // Only consume the exponent when digits follow it.
                let rest = &bytes[end + 1..];
                let skip = usize::from(matches!(rest.first(), Some(b'+' | b'-')));
                if !rest.get(skip).is_some_and(u8::is_ascii_digit) {
                    break;
                }
                seen_exp = true;
                end += skip;
            }
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return None;
    }
    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Like [`parse_leading_f64`], but treats zero and unparsable input as absent,
/// mirroring `parseFloat(x) || fallback`.
pub fn parse_nonzero_or(text: Option<&str>, fallback: f64) -> f64 {
    text.and_then(parse_leading_f64)
        .filter(|v| *v != 0.0)
        .unwrap_or(fallback)
}
