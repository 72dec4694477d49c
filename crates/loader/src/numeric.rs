/// Convert text to an integer the way C's `atoi` does.
///
/// Leading whitespace is skipped, one optional sign is accepted, then digits are
/// read until the first non-digit. Text with no leading digits reads as 0.
/// Out-of-range values saturate.
pub fn lenient_int(text: &str) -> i64 {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}
