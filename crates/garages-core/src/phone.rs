//! Display formatting for Israeli-style phone numbers.

/// Formats a raw phone value for display.
///
/// Only ASCII digits are kept. A 10-digit number with a leading `0` becomes
/// `DDD-DDD-DDDD`; a 9-digit number is assumed to have lost its leading `0`
/// and becomes `0DD-DDD-DDDD`. Anything else is split into groups of three
/// from the left, the trailing partial group left unseparated.
///
/// Total over all inputs and idempotent.
#[must_use]
pub fn format_phone(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }

    if digits.len() == 10 && digits.starts_with('0') {
        return format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]);
    }

    if digits.len() == 9 {
        return format!("0{}-{}-{}", &digits[..2], &digits[2..5], &digits[5..]);
    }

    group_by_three(&digits)
}

fn group_by_three(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        out.push(c);
        if (i + 1) % 3 == 0 && i + 1 < len {
            out.push('-');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_absent_is_empty() {
        assert_eq!(format_phone(None), "");
        assert_eq!(format_phone(Some("")), "");
    }

    #[test]
    fn no_digits_is_empty() {
        assert_eq!(format_phone(Some("call us")), "");
        assert_eq!(format_phone(Some("--- ()")), "");
    }

    #[test]
    fn ten_digits_with_leading_zero() {
        assert_eq!(format_phone(Some("0501234567")), "050-123-4567");
        assert_eq!(format_phone(Some("050-123-4567")), "050-123-4567");
        assert_eq!(format_phone(Some("(050) 123 4567")), "050-123-4567");
    }

    #[test]
    fn nine_digits_gets_leading_zero() {
        assert_eq!(format_phone(Some("501234567")), "050-123-4567");
        assert_eq!(format_phone(Some("3-6123-4567")), "036-123-4567");
    }

    #[test]
    fn ten_digits_without_leading_zero_groups_by_three() {
        assert_eq!(format_phone(Some("9721234567")), "972-123-456-7");
    }

    #[test]
    fn other_lengths_group_by_three() {
        assert_eq!(format_phone(Some("1")), "1");
        assert_eq!(format_phone(Some("123")), "123");
        assert_eq!(format_phone(Some("123456")), "123-456");
        assert_eq!(format_phone(Some("1234567")), "123-456-7");
        assert_eq!(format_phone(Some("+972-50-123-4567")), "972-501-234-567");
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(format_phone(Some("١٢٣")), "");
    }

    #[test]
    fn formatting_is_idempotent() {
        let inputs = [
            "",
            "abc",
            "0501234567",
            "501234567",
            "1234567",
            "9721234567",
            "+972 (3) 612-3456",
            "12345678901234567890",
        ];
        for input in inputs {
            let once = format_phone(Some(input));
            let twice = format_phone(Some(&once));
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
