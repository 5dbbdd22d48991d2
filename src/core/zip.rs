/// Required number of digits in a Japanese postal code.
pub const ZIP_LEN: usize = 7;

/// Display form breaks after the third digit: `100-0001`.
const HYPHEN_AT: usize = 3;

/// Strip everything but ASCII digits and truncate to [`ZIP_LEN`].
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(ZIP_LEN)
        .collect()
}

/// Clean, then insert the hyphen when there are enough digits to split.
pub fn format_for_display(raw: &str) -> String {
    let digits = clean(raw);
    if digits.len() > HYPHEN_AT {
        format!("{}-{}", &digits[..HYPHEN_AT], &digits[HYPHEN_AT..])
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_non_digits() {
        assert_eq!(clean("100-0001"), "1000001");
        assert_eq!(clean("〒100-0001"), "1000001");
        assert_eq!(clean("abc"), "");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_clean_truncates_to_seven() {
        assert_eq!(clean("123456789"), "1234567");
        assert_eq!(clean("12-34-56-78-90"), "1234567");
    }

    #[test]
    fn test_clean_is_idempotent() {
        for input in ["100-0001", "〒100-0001", "123456789", "", "1-2"] {
            let once = clean(input);
            assert_eq!(clean(&once), once);
            assert!(once.len() <= ZIP_LEN);
            assert!(once.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_format_for_display() {
        assert_eq!(format_for_display("1000001"), "100-0001");
        assert_eq!(format_for_display("1000"), "100-0");
        assert_eq!(format_for_display("100"), "100");
        assert_eq!(format_for_display("1"), "1");
        assert_eq!(format_for_display(""), "");
    }

    #[test]
    fn test_format_round_trips_through_clean() {
        for input in ["1000001", "100-0001", "12", "123456789", "a1b2c3d4"] {
            assert_eq!(clean(&format_for_display(input)), clean(input));
        }
    }
}
