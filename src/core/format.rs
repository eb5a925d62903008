//! Display formatting for operands.
//!
//! Formatting is purely cosmetic: it renders a stored digit string for
//! display and never feeds back into the state.

/// Render an operand with grouped integer digits.
///
/// Absent operand renders as nothing. Otherwise the text before the first
/// `.` gets comma thousand-separators, and any decimal part is appended
/// verbatim after a `.` (a trailing empty decimal part is preserved, so
/// `"12."` renders as `"12."`).
///
/// Integer text that is not a plain signed digit run (evaluator outputs
/// like `""`, `inf` or `NaN`) passes through untouched.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    match operand.split_once('.') {
        Some((integer, decimal)) => Some(format!("{}.{}", group_integer(integer), decimal)),
        None => Some(group_integer(operand)),
    }
}

/// Insert a comma before every group of three digits, counting from the
/// right. Leaves anything other than an optionally-signed digit run alone.
fn group_integer(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }

    let mut grouped = String::with_capacity(integer.len() + digits.len() / 3);
    grouped.push_str(sign);
    let lead = digits.len() % 3;
    let lead = if lead == 0 { 3 } else { lead };
    grouped.push_str(&digits[..lead]);
    for chunk in digits.as_bytes()[lead..].chunks(3) {
        grouped.push(',');
        // Chunks of an ASCII digit run are valid UTF-8.
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_operand_formats_to_nothing() {
        assert_eq!(format_operand(None), None);
    }

    #[test]
    fn integer_operands_are_grouped() {
        assert_eq!(format_operand(Some("0")).unwrap(), "0");
        assert_eq!(format_operand(Some("123")).unwrap(), "123");
        assert_eq!(format_operand(Some("1234")).unwrap(), "1,234");
        assert_eq!(format_operand(Some("1234567")).unwrap(), "1,234,567");
        assert_eq!(format_operand(Some("123456")).unwrap(), "123,456");
    }

    #[test]
    fn decimal_part_is_preserved_verbatim() {
        assert_eq!(format_operand(Some("1234.5")).unwrap(), "1,234.5");
        assert_eq!(format_operand(Some("0.500")).unwrap(), "0.500");
        assert_eq!(format_operand(Some("1234.")).unwrap(), "1,234.");
    }

    #[test]
    fn decimal_part_is_never_grouped() {
        assert_eq!(
            format_operand(Some("1234.56789")).unwrap(),
            "1,234.56789"
        );
    }

    #[test]
    fn negative_operands_keep_their_sign() {
        assert_eq!(format_operand(Some("-5")).unwrap(), "-5");
        assert_eq!(format_operand(Some("-1234")).unwrap(), "-1,234");
        assert_eq!(format_operand(Some("-1234.5")).unwrap(), "-1,234.5");
    }

    #[test]
    fn evaluator_outputs_pass_through() {
        assert_eq!(format_operand(Some("")).unwrap(), "");
        assert_eq!(format_operand(Some("inf")).unwrap(), "inf");
        assert_eq!(format_operand(Some("-inf")).unwrap(), "-inf");
        assert_eq!(format_operand(Some("NaN")).unwrap(), "NaN");
    }

    #[test]
    fn bare_point_keeps_its_shape() {
        assert_eq!(format_operand(Some(".")).unwrap(), ".");
        assert_eq!(format_operand(Some(".5")).unwrap(), ".5");
    }
}
