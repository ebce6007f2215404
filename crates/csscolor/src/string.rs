//! Parsing and formatting of textual color formats.
//!
//! Hashed hexadecimal colors are parsed leniently: users write CSS by hand and
//! a malformed channel must not get in the way of highlighting the rest of the
//! buffer, so it becomes 0. Percentage triples, in contrast, are validated.

use core::num::{IntErrorKind, ParseIntError};

use crate::error::ColorFormatError;
use crate::termco::Rgb;

/// Parse a color in hashed hexadecimal format `#RRGGBB`.
///
/// This function interprets the characters at positions 1–2, 3–4, and 5–6 as
/// hexadecimal numbers, ignoring whatever character comes first. Whitespace
/// around a channel's digits is ignored. A channel that does not parse,
/// including one without any characters, becomes 0. A channel with a single
/// remaining digit has that digit's value.
///
/// ```
/// # use csscolor::code_to_rgb;
/// # use csscolor::termco::Rgb;
/// assert_eq!(code_to_rgb("#FF0000"), Rgb::new(255, 0, 0));
/// assert_eq!(code_to_rgb("#ZZ0080"), Rgb::new(0, 0, 128));
/// assert_eq!(code_to_rgb("#"), Rgb::new(0, 0, 0));
/// ```
pub fn code_to_rgb(code: &str) -> Rgb {
    fn parse_coordinate(code: &str, index: usize) -> i32 {
        let digits: String = code.chars().skip(1 + 2 * index).take(2).collect();
        i32::from_str_radix(digits.trim(), 16).unwrap_or(0)
    }

    Rgb::new(
        parse_coordinate(code, 0),
        parse_coordinate(code, 1),
        parse_coordinate(code, 2),
    )
}

/// Parse a single component of a percentage triple.
///
/// A component ending in `%` is an integer percentage of 255, truncated
/// towards zero. Any other component is a plain integer. Neither is clamped,
/// though integers beyond the range of `i32` saturate. Since color codes
/// clamp coordinates to `0..=255`, saturation does not change the code.
fn parse_percentage(s: &str) -> Result<i32, ColorFormatError> {
    if s.is_empty() {
        return Err(ColorFormatError::MissingCoordinate);
    }

    fn parse_integer(t: &str) -> Result<i32, ColorFormatError> {
        t.trim().parse().or_else(|e: ParseIntError| match *e.kind() {
            IntErrorKind::PosOverflow => Ok(i32::MAX),
            IntErrorKind::NegOverflow => Ok(i32::MIN),
            _ => Err(ColorFormatError::MalformedInteger),
        })
    }

    s.strip_suffix('%').map_or_else(
        || parse_integer(s),
        |percentage| parse_integer(percentage).map(|n| (n as f64 / 100.0 * 255.0).trunc() as i32),
    )
}

/// Parse a percentage triple.
///
/// Each component is either an integer or an integer percentage, which is
/// scaled to 255 and truncated towards zero. The coordinates of the result
/// are not clamped.
///
/// ```
/// # use csscolor::percentage_to_rgb;
/// # use csscolor::termco::Rgb;
/// # use csscolor::error::ColorFormatError;
/// assert_eq!(percentage_to_rgb(("50%", "50%", "50%"))?, Rgb::new(127, 127, 127));
/// assert_eq!(percentage_to_rgb(("300", "100%", "0"))?, Rgb::new(300, 255, 0));
/// assert!(percentage_to_rgb(("50%", "half", "0")).is_err());
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn percentage_to_rgb(components: (&str, &str, &str)) -> Result<Rgb, ColorFormatError> {
    Ok(Rgb::new(
        parse_percentage(components.0)?,
        parse_percentage(components.1)?,
        parse_percentage(components.2)?,
    ))
}

/// Format the RGB triple in uppercase hashed hexadecimal format.
///
/// Each coordinate is clamped to `0..=255` first.
///
/// ```
/// # use csscolor::rgb_to_code;
/// # use csscolor::termco::Rgb;
/// assert_eq!(rgb_to_code(Rgb::new(300, -10, 128)), "#FF0080");
/// ```
pub fn rgb_to_code(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Convert a percentage triple straight to a color code.
///
/// This is the entry point for the host's expression evaluator, which expects
/// a color code as return value.
pub fn percentage_to_code(r: &str, g: &str, b: &str) -> Result<String, ColorFormatError> {
    percentage_to_rgb((r, g, b)).map(rgb_to_code)
}

#[cfg(test)]
mod test {
    use super::{code_to_rgb, percentage_to_code, percentage_to_rgb, rgb_to_code, ColorFormatError};
    use crate::termco::Rgb;

    #[test]
    fn test_code_to_rgb() {
        assert_eq!(code_to_rgb("#FF0000"), Rgb::new(255, 0, 0));
        assert_eq!(code_to_rgb("#00ff7f"), Rgb::new(0, 255, 127));
        assert_eq!(code_to_rgb("#ZZ0000"), Rgb::new(0, 0, 0));
        assert_eq!(code_to_rgb("#12g456"), Rgb::new(0x12, 0, 0x56));

        // Short input must not panic and fills in 0.
        assert_eq!(code_to_rgb(""), Rgb::new(0, 0, 0));
        assert_eq!(code_to_rgb("#12"), Rgb::new(0x12, 0, 0));
        assert_eq!(code_to_rgb("#1234F"), Rgb::new(0x12, 0x34, 0xf));

        // Trailing characters are ignored.
        assert_eq!(code_to_rgb("#102030;"), Rgb::new(0x10, 0x20, 0x30));

        // Whitespace around a channel's digits is ignored.
        assert_eq!(code_to_rgb("#1 f0 f"), Rgb::new(1, 0xf0, 0xf));
        assert_eq!(code_to_rgb("#  0a\t1"), Rgb::new(0, 0x0a, 1));

        // Multi-byte characters are counted as characters, not bytes.
        assert_eq!(code_to_rgb("#💩FF00"), Rgb::new(0, 0xf0, 0));
    }

    #[test]
    fn test_percentage_to_rgb() -> Result<(), ColorFormatError> {
        assert_eq!(percentage_to_rgb(("50%", "50%", "50%"))?, Rgb::new(127, 127, 127));
        assert_eq!(percentage_to_rgb(("100%", "0%", "10%"))?, Rgb::new(255, 0, 25));
        assert_eq!(percentage_to_rgb(("12", "34", "56"))?, Rgb::new(12, 34, 56));
        assert_eq!(percentage_to_rgb(("200%", "-50%", "300"))?, Rgb::new(510, -127, 300));
        assert_eq!(percentage_to_rgb((" 7", "+8", "9 %"))?, Rgb::new(7, 8, 22));

        // Integers beyond i32 saturate.
        assert_eq!(
            percentage_to_rgb(("3000000000", "-3000000000", "99999999999999999999999%"))?,
            Rgb::new(i32::MAX, i32::MIN, i32::MAX)
        );

        assert_eq!(
            percentage_to_rgb(("", "0", "0")),
            Err(ColorFormatError::MissingCoordinate)
        );
        assert_eq!(
            percentage_to_rgb(("0", "1.5%", "0")),
            Err(ColorFormatError::MalformedInteger)
        );
        assert_eq!(
            percentage_to_rgb(("0", "0", "%")),
            Err(ColorFormatError::MalformedInteger)
        );
        assert_eq!(
            percentage_to_rgb(("red", "0", "0")),
            Err(ColorFormatError::MalformedInteger)
        );

        Ok(())
    }

    #[test]
    fn test_rgb_to_code() -> Result<(), ColorFormatError> {
        assert_eq!(rgb_to_code(Rgb::new(300, -10, 128)), "#FF0080");
        assert_eq!(rgb_to_code(Rgb::new(0xab, 0xcd, 0xef)), "#ABCDEF");
        assert_eq!(rgb_to_code(code_to_rgb("#0a0b0c")), "#0A0B0C");

        assert_eq!(percentage_to_code("50%", "100%", "0")?, "#7FFF00");
        assert_eq!(percentage_to_code("200%", "-1", "256")?, "#FF00FF");
        assert_eq!(percentage_to_code("3000000000", "0", "0")?, "#FF0000");
        assert_eq!(percentage_to_code("0", "-3000000000%", "0")?, "#000000");
        assert!(
            percentage_to_code("1", "2", "x").is_err(),
            "blue should not be a valid integer"
        );

        Ok(())
    }
}
