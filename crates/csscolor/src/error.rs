//! Utility module with csscolor's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// The ranges used by this crate include:
///
///   * `0..=15` for index values of [`AnsiColor`](crate::termco::AnsiColor);
///   * `16..=232` for index values of [`EmbeddedRgb`](crate::termco::EmbeddedRgb);
///   * `233..=253` for index values of [`GrayGradient`](crate::termco::GrayGradient);
///   * `0..=253` for the palette as a whole.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: core::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<usize>>(value: V, expected: core::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl core::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color format.
///
/// Hashed hexadecimal colors never fail to parse; a malformed channel simply
/// becomes 0. Percentage triples, however, are validated and this enumeration
/// describes what went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A percentage triple with an empty component. For example, `("", "0",
    /// "0")` is missing the first coordinate.
    MissingCoordinate,

    /// A percentage triple with a component that is neither an integer nor an
    /// integer followed by `%`. For example, `"1.5%"` and `"red"` are both
    /// malformed.
    MalformedInteger,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            MalformedInteger => f.write_str(
                "color format coordinates should be integers or integer percentages but are not",
            ),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{ColorFormatError, OutOfBoundsError};

    #[test]
    fn test_display() {
        let error = OutOfBoundsError::new(254_u8, 0..=253);
        assert_eq!(error.to_string(), "254 does not fit into range 0..=253");

        assert_eq!(
            ColorFormatError::MissingCoordinate.to_string(),
            "color format should have 3 coordinates but is missing one"
        );
    }
}
