//! Terminal color representations.
//!
//! This module offers [`Rgb`] as the triple that flows through all color math
//! as well as [`AnsiColor`], [`EmbeddedRgb`], and [`GrayGradient`] for the
//! three segments of the fixed terminal palette. Taken together, the latter
//! three are wrapped by [`PaletteColor`], which converts from and to palette
//! indexes `0..=253`.
//!
//! The palette deliberately stops at index 253. Its color cube claims index
//! 232, which wraps around to the cube's origin, and its gray ramp covers
//! indexes 233 through 253 only.

use crate::error::OutOfBoundsError;

// ====================================================================================================================
// Rgb
// ====================================================================================================================

/// An RGB triple.
///
/// Coordinates are conceptually in `0..=255` but are stored as `i32`, since
/// percentage triples may well produce values outside that range. Conversions
/// that produce final output, such as [`Rgb as
/// Display`](struct.Rgb.html#impl-Display-for-Rgb), clamp each coordinate.
///
/// ```
/// # use csscolor::termco::Rgb;
/// let coral = Rgb::new(0xff, 0x7f, 0x50);
/// assert_eq!(coral.as_ref(), &[255, 127, 80]);
/// assert_eq!(coral[2], 80);
/// assert_eq!(format!("{}", coral), "#FF7F50");
///
/// let overexposed = Rgb::new(300, -10, 128);
/// assert_eq!(format!("{}", overexposed), "#FF0080");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([i32; 3]);

impl Rgb {
    /// Black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// White.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a new RGB triple from its coordinates.
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self([r, g, b])
    }

    /// Get the coordinates clamped to `0..=255`.
    pub fn clamped(&self) -> [u8; 3] {
        fn clamp(value: i32) -> u8 {
            // The clamp guarantees that the cast is lossless.
            value.clamp(0, 255) as u8
        }

        let [r, g, b] = self.0;
        [clamp(r), clamp(g), clamp(b)]
    }

    /// Calculate the squared Euclidian distance between the two triples.
    ///
    /// The computation uses 128-bit integers and hence cannot overflow, even
    /// for wildly out-of-range coordinates.
    pub fn squared_distance(&self, other: &Rgb) -> u128 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| {
                let delta = (*a as i64 - *b as i64).unsigned_abs() as u128;
                delta * delta
            })
            .sum()
    }
}

impl AsRef<[i32; 3]> for Rgb {
    fn as_ref(&self) -> &[i32; 3] {
        &self.0
    }
}

impl core::ops::Index<usize> for Rgb {
    type Output = i32;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[i32; 3]> for Rgb {
    fn from(value: [i32; 3]) -> Self {
        Self(value)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        let [r, g, b] = value;
        Self::new(r.into(), g.into(), b.into())
    }
}

impl From<(i32, i32, i32)> for Rgb {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl core::fmt::Display for Rgb {
    /// Format this triple in uppercase hashed hexadecimal notation after
    /// clamping each coordinate.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [r, g, b] = self.clamped();
        f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", r, g, b))
    }
}

// ====================================================================================================================
// Ansi Color
// ====================================================================================================================

/// The 16 extended ANSI colors.
///
/// Unlike themed terminals, this crate assumes fixed, xterm-like values for
/// the ANSI colors, which are available through [`Rgb as
/// From<AnsiColor>`](struct.Rgb.html#impl-From%3CAnsiColor%3E-for-Rgb).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// The RGB values of the ANSI colors, in index order.
const ANSI_VALUES: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00], // Black
    [0xCD, 0x00, 0x00], // Red
    [0x00, 0xCD, 0x00], // Green
    [0xCD, 0xCD, 0x00], // Yellow
    [0x00, 0x00, 0xEE], // Blue
    [0xCD, 0x00, 0xCD], // Magenta
    [0x00, 0xCD, 0xCD], // Cyan
    [0xE5, 0xE5, 0xE5], // White
    [0x7F, 0x7F, 0x7F], // Bright Black
    [0xFF, 0x00, 0x00], // Bright Red
    [0x00, 0xFF, 0x00], // Bright Green
    [0xFF, 0xFF, 0x00], // Bright Yellow
    [0x5C, 0x5C, 0xFF], // Bright Blue
    [0xFF, 0x00, 0xFF], // Bright Magenta
    [0x00, 0xFF, 0xFF], // Bright Cyan
    [0xFF, 0xFF, 0xFF], // Bright White
];

impl AnsiColor {
    const ALL: [AnsiColor; 16] = [
        AnsiColor::Black,
        AnsiColor::Red,
        AnsiColor::Green,
        AnsiColor::Yellow,
        AnsiColor::Blue,
        AnsiColor::Magenta,
        AnsiColor::Cyan,
        AnsiColor::White,
        AnsiColor::BrightBlack,
        AnsiColor::BrightRed,
        AnsiColor::BrightGreen,
        AnsiColor::BrightYellow,
        AnsiColor::BrightBlue,
        AnsiColor::BrightMagenta,
        AnsiColor::BrightCyan,
        AnsiColor::BrightWhite,
    ];

    /// Get an iterator over all ANSI colors in index order.
    pub fn all() -> impl Iterator<Item = AnsiColor> {
        Self::ALL.into_iter()
    }

    /// Determine whether this ANSI color is bright.
    pub fn is_bright(&self) -> bool {
        8 <= *self as u8
    }
}

impl TryFrom<u8> for AnsiColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let ansi = match value {
            0 => AnsiColor::Black,
            1 => AnsiColor::Red,
            2 => AnsiColor::Green,
            3 => AnsiColor::Yellow,
            4 => AnsiColor::Blue,
            5 => AnsiColor::Magenta,
            6 => AnsiColor::Cyan,
            7 => AnsiColor::White,
            8 => AnsiColor::BrightBlack,
            9 => AnsiColor::BrightRed,
            10 => AnsiColor::BrightGreen,
            11 => AnsiColor::BrightYellow,
            12 => AnsiColor::BrightBlue,
            13 => AnsiColor::BrightMagenta,
            14 => AnsiColor::BrightCyan,
            15 => AnsiColor::BrightWhite,
            _ => return Err(OutOfBoundsError::new(value, 0..=15)),
        };

        Ok(ansi)
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> u8 {
        value as u8
    }
}

impl From<AnsiColor> for Rgb {
    fn from(value: AnsiColor) -> Self {
        Rgb::from(ANSI_VALUES[value as usize])
    }
}

// ====================================================================================================================
// The Embedded 6x6x6 RGB Cube
// ====================================================================================================================

/// The intensities of the color cube's six levels.
const CUBE_RAMP: [u8; 6] = [0x00, 0x5F, 0x87, 0xAF, 0xD7, 0xFF];

/// The 6x6x6 RGB cube embedded in the palette.
///
/// The cube spans indexes `16..=232`, i.e., one index more than the cube's
/// 216 colors. The extra index 232 wraps around and has the same coordinates
/// as index 16.
///
/// ```
/// # use csscolor::termco::{EmbeddedRgb, Rgb};
/// # use csscolor::error::OutOfBoundsError;
/// let orange = EmbeddedRgb::new(5, 2, 0)?;
/// let orange_too = EmbeddedRgb::try_from(208)?;
/// assert_eq!(orange, orange_too);
/// assert_eq!(orange.coordinates(), [5, 2, 0]);
/// assert_eq!(Rgb::from(orange), Rgb::new(0xff, 0x87, 0x00));
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmbeddedRgb(u8);

impl EmbeddedRgb {
    /// Create a new embedded RGB value from its coordinates `0..=5`.
    pub fn new(r: u8, g: u8, b: u8) -> Result<Self, OutOfBoundsError> {
        if 6 <= r {
            Err(OutOfBoundsError::new(r, 0..=5))
        } else if 6 <= g {
            Err(OutOfBoundsError::new(g, 0..=5))
        } else if 6 <= b {
            Err(OutOfBoundsError::new(b, 0..=5))
        } else {
            Ok(Self(16 + 36 * r + 6 * g + b))
        }
    }

    /// Get the cube coordinates, each in `0..=5`.
    pub fn coordinates(&self) -> [u8; 3] {
        let offset = self.0 - 16;
        [(offset / 36) % 6, (offset / 6) % 6, offset % 6]
    }
}

impl TryFrom<u8> for EmbeddedRgb {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (16..=232).contains(&value) {
            Ok(Self(value))
        } else {
            Err(OutOfBoundsError::new(value, 16..=232))
        }
    }
}

impl From<EmbeddedRgb> for u8 {
    fn from(value: EmbeddedRgb) -> u8 {
        value.0
    }
}

impl From<EmbeddedRgb> for Rgb {
    fn from(value: EmbeddedRgb) -> Self {
        let [r, g, b] = value.coordinates();
        Rgb::from([
            CUBE_RAMP[r as usize],
            CUBE_RAMP[g as usize],
            CUBE_RAMP[b as usize],
        ])
    }
}

// ====================================================================================================================
// Gray Gradient
// ====================================================================================================================

/// The 21-step gray gradient embedded in the palette.
///
/// The gradient spans indexes `233..=253` with levels `0..=20`. Each
/// coordinate of the corresponding gray is `8 + (index - 232) * 10`, i.e.,
/// the gradient runs from 18 to 218.
///
/// ```
/// # use csscolor::termco::{GrayGradient, Rgb};
/// # use csscolor::error::OutOfBoundsError;
/// let gray = GrayGradient::try_from(243)?;
/// assert_eq!(gray.level(), 10);
/// assert_eq!(Rgb::from(gray), Rgb::new(118, 118, 118));
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GrayGradient(u8);

impl GrayGradient {
    /// Instantiate a new gray gradient from its level `0..=20`.
    pub fn new(value: u8) -> Result<Self, OutOfBoundsError> {
        if value <= 20 {
            Ok(Self(value))
        } else {
            Err(OutOfBoundsError::new(value, 0..=20))
        }
    }

    /// Access the gray level `0..=20`.
    pub const fn level(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for GrayGradient {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (233..=253).contains(&value) {
            Self::new(value - 233)
        } else {
            Err(OutOfBoundsError::new(value, 233..=253))
        }
    }
}

impl From<GrayGradient> for u8 {
    fn from(value: GrayGradient) -> u8 {
        233 + value.0
    }
}

impl From<GrayGradient> for Rgb {
    fn from(value: GrayGradient) -> Rgb {
        let level = 18 + 10 * value.level() as i32;
        Rgb::new(level, level, level)
    }
}

// ====================================================================================================================
// Palette Color
// ====================================================================================================================

/// A palette color wrapping an [`AnsiColor`], [`EmbeddedRgb`], or
/// [`GrayGradient`].
///
/// Conversion from `u8` is fallible, since the palette ends at index 253.
///
/// ```
/// # use csscolor::termco::{PaletteColor, Rgb};
/// # use csscolor::error::OutOfBoundsError;
/// let color = PaletteColor::try_from(196)?;
/// assert_eq!(Rgb::from(color), Rgb::new(255, 0, 0));
/// assert_eq!(u8::from(color), 196);
///
/// assert!(PaletteColor::try_from(254).is_err());
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Ansi(AnsiColor),
    Embedded(EmbeddedRgb),
    Gray(GrayGradient),
}

impl PaletteColor {
    /// The number of palette colors.
    pub const COUNT: usize = 254;

    /// The largest palette index.
    pub const MAX_INDEX: u8 = 253;

    /// Get an iterator over all palette colors in index order.
    ///
    /// The iterator yields exactly [`PaletteColor::COUNT`] colors, with the
    /// n-th color having index n.
    pub fn all() -> impl Iterator<Item = PaletteColor> {
        AnsiColor::all()
            .map(Self::Ansi)
            .chain((16..=232).map(|index| Self::Embedded(EmbeddedRgb(index))))
            .chain((0..=20).map(|level| Self::Gray(GrayGradient(level))))
    }
}

impl From<AnsiColor> for PaletteColor {
    fn from(value: AnsiColor) -> Self {
        Self::Ansi(value)
    }
}

impl From<EmbeddedRgb> for PaletteColor {
    fn from(value: EmbeddedRgb) -> Self {
        Self::Embedded(value)
    }
}

impl From<GrayGradient> for PaletteColor {
    fn from(value: GrayGradient) -> Self {
        Self::Gray(value)
    }
}

impl TryFrom<u8> for PaletteColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0..=15 => AnsiColor::try_from(value).map(Self::Ansi),
            16..=232 => EmbeddedRgb::try_from(value).map(Self::Embedded),
            233..=Self::MAX_INDEX => GrayGradient::try_from(value).map(Self::Gray),
            _ => Err(OutOfBoundsError::new(
                value,
                0..=usize::from(Self::MAX_INDEX),
            )),
        }
    }
}

impl From<PaletteColor> for u8 {
    fn from(value: PaletteColor) -> Self {
        match value {
            PaletteColor::Ansi(c) => c.into(),
            PaletteColor::Embedded(c) => c.into(),
            PaletteColor::Gray(c) => c.into(),
        }
    }
}

impl From<PaletteColor> for Rgb {
    fn from(value: PaletteColor) -> Self {
        match value {
            PaletteColor::Ansi(c) => c.into(),
            PaletteColor::Embedded(c) => c.into(),
            PaletteColor::Gray(c) => c.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{AnsiColor, EmbeddedRgb, GrayGradient, OutOfBoundsError, PaletteColor, Rgb};

    #[test]
    fn test_conversion() -> Result<(), OutOfBoundsError> {
        let magenta = AnsiColor::Magenta;
        assert_eq!(magenta as u8, 5);
        assert_eq!(Rgb::from(magenta), Rgb::new(0xcd, 0, 0xcd));
        assert!(!magenta.is_bright(), "magenta should not be bright");
        assert!(AnsiColor::BrightBlue.is_bright(), "bright blue should be bright");
        assert_eq!(Rgb::from(AnsiColor::BrightBlue), Rgb::new(0x5c, 0x5c, 0xff));

        let green = EmbeddedRgb::new(0, 4, 0)?;
        assert_eq!(green.coordinates(), [0, 4, 0]);
        assert_eq!(u8::from(green), 40);
        assert_eq!(Rgb::from(green), Rgb::new(0, 215, 0));

        let gray = GrayGradient::new(12)?;
        assert_eq!(gray.level(), 12);
        assert_eq!(u8::from(gray), 245);
        assert_eq!(Rgb::from(gray), Rgb::new(138, 138, 138));

        assert_eq!(PaletteColor::try_from(5)?, PaletteColor::Ansi(magenta));
        assert_eq!(PaletteColor::try_from(40)?, PaletteColor::Embedded(green));
        assert_eq!(PaletteColor::try_from(245)?, PaletteColor::Gray(gray));

        Ok(())
    }

    #[test]
    fn test_limits() -> Result<(), OutOfBoundsError> {
        let black_ansi = AnsiColor::try_from(0)?;
        assert_eq!(black_ansi, AnsiColor::Black);
        let white_ansi = AnsiColor::try_from(15)?;
        assert_eq!(white_ansi, AnsiColor::BrightWhite);
        assert_eq!(u8::from(white_ansi), 15);
        assert!(AnsiColor::try_from(16).is_err(), "16 is no ANSI color");

        let black_rgb = EmbeddedRgb::try_from(16)?;
        assert_eq!(black_rgb.coordinates(), [0, 0, 0]);
        assert_eq!(Rgb::from(black_rgb), Rgb::BLACK);
        let white_rgb = EmbeddedRgb::try_from(231)?;
        assert_eq!(white_rgb.coordinates(), [5, 5, 5]);
        assert_eq!(Rgb::from(white_rgb), Rgb::WHITE);

        // Index 232 wraps around to the cube's origin.
        let wrapped = EmbeddedRgb::try_from(232)?;
        assert_eq!(wrapped.coordinates(), [0, 0, 0]);
        assert_eq!(u8::from(wrapped), 232);
        assert!(EmbeddedRgb::try_from(233).is_err(), "233 is outside the cube");
        assert!(EmbeddedRgb::new(6, 0, 0).is_err(), "6 is no cube coordinate");

        let dark_gray = GrayGradient::try_from(233)?;
        assert_eq!(dark_gray.level(), 0);
        assert_eq!(Rgb::from(dark_gray), Rgb::new(18, 18, 18));
        let light_gray = GrayGradient::try_from(253)?;
        assert_eq!(light_gray.level(), 20);
        assert_eq!(Rgb::from(light_gray), Rgb::new(218, 218, 218));
        assert!(GrayGradient::try_from(232).is_err(), "232 is outside the gradient");
        assert!(GrayGradient::new(21).is_err(), "21 is no gray level");

        assert_eq!(
            PaletteColor::try_from(254),
            Err(OutOfBoundsError::new(254_u8, 0..=253))
        );
        assert!(PaletteColor::try_from(255).is_err(), "255 is outside the palette");

        Ok(())
    }

    #[test]
    fn test_all() {
        let mut count = 0;
        for (color, index) in PaletteColor::all().zip(0_u8..) {
            assert_eq!(u8::from(color), index);
            assert_eq!(PaletteColor::try_from(index), Ok(color));
            count += 1;
        }
        assert_eq!(count, PaletteColor::COUNT);
        assert_eq!(AnsiColor::all().count(), 16);
    }

    #[test]
    fn test_rgb() {
        let wild = Rgb::new(300, -10, 128);
        assert_eq!(wild.clamped(), [255, 0, 128]);
        assert_eq!(wild.to_string(), "#FF0080");
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "#010203");

        assert_eq!(Rgb::BLACK.squared_distance(&Rgb::WHITE), 3 * 255 * 255);
        assert_eq!(Rgb::new(1, 2, 3).squared_distance(&Rgb::new(4, 6, 3)), 25);
        assert_eq!(
            Rgb::new(i32::MAX, 0, 0).squared_distance(&Rgb::new(i32::MIN, 0, 0)),
            (u32::MAX as u128) * (u32::MAX as u128)
        );
    }
}
