//! Picking a legible foreground color.

use crate::termco::Rgb;

/// The weighted luminance above which a background counts as light.
const LIGHT_THRESHOLD: i64 = 12_000;

/// Compute the weighted luminance `30*R + 59*G + 11*B`.
///
/// The weights approximate the relative contribution of each primary to
/// perceived brightness and sum to 100, so the result for in-gamut triples
/// falls into `0..=25_500`.
fn weighted_luminance(rgb: &Rgb) -> i64 {
    let [r, g, b] = *rgb.as_ref();
    30 * r as i64 + 59 * g as i64 + 11 * b as i64
}

/// Pick a legible foreground color for the given background color.
///
/// This function returns black for backgrounds whose weighted luminance
/// exceeds 12,000 and white otherwise. Hence a luminance of exactly 12,000
/// still gets a white foreground.
///
/// ```
/// # use csscolor::calc_fg;
/// # use csscolor::termco::Rgb;
/// assert_eq!(calc_fg(Rgb::new(255, 0, 0)), Rgb::WHITE);
/// assert_eq!(calc_fg(Rgb::new(255, 255, 0)), Rgb::BLACK);
/// ```
pub fn calc_fg(rgb: Rgb) -> Rgb {
    if LIGHT_THRESHOLD < weighted_luminance(&rgb) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

#[cfg(test)]
mod test {
    use super::{calc_fg, weighted_luminance};
    use crate::termco::Rgb;

    #[test]
    fn test_calc_fg() {
        assert_eq!(calc_fg(Rgb::BLACK), Rgb::WHITE);
        assert_eq!(calc_fg(Rgb::WHITE), Rgb::BLACK);

        // 30 * 400 = 12,000 exactly, which is not light yet.
        let boundary = Rgb::new(400, 0, 0);
        assert_eq!(weighted_luminance(&boundary), 12_000);
        assert_eq!(calc_fg(boundary), Rgb::WHITE);
        assert_eq!(calc_fg(Rgb::new(401, 0, 0)), Rgb::BLACK);

        // 59 * 204 = 12,036 and 59 * 203 = 11,977.
        assert_eq!(calc_fg(Rgb::new(0, 204, 0)), Rgb::BLACK);
        assert_eq!(calc_fg(Rgb::new(0, 203, 0)), Rgb::WHITE);

        assert_eq!(calc_fg(Rgb::new(-1000, -1000, -1000)), Rgb::WHITE);
        assert_eq!(calc_fg(Rgb::new(i32::MAX, i32::MAX, i32::MAX)), Rgb::BLACK);
    }
}
