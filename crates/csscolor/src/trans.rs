//! Translation from RGB triples to palette indexes.
//!
//! The [`Palette`] is the fixed table of 254 terminal colors and
//! [`Translator`] finds the palette color closest to an RGB triple,
//! remembering every answer it ever computed.

use std::collections::HashMap;

use log::trace;

use crate::error::OutOfBoundsError;
use crate::termco::{PaletteColor, Rgb};

/// Look up the RGB triple for the palette index.
///
/// Indexes `0..=15` are the ANSI colors, `16..=232` the embedded RGB cube, and
/// `233..=253` the gray gradient. Larger indexes are out of bounds.
///
/// ```
/// # use csscolor::index_to_rgb;
/// # use csscolor::termco::Rgb;
/// # use csscolor::error::OutOfBoundsError;
/// assert_eq!(index_to_rgb(4)?, Rgb::new(0, 0, 0xee));
/// assert_eq!(index_to_rgb(16)?, Rgb::new(0, 0, 0));
/// assert_eq!(index_to_rgb(233)?, Rgb::new(18, 18, 18));
/// assert!(index_to_rgb(254).is_err());
/// # Ok::<(), OutOfBoundsError>(())
/// ```
pub fn index_to_rgb(index: u8) -> Result<Rgb, OutOfBoundsError> {
    PaletteColor::try_from(index).map(Rgb::from)
}

// ====================================================================================================================

/// The fixed table of palette colors.
///
/// The table is built once from [`PaletteColor::all`] and is immutable
/// thereafter.
/// Since the table is fixed, so is the color closest to any RGB triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PaletteColor::COUNT],
}

impl Palette {
    /// Build the palette.
    pub fn new() -> Self {
        let mut colors = [Rgb::default(); PaletteColor::COUNT];
        let mut filled = 0;
        for (slot, color) in colors.iter_mut().zip(PaletteColor::all()) {
            *slot = Rgb::from(color);
            filled += 1;
        }
        debug_assert_eq!(
            filled,
            PaletteColor::COUNT,
            "palette colors should fill the table"
        );

        Self { colors }
    }

    /// Get the RGB triple for the given index.
    pub fn get(&self, index: u8) -> Result<Rgb, OutOfBoundsError> {
        self.colors
            .get(index as usize)
            .copied()
            .ok_or_else(|| OutOfBoundsError::new(index, 0..=usize::from(PaletteColor::MAX_INDEX)))
    }

    /// Find the index of the palette color closest to the given triple.
    ///
    /// This method minimizes the squared Euclidian distance. If several palette
    /// colors are equally close, it returns the lowest index.
    pub fn find_closest(&self, rgb: &Rgb) -> u8 {
        self.colors
            .iter()
            .zip(0_u8..)
            .min_by_key(|&(color, _)| color.squared_distance(rgb))
            .map_or(0, |(_, index)| index)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[Rgb]> for Palette {
    fn as_ref(&self) -> &[Rgb] {
        &self.colors
    }
}

// ====================================================================================================================

/// Statistics for a [`Translator`]'s cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// The number of lookups answered from the cache.
    pub hits: u64,
    /// The number of lookups that searched the palette.
    pub misses: u64,
    /// The number of cached triples.
    pub size: usize,
}

/// A translator from RGB triples to palette indexes.
///
/// Highlight groups are redefined time and again with the same colors. Hence
/// a translator caches the closest index for every triple it has seen, keyed
/// by the exact triple. The cache is unbounded and never invalidated, which
/// is sound because the palette never changes.
///
/// ```
/// # use csscolor::Translator;
/// # use csscolor::termco::Rgb;
/// let mut translator = Translator::new();
/// assert_eq!(translator.rgb_to_index(Rgb::new(0xff, 0x87, 0)), 208);
/// assert_eq!(translator.rgb_to_index(Rgb::new(0xff, 0x87, 0)), 208);
///
/// let stats = translator.stats();
/// assert_eq!((stats.hits, stats.misses), (1, 1));
/// ```
#[derive(Debug, Default)]
pub struct Translator {
    palette: Palette,
    cache: HashMap<Rgb, u8>,
    hits: u64,
    misses: u64,
}

impl Translator {
    /// Create a new translator with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Find the index of the palette color closest to the given triple.
    pub fn rgb_to_index(&mut self, rgb: Rgb) -> u8 {
        if let Some(index) = self.cache.get(&rgb) {
            self.hits += 1;
            trace!("cache hit {:?} -> {}", rgb, index);
            return *index;
        }

        self.misses += 1;
        let index = self.palette.find_closest(&rgb);
        trace!("cache miss {:?} -> {}", rgb, index);
        self.cache.insert(rgb, index);
        index
    }

    /// Get the cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
        }
    }
}
