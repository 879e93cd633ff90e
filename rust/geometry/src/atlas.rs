// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Facade atlas descriptors
//!
//! One building's wall texture is a sub-rectangle of a shared atlas plus
//! floor-height metadata. Atlases cannot tile, so UV mapping never repeats
//! the texture; the wall generator scales the sampled region instead.

use rand::seq::SliceRandom;
use rand::Rng;

/// Rectangular atlas region in normalized UV space
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtlasRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl AtlasRect {
    /// Create a new rect from its min corner and size
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn x_min(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn y_min(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }
}

/// Per-building facade texture descriptor
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacadeEntry {
    /// Region of the shared atlas this facade samples
    pub texture_rect: AtlasRect,
    /// World-space height of one generic mid floor
    pub floor_height: f64,
    /// World-space height of the first (street-level) floor
    pub first_floor_height: f64,
    /// World-space height of the top floor band
    pub top_floor_height: f64,
    /// Number of mid floors drawn in the texture's mid section
    pub mid_floor_count: u32,
    /// Number of window columns drawn across the texture
    pub column_count: u32,
    /// Preferred world-space length of one wall section
    pub preferred_edge_section_length: f64,
    /// Fraction of the texture height taken by the top section
    pub top_section_ratio: f64,
    /// Fraction of the texture height taken by the bottom section
    pub bottom_section_ratio: f64,
}

impl FacadeEntry {
    /// Create an entry with typical residential proportions
    pub fn new(texture_rect: AtlasRect) -> Self {
        Self {
            texture_rect,
            floor_height: 3.0,
            first_floor_height: 4.0,
            top_floor_height: 3.0,
            mid_floor_count: 3,
            column_count: 3,
            preferred_edge_section_length: 12.0,
            top_section_ratio: 0.2,
            bottom_section_ratio: 0.2,
        }
    }
}

/// The facade set one atlas offers; one entry is picked per building
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacadeAtlas {
    pub facades: Vec<FacadeEntry>,
}

impl FacadeAtlas {
    /// Create an atlas from its facade entries
    pub fn new(facades: Vec<FacadeEntry>) -> Self {
        Self { facades }
    }

    /// Uniform random pick; `None` for an empty set
    #[inline]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&FacadeEntry> {
        self.facades.choose(rng)
    }

    pub fn len(&self) -> usize {
        self.facades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facades.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rect_accessors() {
        let rect = AtlasRect::new(0.25, 0.5, 0.25, 0.125);
        assert_eq!(rect.x_min(), 0.25);
        assert_eq!(rect.x_max(), 0.5);
        assert_eq!(rect.y_min(), 0.5);
        assert_eq!(rect.y_max(), 0.625);
    }

    #[test]
    fn test_choose_is_deterministic_for_a_seed() {
        let atlas = FacadeAtlas::new(
            (0..8)
                .map(|i| FacadeEntry::new(AtlasRect::new(i as f64 * 0.125, 0.0, 0.125, 1.0)))
                .collect(),
        );

        let picks_a: Vec<f64> = {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            (0..16).map(|_| atlas.choose(&mut rng).unwrap().texture_rect.x).collect()
        };
        let picks_b: Vec<f64> = {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            (0..16).map(|_| atlas.choose(&mut rng).unwrap().texture_rect.x).collect()
        };

        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_choose_empty_set() {
        let atlas = FacadeAtlas::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(atlas.choose(&mut rng).is_none());
    }
}
