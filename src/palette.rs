// src/palette.rs

use crate::random::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
pub const NEAR_BLACK: Color = Color::rgb(0.067, 0.067, 0.067);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `hue` in degrees, `saturation` and `lightness` in `[0, 1]`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let hue = hue.rem_euclid(360.0);
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = lightness - chroma / 2.0;
        Self::rgb(r + m, g + m, b + m)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Perceived brightness in `[0, 1]`.
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

/// Ordered, non-empty list of colours a paint cycle draws from.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// `None` for an empty list.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Uniformly chosen colour.
    pub fn pick(&self, rng: &mut dyn RandomSource) -> Color {
        self.colors[rng.pick(self.colors.len())]
    }
}

pub trait PaletteProvider {
    fn generate_palette(&mut self, rng: &mut dyn RandomSource) -> Palette;
}

/// Random hues spread around the colour wheel, always topped up with a
/// near-black tone.
#[derive(Clone, Debug)]
pub struct RandomPalette {
    size: usize,
}

impl RandomPalette {
    /// `size` counts the hued colours; the near-black tone comes on top.
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }
}

impl Default for RandomPalette {
    fn default() -> Self {
        Self::new(5)
    }
}

impl PaletteProvider for RandomPalette {
    fn generate_palette(&mut self, rng: &mut dyn RandomSource) -> Palette {
        let base_hue = rng.next_unit() as f32 * 360.0;
        let spread = 20.0 + rng.next_unit() as f32 * 100.0;

        let mut colors = Vec::with_capacity(self.size + 1);
        for i in 0..self.size {
            let hue = base_hue + spread * i as f32;
            let saturation = 0.45 + rng.next_unit() as f32 * 0.5;
            let lightness = 0.3 + rng.next_unit() as f32 * 0.45;
            colors.push(Color::from_hsl(hue, saturation, lightness));
        }
        colors.push(NEAR_BLACK);

        Palette { colors }
    }
}

/// Always hands out the same palette.
#[derive(Clone, Debug)]
pub struct FixedPalette {
    palette: Palette,
}

impl FixedPalette {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl PaletteProvider for FixedPalette {
    fn generate_palette(&mut self, _rng: &mut dyn RandomSource) -> Palette {
        self.palette.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SeededRandom, SequenceRandom};
    use approx::assert_relative_eq;

    #[test]
    fn hsl_primaries() {
        let red = Color::from_hsl(0.0, 1.0, 0.5);
        assert_relative_eq!(red.r, 1.0);
        assert_relative_eq!(red.g, 0.0);
        assert_relative_eq!(red.b, 0.0);

        let blue = Color::from_hsl(240.0, 1.0, 0.5);
        assert_relative_eq!(blue.b, 1.0);
        assert_relative_eq!(blue.r, 0.0);

        let grey = Color::from_hsl(123.0, 0.0, 0.25);
        assert_relative_eq!(grey.r, 0.25);
        assert_relative_eq!(grey.g, 0.25);
    }

    #[test]
    fn empty_palette_rejected() {
        assert!(Palette::new(Vec::new()).is_none());
        assert_eq!(Palette::new(vec![BLACK]).unwrap().len(), 1);
    }

    #[test]
    fn random_palette_contains_dark_tone() {
        let mut provider = RandomPalette::default();
        let mut rng = SeededRandom::new(99);
        for _ in 0..10 {
            let palette = provider.generate_palette(&mut rng);
            assert_eq!(palette.len(), 6);
            assert!(palette.colors().iter().any(|c| c.luminance() < 0.1));
            for color in palette.colors() {
                for channel in color.to_array() {
                    assert!((0.0..=1.0).contains(&channel));
                }
            }
        }
    }

    #[test]
    fn pick_is_uniform_index() {
        let palette = Palette::new(vec![BLACK, NEAR_BLACK, Color::rgb(1.0, 1.0, 1.0)]).unwrap();
        let mut rng = SequenceRandom::new(&[0.0, 0.4, 0.9]);
        assert_eq!(palette.pick(&mut rng), BLACK);
        assert_eq!(palette.pick(&mut rng), NEAR_BLACK);
        assert_eq!(palette.pick(&mut rng), Color::rgb(1.0, 1.0, 1.0));
    }
}
