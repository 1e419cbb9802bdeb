use iced::Color;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::ColorScheme;

/// The fixed palette lit cells draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    Red,
    Green,
    Blue,
}

impl CellColor {
    pub const ALL: [CellColor; 3] = [CellColor::Red, CellColor::Green, CellColor::Blue];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> CellColor {
        *CellColor::ALL.choose(rng).unwrap_or(&CellColor::Red)
    }

    pub fn to_color(self) -> Color {
        match self {
            CellColor::Red => Color::from_rgb(1.0, 0.23, 0.19),
            CellColor::Green => Color::from_rgb(0.2, 0.78, 0.35),
            CellColor::Blue => Color::from_rgb(0.0, 0.48, 1.0),
        }
    }
}

/// One color per cell, `cell_count` long, following `scheme`.
pub fn generate_colors<R: Rng + ?Sized>(
    rng: &mut R,
    scheme: ColorScheme,
    cell_count: usize,
) -> Vec<CellColor> {
    match scheme {
        ColorScheme::RandomPerCell => (0..cell_count).map(|_| CellColor::random(rng)).collect(),
        // SingleColorAll draws per matrix too; matrices may disagree.
        ColorScheme::RandomPerMatrix | ColorScheme::SingleColorAll => {
            vec![CellColor::random(rng); cell_count]
        }
    }
}
