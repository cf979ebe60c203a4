// src/lib.rs

pub mod analyzer;
pub mod error;
pub mod geometry;
pub mod mosaic;
pub mod painter;
pub mod palette;
pub mod params;
pub mod random;
pub mod subdivision;

pub use analyzer::{EdgeAnalyzer, EdgeRatio};
pub use error::{MosaicError, MosaicResult};
pub use geometry::{Generation, Point2, Polygon};
pub use mosaic::{Canvas, MosaicGenerator, MosaicRun, MosaicSummary};
pub use painter::{DrawCommand, DrawList, MosaicPainter};
pub use palette::{Color, Palette, PaletteProvider, RandomPalette};
pub use params::MosaicParams;
pub use random::{RandomSource, SeededRandom, SequenceRandom};
pub use subdivision::{Subdivision, SubdivisionEngine};
