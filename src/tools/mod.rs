//! Image acquisition and rendering around the core codec.
//!
//! Only upright, axis-aligned renderings are supported: each module is a
//! `module_px` square and the symbol sits inside a light quiet zone of
//! `quiet_zone` modules.

use crate::config;
use crate::models::ModuleGrid;
use image::{GrayImage, Luma};
use std::path::{Path, PathBuf};

/// Layout of a symbol inside a raster image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterLayout {
    /// Pixels per module edge
    pub module_px: usize,
    /// Light border width in modules
    pub quiet_zone: usize,
    /// Luma values below this are dark
    pub threshold: u8,
}

impl RasterLayout {
    /// Layout from `DMTX_MODULE_PX`, `DMTX_QUIET_ZONE` and `DMTX_THRESHOLD`
    pub fn from_env() -> Self {
        Self {
            module_px: config::module_px(),
            quiet_zone: config::quiet_zone(),
            threshold: config::dark_threshold(),
        }
    }

    /// One pixel per module, no quiet zone, threshold 128
    pub fn unscaled() -> Self {
        Self {
            module_px: 1,
            quiet_zone: 0,
            threshold: 128,
        }
    }

    fn margin_px(&self) -> usize {
        self.quiet_zone * self.module_px
    }
}

impl Default for RasterLayout {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Where a decoder input comes from
#[derive(Debug, Clone)]
pub enum DecodeInput {
    /// A grid that is already segmented and upright
    RawGrid(ModuleGrid),
    /// An image file to threshold and sample
    ImageSource(PathBuf),
}

impl DecodeInput {
    /// Turn the input into a module grid
    pub fn resolve(self, layout: &RasterLayout) -> Result<ModuleGrid, image::ImageError> {
        match self {
            DecodeInput::RawGrid(grid) => Ok(grid),
            DecodeInput::ImageSource(path) => load_grid(path, layout),
        }
    }
}

/// Threshold a grayscale buffer and sample one pixel per module centre
pub fn grid_from_luma(
    gray: &[u8],
    width: usize,
    height: usize,
    layout: &RasterLayout,
) -> ModuleGrid {
    let margin = layout.margin_px();
    let px = layout.module_px.max(1);
    let cols = width.saturating_sub(2 * margin) / px;
    let rows = height.saturating_sub(2 * margin) / px;

    let mut grid = ModuleGrid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let x = margin + col * px + px / 2;
            let y = margin + row * px + px / 2;
            grid.set(
                row,
                col,
                gray.get(y * width + x).is_some_and(|&v| v < layout.threshold),
            );
        }
    }
    grid
}

/// Load an image file and sample it into a module grid
pub fn load_grid<P: AsRef<Path>>(
    path: P,
    layout: &RasterLayout,
) -> Result<ModuleGrid, image::ImageError> {
    let gray = image::open(path)?.to_luma8();
    let (width, height) = gray.dimensions();
    Ok(grid_from_luma(
        gray.as_raw(),
        width as usize,
        height as usize,
        layout,
    ))
}

/// Render a grid: dark modules are 0, light modules and quiet zone are 255
pub fn render(grid: &ModuleGrid, layout: &RasterLayout) -> GrayImage {
    let margin = layout.margin_px();
    let px = layout.module_px.max(1);
    let width = (grid.cols() * px + 2 * margin) as u32;
    let height = (grid.rows() * px + 2 * margin) as u32;

    GrayImage::from_fn(width, height, |x, y| {
        let (x, y) = (x as usize, y as usize);
        let dark = x >= margin && y >= margin && grid.get((y - margin) / px, (x - margin) / px);
        if dark { Luma([0]) } else { Luma([255]) }
    })
}

/// Render a grid and write it as an image (format from the extension)
pub fn save_png<P: AsRef<Path>>(
    grid: &ModuleGrid,
    layout: &RasterLayout,
    path: P,
) -> Result<(), image::ImageError> {
    render(grid, layout).save(path)
}
