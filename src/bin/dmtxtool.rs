use clap::{Args, Parser, Subcommand};
use rust_dmtx::tools::{DecodeInput, RasterLayout, save_png};
use rust_dmtx::{CorrectionMode, Decoder, ModuleGrid, encoder};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dmtxtool", version, about = "RustDMTX CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text into a Data Matrix symbol
    Encode {
        /// Text to encode (ASCII)
        text: String,
        /// Write the rendered symbol here instead of printing the grid
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        raster: RasterArgs,
    },
    /// Decode a Data Matrix symbol from an image or a 0/1 text grid
    Decode {
        #[arg(long, conflicts_with = "grid", required_unless_present = "grid")]
        image: Option<PathBuf>,
        #[arg(long)]
        grid: Option<PathBuf>,
        /// Use single-bit-flip search instead of algebraic correction
        #[arg(long)]
        bitflip: bool,
        #[command(flatten)]
        raster: RasterArgs,
    },
}

#[derive(Args)]
struct RasterArgs {
    /// Pixels per module (defaults to DMTX_MODULE_PX or 1)
    #[arg(long)]
    module_px: Option<usize>,
    /// Quiet zone in modules (defaults to DMTX_QUIET_ZONE or 0)
    #[arg(long)]
    quiet_zone: Option<usize>,
}

impl RasterArgs {
    fn layout(&self) -> RasterLayout {
        let mut layout = RasterLayout::from_env();
        if let Some(px) = self.module_px {
            layout.module_px = px.max(1);
        }
        if let Some(zone) = self.quiet_zone {
            layout.quiet_zone = zone;
        }
        layout
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encode { text, out, raster } => encode_cmd(&text, out.as_deref(), &raster.layout()),
        Command::Decode {
            image,
            grid,
            bitflip,
            raster,
        } => decode_cmd(image, grid, bitflip, &raster.layout()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn encode_cmd(text: &str, out: Option<&Path>, layout: &RasterLayout) -> Result<(), String> {
    let (grid, size) = encoder::encode_with_size(text).map_err(|e| format!("Encode failed: {}", e))?;

    match out {
        Some(path) => {
            save_png(&grid, layout, path)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            println!(
                "Wrote {}x{} symbol ({} data + {} EC codewords) to {}",
                size.rows,
                size.cols,
                size.data_cw,
                size.ec_cw,
                path.display()
            );
        }
        None => print!("{}", grid),
    }
    Ok(())
}

fn decode_cmd(
    image: Option<PathBuf>,
    grid: Option<PathBuf>,
    bitflip: bool,
    layout: &RasterLayout,
) -> Result<(), String> {
    let input = match (image, grid) {
        (Some(path), _) => DecodeInput::ImageSource(path),
        (None, Some(path)) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            DecodeInput::RawGrid(ModuleGrid::parse_bits(&text).map_err(|e| e.to_string())?)
        }
        (None, None) => return Err("Either --image or --grid is required".to_string()),
    };

    let modules = input
        .resolve(layout)
        .map_err(|e| format!("Failed to load image: {}", e))?;

    let decoder = if bitflip {
        Decoder::with_correction(CorrectionMode::BitFlipSearch)
    } else {
        Decoder::new()
    };

    let symbol = decoder
        .decode_symbol(&modules)
        .map_err(|e| format!("Decode failed: {}", e))?;

    println!("Content: {}", symbol.content);
    println!(
        "Size: {}x{} ({} data + {} EC codewords)",
        symbol.size.rows, symbol.size.cols, symbol.size.data_cw, symbol.size.ec_cw
    );
    println!("GS1: {}", symbol.gs1);
    println!("Corrected codewords: {}", symbol.corrected_errors);
    if symbol.null_codewords > 0 {
        println!("Warning: {} null codeword(s) skipped", symbol.null_codewords);
    }
    if symbol.finder_mismatches > 0 {
        println!("Warning: {} finder module(s) damaged", symbol.finder_mismatches);
    }
    Ok(())
}
