// In: src/bin/mapbuild.rs

//! Thin command-line wiring around the tiletga library: load the tileset
//! table and level grid, convert the PNG tile assets, stitch the composite,
//! and write it out as a tile-format file (and optionally a PNG preview).

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tiletga::codec;
use tiletga::convert;
use tiletga::map::{build_map, LevelGrid, Tileset, TilesetConfig};

#[derive(Parser, Debug)]
#[command(name = "mapbuild", version = tiletga::VERSION)]
#[command(about = "Stitch a level grid of PNG tiles into one tile-format image")]
struct Args {
    /// Level layout text file (one row per line, one character per tile).
    #[arg(long)]
    level: PathBuf,

    /// Tileset table: JSON object mapping tile codes to asset base names.
    #[arg(long)]
    tileset: PathBuf,

    /// Directory containing the PNG tile assets named in the tileset table.
    #[arg(long)]
    tiles_dir: PathBuf,

    /// Output path for the composite tile-format image.
    #[arg(long)]
    out: PathBuf,

    /// Optional output path for a PNG rendering of the composite.
    #[arg(long)]
    png: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mapbuild: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> tiletga::Result<()> {
    let config = TilesetConfig::from_json_reader(File::open(&args.tileset)?)?;
    let grid = LevelGrid::load(&args.level)?;
    log::info!("level grid: {} x {} tiles", grid.width(), grid.height());

    let tiles = Tileset::load_png_dir(&config, &args.tiles_dir)?;
    let composite = build_map(&grid, &tiles)?;

    codec::encode_file(&composite, &args.out)?;
    log::info!("wrote {}", args.out.display());

    if let Some(png_path) = &args.png {
        convert::tile_to_png_file(&composite, png_path)?;
        log::info!("wrote {}", png_path.display());
    }
    Ok(())
}
