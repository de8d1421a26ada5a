// famicore - main entry point

use clap::Parser;
use famicore::display::{run_display, WindowConfig};
use famicore::emulator::Emulator;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

/// A cycle-disciplined NES emulator
#[derive(Parser)]
#[command(name = "famicore", version, about)]
struct Cli {
    /// Path to an iNES ROM file (.nes)
    rom: PathBuf,

    /// Window scale factor (1-8)
    #[arg(long)]
    scale: Option<u32>,

    /// Disable VSync
    #[arg(long)]
    no_vsync: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut emulator = Emulator::new();
    if let Err(err) = emulator.load_rom(&cli.rom) {
        eprintln!("famicore: {}: {}", cli.rom.display(), err);
        return ExitCode::FAILURE;
    }
    info!("running {}", cli.rom.display());

    let video = &emulator.config().video;
    let config = WindowConfig::new()
        .with_scale(cli.scale.unwrap_or(video.scale))
        .with_fps(video.fps)
        .with_vsync(!cli.no_vsync && video.vsync);

    if let Err(err) = run_display(config, emulator) {
        eprintln!("famicore: display error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
