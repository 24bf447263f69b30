//! archmap - interactive terminal mind map of the AI Coaching Agent architecture
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use archmap::StartupOverrides;
use clap::Parser;
use color_eyre::Result;

/// Explore the AI Coaching Agent architecture in the terminal
#[derive(Parser, Debug)]
#[command(name = "archmap", version)]
#[command(about = "Interactive mind map of the AI Coaching Agent architecture", long_about = None)]
struct Args {
    /// Directory containing .archmap/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Node selected on launch (e.g. ai-agent, stripe)
    #[arg(long, value_name = "ID")]
    select: Option<String>,

    /// Section to start collapsed (core, coaching, users, platforms, cloud, payments)
    #[arg(long, value_name = "SECTION")]
    collapse: Vec<String>,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,

    /// Print a single frame as plain text and exit
    #[arg(long)]
    print: bool,

    /// Frame width for --print
    #[arg(long, default_value_t = 120)]
    width: u16,

    /// Frame height for --print
    #[arg(long, default_value_t = 40)]
    height: u16,

    /// Write a default .archmap/config.toml under PATH and exit
    #[arg(long, conflicts_with = "print")]
    init_config: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        archmap_app::config::init_config_dir(&project_path)?;
        eprintln!(
            "Config ready at {}",
            project_path.join(".archmap").join("config.toml").display()
        );
        return Ok(());
    }

    let overrides = StartupOverrides {
        select: args.select,
        collapse: args.collapse,
        no_mouse: args.no_mouse,
    };

    if args.print {
        let frame = archmap::print_frame(&project_path, &overrides, args.width, args.height)?;
        print!("{}", frame);
        return Ok(());
    }

    archmap::run(&project_path, &overrides)?;
    Ok(())
}
