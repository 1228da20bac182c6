// hanoi: print the optimal Tower of Hanoi solution and the board at any step

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use hanoi::config::{self, HanoiConfig, Overrides};
use hanoi::navigator::Navigator;

#[derive(Parser)]
#[command(name = "hanoi", about = "Tower of Hanoi solver and step viewer")]
struct Args {
    /// Number of disks
    #[arg(short, long)]
    disks: Option<u32>,

    /// Show the board after this many moves (0 = initial configuration)
    #[arg(short, long, conflicts_with = "label")]
    step: Option<usize>,

    /// Show the board at this 1-based step label (1 = initial configuration)
    #[arg(long)]
    label: Option<usize>,

    /// Print the full move listing
    #[arg(short, long)]
    list: bool,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(verbose: u8, log_file: Option<&PathBuf>) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match log_file {
        Some(path) => {
            if let Ok(file) = File::create(path) {
                let _ = WriteLogger::init(level, log_config, file);
            }
        }
        None => {
            let _ = TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose, args.log_file.as_ref());

    let file_config = match &args.config {
        Some(path) => match HanoiConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => HanoiConfig::default(),
    };

    // A label of 0 is caught by move_to_label below; map it to step 0 for config checks
    let step = args.step.or(args.label.map(|l| l.saturating_sub(1)));
    let overrides = Overrides {
        disks: args.disks,
        step,
        list_moves: args.list,
    };

    let resolved = match config::resolve(&file_config, &overrides) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut navigator = Navigator::new(resolved.disks)?;
    let jumped = match args.label {
        Some(label) => navigator.move_to_label(label),
        None => navigator.move_to_step(resolved.step),
    };
    if let Err(e) = jumped {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if resolved.list_moves {
        println!("{}", navigator.solver());
        println!();
    }

    println!(
        "Step {}/{}",
        navigator.step_label(),
        navigator.max_step() + 1
    );
    if let Some(mv) = navigator.last_move() {
        println!("{}", mv);
    }
    println!("{}", navigator.towers());
    if navigator.is_at_end() {
        println!("Solved.");
    }

    Ok(())
}
