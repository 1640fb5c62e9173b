use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use xydata::configuration::Configuration;
use xydata::io::parser::ColumnSelection;
use xydata::xy::arithmetic::ArithmeticOperation;
use xydata::xy::xy::XY;

#[derive(Parser)]
#[command(name = "xy-tool")]
#[command(about = "Inspect and combine sampled X-Y data files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON settings file (interpolation, noise precision, columns)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// 1-based X column, overrides the configuration
    #[arg(long, global = true)]
    xcol: Option<usize>,

    /// 1-based Y column, overrides the configuration
    #[arg(long, global = true)]
    ycol: Option<usize>,

    /// Log debug messages
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Trapezoidal area under the curve
    Area { file: PathBuf },
    /// Noise level estimated from the Y histogram
    Noise { file: PathBuf },
    /// Position and value of the maximum
    Max { file: PathBuf },
    /// Keep only the samples with X in [X1, X2]
    Cut {
        file: PathBuf,
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Combine two curves over their shared X range
    Combine {
        lhs: PathBuf,
        rhs: PathBuf,
        /// add, subtract, multiply or divide (or + - * /)
        #[arg(long)]
        op: ArithmeticOperation,
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn load(path: &Path, columns: ColumnSelection) -> Result<XY> {
    XY::from_file(path, columns).with_context(|| format!("failed to read {}", path.display()))
}

fn emit(xy: &XY, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => xy
            .write_to_file(path)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{}", xy);
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut config = match &cli.config {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => Configuration::default(),
    };
    if cli.xcol.is_some() || cli.ycol.is_some() {
        let columns = config.columns();
        config.set_columns(ColumnSelection::new(
            cli.xcol.unwrap_or(columns.x()),
            cli.ycol.unwrap_or(columns.y()),
        ));
    }
    let columns = config.columns();

    match cli.command {
        Command::Area { file } => {
            let xy = load(&file, columns)?;
            println!("{}", xy.area());
        }
        Command::Noise { file } => {
            let xy = load(&file, columns)?;
            let noise = xy.noise_with(config.noise()).context("noise estimation failed")?;
            println!("{}", noise);
        }
        Command::Max { file } => {
            let xy = load(&file, columns)?;
            let max = xy.max_and_eps().context("no maximum in an empty curve")?;
            println!("{}\t{}", max.x_max(), max.y_max());
        }
        Command::Cut { file, x1, x2, output } => {
            let mut xy = load(&file, columns)?;
            xy.cut(x1, x2).with_context(|| format!("cannot cut {} to [{}, {}]", file.display(), x1, x2))?;
            emit(&xy, output.as_deref())?;
        }
        Command::Combine { lhs, rhs, op, output } => {
            let a = load(&lhs, columns)?;
            let b = load(&rhs, columns)?;
            let result = a
                .combine_with(&b, op, config.interpolation())
                .with_context(|| format!("cannot compute {} {} {}", lhs.display(), op, rhs.display()))?;
            emit(&result, output.as_deref())?;
        }
    }
    Ok(())
}
