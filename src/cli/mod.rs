use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use annocheck::check::{ClassScope, IonMode};
use annocheck::table::Delimiter;

mod check;
mod columns;
mod config;

/// annocheck - GNPS vs SIRIUS annotation consistency
#[derive(Parser)]
#[command(name = "annocheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Ionisation mode argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum IonModeArg {
    /// Positive ionisation
    Pos,
    /// Negative ionisation
    Neg,
}

impl From<IonModeArg> for IonMode {
    fn from(arg: IonModeArg) -> Self {
        match arg {
            IonModeArg::Pos => IonMode::Positive,
            IonModeArg::Neg => IonMode::Negative,
        }
    }
}

/// CANOPUS comparison scope argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ClassScopeArg {
    /// Look every level up in `CAN_all classifications`
    All,
    /// Compare each level with the CANOPUS column of the same level
    PerLevel,
}

impl From<ClassScopeArg> for ClassScope {
    fn from(arg: ClassScopeArg) -> Self {
        match arg {
            ClassScopeArg::All => ClassScope::All,
            ClassScopeArg::PerLevel => ClassScope::PerLevel,
        }
    }
}

/// Field delimiter argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DelimiterArg {
    /// Tab-separated
    Tab,
    /// Comma-separated
    Comma,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Tab => Delimiter::Tab,
            DelimiterArg::Comma => Delimiter::Comma,
        }
    }
}

/// Options of the check command that override the config file.
#[derive(clap::Args, Debug, Default)]
pub struct CheckArgs {
    /// Library search mode: standard/regular or analogue
    #[arg(short = 'l', long)]
    library_mode: Option<String>,

    /// Ionisation mode of the library spectra
    #[arg(short = 'i', long, value_enum)]
    ion_mode: Option<IonModeArg>,

    /// CANOPUS columns the library classes are compared with
    #[arg(long, value_enum)]
    class_scope: Option<ClassScopeArg>,

    /// ZODIAC score threshold (default: 0.7)
    #[arg(short = 's', long)]
    score_threshold: Option<f64>,

    /// Spectral similarity threshold (default: 0.7)
    #[arg(long)]
    similarity: Option<f64>,

    /// Shared peak threshold (default: 6)
    #[arg(long)]
    shared_peaks: Option<u32>,

    /// Mass error threshold in ppm, regular mode only (default: 10)
    #[arg(long)]
    ppm_error: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare library matches with SIRIUS/CANOPUS annotations
    Check {
        /// Feature table (.tsv/.txt tab-separated, otherwise comma-separated)
        #[arg(value_name = "TABLE")]
        table: PathBuf,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Override the delimiter guessed from the extension
        #[arg(short = 'd', long, value_enum)]
        delimiter: Option<DelimiterArg>,

        /// Write the filtered table with match columns here
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the summary tables as JSON here
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        #[command(flatten)]
        args: CheckArgs,
    },

    /// List which columns each library mode needs and whether the table has them
    Columns {
        /// Feature table
        #[arg(value_name = "TABLE")]
        table: PathBuf,

        /// Override the delimiter guessed from the extension
        #[arg(short = 'd', long, value_enum)]
        delimiter: Option<DelimiterArg>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check {
            table,
            config,
            delimiter,
            output,
            json,
            args,
        } => check::run(
            table,
            config,
            delimiter.map(Delimiter::from),
            output,
            json,
            args,
        ),
        Commands::Columns { table, delimiter } => {
            columns::run(table, delimiter.map(Delimiter::from))
        }
    }
}
