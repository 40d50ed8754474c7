use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tscan",
    about = "Build loop databases from takeoff-region geometry",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan every structure file in a directory
    #[command(visible_alias = "d")]
    Dir(DirArgs),

    /// Scan a single PDB file (or stdin)
    #[command(visible_alias = "f")]
    File(FileArgs),

    /// Print the active distance table in override-file format
    #[command(visible_alias = "t")]
    Table(TableArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Dir(args) => args.output.quiet,
            Command::File(args) => args.output.quiet,
            Command::Table(args) => args.output.quiet,
        }
    }
}

/// Output options shared by all commands.
#[derive(Args)]
pub struct OutputOptions {
    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Loop length bounds.
#[derive(Args)]
#[command(next_help_heading = "Loop Length")]
pub struct LengthOptions {
    /// Minimum residues between the anchors
    #[arg(short = 'm', long = "min", value_name = "N", default_value = "0")]
    pub min: usize,

    /// Maximum residues between the anchors (0 = unbounded)
    #[arg(short = 'x', long = "max", value_name = "N", default_value = "0")]
    pub max: usize,
}

/// Options controlling the acceptance bands.
#[derive(Args)]
#[command(next_help_heading = "Distance Table")]
pub struct TableOptions {
    /// Distance table overriding the default bands (9 lines of `min max`)
    #[arg(short = 't', long = "table", value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Reference statistics (TOML with `means`, `sds`, optional `sd_mult`)
    #[arg(long, value_name = "FILE")]
    pub stats: Option<PathBuf>,

    /// Standard deviation multiplier for the default bands
    #[arg(long = "sd-mult", value_name = "K")]
    pub sd_mult: Option<f64>,

    /// Treat any problem in the distance table as an error
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct DirArgs {
    /// Directory of PDB files
    #[arg(value_name = "PDBDIR")]
    pub dir: PathBuf,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub lengths: LengthOptions,

    #[command(flatten)]
    pub table: TableOptions,
}

#[derive(Args)]
pub struct FileArgs {
    /// PDB file (stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Structure identifier (derived from the file name if omitted)
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub lengths: LengthOptions,

    #[command(flatten)]
    pub table: TableOptions,
}

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub table: TableOptions,
}

pub fn parse() -> Cli {
    Cli::parse()
}
