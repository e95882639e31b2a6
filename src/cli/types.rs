use clap::Parser;
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "rustoc")]
#[command(about = "Render a numbered table of contents from a heading tree", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON heading tree file ("-" or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Template configuration file (defaults to ./_toc.yml, ./_toc.yaml or ./_toc.toml)
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Treat the input as a flat heading list instead of a nested tree
    #[arg(long, default_value_t = false)]
    pub flat: bool,

    /// Show the full backtrace when an error occurs
    #[arg(long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}
