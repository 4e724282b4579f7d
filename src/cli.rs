//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagdesk")]
#[command(about = "Terminal manager for engineering tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file to use instead of the default search path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    pub generate_config: bool,
}
