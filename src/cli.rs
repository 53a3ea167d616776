use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input build file
    pub input: PathBuf,
    /// Print the assembled compiler command without running it
    #[arg(long)]
    pub dry_run: bool,
    /// Print the parsed build configuration as JSON and exit
    #[arg(long)]
    pub dump_config: bool,
}
