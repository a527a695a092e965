pub mod detect;

use std::error::Error;

use clap::{Parser, Subcommand};
use detect::handle_detect;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Detect game controllers connected to this machine
    Detect,
}

pub fn main_cli(args: Args) -> Result<(), Box<dyn Error>> {
    match args.cmd {
        Commands::Detect => handle_detect(),
    }
}
