use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dfauto-reencode")]
#[command(about = "Convert DFauto merged exports to UTF-8", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-encode every *.merged.txt file into the output folder
    Convert {
        /// Folder holding the source documents
        #[arg(short, long, default_value = "files")]
        input: PathBuf,

        /// Folder the UTF-8 copies are written into
        #[arg(short, long, default_value = "files_converted")]
        output: PathBuf,
    },

    /// Report the guessed encoding of each candidate file, write nothing
    Detect {
        /// Folder holding the source documents
        #[arg(short, long, default_value = "files")]
        input: PathBuf,
    },
}
