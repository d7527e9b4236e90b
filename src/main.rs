use std::path::PathBuf;

use clap::Parser;
use eyre::Result;

mod c;
mod embed;

use embed::Embedder;

const USAGE: &str = "\
Usage: files-to-c-arrays <output_file> <input_file_1> <input_file_2> ... <input_file_N>

Generates a .c file containing all of the input files as static
character arrays, along with a function to retrieve them:

const char *get_file(const char *path, size_t *out_size)
";

/// Generate a C source file embedding each input file as a static character
/// array, retrievable at runtime by its original path.
#[derive(Debug, Parser)]
struct Cli {
    /// Path of the C file to generate.
    output: Option<PathBuf>,
    /// Paths of the files to embed, in table order.
    inputs: Vec<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let (output, inputs) = match (cli.output, cli.inputs) {
        (Some(output), inputs) if !inputs.is_empty() => (output, inputs),
        _ => {
            print!("{}", USAGE);
            std::process::exit(1);
        }
    };

    Embedder::new(output, inputs).run()
}
