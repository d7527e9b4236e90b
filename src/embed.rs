use std::path::PathBuf;

use eyre::{Result, WrapErr};

use crate::c::write_c_arrays;

#[derive(Debug)]
pub struct InputFile {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl InputFile {
    pub fn read(path: PathBuf) -> Result<Self> {
        let bytes = std::fs::read(&path)
            .wrap_err_with(|| format!("Failed to read input file {}", path.display()))?;
        Ok(Self { path, bytes })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug)]
pub struct Embedder {
    output: PathBuf,
    inputs: Vec<PathBuf>,
}

impl Embedder {
    pub fn new(output: PathBuf, inputs: Vec<PathBuf>) -> Self {
        Self { output, inputs }
    }

    pub fn run(self) -> Result<()> {
        // Read every input before creating the output; a failed read must
        // not leave a partial file behind.
        let files = self
            .inputs
            .into_iter()
            .map(InputFile::read)
            .collect::<Result<Vec<_>>>()?;

        let mut output_file = std::fs::File::create(&self.output)
            .wrap_err_with(|| format!("Failed to create output file {}", self.output.display()))?;
        write_c_arrays(&mut output_file, &files)
            .wrap_err_with(|| format!("Failed to write output file {}", self.output.display()))?;

        Ok(())
    }
}
