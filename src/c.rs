use std::io::{Result, Write};

use crate::embed::InputFile;

const WRAP_WIDTH: usize = 76;

const ACCESSOR: &str = "\
const char *get_file(const char *path, size_t *out_size) {
  for (int i = 0; i < num_files; i++) {
    if (strcmp(file_paths[i], path) == 0) {
      *out_size = file_sizes[i];
      return files[i];
    }
  }
  return NULL;
}
";

pub fn write_c_arrays<W>(mut writer: W, files: &[InputFile]) -> Result<()>
where
    W: Write,
{
    writeln!(writer, "#include <stdint.h>")?;
    writeln!(writer, "#include <string.h>")?;
    writeln!(writer)?;

    let paths: Vec<String> = files
        .iter()
        .map(|file| file.path.display().to_string())
        .collect();
    writeln!(
        writer,
        "static const char *file_paths[] = {{\"{}\"}};",
        paths.join("\", \"")
    )?;

    let sizes: Vec<String> = files.iter().map(|file| file.size().to_string()).collect();
    writeln!(
        writer,
        "static const size_t file_sizes[] = {{{}}};",
        sizes.join(", ")
    )?;

    writeln!(writer, "static const int num_files = {};", files.len())?;

    let arrays: Vec<String> = files
        .iter()
        .map(|file| wrap_literal(&escape_bytes(&file.bytes), WRAP_WIDTH))
        .collect();
    writeln!(writer, "static const char *files[] = {{")?;
    writeln!(writer, "  \"{}\"", arrays.join("\",\n  \""))?;
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    writer.write_all(ACCESSOR.as_bytes())?;

    Ok(())
}

fn escape_bytes(bytes: &[u8]) -> String {
    let digits = hex::encode(bytes);
    let mut escaped = String::with_capacity(digits.len() * 2);
    for pair in digits.as_bytes().chunks(2) {
        escaped.push_str("\\x");
        escaped.push(pair[0] as char);
        escaped.push(pair[1] as char);
    }
    escaped
}

fn wrap_literal(escaped: &str, width: usize) -> String {
    // Escaped text is ASCII, so byte offsets are valid split points.
    let mut wrapped = String::with_capacity(escaped.len());
    let mut rest = escaped;
    while rest.len() > width {
        let (chunk, tail) = rest.split_at(width);
        wrapped.push_str(chunk);
        // Close the literal and reopen it on the next line; the C compiler
        // concatenates the adjacent pieces back into a single literal.
        wrapped.push_str("\"\n  \"");
        rest = tail;
    }
    wrapped.push_str(rest);
    wrapped
}
