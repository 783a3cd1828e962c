use anyhow::Context;
use jsonscalar::{FileByteSource, LineReader};

/// Runs the line reader over `path`, printing one output row per line
/// (trailing newline included, if present in the source).
pub fn run(path: &str) -> anyhow::Result<()> {
    let mut reader = LineReader::new(FileByteSource::new(path));
    reader.open().with_context(|| format!("opening {path}"))?;

    let mut line_number = 0usize;
    loop {
        let line = reader.read_line().context("reading line")?;
        if line.is_empty() {
            break;
        }
        line_number += 1;
        print!("{line_number}: {}", String::from_utf8_lossy(line));
        if !line.ends_with(b"\n") {
            println!();
        }
    }

    Ok(())
}
