use std::io::Read as _;

use anyhow::{bail, Context};
use jsonscalar::{JsonValue, ParseStatus, ValueParser};

const CHUNK_SIZE: usize = 256;

/// Reads one JSON scalar value in fixed-size chunks from `path` (or stdin
/// when `path` is `None`) and prints its decoded form.
pub fn run(path: Option<&str>) -> anyhow::Result<()> {
    let bytes = read_all(path)?;
    if bytes.is_empty() {
        bail!("no input to parse");
    }

    let mut parser = ValueParser::new();
    let mut remaining: &[u8] = &bytes;
    let mut ready = false;

    'outer: while !remaining.is_empty() {
        let take = remaining.len().min(CHUNK_SIZE);
        let (chunk, rest) = remaining.split_at(take);
        remaining = rest;

        let mut cursor = chunk;
        while !cursor.is_empty() {
            let (status, leftover) = parser
                .feed(cursor)
                .context("input is not a valid JSON scalar value")?;
            cursor = leftover;
            if status == ParseStatus::Ready {
                ready = true;
                break 'outer;
            }
        }
    }

    if !ready {
        bail!("input ended before a complete value was parsed");
    }

    match parser
        .into_value()
        .context("input is not a valid JSON scalar value")?
    {
        JsonValue::String(s) => println!("string: {s}"),
        JsonValue::Integer(n) => println!("integer: {n}"),
        JsonValue::Float(n) => println!("float: {n}"),
        JsonValue::True => println!("bool: true"),
        JsonValue::False => println!("bool: false"),
        JsonValue::Null => println!("null"),
    }

    Ok(())
}

fn read_all(path: Option<&str>) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    match path {
        Some(path) => {
            std::fs::File::open(path)
                .with_context(|| format!("opening {path}"))?
                .read_to_end(&mut buf)
                .with_context(|| format!("reading {path}"))?;
        }
        None => {
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("reading stdin")?;
        }
    }
    Ok(buf)
}
