//! Feeds arbitrary byte sequences to `ValueParser` split into arbitrary
//! chunk boundaries, checking only that the parser never panics: grammar
//! violations are expected and surface as `Err`, which is fine.

#![no_main]

use arbitrary::Arbitrary;
use jsonscalar::ValueParser;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    data: Vec<u8>,
    /// Chunk boundary offsets, taken modulo the remaining length at each
    /// split point so every input produces at least one valid split plan
    /// regardless of its own length.
    splits: Vec<u8>,
}

fn split_into_chunks<'a>(data: &'a [u8], splits: &[u8]) -> Vec<&'a [u8]> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut chunks = Vec::new();
    let mut rest = data;
    let mut splits = splits.iter().cycle();
    while !rest.is_empty() {
        let max = rest.len();
        let take = (*splits.next().unwrap() as usize % max) + 1;
        let (chunk, remainder) = rest.split_at(take);
        chunks.push(chunk);
        rest = remainder;
    }
    chunks
}

fuzz_target!(|input: Input| {
    let chunks = if input.splits.is_empty() {
        vec![input.data.as_slice()]
    } else {
        split_into_chunks(&input.data, &input.splits)
    };

    let mut parser = ValueParser::new();
    for chunk in chunks {
        if chunk.is_empty() {
            continue;
        }
        let mut remaining = chunk;
        loop {
            match parser.feed(remaining) {
                Ok((jsonscalar::ParseStatus::Ready, _rest)) => {
                    let _ = parser.into_value();
                    return;
                }
                Ok((jsonscalar::ParseStatus::NeedMore, _)) => break,
                Err(_) => return,
            }
        }
    }
});
