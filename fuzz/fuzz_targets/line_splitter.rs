#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use tools::LineSplitter;

// Chunking must never change the resulting lines.
fuzz_target!(|input: (Vec<u8>, u8)| {
    let (data, step) = input;
    let step = usize::from(step.max(1));

    let mut whole = VecDeque::new();
    let mut splitter = LineSplitter::new();
    splitter.push(&data, &mut whole);
    splitter.finish(&mut whole);

    let mut chunked = VecDeque::new();
    let mut splitter = LineSplitter::new();
    for chunk in data.chunks(step) {
        splitter.push(chunk, &mut chunked);
    }
    splitter.finish(&mut chunked);

    assert_eq!(whole, chunked);
    for line in &whole {
        assert!(!line.contains(['\n', '\r']));
    }
});
