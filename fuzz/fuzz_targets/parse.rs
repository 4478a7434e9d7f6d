#![no_main]

use iris::lexer::tokenize;
use iris::{SourceContext, parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Source files are UTF-8; skip anything else
    if let Ok(s) = std::str::from_utf8(data) {
        // The tokenizer never fails, only records anomalies
        let _ = tokenize(s);

        let mut ctx = SourceContext::from_text(s);
        let _ = parse(&mut ctx);
    }
});
