#![no_main]
use libfuzzer_sys::fuzz_target;

use jsoncheck::{tokenize, validate, ValidationError};

fuzz_target!(|data: &[u8]| {
    // Looking for panics. Both stages must also agree: a lexical error
    // from `validate` means `tokenize` fails on the same line.
    if let Err(ValidationError::Lex(e)) = validate(data) {
        if e.message.starts_with("Input exceeds") {
            return;
        }
        let lex = tokenize(data).unwrap_err();
        assert_eq!(lex.line, e.line);
    }
});
