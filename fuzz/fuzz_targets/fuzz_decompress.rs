#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes may be rejected, but only with a malformed-input error
    match smaz::decompress(data) {
        Ok(out) => {
            // A stream that decodes must re-encode to something that decodes the same
            let again = smaz::decompress(&smaz::compress(&out)).unwrap();
            assert_eq!(again, out);
        }
        Err(e) => assert!(e.is_malformed_input(), "unexpected error: {}", e),
    }
});
