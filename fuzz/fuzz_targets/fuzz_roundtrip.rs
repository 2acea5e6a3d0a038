#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any input must survive compress -> decompress unchanged
    let packed = smaz::compress(data);
    let unpacked = smaz::decompress(&packed).expect("encoder produced an invalid stream");
    assert_eq!(unpacked, data, "Round-trip mismatch");

    // Same input, same bytes
    assert_eq!(smaz::compress(data), packed);
});
