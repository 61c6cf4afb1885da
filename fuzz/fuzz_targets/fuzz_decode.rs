#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cap allocations so huge declared sizes are rejected, not attempted
    let limits = imgconv::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    // Every codec must return Ok or Err on arbitrary bytes, never panic
    for codec in [imgconv::Codec::Bmp, imgconv::Codec::Ppm, imgconv::Codec::Jpeg] {
        let _ = codec.decode(data, Some(&limits), enough::Unstoppable);
    }
});
