#![no_main]
use libfuzzer_sys::fuzz_target;
use imgconv::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    // Lossless codecs only: decode, re-encode in the same format, decode again
    for codec in [Codec::Bmp, Codec::Ppm] {
        let Ok(decoded) = codec.decode(data, Some(&limits), enough::Unstoppable) else {
            continue;
        };
        let Ok(reencoded) = codec.encode(&decoded, &EncodeOptions::default(), enough::Unstoppable)
        else {
            panic!("{codec:?}: decoded image failed to re-encode");
        };
        let Ok(decoded2) = codec.decode(&reencoded, None, enough::Unstoppable) else {
            panic!("{codec:?}: re-encoded data failed to decode");
        };
        assert_eq!(decoded, decoded2, "{codec:?}: roundtrip pixel mismatch");
    }
});
