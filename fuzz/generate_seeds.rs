#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    for dir in ["fuzz/corpus/fuzz_decode", "fuzz/corpus/fuzz_roundtrip"] {
        fs::create_dir_all(dir).unwrap();

        // PPM 2x2
        let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
        fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

        // PPM with a header comment
        let commented = b"P6\n# seed\n1 1\n255\n\x01\x02\x03";
        fs::write(format!("{dir}/ppm_comment.ppm"), commented).unwrap();

        // BMP 1x1 24-bit, data size = one padded row
        let mut bmp = vec![0u8; 58]; // 54 header + 4 pixel (3 + 1 padding)
        bmp[0] = b'B'; bmp[1] = b'M';
        bmp[2..6].copy_from_slice(&58u32.to_le_bytes()); // file size
        bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
        bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // info header size
        bmp[18..22].copy_from_slice(&1i32.to_le_bytes()); // width
        bmp[22..26].copy_from_slice(&1i32.to_le_bytes()); // height
        bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
        bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
        bmp[34..38].copy_from_slice(&4u32.to_le_bytes()); // data size
        bmp[54] = 0xff; bmp[55] = 0x00; bmp[56] = 0x00; // BGR
        fs::write(format!("{dir}/bmp_1x1.bmp"), bmp).unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
        fs::write(format!("{dir}/p6_crlf.bin"), b"P6\r\n1 1\r\n255\r\n\x00\x00\x00").unwrap();
        fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
        fs::write(format!("{dir}/jpeg_soi_only.bin"), b"\xff\xd8\xff").unwrap();

        println!("Generated seed corpus in {dir}/");
    }
}
