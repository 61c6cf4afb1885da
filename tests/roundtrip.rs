use enough::Unstoppable;
use imgconv::*;

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color { r, g, b, a: 255 }
}

fn assert_same_rgb(a: &Image, b: &Image) {
    assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    for (y, (ra, rb)) in a.rows().zip(b.rows()).enumerate() {
        for (x, (pa, pb)) in ra.iter().zip(rb).enumerate() {
            assert_eq!((pa.r, pa.g, pa.b), (pb.r, pb.g, pb.b), "pixel ({x}, {y})");
        }
    }
}

fn red_over_blue() -> Image {
    let mut img = Image::new(1, 2, rgb(0, 0, 0)).unwrap();
    img.row_mut(0)[0] = rgb(255, 0, 0);
    img.row_mut(1)[0] = rgb(0, 0, 255);
    img
}

#[test]
fn bmp_roundtrip_rgb() {
    let mut img = Image::new(3, 2, rgb(0, 0, 0)).unwrap();
    img.row_mut(0)
        .copy_from_slice(&[rgb(255, 0, 0), rgb(0, 255, 0), rgb(0, 0, 255)]);
    img.row_mut(1)
        .copy_from_slice(&[rgb(128, 128, 128), rgb(64, 64, 64), rgb(0, 0, 0)]);

    let encoded = bmp::encode(&img, Unstoppable).unwrap();
    assert_eq!(&encoded[0..2], b"BM");

    let decoded = bmp::decode(&encoded, None, Unstoppable).unwrap();
    assert_eq!(decoded, img);
}

#[test]
fn ppm_roundtrip_rgb() {
    let mut img = Image::new(4, 3, rgb(0, 0, 0)).unwrap();
    for y in 0..3 {
        for (x, px) in img.row_mut(y).iter_mut().enumerate() {
            *px = if (x as u32 + y) % 2 == 0 {
                rgb(255, 0, 128)
            } else {
                rgb(0, 200, 50)
            };
        }
    }

    let encoded = pnm::encode(&img, Unstoppable).unwrap();
    let decoded = pnm::decode(&encoded, None, Unstoppable).unwrap();
    assert_eq!(decoded, img);
}

#[test]
fn alpha_is_not_persisted() {
    let img = Image::new(2, 2, Color::new(10, 20, 30, 7)).unwrap();
    for codec in [Codec::Bmp, Codec::Ppm] {
        let bytes = codec
            .encode(&img, &EncodeOptions::default(), Unstoppable)
            .unwrap();
        let back = codec.decode(&bytes, None, Unstoppable).unwrap();
        assert_same_rgb(&img, &back);
        assert!(back.pixels().iter().all(|p| p.a == 255), "{codec:?}");
    }
}

#[test]
fn bmp_stores_bottom_row_first() {
    let encoded = bmp::encode(&red_over_blue(), Unstoppable).unwrap();
    // 1 px wide: 3 bytes + 1 padding per row
    assert_eq!(encoded.len(), 54 + 8);
    assert_eq!(&encoded[54..58], &[255, 0, 0, 0], "blue row (B,G,R) first");
    assert_eq!(&encoded[58..62], &[0, 0, 255, 0], "red row second");
}

#[test]
fn ppm_stores_top_row_first() {
    let encoded = pnm::encode(&red_over_blue(), Unstoppable).unwrap();
    let header = b"P6\n1 2\n255\n";
    assert_eq!(&encoded[..header.len()], header);
    assert_eq!(&encoded[header.len()..], &[255, 0, 0, 0, 0, 255]);
}

#[test]
fn zero_sized_images_roundtrip() {
    let empty = Image::default();

    let bmp_bytes = bmp::encode(&empty, Unstoppable).unwrap();
    assert_eq!(bmp_bytes.len(), 54);
    assert_eq!(&bmp_bytes[34..38], &0u32.to_le_bytes());
    let back = bmp::decode(&bmp_bytes, None, Unstoppable).unwrap();
    assert_eq!((back.width(), back.height()), (0, 0));

    let ppm_bytes = pnm::encode(&empty, Unstoppable).unwrap();
    assert_eq!(&ppm_bytes[..], b"P6\n0 0\n255\n");
    let back = pnm::decode(&ppm_bytes, None, Unstoppable).unwrap();
    assert_eq!((back.width(), back.height()), (0, 0));
}

#[test]
fn zero_width_keeps_height() {
    let img = Image::new(0, 3, rgb(0, 0, 0)).unwrap();
    for codec in [Codec::Bmp, Codec::Ppm] {
        let bytes = codec
            .encode(&img, &EncodeOptions::default(), Unstoppable)
            .unwrap();
        let back = codec.decode(&bytes, None, Unstoppable).unwrap();
        assert_eq!((back.width(), back.height()), (0, 3), "{codec:?}");
    }
}

#[test]
fn malformed_bmp_signature() {
    let mut bytes = bmp::encode(&red_over_blue(), Unstoppable).unwrap();
    bytes[0] = b'X';
    let err = bmp::decode(&bytes, None, Unstoppable).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedHeader);
}

#[test]
fn malformed_ppm_magic_and_maxval() {
    let p5 = b"P5\n1 1\n255\n\x00\x00\x00";
    assert_eq!(
        pnm::decode(p5, None, Unstoppable).unwrap_err().kind(),
        ErrorKind::MalformedHeader
    );

    let maxval = b"P6\n1 1\n254\n\x00\x00\x00";
    assert_eq!(
        pnm::decode(maxval, None, Unstoppable).unwrap_err().kind(),
        ErrorKind::MalformedHeader
    );
}

#[test]
fn white_ppm_to_bmp_and_back() {
    let mut ppm = b"P6\n2 2\n255\n".to_vec();
    ppm.extend_from_slice(&[0xFF; 12]);

    let original = pnm::decode(&ppm, None, Unstoppable).unwrap();
    let as_bmp = bmp::encode(&original, Unstoppable).unwrap();
    let from_bmp = bmp::decode(&as_bmp, None, Unstoppable).unwrap();
    assert_eq!(from_bmp, original);
    assert_eq!(pnm::encode(&from_bmp, Unstoppable).unwrap(), ppm);
}

#[test]
fn file_load_save_sentinels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pair.bmp");

    assert!(Codec::Bmp.save(&path, &red_over_blue()));
    let loaded = Codec::Bmp.load(&path);
    assert_same_rgb(&loaded, &red_over_blue());

    // Missing file: sentinel, no panic
    let missing = Codec::Ppm.load(dir.path().join("missing.ppm"));
    assert_eq!(missing, Image::default());

    // Wrong content for the codec: sentinel
    assert_eq!(Codec::Ppm.load(&path), Image::default());

    // Destination inside a non-existent directory
    assert!(!Codec::Ppm.save(dir.path().join("nope/out.ppm"), &red_over_blue()));
}

#[test]
fn try_load_reports_kinds() {
    let dir = tempfile::tempdir().unwrap();

    let err = Codec::Bmp
        .try_load(dir.path().join("absent.bmp"), None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Open);

    let truncated = dir.path().join("short.ppm");
    std::fs::write(&truncated, b"P6\n4 4\n255\n\x01\x02").unwrap();
    let err = Codec::Ppm.try_load(&truncated, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedData);

    let nowhere = dir.path().join("no/such/dir.bmp");
    let err = Codec::Bmp
        .try_save(nowhere, &red_over_blue(), &EncodeOptions::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Open);
}

#[cfg(feature = "jpeg")]
#[test]
fn jpeg_through_the_dispatcher() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.jpg");
    let img = Image::new(16, 16, rgb(200, 40, 40)).unwrap();

    let codec = resolve(&path).codec().unwrap();
    assert_eq!(codec, Codec::Jpeg);
    assert!(codec.save(&path, &img));

    let back = codec.load(&path);
    assert_eq!((back.width(), back.height()), (16, 16));
    let p = back.pixel(8, 8).unwrap();
    assert!((i32::from(p.r) - 200).abs() < 12, "r = {}", p.r);
}
