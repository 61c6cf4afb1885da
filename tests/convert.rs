use std::fs;

use imgconv::*;

fn white_ppm() -> Vec<u8> {
    let mut ppm = b"P6\n2 2\n255\n".to_vec();
    ppm.extend_from_slice(&[0xFF; 12]);
    ppm
}

#[test]
fn ppm_to_bmp_to_ppm_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("white.ppm");
    let mid = dir.path().join("white.bmp");
    let dst = dir.path().join("again.ppm");
    fs::write(&src, white_ppm()).unwrap();

    let done = ConvertRequest::new(&src, &mid).run().unwrap();
    assert_eq!(
        done,
        Converted {
            from: Format::Ppm,
            to: Format::Bmp,
            width: 2,
            height: 2
        }
    );
    ConvertRequest::new(&mid, &dst).run().unwrap();

    assert_eq!(fs::read(&dst).unwrap(), white_ppm());
    assert_eq!(Codec::Ppm.load(&dst), Codec::Ppm.load(&src));
}

#[test]
fn unknown_input_is_rejected_before_io() {
    let dir = tempfile::tempdir().unwrap();
    // Does not exist; an unknown extension must fail without trying to open it.
    let src = dir.path().join("picture.png");
    let dst = dir.path().join("out.bmp");

    let err = ConvertRequest::new(&src, &dst).run().unwrap_err();
    assert!(matches!(err, ConvertError::UnknownInputFormat(_)));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(err.kind(), ErrorKind::UnresolvedFormat);
    assert!(!dst.exists());
}

#[test]
fn unknown_output_is_rejected_before_io() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("missing.ppm");
    let dst = dir.path().join("out.JPG");

    // The input does not exist either; both formats resolve before any I/O.
    let err = ConvertRequest::new(&src, &dst).run().unwrap_err();
    assert!(matches!(err, ConvertError::UnknownOutputFormat(_)));
    assert_eq!(err.exit_code(), 3);
    assert!(!dst.exists());
}

#[test]
fn load_failure_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("broken.bmp");
    fs::write(&src, b"BM but far too short").unwrap();
    let dst = dir.path().join("out.ppm");

    let err = ConvertRequest::new(&src, &dst).run().unwrap_err();
    assert!(matches!(err, ConvertError::Load(_)));
    assert_eq!(err.exit_code(), 4);
    assert_eq!(err.kind(), ErrorKind::TruncatedData);
    assert!(!dst.exists());
}

#[test]
fn empty_input_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("empty.bmp");
    assert!(Codec::Bmp.save(&src, &Image::default()));
    let dst = dir.path().join("out.ppm");

    let err = ConvertRequest::new(&src, &dst).run().unwrap_err();
    assert!(matches!(err, ConvertError::Load(CodecError::EmptyImage)));
    assert_eq!(err.exit_code(), 4);
    assert!(!dst.exists());

    // Zero width with a height is still empty
    let tall = dir.path().join("tall.ppm");
    fs::write(&tall, b"P6\n0 3\n255\n").unwrap();
    let err = ConvertRequest::new(&tall, &dst).run().unwrap_err();
    assert_eq!(err.exit_code(), 4);
    assert!(!dst.exists());
}

#[test]
fn save_failure_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("white.ppm");
    fs::write(&src, white_ppm()).unwrap();
    let dst = dir.path().join("missing-dir").join("out.bmp");

    let err = ConvertRequest::new(&src, &dst).run().unwrap_err();
    assert!(matches!(err, ConvertError::Save(_)));
    assert_eq!(err.exit_code(), 5);
    assert_eq!(err.kind(), ErrorKind::Open);
}

#[test]
fn limits_apply_to_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("white.ppm");
    fs::write(&src, white_ppm()).unwrap();
    let dst = dir.path().join("out.bmp");

    let limits = Limits {
        max_width: Some(1),
        ..Default::default()
    };
    let err = ConvertRequest::new(&src, &dst)
        .with_limits(&limits)
        .run()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Limits);
    assert!(!dst.exists());
}

#[cfg(feature = "jpeg")]
#[test]
fn bmp_to_jpeg_to_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let bmp = dir.path().join("flat.bmp");
    let jpg = dir.path().join("flat.jpeg");
    let ppm = dir.path().join("flat.ppm");

    let img = Image::new(24, 8, Color::new(30, 160, 90, 255)).unwrap();
    assert!(Codec::Bmp.save(&bmp, &img));

    ConvertRequest::new(&bmp, &jpg)
        .with_jpeg_quality(95)
        .run()
        .unwrap();
    let done = ConvertRequest::new(&jpg, &ppm).run().unwrap();
    assert_eq!((done.width, done.height), (24, 8));

    let back = Codec::Ppm.load(&ppm);
    let p = back.pixel(12, 4).unwrap();
    assert!((i32::from(p.g) - 160).abs() < 10, "g = {}", p.g);
}
