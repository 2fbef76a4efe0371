// End-to-end conversions through the library API on generated WebP fixtures.

mod common;

use std::io::{BufReader, Cursor};

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ColorType, GenericImageView};
use webp2gifjpeg::converter::{
    ConversionRequest, ConvertConfig, ConvertError, JpegQuality, WebPConverter, WebPKind,
};

use common::{animated_webp, contains, scratch_dir, solid, static_rgb_webp, static_webp, static_webp_with_exif, write};

const NETSCAPE_LOOP_FOREVER: &[u8] = b"NETSCAPE2.0\x03\x01\x00\x00";

fn gif_durations(bytes: &[u8]) -> Vec<u32> {
    GifDecoder::new(Cursor::new(bytes))
        .expect("gif decoder init failed")
        .into_frames()
        .collect_frames()
        .expect("gif decode failed")
        .iter()
        .map(|frame| {
            let (numer, denom) = frame.delay().numer_denom_ms();
            numer / denom
        })
        .collect()
}

fn five_frame_animation() -> Vec<u8> {
    animated_webp(&[
        (solid(8, 8, [255, 0, 0, 255]), 100),
        (solid(8, 8, [0, 255, 0, 255]), 100),
        (solid(8, 8, [0, 0, 255, 255]), 150),
        (solid(8, 8, [255, 255, 0, 255]), 100),
        (solid(8, 8, [0, 255, 255, 255]), 100),
    ])
}

#[test]
fn detect_reports_static_and_animated() {
    let dir = scratch_dir("detect");
    let still = dir.join("still.webp");
    let anim = dir.join("anim.webp");
    write(&still, &static_webp(&solid(4, 4, [1, 2, 3, 255])));
    write(&anim, &five_frame_animation());

    let converter = WebPConverter::default();

    assert_eq!(converter.detect(&still).expect("detect failed"), WebPKind::Static);
    assert_eq!(converter.detect(&anim).expect("detect failed"), WebPKind::Animated);
}

#[test]
fn detect_rejects_missing_and_foreign_files() {
    let dir = scratch_dir("detect-errors");
    let png = dir.join("fake.webp");
    let mut png_bytes = Vec::new();
    image::DynamicImage::ImageRgba8(solid(2, 2, [0, 0, 0, 255]))
        .write_to(&mut Cursor::new(&mut png_bytes), image::ImageFormat::Png)
        .expect("png encode failed");
    write(&png, &png_bytes);

    let converter = WebPConverter::default();

    assert!(matches!(
        converter.detect(dir.join("missing.webp")),
        Err(ConvertError::NotFound(_))
    ));
    assert!(matches!(converter.detect(&png), Err(ConvertError::NotWebP(_))));
}

#[test]
fn opaque_webp_round_trips_to_rgb_jpeg() {
    let dir = scratch_dir("jpeg-opaque");
    let input = dir.join("photo.webp");
    let output = dir.join("photo.jpg");
    write(&input, &static_rgb_webp(&image::RgbImage::from_fn(100, 100, |x, y| {
        image::Rgb([x as u8, y as u8, 128])
    })));

    let quality = JpegQuality::new(85).expect("valid quality");
    WebPConverter::default()
        .convert_to_jpeg(&input, &output, quality)
        .expect("convert failed");

    let jpeg = image::open(&output).expect("jpeg reopen failed");
    assert_eq!(jpeg.dimensions(), (100, 100));
    assert_eq!(jpeg.color(), ColorType::Rgb8);
}

#[test]
fn rgba_webp_scenario_produces_rgb_jpeg() {
    let dir = scratch_dir("jpeg-rgba");
    let input = dir.join("photo.webp");
    let output = dir.join("photo.jpg");
    write(&input, &static_webp(&image::RgbaImage::from_fn(100, 100, |x, _| {
        image::Rgba([200, 40, 40, if x < 50 { 255 } else { 90 }])
    })));

    let request = ConversionRequest::jpeg(&input, &output, JpegQuality::new(85).expect("valid"));
    WebPConverter::default().convert(&request).expect("convert failed");

    let jpeg = image::open(&output).expect("jpeg reopen failed");
    assert_eq!(jpeg.dimensions(), (100, 100));
    assert_eq!(jpeg.color(), ColorType::Rgb8);
}

#[test]
fn transparent_pixels_become_white() {
    let dir = scratch_dir("jpeg-transparent");
    let input = dir.join("clear.webp");
    let output = dir.join("clear.jpg");
    write(&input, &static_webp(&solid(16, 16, [12, 34, 56, 0])));

    WebPConverter::default()
        .convert_to_jpeg(&input, &output, JpegQuality::default())
        .expect("convert failed");

    let rgb = image::open(&output).expect("jpeg reopen failed").to_rgb8();
    for pixel in rgb.pixels() {
        assert!(pixel.0.iter().all(|&c| c >= 250), "pixel {:?} is not white", pixel.0);
    }
}

#[test]
fn animated_input_is_refused_by_jpeg_converter() {
    let dir = scratch_dir("jpeg-animated");
    let input = dir.join("anim.webp");
    let output = dir.join("anim.jpg");
    write(&input, &five_frame_animation());

    let result = WebPConverter::default().convert_to_jpeg(&input, &output, JpegQuality::default());

    assert!(matches!(result, Err(ConvertError::UnsupportedAnimated(_))));
    assert!(!output.exists());
    assert!(!dir.join("anim.jpg.tmp").exists());
}

#[test]
fn exif_is_copied_into_jpeg() {
    let dir = scratch_dir("jpeg-exif");
    let exif = b"II*\x00\x08\x00\x00\x00\x00\x00webp2gifjpeg-exif";
    let input = dir.join("exif.webp");
    let output = dir.join("exif.jpg");
    write(&input, &static_webp_with_exif(&solid(8, 8, [10, 20, 30, 255]), exif));

    WebPConverter::default()
        .convert_to_jpeg(&input, &output, JpegQuality::default())
        .expect("convert failed");

    let bytes = std::fs::read(&output).expect("read jpeg failed");
    let mut expected = b"Exif\0\0".to_vec();
    expected.extend_from_slice(exif);
    assert!(contains(&bytes, &expected));
    assert!(image::open(&output).is_ok());
}

#[test]
fn exif_is_skipped_when_absent_or_disabled() {
    let dir = scratch_dir("jpeg-no-exif");
    let plain = dir.join("plain.webp");
    let tagged = dir.join("tagged.webp");
    write(&plain, &static_webp(&solid(8, 8, [10, 20, 30, 255])));
    write(&tagged, &static_webp_with_exif(&solid(8, 8, [10, 20, 30, 255]), b"II*\x00\x08\x00\x00\x00"));

    WebPConverter::default()
        .convert_to_jpeg(&plain, dir.join("plain.jpg"), JpegQuality::default())
        .expect("convert failed");

    let config = ConvertConfig {
        preserve_exif: false,
        ..ConvertConfig::default()
    };
    WebPConverter::new(config)
        .convert_to_jpeg(&tagged, dir.join("tagged.jpg"), JpegQuality::default())
        .expect("convert failed");

    for name in ["plain.jpg", "tagged.jpg"] {
        let bytes = std::fs::read(dir.join(name)).expect("read jpeg failed");
        assert!(!contains(&bytes, b"Exif\0\0"), "{} carries EXIF", name);
    }
}

#[test]
fn animated_scenario_keeps_frames_durations_and_loop() {
    let dir = scratch_dir("gif-animated");
    let input = dir.join("anim.webp");
    let output = dir.join("anim.gif");
    write(&input, &five_frame_animation());

    WebPConverter::default()
        .convert_to_gif(&input, &output)
        .expect("convert failed");

    let bytes = std::fs::read(&output).expect("read gif failed");
    assert!(contains(&bytes, NETSCAPE_LOOP_FOREVER));
    assert_eq!(gif_durations(&bytes), vec![100, 100, 150, 100, 100]);

    let frames = GifDecoder::new(BufReader::new(Cursor::new(bytes)))
        .expect("gif decoder init failed")
        .into_frames()
        .collect_frames()
        .expect("gif decode failed");
    let first = frames[0].buffer().get_pixel(4, 4).0;
    let third = frames[2].buffer().get_pixel(4, 4).0;
    assert!(first[0] > 200 && first[2] < 60, "first frame should be red: {:?}", first);
    assert!(third[2] > 200 && third[0] < 60, "third frame should be blue: {:?}", third);
}

#[test]
fn missing_frame_durations_use_configured_default() {
    let dir = scratch_dir("gif-default-duration");
    let input = dir.join("anim.webp");
    write(&input, &animated_webp(&[
        (solid(4, 4, [255, 0, 0, 255]), 0),
        (solid(4, 4, [0, 255, 0, 255]), 60),
    ]));

    WebPConverter::default()
        .convert_to_gif(&input, dir.join("default.gif"))
        .expect("convert failed");
    let bytes = std::fs::read(dir.join("default.gif")).expect("read gif failed");
    assert_eq!(gif_durations(&bytes), vec![100, 60]);

    let config = ConvertConfig {
        default_frame_duration_ms: 40,
        optimize_gif_palette: true,
        ..ConvertConfig::default()
    };
    WebPConverter::new(config)
        .convert_to_gif(&input, dir.join("custom.gif"))
        .expect("convert failed");
    let bytes = std::fs::read(dir.join("custom.gif")).expect("read gif failed");
    assert_eq!(gif_durations(&bytes), vec![40, 60]);
}

#[test]
fn static_webp_becomes_single_frame_gif() {
    let dir = scratch_dir("gif-static");
    let input = dir.join("still.webp");
    let output = dir.join("still.gif");
    write(&input, &static_webp(&solid(6, 5, [0, 128, 255, 120])));

    WebPConverter::default()
        .convert(&ConversionRequest::gif(&input, &output))
        .expect("convert failed");

    let bytes = std::fs::read(&output).expect("read gif failed");
    assert!(!contains(&bytes, b"NETSCAPE2.0"));

    let frames = GifDecoder::new(Cursor::new(bytes))
        .expect("gif decoder init failed")
        .into_frames()
        .collect_frames()
        .expect("gif decode failed");
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].buffer().dimensions(), (6, 5));
}

#[test]
fn gif_converter_reports_missing_input() {
    let dir = scratch_dir("gif-missing");
    let output = dir.join("out.gif");

    let result = WebPConverter::default().convert_to_gif(dir.join("nope.webp"), &output);

    assert!(matches!(result, Err(ConvertError::NotFound(_))));
    assert!(!output.exists());
}
