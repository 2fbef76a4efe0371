// Shared fixtures: assemble static and animated WebP files in memory.
//
// Frames are encoded as lossless VP8L bitstreams by the `image` WebP encoder and
// wrapped in RIFF / VP8X / ANIM / ANMF / EXIF chunks by hand.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, RgbaImage};

const FLAG_ANIMATION: u8 = 1 << 1;
const FLAG_EXIF: u8 = 1 << 3;
const FLAG_ALPHA: u8 = 1 << 4;

/// ANMF flags: do not blend, do not dispose.
const ANMF_NO_BLEND: u8 = 1 << 1;

pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "webp2gifjpeg-it-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir failed");
    dir
}

pub fn write(path: &Path, bytes: &[u8]) {
    fs::write(path, bytes).expect("write fixture failed");
}

/// Simple-format (RIFF + VP8L) static WebP.
pub fn static_webp(image: &RgbaImage) -> Vec<u8> {
    let mut out = Vec::new();
    WebPEncoder::new_lossless(&mut out)
        .encode(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgba8)
        .expect("webp encode failed");
    out
}

/// Opaque RGB static WebP.
pub fn static_rgb_webp(image: &image::RgbImage) -> Vec<u8> {
    let mut out = Vec::new();
    WebPEncoder::new_lossless(&mut out)
        .encode(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgb8)
        .expect("webp encode failed");
    out
}

/// Extended-format static WebP carrying an EXIF chunk.
pub fn static_webp_with_exif(image: &RgbaImage, exif: &[u8]) -> Vec<u8> {
    let bitstream = vp8l_bitstream(image);

    let mut body = Vec::new();
    body.extend_from_slice(b"WEBP");
    write_chunk(
        &mut body,
        b"VP8X",
        &vp8x_payload(FLAG_EXIF | FLAG_ALPHA, image.width(), image.height()),
    );
    write_chunk(&mut body, b"VP8L", &bitstream);
    write_chunk(&mut body, b"EXIF", exif);

    riff(body)
}

/// Animated WebP; every frame covers the full canvas.
pub fn animated_webp(frames: &[(RgbaImage, u32)]) -> Vec<u8> {
    let (width, height) = frames[0].0.dimensions();

    let mut body = Vec::new();
    body.extend_from_slice(b"WEBP");
    write_chunk(
        &mut body,
        b"VP8X",
        &vp8x_payload(FLAG_ANIMATION | FLAG_ALPHA, width, height),
    );

    let mut anim = Vec::with_capacity(6);
    anim.extend_from_slice(&[0, 0, 0, 0]);
    anim.extend_from_slice(&0u16.to_le_bytes());
    write_chunk(&mut body, b"ANIM", &anim);

    for (image, duration_ms) in frames {
        let bitstream = vp8l_bitstream(image);

        let mut anmf = Vec::new();
        push_u24(&mut anmf, 0);
        push_u24(&mut anmf, 0);
        push_u24(&mut anmf, image.width() - 1);
        push_u24(&mut anmf, image.height() - 1);
        push_u24(&mut anmf, *duration_ms);
        anmf.push(ANMF_NO_BLEND);
        write_chunk(&mut anmf, b"VP8L", &bitstream);

        write_chunk(&mut body, b"ANMF", &anmf);
    }

    riff(body)
}

pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, image::Rgba(rgba))
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Pulls the VP8L payload out of the encoder's simple-format output.
fn vp8l_bitstream(image: &RgbaImage) -> Vec<u8> {
    let file = static_webp(image);
    assert_eq!(&file[0..4], b"RIFF");
    assert_eq!(&file[8..12], b"WEBP");

    let mut offset = 12;
    while offset + 8 <= file.len() {
        let fourcc = &file[offset..offset + 4];
        let size = u32::from_le_bytes([
            file[offset + 4],
            file[offset + 5],
            file[offset + 6],
            file[offset + 7],
        ]) as usize;
        let payload = &file[offset + 8..offset + 8 + size];
        if fourcc == b"VP8L" {
            return payload.to_vec();
        }
        offset += 8 + size + (size & 1);
    }
    panic!("encoder output has no VP8L chunk");
}

fn vp8x_payload(flags: u8, width: u32, height: u32) -> Vec<u8> {
    let mut payload = Vec::with_capacity(10);
    payload.push(flags);
    payload.extend_from_slice(&[0; 3]);
    push_u24(&mut payload, width - 1);
    push_u24(&mut payload, height - 1);
    payload
}

fn write_chunk(out: &mut Vec<u8>, fourcc: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(fourcc);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    if payload.len() % 2 == 1 {
        out.push(0);
    }
}

fn push_u24(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes()[..3]);
}

fn riff(body: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + 8);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(&body);
    out
}
