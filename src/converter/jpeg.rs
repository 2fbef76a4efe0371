//! # WebP → JPEG 转换模块
//!
//! ## 设计思路
//!
//! JPEG 不支持透明通道，也不支持多帧：
//! - 动图直接拒绝（`UnsupportedAnimated`），绝不静默只取第一帧
//! - 带 alpha 的像素按 alpha 与背景色（默认白色）混合为不透明 RGB
//! - 不带 alpha 但非 RGB 的像素模式（如灰度）无损扩展为 RGB
//!
//! ## 实现思路
//!
//! 1. 加载并打开句柄（存在性 / 格式 / 尺寸校验）
//! 2. 拒绝动图
//! 3. 读取 EXIF（按配置）
//! 4. 解码 → 合成/转换为 RGB
//! 5. 内存中编码 JPEG，追加 EXIF APP1 段
//! 6. 临时文件写入后原子重命名

use std::path::Path;
use std::time::Instant;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage, RgbaImage};

use super::exif::embed_exif;
use super::output::PendingOutput;
use super::{ConvertError, JpegQuality, WebPConverter, WebPKind};

impl WebPConverter {
    /// 将静态 WebP 转换为 JPEG。
    pub fn convert_to_jpeg(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        quality: JpegQuality,
    ) -> Result<(), ConvertError> {
        let (input, output) = (input.as_ref(), output.as_ref());
        let total_start = Instant::now();

        let load_start = Instant::now();
        let mut handle = self.open(input)?;
        let load_ms = load_start.elapsed().as_millis();

        if handle.kind() == WebPKind::Animated {
            return Err(ConvertError::UnsupportedAnimated(input.display().to_string()));
        }

        let exif = if self.config.preserve_exif {
            handle.exif()?
        } else {
            None
        };

        let decode_start = Instant::now();
        let decoded = handle.into_image()?;
        let rgb = flatten_to_rgb(decoded, self.config.background);
        let decode_ms = decode_start.elapsed().as_millis();

        let encode_start = Instant::now();
        let mut bytes = encode_jpeg(&rgb, quality)?;
        if let Some(exif) = exif.as_deref() {
            bytes = embed_exif(bytes, exif)?;
            log::debug!("📎 已写入 EXIF：{} 字节", exif.len());
        }
        PendingOutput::write(output, &bytes)?.commit()?;
        let encode_ms = encode_start.elapsed().as_millis();

        log::info!(
            "✅ JPEG 转换完成 - {} -> {} 尺寸: {}x{} 质量: {} 耗时: load={}ms decode={}ms encode={}ms total={}ms",
            input.display(),
            output.display(),
            rgb.width(),
            rgb.height(),
            quality.get(),
            load_ms,
            decode_ms,
            encode_ms,
            total_start.elapsed().as_millis()
        );

        Ok(())
    }
}

/// 将任意像素模式转换为不透明 RGB。
///
/// 带 alpha 时与 `background` 混合；否则直接无损转换。
pub fn flatten_to_rgb(image: DynamicImage, background: [u8; 3]) -> RgbImage {
    if image.color().has_alpha() {
        composite_on_background(&image.to_rgba8(), background)
    } else {
        match image {
            DynamicImage::ImageRgb8(rgb) => rgb,
            other => other.to_rgb8(),
        }
    }
}

/// 逐像素 alpha 混合：`out = a * src + (1 - a) * bg`。
///
/// 使用整数四舍五入：alpha 为 0 时结果严格等于背景色，为 255 时严格等于源像素。
pub fn composite_on_background(rgba: &RgbaImage, background: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        image::Rgb([
            blend_channel(r, background[0], a),
            blend_channel(g, background[1], a),
            blend_channel(b, background[2], a),
        ])
    })
}

fn blend_channel(src: u8, bg: u8, alpha: u8) -> u8 {
    let alpha = alpha as u32;
    ((src as u32 * alpha + bg as u32 * (255 - alpha) + 127) / 255) as u8
}

fn encode_jpeg(rgb: &RgbImage, quality: JpegQuality) -> Result<Vec<u8>, ConvertError> {
    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality.get());
    encoder
        .encode_image(rgb)
        .map_err(|e| ConvertError::Encode(format!("JPEG 编码失败：{}", e)))?;
    Ok(bytes)
}
