//! # 图片句柄模块
//!
//! ## 设计思路
//!
//! `ImageHandle` 独占一个已打开的 WebP 解码器，对外只暴露转换需要的属性：
//! 格式标签、像素模式、画布尺寸、动画标志与 EXIF。
//! 句柄按值消费（`into_image` / `into_rgb_frames`），离开作用域即释放，
//! 错误路径同样如此，不需要手动关闭。

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::webp::WebPDecoder;
use image::{AnimationDecoder, ColorType, DynamicImage, ImageDecoder, ImageFormat, RgbImage};

use super::{ConvertConfig, ConvertError, WebPKind};

/// 一帧已转换为 RGB 的动图画面及其显示时长。
#[derive(Debug, Clone)]
pub struct RgbFrame {
    pub image: RgbImage,
    pub duration_ms: u32,
}

/// 已打开的 WebP 图片。
pub struct ImageHandle {
    decoder: WebPDecoder<Cursor<Vec<u8>>>,
    format: ImageFormat,
    path: PathBuf,
}

impl ImageHandle {
    pub(super) fn new(
        decoder: WebPDecoder<Cursor<Vec<u8>>>,
        format: ImageFormat,
        path: PathBuf,
    ) -> Self {
        Self {
            decoder,
            format,
            path,
        }
    }

    /// 格式标签（打开时已确认为 WebP）。
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.decoder.dimensions()
    }

    /// 像素模式（是否带 alpha 由此判断）。
    pub fn color_type(&self) -> ColorType {
        self.decoder.color_type()
    }

    /// 解码器上报的动画标志。
    pub fn animation_flag(&self) -> Option<bool> {
        Some(self.decoder.has_animation())
    }

    pub fn kind(&self) -> WebPKind {
        WebPKind::from_animation_flag(self.animation_flag())
    }

    /// 读取内嵌 EXIF 原始字节（不存在时为 `None`）。
    pub fn exif(&mut self) -> Result<Option<Vec<u8>>, ConvertError> {
        self.decoder
            .exif_metadata()
            .map(|exif| exif.filter(|bytes| !bytes.is_empty()))
            .map_err(|e| ConvertError::Decode(format!("读取 EXIF 失败：{}", e)))
    }

    /// 解码单帧图片。
    pub fn into_image(self) -> Result<DynamicImage, ConvertError> {
        DynamicImage::from_decoder(self.decoder)
            .map_err(|e| ConvertError::Decode(format!("图片解码失败：{}", e)))
    }

    /// 按源顺序解码所有帧，每帧丢弃透明通道转为 RGB，并记录时长。
    pub fn into_rgb_frames(self, config: &ConvertConfig) -> Result<Vec<RgbFrame>, ConvertError> {
        let mut frames = Vec::new();

        for (index, frame) in self.decoder.into_frames().enumerate() {
            let frame = frame
                .map_err(|e| ConvertError::Decode(format!("第 {} 帧解码失败：{}", index, e)))?;

            let (numer, denom) = frame.delay().numer_denom_ms();
            let duration_ms = config.frame_duration_or_default(delay_to_millis(numer, denom));
            let image = DynamicImage::ImageRgba8(frame.into_buffer()).to_rgb8();

            log::debug!(
                "🎞️ 第 {} 帧：{}x{} 时长 {}ms",
                index,
                image.width(),
                image.height(),
                duration_ms
            );

            frames.push(RgbFrame { image, duration_ms });
        }

        if frames.is_empty() {
            return Err(ConvertError::Decode("动图中没有可用帧".to_string()));
        }

        Ok(frames)
    }
}

/// 将 `numer/denom` 毫秒四舍五入为整数毫秒。
fn delay_to_millis(numer: u32, denom: u32) -> u32 {
    if denom == 0 {
        return 0;
    }
    ((numer as u64 + denom as u64 / 2) / denom as u64) as u32
}
