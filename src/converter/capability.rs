//! # 编解码能力检查
//!
//! 启动时确认 `image` 编译进了所需的编解码器，缺失时以独立退出码报告，
//! 而不是在转换中途失败。

use image::ImageFormat;

/// 一项编解码能力。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    DecodeWebP,
    EncodeJpeg,
    EncodeGif,
}

impl Codec {
    fn is_available(self) -> bool {
        match self {
            Self::DecodeWebP => ImageFormat::WebP.reading_enabled(),
            Self::EncodeJpeg => ImageFormat::Jpeg.writing_enabled(),
            Self::EncodeGif => ImageFormat::Gif.writing_enabled(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::DecodeWebP => "WebP 解码",
            Self::EncodeJpeg => "JPEG 编码",
            Self::EncodeGif => "GIF 编码",
        }
    }
}

/// 检查所需能力，返回缺失项的描述列表。
pub fn missing_codecs(required: &[Codec]) -> Vec<&'static str> {
    required
        .iter()
        .filter(|codec| !codec.is_available())
        .map(|codec| codec.describe())
        .collect()
}
