//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理本地文件的原始字节加载，并在“尽可能早”的阶段执行输入校验。
//! 目标是尽快失败，让“文件不存在 / 不是图片 / 文件过大”不会伪装成下游的解码错误。
//!
//! ## 实现思路
//!
//! - 文件：存在性 + metadata 体积限制 + 读取。
//! - 签名：通过 magic bytes 提前拒绝非图片内容。
//! - 句柄：格式标签必须为 WebP，再按画布尺寸做像素上限检查。

use std::io::Cursor;
use std::path::Path;

use image::codecs::webp::WebPDecoder;
use image::{ImageDecoder, ImageFormat};

use super::handle::ImageHandle;
use super::source::RawImageData;
use super::{ConvertConfig, ConvertError, WebPConverter};

impl WebPConverter {
    /// 从本地文件加载图片原始字节。
    pub(super) fn load_from_file(
        path: &Path,
        config: &ConvertConfig,
    ) -> Result<RawImageData, ConvertError> {
        log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

        Self::ensure_input_exists(path)?;

        let metadata = std::fs::metadata(path)
            .map_err(|e| ConvertError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if !metadata.is_file() {
            return Err(ConvertError::FileSystem(format!(
                "路径不是普通文件：{}",
                path.display()
            )));
        }

        if let Some(limit) = config.max_file_size {
            if metadata.len() > limit {
                return Err(ConvertError::ResourceLimit(format!(
                    "文件过大：{:.2} MB（限制：{:.2} MB）",
                    metadata.len() as f64 / 1024.0 / 1024.0,
                    limit as f64 / 1024.0 / 1024.0
                )));
            }
        }

        let bytes = std::fs::read(path)
            .map_err(|e| ConvertError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            path: path.to_path_buf(),
        })
    }

    /// 存在性检查，必须先于任何解码尝试。
    pub(super) fn ensure_input_exists(path: &Path) -> Result<(), ConvertError> {
        if !path.exists() {
            return Err(ConvertError::NotFound(path.display().to_string()));
        }
        Ok(())
    }

    /// 打开图片句柄：格式标签校验 + 尺寸上限检查。
    pub(super) fn open_handle(
        raw: RawImageData,
        config: &ConvertConfig,
    ) -> Result<ImageHandle, ConvertError> {
        let format = image::guess_format(&raw.bytes).map_err(|e| {
            ConvertError::NotWebP(format!("{}（{}）", raw.path.display(), e))
        })?;

        if format != ImageFormat::WebP {
            return Err(ConvertError::NotWebP(format!(
                "{}（检测到 {:?}）",
                raw.path.display(),
                format
            )));
        }

        let decoder = WebPDecoder::new(Cursor::new(raw.bytes))
            .map_err(|e| ConvertError::Decode(format!("无法打开 WebP 解码器：{}", e)))?;

        let (width, height) = decoder.dimensions();
        Self::validate_pixel_limits(config, width, height)?;

        Ok(ImageHandle::new(decoder, format, raw.path))
    }

    /// 通过文件签名（magic bytes）校验输入是否为图片。
    ///
    /// 无法识别的签名交给后续格式探测处理。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), ConvertError> {
        if bytes.is_empty() {
            return Err(ConvertError::Decode("图片内容为空".to_string()));
        }

        if let Some(kind) = infer::get(bytes) {
            if kind.matcher_type() != infer::MatcherType::Image {
                return Err(ConvertError::NotWebP(format!(
                    "文件签名不是图片类型：{}",
                    kind.mime_type()
                )));
            }
        }

        Ok(())
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(
        config: &ConvertConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ConvertError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| ConvertError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(ConvertError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}
