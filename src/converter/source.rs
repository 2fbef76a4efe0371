//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部请求”和“流水线中间结果”解耦：
//! - `ConversionRequest` 表示一次转换的输入/输出/选项，构造后不可变
//! - `RawImageData` 表示已加载但未解码的字节
//! - `WebPKind` 表示检测结果（静态 / 动图）
//! - `ConversionResult` 表示对外汇报的成功标志与诊断信息

use std::fmt;
use std::path::{Path, PathBuf};

use super::ConvertError;
use super::config::DEFAULT_JPEG_QUALITY;

/// WebP 子类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebPKind {
    Static,
    Animated,
}

impl WebPKind {
    /// 供调用方解析的稳定小写标记。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Animated => "animated",
        }
    }

    /// 解码器的动画标志是可选的，缺失时按静态处理。
    pub(crate) fn from_animation_flag(flag: Option<bool>) -> Self {
        if flag.unwrap_or(false) {
            Self::Animated
        } else {
            Self::Static
        }
    }
}

impl fmt::Display for WebPKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已校验的 JPEG 质量（1..=100）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegQuality(u8);

impl JpegQuality {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 100;

    /// # 示例
    /// ```rust
    /// use webp2gifjpeg::converter::JpegQuality;
    ///
    /// assert_eq!(JpegQuality::new(85).unwrap().get(), 85);
    /// assert!(JpegQuality::new(0).is_err());
    /// assert!(JpegQuality::new(101).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ConvertError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ConvertError::InvalidQuality(value));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for JpegQuality {
    fn default() -> Self {
        Self(DEFAULT_JPEG_QUALITY)
    }
}

/// 输出格式专属选项。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputOptions {
    Jpeg { quality: JpegQuality },
    Gif,
}

/// 一次转换请求。
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    input: PathBuf,
    output: PathBuf,
    options: OutputOptions,
}

impl ConversionRequest {
    pub fn jpeg(input: impl Into<PathBuf>, output: impl Into<PathBuf>, quality: JpegQuality) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options: OutputOptions::Jpeg { quality },
        }
    }

    pub fn gif(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options: OutputOptions::Gif,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn options(&self) -> OutputOptions {
        self.options
    }
}

/// 转换结果：成功标志 + 失败诊断，不存在“部分成功”。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub success: bool,
    pub message: Option<String>,
}

impl<T> From<Result<T, ConvertError>> for ConversionResult {
    fn from(result: Result<T, ConvertError>) -> Self {
        match result {
            Ok(_) => Self {
                success: true,
                message: None,
            },
            Err(err) => Self {
                success: false,
                message: Some(err.to_string()),
            },
        }
    }
}

/// 加载阶段输出：原始字节与来源路径。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源路径（用于日志与诊断）。
    pub(crate) path: PathBuf,
}
