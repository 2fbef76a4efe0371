//! # WebP 检测与转换模块（converter）
//!
//! ## 设计思路
//!
//! 该模块将“读取校验 → 类型检测 → 解码 → 像素转换 → 编码 → 原子落盘”
//! 按职责拆分为多个子模块，所有编解码工作交给 `image` crate。
//!
//! - `handler`：`WebPConverter` 入口与请求分派
//! - `loader`：文件读取、签名与尺寸校验
//! - `handle`：已打开的 WebP 句柄（格式 / 像素模式 / 动画标志 / EXIF / 帧）
//! - `probe`：静态 / 动图检测
//! - `jpeg`：WebP → JPEG（拒绝动图、透明合成、EXIF 透传）
//! - `gif`：WebP → GIF（逐帧时长、无限循环）
//! - `exif`：JPEG APP1 段写入
//! - `output`：临时文件 + 重命名
//! - `capability`：启动时编解码能力检查
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! bin/*.rs（参数解析 + 退出码）
//!    ↓
//! handler.rs（WebPConverter）
//!    ├─ loader.rs（存在性 + 体积 + 签名 + 格式标签）
//!    ├─ probe.rs / jpeg.rs / gif.rs
//!    └─ output.rs（PendingOutput 原子落盘）
//!    ↓
//! 返回 ConvertError，由 AppError 映射为退出码
//! ```

pub mod capability;
mod config;
mod error;
mod exif;
mod gif;
mod handle;
mod handler;
mod jpeg;
mod loader;
mod output;
mod probe;
mod source;

pub use config::{
    ConvertConfig, DEFAULT_BACKGROUND, DEFAULT_FRAME_DURATION_MS, DEFAULT_JPEG_QUALITY,
    MAX_WEBP_CANVAS_PIXELS,
};
pub use error::ConvertError;
pub use handle::{ImageHandle, RgbFrame};
pub use handler::WebPConverter;
pub use jpeg::{composite_on_background, flatten_to_rgb};
pub use source::{ConversionRequest, ConversionResult, JpegQuality, OutputOptions, WebPKind};
