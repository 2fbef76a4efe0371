//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载检测/转换链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧（命令行入口）可按分支映射退出码。

/// 转换链路统一错误类型。
///
/// 该类型会在命令行层被上转为 `AppError`，再映射为各工具约定的退出码。
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("文件不存在：{0}")]
    NotFound(String),

    #[error("JPEG 质量必须在 1 到 100 之间，当前为 {0}")]
    InvalidQuality(i64),

    #[error("文件不是 WebP 格式：{0}")]
    NotWebP(String),

    #[error("检测到动图 WebP，请改用 GIF 转换：{0}")]
    UnsupportedAnimated(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}
