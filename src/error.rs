//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，作为所有命令行入口的返回错误类型。
//! 每个工具的退出码约定不同（检测工具 2 表示错误，转换工具 1 表示失败），
//! 因此退出码映射放在这里集中维护，而不是散落在各个 `main` 中。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ConvertError` / `std::io::Error` 提供 `From` 转换，无需手动 map。
//! - `exit_code` 按工具返回固定退出码，保证进程总以文档约定的退出码结束。

use crate::converter::ConvertError;

/// 编解码能力缺失时所有工具共用的退出码。
pub const EXIT_MISSING_DEPENDENCY: u8 = 3;

/// 命令行工具标识。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// `detect_webp_type`：0 静态 / 1 动图 / 2 错误
    DetectWebPType,
    /// `webp_to_jpeg`：0 成功 / 1 失败
    WebPToJpeg,
    /// `webp_to_gif`：0 成功 / 1 失败
    WebPToGif,
    /// `webp2gifjpeg`：目录批量转换，0 成功 / 1 失败
    Batch,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Self::DetectWebPType => "detect_webp_type",
            Self::WebPToJpeg => "webp_to_jpeg",
            Self::WebPToGif => "webp_to_gif",
            Self::Batch => "webp2gifjpeg",
        }
    }

    /// 一般错误的退出码。
    pub fn failure_code(self) -> u8 {
        match self {
            Self::DetectWebPType => 2,
            Self::WebPToJpeg | Self::WebPToGif | Self::Batch => 1,
        }
    }

    /// `--help` / `--version` 的退出码。检测工具的 0 已表示“静态”，因此沿用错误码。
    pub fn help_code(self) -> u8 {
        match self {
            Self::DetectWebPType => 2,
            Self::WebPToJpeg | Self::WebPToGif | Self::Batch => 0,
        }
    }
}

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 编解码能力缺失（启动检查）
    #[error("缺少编解码能力: {0}")]
    MissingDependency(String),

    /// 参数个数或取值错误
    #[error("参数错误: {0}")]
    Usage(String),

    /// 检测 / 转换链路错误
    #[error("{0}")]
    Convert(#[from] ConvertError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 映射为指定工具的进程退出码。
    pub fn exit_code(&self, tool: Tool) -> u8 {
        match self {
            Self::MissingDependency(_) => EXIT_MISSING_DEPENDENCY,
            _ => tool.failure_code(),
        }
    }
}
