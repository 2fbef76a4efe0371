//! # webp2gifjpeg 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      命令行入口                          │
//! │                                                          │
//! │  detect_webp_type   webp_to_jpeg   webp_to_gif           │
//! │          webp2gifjpeg（目录批量）                        │
//! │       │  (cli::run：日志 → 能力检查 → 参数 → 退出码)     │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↕ Result<_, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↕            库 (Rust)                             │
//! │                                                          │
//! │  ┌─ error ────── AppError + 各工具退出码                 │
//! │  │                                                       │
//! │  ├─ converter ── WebPConverter                           │
//! │  │   ├─ probe          静态 / 动图检测                   │
//! │  │   ├─ jpeg           透明合成 + EXIF 透传              │
//! │  │   └─ gif            逐帧时长 + 无限循环               │
//! │  │                                                       │
//! │  └─ batch              目录递归批量转换                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，以及各工具的退出码约定 |
//! | [`cli`] | 可执行文件共用的启动流程 |
//! | [`converter`] | WebP 检测、WebP → JPEG、WebP → GIF |
//! | [`batch`] | 目录扫描与批量转换统计 |

pub mod error;
pub mod batch;
pub mod cli;
pub mod converter;
