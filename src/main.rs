//! # webp2gifjpeg 目录批量转换入口
//!
//! 递归处理目录中的所有 WebP：静态图转 JPEG，动图转 GIF。
//! 单文件工具见 `src/bin/`。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use webp2gifjpeg::batch::{self, BatchOptions};
use webp2gifjpeg::cli;
use webp2gifjpeg::converter::capability::Codec;
use webp2gifjpeg::converter::{ConvertConfig, JpegQuality, WebPConverter, WebPKind};
use webp2gifjpeg::error::{AppError, Tool};

#[derive(Debug, Parser)]
#[command(name = "webp2gifjpeg", version, about = "批量将 WebP 转换为 JPEG（静态）或 GIF（动图）")]
struct Args {
    /// 要处理的目录
    #[arg(long, default_value = ".")]
    dir: PathBuf,
    /// 静态图的 JPEG 质量（1-100）
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    quality: i64,
    /// 转换成功后保留原始 WebP
    #[arg(long)]
    keep_original: bool,
}

fn main() -> ExitCode {
    cli::run::<Args, _>(
        Tool::Batch,
        &[Codec::DecodeWebP, Codec::EncodeJpeg, Codec::EncodeGif],
        |args| {
            let options = BatchOptions {
                quality: JpegQuality::new(args.quality)?,
                keep_original: args.keep_original,
            };

            let root = std::fs::canonicalize(&args.dir).map_err(|e| {
                AppError::Usage(format!("无法访问目录 {}：{}", args.dir.display(), e))
            })?;

            println!("处理目录: {}", root.display());
            println!("JPEG 质量: {}\n", options.quality.get());

            let converter = WebPConverter::new(ConvertConfig::default());
            let stats = batch::process_directory(&converter, &root, options, |index, total, outcome| {
                println!("处理中 [{}/{}]: {}", index, total, outcome.path.display());
                match (&outcome.result.message, outcome.kind) {
                    (Some(message), _) => println!("  错误: {}", message),
                    (None, Some(WebPKind::Static)) => {
                        println!("  类型: 静态 → JPEG（质量 {}）", options.quality.get())
                    }
                    (None, Some(WebPKind::Animated)) => println!("  类型: 动图 → GIF"),
                    (None, None) => {}
                }
            })?;

            println!("\n汇总:");
            println!("  转换成功: {} 个文件", stats.total_processed);
            println!("  静态 → JPEG: {}", stats.static_count);
            println!("  动图 → GIF: {}", stats.animated_count);
            println!("  失败: {}", stats.error_count);

            Ok(ExitCode::SUCCESS)
        },
    )
}
