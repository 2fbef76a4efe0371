//! 静态 WebP → JPEG。
//!
//! 用法：`webp_to_jpeg <input.webp> <output.jpg> [quality]`，退出码：0 成功 / 1 失败。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use webp2gifjpeg::cli;
use webp2gifjpeg::converter::capability::Codec;
use webp2gifjpeg::converter::{ConversionRequest, ConvertConfig, JpegQuality, WebPConverter};
use webp2gifjpeg::error::Tool;

#[derive(Debug, Parser)]
#[command(name = "webp_to_jpeg", version, about = "将静态 WebP 转换为 JPEG")]
struct Args {
    /// 输入 WebP 文件
    input: PathBuf,
    /// 输出 JPEG 文件
    output: PathBuf,
    /// JPEG 质量（1-100，默认 100）
    #[arg(allow_negative_numbers = true)]
    quality: Option<i64>,
}

fn main() -> ExitCode {
    cli::run::<Args, _>(
        Tool::WebPToJpeg,
        &[Codec::DecodeWebP, Codec::EncodeJpeg],
        |args| {
            let config = ConvertConfig::default();
            // 质量校验先于任何文件 I/O
            let quality =
                JpegQuality::new(args.quality.unwrap_or(config.default_jpeg_quality as i64))?;

            let request = ConversionRequest::jpeg(args.input, args.output, quality);
            WebPConverter::new(config).convert(&request)?;
            Ok(ExitCode::SUCCESS)
        },
    )
}
