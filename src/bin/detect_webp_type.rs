//! 检测 WebP 是静态图还是动图。
//!
//! stdout 只输出 `static` 或 `animated`，退出码：0 静态 / 1 动图 / 2 错误。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use webp2gifjpeg::cli;
use webp2gifjpeg::converter::capability::Codec;
use webp2gifjpeg::converter::{ConvertConfig, WebPConverter, WebPKind};
use webp2gifjpeg::error::Tool;

#[derive(Debug, Parser)]
#[command(name = "detect_webp_type", version, about = "检测 WebP 是静态图还是动图")]
struct Args {
    /// 输入 WebP 文件
    input: PathBuf,
}

fn main() -> ExitCode {
    cli::run::<Args, _>(Tool::DetectWebPType, &[Codec::DecodeWebP], |args| {
        let converter = WebPConverter::new(ConvertConfig::default());
        let kind = converter.detect(&args.input)?;

        println!("{}", kind);
        Ok(match kind {
            WebPKind::Static => ExitCode::from(0),
            WebPKind::Animated => ExitCode::from(1),
        })
    })
}
