//! WebP（静态或动图）→ GIF。
//!
//! 用法：`webp_to_gif <input.webp> <output.gif>`，退出码：0 成功 / 1 失败。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use webp2gifjpeg::cli;
use webp2gifjpeg::converter::capability::Codec;
use webp2gifjpeg::converter::{
    ConversionRequest, ConvertConfig, DEFAULT_FRAME_DURATION_MS, WebPConverter,
};
use webp2gifjpeg::error::Tool;

#[derive(Debug, Parser)]
#[command(name = "webp_to_gif", version, about = "将 WebP（含动图）转换为 GIF")]
struct Args {
    /// 输入 WebP 文件
    input: PathBuf,
    /// 输出 GIF 文件
    output: PathBuf,
    /// 源帧缺少时长信息时使用的时长（毫秒）
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_FRAME_DURATION_MS,
          value_parser = clap::value_parser!(u32).range(1..))]
    default_duration: u32,
    /// 以更慢的量化换取更好的调色板
    #[arg(long)]
    optimize_palette: bool,
}

fn main() -> ExitCode {
    cli::run::<Args, _>(
        Tool::WebPToGif,
        &[Codec::DecodeWebP, Codec::EncodeGif],
        |args| {
            let config = ConvertConfig {
                default_frame_duration_ms: args.default_duration,
                optimize_gif_palette: args.optimize_palette,
                ..ConvertConfig::default()
            };

            let request = ConversionRequest::gif(args.input, args.output);
            WebPConverter::new(config).convert(&request)?;
            Ok(ExitCode::SUCCESS)
        },
    )
}
