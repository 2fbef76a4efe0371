//! # WebP → GIF 转换模块
//!
//! ## 设计思路
//!
//! - 动图：按源顺序逐帧解码，转为 RGB（透明度直接丢弃，不做合成），
//!   每帧保留自己的时长，输出无限循环的多帧 GIF
//! - 静态图：单帧 RGB，输出不带循环扩展、不带延时的单帧 GIF
//!
//! ## 实现思路
//!
//! 编码在内存中完成，成功后再原子落盘；任何一帧失败都会中止整个文件。

use std::path::Path;
use std::time::Instant;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbImage};

use super::handle::RgbFrame;
use super::output::PendingOutput;
use super::{ConvertError, WebPConverter, WebPKind};

impl WebPConverter {
    /// 将 WebP（静态或动图）转换为 GIF。
    pub fn convert_to_gif(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<(), ConvertError> {
        let (input, output) = (input.as_ref(), output.as_ref());
        let total_start = Instant::now();

        let handle = self.open(input)?;
        let kind = handle.kind();

        let bytes = match kind {
            WebPKind::Animated => {
                let frames = handle.into_rgb_frames(&self.config)?;
                log::info!("🎞️ 动图共 {} 帧", frames.len());
                encode_animated_gif(&frames, self.config.gif_quantizer_speed())?
            }
            WebPKind::Static => {
                let rgb = handle.into_image()?.to_rgb8();
                encode_static_gif(rgb, self.config.gif_quantizer_speed())?
            }
        };

        PendingOutput::write(output, &bytes)?.commit()?;

        log::info!(
            "✅ GIF 转换完成 - {} -> {} 类型: {} 耗时: {}ms",
            input.display(),
            output.display(),
            kind,
            total_start.elapsed().as_millis()
        );

        Ok(())
    }
}

/// 多帧 GIF：无限循环，每帧独立时长。
fn encode_animated_gif(frames: &[RgbFrame], speed: i32) -> Result<Vec<u8>, ConvertError> {
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut bytes, speed);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| ConvertError::Encode(format!("写入循环扩展失败：{}", e)))?;

        for (index, frame) in frames.iter().enumerate() {
            let rgba = DynamicImage::ImageRgb8(frame.image.clone()).to_rgba8();
            let delay = Delay::from_numer_denom_ms(frame.duration_ms, 1);
            encoder
                .encode_frame(Frame::from_parts(rgba, 0, 0, delay))
                .map_err(|e| ConvertError::Encode(format!("第 {} 帧编码失败：{}", index, e)))?;
        }
    }
    Ok(bytes)
}

/// 单帧 GIF：不写循环扩展，延时为 0。
fn encode_static_gif(rgb: RgbImage, speed: i32) -> Result<Vec<u8>, ConvertError> {
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut bytes, speed);
        let rgba = DynamicImage::ImageRgb8(rgb).to_rgba8();
        encoder
            .encode_frame(Frame::new(rgba))
            .map_err(|e| ConvertError::Encode(format!("GIF 编码失败：{}", e)))?;
    }
    Ok(bytes)
}
