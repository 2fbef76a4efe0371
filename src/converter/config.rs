//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `ConvertConfig`，保证转换行为可观测、可调整、可测试。
//! 其中 GIF 的默认帧时长与调色板优化开关原本是写死的默认值，这里改为可配置字段，
//! 由命令行参数覆盖。
//!
//! ## 实现思路
//!
//! - `Default` 提供与原脚本一致的默认行为。
//! - `gif_quantizer_speed` 将“是否优化调色板”映射为编码器的量化速度参数。

/// JPEG 合成透明像素时使用的默认背景色（白色）。
pub const DEFAULT_BACKGROUND: [u8; 3] = [255, 255, 255];

/// 源文件缺少帧时长信息时使用的默认值（毫秒）。
pub const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// 未显式指定时的 JPEG 质量。
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// WebP 画布单边最大 16383 像素，默认像素上限不应拒绝任何合法画布。
pub const MAX_WEBP_CANVAS_PIXELS: u64 = 16383 * 16383;

/// GIF 量化速度：追求最佳调色板（慢）。
const GIF_SPEED_OPTIMIZED: i32 = 1;
/// GIF 量化速度：默认取值，与 `gif` crate 推荐值一致。
const GIF_SPEED_DEFAULT: i32 = 10;

/// 转换配置。
///
/// 字段覆盖了读取、解码、JPEG 合成与 GIF 编码四个阶段。
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// 读取原始字节时允许的最大文件体积（字节），`None` 表示不限制。
    pub max_file_size: Option<u64>,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// JPEG 输出时透明像素合成所用的背景色。
    pub background: [u8; 3],
    /// 未显式指定时的 JPEG 质量。
    pub default_jpeg_quality: u8,
    /// 动图帧缺少时长信息时的兜底时长（毫秒）。
    pub default_frame_duration_ms: u32,
    /// 是否在 GIF 编码时追求更优的调色板（更慢）。
    pub optimize_gif_palette: bool,
    /// 是否将源文件中的 EXIF 原样写入 JPEG。
    pub preserve_exif: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            max_file_size: None,
            max_decoded_pixels: MAX_WEBP_CANVAS_PIXELS,
            background: DEFAULT_BACKGROUND,
            default_jpeg_quality: DEFAULT_JPEG_QUALITY,
            default_frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
            optimize_gif_palette: false,
            preserve_exif: true,
        }
    }
}

impl ConvertConfig {
    /// 调色板优化开关对应的 GIF 量化速度（1 最慢最精细，30 最快）。
    pub(crate) fn gif_quantizer_speed(&self) -> i32 {
        if self.optimize_gif_palette {
            GIF_SPEED_OPTIMIZED
        } else {
            GIF_SPEED_DEFAULT
        }
    }

    /// 为零时长的帧挑选实际写入的时长。
    pub(crate) fn frame_duration_or_default(&self, duration_ms: u32) -> u32 {
        if duration_ms == 0 {
            self.default_frame_duration_ms
        } else {
            duration_ms
        }
    }
}
