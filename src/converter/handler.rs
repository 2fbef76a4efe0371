//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `WebPConverter` 只负责持有配置与分派请求，具体阶段分布在各子模块中：
//! - `loader`：读取与校验
//! - `probe`：类型检测
//! - `jpeg` / `gif`：两条转换链路
//!
//! 每次调用都是独立的一次性流程，不持有跨调用状态。

use super::{ConversionRequest, ConvertConfig, ConvertError, OutputOptions};

/// WebP 检测与转换入口。
#[derive(Debug, Clone, Default)]
pub struct WebPConverter {
    pub(super) config: ConvertConfig,
}

impl WebPConverter {
    /// # 示例
    /// ```rust
    /// use webp2gifjpeg::converter::{ConvertConfig, WebPConverter};
    ///
    /// let converter = WebPConverter::new(ConvertConfig::default());
    /// assert_eq!(converter.config().default_frame_duration_ms, 100);
    /// ```
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// 按请求中的输出选项分派到 JPEG 或 GIF 链路。
    pub fn convert(&self, request: &ConversionRequest) -> Result<(), ConvertError> {
        match request.options() {
            OutputOptions::Jpeg { quality } => {
                self.convert_to_jpeg(request.input(), request.output(), quality)
            }
            OutputOptions::Gif => self.convert_to_gif(request.input(), request.output()),
        }
    }
}
