//! # 类型检测模块
//!
//! 打开文件、确认格式为 WebP、读取动画标志。标志缺失按静态处理。

use std::path::Path;

use super::{ConvertError, ImageHandle, WebPConverter, WebPKind};

impl WebPConverter {
    /// 打开 WebP 句柄：存在性、体积、签名、格式标签与尺寸均在此校验。
    pub fn open(&self, path: impl AsRef<Path>) -> Result<ImageHandle, ConvertError> {
        let raw = Self::load_from_file(path.as_ref(), &self.config)?;
        let handle = Self::open_handle(raw, &self.config)?;

        let (width, height) = handle.dimensions();
        log::debug!(
            "🖼️ 已打开 {} - 格式: {:?} 像素模式: {:?} 画布: {}x{}",
            handle.path().display(),
            handle.format(),
            handle.color_type(),
            width,
            height
        );

        Ok(handle)
    }

    /// 检测 WebP 是静态图还是动图。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use webp2gifjpeg::converter::{ConvertConfig, WebPConverter, WebPKind};
    ///
    /// let converter = WebPConverter::new(ConvertConfig::default());
    /// let kind = converter.detect("photo.webp")?;
    /// assert_eq!(kind, WebPKind::Static);
    /// # Ok::<(), webp2gifjpeg::converter::ConvertError>(())
    /// ```
    pub fn detect(&self, path: impl AsRef<Path>) -> Result<WebPKind, ConvertError> {
        let path = path.as_ref();
        let kind = self.open(path)?.kind();

        log::info!("🔍 类型检测完成 - {}: {}", path.display(), kind);
        Ok(kind)
    }
}
