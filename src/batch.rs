//! 目录批量转换模块
//!
//! # 设计思路
//!
//! 递归扫描目录中的 `.webp` 文件，按检测结果分流：
//! - 静态图 → 同名 `.jpg`
//! - 动图 → 同名 `.gif`
//!
//! 转换成功后默认删除原始 WebP。单个文件失败只计数，不中断整个目录。
//!
//! # 实现思路
//!
//! - 扫描阶段先收集并排序，保证处理顺序稳定、可复现。
//! - 逐个文件串行处理，每个文件的结果通过回调交给调用方展示。
//! - 输出文件经由 `PendingOutput` 原子落盘，删除原文件发生在落盘之后。

use std::fs;
use std::path::{Path, PathBuf};

use crate::converter::{ConversionResult, ConvertError, JpegQuality, WebPConverter, WebPKind};
use crate::error::AppError;

const WEBP_EXTENSION: &str = "webp";

/// 批量转换选项。
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub quality: JpegQuality,
    pub keep_original: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            quality: JpegQuality::default(),
            keep_original: false,
        }
    }
}

/// 单个文件的处理结果。
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub kind: Option<WebPKind>,
    pub output: Option<PathBuf>,
    pub result: ConversionResult,
}

/// 批量处理统计。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessStats {
    pub total_processed: usize,
    pub static_count: usize,
    pub animated_count: usize,
    pub error_count: usize,
}

impl ProcessStats {
    fn record(&mut self, outcome: &FileOutcome) {
        if !outcome.result.success {
            self.error_count += 1;
            return;
        }
        self.total_processed += 1;
        match outcome.kind {
            Some(WebPKind::Static) => self.static_count += 1,
            Some(WebPKind::Animated) => self.animated_count += 1,
            None => {}
        }
    }
}

/// 判断路径扩展名是否为 `.webp`（大小写不敏感）。
pub fn has_webp_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(WEBP_EXTENSION))
        .unwrap_or(false)
}

/// 递归收集目录下的 WebP 文件（已排序）。
///
/// 符号链接一律跳过，不跟随也不收集：扫描范围不会越出 `root`，也不会因链接成环重复收集。
pub fn collect_webp_files(root: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let path = entry.path();
            if file_type.is_symlink() {
                log::debug!("🔗 跳过符号链接: {}", path.display());
            } else if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() && has_webp_extension(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// 转换单个文件：检测 → 分流转换 → （可选）删除原文件。
pub fn convert_single_file(
    converter: &WebPConverter,
    path: &Path,
    options: BatchOptions,
) -> FileOutcome {
    let mut outcome = FileOutcome {
        path: path.to_path_buf(),
        kind: None,
        output: None,
        result: ConversionResult {
            success: false,
            message: None,
        },
    };

    let kind = match converter.detect(path) {
        Ok(kind) => kind,
        Err(err) => {
            outcome.result = Err::<(), _>(err).into();
            return outcome;
        }
    };
    outcome.kind = Some(kind);

    let output = match kind {
        WebPKind::Static => path.with_extension("jpg"),
        WebPKind::Animated => path.with_extension("gif"),
    };
    outcome.output = Some(output.clone());

    let result = match kind {
        WebPKind::Static => converter.convert_to_jpeg(path, &output, options.quality),
        WebPKind::Animated => converter.convert_to_gif(path, &output),
    }
    .and_then(|_| {
        if options.keep_original {
            return Ok(());
        }
        fs::remove_file(path)
            .map_err(|e| ConvertError::FileSystem(format!("删除原文件失败：{}", e)))
    });

    outcome.result = result.into();
    outcome
}

/// 处理整个目录；每处理完一个文件调用一次 `on_file`。
pub fn process_directory<F>(
    converter: &WebPConverter,
    root: &Path,
    options: BatchOptions,
    mut on_file: F,
) -> Result<ProcessStats, AppError>
where
    F: FnMut(usize, usize, &FileOutcome),
{
    if !root.is_dir() {
        return Err(AppError::Usage(format!("路径不是目录：{}", root.display())));
    }

    let files = collect_webp_files(root)?;
    log::info!("📂 发现 {} 个 WebP 文件 - 目录: {}", files.len(), root.display());

    let mut stats = ProcessStats::default();
    for (index, path) in files.iter().enumerate() {
        let outcome = convert_single_file(converter, path, options);
        if let Some(message) = &outcome.result.message {
            log::warn!("⚠️ 转换失败 {}：{}", path.display(), message);
        }
        stats.record(&outcome);
        on_file(index + 1, files.len(), &outcome);
    }

    Ok(stats)
}
