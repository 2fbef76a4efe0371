//! # 输出落盘模块
//!
//! ## 设计思路
//!
//! 编码结果先完整写入同目录下的临时文件，成功后再重命名到目标路径，
//! 保证失败时目标路径上不会留下“看起来像成功”的残缺文件。
//!
//! ## 实现思路
//!
//! - `PendingOutput` 采用 RAII：构造时确定临时路径，`commit` 时重命名。
//! - 未提交即被丢弃（包括错误路径上的 `?` 提前返回）时，`Drop` 自动删除临时文件。

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::ConvertError;

const TEMP_SUFFIX: &str = ".tmp";

/// 尚未提交的输出文件。
pub(crate) struct PendingOutput {
    temp_path: PathBuf,
    final_path: PathBuf,
    committed: bool,
}

impl PendingOutput {
    /// 将 `bytes` 写入临时文件，返回待提交的守卫。
    pub(crate) fn write(final_path: &Path, bytes: &[u8]) -> Result<Self, ConvertError> {
        let pending = Self {
            temp_path: Self::temp_path_for(final_path),
            final_path: final_path.to_path_buf(),
            committed: false,
        };

        let mut file = fs::File::create(&pending.temp_path).map_err(|e| {
            ConvertError::FileSystem(format!(
                "无法创建临时文件 {}：{}",
                pending.temp_path.display(),
                e
            ))
        })?;

        file.write_all(bytes)
            .and_then(|_| file.sync_all())
            .map_err(|e| ConvertError::FileSystem(format!("写入临时文件失败：{}", e)))?;

        Ok(pending)
    }

    /// 重命名到目标路径。
    pub(crate) fn commit(mut self) -> Result<PathBuf, ConvertError> {
        fs::rename(&self.temp_path, &self.final_path).map_err(|e| {
            ConvertError::FileSystem(format!(
                "无法写入输出文件 {}：{}",
                self.final_path.display(),
                e
            ))
        })?;
        self.committed = true;

        log::debug!("💾 输出已落盘：{}", self.final_path.display());
        Ok(self.final_path.clone())
    }

    fn temp_path_for(final_path: &Path) -> PathBuf {
        let mut name = final_path.as_os_str().to_os_string();
        name.push(TEMP_SUFFIX);
        PathBuf::from(name)
    }
}

impl Drop for PendingOutput {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(err) = fs::remove_file(&self.temp_path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "⚠️ 清理临时文件失败 {}：{}",
                    self.temp_path.display(),
                    err
                );
            }
        }
    }
}
