//! 命令行入口公共逻辑
//!
//! # 设计思路
//!
//! 四个可执行文件共享同一套启动流程：
//! 1. 初始化日志（输出到 stderr，stdout 只留给检测结果）
//! 2. 检查编解码能力，缺失则以独立退出码立即退出
//! 3. 解析参数，解析失败映射为各工具自己的用法错误码
//! 4. 执行并把 `AppError` 映射为退出码
//!
//! clap 默认以 2 退出并向 stdout 打印帮助，这与各工具的退出码约定冲突，
//! 因此统一使用 `try_parse` 自行处理。

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use crate::converter::capability::{self, Codec};
use crate::error::{AppError, Tool};

/// 初始化日志，默认只输出 warn 及以上级别，可通过 `RUST_LOG` 调整。
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

/// 启动时能力检查。
pub fn ensure_codecs(required: &[Codec]) -> Result<(), AppError> {
    let missing = capability::missing_codecs(required);
    if missing.is_empty() {
        return Ok(());
    }
    Err(AppError::MissingDependency(missing.join("、")))
}

/// 解析命令行参数；失败时返回应当使用的退出码。
pub fn parse_args<T: Parser>(tool: Tool) -> Result<T, ExitCode> {
    T::try_parse().map_err(|err| {
        eprint!("{}", err);
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                ExitCode::from(tool.help_code())
            }
            _ => ExitCode::from(tool.failure_code()),
        }
    })
}

/// 在 stderr 打印错误并返回对应退出码。
pub fn report_failure(tool: Tool, err: &AppError) -> ExitCode {
    log::debug!("❌ {} 失败：{:?}", tool.name(), err);
    eprintln!("错误: {}", err);
    ExitCode::from(err.exit_code(tool))
}

/// 统一启动流程：日志 → 能力检查 → 参数解析 → 执行。
pub fn run<T, F>(tool: Tool, required: &[Codec], body: F) -> ExitCode
where
    T: Parser,
    F: FnOnce(T) -> Result<ExitCode, AppError>,
{
    init_logging();

    if let Err(err) = ensure_codecs(required) {
        return report_failure(tool, &err);
    }

    let args = match parse_args::<T>(tool) {
        Ok(args) => args,
        Err(code) => return code,
    };

    match body(args) {
        Ok(code) => code,
        Err(err) => report_failure(tool, &err),
    }
}
