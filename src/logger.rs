/// 日志工具模块
///
/// 初始化 tracing 输出，并提供启动/汇总信息的格式化
use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志，默认 info 级别，可用 `RUST_LOG` 覆盖
///
/// 重复调用不会报错（测试里每个用例都可能调用）
pub fn init() {
    init_with_verbose(false);
}

/// 初始化日志
///
/// # 参数
/// - `verbose`: 为 true 时默认级别为 debug
pub fn init_with_verbose(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 测验客户端启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 后端地址: {}", config.api_base_url);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_text("Контрольная работа", 11), "Контрольная...");
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn test_init_twice() {
        init();
        init_with_verbose(true);
    }
}
