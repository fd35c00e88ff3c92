//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::info;

use crate::pipeline::ParseStats;

/// 记录程序启动信息
///
/// # 参数
/// - `log_file`: 待解析的日志文件路径
pub fn log_startup(log_file: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 评测日志解析模式");
    info!("📄 日志文件: {}", log_file);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 汇总统计
/// - `output_file`: 输出文件路径
pub fn print_final_stats(stats: &ParseStats, output_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 解析完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 有效样本: {}/{}", stats.valid, stats.total);
    info!("❌ 无效样本: {}", stats.invalid);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_file);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
