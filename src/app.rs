//! 应用主流程

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use crate::output;
use crate::pipeline::LogParser;
use crate::utils::logging::{log_startup, print_final_stats};

/// 应用主结构
pub struct App {
    config: Config,
    parser: LogParser,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        let parser = LogParser::new(&config)?;
        Ok(Self { config, parser })
    }

    /// 运行应用主逻辑
    ///
    /// 输入文件缺失或不可读时打印诊断并正常返回（不写输出文件，
    /// 也不作为进程失败处理）；输出写失败才是真正的错误。
    pub fn run(&self, log_file: &Path, output_file: &Path) -> Result<()> {
        log_startup(&log_file.display().to_string());

        let raw = match self.read_log(log_file) {
            Ok(raw) => raw,
            Err(e) => {
                error!("❌ {}", e);
                return Ok(());
            }
        };

        let outcome = self.parser.parse(&raw);
        if outcome.records.is_empty() {
            warn!("⚠️ 日志中没有找到任何样本分隔符，输出为空序列");
        }

        output::save_to_json(&outcome.records, output_file, self.config.answer_field)?;
        info!("✓ 解析完成! 结果已保存至 {}", output_file.display());

        print_final_stats(&outcome.stats, &output_file.display().to_string());
        Ok(())
    }

    /// 读取日志文件
    fn read_log(&self, log_file: &Path) -> AppResult<String> {
        if !log_file.exists() {
            return Err(AppError::File(FileError::NotFound {
                path: log_file.display().to_string(),
            }));
        }
        fs::read_to_string(log_file)
            .map_err(|e| AppError::file_read_failed(log_file.display().to_string(), e))
    }
}
