//! 程序配置
//!
//! 解析策略在管线配置时一次性选定，解析过程中不再变化

use std::str::FromStr;

/// 标准答案提取策略
///
/// 宽松策略覆盖更多实际日志变体，作为默认值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroundTruthStrategy {
    /// 只认 "Found: 名字 → 角色" 固定格式
    Strict,
    /// 逐行扫描，容忍标点和空白噪声
    #[default]
    Loose,
}

impl FromStr for GroundTruthStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(GroundTruthStrategy::Strict),
            "loose" => Ok(GroundTruthStrategy::Loose),
            _ => Err(()),
        }
    }
}

/// 统计口径
///
/// 源头的不同变体对"缺少标准答案或响应区域的单元"处理不一致，
/// 这里保留两种口径由配置决定，不假设哪一种是对的
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountingMode {
    /// 保留为空值记录（默认）
    #[default]
    Retain,
    /// 从输出和总数中剔除
    DropIncomplete,
}

impl FromStr for CountingMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(CountingMode::Retain),
            "drop" | "drop_incomplete" => Ok(CountingMode::DropIncomplete),
            _ => Err(()),
        }
    }
}

/// 答案字段命名
///
/// 下游脚本对原始答案字段的命名不一致（`model_answer` 与
/// `model_answer_raw` 都有使用），序列化时按配置选定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerField {
    #[default]
    Answer,
    AnswerRaw,
}

impl AnswerField {
    /// 序列化时使用的字段名
    pub fn field_name(&self) -> &'static str {
        match self {
            AnswerField::Answer => "model_answer",
            AnswerField::AnswerRaw => "model_answer_raw",
        }
    }
}

impl FromStr for AnswerField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "answer" | "model_answer" => Ok(AnswerField::Answer),
            "raw" | "model_answer_raw" => Ok(AnswerField::AnswerRaw),
            _ => Err(()),
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 标准答案提取策略
    pub ground_truth_strategy: GroundTruthStrategy,
    /// 统计口径
    pub counting_mode: CountingMode,
    /// 答案字段命名
    pub answer_field: AnswerField,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 默认输出文件
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ground_truth_strategy: GroundTruthStrategy::default(),
            counting_mode: CountingMode::default(),
            answer_field: AnswerField::default(),
            verbose_logging: false,
            output_file: "parsed_logs.json".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            ground_truth_strategy: std::env::var("GROUND_TRUTH_STRATEGY").ok().and_then(|v| v.parse().ok()).unwrap_or(default.ground_truth_strategy),
            counting_mode: std::env::var("COUNTING_MODE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.counting_mode),
            answer_field: std::env::var("ANSWER_FIELD").ok().and_then(|v| v.parse().ok()).unwrap_or(default.answer_field),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_strategy_is_loose() {
        let config = Config::default();
        assert_eq!(config.ground_truth_strategy, GroundTruthStrategy::Loose);
        assert_eq!(config.counting_mode, CountingMode::Retain);
        assert_eq!(config.answer_field, AnswerField::Answer);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "strict".parse::<GroundTruthStrategy>(),
            Ok(GroundTruthStrategy::Strict)
        );
        assert_eq!(
            "Loose".parse::<GroundTruthStrategy>(),
            Ok(GroundTruthStrategy::Loose)
        );
        assert!("其他".parse::<GroundTruthStrategy>().is_err());
    }

    #[test]
    fn test_counting_mode_parsing() {
        assert_eq!("retain".parse::<CountingMode>(), Ok(CountingMode::Retain));
        assert_eq!("drop".parse::<CountingMode>(), Ok(CountingMode::DropIncomplete));
        assert_eq!(
            "drop_incomplete".parse::<CountingMode>(),
            Ok(CountingMode::DropIncomplete)
        );
    }

    #[test]
    fn test_answer_field_names() {
        assert_eq!(AnswerField::Answer.field_name(), "model_answer");
        assert_eq!(AnswerField::AnswerRaw.field_name(), "model_answer_raw");
        assert_eq!(
            "model_answer_raw".parse::<AnswerField>(),
            Ok(AnswerField::AnswerRaw)
        );
    }
}
