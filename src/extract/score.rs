//! 最终得分提取 - 能力层
//!
//! 三个数值字段（format / answer / total）用一次有序匹配同时取出，
//! 缺任何一个标签或任何一个数字非法时整个得分为 `None`，绝不产出部分得分。

use anyhow::Result;
use regex::Regex;
use tracing::warn;

use crate::models::FinalScore;

/// 最终得分提取器
pub struct ScoreExtractor {
    score_re: Regex,
}

impl ScoreExtractor {
    /// 创建新的得分提取器
    pub fn new() -> Result<Self> {
        Ok(Self {
            // 一次匹配按 Format → Answer → Total 顺序跨越整个得分区域
            score_re: Regex::new(
                r"(?s)Final Score.*?Format:\s*(.*?)\n.*?Answer:\s*(.*?)\n.*?Total:\s*(.*?)\n",
            )?,
        })
    }

    /// 从样本单元中提取最终得分
    ///
    /// # 参数
    /// - `unit`: 样本单元文本
    ///
    /// # 返回
    /// 区域缺失或数字解析失败时为 `None`；解析失败只影响当前单元
    pub fn extract(&self, unit: &str) -> Option<FinalScore> {
        let caps = self.score_re.captures(unit)?;

        let format = self.parse_field(&caps, 1, "Format")?;
        let answer = self.parse_field(&caps, 2, "Answer")?;
        let total = self.parse_field(&caps, 3, "Total")?;

        Some(FinalScore {
            format,
            answer,
            total,
        })
    }

    /// 解析单个数值字段，失败时记录警告并返回 `None`
    fn parse_field(&self, caps: &regex::Captures<'_>, index: usize, label: &str) -> Option<f64> {
        let raw = caps.get(index)?.as_str().trim();
        match raw.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("⚠️ 得分字段 {} 的值 '{}' 不是合法数字，本单元得分置空", label, raw);
                None
            }
        }
    }
}
