//! 解析流程层（Pipeline Layer）
//!
//! 定义"一篇日志"的完整解析流程：
//!
//! ```text
//! 原始日志
//!     ↓ Segmenter（切分样本单元）
//! 有序样本单元
//!     ↓ 对每个单元，严格按顺序：
//!       ContextTracker 推进 epoch/step
//!       GroundTruthExtractor / ResponseExtractor / ScoreExtractor 各自独立提取
//!     ↓ 组装 Record（按单元顺序追加，组装后不再修改）
//! 记录序列 + 汇总统计
//! ```
//!
//! 上下文沿用是跨单元的线性依赖，整个流程必须单线程串行执行。
//! 任何单元内的问题只影响该单元的字段，绝不丢弃其他单元的结果。

use anyhow::Result;
use tracing::debug;

use crate::config::{Config, CountingMode};
use crate::extract::{
    Context, ContextTracker, GroundTruthExtractor, ResponseExtractor, ScoreExtractor, Segmenter,
};
use crate::models::Record;
use crate::utils::logging::truncate_text;

/// 汇总统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseStats {
    /// 样本总数
    pub total: usize,
    /// 无效样本数（缺 think 或 answer）
    pub invalid: usize,
    /// 有效样本数（total - invalid）
    pub valid: usize,
}

/// 一次解析的完整结果
#[derive(Debug)]
pub struct ParseOutcome {
    pub records: Vec<Record>,
    pub stats: ParseStats,
}

/// 日志解析器
///
/// 持有全部预编译的提取器；解析过程本身不会失败，
/// 输入再糟也只会产出空字段或空序列
pub struct LogParser {
    segmenter: Segmenter,
    context_tracker: ContextTracker,
    ground_truth: GroundTruthExtractor,
    response: ResponseExtractor,
    score: ScoreExtractor,
    counting_mode: CountingMode,
    verbose: bool,
}

impl LogParser {
    /// 按配置创建解析器
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            segmenter: Segmenter::new()?,
            context_tracker: ContextTracker::new()?,
            ground_truth: GroundTruthExtractor::new(config.ground_truth_strategy)?,
            response: ResponseExtractor::new()?,
            score: ScoreExtractor::new()?,
            counting_mode: config.counting_mode,
            verbose: config.verbose_logging,
        })
    }

    /// 解析整篇日志
    ///
    /// # 参数
    /// - `raw`: 完整日志文本
    ///
    /// # 返回
    /// 按单元顺序排列的记录序列和汇总统计；无分隔符时为空序列
    pub fn parse(&self, raw: &str) -> ParseOutcome {
        let units = self.segmenter.split(raw);
        let mut records = Vec::with_capacity(units.len());

        // 上下文是显式的值，按分段顺序线性传递
        let mut ctx = Context::default();

        for (index, unit) in units.iter().enumerate() {
            ctx = self.context_tracker.advance(ctx, unit);

            let ground_truth = self.ground_truth.extract(unit);
            let response = self.response.extract(unit);
            let final_score = self.score.extract(unit);

            // DropIncomplete 口径：缺标准答案或响应区域的单元不计入
            let response_missing = response.structure_valid.is_none();
            if self.counting_mode == CountingMode::DropIncomplete
                && (ground_truth.is_none() || response_missing)
            {
                debug!("样本 {} 缺少必要区域，按配置剔除", index + 1);
                continue;
            }

            if self.verbose {
                if let Some(think) = &response.think {
                    debug!(
                        "样本 {} (epoch={}, step={}) think 预览: {}",
                        index + 1,
                        ctx.epoch,
                        ctx.step,
                        truncate_text(think, 80)
                    );
                }
            }

            records.push(Record {
                epoch: ctx.epoch,
                step: ctx.step,
                ground_truth,
                model_think: response.think,
                model_answer: response.answer,
                structure_valid: response.structure_valid,
                final_score,
            });
        }

        let stats = aggregate(&records);
        ParseOutcome { records, stats }
    }
}

/// 把记录序列折叠成汇总统计
fn aggregate(records: &[Record]) -> ParseStats {
    let total = records.len();
    let invalid = records.iter().filter(|r| r.is_invalid()).count();
    ParseStats {
        total,
        invalid,
        valid: total - invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GroundTruthStrategy;
    use crate::models::Role;

    const BANNER: &str = "====================\n==== Processing New Sample ====\n";

    fn full_unit(epoch: &str, step: &str) -> String {
        format!(
            "{epoch}{step}[Ground Truth Parsing]\n\
             Found: Alice → knight\n\
             Found: Bob → knave\n\
             [Ground Truth] Final identities: Alice (knight), Bob (knave)\n\
             [Model Response]\n\n\
             <think>推理过程</think>\n\
             <answer>Alice is a knight, Bob is a knave</answer>\n\
             Final Score\n\
             Format: 1.0\n\
             Answer: 0.5\n\
             Total: 1.5\n"
        )
    }

    fn parser(config: &Config) -> LogParser {
        LogParser::new(config).unwrap()
    }

    #[test]
    fn test_parse_two_full_units() {
        let raw = format!(
            "header\n{BANNER}{}{BANNER}{}",
            full_unit("Epoch 1, ", "Step 10\n"),
            full_unit("", "Step 11\n")
        );
        let outcome = parser(&Config::default()).parse(&raw);

        assert_eq!(outcome.stats.total, 2);
        assert_eq!(outcome.stats.invalid, 0);
        assert_eq!(outcome.stats.valid, 2);

        let first = &outcome.records[0];
        assert_eq!((first.epoch, first.step), (1, 10));
        assert_eq!(first.ground_truth.as_ref().unwrap()["Alice"], Role::Knight);
        assert_eq!(first.structure_valid, Some(true));
        assert_eq!(first.final_score.unwrap().total, 1.5);

        // 第二个单元没有 epoch 标记：沿用 1，step 更新为 11
        let second = &outcome.records[1];
        assert_eq!((second.epoch, second.step), (1, 11));
    }

    #[test]
    fn test_carry_forward_across_bare_units() {
        let raw = format!(
            "{BANNER}Epoch 3, Step 7\n什么区域都没有\n{BANNER}还是什么都没有\n"
        );
        let outcome = parser(&Config::default()).parse(&raw);

        assert_eq!(outcome.records.len(), 2);
        for record in &outcome.records {
            assert_eq!((record.epoch, record.step), (3, 7));
            assert!(record.ground_truth.is_none());
            assert!(record.structure_valid.is_none());
            assert!(record.is_invalid());
        }
        assert_eq!(outcome.stats.invalid, 2);
        assert_eq!(outcome.stats.valid, 0);
    }

    #[test]
    fn test_empty_log_yields_empty_outcome() {
        let outcome = parser(&Config::default()).parse("没有任何分隔符的日志\n");
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.stats, ParseStats::default());
    }

    #[test]
    fn test_malformed_score_does_not_abort_pass() {
        let bad_score = "[Model Response]\n\n\
                         <think>a</think>\n<answer>b</answer>\n\
                         Final Score\nFormat: 坏数字\nAnswer: 0.5\nTotal: 1.5\n";
        let raw = format!("{BANNER}{bad_score}{BANNER}{}", full_unit("", ""));
        let outcome = parser(&Config::default()).parse(&raw);

        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.records[0].final_score.is_none());
        // 邻近单元不受影响
        assert!(outcome.records[1].final_score.is_some());
    }

    #[test]
    fn test_drop_incomplete_mode() {
        let raw = format!(
            "{BANNER}{}{BANNER}这个单元什么区域都没有\n",
            full_unit("Epoch 1, ", "Step 1\n")
        );

        let retain = parser(&Config::default()).parse(&raw);
        assert_eq!(retain.stats.total, 2);
        assert_eq!(retain.stats.invalid, 1);

        let config = Config {
            counting_mode: CountingMode::DropIncomplete,
            ..Config::default()
        };
        let dropped = parser(&config).parse(&raw);
        assert_eq!(dropped.stats.total, 1);
        assert_eq!(dropped.stats.invalid, 0);
    }

    #[test]
    fn test_strict_strategy_config_flows_through() {
        let unit = "[Ground Truth Parsing]\n\
                    Carol is a knight\n\
                    [Ground Truth] Final identities: ...\n\
                    [Model Response]\n\n<think>a</think>\n<answer>b</answer>\n";
        let raw = format!("{BANNER}{unit}");

        // 宽松策略能识别自由文本行
        let loose = parser(&Config::default()).parse(&raw);
        let mapping = loose.records[0].ground_truth.as_ref().unwrap();
        assert_eq!(mapping["Carol"], Role::Knight);

        // 严格策略识别不了，但区域存在所以映射为空而非 None
        let config = Config {
            ground_truth_strategy: GroundTruthStrategy::Strict,
            ..Config::default()
        };
        let strict = parser(&config).parse(&raw);
        let mapping = strict.records[0].ground_truth.as_ref().unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_stats_identity() {
        let raw = format!(
            "{BANNER}{}{BANNER}没有响应\n{BANNER}{}",
            full_unit("Epoch 1, ", "Step 1\n"),
            full_unit("", "Step 2\n")
        );
        let outcome = parser(&Config::default()).parse(&raw);
        assert_eq!(
            outcome.stats.valid + outcome.stats.invalid,
            outcome.stats.total
        );
    }
}
