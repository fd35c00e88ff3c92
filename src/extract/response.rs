//! 模型响应提取与结构校验 - 能力层
//!
//! 响应区域内包含两段顺序嵌套的标签子区域：`<think>…</think>` 和
//! `<answer>…</answer>`。提取与校验相互独立：标签对缺失只置空对应文本，
//! 结构违规只置 `structure_valid = false`，已提取的文本照常返回。

use anyhow::Result;
use regex::Regex;

/// 响应区域标签
const RESPONSE_LABEL: &str = "[Model Response]";
/// 助手回合起始标记（两种日志格式变体）
const ASSISTANT_MARKERS: [&str; 2] = ["Assistant:", "<|im_start|>assistant"];

/// 四个结构标记
const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";
const ANSWER_OPEN: &str = "<answer>";
const ANSWER_CLOSE: &str = "</answer>";

/// 单个样本的响应提取结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseExtraction {
    pub think: Option<String>,
    pub answer: Option<String>,
    /// 响应区域缺失时为 `None`，否则为结构校验结果
    pub structure_valid: Option<bool>,
}

/// 模型响应提取器
///
/// 职责：
/// - 定位 `[Model Response]` 区域
/// - 非贪婪提取 `<think>` 与 `<answer>` 的内文（可跨多行）
/// - 校验四个标记恰好各出现一次且从左到右有序
/// - 提供"取最后一个 `<answer>`"的独立操作（模型可能重述或修正答案）
pub struct ResponseExtractor {
    think_re: Regex,
    answer_re: Regex,
}

impl ResponseExtractor {
    /// 创建新的响应提取器
    pub fn new() -> Result<Self> {
        Ok(Self {
            think_re: Regex::new(r"(?s)<think>(.*?)</think>")?,
            answer_re: Regex::new(r"(?s)<answer>(.*?)</answer>")?,
        })
    }

    /// 从样本单元中提取 think/answer 文本并校验结构
    ///
    /// # 参数
    /// - `unit`: 样本单元文本
    ///
    /// # 返回
    /// 区域缺失时三个字段全为 `None`
    pub fn extract(&self, unit: &str) -> ResponseExtraction {
        let region = match unit.find(RESPONSE_LABEL) {
            Some(pos) => &unit[pos + RESPONSE_LABEL.len()..],
            None => return ResponseExtraction::default(),
        };

        let think = self.capture_inner(&self.think_re, region);
        let answer = self.capture_inner(&self.answer_re, region);

        ResponseExtraction {
            think,
            answer,
            structure_valid: Some(validate_structure(region)),
        }
    }

    /// 提取整段响应文本中助手回合的最终答案
    ///
    /// 先定位助手回合起始标记，再取其后最后一个 `<answer>` 的内文
    /// （模型重述答案时以最后一次为准）。
    ///
    /// # 返回
    /// 无起始标记或无 `<answer>` 时为 `None`
    pub fn extract_final_answer(&self, solution: &str) -> Option<String> {
        let tail = ASSISTANT_MARKERS.iter().find_map(|marker| {
            solution
                .find(marker)
                .map(|pos| &solution[pos + marker.len()..])
        })?;

        self.answer_re
            .captures_iter(tail)
            .last()
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }

    /// 非贪婪提取首个标签对的内文
    fn capture_inner(&self, re: &Regex, region: &str) -> Option<String> {
        re.captures(region)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

/// 校验响应区域的标签结构
///
/// 四个标记必须恰好各出现一次，且位置满足
/// think-open < think-close < answer-open < answer-close
pub fn validate_structure(region: &str) -> bool {
    let positions: Vec<Option<usize>> = [THINK_OPEN, THINK_CLOSE, ANSWER_OPEN, ANSWER_CLOSE]
        .iter()
        .map(|marker| single_occurrence(region, marker))
        .collect();

    match (positions[0], positions[1], positions[2], positions[3]) {
        (Some(t_open), Some(t_close), Some(a_open), Some(a_close)) => {
            t_open < t_close && t_close < a_open && a_open < a_close
        }
        _ => false,
    }
}

/// 标记恰好出现一次时返回其位置
fn single_occurrence(region: &str, marker: &str) -> Option<usize> {
    let mut indices = region.match_indices(marker).map(|(pos, _)| pos);
    let first = indices.next()?;
    if indices.next().is_some() {
        return None;
    }
    Some(first)
}
