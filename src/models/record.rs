//! 解析结果数据模型
//!
//! 每个样本单元对应一条 `Record`，按单元顺序组装后不再修改

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 角色枚举
///
/// 逻辑题中实体只可能是两种角色之一，序列化时统一为小写
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Knight,
    Knave,
}

impl Role {
    /// 从文本解析角色（不区分大小写）
    ///
    /// # 参数
    /// - `s`: 角色文本，如 "KNIGHT"、"knave"
    ///
    /// # 返回
    /// 无法识别时返回 `None`
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "knight" => Some(Role::Knight),
            "knave" => Some(Role::Knave),
            _ => None,
        }
    }

    /// 角色的小写名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Knight => "knight",
            Role::Knave => "knave",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 最终得分三元组
///
/// 三个字段必须同时出现，缺任何一个时整个得分为 `None`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    pub format: f64,
    pub answer: f64,
    pub total: f64,
}

/// 单个样本的解析记录
///
/// 字段含义：
/// - `epoch` / `step`: 训练进度，缺失时沿用上一个样本的值（初始为 0）
/// - `ground_truth`: 标准答案中的实体角色映射，区域缺失时为 `None`
/// - `model_think` / `model_answer`: 模型响应中的推理与回答文本
/// - `structure_valid`: 响应区域的标签结构是否合法，区域缺失时为 `None`
/// - `final_score`: 最终得分，区域缺失或数字非法时为 `None`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub epoch: i64,
    pub step: i64,
    pub ground_truth: Option<BTreeMap<String, Role>>,
    pub model_think: Option<String>,
    pub model_answer: Option<String>,
    pub structure_valid: Option<bool>,
    pub final_score: Option<FinalScore>,
}

impl Record {
    /// 记录是否无效
    ///
    /// 统计口径：缺少 `model_think` 或 `model_answer` 即视为无效
    pub fn is_invalid(&self) -> bool {
        self.model_think.is_none() || self.model_answer.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str_case_insensitive() {
        // 大小写不敏感，统一折叠为小写枚举
        assert_eq!(Role::from_str("knight"), Some(Role::Knight));
        assert_eq!(Role::from_str("KNIGHT"), Some(Role::Knight));
        assert_eq!(Role::from_str("Knave"), Some(Role::Knave));
        assert_eq!(Role::from_str(" knave "), Some(Role::Knave));
        assert_eq!(Role::from_str("wizard"), None);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Knight).unwrap(), "\"knight\"");
        assert_eq!(serde_json::to_string(&Role::Knave).unwrap(), "\"knave\"");
    }

    #[test]
    fn test_record_invalid_when_think_or_answer_missing() {
        let mut record = Record {
            epoch: 0,
            step: 0,
            ground_truth: None,
            model_think: Some("思考".to_string()),
            model_answer: Some("回答".to_string()),
            structure_valid: Some(true),
            final_score: None,
        };
        assert!(!record.is_invalid());

        record.model_answer = None;
        assert!(record.is_invalid());

        record.model_answer = Some("回答".to_string());
        record.model_think = None;
        assert!(record.is_invalid());
    }
}
