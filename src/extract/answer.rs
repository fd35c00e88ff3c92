//! 模型答案校验 - 能力层
//!
//! 供下游消费方调用的独立能力：给定自由文本和期望的实体名单，
//! 要求每个名字都存在 "名字 is a 角色" 断言，缺任何一个即整体拒绝。

use std::collections::BTreeMap;

use regex::Regex;
use tracing::debug;

use crate::models::Role;

/// 校验模型答案并提取实体角色映射
///
/// # 参数
/// - `answer_text`: 模型给出的自由文本答案
/// - `expected_names`: 期望出现断言的实体名单
///
/// # 返回
/// 全部名字都有断言时返回完整映射，否则返回 `None`（全有或全无，
/// 不存在部分正确的表示）
pub fn validate_model_answer(
    answer_text: &str,
    expected_names: &[String],
) -> Option<BTreeMap<String, Role>> {
    let mut mapping = BTreeMap::new();

    for name in expected_names {
        let pattern = format!(
            r"(?i)\b{}\b\s+is\s+a\s+(knight|knave)\b",
            regex::escape(name)
        );
        let re = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(_) => return None,
        };

        let role = re
            .captures(answer_text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| Role::from_str(m.as_str()));

        match role {
            Some(role) => {
                mapping.insert(name.clone(), role);
            }
            None => {
                debug!("答案中缺少实体 {} 的角色断言，整体拒绝", name);
                return None;
            }
        }
    }

    Some(mapping)
}
