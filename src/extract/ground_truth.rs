//! 标准答案提取 - 能力层
//!
//! 只负责"从样本单元中提取实体角色映射"能力，不关心流程
//!
//! 两种提取策略：
//! - `Strict`: 只认 "Found: 名字 → 角色" 固定格式
//! - `Loose`: 逐行扫描，容忍标点和空白噪声（默认，覆盖更多实际日志变体）

use std::collections::BTreeMap;

use anyhow::Result;
use regex::Regex;

use crate::config::GroundTruthStrategy;
use crate::models::Role;

/// 标准答案提取器
///
/// 职责：
/// - 定位单元内的 Ground Truth 区域
/// - 按配置的策略提取 (名字, 角色) 对
/// - 区域缺失时返回 `None`；未匹配到的实体直接缺席，不拒绝部分映射
pub struct GroundTruthExtractor {
    region_re: Regex,
    strict_re: Regex,
    loose_re: Regex,
    strategy: GroundTruthStrategy,
}

impl GroundTruthExtractor {
    /// 创建新的标准答案提取器
    pub fn new(strategy: GroundTruthStrategy) -> Result<Self> {
        Ok(Self {
            region_re: Regex::new(
                r"(?s)\[Ground Truth Parsing\](.*?)\[Ground Truth\] Final identities:",
            )?,
            strict_re: Regex::new(r"(?i)Found:\s*([\w\s]+?)\s*(?:→|->)\s*(knight|knave)")?,
            loose_re: Regex::new(
                r"(?i)(?:found\s*:?)?\s*([a-z][\w]*(?:\s+[a-z][\w]*)*?)\s*(?:is\s+a\b|→|->|[-:,…]|\.{2,})?\s*\b(knight|knave)\b",
            )?,
            strategy,
        })
    }

    /// 从样本单元中提取实体角色映射
    ///
    /// # 参数
    /// - `unit`: 样本单元文本
    ///
    /// # 返回
    /// 区域缺失时为 `None`，否则返回（可能为空的）映射
    pub fn extract(&self, unit: &str) -> Option<BTreeMap<String, Role>> {
        let region = self
            .region_re
            .captures(unit)
            .and_then(|caps| caps.get(1))?
            .as_str();

        let mapping = match self.strategy {
            GroundTruthStrategy::Strict => self.parse_strict(region),
            GroundTruthStrategy::Loose => self.parse_loose(region),
        };
        Some(mapping)
    }

    /// 严格策略：全区域匹配 "Found: 名字 → 角色"
    fn parse_strict(&self, region: &str) -> BTreeMap<String, Role> {
        let mut mapping = BTreeMap::new();
        for caps in self.strict_re.captures_iter(region) {
            if let (Some(name), Some(role)) = (caps.get(1), caps.get(2)) {
                if let Some(role) = Role::from_str(role.as_str()) {
                    mapping.insert(name.as_str().trim().to_string(), role);
                }
            }
        }
        mapping
    }

    /// 宽松策略：逐行扫描 "名字 ... 角色"
    fn parse_loose(&self, region: &str) -> BTreeMap<String, Role> {
        let mut mapping = BTreeMap::new();
        for line in region.lines() {
            if let Some(caps) = self.loose_re.captures(line) {
                if let (Some(name), Some(role)) = (caps.get(1), caps.get(2)) {
                    if let Some(role) = Role::from_str(role.as_str()) {
                        mapping.insert(name.as_str().trim().to_string(), role);
                    }
                }
            }
        }
        mapping
    }
}
