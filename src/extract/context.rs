//! Epoch/Step 上下文跟踪 - 能力层
//!
//! 日志中 epoch 和 step 是稀疏记录的：一次声明对后续所有样本生效，
//! 直到下一次声明。上下文必须按分段顺序严格串行推进，乱序会破坏沿用语义。

use anyhow::Result;
use regex::Regex;

/// 当前训练进度上下文
///
/// 显式的值类型，由解析流程传入传出，不使用任何全局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    pub epoch: i64,
    pub step: i64,
}

/// 上下文跟踪器
///
/// 职责：
/// - 在单个样本单元中独立查找 epoch 标记和 step 标记
/// - 找到则覆盖对应标量，找不到则沿用传入值
pub struct ContextTracker {
    epoch_re: Regex,
    step_re: Regex,
}

impl ContextTracker {
    /// 创建新的上下文跟踪器
    pub fn new() -> Result<Self> {
        Ok(Self {
            epoch_re: Regex::new(r"(?i)epoch\s+(\d+)")?,
            step_re: Regex::new(r"(?i)step\s+(\d+)")?,
        })
    }

    /// 根据当前样本单元推进上下文
    ///
    /// # 参数
    /// - `ctx`: 上一个单元处理后的上下文（首个单元前为 `(0, 0)`）
    /// - `unit`: 当前样本单元文本
    ///
    /// # 返回
    /// 推进后的上下文（最多更新一次，两个字段相互独立）
    pub fn advance(&self, ctx: Context, unit: &str) -> Context {
        let epoch = self
            .find_number(&self.epoch_re, unit)
            .unwrap_or(ctx.epoch);
        let step = self.find_number(&self.step_re, unit).unwrap_or(ctx.step);
        Context { epoch, step }
    }

    /// 在单元文本中查找首个匹配的数字
    fn find_number(&self, re: &Regex, unit: &str) -> Option<i64> {
        re.captures(unit)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ContextTracker {
        ContextTracker::new().unwrap()
    }

    #[test]
    fn test_initial_context_is_zero() {
        assert_eq!(Context::default(), Context { epoch: 0, step: 0 });
    }

    #[test]
    fn test_both_markers_present() {
        let ctx = tracker().advance(Context::default(), "Epoch 2, Step 15\n...");
        assert_eq!(ctx, Context { epoch: 2, step: 15 });
    }

    #[test]
    fn test_epoch_only_keeps_previous_step() {
        // 单元只声明 epoch=3，step 沿用之前的 7
        let prev = Context { epoch: 1, step: 7 };
        let ctx = tracker().advance(prev, "epoch 3 开始新一轮\n");
        assert_eq!(ctx, Context { epoch: 3, step: 7 });
    }

    #[test]
    fn test_no_markers_carries_both_forward() {
        let prev = Context { epoch: 4, step: 99 };
        let ctx = tracker().advance(prev, "这个单元没有任何进度标记\n");
        assert_eq!(ctx, prev);
    }

    #[test]
    fn test_case_insensitive_markers() {
        let ctx = tracker().advance(Context::default(), "EPOCH 5\nSTEP 6\n");
        assert_eq!(ctx, Context { epoch: 5, step: 6 });
    }
}
