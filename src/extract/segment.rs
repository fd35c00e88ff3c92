//! 文本分段 - 能力层
//!
//! 只负责"把原始日志切成样本单元"能力，不关心单元内容

use anyhow::Result;
use regex::Regex;

/// 样本分段器
///
/// 职责：
/// - 按横幅分隔符把整篇日志切成有序的样本单元
/// - 丢弃第一个分隔符之前的文件头
/// - 找不到分隔符时返回空序列（空日志是合法输入，不是错误）
pub struct Segmenter {
    boundary: Regex,
}

impl Segmenter {
    /// 创建新的分段器
    pub fn new() -> Result<Self> {
        // 日志中每个样本以一行等号横幅 + "Processing New Sample" 横幅开头
        let boundary = Regex::new(r"=+\n=+ Processing New Sample =+\n")?;
        Ok(Self { boundary })
    }

    /// 把原始日志切成样本单元
    ///
    /// # 参数
    /// - `raw`: 完整日志文本
    ///
    /// # 返回
    /// 按出现顺序排列的样本单元切片；无分隔符时为空
    pub fn split<'a>(&self, raw: &'a str) -> Vec<&'a str> {
        let mut parts = self.boundary.split(raw);
        // 第一段是分隔符之前的文件头，直接丢弃
        parts.next();
        parts.collect()
    }
}
