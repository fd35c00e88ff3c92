//! 提取能力层（Extraction Layer）
//!
//! ## 职责
//!
//! 本层把"重度模式匹配"拆成一组可独立单测的区域提取器，
//! 每个提取器只认自己的区域，不关心流程顺序。
//!
//! ## 模块划分
//!
//! ### `segment` - 样本分段器
//! - 按横幅分隔符切分原始日志，丢弃文件头
//!
//! ### `context` - 上下文跟踪器
//! - epoch/step 的稀疏声明按顺序沿用（carry-forward）
//!
//! ### `ground_truth` - 标准答案提取器
//! - 严格 / 宽松两种策略，配置时一次性选定
//!
//! ### `response` - 模型响应提取器
//! - `<think>` / `<answer>` 嵌套标签提取 + 结构校验
//! - 独立操作：取助手回合的最后一个答案
//!
//! ### `score` - 最终得分提取器
//! - Format / Answer / Total 三元组，全有或全无
//!
//! ### `answer` - 模型答案校验
//! - 供下游消费方调用的 "名字 is a 角色" 断言检查
//!
//! ## 设计原则
//!
//! 1. **单一职责**：一个提取器只认一个区域
//! 2. **正则预编译**：构造时编译一次，解析过程不再分配
//! 3. **容错**：区域缺失返回 `None`，绝不让单个单元的问题中断整个解析

pub mod answer;
pub mod context;
pub mod ground_truth;
pub mod response;
pub mod score;
pub mod segment;

// 重新导出主要类型
pub use answer::validate_model_answer;
pub use context::{Context, ContextTracker};
pub use ground_truth::GroundTruthExtractor;
pub use response::{validate_structure, ResponseExtraction, ResponseExtractor};
pub use score::ScoreExtractor;
pub use segment::Segmenter;
