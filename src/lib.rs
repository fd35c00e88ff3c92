//! # Eval Log Parser
//!
//! 把模型评测运行的半结构化文本日志解析成逐样本的结构化记录
//!
//! ## 架构设计
//!
//! 本系统采用严格的三层架构：
//!
//! ### ① 提取能力层（Extract）
//! - `extract/` - 描述"我能从一个样本单元里提取什么"，只处理单个单元
//! - `Segmenter` - 样本切分能力
//! - `ContextTracker` - epoch/step 沿用能力
//! - `GroundTruthExtractor` / `ResponseExtractor` / `ScoreExtractor` - 区域提取能力
//! - `validate_model_answer` - 供下游调用的答案断言检查能力
//!
//! ### ② 流程层（Pipeline）
//! - `pipeline` - 定义"一篇日志"的完整解析流程
//! - `LogParser` - 流程编排（切分 → 上下文 → 提取 → 组装 → 汇总）
//! - 单线程严格串行：上下文沿用是跨单元的线性依赖
//!
//! ### ③ 应用层（App）
//! - `app` - 读入日志、调用流程、持久化输出、打印统计
//! - `output` - JSON 持久化（含答案字段命名配置）
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod logger;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use config::{AnswerField, Config, CountingMode, GroundTruthStrategy};
pub use error::{AppError, AppResult};
pub use extract::{validate_model_answer, Context, ResponseExtractor};
pub use models::{FinalScore, Record, Role};
pub use pipeline::{LogParser, ParseOutcome, ParseStats};
