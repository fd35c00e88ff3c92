//! 数据模型层
//!
//! 定义解析输出的核心类型，所有下游消费方只读使用

pub mod record;

pub use record::{FinalScore, Record, Role};
