//! 结果持久化 - 能力层
//!
//! 只负责"把记录序列写成 JSON 文件"能力，不关心解析流程。
//! 答案字段的命名差异在序列化出的 Value 上就地改名，
//! 不影响内存中的 `Record` 结构。

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::config::AnswerField;
use crate::error::{AppError, AppResult};
use crate::models::Record;

/// 把记录序列转成待写出的 JSON 值列表
///
/// # 参数
/// - `records`: 解析得到的记录序列
/// - `answer_field`: 答案字段命名配置
pub fn records_to_json(records: &[Record], answer_field: AnswerField) -> AppResult<Vec<Value>> {
    let mut values = Vec::with_capacity(records.len());
    for record in records {
        let mut value = serde_json::to_value(record)?;
        rename_answer_field(&mut value, answer_field);
        values.push(value);
    }
    Ok(values)
}

/// 把记录序列保存为 JSON 文件
///
/// # 参数
/// - `records`: 解析得到的记录序列
/// - `output_path`: 输出文件路径
/// - `answer_field`: 答案字段命名配置
pub fn save_to_json(
    records: &[Record],
    output_path: &Path,
    answer_field: AnswerField,
) -> AppResult<()> {
    let values = records_to_json(records, answer_field)?;
    let json = serde_json::to_string_pretty(&values)?;

    debug!("写出 {} 条记录到 {}", values.len(), output_path.display());

    fs::write(output_path, json)
        .map_err(|e| AppError::file_write_failed(output_path.display().to_string(), e))?;
    Ok(())
}

/// 按配置把 `model_answer` 键改名
fn rename_answer_field(value: &mut Value, answer_field: AnswerField) {
    if answer_field == AnswerField::Answer {
        return;
    }
    if let Value::Object(map) = value {
        if let Some(answer) = map.remove("model_answer") {
            map.insert(answer_field.field_name().to_string(), answer);
        }
    }
}
