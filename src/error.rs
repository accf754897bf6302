//! 错误类型定义

use thiserror::Error;

/// 加载自定义区划数据时的错误
///
/// 注意 `parse` 本身永不失败，未识别的字段一律返回空字符串。
#[derive(Debug, Error)]
pub enum DataError {
    /// CSV 行格式错误（字段数不足）
    #[error("malformed gazetteer row at line {line}: {row:?}")]
    MalformedRow { line: usize, row: String },

    /// 区划代码非法（必须是 6 位数字）
    #[error("invalid area code {0:?}, expected 6 ascii digits")]
    InvalidCode(String),

    /// 未知的区划级别
    #[error("unknown area level {0:?}, expected province/city/county")]
    UnknownLevel(String),
}
