//! # cnaddr - 中国收货地址解析库
//!
//! 从一条自由文本的收货地址中提取结构化字段：手机号、收件人姓名、
//! 身份证号、省、市、区县、街道和邮政区划代码。
//!
//! ## 功能特性
//!
//! - 按序流水线抽取，每一步消费命中的文本后再进入下一步
//! - 省市区三级解析，逐级用邮政代码前缀约束候选
//! - 支持简称与同义词（如 "广东" -> "广东省"，"鹏城" -> "深圳市"）
//! - 只写了区县时自动回填所属市、省
//! - 对任意输入都返回完整记录，未识别字段为空字符串，永不报错
//!
//! ## 快速开始
//!
//! ```rust
//! let record = cnaddr::parse("宝安区新安街道128号沙县小吃 张三 13144381379");
//!
//! assert_eq!(record.province, "广东省");
//! assert_eq!(record.city, "深圳市");
//! assert_eq!(record.region, "宝安区");
//! assert_eq!(record.street, "新安街道128号沙县小吃");
//! assert_eq!(record.zip, "440306");
//! assert_eq!(record.name, "张三");
//! assert_eq!(record.phone_number, "13144381379");
//! ```

mod data;
mod error;
mod extract;
mod parser;
mod record;
mod resolver;

pub use data::Gazetteer;
pub use error::DataError;
pub use parser::AddressParser;
pub use record::ParsedRecord;

/// 便捷函数：使用全局解析器解析地址
///
/// ```rust
/// let record = cnaddr::parse("北京市朝阳区望京");
/// assert_eq!(record.city, "北京市");
/// assert_eq!(record.region, "朝阳区");
/// ```
pub fn parse(address: &str) -> ParsedRecord {
    AddressParser::global().parse(address)
}
