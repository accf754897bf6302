//! 解析结果数据结构

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 地址解析结果
///
/// 所有字段均为 `String`，空字符串表示未识别到该字段。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedRecord {
    /// 手机号（11 位，1 开头）
    pub phone_number: String,
    /// 收件人姓名
    pub name: String,
    /// 身份证号（统一转为小写）
    pub id_number: String,
    /// 街道详细地址（省市区之后的剩余部分）
    pub street: String,
    /// 邮政区划代码（最精确一级的 6 位代码）
    pub zip: String,
    /// 省份（含直辖市、自治区、特别行政区）
    pub province: String,
    /// 城市（地级市、自治州等）
    pub city: String,
    /// 区县
    pub region: String,
}

impl ParsedRecord {
    /// 创建空的解析结果
    pub fn empty() -> Self {
        Self::default()
    }

    /// 是否识别到了任一行政区划级别
    pub fn has_area(&self) -> bool {
        !self.province.is_empty() || !self.city.is_empty() || !self.region.is_empty()
    }

    /// 省市区是否全部识别
    pub fn is_complete(&self) -> bool {
        !self.province.is_empty() && !self.city.is_empty() && !self.region.is_empty()
    }

    /// 获取标准化的完整地址（省+市+区+街道）
    pub fn full_address(&self) -> String {
        let mut result = String::new();
        result.push_str(&self.province);
        // 直辖市省市同名时不重复拼接
        if self.city != self.province {
            result.push_str(&self.city);
        }
        result.push_str(&self.region);
        result.push_str(&self.street);
        result
    }
}
