//! 地址解析器核心实现

use crate::data::{Gazetteer, SynonymIndex};
use crate::extract::{extract_id, extract_id_raw, extract_name, extract_phone, preprocess};
use crate::record::ParsedRecord;
use crate::resolver::{parent_of, resolve, AreaLevel, Resolution};
use once_cell::sync::Lazy;

/// 全局解析器实例
static GLOBAL_PARSER: Lazy<AddressParser> = Lazy::new(AddressParser::new);

/// 地址解析器
///
/// 持有不可变的区划代码表和同义词索引，构建一次后可跨线程只读共享。
pub struct AddressParser {
    gazetteer: Gazetteer,
    synonyms: SynonymIndex,
}

impl AddressParser {
    /// 使用内置区划数据创建解析器
    pub fn new() -> Self {
        Self::with_gazetteer(Gazetteer::builtin())
    }

    /// 使用调用方提供的区划代码表创建解析器
    pub fn with_gazetteer(gazetteer: Gazetteer) -> Self {
        Self {
            gazetteer,
            synonyms: SynonymIndex::build(),
        }
    }

    /// 获取全局解析器实例
    pub fn global() -> &'static AddressParser {
        &GLOBAL_PARSER
    }

    /// 解析一条自由文本地址
    ///
    /// 流水线：预处理 -> 手机号 -> 姓名 -> 身份证号 -> 省 -> 市 ->
    /// 区县 -> 上级回填。每一步命中的文本被替换成一个空格后再进入
    /// 下一步。对任意输入都返回完整的八字段记录，未识别的字段为空
    /// 字符串。
    ///
    /// # 示例
    /// ```rust
    /// use cnaddr::AddressParser;
    ///
    /// let parser = AddressParser::new();
    /// let record = parser.parse("宝安区新安街道128号 张三 13144381379");
    /// assert_eq!(record.province, "广东省");
    /// assert_eq!(record.phone_number, "13144381379");
    /// ```
    pub fn parse(&self, address: &str) -> ParsedRecord {
        let mut text = preprocess(address);

        let phone_number = extract_phone(&text);
        if !phone_number.is_empty() {
            text = text.replacen(&phone_number, " ", 1);
        }

        let name = extract_name(&text);
        if !name.is_empty() {
            text = text.replacen(&name, " ", 1);
        }

        // 先取原文剔除，再统一转小写返回
        let id_raw = extract_id_raw(&text);
        let id_number = extract_id(&text);
        if !id_raw.is_empty() {
            text = text.replacen(&id_raw, " ", 1);
        }

        let mut province = self.resolve(AreaLevel::Province, &text, "");
        let mut city = self.resolve(AreaLevel::City, &province.rest, &province.zip_prefix);
        let region = self.resolve(AreaLevel::Region, &city.rest, &city.zip_prefix);

        if !region.name.is_empty() && city.name.is_empty() {
            (city.name, city.zip) = parent_of(AreaLevel::City, &region.zip, &self.gazetteer);
        }
        if !city.name.is_empty() && province.name.is_empty() {
            (province.name, province.zip) =
                parent_of(AreaLevel::Province, &city.zip, &self.gazetteer);
        }

        let street = [&region.rest, &city.rest, &province.rest]
            .into_iter()
            .find(|rest| !rest.is_empty())
            .map(String::as_str)
            .unwrap_or(&text)
            .trim()
            .to_string();
        let zip = [region.zip, city.zip, province.zip]
            .into_iter()
            .find(|zip| !zip.is_empty())
            .unwrap_or_default();

        ParsedRecord {
            phone_number,
            name,
            id_number,
            street,
            zip,
            province: province.name,
            city: city.name,
            region: region.name,
        }
    }

    /// 批量解析地址
    pub fn parse_batch(&self, addresses: &[&str]) -> Vec<ParsedRecord> {
        addresses.iter().map(|a| self.parse(a)).collect()
    }

    fn resolve(&self, level: AreaLevel, input: &str, zip_prefix: &str) -> Resolution {
        resolve(level, input, zip_prefix, &self.gazetteer, &self.synonyms)
    }
}

impl Default for AddressParser {
    fn default() -> Self {
        Self::new()
    }
}
