//! 参考数据：区划代码表、同义词、后缀、忽略词、姓氏

use crate::error::DataError;
use std::collections::{BTreeMap, HashMap};

/// 内嵌的省市区代码数据（编译时包含，level,code,name 格式）
const AREA_DATA: &str = include_str!("../data/areas.csv");

/// 行政区划后缀，按长度从长到短排列（剥离时取最长匹配）
pub const POSTFIXES: [&str; 18] = [
    "维吾尔自治区",
    "壮族自治区",
    "回族自治区",
    "特别行政区",
    "白族自治州",
    "藏族自治州",
    "彝族自治州",
    "自治区",
    "自治州",
    "地区",
    "新区",
    "林区",
    "省",
    "市",
    "区",
    "县",
    "旗",
    "盟",
];

/// 同义词组：同组内的名称互相等价
pub const SYNONYM_GROUPS: [&[&str]; 5] = [
    &["深圳", "鹏城"],
    &["广州", "羊城"],
    &["成都", "蓉城"],
    &["上海", "申城"],
    &["济南", "泉城"],
];

/// 解析前需要剔除的联系信息提示词
pub const IGNORE_WORDS: [&str; 18] = [
    "身份证号码",
    "电话号码",
    "手机号码",
    "联系电话",
    "联系方式",
    "收货地址",
    "详细地址",
    "所在地区",
    "身份证号",
    "手机号",
    "收货人",
    "收件人",
    "联系人",
    "身份证",
    "电话",
    "手机",
    "邮编",
    "地址",
];

/// 随忽略词一起剔除的标点
pub const PUNCTUATION: [char; 12] = [
    ',', '.', '，', '。', ':', '：', ';', '；', '"', '\'', '‘', '“',
];

/// 常见姓氏（含复姓），用于姓名候选校验
pub const SURNAMES: [&str; 116] = [
    "王", "李", "张", "刘", "陈", "杨", "黄", "赵", "吴", "周", "徐", "孙", "马", "朱", "胡",
    "郭", "何", "林", "高", "罗", "郑", "梁", "谢", "宋", "唐", "许", "韩", "冯", "邓", "曹",
    "彭", "曾", "肖", "田", "董", "潘", "袁", "蔡", "蒋", "余", "于", "杜", "叶", "程", "苏",
    "魏", "吕", "丁", "任", "沈", "姚", "卢", "姜", "崔", "钟", "谭", "陆", "汪", "范", "金",
    "石", "廖", "贾", "夏", "韦", "付", "方", "白", "邹", "孟", "熊", "秦", "邱", "江", "尹",
    "薛", "闫", "段", "雷", "侯", "龙", "史", "陶", "黎", "贺", "顾", "毛", "郝", "龚", "邵",
    "万", "钱", "严", "覃", "武", "戴", "莫", "孔", "向", "汤", "欧阳", "上官", "司马", "诸葛",
    "夏侯", "皇甫", "尉迟", "公孙", "慕容", "长孙", "宇文", "司徒", "令狐", "轩辕", "呼延",
    "西门",
];

/// 三级区划代码表
///
/// 代码均为定长 6 位数字串：市级代码与所属省共享前 2 位前缀，
/// 区县代码与所属市共享前 4 位前缀。`BTreeMap` 保证按代码升序遍历。
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    /// 省级：代码后 4 位补零，如 "440000" -> "广东省"
    pub province_list: BTreeMap<String, String>,
    /// 市级：代码后 2 位补零，如 "440300" -> "深圳市"
    pub city_list: BTreeMap<String, String>,
    /// 区县级：完整 6 位代码，如 "440306" -> "宝安区"
    pub county_list: BTreeMap<String, String>,
}

impl Gazetteer {
    /// 加载内嵌的区划数据
    pub fn builtin() -> Self {
        let mut gazetteer = Self::default();
        for line in AREA_DATA.lines().skip(1) {
            // 内嵌数据按构建时校验过，异常行直接跳过
            if let Ok((level, code, name)) = parse_row(line) {
                gazetteer.insert(level, code, name);
            }
        }
        gazetteer
    }

    /// 从调用方提供的 CSV（`level,code,name`，含表头）构建代码表
    ///
    /// ```rust
    /// use cnaddr::Gazetteer;
    ///
    /// let csv = "level,code,name\nprovince,440000,广东省\ncity,440300,深圳市";
    /// let gazetteer = Gazetteer::from_csv(csv).unwrap();
    /// assert_eq!(gazetteer.city_list.get("440300").map(String::as_str), Some("深圳市"));
    /// ```
    pub fn from_csv(csv: &str) -> Result<Self, DataError> {
        let mut gazetteer = Self::default();
        for (i, line) in csv.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let (level, code, name) = parse_row(line).map_err(|err| match err {
                RowError::Malformed => DataError::MalformedRow {
                    line: i + 1,
                    row: line.to_string(),
                },
                RowError::BadCode(code) => DataError::InvalidCode(code),
                RowError::BadLevel(level) => DataError::UnknownLevel(level),
            })?;
            gazetteer.insert(level, code, name);
        }
        Ok(gazetteer)
    }

    fn insert(&mut self, level: Level, code: String, name: String) {
        let list = match level {
            Level::Province => &mut self.province_list,
            Level::City => &mut self.city_list,
            Level::County => &mut self.county_list,
        };
        list.insert(code, name);
    }
}

#[derive(Debug, Clone, Copy)]
enum Level {
    Province,
    City,
    County,
}

enum RowError {
    Malformed,
    BadCode(String),
    BadLevel(String),
}

fn parse_row(line: &str) -> Result<(Level, String, String), RowError> {
    let mut parts = line.splitn(3, ',');
    let (Some(level), Some(code), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(RowError::Malformed);
    };
    let level = match level.trim() {
        "province" => Level::Province,
        "city" => Level::City,
        "county" => Level::County,
        other => return Err(RowError::BadLevel(other.to_string())),
    };
    let code = code.trim();
    if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RowError::BadCode(code.to_string()));
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(RowError::Malformed);
    }
    Ok((level, code.to_string(), name.to_string()))
}

/// 同义词索引：词 -> 所属同义词组（含自身）
#[derive(Debug, Default)]
pub struct SynonymIndex {
    map: HashMap<&'static str, &'static [&'static str]>,
}

impl SynonymIndex {
    /// 从内置同义词组构建索引
    pub fn build() -> Self {
        let mut map = HashMap::new();
        for group in &SYNONYM_GROUPS {
            for word in *group {
                map.insert(*word, *group);
            }
        }
        Self { map }
    }

    /// 查询某个名称的同义词组，无记录时返回空切片
    pub fn lookup(&self, name: &str) -> &[&'static str] {
        self.map.get(name).copied().unwrap_or(&[])
    }
}
