//! 三级行政区划解析：省 -> 市 -> 区县，逐级用邮政代码前缀约束

use crate::data::{Gazetteer, SynonymIndex, POSTFIXES};
use std::collections::BTreeMap;

/// 行政区划级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaLevel {
    /// 省、直辖市、自治区、特别行政区
    Province,
    /// 地级市、自治州等
    City,
    /// 区县
    Region,
}

impl AreaLevel {
    /// 该级别对应的代码表
    fn list<'a>(&self, gazetteer: &'a Gazetteer) -> &'a BTreeMap<String, String> {
        match self {
            AreaLevel::Province => &gazetteer.province_list,
            AreaLevel::City => &gazetteer.city_list,
            AreaLevel::Region => &gazetteer.county_list,
        }
    }

    /// 命中后传给下一级的代码前缀宽度（区县级取完整代码）
    fn prefix_len(&self) -> usize {
        match self {
            AreaLevel::Province => 2,
            AreaLevel::City => 4,
            AreaLevel::Region => 6,
        }
    }
}

/// 单级解析结果
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// 命中的 6 位区划代码，未命中为空
    pub zip: String,
    /// 命中的标准名称，未命中为空
    pub name: String,
    /// 剔除命中文本后的剩余输入
    pub rest: String,
    /// 约束下一级候选的代码前缀
    pub zip_prefix: String,
}

/// 在指定级别上解析输入
///
/// 候选按代码升序遍历，每个候选的变体按长度降序尝试；第一个命中
/// 输入开头（严格前缀，不做子串搜索）的变体即为结果。未命中时原样
/// 返回修剪后的输入和传入的前缀约束。
pub fn resolve(
    level: AreaLevel,
    input: &str,
    zip_prefix: &str,
    gazetteer: &Gazetteer,
    synonyms: &SynonymIndex,
) -> Resolution {
    let input = input.trim();

    for (zip, name) in level.list(gazetteer) {
        if !zip.starts_with(zip_prefix) {
            continue;
        }
        for variant in variants(name, synonyms) {
            if input.starts_with(&variant) {
                return Resolution {
                    zip: zip.clone(),
                    name: name.clone(),
                    rest: input.replacen(&variant, " ", 1),
                    zip_prefix: zip[..level.prefix_len()].to_string(),
                };
            }
        }
    }

    Resolution {
        zip: String::new(),
        name: String::new(),
        rest: input.to_string(),
        zip_prefix: zip_prefix.to_string(),
    }
}

/// 展开一个标准名称的全部匹配变体
///
/// 变体 = 原名 + 去后缀形式 + 两者的同义词，去重后按长度降序排列，
/// 保证"深圳市"先于"深圳"被尝试。
pub fn variants(name: &str, synonyms: &SynonymIndex) -> Vec<String> {
    let stripped = trim_postfix(name);

    let mut out: Vec<&str> = Vec::new();
    for base in [name, stripped] {
        if !base.is_empty() && !out.contains(&base) {
            out.push(base);
        }
        for &synonym in synonyms.lookup(base) {
            if !synonym.is_empty() && !out.contains(&synonym) {
                out.push(synonym);
            }
        }
    }

    out.sort_by_key(|variant| std::cmp::Reverse(variant.chars().count()));
    out.into_iter().map(str::to_string).collect()
}

/// 从名称尾部循环剥离行政后缀，每轮取最长匹配，至少保留 2 个字符
pub fn trim_postfix(name: &str) -> &str {
    let mut rest = name;
    loop {
        let next = POSTFIXES.iter().find_map(|postfix| {
            let remaining = rest.strip_suffix(postfix)?;
            (remaining.chars().count() >= 2).then_some(remaining)
        });
        match next {
            Some(shorter) => rest = shorter,
            None => return rest,
        }
    }
}

/// 由下级代码回填上级：区县代码末 2 位清零得到市，市代码末 4 位
/// 清零得到省。即使代码表中查不到名称，也照样返回推导出的代码。
pub fn parent_of(level: AreaLevel, child_zip: &str, gazetteer: &Gazetteer) -> (String, String) {
    let (parent_zip, list) = match level {
        AreaLevel::Province => (
            format!("{}0000", &child_zip[..2]),
            &gazetteer.province_list,
        ),
        _ => (format!("{}00", &child_zip[..4]), &gazetteer.city_list),
    };

    let name = list.get(&parent_zip).cloned().unwrap_or_default();
    (name, parent_zip)
}
