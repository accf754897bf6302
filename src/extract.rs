//! 联系信息抽取：预处理、手机号、身份证号、姓名
//!
//! 每个抽取器都是对输入的一次性扫描，只取第一个命中；流水线在两次
//! 抽取之间把命中的文本替换为空格，避免后续抽取重复消费同一段文本。

use crate::data::{IGNORE_WORDS, PUNCTUATION, SURNAMES};
use once_cell::sync::Lazy;
use regex::Regex;

/// 忽略词剔除，单次替换所有候选（长词在前，避免"电话号码"被"电话"截断）
static IGNORE_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = IGNORE_WORDS
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).expect("invalid ignore-word pattern")
});

/// 手机号：独立的 11 位数字，1 开头
///
/// 边界必须用 ASCII 语义（`(?-u:\b)`）：Unicode 语义下汉字也算
/// 单词字符，紧贴中文的手机号会匹配不到。
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)1[0-9]{10}(?-u:\b)").expect("invalid phone pattern"));

/// 身份证号：17 位数字 + 校验位（数字或 X/x）
static ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{17}[0-9Xx]").expect("invalid id pattern"));

/// 姓名分词的分隔符：数字、拉丁字母、空白、中英文括号
static NAME_DELIM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9A-Za-z\s（）()]+").expect("invalid delimiter pattern"));

/// 预处理：剔除忽略词，再剥离标点，保留其余字符的相对顺序
///
/// 幂等：重复执行结果不变。
pub fn preprocess(input: &str) -> String {
    let cleaned = IGNORE_RE.replace_all(input, "");
    cleaned.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// 提取第一个手机号，未命中返回空字符串
pub fn extract_phone(input: &str) -> String {
    PHONE_RE
        .find(input)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// 提取第一个身份证号，统一转小写
///
/// 需在手机号剔除之后调用，避免与手机号重叠。
pub fn extract_id(input: &str) -> String {
    ID_RE
        .find(input)
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default()
}

/// 提取第一个身份证号的原文（用于从工作串中剔除命中片段）
pub fn extract_id_raw(input: &str) -> String {
    ID_RE
        .find(input)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// 猜测收件人姓名
///
/// 按数字/字母/空白/括号切词后，候选从两端向中间查找（5 个词的
/// 查找顺序是 0,4,1,3,2）：地址文本里姓名很少出现在最中间的街道
/// 段里，首尾附近的短词更可能是人名。第一个长度 2~4 且以已知
/// 姓氏开头的候选即为结果。
pub fn extract_name(input: &str) -> String {
    let words: Vec<&str> = NAME_DELIM_RE
        .split(input)
        .filter(|word| !word.is_empty())
        .collect();

    let n = words.len();
    let mut order: Vec<usize> = (0..n).collect();
    // 按与中点 (n-1)/2 的距离降序稳定排序；距离加倍避免浮点中点
    order.sort_by_key(|&i| std::cmp::Reverse((2 * i).abs_diff(n.saturating_sub(1))));

    for i in order {
        let word = words[i];
        let len = word.chars().count();
        if (2..=4).contains(&len) && SURNAMES.iter().any(|surname| word.starts_with(surname)) {
            return word.to_string();
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_strips_ignore_words_and_punctuation() {
        let input = "收件人：张三，电话：13144381379。";
        assert_eq!(preprocess(input), "张三13144381379");
    }

    #[test]
    fn test_preprocess_longest_ignore_word_wins() {
        // "电话号码" 必须整体剔除，不能只剔掉 "电话" 留下 "号码"
        assert_eq!(preprocess("电话号码13144381379"), "13144381379");
    }

    #[test]
    fn test_preprocess_idempotent() {
        let input = "深圳市宝安区, 收件人：张三 电话：13144381379";
        let once = preprocess(input);
        assert_eq!(preprocess(&once), once);
    }

    #[test]
    fn test_preprocess_no_match_returns_input() {
        assert_eq!(preprocess("宝安区新安街道"), "宝安区新安街道");
        assert_eq!(preprocess(""), "");
    }

    #[test]
    fn test_extract_phone() {
        assert_eq!(extract_phone("尾号13144381379"), "13144381379");
        assert_eq!(extract_phone("13144381379 张三"), "13144381379");
        assert_eq!(extract_phone("小吃A张三13144381379"), "13144381379");
    }

    #[test]
    fn test_extract_phone_rejects_longer_digit_run() {
        // 嵌在更长数字串里的 11 位不算手机号
        assert_eq!(extract_phone("运单9913144381379001"), "");
        assert_eq!(extract_phone("131443813790"), "");
    }

    #[test]
    fn test_extract_phone_requires_leading_one() {
        assert_eq!(extract_phone("23144381379"), "");
        assert_eq!(extract_phone(""), "");
    }

    #[test]
    fn test_extract_id() {
        assert_eq!(
            extract_id("号码110101192007207351在此"),
            "110101192007207351"
        );
        assert_eq!(extract_id("11010119200720735X"), "11010119200720735x");
        assert_eq!(extract_id("1101011920072073"), "");
    }

    #[test]
    fn test_extract_id_raw_keeps_case() {
        assert_eq!(extract_id_raw("11010119200720735X"), "11010119200720735X");
    }

    #[test]
    fn test_extract_name_prefers_outer_tokens() {
        // 词序：["宝安区新安街道", "号沙县小吃", "张三"]，查找顺序 0,2,1
        let name = extract_name("宝安区新安街道128号沙县小吃 张三");
        assert_eq!(name, "张三");
    }

    #[test]
    fn test_extract_name_without_separator() {
        let name = extract_name("宝安区新安街道128号沙县小吃A张三 ");
        assert_eq!(name, "张三");
    }

    #[test]
    fn test_extract_name_rejects_long_token() {
        // 5 字词即使以姓氏开头也不算姓名
        assert_eq!(extract_name("张家界武陵源"), "");
    }

    #[test]
    fn test_extract_name_rejects_unknown_surname() {
        assert_eq!(extract_name("沙县小吃"), "");
        assert_eq!(extract_name(""), "");
    }

    #[test]
    fn test_extract_name_compound_surname() {
        assert_eq!(extract_name("135 欧阳娜娜 0000"), "欧阳娜娜");
    }
}
