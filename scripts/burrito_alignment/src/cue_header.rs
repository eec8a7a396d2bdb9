//! 识别 `<开始> --> <结束> [设置]` 形式的 cue 头行。

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    timestamp::parse_timestamp_us,
    types::{AlignmentError, Result},
};

static CUE_HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\S+)\s+-->\s+(\S+)(.*)?$").expect("cue 头正则表达式无效")
});

static CUE_SETTING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S+?):(\S+)").expect("cue 设置正则表达式无效"));

/// 从 cue 头行中解析出的时间和设置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueHeader<'a> {
    pub start_us: u64,
    pub end_us: u64,
    /// 结束时间之后的文本，已去除首尾空白
    pub settings: &'a str,
}

/// 匹配一行 cue 头。
///
/// 形状不符或任一时间戳解析失败时返回 `None`，调用方应跳过该记录。
#[must_use]
pub fn match_cue_header(line: &str) -> Option<CueHeader<'_>> {
    try_match_cue_header(line).ok()
}

/// 与 [`match_cue_header`] 相同，但保留失败原因，用于诊断。
pub fn try_match_cue_header(line: &str) -> Result<CueHeader<'_>> {
    let captures = CUE_HEADER_PATTERN
        .captures(line)
        .ok_or_else(|| AlignmentError::CueHeaderMismatch(line.to_string()))?;

    let (Some(start), Some(end)) = (captures.get(1), captures.get(2)) else {
        return Err(AlignmentError::CueHeaderMismatch(line.to_string()));
    };

    let start_us = parse_timestamp_us(start.as_str())?;
    let end_us = parse_timestamp_us(end.as_str())?;
    let settings = captures.get(3).map_or("", |m| m.as_str().trim());

    Ok(CueHeader {
        start_us,
        end_us,
        settings,
    })
}

/// 把 cue 设置拆成 `(名称, 值)` 对，例如 `"align:start line:0"`。
#[must_use]
pub fn parse_cue_settings(settings: &str) -> Vec<(&str, &str)> {
    CUE_SETTING_PATTERN
        .captures_iter(settings)
        .filter_map(|c| Some((c.get(1)?.as_str(), c.get(2)?.as_str())))
        .collect()
}
