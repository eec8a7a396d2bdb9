//! 定义了 Scripture Burrito 音频对齐文件中使用的核心数据类型。

use std::io;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

//=============================================================================
// 1. 错误枚举
//=============================================================================

/// 定义读取、转换和写入对齐文件时可能发生的各种错误。
#[derive(Error, Debug)]
pub enum AlignmentError {
    /// 时间戳中存在无法解析为非负整数的部分。
    #[error("无效的时间戳 '{timestamp}': {reason}")]
    InvalidTimestamp { timestamp: String, reason: String },
    /// 时间码不符合 `<开始> --> <结束>` 的形式。
    #[error("时间码不符合 `<开始> --> <结束>` 格式: '{0}'")]
    CueHeaderMismatch(String),
    /// 记录中缺少必须的列表元素。
    #[error("记录缺少字段: {0}")]
    MissingField(&'static str),
    /// JSON 结构与对齐文件格式不符，通常来自 `serde_json`。
    #[error("对齐文件格式错误: {0}")]
    Format(#[from] serde_json::Error),
    /// 字符串不属于固定常量集合。
    #[error("未知的常量值: '{0}'")]
    UnknownConstant(String),
    /// 文件创建、截断或写入失败。
    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),
}

impl From<AlignmentError> for io::Error {
    fn from(err: AlignmentError) -> Self {
        Self::other(err)
    }
}

pub type Result<T, E = AlignmentError> = std::result::Result<T, E>;

//=============================================================================
// 2. 固定常量与封闭枚举
//=============================================================================

/// 当前支持的对齐文件版本。
pub const ALIGNMENT_VERSION: &str = "0.3";
/// `documents.timecode.scheme` 的取值，也是每条记录转换时使用的时间戳方案。
pub const VTT_TIMESTAMP_SCHEME: &str = "vtt-timestamp";
/// `documents.text-reference.scheme` 的取值。
pub const TEXT_REFERENCE_SCHEME: &str = "u23003";

/// 对齐文件的 `format` 字段。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum FormatType {
    #[default]
    #[strum(serialize = "alignment")]
    #[serde(rename = "alignment")]
    Alignment,
}

impl FormatType {
    /// 从字符串常量解析，遇到未知值时报错。
    pub fn from_value(value: &str) -> Result<Self> {
        value
            .parse()
            .map_err(|_| AlignmentError::UnknownConstant(value.to_string()))
    }
}

/// 对齐文件的 `type` 字段。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum ReferenceType {
    #[default]
    #[strum(serialize = "audio-reference")]
    #[serde(rename = "audio-reference")]
    AudioReference,
}

impl ReferenceType {
    /// 从字符串常量解析，遇到未知值时报错。
    pub fn from_value(value: &str) -> Result<Self> {
        value
            .parse()
            .map_err(|_| AlignmentError::UnknownConstant(value.to_string()))
    }
}

//=============================================================================
// 3. 文件结构
//=============================================================================

/// 一条磁盘上的对齐记录。
///
/// 两个字段都声明为列表，但目前只读取第一个元素。
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 形如 `"00:00:01.000 --> 00:00:03.500"` 的时间码。
    #[serde(default)]
    pub timecode: Vec<String>,
    /// 文本引用标签，例如经文编号。
    #[serde(rename = "text-reference", default)]
    pub text_reference: Vec<String>,
}

/// `documents.timecode`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timecode {
    /// 时间戳方案
    pub scheme: String,
    /// 被引用的音频文件名
    pub docid: String,
}

/// `documents.text-reference`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextReference {
    pub scheme: String,
}

/// 对齐文件中描述被对齐文档的部分。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioDocument {
    pub timecode: Timecode,
    #[serde(rename = "text-reference")]
    pub text_reference: TextReference,
}

//=============================================================================
// 4. 内存中的 cue 表示
//=============================================================================

/// 以微秒表示的时间区间。
///
/// 构造时不检查 `end_us >= start_us`，倒置的区间由
/// [`validate_records`](crate::validator::validate_records) 报告。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    pub start_us: u64,
    pub end_us: u64,
}

impl TimeInterval {
    #[must_use]
    pub const fn new(start_us: u64, end_us: u64) -> Self {
        Self { start_us, end_us }
    }

    /// 区间长度，倒置区间返回 0。
    #[must_use]
    pub const fn duration_us(&self) -> u64 {
        self.end_us.saturating_sub(self.start_us)
    }

    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.end_us < self.start_us
    }
}

/// 一个带内容的 cue。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueContent {
    /// 引用标签
    pub tag: String,
    /// cue 内容，从记录转换而来时与 `tag` 相同
    pub content: String,
    pub interval: TimeInterval,
}

impl CueContent {
    /// 创建一个 `tag` 与 `content` 相同的 cue。
    #[must_use]
    pub fn from_reference(reference: impl Into<String>, interval: TimeInterval) -> Self {
        let reference = reference.into();
        Self {
            tag: reference.clone(),
            content: reference,
            interval,
        }
    }
}

/// 一条无法转换为 cue 而被跳过的记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 记录在 `records` 中的下标
    pub index: usize,
    /// 记录的第一个时间码（如果存在）
    pub timecode: Option<String>,
    /// 跳过的原因
    pub reason: String,
}

/// 记录转换的结果：排好序的 cue 和被跳过的记录。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CueConversion {
    pub cues: Vec<CueContent>,
    pub skipped: Vec<SkippedRecord>,
}

//=============================================================================
// 5. 选项
//=============================================================================

/// 写出对齐文件时的选项。
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// 是否输出带缩进的 JSON。默认输出紧凑的单行 JSON。
    pub pretty: bool,
}
