//! # Scripture Burrito 音频对齐文件
//!
//! 对齐文件是一个 JSON 文档，把文本引用（例如经文编号）映射到音频中的时间区间。
//! 磁盘上的每条记录保存一个 WebVTT 形式的 `<开始> --> <结束>` 时间码和一个引用标签，
//! 读取时按时间重新排序，不依赖记录在文件中的顺序。

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    record_converter::{convert_records, cue_to_record, cues_to_records},
    types::{
        ALIGNMENT_VERSION, AlignmentError, AudioDocument, CueContent, CueConversion, FormatType,
        Record, ReferenceType, Result, TEXT_REFERENCE_SCHEME, TextReference, TimeInterval,
        Timecode, VTT_TIMESTAMP_SCHEME, WriteOptions,
    },
};

/// 用于生成实际字幕 cue 的外部构建器，例如 WebVTT 输出层。
pub trait CueBuilder {
    type Cue;

    fn build(&mut self, tag: &str, content: &str, start_us: u64, end_us: u64) -> Self::Cue;
}

/// 对齐文件的内存表示。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurritoAudioAlignment {
    format: FormatType,
    version: String,
    #[serde(rename = "type")]
    reference_type: ReferenceType,
    documents: AudioDocument,
    #[serde(default)]
    records: Vec<Record>,
}

impl BurritoAudioAlignment {
    /// 创建一个没有任何记录的新对齐文档。
    #[must_use]
    pub fn new(audio_file_name: impl Into<String>) -> Self {
        Self {
            format: FormatType::Alignment,
            version: ALIGNMENT_VERSION.to_string(),
            reference_type: ReferenceType::AudioReference,
            documents: AudioDocument {
                timecode: Timecode {
                    scheme: VTT_TIMESTAMP_SCHEME.to_string(),
                    docid: audio_file_name.into(),
                },
                text_reference: TextReference {
                    scheme: TEXT_REFERENCE_SCHEME.to_string(),
                },
            },
            records: Vec::new(),
        }
    }

    /// 从 JSON 文本解析对齐文档。
    ///
    /// 得到的文档不绑定任何路径，需要用 [`write`](Self::write) 显式写出。
    ///
    /// # 错误
    ///
    /// 缺少必需字段、字段类型错误或 `format`/`type` 不是已知常量时返回
    /// [`AlignmentError::Format`]。
    pub fn load_from_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    #[must_use]
    pub fn audio_file_name(&self) -> &str {
        &self.documents.timecode.docid
    }

    #[must_use]
    pub fn timecode_scheme(&self) -> &str {
        &self.documents.timecode.scheme
    }

    #[must_use]
    pub fn text_reference_scheme(&self) -> &str {
        &self.documents.text_reference.scheme
    }

    #[must_use]
    pub const fn format(&self) -> FormatType {
        self.format
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub const fn reference_type(&self) -> ReferenceType {
        self.reference_type
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// 返回按时间排序的所有 cue，无法转换的记录会被忽略。
    #[must_use]
    pub fn all_cues(&self) -> Vec<CueContent> {
        self.cues_with_diagnostics().cues
    }

    /// 与 [`all_cues`](Self::all_cues) 相同，同时返回被跳过的记录。
    #[must_use]
    pub fn cues_with_diagnostics(&self) -> CueConversion {
        convert_records(&self.records, self.timecode_scheme())
    }

    /// 把排好序的 cue 依次交给外部构建器。
    pub fn build_cues<B: CueBuilder>(&self, builder: &mut B) -> Vec<B::Cue> {
        self.all_cues()
            .iter()
            .map(|cue| {
                builder.build(
                    &cue.tag,
                    &cue.content,
                    cue.interval.start_us,
                    cue.interval.end_us,
                )
            })
            .collect()
    }

    /// 用给定的 cue 整体替换所有记录。
    ///
    /// 记录按传入顺序保存，不会重新排序。
    pub fn set_records_from_cues(&mut self, cues: &[CueContent]) {
        self.records = cues_to_records(cues);
    }

    /// 追加一条记录，返回它对应的 cue。
    pub fn add_cue(&mut self, interval: TimeInterval, tag: &str) -> CueContent {
        self.records.push(cue_to_record(&interval, tag));
        CueContent::from_reference(tag, interval)
    }

    /// 序列化为 JSON 字符串。
    pub fn to_json(&self, options: WriteOptions) -> Result<String> {
        let json = if options.pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// 把整个文档写到指定路径，覆盖已有内容。
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_with_options(path, WriteOptions::default())
    }

    pub fn write_with_options(&self, path: impl AsRef<Path>, options: WriteOptions) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json(options)?;
        fs::write(path, json)?;
        info!(
            "已写入对齐文件 {:?} ({} 条记录)",
            path,
            self.records.len()
        );
        Ok(())
    }
}

impl FromStr for BurritoAudioAlignment {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::load_from_str(s)
    }
}

/// 绑定到文件路径的对齐文档。
///
/// 只有通过 [`create`](Self::create) 或 [`load`](Self::load) 得到的文档才能
/// [`persist`](Self::persist)。写入是整文件覆盖，不是原子操作。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentFile {
    path: PathBuf,
    alignment: BurritoAudioAlignment,
}

impl AlignmentFile {
    /// 创建（或截断）`path` 处的文件，并立即写入一个空的对齐文档。
    pub fn create(audio_file_name: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self> {
        let file = Self {
            path: path.into(),
            alignment: BurritoAudioAlignment::new(audio_file_name),
        };
        info!(
            "创建对齐文件 {:?}，音频文件: {}",
            file.path,
            file.alignment.audio_file_name()
        );
        file.persist()?;
        Ok(file)
    }

    /// 读取 `path` 处的对齐文件。
    ///
    /// # 错误
    ///
    /// 文件无法读取时返回 [`AlignmentError::Io`]，内容不符合格式时返回
    /// [`AlignmentError::Format`]。
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        let alignment = BurritoAudioAlignment::load_from_str(&text)?;
        info!(
            "已读取对齐文件 {:?} ({} 条记录)",
            path,
            alignment.records.len()
        );
        Ok(Self { path, alignment })
    }

    /// 把当前状态写回绑定的路径。
    pub fn persist(&self) -> Result<()> {
        self.alignment.write(&self.path)
    }

    pub fn persist_with_options(&self, options: WriteOptions) -> Result<()> {
        self.alignment.write_with_options(&self.path, options)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn alignment(&self) -> &BurritoAudioAlignment {
        &self.alignment
    }

    pub const fn alignment_mut(&mut self) -> &mut BurritoAudioAlignment {
        &mut self.alignment
    }

    #[must_use]
    pub fn into_inner(self) -> BurritoAudioAlignment {
        self.alignment
    }
}
