//! 对齐记录与 cue 之间的相互转换。

use log::{debug, warn};

use crate::{
    cue_header::try_match_cue_header,
    cue_order::sort_cues,
    timestamp::format_timestamp,
    types::{
        AlignmentError, CueContent, CueConversion, Record, Result, SkippedRecord, TimeInterval,
        VTT_TIMESTAMP_SCHEME,
    },
};

/// 把一条记录转换为 cue。
///
/// 时间码不符合 cue 头格式或时间戳无法解析时返回 `None`。
/// 引用标签同时作为 cue 的 `tag` 和 `content`。
#[must_use]
pub fn record_to_cue(record: &Record, scheme: &str) -> Option<CueContent> {
    try_record_to_cue(record, scheme).ok()
}

/// 与 [`record_to_cue`] 相同，但保留失败原因。
///
/// 目前所有时间码都按 `vtt-timestamp` 解析。
pub fn try_record_to_cue(record: &Record, scheme: &str) -> Result<CueContent> {
    if scheme != VTT_TIMESTAMP_SCHEME {
        debug!("未知的时间戳方案 '{scheme}'，按 {VTT_TIMESTAMP_SCHEME} 解析");
    }

    let timecode = record
        .timecode
        .first()
        .ok_or(AlignmentError::MissingField("timecode"))?;
    let reference = record
        .text_reference
        .first()
        .ok_or(AlignmentError::MissingField("text-reference"))?;

    let header = try_match_cue_header(timecode)?;

    Ok(CueContent::from_reference(
        reference.as_str(),
        TimeInterval::new(header.start_us, header.end_us),
    ))
}

/// 把一个区间和标签转换为记录。
#[must_use]
pub fn cue_to_record(interval: &TimeInterval, tag: &str) -> Record {
    Record {
        timecode: vec![format!(
            "{} --> {}",
            format_timestamp(interval.start_us),
            format_timestamp(interval.end_us)
        )],
        text_reference: vec![tag.to_string()],
    }
}

/// 转换所有记录并排序。
///
/// 无法转换的记录不会中断转换，而是记录在 `skipped` 中。
#[must_use]
pub fn convert_records(records: &[Record], scheme: &str) -> CueConversion {
    let mut cues = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match try_record_to_cue(record, scheme) {
            Ok(cue) => cues.push(cue),
            Err(err) => {
                warn!("跳过第 {index} 条记录: {err}");
                skipped.push(SkippedRecord {
                    index,
                    timecode: record.timecode.first().cloned(),
                    reason: err.to_string(),
                });
            }
        }
    }

    debug!(
        "转换了 {} 条记录，跳过 {} 条",
        cues.len(),
        skipped.len()
    );

    CueConversion {
        cues: sort_cues(cues),
        skipped,
    }
}

/// 按给定顺序把 cue 转换为记录，不重新排序。
#[must_use]
pub fn cues_to_records(cues: &[CueContent]) -> Vec<Record> {
    cues.iter()
        .map(|cue| cue_to_record(&cue.interval, &cue.tag))
        .collect()
}
