use crate::{alignment::BurritoAudioAlignment, record_converter::try_record_to_cue};

/// 对对齐文档中的记录进行验证。
///
/// 读取 cue 时坏记录会被静默跳过，这里把它们以及结束时间早于开始时间的
/// 记录全部列出来。
///
/// # 返回
///
/// * `Ok(())` - 如果所有记录都有效。
/// * `Err(Vec<String>)` - 如果发现任何问题。
pub fn validate_records(alignment: &BurritoAudioAlignment) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();
    let scheme = alignment.timecode_scheme();

    for (idx, record) in alignment.records().iter().enumerate() {
        match try_record_to_cue(record, scheme) {
            Ok(cue) => {
                if cue.interval.is_inverted() {
                    errors.push(format!(
                        "第 {} 条记录 '{}' 结束时间 ({}us) 小于开始时间 ({}us).",
                        idx + 1,
                        cue.tag,
                        cue.interval.end_us,
                        cue.interval.start_us
                    ));
                }
            }
            Err(err) => {
                errors.push(format!("第 {} 条记录无法转换: {}", idx + 1, err));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
