//! WebVTT 时间戳与微秒之间的相互转换。

use crate::types::{AlignmentError, Result};

const US_PER_MS: u64 = 1_000;
const US_PER_SECOND: u64 = 1_000_000;
const US_PER_MINUTE: u64 = 60 * US_PER_SECOND;
const US_PER_HOUR: u64 = 60 * US_PER_MINUTE;

/// 冒号分隔的部分最多为 `时:分:秒`。
const MAX_TIME_PARTS: usize = 3;

/// 解析 WebVTT 时间戳到微秒。
///
/// 支持 `HH:MM:SS.mmm`、`MM:SS.mmm` 和 `SS.mmm`，小时与分钟都可省略。
/// 冒号分隔的各部分按 60 进制从左到右累加，不检查分钟和秒是否小于 60。
///
/// 注意：小数点后的文本直接按整数毫秒累加，而不是按十进制小数处理，
/// 所以 `"01.5"` 是 1005 毫秒而不是 1500 毫秒。已有的对齐文件都是
/// 三位毫秒，这里保持与其他工具一致的行为。
///
/// # 错误
///
/// 任何部分不是合法的非负整数、部分过多或结果溢出时返回
/// [`AlignmentError::InvalidTimestamp`]。
pub fn parse_timestamp_us(timestamp: &str) -> Result<u64> {
    let invalid = |reason: String| AlignmentError::InvalidTimestamp {
        timestamp: timestamp.to_string(),
        reason,
    };

    let (whole, fraction) = match timestamp.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (timestamp, None),
    };

    let mut seconds: u64 = 0;
    for (idx, subpart) in whole.split(':').enumerate() {
        if idx >= MAX_TIME_PARTS {
            return Err(invalid(format!("包含超过 {MAX_TIME_PARTS} 个部分")));
        }
        let value = subpart
            .parse::<u64>()
            .map_err(|e| invalid(format!("无法解析 '{subpart}': {e}")))?;
        seconds = seconds
            .checked_mul(60)
            .and_then(|s| s.checked_add(value))
            .ok_or_else(|| invalid("数值溢出".to_string()))?;
    }

    let mut millis = seconds
        .checked_mul(1000)
        .ok_or_else(|| invalid("数值溢出".to_string()))?;

    if let Some(ms_str) = fraction {
        let ms = ms_str
            .parse::<u64>()
            .map_err(|e| invalid(format!("无法解析毫秒部分 '{ms_str}': {e}")))?;
        millis = millis
            .checked_add(ms)
            .ok_or_else(|| invalid("数值溢出".to_string()))?;
    }

    millis
        .checked_mul(US_PER_MS)
        .ok_or_else(|| invalid("数值溢出".to_string()))
}

/// 将微秒格式化为 `HHH:MM:SS.mmm`。
///
/// 小时补零到 3 位，不足 1 毫秒的部分直接截断。
/// 例如：3_723_004_000 -> "001:02:03.004"
#[must_use]
pub fn format_timestamp(time_us: u64) -> String {
    let hours = time_us / US_PER_HOUR;
    let minutes = (time_us % US_PER_HOUR) / US_PER_MINUTE;
    let seconds = (time_us % US_PER_MINUTE) / US_PER_SECOND;
    let millis = (time_us % US_PER_SECOND) / US_PER_MS;

    format!("{hours:03}:{minutes:02}:{seconds:02}.{millis:03}")
}
