//! cue 的排序规则。

use std::cmp::Ordering;

use crate::types::{CueContent, TimeInterval};

/// 比较两个区间的显示顺序。
///
/// 开始时间不同时按开始时间升序；开始时间相同时结束时间较晚的排在前面，
/// 这样同时开始的嵌套区间按由外到内的顺序排列。
#[must_use]
pub fn compare_intervals(first: &TimeInterval, second: &TimeInterval) -> Ordering {
    first
        .start_us
        .cmp(&second.start_us)
        .then_with(|| second.end_us.cmp(&first.end_us))
}

/// 返回按 [`compare_intervals`] 排好序的新列表。
///
/// 排序是稳定的，开始和结束时间都相同的 cue 保持输入顺序。
#[must_use]
pub fn sort_cues<I>(cues: I) -> Vec<CueContent>
where
    I: IntoIterator<Item = CueContent>,
{
    let mut sorted: Vec<CueContent> = cues.into_iter().collect();
    sorted.sort_by(|a, b| compare_intervals(&a.interval, &b.interval));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(tag: &str, start_us: u64, end_us: u64) -> CueContent {
        CueContent::from_reference(tag, TimeInterval::new(start_us, end_us))
    }

    fn tags(cues: &[CueContent]) -> Vec<&str> {
        cues.iter().map(|c| c.tag.as_str()).collect()
    }

    #[test]
    fn test_shared_start_longer_first() {
        let a = cue("A", 1000, 5000);
        let b = cue("B", 1000, 3000);
        let c = cue("C", 500, 900);

        let sorted = sort_cues(vec![a, b, c]);
        assert_eq!(tags(&sorted), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_compare_intervals() {
        let outer = TimeInterval::new(1000, 5000);
        let inner = TimeInterval::new(1000, 3000);
        let later = TimeInterval::new(2000, 2500);

        assert_eq!(compare_intervals(&outer, &inner), Ordering::Less);
        assert_eq!(compare_intervals(&inner, &outer), Ordering::Greater);
        assert_eq!(compare_intervals(&inner, &later), Ordering::Less);
        assert_eq!(compare_intervals(&outer, &outer), Ordering::Equal);
    }

    #[test]
    fn test_identical_intervals_keep_input_order() {
        let sorted = sort_cues(vec![
            cue("later", 2000, 3000),
            cue("first", 1000, 2000),
            cue("second", 1000, 2000),
            cue("third", 1000, 2000),
        ]);
        assert_eq!(tags(&sorted), vec!["first", "second", "third", "later"]);
    }

    #[test]
    fn test_sort_does_not_touch_input() {
        let input = vec![cue("B", 2000, 3000), cue("A", 1000, 2000)];
        let sorted = sort_cues(input.iter().cloned());
        assert_eq!(tags(&input), vec!["B", "A"]);
        assert_eq!(tags(&sorted), vec!["A", "B"]);
        assert!(sort_cues(Vec::<CueContent>::new()).is_empty());
    }
}
