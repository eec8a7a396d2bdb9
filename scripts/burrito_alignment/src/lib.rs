pub mod alignment;
pub mod cue_header;
pub mod cue_order;
pub mod record_converter;
pub mod timestamp;
pub mod types;
pub mod validator;

pub use alignment::{AlignmentFile, BurritoAudioAlignment, CueBuilder};
pub use cue_header::{CueHeader, match_cue_header, parse_cue_settings};
pub use cue_order::{compare_intervals, sort_cues};
pub use record_converter::{cue_to_record, record_to_cue};
pub use timestamp::{format_timestamp, parse_timestamp_us};
pub use types::{
    AlignmentError, CueContent, CueConversion, FormatType, Record, ReferenceType, SkippedRecord,
    TimeInterval, WriteOptions,
};
pub use validator::validate_records;
