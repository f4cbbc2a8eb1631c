// Parser module: delimited segment source and the validated Segment view of a row.

pub mod source;

use csv::StringRecord;

pub use source::SegmentSource;

// Segment borrows the three required fields of one data record.
// Fields past index 2 are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub start: &'a str,
    pub end: &'a str,
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    // Returns None for short rows and rows with an empty start, end or text.
    // No trimming happens here: a text of only spaces is still a segment.
    pub fn from_record(record: &'a StringRecord) -> Option<Self> {
        if record.len() < 3 {
            return None;
        }
        let start = record.get(0)?;
        let end = record.get(1)?;
        let text = record.get(2)?;
        if start.is_empty() || end.is_empty() || text.is_empty() {
            return None;
        }
        Some(Self { start, end, text })
    }
}
