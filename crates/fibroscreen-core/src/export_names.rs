//! Export file naming conventions.
//!
//! Pure string functions. Every export of one assessment shares the same
//! timestamp stem so the files sort together.

use jiff::civil::DateTime;

pub const FILE_PREFIX: &str = "fibromyalgia_assessment";

const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn stem(at: DateTime) -> String {
    format!("{FILE_PREFIX}_{}", at.strftime(STAMP_FORMAT))
}

pub fn json(at: DateTime) -> String {
    format!("{}.json", stem(at))
}

pub fn csv(at: DateTime) -> String {
    format!("{}.csv", stem(at))
}

pub fn report(at: DateTime) -> String {
    format!("{}.txt", stem(at))
}
