//! Domain-specific assertion macros for tenday harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! name the forecast line that misbehaved.

/// Assert that a line parses into exactly the expected record.
///
/// ```rust
/// assert_parses!("Tonight Showers --/54° WindS8mph", expected_record);
/// ```
#[macro_export]
macro_rules! assert_parses {
    ($line:expr, $expected:expr) => {{
        let line: &str = $line;
        match tenday_core::extract_line(line) {
            Some(actual) => pretty_assertions::assert_eq!(
                actual,
                $expected,
                "assert_parses! failed for line {:?}",
                line
            ),
            None => panic!("assert_parses! failed: line {:?} produced no record", line),
        }
    }};
}

/// Assert that a line is skipped.
#[macro_export]
macro_rules! assert_skipped {
    ($line:expr) => {{
        let line: &str = $line;
        if let Some(record) = tenday_core::extract_line(line) {
            panic!(
                "assert_skipped! failed: line {:?} produced a record:\n  {:?}",
                line, record
            );
        }
    }};
}

/// Assert that the records' date labels appear in the same relative order as
/// the lines they were parsed from.
#[macro_export]
macro_rules! assert_in_line_order {
    ($records:expr, $lines:expr) => {{
        let records: &[tenday_core::DayRecord] = &$records;
        let lines: &[String] = &$lines;
        let mut from = 0usize;
        for record in records {
            match lines[from..]
                .iter()
                .position(|l| l.starts_with(record.date_label.as_str()))
            {
                Some(offset) => from += offset + 1,
                None => panic!(
                    "assert_in_line_order! failed: record {:?} is out of order (searching from line {})",
                    record.date_label, from
                ),
            }
        }
    }};
}
