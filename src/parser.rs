//! Instance file loader.
//!
//! # Format
//!
//! Line-oriented, whitespace-separated integers, blank lines ignored:
//!
//! | Line | Content | Unit |
//! |------|---------|------|
//! | 1 | `num_rooms num_nurses num_surgeries` | count |
//! | 2 | min start per surgery | hours |
//! | 3 | max end per surgery | hours |
//! | 4 | duration per surgery | minutes |
//! | 5 | needed nurses per surgery | count |
//! | 6 | earliest shift start per nurse | hours |
//! | 7 | latest shift end per nurse | hours |
//! | 8 | maximum shift duration | hours |
//! | 9.. | one row per surgery, `num_rooms` flags (1 = incompatible) | flag |
//!
//! Hour fields are converted to minutes. Extra tokens on a line are
//! ignored. A row whose expected value count is zero (e.g. the surgery
//! rows of an instance without surgeries) is not read, since it would be
//! blank.

use std::path::Path;
use std::str::FromStr;

use crate::error::InstanceError;
use crate::models::{Instance, NurseShift, Surgery};

const MINUTES_PER_HOUR: i64 = 60;

/// Non-blank lines with their physical line numbers.
struct LineReader<'a> {
    lines: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();
        Self { lines, pos: 0 }
    }

    fn next_line(&mut self, field: &'static str) -> Result<(usize, &'a str), InstanceError> {
        let after = match self.pos {
            0 => 0,
            p => self.lines[p - 1].0,
        };
        let line = self
            .lines
            .get(self.pos)
            .copied()
            .ok_or(InstanceError::MissingLine { field, after })?;
        self.pos += 1;
        Ok(line)
    }

    /// Reads the first `count` integers of the next line.
    fn values<T: FromStr>(
        &mut self,
        field: &'static str,
        count: usize,
    ) -> Result<(usize, Vec<T>), InstanceError> {
        if count == 0 {
            return Ok((0, Vec::new()));
        }
        let (line, text) = self.next_line(field)?;
        let tokens: Vec<&str> = text.split_whitespace().take(count).collect();
        if tokens.len() < count {
            return Err(InstanceError::TooFewValues {
                line,
                field,
                expected: count,
                found: tokens.len(),
            });
        }
        let values = tokens
            .into_iter()
            .map(|t| {
                t.parse::<T>().map_err(|_| InstanceError::InvalidInteger {
                    line,
                    field,
                    token: t.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((line, values))
    }

    /// Reads `count` hour values and converts them to minutes.
    fn hours_as_minutes(
        &mut self,
        field: &'static str,
        count: usize,
    ) -> Result<Vec<i64>, InstanceError> {
        let (line, hours) = self.values::<i64>(field, count)?;
        hours
            .into_iter()
            .map(|h| {
                h.checked_mul(MINUTES_PER_HOUR)
                    .ok_or(InstanceError::Overflow {
                        line,
                        field,
                        value: h,
                    })
            })
            .collect()
    }
}

/// Parses an instance from its text representation.
///
/// # Errors
/// Returns [`InstanceError`] if a line is missing, has too few values,
/// holds a non-integer token, or an hour value overflows.
pub fn parse_instance(text: &str) -> Result<Instance, InstanceError> {
    let mut reader = LineReader::new(text);

    let (_, header) = reader.values::<usize>("header", 3)?;
    let (num_rooms, num_nurses, num_surgeries) = (header[0], header[1], header[2]);

    let min_start = reader.hours_as_minutes("min_start", num_surgeries)?;
    let max_end = reader.hours_as_minutes("max_end", num_surgeries)?;
    let (_, duration) = reader.values::<i64>("duration", num_surgeries)?;
    let (_, needed) = reader.values::<usize>("needed_nurses", num_surgeries)?;
    let shift_start = reader.hours_as_minutes("shift_earliest_start", num_nurses)?;
    let shift_end = reader.hours_as_minutes("shift_latest_end", num_nurses)?;
    let max_shift_duration = reader.hours_as_minutes("max_shift_duration", 1)?[0];

    let mut instance = Instance::new(num_rooms, max_shift_duration);
    for (start, end) in shift_start.into_iter().zip(shift_end) {
        instance = instance.with_nurse(NurseShift::new(start, end));
    }
    for s in 0..num_surgeries {
        let (_, flags) = reader.values::<i64>("incompatible_rooms", num_rooms)?;
        let surgery = Surgery::new(min_start[s], max_end[s], duration[s])
            .with_needed_nurses(needed[s])
            .with_incompatible_rooms(flags.into_iter().map(|f| f == 1).collect());
        instance = instance.with_surgery(surgery);
    }

    Ok(instance)
}

/// Reads and parses an instance file.
pub fn load_instance(path: impl AsRef<Path>) -> Result<Instance, InstanceError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let instance = parse_instance(&text)?;
    tracing::debug!(
        path = %path.display(),
        rooms = instance.num_rooms,
        nurses = instance.num_nurses(),
        surgeries = instance.num_surgeries(),
        demand = instance.total_nurse_demand(),
        "loaded surgery instance"
    );
    Ok(instance)
}

impl FromStr for Instance {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instance(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
2 3 2
8 9
12 14

90 120
2 1
7 8 13
15 16 20
8
0 1

0 0
";

    #[test]
    fn test_parse_sample() {
        let inst = parse_instance(SAMPLE).unwrap();
        assert_eq!(inst.num_rooms, 2);
        assert_eq!(inst.num_nurses(), 3);
        assert_eq!(inst.num_surgeries(), 2);

        let s0 = &inst.surgeries[0];
        assert_eq!(s0.min_start(), 480);
        assert_eq!(s0.max_end(), 720);
        assert_eq!(s0.duration, 90);
        assert_eq!(s0.needed_nurses, 2);
        assert_eq!(s0.incompatible_rooms, vec![false, true]);

        let s1 = &inst.surgeries[1];
        assert_eq!(s1.min_start(), 540);
        assert_eq!(s1.max_end(), 840);
        assert_eq!(s1.duration, 120);
        assert_eq!(s1.incompatible_rooms, vec![false, false]);

        assert_eq!(inst.nurses[2].earliest_start(), 780);
        assert_eq!(inst.nurses[2].latest_end(), 1200);
        assert_eq!(inst.max_shift_duration, 480);
    }

    #[test]
    fn test_from_str() {
        let inst: Instance = SAMPLE.parse().unwrap();
        assert_eq!(inst.num_surgeries(), 2);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let text = "1 1 1 99\n0 5\n2 5\n60 5\n1 5\n0 5\n8 5\n8 5\n0 1 1\n";
        let inst = parse_instance(text).unwrap();
        assert_eq!(inst.num_rooms, 1);
        assert_eq!(inst.surgeries[0].max_end(), 120);
        assert_eq!(inst.surgeries[0].incompatible_rooms, vec![false]);
    }

    #[test]
    fn test_non_one_flags_are_compatible() {
        let text = "3 1 1\n0\n2\n60\n1\n0\n8\n8\n2 1 0\n";
        let inst = parse_instance(text).unwrap();
        assert_eq!(
            inst.surgeries[0].incompatible_rooms,
            vec![false, true, false]
        );
    }

    #[test]
    fn test_missing_line() {
        let text = "1 1 1\n0\n2\n60\n1\n0\n8\n8\n";
        let err = parse_instance(text).unwrap_err();
        assert!(matches!(
            err,
            InstanceError::MissingLine {
                field: "incompatible_rooms",
                after: 8
            }
        ));
    }

    #[test]
    fn test_empty_input() {
        let err = parse_instance("   \n\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::MissingLine {
                field: "header",
                after: 0
            }
        ));
    }

    #[test]
    fn test_too_few_values() {
        let text = "1 1 2\n0 1\n2\n";
        let err = parse_instance(text).unwrap_err();
        assert!(matches!(
            err,
            InstanceError::TooFewValues {
                line: 3,
                field: "max_end",
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_invalid_integer_reports_physical_line() {
        let text = "1 1 1\n\n0\n2\nsixty\n";
        let err = parse_instance(text).unwrap_err();
        match err {
            InstanceError::InvalidInteger { line, field, token } => {
                assert_eq!(line, 5);
                assert_eq!(field, "duration");
                assert_eq!(token, "sixty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = parse_instance("1 -1 1\n").unwrap_err();
        assert!(matches!(err, InstanceError::InvalidInteger { field: "header", .. }));
    }

    #[test]
    fn test_hour_overflow() {
        let text = format!("1 1 1\n{}\n", i64::MAX);
        let err = parse_instance(&text).unwrap_err();
        assert!(matches!(err, InstanceError::Overflow { field: "min_start", .. }));
    }

    #[test]
    fn test_instance_without_surgeries() {
        let text = "2 1 0\n6\n14\n8\n";
        let inst = parse_instance(text).unwrap();
        assert_eq!(inst.num_surgeries(), 0);
        assert_eq!(inst.num_nurses(), 1);
        assert_eq!(inst.nurses[0].earliest_start(), 360);
        assert_eq!(inst.max_shift_duration, 480);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_instance("/nonexistent/surgery/instance.txt").unwrap_err();
        assert!(matches!(err, InstanceError::Io(_)));
    }
}
