//! Result aggregation: grouping responses by calendar date and summing
//! numeric fields over a date group.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::{FieldDef, FieldType};
use crate::types::{CalendarDate, DbId, Timestamp};

/// Member name shown when a response's member row is missing.
pub const UNKNOWN_MEMBER: &str = "Unknown";

/// One response with its member name and values keyed by field id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEntry {
    pub id: DbId,
    pub date: CalendarDate,
    pub created_at: Timestamp,
    pub member_name: String,
    pub values: BTreeMap<DbId, String>,
}

/// Responses grouped by their stored date. Each group keeps the input
/// order of its responses.
pub type DateGroups = BTreeMap<CalendarDate, Vec<ResponseEntry>>;

/// Group responses by date.
pub fn group_by_date(entries: &[ResponseEntry]) -> DateGroups {
    let mut groups = DateGroups::new();
    for entry in entries {
        groups.entry(entry.date).or_default().push(entry.clone());
    }
    groups
}

/// Dates present in `groups`, newest first.
pub fn dates_newest_first(groups: &DateGroups) -> Vec<CalendarDate> {
    groups.keys().rev().copied().collect()
}

/// Pick the date group to summarize.
///
/// An explicitly requested date always wins, even if it has no responses.
/// Otherwise today is used when it has responses, then the newest date.
pub fn select_date(
    groups: &DateGroups,
    requested: Option<CalendarDate>,
    today: CalendarDate,
) -> Option<CalendarDate> {
    if requested.is_some() {
        return requested;
    }
    if groups.contains_key(&today) {
        return Some(today);
    }
    groups.keys().next_back().copied()
}

/// Parse a stored numeric value from its leading number, so `"12kg"` counts
/// as 12 and `"3.5.2"` as 3.5. Absent values, values with no leading number
/// and non-finite results count as zero.
pub fn parse_numeric(value: Option<&str>) -> f64 {
    value
        .and_then(|v| leading_number(v.trim_start()))
        .and_then(|n| n.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// The longest prefix of `s` shaped like a decimal float: optional sign,
/// digits with an optional fraction, then an optional exponent.
fn leading_number(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits + frac_digits > 0 {
            mantissa_digits += frac_digits;
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

/// Sum one field's values over a set of responses.
pub fn field_sum(field_id: DbId, entries: &[ResponseEntry]) -> f64 {
    entries
        .iter()
        .map(|e| parse_numeric(e.values.get(&field_id).map(String::as_str)))
        .sum()
}

/// Per-field sums for every numeric field in `fields`.
pub fn numeric_sums<F: FieldDef>(fields: &[F], entries: &[ResponseEntry]) -> BTreeMap<DbId, f64> {
    fields
        .iter()
        .filter(|f| f.field_type() == FieldType::Number)
        .map(|f| (f.id(), field_sum(f.id(), entries)))
        .collect()
}

/// Totals for the selected date group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateSummary {
    pub date: CalendarDate,
    pub response_count: usize,
    pub sums: BTreeMap<DbId, f64>,
}

/// Summarize the selected date group, if any date is selected.
pub fn summarize<F: FieldDef>(
    fields: &[F],
    groups: &DateGroups,
    selected: Option<CalendarDate>,
) -> Option<DateSummary> {
    let date = selected?;
    let entries = groups.get(&date).map(Vec::as_slice).unwrap_or_default();
    Some(DateSummary {
        date,
        response_count: entries.len(),
        sums: numeric_sums(fields, entries),
    })
}
