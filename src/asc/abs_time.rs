use chrono::NaiveDateTime;

use crate::types::abs_time::AbsoluteTime;

// Vector ASC header, e.g.: "date Mon Mar 10 12:34:56.789 pm 2025"
const DATE_FORMAT: &str = "%a %b %d %I:%M:%S%.3f %P %Y";

pub(crate) fn from_line(line: &str) -> Option<AbsoluteTime> {
    let mut parts = line.split_ascii_whitespace();
    if parts.next()? != "date" {
        return None;
    }

    // re-join so extra spacing inside the header is normalized
    let date_text: String = parts.collect::<Vec<_>>().join(" ");
    let value: NaiveDateTime = NaiveDateTime::parse_from_str(&date_text, DATE_FORMAT).ok()?;

    Some(AbsoluteTime {
        text: date_text,
        value: Some(value),
    })
}
