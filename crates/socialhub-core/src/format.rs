//! French (fr-FR) number and date formatting for display
//!
//! Dates are formatted in whatever timezone the caller's value carries;
//! frontends convert to `chrono::Local` before calling in.

use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike};

/// Narrow no-break space, the fr-FR digit group separator
pub const GROUP_SEPARATOR: char = '\u{202f}';

const MONTHS_LONG: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

const MONTHS_SHORT: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

const WEEKDAYS: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

/// 12847 -> "12 847"
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Short form for narrow columns: 12847 -> "12.8K"
pub fn format_compact(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// "15/01/2024"
pub fn format_date<D: Datelike>(d: &D) -> String {
    format!("{:02}/{:02}/{}", d.day(), d.month(), d.year())
}

/// "09:00"
pub fn format_time<T: Timelike>(t: &T) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// "15 janv., 10:30"
pub fn format_day_month_time<D: Datelike + Timelike>(d: &D) -> String {
    format!(
        "{} {}, {}",
        d.day(),
        MONTHS_SHORT[d.month0() as usize],
        format_time(d)
    )
}

/// "mardi 16 janvier"
pub fn format_weekday_day_month<D: Datelike>(d: &D) -> String {
    format!(
        "{} {} {}",
        WEEKDAYS[d.weekday().num_days_from_monday() as usize],
        d.day(),
        MONTHS_LONG[d.month0() as usize]
    )
}

/// "mardi 16 janvier à 09:00"
pub fn format_long_datetime<D: Datelike + Timelike>(d: &D) -> String {
    format!("{} à {}", format_weekday_day_month(d), format_time(d))
}

/// Relative label used by the schedule page
///
/// "Aujourd'hui à 09:00", "Demain à 09:00", otherwise
/// "jeudi 18 janvier à 10:00". Day boundaries follow the timezone of `now`.
pub fn format_scheduled<Tz: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let date_day = date.date_naive();
    let today = now.date_naive();
    let tomorrow = (now.clone() + Duration::days(1)).date_naive();

    let day_text = if date_day == today {
        "Aujourd'hui".to_string()
    } else if date_day == tomorrow {
        "Demain".to_string()
    } else {
        format_weekday_day_month(&date.naive_local())
    };

    format!("{} à {}", day_text, format_time(&date.naive_local()))
}

/// Truncate to `max` characters, appending "..." when shortened
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_number_groups() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(987), "987");
        assert_eq!(format_number(1876), "1\u{202f}876");
        assert_eq!(format_number(12847), "12\u{202f}847");
        assert_eq!(format_number(1_234_567), "1\u{202f}234\u{202f}567");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(12847), "12.8K");
        assert_eq!(format_compact(2_500_000), "2.5M");
    }

    #[test]
    fn test_short_and_medium_dates() {
        let d = utc("2024-01-15T10:30:00Z");
        assert_eq!(format_date(&d), "15/01/2024");
        assert_eq!(format_day_month_time(&d), "15 janv., 10:30");
        assert_eq!(
            format_date(&NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()),
            "14/01/2024"
        );
    }

    #[test]
    fn test_long_datetime() {
        // 2024-01-16 was a Tuesday
        let d = utc("2024-01-16T09:00:00Z");
        assert_eq!(format_long_datetime(&d), "mardi 16 janvier à 09:00");
    }

    #[test]
    fn test_scheduled_relative_labels() {
        let now = utc("2024-01-16T07:00:00Z");
        assert_eq!(
            format_scheduled(&utc("2024-01-16T09:00:00Z"), &now),
            "Aujourd'hui à 09:00"
        );
        assert_eq!(
            format_scheduled(&utc("2024-01-17T14:30:00Z"), &now),
            "Demain à 14:30"
        );
        assert_eq!(
            format_scheduled(&utc("2024-01-18T10:00:00Z"), &now),
            "jeudi 18 janvier à 10:00"
        );
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("équipe", 10), "équipe");
        assert_eq!(truncate("Behind the scenes de notre équipe", 10), "Behind ...");
    }
}
