use chrono::{DateTime, Utc};

pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

pub fn format_salary(min: Option<i64>, max: Option<i64>) -> String {
    match (min, max) {
        (None, None) => "not specified".to_string(),
        (Some(min), Some(max)) => {
            format!("{} - {}", group_thousands(min), group_thousands(max))
        }
        (Some(min), None) => format!("from {}", group_thousands(min)),
        (None, Some(max)) => format!("up to {}", group_thousands(max)),
    }
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Char-boundary-safe preview, matching the backend's "...": convention for
/// trimmed descriptions.
pub fn truncate(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() > max_chars {
        format!("{}...", trimmed.chars().take(max_chars).collect::<String>())
    } else {
        trimmed.to_string()
    }
}
