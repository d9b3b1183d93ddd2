//! logfmt lines on stderr for the twmerge binary.
//!
//! ```ignore
//! log_debug!("merge", lines = 3, cached = true);
//! // time=12:34:56.789 level=debug tag=merge lines=3 cached=true
//! ```

use colored::Colorize;
use std::time::SystemTime;

/// UTC wall clock time of day, `HH:MM:SS.mmm`.
fn format_timestamp() -> String {
    let since_epoch = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    let day_secs = since_epoch.as_secs() % 86400;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        day_secs / 3600,
        (day_secs % 3600) / 60,
        day_secs % 60,
        since_epoch.subsec_millis()
    )
}

/// Quotes values that would otherwise break a logfmt line apart.
fn format_value(value: &str) -> String {
    if value.is_empty() || value.contains([' ', '"', '=']) {
        format!("{value:?}")
    } else {
        value.to_string()
    }
}

pub fn format_logfmt(level: &str, tag: &str, fields: &[(&str, String)]) -> String {
    let mut parts = vec![
        format!("{}={}", "time".dimmed(), format_timestamp()),
        format!("{}={}", "level".dimmed(), level),
        format!("{}={}", "tag".dimmed(), tag),
    ];
    for (key, value) in fields {
        parts.push(format!("{}={}", key.dimmed(), format_value(value)));
    }
    parts.join(" ")
}

#[macro_export]
macro_rules! log_debug {
    ($tag:expr, $($key:ident = $value:expr),* $(,)?) => {{
        use colored::Colorize;
        eprintln!("{}", $crate::log::format_logfmt(
            &"debug".dimmed().to_string(),
            $tag,
            &[$(( stringify!($key), format!("{}", $value) )),*]
        ))
    }};
}

#[macro_export]
macro_rules! log_error {
    ($tag:expr, $($key:ident = $value:expr),* $(,)?) => {{
        use colored::Colorize;
        eprintln!("{}", $crate::log::format_logfmt(
            &"error".red().to_string(),
            $tag,
            &[$(( stringify!($key), format!("{}", $value) )),*]
        ))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_quotes_when_needed() {
        assert_eq!(format_value("p-4"), "p-4");
        assert_eq!(format_value("p-2 p-4"), "\"p-2 p-4\"");
        assert_eq!(format_value(""), "\"\"");
    }

    fn strip_ansi(line: &str) -> String {
        let mut plain = String::with_capacity(line.len());
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                chars.by_ref().find(|&c| c == 'm');
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn test_format_logfmt_fields() {
        let line = strip_ansi(&format_logfmt(
            "error",
            "config",
            &[("path", "a b.toml".to_string())],
        ));
        let fields: Vec<&str> = line.split(' ').skip(1).collect();
        assert_eq!(fields, ["level=error", "tag=config", "path=\"a", "b.toml\""]);
    }
}
