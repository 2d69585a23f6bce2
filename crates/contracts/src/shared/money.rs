//! US-dollar amounts kept as integral cents.

/// Format cents as `$12,450` (whole dollars) or `$12,450.50`.
pub fn format_usd(cents: u64) -> String {
    let dollars = cents / 100;
    let rest = cents % 100;
    let grouped = group_thousands(dollars);
    if rest == 0 {
        format!("${}", grouped)
    } else {
        format!("${}.{:02}", grouped, rest)
    }
}

/// Parse user input like `$12,450`, `12450.5` or ` 8,920.00 ` into cents.
pub fn parse_usd(input: &str) -> Option<u64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let (whole, frac) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let dollars: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let cents: u64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<u64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    dollars.checked_mul(100)?.checked_add(cents)
}

fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(1_245_000), "$12,450");
        assert_eq!(format_usd(8_103_000), "$81,030");
        assert_eq!(format_usd(1_245_050), "$12,450.50");
        assert_eq!(format_usd(99), "$0.99");
    }

    #[test]
    fn test_parse_usd() {
        assert_eq!(parse_usd("$12,450"), Some(1_245_000));
        assert_eq!(parse_usd(" 8,920.00 "), Some(892_000));
        assert_eq!(parse_usd("12450.5"), Some(1_245_050));
        assert_eq!(parse_usd(""), None);
        assert_eq!(parse_usd("abc"), None);
        assert_eq!(parse_usd("1.234"), None);
    }
}
