use shared::date_part;

/// Today in `YYYY-MM-DD`, from the browser clock.
pub fn current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Parse a `YYYY-MM-DD` date string into components.
pub fn parse_date_string(date_str: &str) -> Option<(u32, u32, u32)> {
    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let year = parts[0].parse::<u32>().ok()?;
    let month = parts[1].parse::<u32>().ok()?;
    let day = parts[2].parse::<u32>().ok()?;

    if (1..=12).contains(&month) && (1..=31).contains(&day) {
        Some((year, month, day))
    } else {
        None
    }
}

/// Format a backend date string (bare or RFC 3339) for display.
pub fn format_date_for_display(date_str: &str) -> String {
    let date = date_part(date_str);
    if let Some((year, month, day)) = parse_date_string(date) {
        let month_name = match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "January",
        };
        format!("{} {}, {}", month_name, day, year)
    } else {
        date_str.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bare_dates() {
        assert_eq!(format_date_for_display("2025-03-14"), "March 14, 2025");
    }

    #[test]
    fn formats_rfc3339_dates_by_their_date_part() {
        assert_eq!(
            format_date_for_display("2025-03-14T09:30:00.000Z"),
            "March 14, 2025"
        );
    }

    #[test]
    fn passes_unparseable_strings_through() {
        assert_eq!(format_date_for_display("yesterday"), "yesterday");
        assert_eq!(parse_date_string("2025-13-01"), None);
        assert_eq!(parse_date_string("2025-03"), None);
    }
}
