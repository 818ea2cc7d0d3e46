//! Custom predicates used by the built-in schemas.

use chrono::NaiveDate;

use crate::rule::Check;

/// Calendar date written as `YYYY-MM-DD`.
pub const DATE: Check = Check {
    name: "date",
    predicate: iso_date,
};

/// Absolute `http` or `https` URL.
pub const HTTP_URL: Check = Check {
    name: "http_url",
    predicate: http_url,
};

fn iso_date(value: &str) -> Result<(), String> {
    // chrono accepts single-digit months and days, the database does not
    if value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err("must be a valid date in YYYY-MM-DD format".to_string())
    }
}

fn http_url(value: &str) -> Result<(), String> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    let valid = match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            !host.is_empty() && !rest.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err("must be a valid uri with a scheme matching the http|https pattern".to_string())
    }
}
