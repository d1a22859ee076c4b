//! Askama filters used by the shop templates.

use std::fmt::Display;

/// The current year, for the footer.
///
/// Usage: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Content hash of `main.css`, computed by the build script.
///
/// Usage: `/static/css/main.css?v={{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Item count with the right noun: `1 item`, `3 items`.
///
/// Usage: `{{ page.checkout.count|items }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn items(count: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(item_count(&count.to_string()))
}

fn item_count(count: &str) -> String {
    if count == "1" {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_count() {
        assert_eq!(item_count("0"), "0 items");
        assert_eq!(item_count("1"), "1 item");
        assert_eq!(item_count("12"), "12 items");
    }
}
