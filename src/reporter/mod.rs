pub mod html;
pub mod json;
pub mod terminal;

use crate::model::Dashboard;

pub trait Reporter {
    fn report(&self, dashboard: &Dashboard) -> String;
}

/// Render an optional count, "N/A" when the tool reported none.
pub(crate) fn fmt_count(value: Option<u64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// Render an optional coverage percentage with one decimal place.
pub(crate) fn fmt_coverage(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{:.1}%", v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_count() {
        assert_eq!(fmt_count(Some(42)), "42");
        assert_eq!(fmt_count(None), "N/A");
    }

    #[test]
    fn test_fmt_coverage() {
        assert_eq!(fmt_coverage(Some(84.5)), "84.5%");
        assert_eq!(fmt_coverage(Some(90.0)), "90.0%");
        assert_eq!(fmt_coverage(None), "N/A");
    }
}
