/// Parses a numeric cell; empty or non-numeric text yields `None`.
///
/// Note: Thousands separators are not stripped, so `"1,200"` is `None`.
pub fn parse_optional_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    value.parse::<f64>().ok().filter(|number| !number.is_nan())
}
