use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Form input submitted from the search page.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default, deserialize_with = "deserialize_guests")]
    #[validate(range(min = 1, max = 5))]
    pub guests: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GuestCount {
    Whole(i64),
    Fraction(f64),
    Text(String),
    #[allow(dead_code)]
    Other(IgnoredAny),
}

// Form clients send the guest count as a number or as the raw select value.
// Anything that is not a whole number becomes 0, which fails the range check.
fn deserialize_guests<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let guests = match Option::<GuestCount>::deserialize(deserializer)? {
        Some(GuestCount::Whole(n)) => n,
        Some(GuestCount::Fraction(n)) if n.fract() == 0.0 && n.abs() <= 1e15 => n as i64,
        Some(GuestCount::Text(text)) => parse_leading_int(&text).unwrap_or(0),
        _ => 0,
    };
    Ok(guests)
}

/// Reads an optionally signed run of digits at the start of `text`, after
/// leading whitespace. Trailing characters are ignored, so `"2abc"` is 2.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    text[..sign_len + digits].parse().ok()
}

/// Query parameters of the results view. Everything arrives as a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    pub city: Option<String>,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub guests: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
}
