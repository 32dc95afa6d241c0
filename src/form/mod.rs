mod features;
pub mod validation;

pub use features::{Feature, SamplePreset};
pub use validation::BorderColor;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field name to number, in form order. Built fresh for every submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    fields: Vec<(String, f64)>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`. A repeated name keeps its first position and takes the newest value.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), *value))
    }
}

// Non-finite values go out as JSON `null`, same as JSON.stringify.
impl Serialize for FormInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            if value.is_finite() {
                map.serialize_entry(key, value)?;
            } else {
                map.serialize_entry(key, &Option::<f64>::None)?;
            }
        }
        map.end()
    }
}

/// Builds the request payload from the form's `(name, value)` entries.
pub fn collect_form_data<I, K, V>(entries: I) -> FormInput
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<str>,
{
    let mut input = FormInput::new();
    for (name, value) in entries {
        input.insert(name, parse_float(value.as_ref()));
    }
    input
}

/// JavaScript `parseFloat`: the longest leading decimal literal, `NaN` when there is none.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        pos += 1;
    }

    if s[pos..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let mut digits = pos - int_start;

    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            pos = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp_end = pos + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            pos = exp_end;
        }
    }

    s[..pos].parse().unwrap_or(f64::NAN)
}
