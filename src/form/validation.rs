//! Border colors for per-field constraint feedback.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderColor {
    Invalid,
    Neutral,
    Valid,
}

impl BorderColor {
    pub fn css(self) -> &'static str {
        match self {
            BorderColor::Invalid => "#e74c3c",
            BorderColor::Neutral => "#ddd",
            BorderColor::Valid => "#27ae60",
        }
    }
}

/// Leaving a field: red only when something was typed and it fails validation.
pub fn on_blur(has_value: bool, valid: bool) -> BorderColor {
    if has_value && !valid {
        BorderColor::Invalid
    } else {
        BorderColor::Neutral
    }
}

/// Typing into a field turns it green once valid; otherwise the border is left alone.
pub fn on_input(valid: bool) -> Option<BorderColor> {
    valid.then_some(BorderColor::Valid)
}
