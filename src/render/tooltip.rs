use crate::dom::DomPatch;

pub const TITLE: &str = "title";
pub const DATA_TITLE: &str = "data-title";

/// Moves a tooltip's `title` into `data-title`, which keeps the text for the
/// styled tooltip and stops the browser from drawing its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSwap {
    pub text: String,
}

impl TitleSwap {
    /// `None` when there is no non-empty title left to move.
    pub fn decide(title: Option<&str>) -> Option<Self> {
        title
            .filter(|text| !text.is_empty())
            .map(|text| Self {
                text: text.to_string(),
            })
    }

    pub fn patches(&self, id: &str) -> Vec<DomPatch> {
        vec![
            DomPatch::SetAttribute {
                id: id.to_string(),
                name: DATA_TITLE.to_string(),
                value: self.text.clone(),
            },
            DomPatch::RemoveAttribute {
                id: id.to_string(),
                name: TITLE.to_string(),
            },
        ]
    }
}
