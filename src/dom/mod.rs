//! Effect layer: the patches the controller emits and the documents that apply them.

mod memory;

pub use memory::{FieldConstraints, MemoryDocument, MemoryElement};

use crate::Result;

/// Element ids the page markup has to provide.
pub mod ids {
    pub const PREDICTION_FORM: &str = "predictionForm";
    pub const RESULTS_SECTION: &str = "resultsSection";
    pub const PREDICTION_LABEL: &str = "predictionLabel";
    pub const RESULT_DESCRIPTION: &str = "resultDescription";
    pub const RESULT_ICON: &str = "resultIcon";
    pub const CHURN_PROB: &str = "churnProb";
    pub const NOT_CHURN_PROB: &str = "notChurnProb";
    pub const CHURN_BAR: &str = "churnBar";
    pub const RECOMMENDATION: &str = "recommendation";
    pub const ERROR_SECTION: &str = "errorSection";
    pub const ERROR_MESSAGE: &str = "errorMessage";
    pub const LOADING_SPINNER: &str = "loadingSpinner";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Nearest,
}

/// One DOM mutation, addressed by element id.
#[derive(Debug, Clone, PartialEq)]
pub enum DomPatch {
    /// `style.display` to `block` or `none`.
    SetVisible { id: String, visible: bool },
    SetText { id: String, text: String },
    SetStyle {
        id: String,
        property: String,
        value: String,
    },
    SetClassName { id: String, class_name: String },
    SetInnerHtml { id: String, html: String },
    SetValue { id: String, value: String },
    SetAttribute {
        id: String,
        name: String,
        value: String,
    },
    RemoveAttribute { id: String, name: String },
    ResetForm { id: String },
    ScrollIntoView {
        id: String,
        block: ScrollBlock,
        smooth: bool,
    },
    /// Applied once `delay_ms` has elapsed, after the current handler returns.
    Deferred { delay_ms: u32, patch: Box<DomPatch> },
}

impl DomPatch {
    pub fn show(id: &str) -> Self {
        Self::SetVisible {
            id: id.to_string(),
            visible: true,
        }
    }

    pub fn hide(id: &str) -> Self {
        Self::SetVisible {
            id: id.to_string(),
            visible: false,
        }
    }

    pub fn text(id: &str, text: impl Into<String>) -> Self {
        Self::SetText {
            id: id.to_string(),
            text: text.into(),
        }
    }

    pub fn style(id: &str, property: &str, value: impl Into<String>) -> Self {
        Self::SetStyle {
            id: id.to_string(),
            property: property.to_string(),
            value: value.into(),
        }
    }

    pub fn scroll_to(id: &str, block: ScrollBlock, smooth: bool) -> Self {
        Self::ScrollIntoView {
            id: id.to_string(),
            block,
            smooth,
        }
    }

    pub fn deferred(delay_ms: u32, patch: DomPatch) -> Self {
        Self::Deferred {
            delay_ms,
            patch: Box::new(patch),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::SetVisible { id, .. }
            | Self::SetText { id, .. }
            | Self::SetStyle { id, .. }
            | Self::SetClassName { id, .. }
            | Self::SetInnerHtml { id, .. }
            | Self::SetValue { id, .. }
            | Self::SetAttribute { id, .. }
            | Self::RemoveAttribute { id, .. }
            | Self::ResetForm { id }
            | Self::ScrollIntoView { id, .. } => id,
            Self::Deferred { patch, .. } => patch.target(),
        }
    }
}

/// What the controller needs from a page: a few reads and a patch sink.
pub trait Document {
    fn has_element(&self, id: &str) -> bool;

    /// Current `value` of an input element.
    fn value(&self, id: &str) -> Result<String>;

    fn attribute(&self, id: &str, name: &str) -> Result<Option<String>>;

    /// Constraint validation of a single field or a whole form.
    fn check_validity(&self, id: &str) -> Result<bool>;

    /// `(name, value)` pairs of the form's submittable controls, in document order.
    fn form_entries(&self, form_id: &str) -> Result<Vec<(String, String)>>;

    fn apply(&mut self, patch: &DomPatch) -> Result<()>;

    fn apply_all(&mut self, patches: &[DomPatch]) -> Result<()> {
        for patch in patches {
            self.apply(patch)?;
        }
        Ok(())
    }
}
