use super::{Document, DomPatch, ScrollBlock};
use crate::{Error, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Constraint attributes of a number input (`required`, `min`, `max`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldConstraints {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldConstraints {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return !self.required;
        }
        let Ok(number) = value.trim().parse::<f64>() else {
            return false;
        };
        self.min.is_none_or(|min| number >= min) && self.max.is_none_or(|max| number <= max)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    pub text: String,
    pub inner_html: String,
    pub class_name: String,
    pub style: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
    pub value: String,
    pub default_value: String,
    /// Form control name; controls without one are not submitted.
    pub name: Option<String>,
    pub disabled: bool,
    pub constraints: Option<FieldConstraints>,
}

/// In-process stand-in for a browser page. Deferred patches queue up until
/// [`MemoryDocument::run_timers`] is called.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: BTreeMap<String, MemoryElement>,
    forms: BTreeMap<String, Vec<String>>,
    timers: Vec<(u32, DomPatch)>,
    scrolls: Vec<(String, ScrollBlock)>,
    applied: Vec<DomPatch>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.entry(id.to_string()).or_default();
        self
    }

    pub fn with_form(mut self, id: &str) -> Self {
        self.elements.entry(id.to_string()).or_default();
        self.forms.entry(id.to_string()).or_default();
        self
    }

    /// Adds a named input to `form_id`, using `id` as its name too.
    pub fn with_field(mut self, form_id: &str, id: &str, constraints: FieldConstraints) -> Self {
        self.elements.insert(
            id.to_string(),
            MemoryElement {
                name: Some(id.to_string()),
                constraints: Some(constraints),
                ..MemoryElement::default()
            },
        );
        self.forms
            .entry(form_id.to_string())
            .or_default()
            .push(id.to_string());
        self
    }

    pub fn with_attribute(mut self, id: &str, name: &str, value: &str) -> Self {
        self.elements
            .entry(id.to_string())
            .or_default()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn element(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut MemoryElement> {
        self.elements.get_mut(id)
    }

    /// Types into a field the way a user would, without firing any handler.
    pub fn set_value(&mut self, id: &str, value: &str) -> Result<()> {
        self.get_mut(id)?.value = value.to_string();
        Ok(())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.style(id, "display") == Some("block")
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|el| el.style.get(property))
            .map(String::as_str)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|el| el.text.as_str())
    }

    pub fn scrolls(&self) -> &[(String, ScrollBlock)] {
        &self.scrolls
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Every patch applied so far, deferred ones included once they fire.
    pub fn applied(&self) -> &[DomPatch] {
        &self.applied
    }

    /// Fires queued deferred patches, shortest delay first.
    pub fn run_timers(&mut self) -> Result<usize> {
        let mut timers = std::mem::take(&mut self.timers);
        timers.sort_by_key(|(delay, _)| *delay);
        let fired = timers.len();
        for (_, patch) in timers {
            self.apply(&patch)?;
        }
        Ok(fired)
    }

    fn get(&self, id: &str) -> Result<&MemoryElement> {
        self.elements
            .get(id)
            .ok_or_else(|| Error::element_not_found(id))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut MemoryElement> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| Error::element_not_found(id))
    }
}

impl Document for MemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn value(&self, id: &str) -> Result<String> {
        Ok(self.get(id)?.value.clone())
    }

    fn attribute(&self, id: &str, name: &str) -> Result<Option<String>> {
        Ok(self.get(id)?.attributes.get(name).cloned())
    }

    fn check_validity(&self, id: &str) -> Result<bool> {
        if let Some(fields) = self.forms.get(id) {
            for field in fields {
                if !self.check_validity(field)? {
                    return Ok(false);
                }
            }
            return Ok(true);
        }

        let element = self.get(id)?;
        Ok(element
            .constraints
            .is_none_or(|constraints| constraints.accepts(&element.value)))
    }

    fn form_entries(&self, form_id: &str) -> Result<Vec<(String, String)>> {
        let fields = self
            .forms
            .get(form_id)
            .ok_or_else(|| Error::element_not_found(form_id))?;

        let mut entries = Vec::with_capacity(fields.len());
        for id in fields {
            let element = self.get(id)?;
            if element.disabled {
                continue;
            }
            if let Some(name) = &element.name {
                entries.push((name.clone(), element.value.clone()));
            }
        }
        Ok(entries)
    }

    fn apply(&mut self, patch: &DomPatch) -> Result<()> {
        debug!("Applying {:?}", patch);
        match patch {
            DomPatch::SetVisible { id, visible } => {
                let display = if *visible { "block" } else { "none" };
                self.get_mut(id)?
                    .style
                    .insert("display".to_string(), display.to_string());
            }
            DomPatch::SetText { id, text } => self.get_mut(id)?.text = text.clone(),
            DomPatch::SetStyle {
                id,
                property,
                value,
            } => {
                self.get_mut(id)?
                    .style
                    .insert(property.clone(), value.clone());
            }
            DomPatch::SetClassName { id, class_name } => {
                self.get_mut(id)?.class_name = class_name.clone()
            }
            DomPatch::SetInnerHtml { id, html } => self.get_mut(id)?.inner_html = html.clone(),
            DomPatch::SetValue { id, value } => self.get_mut(id)?.value = value.clone(),
            DomPatch::SetAttribute { id, name, value } => {
                self.get_mut(id)?
                    .attributes
                    .insert(name.clone(), value.clone());
            }
            DomPatch::RemoveAttribute { id, name } => {
                self.get_mut(id)?.attributes.remove(name);
            }
            DomPatch::ResetForm { id } => {
                let fields = self
                    .forms
                    .get(id)
                    .cloned()
                    .ok_or_else(|| Error::element_not_found(id.as_str()))?;
                for field in fields {
                    let element = self.get_mut(&field)?;
                    element.value = element.default_value.clone();
                }
            }
            DomPatch::ScrollIntoView { id, block, .. } => {
                self.get(id)?;
                self.scrolls.push((id.clone(), *block));
            }
            DomPatch::Deferred { delay_ms, patch } => {
                self.timers.push((*delay_ms, (**patch).clone()));
                return Ok(());
            }
        }
        self.applied.push(patch.clone());
        Ok(())
    }
}
