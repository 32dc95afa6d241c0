use crate::{
    Error, Result,
    dom::{Document, DomPatch, ScrollBlock},
};
use gloo_timers::callback::Timeout;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// [`Document`] backed by the live page.
#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::dom("no document available"))?;
        Ok(Self { document })
    }

    pub fn inner(&self) -> &web_sys::Document {
        &self.document
    }

    fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| Error::element_not_found(id))
    }

    fn html_element(&self, id: &str) -> Result<HtmlElement> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| Error::dom(format!("#{} is not an HTML element", id)))
    }

    fn input(&self, id: &str) -> Result<HtmlInputElement> {
        self.element(id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| Error::dom(format!("#{} is not an input", id)))
    }

    fn form(&self, id: &str) -> Result<HtmlFormElement> {
        self.element(id)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| Error::dom(format!("#{} is not a form", id)))
    }
}

pub(crate) fn js_error(context: &str, value: JsValue) -> Error {
    Error::dom(format!("{}: {:?}", context, value))
}

impl Document for WebDocument {
    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn value(&self, id: &str) -> Result<String> {
        Ok(self.input(id)?.value())
    }

    fn attribute(&self, id: &str, name: &str) -> Result<Option<String>> {
        Ok(self.element(id)?.get_attribute(name))
    }

    fn check_validity(&self, id: &str) -> Result<bool> {
        let element = self.element(id)?;
        if let Some(form) = element.dyn_ref::<HtmlFormElement>() {
            return Ok(form.check_validity());
        }
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Ok(input.check_validity());
        }
        Err(Error::dom(format!("#{} has no constraint validation", id)))
    }

    fn form_entries(&self, form_id: &str) -> Result<Vec<(String, String)>> {
        let form = self.form(form_id)?;
        let form_data =
            FormData::new_with_form(&form).map_err(|e| js_error("FormData", e))?;
        let iter = js_sys::try_iter(form_data.as_ref())
            .map_err(|e| js_error("FormData entries", e))?
            .ok_or_else(|| Error::dom("FormData is not iterable"))?;

        let mut entries = Vec::new();
        for item in iter {
            let pair = js_sys::Array::from(&item.map_err(|e| js_error("FormData entry", e))?);
            // File entries have no string value and are not part of the payload
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                entries.push((name, value));
            }
        }
        Ok(entries)
    }

    fn apply(&mut self, patch: &DomPatch) -> Result<()> {
        match patch {
            DomPatch::SetVisible { id, visible } => {
                let display = if *visible { "block" } else { "none" };
                self.html_element(id)?
                    .style()
                    .set_property("display", display)
                    .map_err(|e| js_error("style.display", e))?;
            }
            DomPatch::SetText { id, text } => {
                self.element(id)?.set_text_content(Some(text));
            }
            DomPatch::SetStyle {
                id,
                property,
                value,
            } => {
                self.html_element(id)?
                    .style()
                    .set_property(property, value)
                    .map_err(|e| js_error(property, e))?;
            }
            DomPatch::SetClassName { id, class_name } => {
                self.element(id)?.set_class_name(class_name);
            }
            DomPatch::SetInnerHtml { id, html } => {
                self.element(id)?.set_inner_html(html);
            }
            DomPatch::SetValue { id, value } => {
                self.input(id)?.set_value(value);
            }
            DomPatch::SetAttribute { id, name, value } => {
                self.element(id)?
                    .set_attribute(name, value)
                    .map_err(|e| js_error(name, e))?;
            }
            DomPatch::RemoveAttribute { id, name } => {
                self.element(id)?
                    .remove_attribute(name)
                    .map_err(|e| js_error(name, e))?;
            }
            DomPatch::ResetForm { id } => {
                self.form(id)?.reset();
            }
            DomPatch::ScrollIntoView { id, block, smooth } => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(if *smooth {
                    ScrollBehavior::Smooth
                } else {
                    ScrollBehavior::Auto
                });
                options.set_block(match block {
                    ScrollBlock::Start => ScrollLogicalPosition::Start,
                    ScrollBlock::Nearest => ScrollLogicalPosition::Nearest,
                });
                self.element(id)?
                    .scroll_into_view_with_scroll_into_view_options(&options);
            }
            DomPatch::Deferred { delay_ms, patch } => {
                let mut target = self.clone();
                let patch = (**patch).clone();
                Timeout::new(*delay_ms, move || {
                    if let Err(e) = target.apply(&patch) {
                        warn!("Deferred patch on #{} failed: {}", patch.target(), e);
                    }
                })
                .forget();
            }
        }
        Ok(())
    }
}
