//! Browser entry points: wires the page's listeners to a [`FormController`]
//! and exposes the helpers the markup calls from `onclick` handlers.

mod document;

pub use document::WebDocument;

use crate::{
    FormController, Result,
    config::{self, Config},
    dom::ids,
    form::SamplePreset,
    prediction::{HttpPredictionClient, PredictionClient},
    telemetry,
};
use document::js_error;
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, error, info, warn};
use wasm_bindgen::{JsCast, JsValue, closure::Closure, prelude::wasm_bindgen};
use web_sys::{Element, Event, HtmlInputElement};

type SharedController = Rc<RefCell<FormController<WebDocument>>>;

const TOOLTIP_ID_PREFIX: &str = "churn-tooltip-";

thread_local! {
    static CONTROLLER: RefCell<Option<SharedController>> = const { RefCell::new(None) };
}

/// Wires the page with default settings.
#[wasm_bindgen]
pub fn start() -> std::result::Result<(), JsValue> {
    boot(Config::default())
}

/// Wires the page with settings from a YAML document.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(yaml: &str) -> std::result::Result<(), JsValue> {
    let config = config::from_yaml_str(yaml).map_err(to_js)?;
    boot(config)
}

#[wasm_bindgen(js_name = loadSampleData)]
pub fn load_sample_data(preset: Option<String>) -> std::result::Result<(), JsValue> {
    let preset = match preset {
        Some(name) => name.parse::<SamplePreset>().map_err(to_js)?,
        None => SamplePreset::default(),
    };
    with_controller(|controller| controller.load_sample(preset).map(|_| ()))
}

#[wasm_bindgen(js_name = resetForm)]
pub fn reset_form() -> std::result::Result<(), JsValue> {
    with_controller(|controller| controller.reset_form())
}

#[wasm_bindgen(js_name = resetResults)]
pub fn reset_results() -> std::result::Result<(), JsValue> {
    with_controller(|controller| controller.reset_results())
}

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form() -> std::result::Result<bool, JsValue> {
    with_controller(|controller| controller.validate_form())
}

fn boot(config: Config) -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if let Err(e) = telemetry::init(&config.logs) {
        warn!("Logging already initialised: {}", e);
    }

    let document = WebDocument::new().map_err(to_js)?;
    let origin = web_sys::window().and_then(|window| window.location().origin().ok());
    let client: Rc<dyn PredictionClient> =
        Rc::new(HttpPredictionClient::new(&config.endpoint, origin.as_deref()));

    let controller: SharedController = Rc::new(RefCell::new(FormController::new(
        document.clone(),
        config.ui,
    )));

    wire_tooltips(&document, &controller).map_err(to_js)?;
    wire_submit(&document, &controller, &client).map_err(to_js)?;
    wire_field_feedback(&document, &controller).map_err(to_js)?;

    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    info!("Churn Prediction System loaded");
    Ok(())
}

fn with_controller<T>(
    f: impl FnOnce(&mut FormController<WebDocument>) -> Result<T>,
) -> std::result::Result<T, JsValue> {
    let controller = CONTROLLER
        .with(|slot| slot.borrow().clone())
        .ok_or_else(|| JsValue::from_str("churn form has not been started"))?;
    let mut controller = controller.borrow_mut();
    f(&mut controller).map_err(to_js)
}

fn to_js(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn query_all(document: &WebDocument, selector: &str) -> Result<Vec<Element>> {
    let nodes = document
        .inner()
        .query_selector_all(selector)
        .map_err(|e| js_error(selector, e))?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn listen(target: &Element, event: &str, handler: impl FnMut(Event) + 'static) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| js_error(event, e))?;
    closure.forget();
    Ok(())
}

// Tooltip spans usually carry no id; they get one so the controller can address them.
fn wire_tooltips(document: &WebDocument, controller: &SharedController) -> Result<()> {
    let tooltips = query_all(document, ".tooltip")?;
    debug!("Wiring {} tooltips", tooltips.len());

    for (index, tooltip) in tooltips.into_iter().enumerate() {
        if tooltip.id().is_empty() {
            tooltip.set_id(&format!("{}{}", TOOLTIP_ID_PREFIX, index));
        }

        let controller = controller.clone();
        let id = tooltip.id();
        listen(&tooltip, "mouseenter", move |_| {
            if let Err(e) = controller.borrow_mut().tooltip_hovered(&id) {
                warn!("Tooltip title swap on #{} failed: {}", id, e);
            }
        })?;
    }
    Ok(())
}

fn wire_submit(
    document: &WebDocument,
    controller: &SharedController,
    client: &Rc<dyn PredictionClient>,
) -> Result<()> {
    let Some(form) = document.inner().get_element_by_id(ids::PREDICTION_FORM) else {
        warn!("#{} not found; submissions are not handled", ids::PREDICTION_FORM);
        return Ok(());
    };

    let controller = controller.clone();
    let client = client.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();

        let pending = match controller.borrow_mut().begin_submit() {
            Ok(pending) => pending,
            Err(e) => {
                error!("Could not start submission: {}", e);
                return;
            }
        };

        let controller = controller.clone();
        let client = client.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = client.predict(&pending.input).await;
            if let Err(e) = controller
                .borrow_mut()
                .complete_submit(pending.token, result)
            {
                error!("Could not render prediction outcome: {}", e);
            }
        });
    })
}

fn wire_field_feedback(document: &WebDocument, controller: &SharedController) -> Result<()> {
    let inputs = query_all(document, "input[type=\"number\"]")?;
    debug!("Wiring validation feedback on {} inputs", inputs.len());

    for input in inputs {
        let id = input.id();
        if id.is_empty() || input.dyn_ref::<HtmlInputElement>().is_none() {
            debug!("Skipping number input without id");
            continue;
        }

        let blur_controller = controller.clone();
        let blur_id = id.clone();
        listen(&input, "blur", move |_| {
            if let Err(e) = blur_controller.borrow_mut().field_blurred(&blur_id) {
                warn!("Blur feedback on #{} failed: {}", blur_id, e);
            }
        })?;

        let input_controller = controller.clone();
        listen(&input, "input", move |_| {
            if let Err(e) = input_controller.borrow_mut().field_input(&id) {
                warn!("Input feedback on #{} failed: {}", id, e);
            }
        })?;
    }
    Ok(())
}
