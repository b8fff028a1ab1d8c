//! Browser entry points. The exported names match the handlers the
//! dashboard template wires into `onclick` / `onchange` attributes.

mod console_log;
mod deferred;
mod panic_handler;

use log::{error, warn};
use wasm_bindgen::{JsCast, JsError, JsValue, closure::Closure, prelude::wasm_bindgen};
use web_sys::Element;

use crate::{
    cfg::{self, CONFIG_ELEMENT_ID, Config},
    error::ViewError,
    model::Id,
    page::{WebNode, WebPage},
    restore::{self, Restored},
    store::LocalStore,
    view::ViewController,
};

// Called when the WASM module is instantiated
#[wasm_bindgen(start)]
fn start() {
    panic_handler::init_panic_handler();

    console_log::init(cfg::current().log_level);

    let page = WebPage::current();
    if let Some(config) = page.as_ref().and_then(config_from_page) {
        log::set_max_level(config.log_level);
        cfg::install(config);
    }

    let Some(page) = page else {
        return;
    };
    if page.document().ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            let _ = restore_state();
        });
        let _ = page
            .document()
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        let _ = restore_state();
    }
}

fn config_from_page(page: &WebPage) -> Option<Config> {
    let element = page.document().get_element_by_id(CONFIG_ELEMENT_ID)?;
    let json = element.text_content()?;
    match Config::from_json(&json) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            None
        }
    }
}

fn no_document() -> JsError {
    JsError::new("no document to operate on")
}

fn surface(e: ViewError) -> JsError {
    error!("{e}");
    JsError::from(e)
}

fn with_controller<T>(
    f: impl FnOnce(&mut ViewController<WebPage, LocalStore>) -> Result<T, ViewError>,
) -> Result<T, JsError> {
    let page = WebPage::current().ok_or_else(no_document)?;
    let mut controller = ViewController::new(page, LocalStore);
    f(&mut controller).map_err(surface)
}

/// Replaces the active configuration. Pages that build their allow-list at
/// runtime call this before `restoreState`.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsError> {
    let config = Config::from_json(json)?;
    log::set_max_level(config.log_level);
    cfg::install(config);
    Ok(())
}

#[wasm_bindgen(js_name = restoreState)]
pub fn restore_state() -> Result<(), JsError> {
    let page = WebPage::current().ok_or_else(no_document)?;
    let Some(path) = page.path() else {
        return Ok(());
    };
    let outcome = restore::restore_on_route(&page, &mut LocalStore, &cfg::current(), &path)
        .map_err(surface)?;
    if outcome != Restored::NotOnRoute {
        log::debug!("restore on {path}: {outcome:?}");
    }
    Ok(())
}

#[wasm_bindgen(js_name = handleNav)]
pub fn handle_nav(el: Element) -> Result<(), JsError> {
    let source = WebNode::from(el);
    with_controller(|c| c.handle_nav(&source).map(|_| ()))
}

#[wasm_bindgen(js_name = displaySections)]
pub fn display_sections(course: u32) -> Result<(), JsError> {
    with_controller(|c| c.toggle_sections(Id(course)).map(|_| ()))
}

#[wasm_bindgen(js_name = updateSectionColour)]
pub fn update_section_colour(course: u32, section: u32) -> Result<(), JsError> {
    with_controller(|c| c.recolour_section(Id(course), Id(section)).map(|_| ()))
}

#[wasm_bindgen(js_name = displayAddResourceForm)]
pub fn display_add_resource_form() -> Result<(), JsError> {
    with_controller(|c| c.open_resource_form())
}

#[wasm_bindgen(js_name = closeForm)]
pub fn close_form() -> Result<(), JsError> {
    with_controller(|c| c.close_resource_form())
}

/// Accepts a boolean or the strings `"true"` / `"false"`.
#[wasm_bindgen(js_name = updateResourceFormState)]
pub fn update_resource_form_state(state: JsValue) -> Result<(), JsError> {
    let open = state
        .as_bool()
        .unwrap_or_else(|| state.as_string().as_deref() == Some("true"));
    with_controller(|c| c.set_resource_form_state(open))
}

#[wasm_bindgen(js_name = displayAddSectionForm)]
pub fn display_add_section_form(course: u32) -> Result<(), JsError> {
    with_controller(|c| c.open_section_form(Id(course)))
}

#[wasm_bindgen(js_name = closeSectionForm)]
pub fn close_section_form(course: u32) -> Result<(), JsError> {
    with_controller(|c| c.close_section_form(Id(course)))
}

#[wasm_bindgen(js_name = clearSectionForm)]
pub fn clear_section_form(course: u32) -> Result<(), JsError> {
    let delay = cfg::current().section_form_clear_delay();
    let pending = with_controller(|c| c.prepare_section_form(Id(course), delay))?;
    deferred::schedule_clear(pending);
    Ok(())
}

#[wasm_bindgen(js_name = deleteMsg)]
pub fn delete_msg() -> Result<(), JsError> {
    with_controller(|c| c.dismiss_message())
}
