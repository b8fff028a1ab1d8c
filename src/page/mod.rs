//! Access to the rendered dashboard page.
//!
//! Handlers never reach for a global document. They get a [`Page`] and look
//! elements up by id, so a missing element is an ordinary `None` instead of
//! a thrown exception.

mod memory;
#[cfg(target_family = "wasm")]
mod web;

pub use memory::{MemoryNode, MemoryPage};
#[cfg(target_family = "wasm")]
pub use web::{WebNode, WebPage};

use crate::{error::ViewError, model::Id};

/// Class that hides an element.
pub const HIDDEN: &str = "hidden";
/// Class marking the active nav link.
pub const SELECTED: &str = "selected";

pub trait Page {
    type Node: Node;

    fn element(&self, id: &str) -> Option<Self::Node>;

    /// Every element whose id starts with `prefix`, in document order.
    fn elements_with_id_prefix(&self, prefix: &str) -> Vec<Self::Node>;

    fn require(&self, id: &str) -> Result<Self::Node, ViewError> {
        self.element(id)
            .ok_or_else(|| ViewError::MissingElement(id.to_string()))
    }
}

/// Handle to one element. Handles are cheap clones that refer to the same
/// underlying element.
pub trait Node: Clone {
    fn id(&self) -> String;
    /// Lowercase tag name.
    fn tag_name(&self) -> String;
    fn inner_html(&self) -> String;

    fn has_class(&self, class: &str) -> bool;
    fn class_names(&self) -> Vec<String>;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    fn children(&self) -> Vec<Self>;

    /// Value of an input or select element, `None` for anything else.
    fn value(&self) -> Option<String>;
    fn set_value(&self, value: &str);
    fn is_checked(&self) -> bool;
    fn set_checked(&self, checked: bool);

    /// Detaches the element from the page.
    fn remove(&self);

    fn show(&self) {
        self.remove_class(HIDDEN);
    }

    fn hide(&self) {
        self.add_class(HIDDEN);
    }

    fn set_visible(&self, visible: bool) {
        if visible { self.show() } else { self.hide() }
    }

    fn is_hidden(&self) -> bool {
        self.has_class(HIDDEN)
    }
}

/// Element ids the dashboard template renders.
pub mod ids {
    use super::Id;

    pub const NAV: &str = "cert-nav";
    pub const TAB_SELECT: &str = "content";
    pub const ADD_CONTENT_BUTTON: &str = "content-btn";
    pub const RESOURCE_FORM: &str = "resource-form";
    pub const RESOURCE_NAME: &str = "resource-name";
    pub const RESOURCE_URL: &str = "resource-url";
    pub const FLASH_MESSAGE: &str = "msg-container";
    pub const SECTION_PREFIX: &str = "section-";
    /// Radio buttons `resource_type-0` .. `resource_type-3`.
    pub const RESOURCE_TYPE_COUNT: usize = 4;

    pub fn resource_type(index: usize) -> String {
        format!("resource_type-{index}")
    }

    pub fn section_list(course: Id) -> String {
        format!("sections-{course}")
    }

    pub fn section_form(course: Id) -> String {
        format!("sections-{course}-form")
    }

    pub fn section_add_button(course: Id) -> String {
        format!("sections-{course}-btn")
    }

    pub fn section_close_button(course: Id) -> String {
        format!("sections-{course}-close-btn")
    }

    pub fn section_number_input(course: Id) -> String {
        format!("sections-{course}-number")
    }

    pub fn section_title_input(course: Id) -> String {
        format!("sections-{course}-title")
    }

    pub fn down_arrow(course: Id) -> String {
        format!("down-arrow-{course}")
    }

    pub fn up_arrow(course: Id) -> String {
        format!("up-arrow-{course}")
    }

    pub fn section(course: Id, section: Id) -> String {
        format!("{SECTION_PREFIX}{section}-{course}")
    }

    pub fn cards_made_checkbox(course: Id, section: Id) -> String {
        format!("course-{course}-section-{section}-cards_made")
    }

    pub fn complete_checkbox(course: Id, section: Id) -> String {
        format!("course-{course}-section-{section}-complete")
    }
}
