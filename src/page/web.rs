use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use super::{Node, Page};

/// The live document of the current window.
#[derive(Debug, Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// `location.pathname` of the window the document belongs to.
    pub fn path(&self) -> Option<String> {
        self.document.location()?.pathname().ok()
    }
}

impl Page for WebPage {
    type Node = WebNode;

    fn element(&self, id: &str) -> Option<WebNode> {
        self.document.get_element_by_id(id).map(WebNode)
    }

    fn elements_with_id_prefix(&self, prefix: &str) -> Vec<WebNode> {
        let selector = format!("[id^=\"{prefix}\"]");
        let Ok(list) = self.document.query_selector_all(&selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebNode)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct WebNode(pub Element);

impl From<Element> for WebNode {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl Node for WebNode {
    fn id(&self) -> String {
        self.0.id()
    }

    fn tag_name(&self) -> String {
        self.0.tag_name().to_lowercase()
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn class_names(&self) -> Vec<String> {
        let list = self.0.class_list();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    // DOMTokenList only rejects empty or whitespace-containing tokens, and
    // every class used here is a constant without either.
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn children(&self) -> Vec<Self> {
        let children = self.0.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .map(WebNode)
            .collect()
    }

    fn value(&self) -> Option<String> {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        self.0
            .dyn_ref::<HtmlSelectElement>()
            .map(HtmlSelectElement::value)
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = self.0.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        }
    }

    fn is_checked(&self) -> bool {
        self.0
            .dyn_ref::<HtmlInputElement>()
            .is_some_and(HtmlInputElement::checked)
    }

    fn set_checked(&self, checked: bool) {
        if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }

    fn remove(&self) {
        self.0.remove();
    }
}
