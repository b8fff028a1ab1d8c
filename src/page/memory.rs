use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use super::{HIDDEN, Node, Page};

#[derive(Debug, Default)]
struct Element {
    id: String,
    tag: String,
    inner_html: String,
    classes: Vec<String>,
    value: Option<String>,
    checked: bool,
    children: Vec<usize>,
    attached: bool,
}

type Arena = Rc<RefCell<Vec<Element>>>;

/// A page held entirely in memory.
///
/// Elements are created with [`MemoryPage::insert`] / [`MemoryNode::insert_child`]
/// and keep their insertion order, which stands in for document order.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: Arena,
}

#[derive(Debug, Clone)]
pub struct MemoryNode {
    elements: Arena,
    index: usize,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level element. An empty `id` makes it unreachable by id.
    pub fn insert(&self, id: &str, tag: &str) -> MemoryNode {
        let mut elements = self.elements.borrow_mut();
        elements.push(Element {
            id: id.to_string(),
            tag: tag.to_lowercase(),
            value: default_value(tag),
            attached: true,
            ..Default::default()
        });
        MemoryNode {
            elements: Rc::clone(&self.elements),
            index: elements.len() - 1,
        }
    }

    /// Adds a hidden `div`, the shape of most toggled dashboard elements.
    pub fn insert_hidden(&self, id: &str) -> MemoryNode {
        self.insert(id, "div").with_class(HIDDEN)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.element(id).is_some_and(|n| !n.is_hidden())
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|n| n.has_class(class))
    }

    /// Class lists and form state of every attached element with an id,
    /// for comparing the page before and after an operation.
    pub fn snapshot(&self) -> BTreeMap<String, (Vec<String>, Option<String>, bool)> {
        self.elements
            .borrow()
            .iter()
            .filter(|e| e.attached && !e.id.is_empty())
            .map(|e| {
                let mut classes = e.classes.clone();
                classes.sort();
                (e.id.clone(), (classes, e.value.clone(), e.checked))
            })
            .collect()
    }
}

fn default_value(tag: &str) -> Option<String> {
    match tag.to_lowercase().as_str() {
        "input" | "select" | "textarea" => Some(String::new()),
        _ => None,
    }
}

impl Page for MemoryPage {
    type Node = MemoryNode;

    fn element(&self, id: &str) -> Option<MemoryNode> {
        if id.is_empty() {
            return None;
        }
        self.elements
            .borrow()
            .iter()
            .position(|e| e.attached && e.id == id)
            .map(|index| MemoryNode {
                elements: Rc::clone(&self.elements),
                index,
            })
    }

    fn elements_with_id_prefix(&self, prefix: &str) -> Vec<MemoryNode> {
        self.elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.attached && e.id.starts_with(prefix))
            .map(|(index, _)| MemoryNode {
                elements: Rc::clone(&self.elements),
                index,
            })
            .collect()
    }
}

impl MemoryNode {
    pub fn insert_child(&self, id: &str, tag: &str) -> MemoryNode {
        let mut elements = self.elements.borrow_mut();
        let attached = elements[self.index].attached;
        elements.push(Element {
            id: id.to_string(),
            tag: tag.to_lowercase(),
            value: default_value(tag),
            attached,
            ..Default::default()
        });
        let index = elements.len() - 1;
        elements[self.index].children.push(index);
        MemoryNode {
            elements: Rc::clone(&self.elements),
            index,
        }
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_html(self, html: &str) -> Self {
        self.elements.borrow_mut()[self.index].inner_html = html.to_string();
        self
    }

    pub fn with_value(self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_checked(self, checked: bool) -> Self {
        self.set_checked(checked);
        self
    }

    fn detach(elements: &mut [Element], index: usize) {
        elements[index].attached = false;
        let children = elements[index].children.clone();
        for child in children {
            Self::detach(elements, child);
        }
    }
}

impl Node for MemoryNode {
    fn id(&self) -> String {
        self.elements.borrow()[self.index].id.clone()
    }

    fn tag_name(&self) -> String {
        self.elements.borrow()[self.index].tag.clone()
    }

    fn inner_html(&self) -> String {
        self.elements.borrow()[self.index].inner_html.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        self.elements.borrow()[self.index]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn class_names(&self) -> Vec<String> {
        self.elements.borrow()[self.index].classes.clone()
    }

    fn add_class(&self, class: &str) {
        let mut elements = self.elements.borrow_mut();
        let classes = &mut elements[self.index].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.elements.borrow_mut()[self.index]
            .classes
            .retain(|c| c != class);
    }

    fn children(&self) -> Vec<Self> {
        self.elements.borrow()[self.index]
            .children
            .iter()
            .map(|&index| MemoryNode {
                elements: Rc::clone(&self.elements),
                index,
            })
            .collect()
    }

    fn value(&self) -> Option<String> {
        self.elements.borrow()[self.index].value.clone()
    }

    fn set_value(&self, value: &str) {
        let mut elements = self.elements.borrow_mut();
        let element = &mut elements[self.index];
        if element.value.is_some() {
            element.value = Some(value.to_string());
        }
    }

    fn is_checked(&self) -> bool {
        self.elements.borrow()[self.index].checked
    }

    fn set_checked(&self, checked: bool) {
        self.elements.borrow_mut()[self.index].checked = checked;
    }

    fn remove(&self) {
        Self::detach(&mut self.elements.borrow_mut(), self.index);
    }
}
