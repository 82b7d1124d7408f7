//! Retained element tree the cart renders into.
//!
//! An [`Element`] is a cheap, ref-counted handle: cloning it gives another handle to
//! the same node, so a handle captured at render time keeps pointing at the node
//! after the tree has been handed to a collaborator (the modal, the page).
//! The tree is single-threaded, like the page it stands in for.

pub mod escape;
mod selector;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use escape::escape_html;
use selector::Selector;

const VOID_TAGS: [&str; 4] = ["br", "hr", "img", "input"];

#[derive(Clone)]
pub struct Element(Rc<RefCell<Node>>);

struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
    parent: Weak<RefCell<Node>>,
}

#[derive(Clone)]
enum Child {
    Element(Element),
    Text(String),
}

impl Node {
    fn attribute(&self, name: &str) -> Option<String> {
        if name == "class" {
            return (!self.classes.is_empty()).then(|| self.classes.join(" "));
        }
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element(Rc::new(RefCell::new(Node {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            parent: Weak::new(),
        })))
    }

    //Builder zone
    pub fn class(self, class: &str) -> Self {
        for name in class.split_whitespace() {
            self.add_class(name);
        }
        self
    }

    pub fn attr(self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.append_text(text);
        self
    }

    pub fn child(self, child: Element) -> Self {
        self.append(&child);
        self
    }

    //Reading zone
    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attribute(name)
    }

    /// Reads a `data-*` attribute, `data("product-id")` for `data-product-id`.
    pub fn data(&self, key: &str) -> Option<String> {
        self.get_attribute(&format!("data-{key}"))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|own| own == class)
    }

    pub fn text_content(&self) -> String {
        let node = self.0.borrow();
        node.children
            .iter()
            .map(|child| match child {
                Child::Element(element) => element.text_content(),
                Child::Text(text) => text.clone(),
            })
            .collect()
    }

    pub fn parent(&self) -> Option<Element> {
        self.0.borrow().parent.upgrade().map(Element)
    }

    pub fn children(&self) -> Vec<Element> {
        self.0
            .borrow()
            .children
            .iter()
            .filter_map(|child| match child {
                Child::Element(element) => Some(element.clone()),
                Child::Text(_) => None,
            })
            .collect()
    }

    /// True when `other` is this element or sits anywhere below it.
    pub fn contains(&self, other: &Element) -> bool {
        let mut current = Some(other.clone());
        while let Some(element) = current {
            if element.ptr_eq(self) {
                return true;
            }
            current = element.parent();
        }
        false
    }

    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    //Mutation zone
    pub fn set_attribute(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if name == "class" {
            self.0.borrow_mut().classes = value.split_whitespace().map(str::to_owned).collect();
            return;
        }
        let mut node = self.0.borrow_mut();
        match node.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, current)) => *current = value,
            None => node.attrs.push((name.to_owned(), value)),
        }
    }

    pub fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_owned());
        }
    }

    pub fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|own| own != class);
    }

    /// Moves `child` to the end of this element, detaching it from any previous parent.
    pub fn append(&self, child: &Element) {
        child.remove();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0
            .borrow_mut()
            .children
            .push(Child::Element(child.clone()));
    }

    /// Inserts `child` right before `reference`. Falls back to appending when
    /// `reference` is not a direct child.
    pub fn insert_before(&self, child: &Element, reference: &Element) {
        child.remove();
        let index = self.0.borrow().children.iter().position(|existing| {
            matches!(existing, Child::Element(element) if element.ptr_eq(reference))
        });
        match index {
            Some(index) => {
                child.0.borrow_mut().parent = Rc::downgrade(&self.0);
                self.0
                    .borrow_mut()
                    .children
                    .insert(index, Child::Element(child.clone()));
            }
            None => self.append(child),
        }
    }

    pub fn append_text(&self, text: impl Into<String>) {
        self.0.borrow_mut().children.push(Child::Text(text.into()));
    }

    /// Replaces every child with a single text node.
    pub fn set_text(&self, text: impl Into<String>) {
        self.clear();
        self.append_text(text);
    }

    pub fn clear(&self) {
        let children = std::mem::take(&mut self.0.borrow_mut().children);
        for child in children {
            if let Child::Element(element) = child {
                element.0.borrow_mut().parent = Weak::new();
            }
        }
    }

    /// Detaches this element from its parent. No-op for a root.
    pub fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent.0.borrow_mut().children.retain(|child| {
            !matches!(child, Child::Element(element) if element.ptr_eq(self))
        });
        self.0.borrow_mut().parent = Weak::new();
    }

    //Query zone
    /// Nearest element, starting from this one and walking up, that matches `selector`.
    pub fn closest(&self, selector: &str) -> Option<Element> {
        let selector = Selector::parse(selector)?;
        let mut current = Some(self.clone());
        while let Some(element) = current {
            if selector.matches(&element.0.borrow()) {
                return Some(element);
            }
            current = element.parent();
        }
        None
    }

    /// First matching descendant in document order.
    pub fn query_selector(&self, selector: &str) -> Option<Element> {
        let selector = Selector::parse(selector)?;
        self.find_descendant(&selector)
    }

    pub fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        let mut found = Vec::new();
        if let Some(selector) = Selector::parse(selector) {
            self.collect_descendants(&selector, &mut found);
        }
        found
    }

    fn find_descendant(&self, selector: &Selector) -> Option<Element> {
        for child in self.children() {
            if selector.matches(&child.0.borrow()) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(selector) {
                return Some(found);
            }
        }
        None
    }

    fn collect_descendants(&self, selector: &Selector, found: &mut Vec<Element>) {
        for child in self.children() {
            if selector.matches(&child.0.borrow()) {
                found.push(child.clone());
            }
            child.collect_descendants(selector, found);
        }
    }

    //Serialisation zone
    pub fn outer_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) {
        let node = self.0.borrow();
        html.push('<');
        html.push_str(&node.tag);
        if !node.classes.is_empty() {
            html.push_str(&format!(" class=\"{}\"", escape_html(&node.classes.join(" "))));
        }
        for (name, value) in &node.attrs {
            html.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        html.push('>');
        if VOID_TAGS.contains(&node.tag.as_str()) {
            return;
        }
        drop(node);
        self.write_children(html);
        html.push_str(&format!("</{}>", self.0.borrow().tag));
    }

    fn write_children(&self, html: &mut String) {
        let children = self.0.borrow().children.clone();
        for child in children {
            match child {
                Child::Element(element) => element.write_html(html),
                Child::Text(text) => html.push_str(&escape_html(&text)),
            }
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.outer_html())
    }
}
