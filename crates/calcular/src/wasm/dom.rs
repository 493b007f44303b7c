//! Mock DOM for browser-free testing
//!
//! A minimal element tree plus a click event log. The calculator needs
//! nothing more from a DOM: elements with ids, text, classes, and
//! attributes, and a way to dispatch clicks at them.

use std::collections::HashMap;

/// A mock DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element id
    pub id: String,
    /// Tag name, e.g. `"div"` or `"button"`
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the id
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a CSS class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Appends a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a CSS class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a CSS class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Whether the element carries a CSS class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute value, if set
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// DOM events the harness can dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// A mouse click
    Click {
        /// Target element id
        element_id: String,
    },
}

impl DomEvent {
    /// Click event aimed at an element id
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Target element id
    #[must_use]
    pub fn element_id(&self) -> &str {
        match self {
            Self::Click { element_id } => element_id,
        }
    }
}

/// Mock DOM: an element tree, an id registry, and an event log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDom {
    /// Root of the element tree
    pub root: DomElement,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("body"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator document: an empty operation trail above a
    /// display reading `"0"`
    #[must_use]
    pub fn calculator() -> Self {
        let trail = DomElement::new("div")
            .with_id("calc-trail")
            .with_class("operation-display");
        let display = DomElement::new("div")
            .with_id("calc-display")
            .with_class("main-display")
            .with_text("0");
        let root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(trail.clone())
            .with_child(display.clone());

        let mut dom = Self {
            root,
            elements: HashMap::new(),
            event_history: Vec::new(),
        };
        dom.register_element(trail);
        dom.register_element(display);
        dom
    }

    /// Registers an element in the id registry
    pub fn register_element(&mut self, element: DomElement) {
        self.elements.insert(element.id.clone(), element);
    }

    /// Looks up a registered element
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Looks up a registered element for mutation
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event. Returns whether the target id is registered.
    pub fn dispatch_event(&mut self, event: DomEvent) -> bool {
        let known = self.elements.contains_key(event.element_id());
        self.event_history.push(event);
        known
    }

    /// Every dispatched event, oldest first
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Forgets all dispatched events
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Number of clicks dispatched at an element id
    #[must_use]
    pub fn click_count(&self, element_id: &str) -> usize {
        self.event_history
            .iter()
            .filter(|event| event.element_id() == element_id)
            .count()
    }

    /// Replaces an element's text. Returns whether the element exists.
    pub fn set_element_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.set_text(text);
                true
            }
            None => false,
        }
    }

    /// Text content of a registered element
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}
