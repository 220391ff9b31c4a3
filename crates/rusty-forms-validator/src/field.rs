// File: src/field.rs
// Purpose: Field handles and the attribute snapshot stored at registration

use crate::value::FieldValue;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Attribute name -> attribute value, in declaration order
pub type Attributes = IndexMap<String, String>;

/// How a field reports its value to rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Text-like inputs: the value is the string content
    Text,
    /// Checkboxes and radio buttons: the value is the checked state
    Checkable,
}

impl FieldKind {
    /// Classify a field from its `type` attribute
    pub fn from_type_attr(input_type: Option<&str>) -> Self {
        match input_type {
            Some(t) if t.eq_ignore_ascii_case("checkbox") || t.eq_ignore_ascii_case("radio") => {
                FieldKind::Checkable
            }
            _ => FieldKind::Text,
        }
    }
}

/// Anything the validator can read a field from
///
/// The UI layer decides how handles are produced (DOM binding, generated
/// from a layout, test doubles). The engine only needs a stable name, an
/// attribute snapshot and the live value.
pub trait FieldHandle: fmt::Debug {
    /// Unique name of the field within a form
    fn name(&self) -> &str;

    /// Static attributes of the field (`type`, `class`, ...)
    fn attributes(&self) -> Attributes;

    /// Current text value
    fn value(&self) -> String;

    /// Current checked state, for checkboxes and radio buttons
    fn is_checked(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
struct InputState {
    value: String,
    checked: bool,
}

/// In-memory field handle
///
/// Clones share the same live state, so a caller can keep one clone to
/// update the value after registering another with the validator.
#[derive(Debug, Clone)]
pub struct InputField {
    name: String,
    attributes: Attributes,
    state: Rc<RefCell<InputState>>,
}

impl InputField {
    /// Create a field with only a `name` attribute
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut attributes = Attributes::new();
        attributes.insert("name".to_string(), name.clone());
        Self {
            name,
            attributes,
            state: Rc::new(RefCell::new(InputState::default())),
        }
    }

    /// `<input type="text">`
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name).with_attr("type", "text")
    }

    /// `<input type="checkbox">`
    pub fn checkbox(name: impl Into<String>) -> Self {
        Self::new(name).with_attr("type", "checkbox")
    }

    /// `<input type="radio">`
    pub fn radio(name: impl Into<String>) -> Self {
        Self::new(name).with_attr("type", "radio")
    }

    /// Build a field from a full attribute map.
    ///
    /// Returns `None` when there is no `name` attribute. A `value` attribute
    /// seeds the current value and a `checked` attribute (other than
    /// `"false"`) seeds the checked state.
    pub fn from_attributes(attributes: Attributes) -> Option<Self> {
        let name = attributes.get("name")?.clone();
        let state = InputState {
            value: attributes.get("value").cloned().unwrap_or_default(),
            checked: attributes
                .get("checked")
                .map(|c| c != "false")
                .unwrap_or(false),
        };
        Some(Self {
            name,
            attributes,
            state: Rc::new(RefCell::new(state)),
        })
    }

    /// Add or replace an attribute
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == "name" {
            self.name = value.clone();
        }
        self.attributes.insert(key, value);
        self
    }

    /// Set the initial value (builder form of [`set_value`](Self::set_value))
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Update the live value
    pub fn set_value(&self, value: impl Into<String>) {
        self.state.borrow_mut().value = value.into();
    }

    /// Update the live checked state
    pub fn set_checked(&self, checked: bool) {
        self.state.borrow_mut().checked = checked;
    }
}

impl FieldHandle for InputField {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> Attributes {
        self.attributes.clone()
    }

    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn is_checked(&self) -> bool {
        self.state.borrow().checked
    }
}

impl<T: FieldHandle + ?Sized> FieldHandle for Rc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn attributes(&self) -> Attributes {
        (**self).attributes()
    }

    fn value(&self) -> String {
        (**self).value()
    }

    fn is_checked(&self) -> bool {
        (**self).is_checked()
    }
}

impl<T: FieldHandle + ?Sized> FieldHandle for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn attributes(&self) -> Attributes {
        (**self).attributes()
    }

    fn value(&self) -> String {
        (**self).value()
    }

    fn is_checked(&self) -> bool {
        (**self).is_checked()
    }
}

/// A registered field: the live handle plus the attributes captured when it
/// was added
#[derive(Clone)]
pub struct Field {
    name: String,
    handle: Rc<dyn FieldHandle>,
    attributes: Attributes,
    kind: FieldKind,
}

impl Field {
    /// Snapshot a handle's name and attributes
    pub fn new(handle: Rc<dyn FieldHandle>) -> Self {
        let attributes = handle.attributes();
        let kind = FieldKind::from_type_attr(attributes.get("type").map(String::as_str));
        Self {
            name: handle.name().to_string(),
            handle,
            attributes,
            kind,
        }
    }

    /// Wrap a concrete handle
    pub fn from_handle<H: FieldHandle + 'static>(handle: H) -> Self {
        Self::new(Rc::new(handle))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes as they were when the field was registered
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Single attribute lookup
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The live handle
    pub fn handle(&self) -> &dyn FieldHandle {
        self.handle.as_ref()
    }

    /// Read the value rules are evaluated against
    pub fn current_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text => FieldValue::Text(self.handle.value()),
            FieldKind::Checkable => FieldValue::Checked(self.handle.is_checked()),
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("attributes", &self.attributes)
            .finish()
    }
}
