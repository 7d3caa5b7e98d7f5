use crate::date::DateKey;
use crate::surface::{Click, ListenerId, Surface};
use std::collections::{BTreeMap, BTreeSet};

/// An in-memory page of identified elements that pickers can be attached to
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    listeners: BTreeSet<ListenerId>,
    next_listener: u64,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Element {
    markup: String,
    value: String,
    classes: BTreeSet<String>,
}

impl Document {
    pub fn new() -> Document {
        Document::default()
    }

    pub fn with_element<S: Into<String>>(mut self, id: S) -> Document {
        self.add_element(id);
        self
    }

    /// Add an empty element.  Adding an existing identifier is a no-op.
    pub fn add_element<S: Into<String>>(&mut self, id: S) {
        self.elements.entry(id.into()).or_default();
    }

    pub fn markup(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.markup.as_str())
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.value.as_str())
    }

    pub fn is_listening(&self, listener: ListenerId) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Build a click on the element with identifier `id`.  An identifier that
    /// only occurs inside some element's markup (such as a navigation button)
    /// is reported as lying within that element.
    pub fn click_element(&self, id: &str) -> Click {
        let click = Click::on(id);
        if self.elements.contains_key(id) {
            return click;
        }
        let needle = format!(r#"id="{id}""#);
        match self
            .elements
            .iter()
            .find(|(_, e)| e.markup.contains(&needle))
        {
            Some((parent, _)) => click.within(parent.as_str()),
            None => click,
        }
    }

    /// Build a click on the cell for `date` rendered inside element
    /// `container`, or `None` if the container shows no such pickable cell
    pub fn click_date(&self, container: &str, date: DateKey) -> Option<Click> {
        let needle = format!(r#"data-date="{date}""#);
        self.markup(container)
            .filter(|m| m.contains(&needle))
            .map(|_| Click::on_date(date).within(container))
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        let e = self.elements.get_mut(id);
        if e.is_none() {
            log::warn!("no element with id {id:?} in document");
        }
        e
    }
}

impl Surface for Document {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_markup(&mut self, id: &str, markup: String) {
        if let Some(e) = self.element_mut(id) {
            e.markup = markup;
        }
    }

    fn set_value(&mut self, id: &str, value: String) {
        if let Some(e) = self.element_mut(id) {
            e.value = value;
        }
    }

    fn set_class(&mut self, id: &str, class: &str, on: bool) {
        if let Some(e) = self.element_mut(id) {
            if on {
                e.classes.insert(class.to_owned());
            } else {
                e.classes.remove(class);
            }
        }
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn listen_for_clicks(&mut self) -> ListenerId {
        let listener = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(listener);
        listener
    }

    fn release_listener(&mut self, listener: ListenerId) {
        if !self.listeners.remove(&listener) {
            log::warn!("listener {listener:?} was not registered");
        }
    }
}
