use crate::date::DateKey;

/// The environment a picker is attached to: a set of elements addressed by
/// identifier, plus a source of click events.
pub trait Surface {
    fn has_element(&self, id: &str) -> bool;

    /// Replace the contents of element `id` with `markup`
    fn set_markup(&mut self, id: &str, markup: String);

    /// Set the text value of the (input) element `id`
    fn set_value(&mut self, id: &str, value: String);

    /// Add `class` to element `id` if `on` is true, else remove it
    fn set_class(&mut self, id: &str, class: &str, on: bool);

    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Start delivering document-wide clicks to a new listener
    fn listen_for_clicks(&mut self) -> ListenerId;

    fn release_listener(&mut self, listener: ListenerId);

    /// Flip `class` on element `id`, returning whether it is now set
    fn toggle_class(&mut self, id: &str, class: &str) -> bool {
        let on = !self.has_class(id, class);
        self.set_class(id, class, on);
        on
    }
}

/// Handle for a click listener registered with a [`Surface`]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ListenerId(pub u64);

/// A click as reported by the host
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Click {
    target: Option<String>,
    ancestors: Vec<String>,
    date: Option<DateKey>,
}

impl Click {
    /// A click on an element with identifier `id`
    pub fn on<S: Into<String>>(id: S) -> Click {
        Click {
            target: Some(id.into()),
            ..Click::default()
        }
    }

    /// A click on an element without an identifier, such as the page
    /// background
    pub fn nowhere() -> Click {
        Click::default()
    }

    /// A click on a calendar cell carrying `data-date`
    pub fn on_date(date: DateKey) -> Click {
        Click {
            date: Some(date),
            ..Click::default()
        }
    }

    /// Record that the clicked element lies within element `id`
    pub fn within<S: Into<String>>(mut self, id: S) -> Click {
        self.ancestors.push(id.into());
        self
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn date(&self) -> Option<DateKey> {
        self.date
    }

    /// Whether the click landed on element `id` or on something inside it
    pub fn is_inside(&self, id: &str) -> bool {
        self.target() == Some(id) || self.ancestors.iter().any(|a| a == id)
    }

    /// Whether the target's identifier begins with `prefix`
    pub fn target_starts_with(&self, prefix: &str) -> bool {
        self.target().is_some_and(|t| t.starts_with(prefix))
    }
}
