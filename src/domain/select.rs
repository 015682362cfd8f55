//! Searchable select: a free-text input with a filtered suggestion list.
//!
//! The select never validates against its catalog. Whatever the user types
//! becomes the field value immediately; the list is only a shortcut.

use super::catalog::FormField;

/// Text shown when the search text matches no option.
pub const NO_MATCHES: &str = "No matching options found.";

/// Emitted whenever the bound value should change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEvent {
    Changed { field: FormField, value: String },
}

/// One visible entry of the open dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub label: String,
    pub is_selected: bool,
}

/// What the dropdown area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dropdown {
    Closed,
    NoMatches,
    Options(Vec<OptionEntry>),
}

#[derive(Debug, Clone)]
pub struct SearchableSelect {
    field: FormField,
    options: Vec<String>,
    value: String,
    search: String,
    open: bool,
}

/// Options containing `search` case-insensitively, in source order.
pub fn filter_options<'a, S: AsRef<str>>(options: &'a [S], search: &str) -> Vec<&'a str> {
    let needle = search.to_lowercase();
    options
        .iter()
        .map(|option| option.as_ref())
        .filter(|option| option.to_lowercase().contains(&needle))
        .collect()
}

impl SearchableSelect {
    pub fn new(field: FormField, value: impl Into<String>) -> Self {
        Self::with_options(field, field.options().iter().copied(), value)
    }

    /// Builds a select over an explicit option list instead of the field's catalog.
    pub fn with_options<I, S>(field: FormField, options: I, value: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let value = value.into();
        Self {
            field,
            options: options.into_iter().map(Into::into).collect(),
            search: value.clone(),
            value,
            open: false,
        }
    }

    pub fn field(&self) -> FormField {
        self.field
    }

    pub fn placeholder(&self) -> &'static str {
        self.field.placeholder()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn focus(&mut self) {
        self.open = true;
    }

    /// Handles typed text: reopens the list and propagates the raw text.
    pub fn input(&mut self, text: impl Into<String>) -> SelectEvent {
        let text = text.into();
        self.search = text.clone();
        self.value = text.clone();
        self.open = true;
        SelectEvent::Changed {
            field: self.field,
            value: text,
        }
    }

    /// Picks an entry from the list and closes it.
    pub fn choose(&mut self, option: impl Into<String>) -> SelectEvent {
        let option = option.into();
        self.search = option.clone();
        self.value = option.clone();
        self.open = false;
        SelectEvent::Changed {
            field: self.field,
            value: option,
        }
    }

    /// Picks the `index`-th currently visible entry, if there is one.
    pub fn choose_index(&mut self, index: usize) -> Option<SelectEvent> {
        let option = self.filtered_options().get(index)?.to_string();
        Some(self.choose(option))
    }

    /// Closes the list without touching the value.
    pub fn click_outside(&mut self) {
        self.open = false;
    }

    /// Mirrors an externally changed value into the search text.
    pub fn sync_value(&mut self, value: &str) {
        if self.value != value {
            self.value = value.to_string();
            self.search = value.to_string();
        }
    }

    pub fn filtered_options(&self) -> Vec<&str> {
        filter_options(&self.options, &self.search)
    }

    pub fn dropdown(&self) -> Dropdown {
        if !self.open {
            return Dropdown::Closed;
        }
        let visible = self.filtered_options();
        if visible.is_empty() {
            return Dropdown::NoMatches;
        }
        Dropdown::Options(
            visible
                .into_iter()
                .map(|label| OptionEntry {
                    label: label.to_string(),
                    is_selected: label == self.value,
                })
                .collect(),
        )
    }
}
