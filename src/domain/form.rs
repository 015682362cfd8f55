//! Project description form.
//!
//! `FormData` is the request body sent to the recommendation service.
//! `InputForm` wraps it with one searchable select per free-text field and
//! the priorities checklist.

use serde::{Deserialize, Serialize};

use super::catalog::{FormField, PRIORITIES};
use super::select::{SearchableSelect, SelectEvent};

pub const SUBMIT_LABEL: &str = "Generate Recommendation";
pub const SUBMIT_LOADING_LABEL: &str = "Analyzing...";

/// Ordered set of selected priorities.
///
/// Insertion order is selection order. `toggle` is the only mutator and
/// decoding deduplicates, so duplicates cannot occur.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Priorities(Vec<String>);

impl Priorities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `priority` if present, otherwise appends it.
    pub fn toggle(&mut self, priority: &str) {
        match self.0.iter().position(|p| p == priority) {
            Some(index) => {
                self.0.remove(index);
            }
            None => self.0.push(priority.to_string()),
        }
    }

    pub fn contains(&self, priority: &str) -> bool {
        self.0.iter().any(|p| p == priority)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Priorities {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut priorities = Priorities::new();
        for priority in iter {
            if !priorities.contains(priority.as_ref()) {
                priorities.toggle(priority.as_ref());
            }
        }
        priorities
    }
}

impl From<Vec<String>> for Priorities {
    fn from(priorities: Vec<String>) -> Self {
        priorities.into_iter().collect()
    }
}

impl From<Priorities> for Vec<String> {
    fn from(priorities: Priorities) -> Self {
        priorities.0
    }
}

/// Request body for `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub project_type: String,
    pub domain: String,
    pub expected_scale: String,
    pub team_size: String,
    pub budget: String,
    pub priorities: Priorities,
    pub hardware_integration: bool,
}

impl Default for FormData {
    fn default() -> Self {
        Self {
            project_type: "Web App".to_string(),
            domain: "E-commerce".to_string(),
            expected_scale: "Small (Hundreds of users)".to_string(),
            team_size: "Solo Developer".to_string(),
            budget: "Tight / Bootstrapped".to_string(),
            priorities: ["Functionality & Correctness"].into_iter().collect(),
            hardware_integration: false,
        }
    }
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::ProjectType => &self.project_type,
            FormField::Domain => &self.domain,
            FormField::ExpectedScale => &self.expected_scale,
            FormField::TeamSize => &self.team_size,
            FormField::Budget => &self.budget,
        }
    }

    /// Replaces one field's value. No validation.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::ProjectType => &mut self.project_type,
            FormField::Domain => &mut self.domain,
            FormField::ExpectedScale => &mut self.expected_scale,
            FormField::TeamSize => &mut self.team_size,
            FormField::Budget => &mut self.budget,
        };
        *slot = value.into();
    }
}

/// State of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub disabled: bool,
}

/// One row of the priorities checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityEntry {
    pub label: &'static str,
    pub checked: bool,
}

#[derive(Debug, Clone)]
pub struct InputForm {
    data: FormData,
    selects: Vec<SearchableSelect>,
}

impl Default for InputForm {
    fn default() -> Self {
        Self::new(FormData::default())
    }
}

impl InputForm {
    pub fn new(data: FormData) -> Self {
        let selects = FormField::ALL
            .iter()
            .map(|field| SearchableSelect::new(*field, data.get(*field)))
            .collect();
        Self { data, selects }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn select(&self, field: FormField) -> &SearchableSelect {
        &self.selects[Self::slot(field)]
    }

    pub fn select_mut(&mut self, field: FormField) -> &mut SearchableSelect {
        &mut self.selects[Self::slot(field)]
    }

    fn slot(field: FormField) -> usize {
        match field {
            FormField::ProjectType => 0,
            FormField::Domain => 1,
            FormField::ExpectedScale => 2,
            FormField::TeamSize => 3,
            FormField::Budget => 4,
        }
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.data.set(field, value);
        let current = self.data.get(field).to_string();
        self.select_mut(field).sync_value(&current);
    }

    pub fn apply(&mut self, event: SelectEvent) {
        match event {
            SelectEvent::Changed { field, value } => self.update_field(field, value),
        }
    }

    /// Types into a field's select and applies the resulting change.
    pub fn type_into(&mut self, field: FormField, text: impl Into<String>) {
        let event = self.select_mut(field).input(text);
        self.apply(event);
    }

    /// Picks the `index`-th visible suggestion of a field. Returns false if out of range.
    pub fn choose_suggestion(&mut self, field: FormField, index: usize) -> bool {
        match self.select_mut(field).choose_index(index) {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Closes every open dropdown; values stay as typed.
    pub fn click_outside(&mut self) {
        for select in &mut self.selects {
            select.click_outside();
        }
    }

    pub fn toggle_priority(&mut self, priority: &str) {
        self.data.priorities.toggle(priority);
    }

    pub fn priority_entries(&self) -> Vec<PriorityEntry> {
        PRIORITIES
            .iter()
            .map(|label| PriorityEntry {
                label: *label,
                checked: self.data.priorities.contains(label),
            })
            .collect()
    }

    pub fn submit_control(&self, is_loading: bool) -> SubmitControl {
        SubmitControl {
            label: if is_loading {
                SUBMIT_LOADING_LABEL
            } else {
                SUBMIT_LABEL
            },
            disabled: is_loading,
        }
    }

    /// Snapshot of the form for submission, or `None` while the control is disabled.
    pub fn submit(&self, is_loading: bool) -> Option<FormData> {
        if self.submit_control(is_loading).disabled {
            return None;
        }
        Some(self.data.clone())
    }
}
