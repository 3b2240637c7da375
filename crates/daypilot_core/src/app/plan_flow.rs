//! Two-step goal → suggestions flow.

use crate::model::suggestion::Suggestion;
use crate::model::task::Priority;
use serde::Serialize;

/// Visible step of the plan flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStep {
    /// Goal text and time budget entry.
    #[default]
    Input,
    /// Generated suggestions with per-entry selection.
    Results,
}

/// Transient state of an open plan flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlanFlow {
    pub(crate) step: PlanStep,
    pub(crate) goal_error: Option<String>,
    pub(crate) suggestions: Vec<Suggestion>,
    pub(crate) selected: Vec<bool>,
}

impl PlanFlow {
    pub(crate) fn show_results(&mut self, suggestions: Vec<Suggestion>) {
        self.selected = vec![true; suggestions.len()];
        self.suggestions = suggestions;
        self.goal_error = None;
        self.step = PlanStep::Results;
    }

    pub(crate) fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.selected.get_mut(index) {
            Some(slot) => {
                *slot = selected;
                true
            }
            None => false,
        }
    }

    /// Suggestions the user kept checked, in list order.
    pub(crate) fn selected_suggestions(&self) -> impl Iterator<Item = &Suggestion> {
        self.suggestions
            .iter()
            .zip(&self.selected)
            .filter_map(|(suggestion, selected)| selected.then_some(suggestion))
    }

    pub fn step(&self) -> PlanStep {
        self.step
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub(crate) fn to_view(&self) -> PlanView {
        PlanView {
            step: self.step,
            goal_error: self.goal_error.clone(),
            rows: self
                .suggestions
                .iter()
                .zip(&self.selected)
                .enumerate()
                .map(|(index, (suggestion, selected))| SuggestionRow {
                    index,
                    title: suggestion.title.clone(),
                    note: suggestion.note.clone(),
                    priority: suggestion.priority,
                    selected: *selected,
                })
                .collect(),
        }
    }
}

/// Display data for the plan flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanView {
    pub step: PlanStep,
    pub goal_error: Option<String>,
    pub rows: Vec<SuggestionRow>,
}

/// One checkbox row in the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionRow {
    pub index: usize,
    pub title: String,
    pub note: Option<String>,
    pub priority: Priority,
    pub selected: bool,
}
