//! Template-based plan generator.
//!
//! # Responsibility
//! - Detect a goal category from free text by keyword frequency.
//! - Slice the category's template list by a time budget.
//!
//! # Invariants
//! - Output is deterministic for the same input; nothing is learned or fetched.
//! - Returned suggestions are owned copies, detached from the static tables.
//! - Category ties resolve by declaration order; zero matches fall back to
//!   `General`.

pub mod catalog;

use crate::model::suggestion::Suggestion;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid non-word regex"));

/// Goal domain used to pick a template list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Study,
    Work,
    Fitness,
    Clean,
    Project,
    Learn,
    Personal,
    /// Fallback when no keyword matches.
    General,
}

impl Category {
    /// Scored categories in tie-breaking order.
    pub const SCORED: [Category; 7] = [
        Category::Study,
        Category::Work,
        Category::Fitness,
        Category::Clean,
        Category::Project,
        Category::Learn,
        Category::Personal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Work => "work",
            Self::Fitness => "fitness",
            Self::Clean => "clean",
            Self::Project => "project",
            Self::Learn => "learn",
            Self::Personal => "personal",
            Self::General => "general",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much time the user has; controls the number of suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeBudget {
    Short,
    #[default]
    Medium,
    Long,
}

impl TimeBudget {
    /// Resolves budget text; anything unrecognized means `Medium`.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Self::Short,
            "long" => Self::Long,
            _ => Self::Medium,
        }
    }

    pub fn task_count(self) -> usize {
        match self {
            Self::Short => 4,
            Self::Medium => 6,
            Self::Long => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

/// Picks the category whose keywords match the most goal tokens.
pub fn detect_category(goal_text: &str) -> Category {
    let lowered = goal_text.to_lowercase();
    let tokens: Vec<&str> = NON_WORD_RE.split(&lowered).collect();

    let mut best = Category::General;
    let mut best_score = 0usize;
    for category in Category::SCORED {
        let keywords = catalog::keywords(category);
        let score = tokens
            .iter()
            .filter(|token| keywords.contains(*token))
            .count();
        // Strictly greater keeps the earlier category on ties.
        if score > best_score {
            best = category;
            best_score = score;
        }
    }
    best
}

/// Builds the suggestion list for a goal and a time budget.
pub fn generate_plan(goal_text: &str, budget: TimeBudget) -> Vec<Suggestion> {
    let category = detect_category(goal_text);
    let suggestions: Vec<Suggestion> = catalog::templates(category)
        .iter()
        .take(budget.task_count())
        .map(|template| Suggestion {
            title: template.title.to_string(),
            note: Some(template.note.to_string()).filter(|note| !note.is_empty()),
            priority: template.priority,
        })
        .collect();
    debug!(
        "event=plan_generate module=planner status=ok category={} budget={} count={}",
        category,
        budget.as_str(),
        suggestions.len()
    );
    suggestions
}

#[cfg(test)]
mod tests {
    use super::{catalog, detect_category, generate_plan, Category, TimeBudget};

    #[test]
    fn detects_study_goal() {
        assert_eq!(detect_category("I need to study for my exam"), Category::Study);
    }

    #[test]
    fn unknown_words_fall_back_to_general() {
        assert_eq!(detect_category("xyz abc"), Category::General);
        assert_eq!(detect_category(""), Category::General);
    }

    #[test]
    fn ties_prefer_declaration_order() {
        // "project" is a work keyword and a project keyword: work is declared first.
        assert_eq!(detect_category("project"), Category::Work);
        // "course" appears in study and learn.
        assert_eq!(detect_category("course"), Category::Study);
    }

    #[test]
    fn higher_count_beats_declaration_order() {
        assert_eq!(
            detect_category("build an app and launch the website"),
            Category::Project
        );
    }

    #[test]
    fn tokenizer_splits_on_punctuation_and_case() {
        assert_eq!(detect_category("GYM!!! workout,cardio"), Category::Fitness);
    }

    #[test]
    fn budget_controls_entry_count() {
        assert_eq!(generate_plan("exam", TimeBudget::Short).len(), 4);
        assert_eq!(generate_plan("exam", TimeBudget::Long).len(), 9);
        assert_eq!(
            generate_plan("exam", TimeBudget::parse_or_default("unknown")).len(),
            6
        );
    }

    #[test]
    fn plan_keeps_template_order() {
        let plan = generate_plan("clean the kitchen", TimeBudget::Short);
        let expected: Vec<_> = catalog::templates(Category::Clean)[..4]
            .iter()
            .map(|template| template.title)
            .collect();
        let titles: Vec<_> = plan.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn every_category_has_nine_templates() {
        for category in Category::SCORED.into_iter().chain([Category::General]) {
            assert_eq!(catalog::templates(category).len(), 9, "{category}");
        }
    }
}
