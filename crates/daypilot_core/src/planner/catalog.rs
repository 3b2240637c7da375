//! Declarative keyword and template tables for the plan generator.
//!
//! Keyword lists drive category detection; template lists are ordered so
//! that shorter time budgets keep the most important entries.

use crate::model::task::Priority;
use crate::planner::Category;
use Priority::{High, Low, Medium};

/// One canned task entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTemplate {
    pub title: &'static str,
    pub note: &'static str,
    pub priority: Priority,
}

const fn entry(title: &'static str, note: &'static str, priority: Priority) -> TaskTemplate {
    TaskTemplate {
        title,
        note,
        priority,
    }
}

const STUDY_TEMPLATES: [TaskTemplate; 9] = [
    entry("Review notes and key concepts", "Focus on summarizing main ideas", High),
    entry("Create flashcards for key terms", "Use active recall technique", High),
    entry("Practice problems or past papers", "Time yourself to simulate real conditions", High),
    entry("Summarize each chapter in your own words", "Write brief paragraphs", Medium),
    entry("Teach concepts to someone or out loud", "Explaining helps consolidate memory", Medium),
    entry("Organize study materials", "Keep everything in one place", Low),
    entry("Join a study group or forum", "Discuss difficult topics", Low),
    entry("Take short breaks between sessions", "Use the Pomodoro technique", Low),
    entry("Review mistakes and weak areas", "Turn weaknesses into strengths", Medium),
];

const WORK_TEMPLATES: [TaskTemplate; 9] = [
    entry("Check and respond to priority emails", "Handle urgent messages first", High),
    entry("Plan today's key deliverables", "Identify your top 3 tasks", High),
    entry("Complete the most important task", "Do deep work before meetings", High),
    entry("Attend scheduled meetings", "Prepare notes in advance", Medium),
    entry("Follow up on pending items", "Send reminders if needed", Medium),
    entry("Update project tracker or board", "Keep stakeholders informed", Medium),
    entry("Review code or documents", "Provide thoughtful feedback", Low),
    entry("Clean up workspace and files", "Organize documents and folders", Low),
    entry("Plan tomorrow's tasks", "End the day with a clear plan", Low),
];

const FITNESS_TEMPLATES: [TaskTemplate; 9] = [
    entry("Warm up with dynamic stretches", "5-10 minutes of mobility work", High),
    entry("Complete main workout", "Follow your training program", High),
    entry("Cool down and stretch", "Focus on worked muscle groups", High),
    entry("Prepare healthy meals for the day", "High protein, balanced macros", Medium),
    entry("Track workout and progress", "Log sets, reps, and weights", Medium),
    entry("Stay hydrated (8 glasses)", "Carry a water bottle", Medium),
    entry("Get 10,000 steps", "Walk during breaks", Low),
    entry("Foam roll tight muscles", "Aids recovery and reduces soreness", Low),
    entry("Plan tomorrow's workout", "Prepare gear the night before", Low),
];

const CLEAN_TEMPLATES: [TaskTemplate; 9] = [
    entry("Declutter main living area", "Put away items that are out of place", High),
    entry("Deep clean kitchen", "Counters, sink, appliances, and floor", High),
    entry("Clean bathrooms", "Toilet, sink, mirror, and floor", High),
    entry("Do laundry", "Wash, dry, fold, and put away", Medium),
    entry("Vacuum or mop floors", "All main rooms and hallways", Medium),
    entry("Dust furniture and shelves", "Use microfiber cloth", Medium),
    entry("Organize closets or drawers", "Donate items you no longer need", Low),
    entry("Take out trash and recycling", "Check all rooms", Low),
    entry("Wipe windows and mirrors", "Use streak-free cleaner", Low),
];

const PROJECT_TEMPLATES: [TaskTemplate; 9] = [
    entry("Define project scope and goals", "Clarify what success looks like", High),
    entry("Break project into milestones", "Create a timeline with deadlines", High),
    entry("Research and gather resources", "Collect tools, references, and data", High),
    entry("Create initial prototype or draft", "Start with a rough version", Medium),
    entry("Get feedback from peers or users", "Iterate based on input", Medium),
    entry("Refine and improve the work", "Polish details and fix issues", Medium),
    entry("Document your progress", "Keep notes for future reference", Low),
    entry("Test or review the final output", "Ensure quality standards are met", Low),
    entry("Present or deliver the project", "Share with stakeholders", Low),
];

const LEARN_TEMPLATES: [TaskTemplate; 9] = [
    entry("Watch tutorial or read introductory content", "Get an overview of the topic", High),
    entry("Take structured notes", "Summarize key points", High),
    entry("Practice with hands-on exercises", "Apply what you learned", High),
    entry("Review and revise notes", "Reinforce memory retention", Medium),
    entry("Build a mini-project using new skills", "Real application solidifies learning", Medium),
    entry("Join online community or forum", "Ask questions and share insights", Low),
    entry("Teach what you learned to someone", "Best way to deepen understanding", Low),
    entry("Set goals for tomorrow's learning", "Stay consistent and motivated", Low),
    entry("Explore advanced resources", "Books, courses, or documentation", Medium),
];

const PERSONAL_TEMPLATES: [TaskTemplate; 9] = [
    entry("Morning routine and self-care", "Meditation, journaling, or skincare", High),
    entry("Plan meals for the day", "Prep ingredients in advance", Medium),
    entry("Call or message a friend/family", "Maintain important relationships", Medium),
    entry("Read for 30 minutes", "A book, article, or blog", Low),
    entry("Manage finances and bills", "Review spending and upcoming payments", High),
    entry(
        "Schedule medical or personal appointments",
        "Don't postpone important check-ups",
        Medium,
    ),
    entry("Declutter your digital life", "Clean inbox, organize files", Low),
    entry("Gratitude journaling", "Write 3 things you're grateful for", Low),
    entry("Evening wind-down routine", "Limit screens, prepare for restful sleep", Medium),
];

const GENERAL_TEMPLATES: [TaskTemplate; 9] = [
    entry("Set today's top 3 priorities", "Focus on what matters most", High),
    entry("Complete your most important task", "Tackle it first while energy is high", High),
    entry("Organize your workspace", "A clean space boosts productivity", Medium),
    entry("Review progress at midday", "Adjust plan if needed", Medium),
    entry("Take a proper lunch break", "Step away from your desk", Medium),
    entry("Handle communications", "Batch emails and messages", Low),
    entry("Work on a secondary goal", "Make incremental progress", Low),
    entry("Reflect on today's achievements", "Celebrate small wins", Low),
    entry("Plan tomorrow's schedule", "End the day with clarity", Low),
];

const STUDY_KEYWORDS: &[&str] = &[
    "study", "exam", "test", "quiz", "homework", "assignment", "revision", "math", "science",
    "history", "literature", "course", "class", "lecture", "school", "university", "college",
    "gre", "sat", "gmat",
];

const WORK_KEYWORDS: &[&str] = &[
    "work", "office", "meeting", "email", "deadline", "project", "report", "client",
    "presentation", "deliverable", "sprint", "standup", "boss", "manager", "colleague",
];

const FITNESS_KEYWORDS: &[&str] = &[
    "fitness", "workout", "gym", "exercise", "run", "running", "yoga", "diet", "health", "muscle",
    "weight", "cardio", "training", "sport", "walk", "swim",
];

const CLEAN_KEYWORDS: &[&str] = &[
    "clean", "cleaning", "organize", "declutter", "tidy", "laundry", "dishes", "house",
    "apartment", "room", "kitchen", "bathroom",
];

const PROJECT_KEYWORDS: &[&str] = &[
    "project", "build", "create", "develop", "design", "app", "website", "prototype", "launch",
    "startup", "product", "mvp", "code", "coding", "program",
];

const LEARN_KEYWORDS: &[&str] = &[
    "learn", "tutorial", "course", "skill", "practice", "beginner", "intermediate", "advanced",
    "language", "programming", "piano", "guitar", "draw", "paint", "cooking",
];

const PERSONAL_KEYWORDS: &[&str] = &[
    "personal", "self", "routine", "morning", "evening", "relax", "journal", "read", "meditate",
    "budget", "finance", "family", "friend", "hobby",
];

/// Ordered template list for `category`.
pub fn templates(category: Category) -> &'static [TaskTemplate] {
    match category {
        Category::Study => &STUDY_TEMPLATES,
        Category::Work => &WORK_TEMPLATES,
        Category::Fitness => &FITNESS_TEMPLATES,
        Category::Clean => &CLEAN_TEMPLATES,
        Category::Project => &PROJECT_TEMPLATES,
        Category::Learn => &LEARN_TEMPLATES,
        Category::Personal => &PERSONAL_TEMPLATES,
        Category::General => &GENERAL_TEMPLATES,
    }
}

/// Keyword list used to score `category`; empty for the fallback.
pub fn keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Study => STUDY_KEYWORDS,
        Category::Work => WORK_KEYWORDS,
        Category::Fitness => FITNESS_KEYWORDS,
        Category::Clean => CLEAN_KEYWORDS,
        Category::Project => PROJECT_KEYWORDS,
        Category::Learn => LEARN_KEYWORDS,
        Category::Personal => PERSONAL_KEYWORDS,
        Category::General => &[],
    }
}
