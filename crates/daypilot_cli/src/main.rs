//! DayPilot command-line front-end.
//!
//! # Responsibility
//! - Map subcommands onto `AppState` actions.
//! - Render the view model as plain text or JSON.

mod render;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use daypilot_core::config::default_log_dir;
use daypilot_core::{
    detect_category, init_logging, open_storage, AppConfig, AppState, KvStore, Priority, SortMode,
    TaskFilter, TimeBudget,
};
use log::info;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "daypilot",
    version,
    about = "Plan your day: tasks, priorities and goal-based plans"
)]
struct Cli {
    /// Task database file (overrides DAYPILOT_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Write rotating log files (DAYPILOT_LOG_DIR or the data directory)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// high, medium or low
        #[arg(short, long, default_value = "medium", value_parser = parse_priority)]
        priority: Priority,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
        /// Print the created task id as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the dashboard and task list
    List {
        /// all, active or completed
        #[arg(short, long, default_value = "all", value_parser = parse_filter)]
        filter: TaskFilter,
        /// priority or newest
        #[arg(short, long, default_value = "priority", value_parser = parse_sort)]
        sort: SortMode,
        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle a task between active and completed
    Toggle {
        /// Task id or unique id prefix
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task id or unique id prefix
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show completion counters
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Generate a task plan from a goal description
    Plan {
        /// Free-text goal, e.g. "study for my exam"
        #[arg(required = true, num_args = 1..)]
        goal: Vec<String>,
        /// short (4), medium (6) or long (9); anything else means medium
        #[arg(short, long, default_value = "medium")]
        budget: String,
        /// Add every suggestion as a task
        #[arg(long, conflicts_with = "pick")]
        accept_all: bool,
        /// Add only these suggestions (1-based, comma separated)
        #[arg(long, value_delimiter = ',')]
        pick: Vec<usize>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(db) = cli.db {
        config = config.with_db_path(db);
    }
    let log_dir = match (&config.log_dir, cli.log) {
        (Some(dir), _) => Some(dir.clone()),
        (None, true) => Some(default_log_dir()),
        (None, false) => None,
    };
    if let Some(log_dir) = log_dir {
        if let Err(err) = init_logging(config.log_level, &log_dir.to_string_lossy()) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let mut app = AppState::load(open_storage(&config));
    info!("event=cli_start module=cli status=ok tasks={}", app.store().len());
    run(&mut app, cli.command)
}

fn run(app: &mut AppState<Box<dyn KvStore>>, command: Commands) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match command {
        Commands::Add {
            title,
            priority,
            note,
            json,
        } => {
            let id = app
                .submit_task(&title, priority, note.as_deref())
                .map_err(anyhow::Error::new)?;
            if json {
                writeln!(stdout, "{}", serde_json::json!({ "id": id }))?;
            } else {
                writeln!(stdout, "Added {}", render::short_id(&id))?;
            }
        }
        Commands::List { filter, sort, json } => {
            app.set_filter(filter);
            app.set_sort(sort);
            let view = app.view_model(today());
            if json {
                serde_json::to_writer_pretty(&mut stdout, &view)
                    .context("failed to encode view model")?;
                writeln!(stdout)?;
            } else {
                render::write_view(&mut stdout, &view)?;
            }
        }
        Commands::Toggle { id } => {
            let id = resolve_id(app, &id)?;
            if app.toggle(&id) {
                let state = match app.store().get(&id) {
                    Some(task) if task.completed => "completed",
                    _ => "active",
                };
                writeln!(stdout, "Marked {} {state}", render::short_id(&id))?;
            } else {
                writeln!(stdout, "No matching task.")?;
            }
        }
        Commands::Delete { id, yes } => {
            let id = resolve_id(app, &id)?;
            let message = app.request_delete(&id).message.clone();
            if !yes && !confirm(&message)? {
                app.cancel_delete();
                writeln!(stdout, "Cancelled.")?;
                return Ok(());
            }
            let existed = app.store().get(&id).is_some();
            app.confirm_delete();
            // No animation in a terminal: complete the fade right away.
            app.finish_fade();
            if existed {
                writeln!(stdout, "Deleted {}", render::short_id(&id))?;
            } else {
                writeln!(stdout, "No matching task.")?;
            }
        }
        Commands::Stats { json } => {
            let stats = app.view_model(today()).dashboard;
            if json {
                writeln!(stdout, "{}", serde_json::to_string(&stats)?)?;
            } else {
                render::write_stats(&mut stdout, &stats)?;
            }
        }
        Commands::Plan {
            goal,
            budget,
            accept_all,
            pick,
            json,
        } => {
            let goal = goal.join(" ");
            let budget = TimeBudget::parse_or_default(&budget);
            let category = detect_category(&goal);
            let suggestions = app
                .generate_plan(&goal, budget)
                .map_err(anyhow::Error::new)?
                .to_vec();
            let count = suggestions.len();

            if let Some(index) = pick.iter().find(|index| **index == 0 || **index > count) {
                bail!("--pick {index} is out of range 1..={count}");
            }

            let added = if accept_all {
                app.accept_all()
            } else if !pick.is_empty() {
                for index in 0..count {
                    app.set_suggestion_selected(index, pick.contains(&(index + 1)));
                }
                app.accept_selected()
            } else {
                Vec::new()
            };

            if json {
                writeln!(
                    stdout,
                    "{}",
                    serde_json::json!({
                        "category": category.as_str(),
                        "suggestions": suggestions,
                        "added": added,
                    })
                )?;
            } else if let Some(plan) = app.view_model(today()).plan {
                render::write_suggestions(&mut stdout, category, &plan.rows)?;
            } else {
                writeln!(stdout, "Added {} task(s) from the {category} plan.", added.len())?;
            }
        }
    }
    Ok(())
}

/// Resolves a full id or unique id prefix; unknown ids pass through unchanged.
fn resolve_id(app: &AppState<Box<dyn KvStore>>, raw: &str) -> anyhow::Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        bail!("task id must not be empty");
    }
    if app.store().get(raw).is_some() {
        return Ok(raw.to_string());
    }
    let matches: Vec<&str> = app
        .store()
        .tasks()
        .iter()
        .map(|task| task.id.as_str())
        .filter(|id| id.starts_with(raw))
        .collect();
    match matches.as_slice() {
        [only] => Ok((*only).to_string()),
        [] => Ok(raw.to_string()),
        many => bail!("id prefix `{raw}` is ambiguous ({} tasks match)", many.len()),
    }
}

fn confirm(message: &str) -> anyhow::Result<bool> {
    let mut stderr = std::io::stderr().lock();
    write!(stderr, "{message} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("failed to read confirmation")?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn parse_priority(value: &str) -> Result<Priority, String> {
    Priority::parse(value)
        .ok_or_else(|| format!("unknown priority `{value}`; expected high|medium|low"))
}

fn parse_filter(value: &str) -> Result<TaskFilter, String> {
    TaskFilter::parse(value)
        .ok_or_else(|| format!("unknown filter `{value}`; expected all|active|completed"))
}

fn parse_sort(value: &str) -> Result<SortMode, String> {
    SortMode::parse(value)
        .ok_or_else(|| format!("unknown sort `{value}`; expected priority|newest"))
}
