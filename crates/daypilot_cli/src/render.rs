//! Plain-text rendering of core view models.

use daypilot_core::app::SuggestionRow;
use daypilot_core::{AppViewModel, Category, DashboardStats, TaskCard, TaskListView};
use std::io::{self, Write};

const SHORT_ID_LEN: usize = 8;

pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

pub fn write_stats(out: &mut impl Write, stats: &DashboardStats) -> io::Result<()> {
    writeln!(
        out,
        "{} total, {} completed, {} pending ({}% done)",
        stats.total, stats.completed, stats.pending, stats.percent
    )
}

pub fn write_view(out: &mut impl Write, view: &AppViewModel) -> io::Result<()> {
    writeln!(out, "{}", view.header_date)?;
    write_stats(out, &view.dashboard)?;
    writeln!(out, "filter: {}  sort: {}", view.filter, view.sort)?;
    writeln!(out)?;

    match &view.list {
        TaskListView::Empty { message } => writeln!(out, "{message}"),
        TaskListView::Flat { cards } => cards.iter().try_for_each(|card| write_card(out, card)),
        TaskListView::Grouped { groups } => {
            for (index, group) in groups.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}", group.header)?;
                for card in &group.cards {
                    write_card(out, card)?;
                }
            }
            Ok(())
        }
    }
}

fn write_card(out: &mut impl Write, card: &TaskCard) -> io::Result<()> {
    let check = if card.completed { "x" } else { " " };
    write!(
        out,
        "  [{check}] {}  {:<6}  {}",
        short_id(&card.id),
        card.priority.as_str(),
        card.title
    )?;
    match &card.note {
        Some(note) => writeln!(out, "  ({note})"),
        None => writeln!(out),
    }
}

pub fn write_suggestions(
    out: &mut impl Write,
    category: Category,
    rows: &[SuggestionRow],
) -> io::Result<()> {
    writeln!(out, "Suggested {category} plan:")?;
    for row in rows {
        write_row(out, row)?;
    }
    writeln!(out)?;
    writeln!(out, "Re-run with --accept-all or --pick 1,2,... to add tasks.")
}

fn write_row(out: &mut impl Write, row: &SuggestionRow) -> io::Result<()> {
    write!(out, "  {:>2}. {:<6}  {}", row.index + 1, row.priority.as_str(), row.title)?;
    match &row.note {
        Some(note) => writeln!(out, "  ({note})"),
        None => writeln!(out),
    }
}
