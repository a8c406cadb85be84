//! Text rendering of store outputs for MCP tool responses

use crate::tasks::{DueReminders, Task, TaskStats};
use chrono::{Days, NaiveDate};

/// Human-readable due date relative to `today`
///
/// # Examples
/// - `None` -> "No due date"
/// - yesterday -> "Overdue - Sun, Jun 9"
/// - today -> "Today - Mon, Jun 10"
pub fn due_date_label(due_date: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(date) = due_date else {
        return "No due date".to_string();
    };

    let formatted = date.format("%a, %b %-d").to_string();
    if date < today {
        format!("Overdue - {}", formatted)
    } else if date == today {
        format!("Today - {}", formatted)
    } else if Some(date) == today.checked_add_days(Days::new(1)) {
        format!("Tomorrow - {}", formatted)
    } else {
        formatted
    }
}

/// Format one task as a list entry
pub fn format_task(task: &Task, today: NaiveDate) -> String {
    let mut result = format!(
        "- [{}] {} (status: {}, {} priority)\n",
        task.id,
        task.title,
        task.status_on(today),
        task.priority
    );
    result.push_str(&format!("  Due: {}\n", due_date_label(task.due_date, today)));
    result.push_str(&format!("  Description: {}\n", task.description_or_default()));
    result
}

/// Format a computed view into a display string
pub fn format_view(view: &[Task], today: NaiveDate) -> String {
    if view.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", view.len());
    for task in view {
        result.push_str(&format_task(task, today));
    }
    result
}

pub fn format_stats(stats: &TaskStats) -> String {
    format!(
        "Total: {}\nCompleted: {}\nPending: {}\nOverdue: {}",
        stats.total, stats.completed, stats.pending, stats.overdue
    )
}

/// Reminder summary lines, one per non-empty bucket
pub fn format_reminders(reminders: &DueReminders) -> String {
    let mut lines = Vec::new();
    if !reminders.due_today.is_empty() {
        lines.push(format!("{} task(s) due today!", reminders.due_today.len()));
    }
    if !reminders.due_tomorrow.is_empty() {
        lines.push(format!("{} task(s) due tomorrow!", reminders.due_tomorrow.len()));
    }
    if !reminders.overdue.is_empty() {
        lines.push(format!("{} task(s) overdue!", reminders.overdue.len()));
    }

    if lines.is_empty() {
        return "No upcoming or overdue tasks".to_string();
    }
    lines.join("\n")
}
