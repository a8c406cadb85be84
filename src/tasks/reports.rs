//! Summary counts and due-date reminder buckets

use super::task::Task;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Aggregate counts over the whole collection (filters do not apply)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Incomplete dated tasks partitioned by due day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DueReminders {
    pub due_today: Vec<Task>,
    pub due_tomorrow: Vec<Task>,
    pub overdue: Vec<Task>,
}

impl DueReminders {
    pub fn is_empty(&self) -> bool {
        self.due_today.is_empty() && self.due_tomorrow.is_empty() && self.overdue.is_empty()
    }
}

/// Compute stats as of a local wall-clock instant
///
/// `overdue` compares the due date, taken as local midnight, against `now`.
/// A task due today is therefore counted here as soon as the day starts, while
/// [`Task::status_on`] only reports it overdue from the following day.
/// Browser `Date` parsing reads a bare `YYYY-MM-DD` as UTC midnight instead,
/// so near midnight the two counts can differ by the local UTC offset.
pub fn compute_stats_at(tasks: &[Task], now: NaiveDateTime) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let overdue = tasks
        .iter()
        .filter(|t| !t.completed)
        .filter_map(|t| t.due_date)
        .filter(|due| due.and_time(NaiveTime::MIN) < now)
        .count();

    TaskStats {
        total,
        completed,
        pending: total - completed,
        overdue,
    }
}

/// Partition incomplete dated tasks into today, tomorrow and overdue buckets
pub fn due_reminders_on(tasks: &[Task], today: NaiveDate) -> DueReminders {
    let tomorrow = today.checked_add_days(Days::new(1));
    let mut reminders = DueReminders::default();

    for task in tasks.iter().filter(|t| !t.completed) {
        let Some(due) = task.due_date else {
            continue;
        };
        if due == today {
            reminders.due_today.push(task.clone());
        } else if Some(due) == tomorrow {
            reminders.due_tomorrow.push(task.clone());
        } else if due < today {
            reminders.overdue.push(task.clone());
        }
    }

    reminders
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated(title: &str, due: Option<NaiveDate>, completed: bool) -> Task {
        let mut t = Task::new(title, None, due, None, 0);
        t.completed = completed;
        t
    }

    #[test]
    fn test_stats_overdue_uses_instant_boundary() {
        let today = date(2024, 6, 10);
        let now = today.and_hms_opt(9, 30, 0).unwrap();
        let tasks = vec![
            dated("due today", Some(today), false),
            dated("due yesterday", Some(date(2024, 6, 9)), false),
            dated("due tomorrow", Some(date(2024, 6, 11)), false),
            dated("done late", Some(date(2024, 6, 1)), true),
            dated("undated", None, false),
        ];

        let stats = compute_stats_at(&tasks, now);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 4);
        // today counts once the day has started, unlike status_on
        assert_eq!(stats.overdue, 2);
        assert_eq!(stats.pending, stats.total - stats.completed);
    }

    #[test]
    fn test_stats_at_exact_midnight() {
        let today = date(2024, 6, 10);
        let tasks = vec![dated("due today", Some(today), false)];
        let stats = compute_stats_at(&tasks, today.and_time(NaiveTime::MIN));
        assert_eq!(stats.overdue, 0);
    }

    #[test]
    fn test_due_reminders_buckets_are_disjoint() {
        let today = date(2024, 12, 31);
        let tasks = vec![
            dated("today", Some(today), false),
            dated("tomorrow", Some(date(2025, 1, 1)), false),
            dated("late", Some(date(2024, 12, 1)), false),
            dated("later", Some(date(2025, 2, 1)), false),
            dated("finished", Some(today), true),
            dated("undated", None, false),
        ];

        let reminders = due_reminders_on(&tasks, today);
        let names = |v: &[Task]| v.iter().map(|t| t.title.clone()).collect::<Vec<_>>();
        assert_eq!(names(&reminders.due_today), vec!["today"]);
        assert_eq!(names(&reminders.due_tomorrow), vec!["tomorrow"]);
        assert_eq!(names(&reminders.overdue), vec!["late"]);
        assert!(!reminders.is_empty());
    }
}
