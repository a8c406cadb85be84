use super::reports::{self, DueReminders, TaskStats};
use super::task::{Priority, Task, TaskStatus, local_date_today, normalize_description};
use super::view::{self, Filters, PriorityFilter, SortMode, StatusFilter};
use crate::storage::{Persistence, Storage, Theme};
use chrono::{Days, Local, NaiveDate};
use std::collections::HashSet;

/// Owns the task list, the view criteria and the storage they persist to
///
/// Every successful mutation is followed by a full save. Operations that
/// reference an unknown ID return `false` and leave the list untouched.
pub struct TaskStore {
    tasks: Vec<Task>,
    filters: Filters,
    sort_mode: SortMode,
    theme: Theme,
    storage: Storage,
}

impl TaskStore {
    /// Create an empty store without reading storage
    pub fn new(storage: Storage) -> Self {
        Self {
            tasks: Vec::new(),
            filters: Filters::default(),
            sort_mode: SortMode::default(),
            theme: Theme::default(),
            storage,
        }
    }

    /// Load the store from storage, seeding example tasks if it is empty
    ///
    /// A storage file that cannot be read puts the store into memory-only
    /// mode instead of failing, so the file is left as it was found.
    pub fn open(storage: Storage) -> Self {
        Self::open_with_import(storage, Vec::new()).0
    }

    /// Load the store and append `imported` before deciding whether to seed
    ///
    /// Example tasks are only added when the list is still empty after the
    /// import. Returns the store and how many imported tasks were accepted.
    pub fn open_with_import(mut storage: Storage, imported: Vec<Task>) -> (Self, usize) {
        let document = match storage.load() {
            Ok(doc) => doc,
            Err(e) => {
                storage.degrade(format!("{:#}", e));
                Default::default()
            }
        };

        let mut store = Self::new(storage);
        store.tasks = document.tasks;
        store.theme = document.theme;

        let added = store.import_tasks(imported);
        if store.tasks.is_empty() {
            store.seed_default_tasks(local_date_today());
        }

        tracing::info!(tasks = store.tasks.len(), "task store ready");
        (store, added)
    }

    fn seed_default_tasks(&mut self, today: NaiveDate) {
        let tomorrow = today.checked_add_days(Days::new(1));
        self.tasks = vec![
            Task::new(
                "Welcome to your task list!",
                Some("This is your first task. You can edit, delete, or mark it as complete."),
                Some(today),
                Some(Priority::high),
                0,
            ),
            Task::new(
                "Add your first task",
                Some("Create a new task with title, description, due date, and priority."),
                tomorrow,
                Some(Priority::medium),
                1,
            ),
        ];
        self.persist("Seed example tasks");
    }

    /// Save the whole collection; failures switch storage to memory-only
    fn persist(&mut self, message: &str) {
        if let Err(e) = self.storage.save(&self.tasks, self.theme, message) {
            self.storage.degrade(format!("{:#}", e));
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn persistence(&self) -> &Persistence {
        self.storage.persistence()
    }

    // Mutations

    /// Append a new task and return a copy of it
    pub fn add_task(
        &mut self,
        title: &str,
        description: Option<&str>,
        due_date: Option<NaiveDate>,
        priority: Option<Priority>,
    ) -> Task {
        let task = Task::new(
            title,
            description,
            due_date,
            priority,
            self.tasks.len() as i64,
        );
        tracing::debug!(id = %task.id, "add task");
        self.tasks.push(task.clone());
        self.persist(&format!("Add task {}", task.id));
        task
    }

    /// Replace the editable fields of a task, keeping id, completion, creation time and order
    pub fn edit_task(
        &mut self,
        id: &str,
        title: &str,
        description: Option<&str>,
        due_date: Option<NaiveDate>,
        priority: Option<Priority>,
    ) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(%id, "edit: task not found");
            return false;
        };

        task.title = title.trim().to_string();
        task.description = normalize_description(description);
        task.due_date = due_date;
        task.priority = priority.unwrap_or_default();

        self.persist(&format!("Edit task {}", id));
        true
    }

    /// Remove a task; surviving `order` values are left as they are
    pub fn delete_task(&mut self, id: &str) -> bool {
        let Some(pos) = self.position(id) else {
            tracing::debug!(%id, "delete: task not found");
            return false;
        };

        self.tasks.remove(pos);
        self.persist(&format!("Delete task {}", id));
        true
    }

    pub fn toggle_complete(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(%id, "toggle: task not found");
            return false;
        };

        task.completed = !task.completed;
        let message = if task.completed {
            format!("Complete task {}", id)
        } else {
            format!("Reopen task {}", id)
        };
        self.persist(&message);
        true
    }

    /// Move `dragged_id` to the index `target_id` held before the move, then
    /// renumber `order` densely from 0 in list order
    pub fn reorder(&mut self, dragged_id: &str, target_id: &str) -> bool {
        if dragged_id == target_id {
            return false;
        }
        let (Some(dragged_index), Some(target_index)) =
            (self.position(dragged_id), self.position(target_id))
        else {
            tracing::debug!(%dragged_id, %target_id, "reorder: task not found");
            return false;
        };

        let dragged = self.tasks.remove(dragged_index);
        self.tasks.insert(target_index, dragged);

        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.order = index as i64;
        }

        self.persist(&format!("Reorder task {}", dragged_id));
        true
    }

    /// Append tasks from an external source
    ///
    /// Tasks whose ID is already present (or repeated within `incoming`) are
    /// skipped. Accepted tasks are shifted as a block past the current tail,
    /// so gaps and ties between their `order` values survive the import.
    /// Returns how many were added.
    pub fn import_tasks(&mut self, incoming: Vec<Task>) -> usize {
        let mut seen: HashSet<String> = self.tasks.iter().map(|t| t.id.clone()).collect();
        let base = self.tasks.iter().map(|t| t.order + 1).max().unwrap_or(0);

        let accepted: Vec<Task> = incoming
            .into_iter()
            .filter(|task| {
                let fresh = seen.insert(task.id.clone());
                if !fresh {
                    tracing::warn!(id = %task.id, "skipping imported task with duplicate id");
                }
                fresh
            })
            .collect();
        let Some(lowest) = accepted.iter().map(|t| t.order).min() else {
            return 0;
        };

        let added = accepted.len();
        for mut task in accepted {
            task.order = base + (task.order - lowest);
            self.tasks.push(task);
        }

        self.persist(&format!("Import {} task(s)", added));
        added
    }

    // View criteria

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filters.status = status;
    }

    pub fn set_priority_filter(&mut self, priority: PriorityFilter) {
        self.filters.priority = priority;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filters.search = search.into();
    }

    pub fn clear_filters(&mut self) {
        self.filters = Filters::default();
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    // Derived outputs

    /// Filtered and sorted copy of the task list
    pub fn compute_view(&self) -> Vec<Task> {
        view::compute_view(&self.tasks, &self.filters, self.sort_mode)
    }

    /// Status of a task relative to today's local date
    pub fn status(&self, task: &Task) -> TaskStatus {
        task.status_on(local_date_today())
    }

    pub fn compute_stats(&self) -> TaskStats {
        self.compute_stats_at(Local::now().naive_local())
    }

    pub fn compute_stats_at(&self, now: chrono::NaiveDateTime) -> TaskStats {
        reports::compute_stats_at(&self.tasks, now)
    }

    pub fn due_reminders(&self) -> DueReminders {
        self.due_reminders_on(local_date_today())
    }

    pub fn due_reminders_on(&self, today: NaiveDate) -> DueReminders {
        reports::due_reminders_on(&self.tasks, today)
    }

    // Theme

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist(&format!("Switch to {} theme", theme));
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggled();
        self.set_theme(theme);
        theme
    }
}
