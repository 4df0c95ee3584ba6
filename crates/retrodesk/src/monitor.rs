//! Activity monitor: a task view over open windows

use serde::{Deserialize, Serialize};
use crate::window::{Window, WindowId, WindowManager};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Running,
    Minimized,
    Collapsed,
}

impl TaskState {
    fn of(window: &Window) -> Self {
        if window.minimized {
            TaskState::Minimized
        } else if window.collapsed {
            TaskState::Collapsed
        } else {
            TaskState::Running
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Task {
    pub id: WindowId,
    pub title: String,
    pub state: TaskState,
    pub z_index: u32,
    pub focused: bool,
    /// Whether "End Task" can close it
    pub closable: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Title,
    State,
    #[default]
    Z,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Current tasks, in window opening order
pub fn tasks(windows: &WindowManager) -> Vec<Task> {
    let focused = windows.focused();
    windows
        .all_windows()
        .map(|w| Task {
            id: w.id.clone(),
            title: w.title.clone(),
            state: TaskState::of(w),
            z_index: w.z_index,
            focused: focused == Some(w.id.as_str()),
            closable: w.capabilities.closable,
        })
        .collect()
}

/// Sort tasks in place; ties fall back to the id so the order is stable
pub fn sort_tasks(tasks: &mut [Task], column: SortColumn, direction: SortDirection) {
    tasks.sort_by(|a, b| {
        let ord = match column {
            SortColumn::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortColumn::State => a.state.cmp(&b.state),
            SortColumn::Z => a.z_index.cmp(&b.z_index),
        }
        .then_with(|| a.id.cmp(&b.id));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Activity monitor view state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityMonitor {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl ActivityMonitor {
    /// Click on a column header: same column flips direction, new column sorts ascending
    pub fn sort_by(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Sorted task list
    pub fn rows(&self, windows: &WindowManager) -> Vec<Task> {
        let mut rows = tasks(windows);
        sort_tasks(&mut rows, self.column, self.direction);
        rows
    }
}
