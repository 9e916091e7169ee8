use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "OWNER"]);
        for task in tasks {
            let status = Self::status(task);
            let owner = task.owner.map(|owner| owner.to_string()).unwrap_or_default();
            table.add_row(row![task.id, task.title, status, owner]);
        }
        table
    }

    pub fn tasks(tasks: &[Task]) {
        Self::table(tasks).printstd();
    }

    pub fn status(task: &Task) -> &'static str {
        if task.completed {
            "Done"
        } else {
            "Open"
        }
    }

    /// One-line label used in selection menus.
    pub fn label(task: &Task) -> String {
        format!("#{} [{}] {}", task.id, Self::status(task), task.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::TaskId;

    #[test]
    fn table_has_header_plus_one_row_per_task() {
        let tasks = vec![Task::new(TaskId(1), "a", true), Task::new(TaskId(2), "b", false)];
        let table = View::table(&tasks);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get_row(1).unwrap().get_cell(2).unwrap().get_content(), "Done");
    }

    #[test]
    fn label_shows_id_status_and_title() {
        let task = Task::new(TaskId(10001), "Buy milk", false);
        assert_eq!(View::label(&task), "#10001 [Open] Buy milk");
    }
}
