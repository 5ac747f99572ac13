use colored::Colorize;

use crate::core::task::Task;

/// Format a list of tasks as a pretty list
pub fn format_tasks_pretty(tasks: &[&Task], title: &str, stats: &str) -> String {
    if tasks.is_empty() {
        return format!("{} (0 items)\n  No tasks", title);
    }

    let mut output = format!("{} ({} items)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let status_icon = if task.completed {
            "[x]".green()
        } else {
            "[ ]".white()
        };

        let text = if task.completed {
            task.text.strikethrough().to_string()
        } else {
            task.text.bold().to_string()
        };

        output.push_str(&format!(
            "{} {}  {}\n",
            status_icon,
            text,
            task.id.to_string().dimmed()
        ));
    }

    output.push_str(&format!("{}\n", stats.dimmed()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_task(id: i64, text: &str, completed: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            completed,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_list() {
        let tasks: Vec<&Task> = vec![];
        let result = format_tasks_pretty(&tasks, "All", "0 tasks remaining");
        assert!(result.contains("0 items"));
        assert!(result.contains("No tasks"));
    }

    #[test]
    fn test_list_with_tasks() {
        let a = make_task(1, "Buy milk", false);
        let b = make_task(2, "Write report", true);
        let result = format_tasks_pretty(&[&a, &b], "All", "1 task remaining");

        assert!(result.contains("Buy milk"));
        assert!(result.contains("Write report"));
        assert!(result.contains("2 items"));
        assert!(result.contains("1 task remaining"));
    }
}
