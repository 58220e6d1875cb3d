use clap::Subcommand;
use slotwise_core::{ScheduleDb, TaskPriority};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task name
        name: String,
        /// Priority: high, medium, or low
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// List tasks, high priority first
    List,
    /// Remove a task by id
    Remove {
        /// Task id
        id: String,
    },
}

fn parse_priority(text: &str) -> Result<TaskPriority, String> {
    match text.to_ascii_lowercase().as_str() {
        "high" => Ok(TaskPriority::High),
        "medium" => Ok(TaskPriority::Medium),
        "low" => Ok(TaskPriority::Low),
        other => Err(format!("unknown priority '{other}': expected high, medium, or low")),
    }
}

fn priority_label(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::High => "High",
        TaskPriority::Medium => "Medium",
        TaskPriority::Low => "Low",
    }
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = ScheduleDb::open()?;
    match action {
        TaskAction::Add { name, priority } => {
            let priority = parse_priority(&priority)?;
            let task = db.insert_task(&name, priority)?;
            println!("added {} [{}] ({})", task.name, priority_label(task.priority), task.id);
        }
        TaskAction::List => {
            let tasks = db.list_tasks()?;
            if tasks.is_empty() {
                println!("no tasks");
                return Ok(());
            }
            for task in tasks {
                println!("{}  [{}]  {}", task.id, priority_label(task.priority), task.name);
            }
        }
        TaskAction::Remove { id } => {
            if db.delete_task(&id)? {
                println!("removed {id}");
            } else {
                return Err(format!("no task with id {id}").into());
            }
        }
    }
    Ok(())
}
