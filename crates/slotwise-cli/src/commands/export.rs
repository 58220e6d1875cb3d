use std::path::PathBuf;

use clap::Args;
use slotwise_core::export::schedule_csv;
use slotwise_core::planner::DayPlanner;
use slotwise_core::{Config, ScheduleDb};

use super::load_meeting_snapshot;

#[derive(Args)]
pub struct ExportArgs {
    /// Export the free slots instead of the busy schedule
    #[arg(long)]
    free: bool,

    /// Write to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let window = config.work_window()?;

    let db = ScheduleDb::open()?;
    let meetings = load_meeting_snapshot(&db)?;

    let plan = DayPlanner::with_config(config.planner_config()).plan(window, &meetings);
    let csv = if args.free {
        schedule_csv(&plan.free)
    } else {
        schedule_csv(&plan.busy)
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, csv)?;
            println!("wrote {}", path.display());
        }
        None => print!("{csv}"),
    }

    Ok(())
}
