use clap::Args;
use slotwise_core::planner::DayPlanner;
use slotwise_core::slots::parse_time;
use slotwise_core::{Config, ScheduleDb, WorkWindow};

use super::{load_meeting_snapshot, parse_busy_list};

#[derive(Args)]
pub struct PlanArgs {
    /// Plan against ad-hoc busy intervals (comma-separated HH:MM-HH:MM)
    /// instead of stored meetings
    #[arg(long)]
    busy: Option<String>,

    /// Override the desired meeting duration (minutes)
    #[arg(long)]
    duration: Option<i32>,

    /// Override the transition buffer (minutes)
    #[arg(long)]
    buffer: Option<i32>,

    /// Do not block out lunch
    #[arg(long)]
    no_lunch: bool,

    /// Override the work start time (HH:MM)
    #[arg(long)]
    work_start: Option<String>,

    /// Override the work end time (HH:MM)
    #[arg(long)]
    work_end: Option<String>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    let mut window = config.work_window()?;
    if let Some(start) = &args.work_start {
        window = WorkWindow::new(parse_time(start)?, window.end);
    }
    if let Some(end) = &args.work_end {
        window = WorkWindow::new(window.start, parse_time(end)?);
    }
    if window.start >= window.end {
        return Err("work day must end after it starts".into());
    }

    let mut planner_config = config.planner_config();
    if let Some(duration) = args.duration {
        planner_config.duration_minutes = duration;
    }
    if let Some(buffer) = args.buffer {
        planner_config.buffer_minutes = buffer;
    }
    if args.no_lunch {
        planner_config.avoid_lunch = false;
    }

    let meetings = match &args.busy {
        Some(text) => parse_busy_list(text),
        None => {
            let db = ScheduleDb::open()?;
            load_meeting_snapshot(&db)?
        }
    };

    let plan = DayPlanner::with_config(planner_config).plan(window, &meetings);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let today = chrono::Local::now().format("%Y-%m-%d");
    println!("Plan for {today} ({window})");
    println!();
    println!("Total work time: {} min", plan.totals.total_minutes);
    println!("Busy time:       {} min", plan.totals.busy_minutes);
    println!("Free time:       {} min", plan.totals.free_minutes);

    if plan.has_overlap {
        println!();
        println!("warning: overlapping meetings detected");
    }

    println!();
    if plan.free.is_empty() {
        println!("No free slots in the work window.");
    } else {
        println!("Free slots:");
        for iv in &plan.free {
            println!("  {iv}");
        }
    }

    println!();
    if plan.suggestions.is_empty() {
        println!(
            "No slots found for a {} minute meeting.",
            planner_config.duration_minutes
        );
    } else {
        println!("Suggestions:");
        for slot in &plan.suggestions {
            println!("  {} (score {})", slot.interval, slot.score);
        }
    }

    Ok(())
}
