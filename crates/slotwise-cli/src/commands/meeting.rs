use clap::Subcommand;
use slotwise_core::slots::parse_time;
use slotwise_core::ScheduleDb;

#[derive(Subcommand)]
pub enum MeetingAction {
    /// Add a meeting
    Add {
        /// Start time (HH:MM)
        start: String,
        /// End time (HH:MM)
        end: String,
        /// Meeting title
        #[arg(long, default_value = "Meeting")]
        title: String,
    },
    /// List meetings
    List,
    /// Remove a meeting by id
    Remove {
        /// Meeting id
        id: String,
    },
}

pub fn run(action: MeetingAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = ScheduleDb::open()?;
    match action {
        MeetingAction::Add { start, end, title } => {
            let start_min = parse_time(&start)?;
            let end_min = parse_time(&end)?;
            if start_min >= end_min {
                return Err("end time must be after start time".into());
            }

            let meeting = db.insert_meeting(&title, &start, &end)?;
            println!(
                "added {} {}-{} ({})",
                meeting.title, meeting.start, meeting.end, meeting.id
            );
        }
        MeetingAction::List => {
            let meetings = db.list_meetings()?;
            if meetings.is_empty() {
                println!("no meetings");
                return Ok(());
            }
            for meeting in meetings {
                println!(
                    "{}  {}-{}  {}",
                    meeting.id, meeting.start, meeting.end, meeting.title
                );
            }
        }
        MeetingAction::Remove { id } => {
            if db.delete_meeting(&id)? {
                println!("removed {id}");
            } else {
                return Err(format!("no meeting with id {id}").into());
            }
        }
    }
    Ok(())
}
