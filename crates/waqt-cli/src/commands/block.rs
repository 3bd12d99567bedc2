//! Time block commands: scheduling, edits, completion, listing.

use clap::Subcommand;
use waqt_core::{ActivityKind, DayPlanner, PlannerDb, ScheduleError, TimeRange, WallClock};

use super::common;

#[derive(Subcommand)]
pub enum BlockAction {
    /// Schedule an activity; it is split at prayer boundaries automatically
    Add {
        /// Block title
        title: String,
        /// Start time (HH:MM)
        #[arg(long)]
        from: String,
        /// End time (HH:MM, same day)
        #[arg(long)]
        to: String,
        /// Activity kind: work, rest or other
        #[arg(long, default_value = "other")]
        kind: String,
    },
    /// Edit a block; it stays a single interval and is never re-split
    Edit {
        /// Block ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New start time (HH:MM)
        #[arg(long)]
        from: Option<String>,
        /// New end time (HH:MM)
        #[arg(long)]
        to: Option<String>,
        /// New activity kind
        #[arg(long)]
        kind: Option<String>,
    },
    /// Remove a block
    Remove {
        /// Block ID
        id: String,
    },
    /// Mark a block done
    Done {
        /// Block ID
        id: String,
    },
    /// Clear a block's done mark
    Undone {
        /// Block ID
        id: String,
    },
    /// List today's blocks in start order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: BlockAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut db = PlannerDb::open()?;
    let mut planner = DayPlanner::from_blocks(db.load_blocks()?);

    match action {
        BlockAction::Add {
            title,
            from,
            to,
            kind,
        } => {
            let timetable = common::load_timetable(&db)?;
            let range = TimeRange::new(WallClock::parse(&from)?, WallClock::parse(&to)?)?;
            let created =
                planner.submit_activity(&title, ActivityKind::parse(&kind), range, &timetable)?;
            db.replace_blocks(planner.blocks())?;

            if created.len() > 1 {
                println!("Added {} blocks (split at prayer boundaries):", created.len());
            } else {
                println!("Added 1 block:");
            }
            for block in &created {
                println!(
                    "  [{}] {} {}  {}",
                    block.period, block.range, block.title, block.id
                );
            }
        }
        BlockAction::Edit {
            id,
            title,
            from,
            to,
            kind,
        } => {
            let timetable = common::load_timetable(&db)?;
            let Some(current) = planner.get(&id).cloned() else {
                return Err(ScheduleError::UnknownBlock { id }.into());
            };
            let start = match from {
                Some(text) => WallClock::parse(&text)?,
                None => current.range.start(),
            };
            let end = match to {
                Some(text) => WallClock::parse(&text)?,
                None => current.range.end(),
            };
            let range = TimeRange::new(start, end)?;
            let title = title.unwrap_or(current.title);
            let kind = kind.map_or(current.kind, |k| ActivityKind::parse(&k));

            let updated = planner.edit_activity(&id, &title, kind, range, &timetable)?;
            db.replace_blocks(planner.blocks())?;
            println!(
                "Updated [{}] {} {}  {}",
                updated.period, updated.range, updated.title, updated.id
            );
        }
        BlockAction::Remove { id } => {
            // Removing an unknown id is a quiet no-op, like the registry.
            let known = planner.get(&id).is_some();
            planner.remove_block(&id);
            db.replace_blocks(planner.blocks())?;
            if known {
                println!("Removed {id}");
            } else {
                println!("No block with id {id}; nothing removed");
            }
        }
        BlockAction::Done { id } => mark(&mut planner, &mut db, &id, true)?,
        BlockAction::Undone { id } => mark(&mut planner, &mut db, &id, false)?,
        BlockAction::List { json } => {
            let blocks = planner.sorted_blocks();
            if json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            } else if blocks.is_empty() {
                println!("No blocks scheduled");
            } else {
                for block in &blocks {
                    let check = if block.done { "x" } else { " " };
                    let split = if block.split { " (split)" } else { "" };
                    println!(
                        "[{check}] {} {:<8} {} ({}){split}  {}",
                        block.range,
                        block.period.as_str(),
                        block.title,
                        block.kind.as_str(),
                        block.id
                    );
                }
            }
        }
    }

    Ok(())
}

fn mark(
    planner: &mut DayPlanner,
    db: &mut PlannerDb,
    id: &str,
    done: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let known = planner.get(id).is_some();
    planner.set_done(id, done);
    db.replace_blocks(planner.blocks())?;
    if known {
        println!("{} {id}", if done { "Done:" } else { "Not done:" });
    } else {
        println!("No block with id {id}; nothing changed");
    }
    Ok(())
}
