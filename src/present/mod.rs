//! formats service results as text; renderers return lines so they can
//! be tested, callers print them

use crate::db::HabitRow;
use crate::habits::{Progress, Streak};

const RULE : &str =
    "---------------------------------------------------------------";

// bar drawn for a completed day in the progress chart
const BAR : &str = "##########";

pub fn render_streak(streak : &Streak) -> String
{
    format!("Habit: {}, current streak: {} days", streak.name, streak.days)
}

pub fn render_habit_list(habits : &[HabitRow]) -> Vec<String>
{
    if habits.is_empty()
    {
        return vec!["No habits yet.".to_string()];
    }

    let mut lines = Vec::new();

    lines.push(RULE.to_string());
    lines.push("ID\tName".to_string());

    for habit in habits
    {
        lines.push(format!("{}\t{}", habit.id, habit.name));
    }

    lines.push(RULE.to_string());

    lines
}

/// text step chart of the 31 day series; one row per day (the date
/// axis runs downward, so dates stay readable), a full bar for a
/// completed day, an empty cell for a missed one
pub fn render_progress_chart(progress : &Progress) -> Vec<String>
{
    let mut lines = Vec::new();

    lines.push(RULE.to_string());
    lines.push(format!("Progress: {}  (last {} days)",
                       progress.name, progress.points.len()));
    lines.push(RULE.to_string());

    for point in &progress.points
    {
        let bar = if point.completed { BAR } else { "" };
        lines.push(format!("{} {} |{}",
                           point.date.format("%Y-%m-%d"),
                           point.date.format("%a"),
                           bar));
    }

    lines.push(RULE.to_string());

    let done = progress.points.iter().filter(|p| p.completed).count();
    lines.push(format!("completed {} of {} days",
                       done, progress.points.len()));

    lines
}

pub fn print_lines(lines : &[String])
{
    for line in lines
    {
        println!("{}", line);
    }
}
