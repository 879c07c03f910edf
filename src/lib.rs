use std::io::{self, Write};

pub mod db;
pub mod error;
pub mod habits;
pub mod present;
#[cfg(test)]
mod test;

use chrono::Local;

use db::Store;
use error::HabitError;

/// print the habit list and loop until the user enters one of the
/// listed ids ('q' aborts back to main)
pub fn print_habits_get_choice(store : &Store)
    -> Result<i64, Box<dyn std::error::Error>>
{
    let habits = habits::list_habits(store)?;

    if habits.is_empty()
    {
        return Err("No habits yet, add one first".into());
    }

    let mut habit_ids : Vec<i64> = Vec::new();
    let mut idstr = String::new();
    let mut idint;

    present::print_lines(&present::render_habit_list(&habits));

    for habit in &habits
    {
        habit_ids.push(habit.id);
    }

    println!("Enter one of the listed habit IDs");
    println!("  'q' to go back to main");
    println!();
    print!("Your input: ");
    io::stdout().flush().unwrap();

    loop
    {
        // take user input
        idstr.clear(); // necessary, read_line() doesn't do this by itself!
        io::stdin().read_line(&mut idstr).expect("Failed to read line");

        // trim and quit if "q"
        idstr = idstr.trim().to_string();
        if idstr == "q" { return Err("Aborted".into()); }

        // parse to int, break if valid
        idint = idstr.as_str().parse().unwrap_or(-1);
        if habit_ids.contains(&idint) { break; }
    }

    Ok(idint)
}

/// prompt for a name and add a new habit
pub fn add(store : &Store) -> Result<(), Box<dyn std::error::Error>>
{
    print!("Enter habit name: ");
    io::stdout().flush().unwrap();

    let mut name = String::new();
    io::stdin().read_line(&mut name).expect("Failed to read line");
    let name = name.trim().to_string();

    match habits::add_habit(store, &name)
    {
        Ok(_) => { println!("Habit '{}' added.", name); }
        Err(HabitError::InvalidInput(msg)) => { println!("{}", msg); }
        Err(err) => { return Err(err.into()); }
    }

    Ok(())
}

/// mark a habit completed for today
pub fn mark(store : &Store) -> Result<(), Box<dyn std::error::Error>>
{
    let idint;

    match print_habits_get_choice(store)
    {
        Ok(value) => { idint = value },
        Err(err)  => { eprintln!("{}", err); return Ok(()); }
    }

    match habits::mark_completed(store, idint, None)
    {
        Ok(date) =>
        {
            println!("Habit marked as completed on {}.",
                     date.format("%Y-%m-%d"));
        }
        Err(HabitError::NotFound(_)) => { println!("Habit not found."); }
        Err(err) => { return Err(err.into()); }
    }

    Ok(())
}

/// show the current streak of a chosen habit
pub fn stats(store : &Store) -> Result<(), Box<dyn std::error::Error>>
{
    let idint;

    match print_habits_get_choice(store)
    {
        Ok(value) => { idint = value },
        Err(err)  => { eprintln!("{}", err); return Ok(()); }
    }

    match habits::streak(store, idint, Local::now().date_naive())
    {
        Ok(streak) => { println!("{}", present::render_streak(&streak)); }
        Err(HabitError::NotFound(_)) => { println!("Habit not found."); }
        Err(err) => { return Err(err.into()); }
    }

    Ok(())
}

/// list all habits
pub fn list(store : &Store) -> Result<(), Box<dyn std::error::Error>>
{
    let habits = habits::list_habits(store)?;
    present::print_lines(&present::render_habit_list(&habits));
    Ok(())
}

/// render the 31 day progress chart of a chosen habit
pub fn chart(store : &Store) -> Result<(), Box<dyn std::error::Error>>
{
    let idint;

    match print_habits_get_choice(store)
    {
        Ok(value) => { idint = value },
        Err(err)  => { eprintln!("{}", err); return Ok(()); }
    }

    match habits::progress_series(store, idint, Local::now().date_naive())
    {
        Ok(progress) =>
        {
            present::print_lines(&present::render_progress_chart(&progress));
        }
        Err(HabitError::NotFound(_)) => { println!("Habit not found."); }
        Err(err) => { return Err(err.into()); }
    }

    Ok(())
}

/// farewell printed on the explicit exit choice and on Ctrl+C
pub const FAREWELL : &str = "Goodbye.";

/// end of program routine; doubles as the Ctrl+C handler body
pub fn quit()
{
    println!("{}", FAREWELL);
    std::process::exit(0);
}
