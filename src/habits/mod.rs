//! habit business operations; stateless request/response computations
//! against the store; date-sensitive functions take `today` as a
//! parameter so tests aren't tied to the wall clock

use std::collections::HashSet;

use chrono::{Duration, Local, NaiveDate};

use crate::db::{HabitRow, Store};
use crate::error::HabitError;

/// window width of the progress series: today-30 through today
pub const PROGRESS_DAYS: i64 = 30;

/// current consecutive-day run of a habit, ending today
#[derive(Debug, Clone)]
pub struct Streak {
    pub name: String,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPoint {
    pub date: NaiveDate,
    pub completed: bool,
}

/// fixed 31 point completion series for charting
#[derive(Debug, Clone)]
pub struct Progress {
    pub name: String,
    pub points: Vec<DayPoint>,
}

/// add a new habit; rejects empty/whitespace-only names;
/// created_at is the current local calendar date
pub fn add_habit(store: &Store, name: &str) -> Result<i64, HabitError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(HabitError::InvalidInput(
            "habit name must not be empty".to_string(),
        ));
    }

    store.create_habit(name, Local::now().date_naive())
}

/// mark a habit completed on `date` (today when omitted);
/// returns the effective date; duplicate marks on one day are allowed
pub fn mark_completed(
    store: &Store,
    habit_id: i64,
    date: Option<NaiveDate>,
) -> Result<NaiveDate, HabitError> {
    // verify the habit exists so the user gets NotFound rather
    // than a constraint error
    if store.habit_name(habit_id)?.is_none() {
        return Err(HabitError::NotFound(habit_id));
    }

    let date = date.unwrap_or_else(|| Local::now().date_naive());
    store.insert_completion(habit_id, date)?;

    Ok(date)
}

/// current streak of a habit as of `today`;
/// walks backward from today while each day has a completion;
/// 0 when today itself has none, regardless of earlier runs
pub fn streak(
    store: &Store,
    habit_id: i64,
    today: NaiveDate,
) -> Result<Streak, HabitError> {
    let name = store
        .habit_name(habit_id)?
        .ok_or(HabitError::NotFound(habit_id))?;

    // dedup; several marks on one date count as one
    let completed: HashSet<NaiveDate> =
        store.completion_dates(habit_id)?.into_iter().collect();

    let mut days = 0;
    let mut current = today;

    while completed.contains(&current) {
        days += 1;
        match current.pred_opt() {
            Some(prev) => current = prev,
            None => break, // calendar boundary
        }
    }

    Ok(Streak { name, days })
}

pub fn list_habits(store: &Store) -> Result<Vec<HabitRow>, HabitError> {
    store.list_habits()
}

/// completion series over [today-30, today], ascending, exactly 31
/// points, one per calendar day
pub fn progress_series(
    store: &Store,
    habit_id: i64,
    today: NaiveDate,
) -> Result<Progress, HabitError> {
    let name = store
        .habit_name(habit_id)?
        .ok_or(HabitError::NotFound(habit_id))?;

    let from = today - Duration::days(PROGRESS_DAYS);

    let completed: HashSet<NaiveDate> = store
        .completion_dates_since(habit_id, from)?
        .into_iter()
        .collect();

    let mut points = Vec::with_capacity(PROGRESS_DAYS as usize + 1);
    for offset in 0..=PROGRESS_DAYS {
        let date = from + Duration::days(offset);
        points.push(DayPoint {
            date,
            completed: completed.contains(&date),
        });
    }

    Ok(Progress { name, points })
}
