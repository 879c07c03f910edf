// module with logic shared across the crate's tests;
// the store opens a connection per operation, so tests get a real db
// file inside a tempdir instead of an in-memory connection
// as it is now:
//  a) good place for shared test logic
//  b) makes sure tests operate on same db layout
//  (every test gets its own tempdir, removed when the guard drops)

/*
 * WARNING; BE AWARE
 * the TempDir guard must stay alive for the test's duration,
 * dropping it deletes the db file under the store
 */

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::db::Store;

const TEST_DB_NAME : &str = "habits-test.db";

pub fn store_path(dir : &TempDir) -> PathBuf
{
    dir.path().join(TEST_DB_NAME)
}

/// fresh initialized store backed by its own tempdir;
/// keep the returned TempDir bound, it owns the db file
pub fn temp_store() -> (TempDir, Store)
{
    let dir = TempDir::new()
        .unwrap_or_else(|_| panic!("Can't create tempdir for test db"));

    let store = Store::new(store_path(&dir));
    store.init()
        .unwrap_or_else(|_| panic!("Can't create tables on test db"));

    (dir, store)
}

pub fn populate_w_habits(store : &Store) -> ()
{
    let names = ["A", "B", "C", "D"];
    let date  = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    // exact date of no particular significance

    for name in names
    {
        store.create_habit(name, date)
            .unwrap_or_else(|_| panic!("Couldn't insert test habits"));
    }
}

pub fn complete_on(store : &Store, habit_id : i64, dates : &[NaiveDate]) -> ()
{
    for date in dates
    {
        store.insert_completion(habit_id, *date)
            .unwrap_or_else(|_| panic!("Couldn't insert test completions"));
    }
}
