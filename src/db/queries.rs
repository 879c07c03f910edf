pub const SQL_TABLEN_HAB : &str = "habits";
// CAREFUL: completions table references habits table BY NAME!
// PRIMARY KEY implies NOT NULL and UNIQUE
pub const SQL_CREATE_HAB : &str =
"CREATE TABLE IF NOT EXISTS habits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    created_at DATE NOT NULL
    )";

pub const SQL_TABLEN_COM : &str = "completions";
// no uniqueness on (habit_id, date); duplicate marks on one day are
// allowed and deduplicated at computation time
pub const SQL_CREATE_COM : &str =
"CREATE TABLE IF NOT EXISTS completions (
    habit_id INTEGER,
    date DATE,
    FOREIGN KEY (habit_id) REFERENCES habits(id)
    )";
