use std::error;
use std::fs;
use std::io;
use std::io::Write;
use std::path;

use directories::ProjectDirs;

use habittracker::db::Store;

const VERSION: &str = "0.1.0"; // keep in synch w/ ver from Cargo.toml
const DB_NAME: &str = "habits.db";

fn main() -> Result<(), Box<dyn error::Error>>
{
    // retrieve OS specific configuration folder (eg `~/.config` for unix)
    // using directories module for OS specific configuration path
    let projdir = ProjectDirs::from("dev", "sintheta", "habittracker");

    let dcpath: path::PathBuf; // directory path
    let dbpath: path::PathBuf; // database file path

    println!();

    if let Some(d) = projdir
    {
        dcpath = d.config_dir().to_path_buf();
        dbpath = dcpath.join(DB_NAME);
    }
    else
    {
        panic!("Could not retrieve OS specific configuration folder!");
    }

    if !dcpath.exists()
    {
        println!("folder  doesn't exist, creating: {:?}", dcpath);
        fs::create_dir_all(&dcpath)?;
    }
    if !dbpath.exists()
    {
        println!("db file doesn't exist, creating: {:?}", dbpath);
        // creation below via Store::init (creates if it doesn't exist)
    }

    println!("Habit tracker");
    println!("Version : {}", VERSION);
    println!("Database used: {:?}", dbpath);

    // the store is handed its file path once; every operation opens
    // and drops its own connection
    let store = Store::new(&dbpath);

    store.init()?;  // idempotent, safe on every startup
    store.check()?; // tables must match their creation queries

    // Ctrl+C should say goodbye like the exit choice does;
    // the handler runs on its own thread and ends the process
    ctrlc::set_handler(|| {
        println!();
        habittracker::quit();
    })?;

    loop
    {
        println!();
        println!("-----------------");
        println!("--- Main Menu --- ");
        println!("-----------------");
        println!("Available options");
        println!();
        println!("  1) add habit");
        println!("  2) mark completion");
        println!("  3) show streak");
        println!("  4) list habits");
        println!("  5) show progress chart");
        println!("  6) exit");
        println!();
        print!("Your option: ");
        io::stdout().flush().unwrap();

        let mut option = String::new();
        io::stdin().read_line(&mut option).expect("Failed to read line");
        option = option.trim().to_string();

        println!();

        match option.as_str() {
            "1" => habittracker::add(&store)?,
            "2" => habittracker::mark(&store)?,
            "3" => habittracker::stats(&store)?,
            "4" => habittracker::list(&store)?,
            "5" => habittracker::chart(&store)?,
            "6" => habittracker::quit(),
            _ => println!("Invalid choice, try again."),
        }
    }
}
