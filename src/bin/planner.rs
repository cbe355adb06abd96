//! Interactive course planner: loads a comma-delimited catalog and answers
//! menu-driven queries against the chained hash table. All prompting, key
//! normalization, and rendering lives here; the table only stores and looks
//! up courses.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use course_planner::{load_courses, ChainedHashTable, Course};

#[derive(Debug, Parser)]
#[command(name = "planner", version, about = "Course catalog planner")]
struct Args {
    /// Catalog file to load before the menu starts.
    catalog: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut table = ChainedHashTable::new();
    if let Some(path) = &args.catalog {
        let loaded = load_courses(path, &mut table)?;
        println!("Loaded {loaded} courses from {}.", path.display());
    }

    println!("Welcome to the course planner.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "What would you like to do? ")? else {
            break;
        };
        match choice.trim() {
            "1" => {
                let Some(path) = prompt(&mut lines, "Enter name of catalog file to load: ")?
                else {
                    break;
                };
                match load_courses(path.trim(), &mut table) {
                    Ok(loaded) => println!("Loaded {loaded} courses."),
                    Err(err) => eprintln!("{err}"),
                }
            }
            "2" => print_course_list(&table),
            "3" => {
                let Some(input) = prompt(&mut lines, "What course do you want to know about? ")?
                else {
                    break;
                };
                // Ids are stored upper-case; fold the typed key to match.
                let key = input.trim().to_uppercase();
                match table.search(&key) {
                    Some(course) => display_course(course),
                    None => println!("Course ID {key} not found."),
                }
            }
            "9" => {
                println!("Thank you for using the course planner!");
                break;
            }
            other => println!("{other} is not a valid option."),
        }
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!("  1. Load Data Structure.");
    println!("  2. Print Course List.");
    println!("  3. Print Course.");
    println!("  9. Exit");
    println!();
}

/// Prints a prompt and reads one line; `None` means stdin hit EOF.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> anyhow::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn print_course_list(table: &ChainedHashTable) {
    println!("Here is a sample schedule:");
    println!();
    for course in table.all_sorted() {
        println!(" {}, {}", course.course_id, course.title);
    }
}

fn display_course(course: &Course) {
    println!(" {}, {}", course.course_id, course.title);
    if course.prerequisites.is_empty() {
        println!(" Prerequisites: none");
    } else {
        println!(" Prerequisites: {}", course.prerequisites.join(", "));
    }
}
