use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Result;

use jobcat::{JobCatalog, JobRow};

const DEFAULT_DATA_FILE: &str = "data/job_data.csv";

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
    let catalog = JobCatalog::new(path);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to jobcat!");

    loop {
        println!();
        println!("View jobs by:");
        println!("  1) list all");
        println!("  2) distinct values for a column");
        println!("  3) search one column");
        println!("  4) search all columns");
        println!("  q) quit");

        let Some(choice) = prompt(&mut lines, "> ")? else {
            break;
        };

        match choice.as_str() {
            "1" => print_jobs(&catalog.list_all()),
            "2" => {
                let Some(column) = choose_column(&catalog, &mut lines)? else {
                    break;
                };
                match catalog.distinct_values(&column) {
                    Ok(values) => {
                        for value in values {
                            println!("{value}");
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
            "3" => {
                let Some(column) = choose_column(&catalog, &mut lines)? else {
                    break;
                };
                let Some(query) = prompt(&mut lines, "Search term: ")? else {
                    break;
                };
                match catalog.search_column(&column, &query) {
                    Ok(rows) => print_jobs(&rows),
                    Err(err) => println!("{err}"),
                }
            }
            "4" => {
                let Some(query) = prompt(&mut lines, "Search term: ")? else {
                    break;
                };
                print_jobs(&catalog.search_all(&query));
            }
            "q" | "quit" | "exit" => break,
            other => println!("Unknown option: {other}"),
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line; `None` on end of input.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Let the user pick a column by number or name.
fn choose_column(
    catalog: &JobCatalog,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<String>> {
    let columns = catalog.columns().to_vec();
    for (i, col) in columns.iter().enumerate() {
        println!("  {}) {col}", i + 1);
    }

    let Some(answer) = prompt(lines, "Column: ")? else {
        return Ok(None);
    };

    // Accept a menu index, otherwise treat the input as a column name.
    if let Ok(n) = answer.parse::<usize>() {
        if let Some(col) = n.checked_sub(1).and_then(|i| columns.get(i)) {
            return Ok(Some(col.clone()));
        }
    }
    Ok(Some(answer))
}

fn print_jobs(rows: &[JobRow]) {
    if rows.is_empty() {
        println!("No results.");
        return;
    }
    for row in rows {
        println!("*****");
        print!("{row}");
        println!("*****");
    }
    println!("{} result(s)", rows.len());
}
