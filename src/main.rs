use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;
use std::time::Instant;

use log::{error, info};
use school_search::{
    DirectorySummary, Error, SchoolIndex, SchoolRecordLoader, SearchSession,
    CITY_COLUMN, DEFAULT_RESULT_LIMIT, SCHOOL_NAME_COLUMN, STATE_COLUMN,
};

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut data_path: Option<String> = None;
    let mut summary_mode = false;
    let mut result_limit = DEFAULT_RESULT_LIMIT;

    let mut arg_iter = args.iter().skip(1);
    while let Some(arg) = arg_iter.next() {
        match arg.as_str() {
            "--summary" => summary_mode = true,
            "--limit" => {
                result_limit = match arg_iter.next().map(|value| value.parse::<usize>()) {
                    Some(Ok(limit)) => limit,
                    _ => {
                        error!("--limit expects a non-negative integer");
                        process::exit(1);
                    }
                };
            }
            path if data_path.is_none() => data_path = Some(path.to_string()),
            unexpected => {
                error!("Unexpected argument: {}", unexpected);
                process::exit(1);
            }
        }
    }

    let data_path = match data_path {
        Some(path) => path,
        None => {
            eprintln!("Usage: school-search-cli <school_data.csv> [--summary] [--limit N]");
            process::exit(1);
        }
    };

    let records = match SchoolRecordLoader::read_records_from_path(Path::new(&data_path)) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to load {}: {}", data_path, e);
            process::exit(1);
        }
    };

    if summary_mode {
        if let Err(e) = print_summary(&records) {
            error!("Failed to summarize {}: {}", data_path, e);
            process::exit(1);
        }
        return;
    }

    let index_started = Instant::now();
    let index = match SchoolIndex::build(records) {
        Ok(index) => index,
        Err(e) => {
            error!("Failed to index {}: {}", data_path, e);
            process::exit(1);
        }
    };
    info!(
        "Indexed {} schools in {:?}",
        index.len(),
        index_started.elapsed()
    );

    let session = SearchSession::new(index);
    run_query_loop(&session, result_limit);
}

/// Reads queries from stdin until EOF or an exit command, printing ranked
/// matches with scores and per-query elapsed time.
fn run_query_loop(session: &SearchSession, result_limit: usize) {
    let stdin = io::stdin();

    loop {
        print!("search> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        let query = line.trim();
        if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
            return;
        }

        let query_started = Instant::now();
        let results = session.search(query, result_limit);
        let elapsed = query_started.elapsed();

        let mut printed = 0;
        for (rank, result) in results.iter().enumerate() {
            // A zero score means no signal matched at all; everything after
            // it in descending order is equally meaningless.
            if result.score == 0.0 {
                break;
            }

            let record = session.record(result);
            println!(
                "{}. {}\n   {}, {} (score: {:.3})",
                rank + 1,
                record.get(SCHOOL_NAME_COLUMN).map_or("", String::as_str),
                record.get(CITY_COLUMN).map_or("", String::as_str),
                record.get(STATE_COLUMN).map_or("", String::as_str),
                result.score
            );
            printed += 1;
        }

        if printed == 0 {
            println!("No matching schools found.");
        }

        println!("Search took {:?}.", elapsed);
    }
}

fn print_summary(records: &[school_search::SchoolRecord]) -> Result<(), Error> {
    let summary = DirectorySummary::from_records(records)?;

    println!("Total schools: {}", summary.total_schools);

    let mut per_state: Vec<_> = summary.schools_per_state.iter().collect();
    per_state.sort();
    println!("\nSchools by state:");
    for (state, count) in per_state {
        println!("  {}: {}", state, count);
    }

    let mut per_locale: Vec<_> = summary.schools_per_locale.iter().collect();
    per_locale.sort();
    println!("\nSchools by metro-centric locale:");
    for (locale, count) in per_locale {
        println!("  {}: {}", locale, count);
    }

    println!("\nDistinct cities: {}", summary.distinct_city_count());
    if let Some((city, count)) = summary.city_with_most_schools() {
        println!("City with the most schools: {} ({})", city, count);
    }

    Ok(())
}
