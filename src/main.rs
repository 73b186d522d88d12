//! Missing Persons Mapper CLI
//!
//! Command-line tool that collects missing-person geolocation records and
//! saves them as markers on an interactive HTML map.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --input records.csv
//! cargo run -- --output-dir maps --counter-file state/counter.txt
//! ```
//!
//! Without `--input`, records are collected interactively: the tool prompts
//! for name, latitude, longitude, postal code, place, and country until `q`
//! is entered as the name. With `--input`, records are imported from a CSV
//! file instead.
//!
//! If at least one record was collected, the map is saved as
//! `missing_persons_map_<N>.html` and the persisted run counter is advanced
//! so the next run picks a fresh filename.
//!
//! # Exit Codes
//!
//! - 0: Success (including a session that collected no records)
//! - 1: Error (input file not found, output not writable, etc.)

use missing_persons_mapper::cli;
use missing_persons_mapper::core::{emit, RunCounter, Session};
use missing_persons_mapper::source::create_source;
use std::io;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Session state is constructed here and threaded through the run
    // explicitly; nothing is process-global.
    let mut session = Session::new();
    let mut counter = RunCounter::load(&args.counter_file);

    // Collect records from the selected source (interactive or CSV)
    let mut source = create_source(&args);
    if let Err(e) = source.collect(&mut session) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Render and save the map, advancing the counter on success
    if let Err(e) = emit(&session, &mut counter, &args.output_dir, &mut io::stdout()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
