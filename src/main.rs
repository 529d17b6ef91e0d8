//! Command-line driver.
//!
//! Argument-free by design: the tool processes every subdirectory of the
//! directory it is invoked from and always finishes the whole batch, so it
//! can sit next to a pile of exported deck folders and just be run.

use loquat::Error;
use loquat::batch::{self, DirOutcome};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("cannot determine working directory: {}", e);
            return;
        },
    };

    let outcomes = batch::process_root(&root);

    println!("{}", "=".repeat(60));
    for outcome in &outcomes {
        report(outcome);
    }
    println!("\n{}", "=".repeat(60));
    let processed = outcomes.iter().filter(|o| o.result.is_ok()).count();
    println!("{} of {} directories processed", processed, outcomes.len());
}

fn report(outcome: &DirOutcome) {
    let dir_name = outcome
        .dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| outcome.dir.display().to_string());

    match &outcome.result {
        Ok(report) => {
            println!("\n{}", dir_name);
            if report.sections.is_empty() {
                println!("  no sections declared");
            }
            for (i, (section, stat)) in report.sections.iter().zip(&report.stats).enumerate() {
                println!("  {}. {}: slides {:?}", i + 1, section.name, section.ppt_index);
                if !stat.missing.is_empty() {
                    println!("     missing images for slides {:?}", stat.missing);
                }
            }
        },
        Err(Error::MissingInput(msg)) => println!("\n{}: skipped ({})", dir_name, msg),
        Err(err) => println!("\n{}: failed ({})", dir_name, err),
    }
}
