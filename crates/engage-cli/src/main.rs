//! Engagement Report CLI
//!
//! Command-line tool for compiling MediaSpace user-engagement exports into
//! attendance/gradebook reports.
//!
//! Expected layout: a base directory containing `classlist.txt` and one
//! subdirectory per assignment, each holding the MediaSpace `.csv` exports
//! downloaded for that assignment.

use clap::{Parser, Subcommand};
use engage_core::{
    discover_assignments, join_roster, list_exports, parse_assignment, parse_export, parse_roster,
    write_gradebook_csv, Roster,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "engage-cli")]
#[command(about = "MediaSpace engagement to gradebook reporter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build gradebook reports for one or more assignments
    Report {
        /// Base directory containing the class list and assignment directories
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Class list file name, relative to the base directory
        #[arg(short, long, default_value = "classlist.txt")]
        classlist: PathBuf,

        /// Output format (csv or json)
        #[arg(long, default_value = "csv")]
        format: String,

        /// Directory for the generated report files (defaults to the base directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Assignments to process (default: every subdirectory of the base)
        assignment: Vec<String>,
    },

    /// Parse and display the class list
    Roster {
        /// Class list file
        #[arg(short, long, default_value = "classlist.txt")]
        classlist: PathBuf,
    },

    /// Parse and display a single engagement export
    Parse {
        /// Path to the export .csv file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List the assignments found in a base directory
    Scan {
        /// Base directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> engage_core::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            dir,
            classlist,
            format,
            output_dir,
            assignment,
        } => cmd_report(&dir, &classlist, &format, output_dir.as_deref(), &assignment),
        Commands::Roster { classlist } => cmd_roster(&classlist),
        Commands::Parse { file } => cmd_parse(&file),
        Commands::Scan { dir } => cmd_scan(&dir),
    }
}

fn cmd_report(
    base: &Path,
    classlist: &Path,
    format: &str,
    output_dir: Option<&Path>,
    assignments: &[String],
) -> engage_core::Result<()> {
    let roster = load_roster(&base.join(classlist))?;
    let output_dir = output_dir.unwrap_or(base);

    let assignments: Vec<String> = if assignments.is_empty() {
        discover_assignments(base)?
    } else {
        assignments.to_vec()
    };

    if assignments.is_empty() {
        println!("No assignment directories found in {}", base.display());
        return Ok(());
    }

    for assignment in &assignments {
        let videos = parse_assignment(base.join(assignment))?;
        let report = join_roster(assignment, &roster, &videos);

        for orphan in &report.orphans {
            eprintln!("Warning: {}", orphan);
        }

        let output = match format.to_lowercase().as_str() {
            "csv" => {
                let path = output_dir.join(format!("gradelist-{}.csv", assignment));
                let writer = BufWriter::new(File::create(&path)?);
                write_gradebook_csv(&report, writer)?;
                path
            }
            "json" => {
                let path = output_dir.join(format!("gradelist-{}.json", assignment));
                let writer = BufWriter::new(File::create(&path)?);
                serde_json::to_writer_pretty(writer, &report)?;
                path
            }
            _ => {
                eprintln!("Unknown format: {}. Supported formats: csv, json", format);
                std::process::exit(1);
            }
        };

        println!(
            "{}: {} videos, {} rows ({} graded) -> {}",
            assignment,
            videos.len(),
            report.rows.len(),
            report.graded_count(),
            output.display()
        );
    }

    Ok(())
}

fn cmd_roster(classlist: &Path) -> engage_core::Result<()> {
    let roster = load_roster(classlist)?;

    println!("Students ({}):", roster.len());
    for student in &roster.students {
        println!("  {}\t{}\t{}", student.star_id, student.tech_id, student.name);
    }

    Ok(())
}

fn cmd_parse(file: &Path) -> engage_core::Result<()> {
    let stats = parse_export(file)?;

    println!("File: {}", file.display());
    println!("Video: {}", stats.name);
    println!("Length: {} s", stats.length);
    println!("Completion rows: {}", stats.student_stats.len());

    Ok(())
}

fn cmd_scan(base: &Path) -> engage_core::Result<()> {
    let assignments = discover_assignments(base)?;

    println!("Assignments ({}):", assignments.len());
    for assignment in &assignments {
        let exports = list_exports(base.join(assignment))?;
        println!("  {} ({} exports)", assignment, exports.len());
    }

    Ok(())
}

/// Load the roster and surface its advisory warnings on stderr
fn load_roster(path: &Path) -> engage_core::Result<Roster> {
    let roster = parse_roster(path)?;
    for warning in &roster.warnings {
        eprintln!("Warning: {}", warning);
    }
    Ok(roster)
}
