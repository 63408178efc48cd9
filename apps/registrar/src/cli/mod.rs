//! # CLI Module
//!
//! Command definitions and command handlers for the Registrar binary.
//!
//! Two commands exist: `demo` walks through a canned university setup
//! end to end, and `run` executes a JSON script (catalog, people, and
//! a sequence of enrollment/grade actions) against a fresh in-memory
//! [`University`]. Neither persists anything.

mod script;

pub use script::{
    Action, ActionOutcome, CourseSpec, PersonSpec, Script, ScriptRun, StudentReport,
};

use clap::{Parser, Subcommand};
use registrar_core::{
    Course, CourseCode, Department, Enrollment, Person, PersonId, RegistrarError, Role, University,
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by the command layer.
#[derive(Debug, Error)]
pub enum CliError {
    /// The script file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The offending path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The script file is not valid JSON for the expected shape.
    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    /// An engine error escaped a command that did not expect one.
    #[error(transparent)]
    Registrar(#[from] RegistrarError),
}

/// Registrar - an in-memory academic records engine.
#[derive(Debug, Parser)]
#[command(name = "registrar", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk through a canned university setup end to end
    Demo,
    /// Execute a JSON script against a fresh in-memory university
    Run {
        /// Path to the script file
        script: PathBuf,
        /// Emit final student reports as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Demo => cmd_demo(),
        Command::Run { script, json } => cmd_run(script, *json),
    }
}

// =============================================================================
// DEMO COMMAND
// =============================================================================

/// Build the demo university: one department, three chained courses,
/// faculty, staff, and a single student.
#[must_use]
pub fn demo_university() -> University {
    let mut uni = University::new("Demo University");
    uni.add_department(Department::new("Computer Science"));

    uni.add_course(
        Course::new("CS101", "Intro to Programming", 3, 100),
        Some("Computer Science"),
    );
    uni.add_course(
        Course::new("CS201", "Data Visualization", 3, 50).with_prerequisites(["CS101"]),
        Some("Computer Science"),
    );
    uni.add_course(
        Course::new("CS301", "Machine Learning", 3, 30).with_prerequisites(["CS201"]),
        Some("Computer Science"),
    );

    let people = [
        Person::new(
            "Milena Fernandz",
            PersonId(101),
            "milena@uni.edu",
            Role::Professor {
                department: String::from("Computer Science"),
            },
        ),
        Person::new(
            "Shamaan Chamaal",
            PersonId(102),
            "shamaanc@uni.edu",
            Role::Lecturer {
                department: String::from("Computer Science"),
            },
        ),
        Person::new(
            "Adam Zampa",
            PersonId(103),
            "adamz@uni.edu",
            Role::TeachingAssistant {
                department: String::from("Computer Science"),
            },
        ),
        Person::new(
            "Hendrick Nicoly",
            PersonId(201),
            "hendrickn@uni.edu",
            Role::Staff {
                job_title: String::from("Admissions Officer"),
            },
        ),
        Person::new(
            "Nawanjana Madhushankha",
            PersonId(301),
            "nawanjanam@uni.edu",
            Role::Student {
                major: String::from("Computer Science"),
            },
        ),
    ];
    for person in people {
        uni.add_person(person);
    }
    uni
}

/// Run the guided walkthrough.
pub fn cmd_demo() -> Result<(), CliError> {
    let mut uni = demo_university();
    tracing::info!(
        courses = uni.course_count(),
        students = uni.student_count(),
        "demo university ready"
    );

    println!("--- Directory ---");
    for person in uni.people() {
        println!("{}", person.info_line());
        println!("  {}: {}", person.role().title(), person.role().responsibilities());
        if let Some(workload) = person.role().workload() {
            println!("  Workload: {workload}");
        }
    }

    let student = PersonId(301);
    let cs101 = CourseCode::new("CS101");
    let cs201 = CourseCode::new("CS201");
    let cs301 = CourseCode::new("CS301");

    println!("\n--- Enrollment ---");
    // CS301 requires CS201; nothing is completed yet.
    match uni.enroll(student, &cs301) {
        Err(err) => println!("CS301 refused: {err}"),
        Ok(_) => println!("CS301 accepted unexpectedly"),
    }

    uni.record_grade(student, cs101, 3.8)?;
    println!("completed CS101 with 3.80");

    report_enrollment(uni.enroll(student, &cs201)?, &cs201);
    uni.record_grade(student, cs201, 4.0)?;
    println!("completed CS201 with 4.00");

    report_enrollment(uni.enroll(student, &cs301)?, &cs301);
    uni.drop_course(student, &cs301)?;
    println!("dropped {cs301}");

    println!("\n{}", uni.summary(student)?);
    Ok(())
}

fn report_enrollment(outcome: Enrollment, course: &CourseCode) {
    match outcome {
        Enrollment::Enrolled => println!("enrolled in {course}"),
        Enrollment::AlreadyEnrolled => println!("already enrolled in {course}"),
    }
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Read and parse a script file.
pub fn load_script(path: &Path) -> Result<Script, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Execute a script file and print per-action results plus the final
/// student reports (plain text, or JSON with `json`).
pub fn cmd_run(path: &Path, json: bool) -> Result<(), CliError> {
    let script = load_script(path)?;
    tracing::info!(
        courses = script.courses.len(),
        people = script.people.len(),
        actions = script.actions.len(),
        "script loaded"
    );

    let run = script.execute();
    for outcome in &run.outcomes {
        match &outcome.result {
            Ok(message) => println!("ok: {}: {message}", outcome.description),
            Err(err) => println!("failed: {}: {err}", outcome.description),
        }
    }

    if json {
        let reports: Vec<StudentReport> = run
            .university
            .records()
            .map(StudentReport::from_record)
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for record in run.university.records() {
            println!("\n{}", record.academic_summary());
        }
    }
    Ok(())
}
