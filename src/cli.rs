use clap::*;
use fundamentals::{
    checks::{fatal_error, not_implemented, CheckLevel, Checks},
    lessons::{self, StandardDevice},
    ops::arithmetic::{add, remainder},
    optional::{ImplicitlyUnwrapped, Optional},
};
use log::{error, info, LevelFilter};
use std::fmt;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Level {
    Debug,
    Release,
    Unchecked,
}

impl From<Level> for CheckLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Debug => CheckLevel::Debug,
            Level::Release => CheckLevel::Release,
            Level::Unchecked => CheckLevel::Unchecked,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// The ways to bring the program down on purpose.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum CrashKind {
    ForceUnwrap,
    ImplicitUnwrap,
    FatalError,
    NotImplemented,
    Precondition,
    Assertion,
    RemainderByZero,
    Overflow,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the lessons of the tour.
    List,
    /// Run the given lessons, or the whole tour if none are given.
    Tour {
        #[clap(value_parser)]
        lessons: Vec<String>,
    },
    /// Trigger a fatal error.
    Crash {
        #[clap(value_parser)]
        kind: CrashKind,
    },
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// The optimization level that decides which checks run.
    #[clap(short, long, value_parser, default_value = "debug")]
    checks: Level,

    /// The most verbose log messages to print.
    #[clap(short, long, value_parser, default_value = "warn")]
    log_level: LogLevel,

    #[clap(subcommand)]
    command: Command,
}

enum Error {
    Lesson(lessons::Error),
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Lesson(e) => write!(f, "Lesson error: {:?}", e),
        }
    }
}

impl From<lessons::Error> for Error {
    fn from(e: lessons::Error) -> Self {
        Self::Lesson(e)
    }
}

fn tour(names: &[String], checks: &Checks) -> Result<(), Error> {
    let mut device = StandardDevice;
    if names.is_empty() {
        lessons::run_all(&mut device, checks)?;
    } else {
        for name in names {
            lessons::run(name, &mut device, checks)?;
        }
    }
    Ok(())
}

fn crash(kind: CrashKind, checks: &Checks) {
    info!("Crashing with {kind:?} at the {} level", checks.level);
    match kind {
        CrashKind::ForceUnwrap => {
            let converted_number = Optional::<i64>::parse("hello, world");
            println!("{}", converted_number.force_unwrap());
        }
        CrashKind::ImplicitUnwrap => {
            let assumed_string: ImplicitlyUnwrapped<String> = ImplicitlyUnwrapped::absent();
            let implicit_string: &str = &assumed_string;
            println!("{implicit_string}");
        }
        CrashKind::FatalError => fatal_error("The number was invalid"),
        CrashKind::NotImplemented => not_implemented("crash"),
        CrashKind::Precondition => {
            let index = 0;
            checks.precondition(|| index > 0, || "Index must be greater than zero.");
        }
        CrashKind::Assertion => {
            let age = -3;
            checks.assert(|| age >= 0, || "A person's age can't be less than zero.");
        }
        CrashKind::RemainderByZero => println!("{}", remainder(9, 0)),
        CrashKind::Overflow => println!("{}", add(u8::MAX, 1)),
    }
}

fn run(args: Args) -> Result<(), Error> {
    let checks = Checks::new(args.checks.into());
    match args.command {
        Command::List => {
            for lesson in lessons::lessons() {
                println!("{:<12}{}", lesson.name, lesson.title);
            }
        }
        Command::Tour { lessons } => tour(&lessons, &checks)?,
        Command::Crash { kind } => crash(kind, &checks),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::builder()
        .filter_level(args.log_level.into())
        .init();

    if let Err(e) = run(args) {
        error!("{e:?}");
        std::process::exit(1);
    }
}
