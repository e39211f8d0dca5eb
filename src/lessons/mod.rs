//! # The Lessons Module
//!
//! This module contains the tour of the language's fundamentals. Each lesson
//! walks through one chapter, and writes the results the chapter talks about
//! (`// Prints ...`, `// equals ...`) to a `Device`.
//!
//! The `Device` object acts as the lesson's window to the world. The command
//! line tool uses a `StandardDevice`, which writes to standard output. For
//! testing the lessons, we use a `TestingDevice` object to capture the output
//! and check it against the expected output.
use crate::checks::Checks;
use lazy_static::lazy_static;
use log::debug;
use maplit::btreemap;
use std::{
    collections::BTreeMap,
    fmt,
    io::{stdout, Write},
};

mod basics;
mod operators;

/// An error returned while running the tour.
#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// No lesson has the given name.
    UnknownLesson(String),
    /// The device could not write the lesson's output.
    Device(String),
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownLesson(name) => write!(
                f,
                "Unknown lesson `{name}`, expected one of: {}",
                lesson_names().join(", ")
            ),
            Error::Device(e) => write!(f, "Device error: {e}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Device(e.to_string())
    }
}

/// Where a lesson writes its output.
pub trait Device {
    /// Write the given text to the device.
    fn put_str(&mut self, text: &str) -> Result<(), Error>;

    /// Write the given text, followed by a newline.
    fn put_line(&mut self, text: &str) -> Result<(), Error> {
        self.put_str(text)?;
        self.put_str("\n")
    }
}

/// A device which writes to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDevice;

impl Device for StandardDevice {
    fn put_str(&mut self, text: &str) -> Result<(), Error> {
        let mut out = stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// A device used for testing the lessons. This simply keeps an output
/// buffer to keep track of what the lessons wrote.
#[derive(Debug, Default, Clone)]
pub struct TestingDevice {
    pub output: String,
}

impl TestingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the output of the testing device as a string.
    pub fn output_str(&self) -> &str {
        &self.output
    }

    /// Get the output of the testing device, one entry per line.
    pub fn output_lines(&self) -> Vec<&str> {
        self.output.lines().collect()
    }
}

impl Device for TestingDevice {
    fn put_str(&mut self, text: &str) -> Result<(), Error> {
        self.output.push_str(text);
        Ok(())
    }
}

/// The body of a lesson.
pub type LessonFn = fn(&mut dyn Device, &Checks) -> Result<(), Error>;

/// One chapter of the tour.
#[derive(Clone, Copy)]
pub struct Lesson {
    pub name: &'static str,
    pub title: &'static str,
    /// Where the lesson comes in the tour.
    pub order: usize,
    pub run: LessonFn,
}

impl fmt::Debug for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Lesson({}: {})", self.name, self.title)
    }
}

lazy_static! {
    static ref LESSONS: BTreeMap<&'static str, Lesson> = btreemap! {
        "constants" => Lesson {
            name: "constants",
            title: "Constants and Variables",
            order: 0,
            run: basics::constants,
        },
        "booleans" => Lesson {
            name: "booleans",
            title: "Booleans",
            order: 1,
            run: basics::booleans,
        },
        "assignment" => Lesson {
            name: "assignment",
            title: "Assignment Operator",
            order: 2,
            run: operators::assignment,
        },
        "arithmetic" => Lesson {
            name: "arithmetic",
            title: "Arithmetic Operators",
            order: 3,
            run: operators::arithmetic,
        },
        "comparison" => Lesson {
            name: "comparison",
            title: "Comparison Operators",
            order: 4,
            run: operators::comparison,
        },
        "optionals" => Lesson {
            name: "optionals",
            title: "Optionals",
            order: 5,
            run: basics::optionals,
        },
        "assertions" => Lesson {
            name: "assertions",
            title: "Assertions and Preconditions",
            order: 6,
            run: basics::assertions,
        },
    };
}

/// Every lesson, in the order of the tour.
pub fn lessons() -> Vec<&'static Lesson> {
    let mut lessons: Vec<_> = LESSONS.values().collect();
    lessons.sort_by_key(|lesson| lesson.order);
    lessons
}

/// The names of every lesson, in the order of the tour.
pub fn lesson_names() -> Vec<&'static str> {
    lessons().into_iter().map(|lesson| lesson.name).collect()
}

/// Look up a lesson by name.
pub fn lesson(name: &str) -> Result<&'static Lesson, Error> {
    LESSONS
        .get(name)
        .ok_or_else(|| Error::UnknownLesson(name.to_string()))
}

/// Run a single lesson on the given device.
pub fn run(name: &str, device: &mut dyn Device, checks: &Checks) -> Result<(), Error> {
    let lesson = lesson(name)?;
    debug!("Running lesson `{}` with {} checks", lesson.name, checks.level);
    (lesson.run)(device, checks)
}

/// Run the whole tour on the given device, with a heading before each lesson.
pub fn run_all(device: &mut dyn Device, checks: &Checks) -> Result<(), Error> {
    for (i, lesson) in lessons().into_iter().enumerate() {
        if i > 0 {
            device.put_line("")?;
        }
        device.put_line(&format!("## {}", lesson.title))?;
        run(lesson.name, device, checks)?;
    }
    Ok(())
}
