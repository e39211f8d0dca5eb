use fundamentals::{
    checks::{CheckLevel, Checks},
    lessons::{self, Error, TestingDevice},
};

fn run_lesson(name: &str, level: CheckLevel) -> String {
    let mut device = TestingDevice::new();
    lessons::run(name, &mut device, &Checks::new(level)).unwrap();
    device.output_str().to_string()
}

#[test]
fn test_lesson_names() {
    assert_eq!(
        lessons::lesson_names(),
        vec![
            "constants",
            "booleans",
            "assignment",
            "arithmetic",
            "comparison",
            "optionals",
            "assertions"
        ]
    );
    assert_eq!(lessons::lesson("optionals").unwrap().title, "Optionals");
}

#[test]
fn test_unknown_lesson() {
    let mut device = TestingDevice::new();
    let result = lessons::run("closures", &mut device, &Checks::default());
    assert_eq!(result, Err(Error::UnknownLesson("closures".to_string())));
    assert!(device.output_str().is_empty());
    assert!(format!("{}", result.unwrap_err()).contains("constants, booleans"));
}

#[test]
fn test_constants() {
    assert_eq!(
        run_lesson("constants", CheckLevel::Debug),
        "Bonjour!\n\
         The current value of friendly_welcome is Bonjour!\n\
         🐱\n"
    );
}

#[test]
fn test_booleans() {
    assert_eq!(
        run_lesson("booleans", CheckLevel::Debug),
        "Eww, turnips are horrible.\n"
    );
}

#[test]
fn test_assignment() {
    assert_eq!(
        run_lesson("assignment", CheckLevel::Debug),
        "a is now 10\n\
         x is 1, y is 2\n"
    );
}

#[test]
fn test_arithmetic() {
    assert_eq!(
        run_lesson("arithmetic", CheckLevel::Debug),
        "1 + 2 = 3\n\
         5 - 3 = 2\n\
         2 * 3 = 6\n\
         10.0 / 2.5 = 4.0\n\
         \"hello, \" + \"world\" = \"hello, world\"\n\
         u8::MAX &+ 1 = 0\n\
         9 % 4 = 1\n\
         -9 % 4 = -1\n\
         9 % -4 = 1\n\
         minus_three = -3, plus_three = 3\n\
         also_minus_six = -6\n"
    );
}

#[test]
fn test_comparison() {
    let mut device = TestingDevice::new();
    lessons::run("comparison", &mut device, &Checks::default()).unwrap();
    assert_eq!(
        device.output_lines(),
        vec![
            "1 == 1 is true",
            "2 != 1 is true",
            "2 > 1 is true",
            "1 < 2 is true",
            "1 >= 1 is true",
            "2 <= 1 is false",
            "hello, world",
            "(1, \"zebra\") < (2, \"apple\") is true",
            "(3, \"apple\") < (3, \"bird\") is true",
            "(4, \"dog\") == (4, \"dog\") is true",
            "(\"blue\", -1) < (\"purple\", 1) is true",
        ]
    );
}

#[test]
fn test_optionals() {
    let mut device = TestingDevice::new();
    lessons::run("optionals", &mut device, &Checks::default()).unwrap();
    assert_eq!(
        device.output_lines(),
        vec![
            "converted_number contains some integer value.",
            "server_response_code is Optional(404)",
            "server_response_code is nil",
            "survey_answer is nil",
            "The string \"123\" has an integer value of 123",
            "My number is 123",
            "4 < 42 < 100",
            "Hello, friend!",
            "number is 123, and so is 123",
            "An optional string.",
            "An implicitly unwrapped optional string.",
            "optional_string is Optional(An implicitly unwrapped optional string.)",
            "An implicitly unwrapped optional string.",
            "An implicitly unwrapped optional string.",
        ]
    );
}

#[test]
fn test_assertions() {
    assert_eq!(
        run_lesson("assertions", CheckLevel::Debug),
        "Checking at the debug level: assertions on, preconditions on.\n\
         You can ride the ferris wheel.\n\
         You can ride the roller-coaster or the ferris wheel.\n\
         Index 1 is valid.\n"
    );
    assert!(run_lesson("assertions", CheckLevel::Release)
        .starts_with("Checking at the release level: assertions off, preconditions on.\n"));
    assert!(run_lesson("assertions", CheckLevel::Unchecked)
        .starts_with("Checking at the unchecked level: assertions off, preconditions off.\n"));
}

#[test]
fn test_run_all() {
    let mut device = TestingDevice::new();
    lessons::run_all(&mut device, &Checks::new(CheckLevel::Debug)).unwrap();
    let output = device.output_str();

    assert!(output.starts_with("## Constants and Variables\nBonjour!\n"));
    assert!(output.contains("\n\n## Assignment Operator\na is now 10\n"));
    assert!(output.contains("\n\n## Optionals\nconverted_number contains some integer value.\n"));
    assert!(output.ends_with("Index 1 is valid.\n"));
    assert_eq!(output.matches("## ").count(), 7);
}
