//! The basics: constants and variables, booleans, optionals, and runtime checks.
use super::{Device, Error};
use crate::{
    checks::Checks,
    optional::{Bindings, ImplicitlyUnwrapped, Nil, Optional},
};

pub fn constants(device: &mut dyn Device, _checks: &Checks) -> Result<(), Error> {
    // A constant can be declared first, and given its value exactly once later.
    let environment = "development";
    let maximum_number_of_login_attempts: u32 = if environment == "development" {
        100
    } else {
        10
    };
    debug_assert_eq!(maximum_number_of_login_attempts, 100);

    let mut friendly_welcome = "Hello!";
    debug_assert_eq!(friendly_welcome, "Hello!");
    friendly_welcome = "Bonjour!";
    device.put_line(friendly_welcome)?;
    device.put_line(&format!(
        "The current value of friendly_welcome is {friendly_welcome}"
    ))?;

    let cat = "🐱";
    device.put_line(cat)
}

pub fn booleans(device: &mut dyn Device, _checks: &Checks) -> Result<(), Error> {
    let oranges_are_oranges = true;
    let turnips_are_delicious = false;

    debug_assert!(oranges_are_oranges);
    if turnips_are_delicious {
        device.put_line("Mmm, tasty turnips!")?;
    } else {
        device.put_line("Eww, turnips are horrible.")?;
    }

    Ok(())
}

pub fn optionals(device: &mut dyn Device, _checks: &Checks) -> Result<(), Error> {
    let possible_number = "123";
    let converted_number = Optional::<i64>::parse(possible_number);
    if converted_number != Nil {
        device.put_line("converted_number contains some integer value.")?;
    }

    // A variable optional can lose its value, and starts out without one.
    let mut server_response_code = Optional::Present(404);
    device.put_line(&format!("server_response_code is {server_response_code}"))?;
    server_response_code.take();
    device.put_line(&format!("server_response_code is {server_response_code}"))?;
    let survey_answer: Optional<String> = Optional::default();
    device.put_line(&format!("survey_answer is {survey_answer}"))?;

    // Optional binding.
    match Optional::<i64>::parse(possible_number).bind() {
        Some(actual_number) => device.put_line(&format!(
            "The string \"{possible_number}\" has an integer value of {actual_number}"
        ))?,
        None => device.put_line(&format!(
            "The string \"{possible_number}\" couldn't be converted to an integer"
        ))?,
    }

    let my_number = Optional::<i64>::parse(possible_number);
    if let Some(my_number) = my_number.bind() {
        device.put_line(&format!("My number is {my_number}"))?;
    }

    if let Some((first_number, second_number)) = Bindings::new()
        .bind(|_| Optional::<i64>::parse("4"))
        .bind(|_| Optional::<i64>::parse("42"))
        .when(|&(first_number, second_number)| {
            first_number < second_number && second_number < 100
        })
        .finish()
    {
        device.put_line(&format!("{first_number} < {second_number} < 100"))?;
    }

    // Providing a fallback value.
    let name: Optional<&str> = Optional::Absent;
    let greeting = format!("Hello, {}!", name.coalesce(|| "friend"));
    device.put_line(&greeting)?;

    // Force unwrapping, and its long-hand spelling.
    let number = converted_number.force_unwrap();
    let (same_number,) = Bindings::new()
        .bind(|_| converted_number)
        .or_fatal("The number was invalid");
    device.put_line(&format!("number is {number}, and so is {same_number}"))?;

    // Implicitly unwrapped optionals.
    let possible_string: Optional<String> = Optional::Present("An optional string.".to_string());
    let forced_string: String = possible_string.force_unwrap();
    device.put_line(&forced_string)?;

    let assumed_string: ImplicitlyUnwrapped<String> =
        ImplicitlyUnwrapped::new("An implicitly unwrapped optional string.".to_string());
    let implicit_string: &str = &assumed_string;
    device.put_line(implicit_string)?;

    let optional_string: Optional<String> = assumed_string.clone().into();
    device.put_line(&format!("optional_string is {optional_string}"))?;

    if assumed_string != Nil {
        device.put_line(&assumed_string)?;
    }
    if let Some(definite_string) = assumed_string.bind() {
        device.put_line(&definite_string)?;
    }
    Ok(())
}

pub fn assertions(device: &mut dyn Device, checks: &Checks) -> Result<(), Error> {
    device.put_line(&format!(
        "Checking at the {} level: assertions {}, preconditions {}.",
        checks.level,
        if checks.assertions_enabled() { "on" } else { "off" },
        if checks.preconditions_enabled() { "on" } else { "off" },
    ))?;

    for age in [3, 11] {
        checks.assert(|| age >= 0, || "A person's age can't be less than zero.");

        if age > 10 {
            device.put_line("You can ride the roller-coaster or the ferris wheel.")?;
        } else if age >= 0 {
            device.put_line("You can ride the ferris wheel.")?;
        } else {
            checks.assertion_failure(|| "A person's age can't be less than zero.");
        }
    }

    let index = 1;
    checks.precondition(|| index > 0, || "Index must be greater than zero.");
    device.put_line(&format!("Index {index} is valid."))
}
