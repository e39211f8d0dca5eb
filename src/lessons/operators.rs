//! The basic operators: assignment, arithmetic, and comparison.
use super::{Device, Error};
use crate::{
    checks::Checks,
    ops::{arithmetic::*, comparison::*},
};

pub fn assignment(device: &mut dyn Device, _checks: &Checks) -> Result<(), Error> {
    let b = 10;
    let mut a = 5;
    debug_assert_eq!(a, 5);
    a = b;
    device.put_line(&format!("a is now {a}"))?;

    // A tuple on the right side is split into one binding per element.
    let (x, y) = (1, 2);
    device.put_line(&format!("x is {x}, y is {y}"))
}

pub fn arithmetic(device: &mut dyn Device, _checks: &Checks) -> Result<(), Error> {
    device.put_line(&format!("1 + 2 = {}", add(1, 2)))?;
    device.put_line(&format!("5 - 3 = {}", subtract(5, 3)))?;
    device.put_line(&format!("2 * 3 = {}", multiply(2, 3)))?;
    device.put_line(&format!("10.0 / 2.5 = {:?}", 10.0 / 2.5))?;
    device.put_line(&format!("\"hello, \" + \"world\" = {:?}", "hello, ".to_string() + "world"))?;

    // Overflow only happens when it is asked for.
    device.put_line(&format!(
        "u8::MAX &+ 1 = {}",
        overflow_add(u8::MAX, 1)
    ))?;

    device.put_line(&format!("9 % 4 = {}", remainder(9, 4)))?;
    device.put_line(&format!("-9 % 4 = {}", remainder(-9, 4)))?;
    device.put_line(&format!("9 % -4 = {}", remainder(9, -4)))?;

    let three = 3;
    let minus_three = negate(three);
    let plus_three = negate(minus_three);
    device.put_line(&format!("minus_three = {minus_three}, plus_three = {plus_three}"))?;

    let minus_six = -6;
    let also_minus_six = plus(minus_six);
    device.put_line(&format!("also_minus_six = {also_minus_six}"))
}

pub fn comparison(device: &mut dyn Device, _checks: &Checks) -> Result<(), Error> {
    device.put_line(&format!("1 == 1 is {}", 1_i32.equals(&1)))?;
    device.put_line(&format!("2 != 1 is {}", !2_i32.equals(&1)))?;
    device.put_line(&format!("2 > 1 is {}", greater_than(&(2,), &(1,))))?;
    device.put_line(&format!("1 < 2 is {}", less_than(&(1,), &(2,))))?;
    device.put_line(&format!("1 >= 1 is {}", greater_or_equal(&(1,), &(1,))))?;
    device.put_line(&format!("2 <= 1 is {}", less_or_equal(&(2,), &(1,))))?;

    let name = "world";
    if name.equals("world") {
        device.put_line("hello, world")?;
    } else {
        device.put_line(&format!("I'm sorry {name}, but I don't recognize you"))?;
    }

    device.put_line(&format!(
        "(1, \"zebra\") < (2, \"apple\") is {}",
        less_than(&(1, "zebra"), &(2, "apple"))
    ))?;
    device.put_line(&format!(
        "(3, \"apple\") < (3, \"bird\") is {}",
        less_than(&(3, "apple"), &(3, "bird"))
    ))?;
    device.put_line(&format!(
        "(4, \"dog\") == (4, \"dog\") is {}",
        equal(&(4, "dog"), &(4, "dog"))
    ))?;
    device.put_line(&format!(
        "(\"blue\", -1) < (\"purple\", 1) is {}",
        less_than(&("blue", -1), &("purple", 1))
    ))
}
