use fundamentals::ops::arithmetic::*;

#[test]
fn test_remainder() {
    assert_eq!(remainder(9, 4), 1);
    assert_eq!(remainder(-9, 4), -1);
    assert_eq!(remainder(9, 4), remainder(9, -4));
    assert_eq!(remainder(-9, 4), remainder(-9, -4));
    assert_eq!(remainder(8, 4), 0);
    assert_eq!(remainder(3, 4), 3);
    assert_eq!(remainder(9u32, 4), 1);
}

#[test]
fn test_remainder_identity() {
    for a in -20i64..=20 {
        for b in (-7i64..=7).filter(|&b| b != 0) {
            let r = remainder(a, b);
            let q = a / b;
            assert_eq!(a, b * q + r, "{a} % {b}");
            assert!(r == 0 || r.signum() == a.signum(), "{a} % {b} = {r}");
            assert_eq!(r, remainder(a, -b));
            assert!(r.abs() < b.abs());
        }
    }
}

#[test]
fn test_float_remainder() {
    assert_eq!(remainder(8.0, 2.5), 0.5);
    assert_eq!(remainder(-8.0, 2.5), -0.5);
    assert_eq!(remainder(-8.0f32, -2.5), -0.5);
    assert!(remainder(1.0f64, 0.0).is_nan());
}

#[test]
fn test_arithmetic() {
    assert_eq!(add(1, 2), 3);
    assert_eq!(subtract(5, 3), 2);
    assert_eq!(multiply(2, 3), 6);
    assert_eq!(divide(-9, 4), -2);
    assert_eq!(add(i8::MAX - 1, 1), i8::MAX);
}

#[test]
fn test_unary() {
    let three = 3;
    let minus_three = negate(three);
    let plus_three = negate(minus_three);
    assert_eq!(minus_three, -3);
    assert_eq!(plus_three, 3);

    let minus_six = -6;
    assert_eq!(plus(minus_six), -6);
    assert_eq!(negate(0u8), 0);
}

#[test]
fn test_overflow_operators() {
    assert_eq!(overflow_add(u8::MAX, 1), 0);
    assert_eq!(overflow_subtract(u8::MIN, 1), u8::MAX);
    assert_eq!(overflow_add(i8::MAX, 1), i8::MIN);
    assert_eq!(overflow_multiply(i16::MAX, 2), -2);
    assert_eq!(overflow_add(2, 2), 4);
}
