use fundamentals::optional::{Nil, Optional};
use std::cell::Cell;

#[test]
fn test_present() {
    for v in [-7, 0, 42, i64::MAX] {
        let optional = Optional::Present(v);
        assert!(optional.is_present());
        assert!(!optional.is_absent());
        assert_eq!(optional.force_unwrap(), v);
    }

    let name = Optional::Present(String::from("Ada"));
    assert_eq!(name.clone().force_unwrap(), "Ada");
    assert!(name != Nil);
    assert!(Nil != name);
}

#[test]
fn test_absent() {
    let optional: Optional<i64> = Optional::Absent;
    assert!(!optional.is_present());
    assert!(optional == Nil);
    assert!(Nil == optional);
    assert_eq!(optional, Optional::default());
}

#[test]
fn test_parse() {
    assert_eq!(Optional::<i64>::parse("123"), Optional::Present(123));
    assert_eq!(Optional::<i64>::parse("hello, world"), Optional::Absent);
    assert_eq!(Optional::<u8>::parse("256"), Optional::Absent);
    assert_eq!(Optional::<f64>::parse("2.5"), Optional::Present(2.5));
}

#[test]
fn test_coalesce() {
    assert_eq!(Optional::Present(5).coalesce(|| 9), 5);
    assert_eq!(Optional::Absent.coalesce(|| 9), 9);

    let evaluated = Cell::new(false);
    let result = Optional::Present(5).coalesce(|| {
        evaluated.set(true);
        9
    });
    assert_eq!(result, 5);
    assert!(!evaluated.get(), "the fallback of a present value was evaluated");

    let result = Optional::Absent.coalesce(|| {
        evaluated.set(true);
        9
    });
    assert_eq!(result, 9);
    assert!(evaluated.get());

    let name: Optional<&str> = Optional::Absent;
    assert_eq!(format!("Hello, {}!", name.coalesce(|| "friend")), "Hello, friend!");
}

#[test]
fn test_coalesce_optional() {
    let first: Optional<i32> = Optional::Absent;
    let second: Optional<i32> = Optional::Absent;
    assert_eq!(first.coalesce_optional(|| second), Optional::Absent);
    assert_eq!(first.coalesce_optional(|| Optional::Present(3)), Optional::Present(3));
    assert_eq!(
        Optional::Present(1).coalesce_optional(|| unreachable!("fallback evaluated")),
        Optional::Present(1)
    );
}

#[test]
fn test_bind_is_a_copy() {
    let my_number = Optional::Present(123);
    if let Some(mut my_number) = my_number.bind() {
        my_number += 1;
        assert_eq!(my_number, 124);
    } else {
        panic!("binding a present value failed");
    }
    assert_eq!(my_number, Optional::Present(123));

    let words = Optional::Present(vec!["a"]);
    let mut bound = words.bind().unwrap();
    bound.push("b");
    assert_eq!(words, Optional::Present(vec!["a"]));

    let absent: Optional<String> = Optional::Absent;
    assert_eq!(absent.bind(), None);
}

#[test]
fn test_chaining() {
    let converted = Optional::<i64>::parse("21").map(|n| n * 2);
    assert_eq!(converted, Optional::Present(42));

    let halved = |n: i64| if n % 2 == 0 { Optional::Present(n / 2) } else { Optional::Absent };
    assert_eq!(Optional::Present(8).flat_map(halved), Optional::Present(4));
    assert_eq!(Optional::Present(7).flat_map(halved), Optional::Absent);
    assert_eq!(Optional::Absent.flat_map(halved), Optional::Absent);
}

#[test]
fn test_assign_nil() {
    let mut server_response_code = Optional::Present(404);
    assert_eq!(server_response_code.take(), Optional::Present(404));
    assert!(server_response_code == Nil);

    assert_eq!(server_response_code.replace(200), Optional::Absent);
    assert_eq!(server_response_code, Optional::Present(200));

    if let Optional::Present(code) = server_response_code.as_mut() {
        *code = 500;
    }
    assert_eq!(server_response_code.as_ref(), Optional::Present(&500));
}

#[test]
fn test_option_conversions() {
    let optional: Optional<i32> = Some(3).into();
    assert_eq!(optional, Optional::Present(3));
    let option: Option<i32> = Optional::<i32>::Absent.into();
    assert_eq!(option, None);
}

#[test]
fn test_display() {
    assert_eq!(Optional::Present(404).to_string(), "Optional(404)");
    assert_eq!(Optional::<i32>::Absent.to_string(), "nil");
    assert_eq!(Nil.to_string(), "nil");
}
