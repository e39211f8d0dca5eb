use fundamentals::optional::{ImplicitlyUnwrapped, Nil, Optional};

fn length(s: &str) -> usize {
    s.len()
}

#[test]
fn test_used_as_plain_value() {
    let assumed_string: ImplicitlyUnwrapped<String> =
        ImplicitlyUnwrapped::new("An implicitly unwrapped optional string.".to_string());

    let implicit_string: &str = &assumed_string;
    assert_eq!(implicit_string, "An implicitly unwrapped optional string.");
    assert_eq!(length(&assumed_string), 40);
    assert!(assumed_string.starts_with("An implicitly"));

    assert_eq!(
        assumed_string.as_plain(),
        "An implicitly unwrapped optional string."
    );
}

#[test]
fn test_mutated_in_place() {
    let mut count = ImplicitlyUnwrapped::new(1);
    *count += 1;
    assert_eq!(*count, 2);

    let mut late: ImplicitlyUnwrapped<Vec<i32>> = ImplicitlyUnwrapped::absent();
    assert!(late == Nil);
    late.set(vec![]);
    late.push(3);
    assert_eq!(late.as_plain(), vec![3]);
}

#[test]
fn test_optional_context_keeps_absence() {
    let assumed_string: ImplicitlyUnwrapped<String> = ImplicitlyUnwrapped::absent();

    let optional_string: Optional<String> = assumed_string.clone().into();
    assert_eq!(optional_string, Optional::Absent);

    let copied = assumed_string.clone();
    assert!(copied == Nil);
    assert!(!copied.is_present());
    assert_eq!(assumed_string.as_optional(), &Optional::Absent);
    assert_eq!(assumed_string.into_optional(), Optional::Absent);
}

#[test]
fn test_checked_like_an_optional() {
    let assumed_string = ImplicitlyUnwrapped::from(Optional::Present("here".to_string()));
    assert!(assumed_string != Nil);
    assert!(Nil != assumed_string);
    assert!(assumed_string.is_present());
    assert_eq!(assumed_string.bind(), Some("here".to_string()));

    let absent: ImplicitlyUnwrapped<String> = ImplicitlyUnwrapped::absent();
    assert!(Nil == absent);
    assert_eq!(absent.bind(), None);
    assert_eq!(absent.to_string(), "nil");
}
