//! Behavioral tests for the derived shape-only comparison.

use caseq::CaseEquatable;
use rstest::rstest;

#[derive(CaseEquatable, Debug)]
enum MyEnum {
    One(i32),
    Two(String),
    Three,
}

#[derive(CaseEquatable, Debug)]
enum Simple {
    A,
    B,
    C,
}

#[derive(CaseEquatable, Debug)]
enum Mixed {
    X,
    Y(f64),
    Z(i32, String),
    Plain { tag: u8 },
}

#[derive(CaseEquatable)]
enum Never {}

#[rstest]
#[case::payload_matches_its_case(MyEnum::One(1), MyEnumRawCase::One, true)]
#[case::payload_does_not_cross_cases(MyEnum::One(1), MyEnumRawCase::Two, false)]
#[case::unit_case(MyEnum::Three, MyEnumRawCase::Three, true)]
#[case::unit_against_payload_case(MyEnum::Three, MyEnumRawCase::One, false)]
#[case::string_payload(MyEnum::Two("aaa".into()), MyEnumRawCase::Two, true)]
fn shape_equality(#[case] value: MyEnum, #[case] tag: MyEnumRawCase, #[case] expected: bool) {
    assert_eq!(value == tag, expected);
    // The negation is always the exact complement.
    assert_eq!(value != tag, !expected);
}

#[test]
fn equality_ignores_payload_content() {
    assert!(MyEnum::One(1) == MyEnumRawCase::One);
    assert!(MyEnum::One(i32::MAX) == MyEnumRawCase::One);
    assert!(MyEnum::Two(String::new()) == MyEnumRawCase::Two);
    assert!(MyEnum::Two("anything at all".into()) == MyEnumRawCase::Two);
}

#[test]
fn payload_free_enum_compares_by_case() {
    assert!(Simple::B == SimpleRawCase::B);
    assert!(Simple::B != SimpleRawCase::A);
    assert!(Simple::C != SimpleRawCase::B);
}

#[test]
fn struct_and_tuple_payloads_are_ignored() {
    assert!(Mixed::Z(7, "z".into()) == MixedRawCase::Z);
    assert!(Mixed::Plain { tag: 0 } == MixedRawCase::Plain);
    assert!(Mixed::Plain { tag: 255 } == MixedRawCase::Plain);
    assert!(Mixed::Y(1.5) != MixedRawCase::X);
}

#[test]
fn every_case_distinguishes_every_tag() {
    let tags = [MixedRawCase::X, MixedRawCase::Y, MixedRawCase::Z, MixedRawCase::Plain];
    let values =
        [Mixed::X, Mixed::Y(0.0), Mixed::Z(0, String::new()), Mixed::Plain { tag: 1 }];

    for (i, value) in values.iter().enumerate() {
        for (j, tag) in tags.iter().enumerate() {
            assert_eq!(value == tag, i == j, "{value:?} vs {tag:?}");
            assert_eq!(value != tag, i != j, "{value:?} vs {tag:?}");
        }
    }
}

#[test]
fn raw_case_is_plain_data() {
    // The companion is Copy + Eq + Hash, so it works as a lookup key.
    let tag = MyEnumRawCase::Two;
    let copy = tag;
    assert_eq!(tag, copy);

    let mut seen = std::collections::HashSet::new();
    seen.insert(MyEnumRawCase::One);
    seen.insert(MyEnumRawCase::Two);
    assert!(seen.contains(&copy));
}

fn assert_case_equatable<T: CaseEquatable>() {}

#[test]
fn derived_types_implement_the_trait() {
    assert_case_equatable::<MyEnum>();
    assert_case_equatable::<Simple>();
    assert_case_equatable::<Mixed>();
    // A zero-case enum still gets a (vacuously total) comparison.
    assert_case_equatable::<Never>();
}
