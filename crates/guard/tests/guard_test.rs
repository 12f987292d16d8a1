//! Integration tests for the guard surface.
//!
//! Exercises every guard through the prelude, the way a consumer would.

use std::any::Any;

use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;
use vigil_guard::prelude::*;

// ============================================================================
// PRESENCE
// ============================================================================

#[test]
fn not_null_round_trip() {
    assert_eq!(not_null("v", Some(5)).unwrap(), 5);
    assert!(not_null("v", None::<i32>).is_err());
}

#[test]
fn guards_chain_with_question_mark() {
    fn configure(name: Option<&str>, workers: i32) -> GuardResult<(String, i32)> {
        let name: &str = not_null_or_empty("name", name)?;
        let workers = positive("workers", workers)?;
        Ok((name.to_owned(), workers))
    }

    assert_eq!(
        configure(Some("pool"), 4).unwrap(),
        ("pool".to_owned(), 4)
    );
    assert_eq!(configure(Some("pool"), 0).unwrap_err().param(), "workers");
    assert_eq!(configure(None, 4).unwrap_err().param(), "name");
}

// ============================================================================
// NUMERIC DOMAINS
// ============================================================================

#[rstest]
#[case(0.0_f64, false)]
#[case(-1.0_f64, false)]
#[case(f64::INFINITY, true)]
#[case(f64::MIN_POSITIVE, true)]
fn positive_float_cases(#[case] value: f64, #[case] ok: bool) {
    assert_eq!(positive("x", value).is_ok(), ok);
}

#[rstest]
#[case(f64::NAN, false)]
#[case(f64::INFINITY, false)]
#[case(f64::NEG_INFINITY, false)]
#[case(0.0_f64, true)]
#[case(-3.5_f64, true)]
fn finite_cases(#[case] value: f64, #[case] ok: bool) {
    assert_eq!(finite("x", value).is_ok(), ok);
}

#[rstest]
#[case(-1, false)]
#[case(0, true)]
#[case(1, true)]
fn not_negative_cases(#[case] value: i64, #[case] ok: bool) {
    assert_eq!(not_negative("x", value).is_ok(), ok);
}

// ============================================================================
// COLLECTIONS AND MEMBERSHIP
// ============================================================================

#[test]
fn has_any_preserves_the_sequence() {
    assert!(has_any("xs", Vec::<i32>::new()).is_err());

    let xs = has_any("xs", vec![1]).unwrap();
    assert_eq!(xs.collect::<Vec<_>>(), vec![1]);
}

#[test]
fn in_set_matches_the_contract() {
    assert!(in_set("n", 1, &[2, 3, 4]).is_err());
    assert_eq!(in_set("n", 1, &[1, 2, 3, 4]).unwrap(), 1);
}

// ============================================================================
// IDENTIFIERS AND TYPES
// ============================================================================

#[test]
fn not_empty_rejects_the_zero_identifier() {
    assert!(not_empty("id", Uuid::nil()).is_err());
    let id = Uuid::new_v4();
    assert_eq!(not_empty("id", id).unwrap(), id);
}

#[test]
fn is_instance_of_narrows() {
    let erased: &dyn Any = &String::from("hello");
    let narrowed: &String = is_instance_of("v", Some(erased)).unwrap();
    assert_eq!(narrowed, "hello");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Stable,
    Beta,
    Nightly,
}

impl EnumDomain for Channel {
    type Repr = u8;
    const MEMBERS: &'static [Self] = &[Channel::Stable, Channel::Beta, Channel::Nightly];

    fn repr(self) -> u8 {
        self as u8
    }
}

#[rstest]
#[case(0u8, Some(Channel::Stable))]
#[case(2u8, Some(Channel::Nightly))]
#[case(20u8, None)]
fn defined_enum_over_raw_representations(#[case] raw: u8, #[case] expected: Option<Channel>) {
    match expected {
        Some(member) => assert_eq!(defined_enum::<Channel>("ch", &raw).unwrap(), member),
        None => {
            let err = defined_enum::<Channel>("ch", &raw).unwrap_err();
            assert!(matches!(err, GuardError::OutOfRange { .. }));
        }
    }
}

#[test]
fn defined_enum_rejects_foreign_types() {
    let err = defined_enum::<Channel>("ch", &1.5f64).unwrap_err();
    assert!(matches!(err, GuardError::InvalidArgument { .. }));
}

// ============================================================================
// FILESYSTEM
// ============================================================================

#[test]
fn exists_accepts_a_just_created_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(exists("path", Some(file.path())).is_ok());
}

#[test]
fn exists_reports_the_resolved_path() {
    let err = exists("path", Some("definitely/not/here.txt")).unwrap_err();
    assert!(err.to_string().contains("here.txt"));
}
