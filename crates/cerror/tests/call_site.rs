//! Recorded locations must be the caller's, through every layer of the API.

use cerror::{newf, wrapf, CResult, Error, ErrorType, ResultExt};

const THIS_FILE: &str = file!();

fn repo_lookup(id: u32) -> CResult<()> {
    Err(ErrorType::NOT_FOUND.newf(format_args!("row {} missing", id)))
}

#[track_caller]
fn forwarded(msg: &str) -> Error {
    ErrorType::INTERNAL.new(msg)
}

#[test]
fn distinct_lines_for_distinct_calls() {
    let first = ErrorType::VALIDATION.new("first");
    let first_line = line!() - 1;
    let second = ErrorType::VALIDATION.new("second");
    let second_line = line!() - 1;

    assert_ne!(first.line(), second.line());
    assert_eq!(first.line(), first_line);
    assert_eq!(second.line(), second_line);
    assert_eq!(first.file(), THIS_FILE);
    assert_eq!(second.file(), THIS_FILE);
}

#[test]
fn every_entry_point_reports_caller() {
    let (e, l) = (ErrorType::INTERNAL.new("m"), line!());
    assert_eq!(e.line(), l);

    let (e, l) = (ErrorType::INTERNAL.newf(format_args!("m{}", 1)), line!());
    assert_eq!(e.line(), l);

    let (e, l) = (ErrorType::INTERNAL.wrap(ErrorType::NO_TYPE.new("c"), "m"), line!());
    assert_eq!(e.line(), l);

    let (e, l) = (ErrorType::INTERNAL.wrapf("c", format_args!("m{}", 2)), line!());
    assert_eq!(e.line(), l);

    let (e, l) = (ErrorType::INTERNAL.wrapf_opt(None::<Error>, format_args!("m")), line!());
    assert_eq!(e.line(), l);

    let (e, l) = (newf!(ErrorType::INTERNAL, "m{}", 3), line!());
    assert_eq!(e.line(), l);

    let (e, l) = (wrapf!("c", ErrorType::INTERNAL, "m{}", 4), line!());
    assert_eq!(e.line(), l);

    for e in [
        ErrorType::INTERNAL.new("a"),
        newf!(ErrorType::INTERNAL, "b"),
        wrapf!("c", ErrorType::INTERNAL, "d"),
    ] {
        assert_eq!(e.file(), THIS_FILE);
    }
}

#[test]
fn wrapping_layers_each_record_their_own_site() {
    let inner = repo_lookup(4).unwrap_err();
    let outer = repo_lookup(4).wrap_err(ErrorType::INTERNAL, "service failed");
    let outer_line = line!() - 1;
    let outer = outer.unwrap_err();

    assert_eq!(outer.line(), outer_line);
    let cause = outer
        .find_type(ErrorType::NOT_FOUND)
        .expect("repo error kept in chain");
    // Both repo errors come from the same line inside repo_lookup.
    assert_eq!(cause.line(), inner.line());
    assert_ne!(cause.line(), outer.line());
}

#[test]
fn track_caller_helpers_are_transparent() {
    let (e, l) = (forwarded("through helper"), line!());
    assert_eq!(e.line(), l);
    assert_eq!(e.file(), THIS_FILE);
}

#[test]
fn column_is_recorded() {
    let e = ErrorType::INTERNAL.new("c");
    assert!(e.column() > 0);
    assert_eq!(e.location().column(), e.column());
    assert_eq!(
        e.location().to_string(),
        format!("{}:{}:{}", e.file(), e.line(), e.column())
    );
}
