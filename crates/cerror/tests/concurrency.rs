//! Constructors share no mutable state; errors cross threads freely.

use std::sync::Arc;
use std::thread;

use cerror::{error_type_of, Error, ErrorType};
use crossbeam_queue::SegQueue;

const THREADS: usize = 16;
const PER_THREAD: usize = 500;

#[test]
fn concurrent_construction() {
    let results: SegQueue<(usize, usize, Error)> = SegQueue::new();

    thread::scope(|s| {
        for t in 0..THREADS {
            let results = &results;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    let tag = ErrorType::ALL[(t + i) % ErrorType::ALL.len()];
                    let leaf = tag.newf(format_args!("t{} i{}", t, i));
                    let err = ErrorType::INTERNAL
                        .wrap(leaf, format!("wrapped t{} i{}", t, i))
                        .with_context("thread", t.to_string());
                    results.push((t, i, err));
                }
            });
        }
    });

    assert_eq!(results.len(), THREADS * PER_THREAD);

    while let Some((t, i, err)) = results.pop() {
        assert_eq!(err.message(), format!("wrapped t{} i{}", t, i));
        assert_eq!(err.error_type(), ErrorType::INTERNAL);
        assert_eq!(err.context_value("thread"), Some(t.to_string().as_str()));
        assert_eq!(err.file(), file!());
        assert!(err.line() > 0);

        let cause = err.wrapped().expect("cause present");
        assert_eq!(cause.to_string(), format!("t{} i{}", t, i));
        let expected = ErrorType::ALL[(t + i) % ErrorType::ALL.len()];
        assert_eq!(error_type_of(cause), expected);
    }
}

#[test]
fn shared_chain_read_from_many_threads() {
    let err = Arc::new(
        ErrorType::INTERNAL.wrap(ErrorType::NOT_FOUND.new("missing"), "lookup failed"),
    );

    thread::scope(|s| {
        for _ in 0..THREADS {
            let err = Arc::clone(&err);
            s.spawn(move || {
                for _ in 0..PER_THREAD {
                    assert_eq!(err.to_string(), "lookup failed");
                    assert_eq!(err.root_cause().to_string(), "missing");
                    assert_eq!(err.chain().count(), 2);
                }
            });
        }
    });
}

#[test]
fn registry_lookups_from_many_threads() {
    thread::scope(|s| {
        for t in 0..THREADS {
            s.spawn(move || {
                for code in 0..64u32 {
                    let tag = ErrorType::from_code(code + t as u32);
                    assert!(!tag.name().is_empty());
                    assert!(!tag.description().is_empty());
                }
            });
        }
    });
}
