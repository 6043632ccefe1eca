// Copy semantics for nested records
//
// `Human` holds a nested `Life`. Every field is `Copy`, so the whole record is
// `Copy`: passing it by value hands the callee an independent duplicate, and
// the only way to change the caller's record is through `&mut`.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Life {
    pub age: i64,
    pub h: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Human {
    pub a: i64,
    pub b: i64,
    pub stats: Life,
}

impl Human {
    /// The record the demo runs with when no override is given.
    pub fn sample() -> Self {
        Human {
            a: 12,
            b: 20,
            stats: Life { age: 30, h: 189 },
        }
    }
}

// ============================================================================
// By value: the callee mutates its own copy
// ============================================================================

pub fn not_change_h(mut human: Human) {
    human.stats.h = 200;
    debug!(h = human.stats.h, "mutated local copy");
}

// ============================================================================
// By reference: whole-record overwrite through an output parameter
// ============================================================================

pub fn copy(destination: &mut Human, source: Human) {
    *destination = source;
}

/// Runs the demo on `b` and returns the record it was copied into.
pub fn run_demo(b: Human) -> Human {
    let mut a = Human::default();
    debug!(?a, ?b, "initial records");

    not_change_h(b);
    debug!(h = b.stats.h, "caller's record after by-value call");

    copy(&mut a, b);
    info!(?a, "copied record");

    a
}

/// Runs the demo on `b` and writes the copied record's `h` as a line.
pub fn run(b: Human, mut output: impl Write) -> Result<Human, AppError> {
    let a = run_demo(b);
    writeln!(output, "{}", a.stats.h)?;
    output.flush()?;
    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sample_prints_189() {
        assert_eq!(run_demo(Human::sample()).stats.h, 189);
    }

    #[test]
    fn test_run_prints_h_line() {
        let mut out = Vec::new();
        let a = run(Human::sample(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "189\n");
        assert_eq!(a, Human::sample());
    }

    #[test]
    fn test_run_reports_write_failure() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        assert!(matches!(run(Human::sample(), Closed), Err(AppError::Io(_))));
    }

    #[test]
    fn test_default_is_zeroed() {
        let zero = Human::default();
        assert_eq!(zero.a, 0);
        assert_eq!(zero.b, 0);
        assert_eq!(zero.stats, Life { age: 0, h: 0 });
    }

    #[test]
    fn test_not_change_h_leaves_caller_untouched() {
        let b = Human::sample();
        not_change_h(b);
        assert_eq!(b.stats.h, 189);
        assert_eq!(b, Human::sample());
    }

    #[test]
    fn test_copy_overwrites_every_field() {
        let mut a = Human::default();
        let b = Human::sample();
        copy(&mut a, b);
        assert_eq!(a, b);
        assert_eq!(a.stats.age, 30);
    }

    #[test]
    fn test_copy_is_independent_of_later_source_changes() {
        let mut a = Human::default();
        let mut b = Human::sample();
        copy(&mut a, b);

        b.stats.h = 1;
        b.a = -5;

        assert_eq!(a, Human::sample());
    }

    #[test]
    fn test_assignment_copies_nested_record() {
        let original = Human::sample();
        let mut duplicate = original;
        duplicate.stats.age += 1;

        assert_eq!(original.stats.age, 30);
        assert_eq!(duplicate.stats.age, 31);
    }

    fn any_human() -> impl Strategy<Value = Human> {
        (any::<i64>(), any::<i64>(), any::<i64>(), any::<i64>()).prop_map(|(a, b, age, h)| {
            Human {
                a,
                b,
                stats: Life { age, h },
            }
        })
    }

    proptest! {
        #[test]
        fn prop_by_value_call_never_leaks(b in any_human()) {
            let h = b.stats.h;
            not_change_h(b);
            prop_assert_eq!(b.stats.h, h);
            prop_assert_eq!(run_demo(b), b);
        }

        #[test]
        fn prop_copy_makes_field_wise_equal(start in any_human(), b in any_human()) {
            let mut a = start;
            copy(&mut a, b);
            prop_assert_eq!(a.a, b.a);
            prop_assert_eq!(a.b, b.b);
            prop_assert_eq!(a.stats, b.stats);
        }
    }
}
