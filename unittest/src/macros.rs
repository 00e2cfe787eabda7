//! Call-site assertion macros.
//!
//! Each macro captures the stringified expression together with `line!()` and
//! `file!()` and hands them to [`assert_that`](crate::assert_that). The enclosing
//! function must return [`TestResult`](crate::TestResult) (or any `Result` whose error
//! converts from [`AssertionFailure`](crate::AssertionFailure)), since a failed check
//! leaves it through `?`.
//!
//! ```
//! use unittest::{assert, assert_eq, TestResult};
//!
//! fn body() -> TestResult {
//!     assert!(1 + 2 == 3);
//!     assert_eq!("ab".len(), 2);
//!     Ok(())
//! }
//! # body().unwrap();
//! ```
//!
//! `#[def_test]` checks its arguments at compile time. A zero repeat count is rejected:
//!
//! ```compile_fail
//! use unittest::def_test;
//!
//! #[def_test(repeat = 0)]
//! fn never_runs() {}
//! # fn main() {}
//! ```
//!
//! as is a repeat count with a suffix other than `usize`:
//!
//! ```compile_fail
//! use unittest::def_test;
//!
//! #[def_test(repeat = 5u8)]
//! fn small_repeat() {}
//! # fn main() {}
//! ```
//!
//! an empty display name:
//!
//! ```compile_fail
//! use unittest::def_test;
//!
//! #[def_test(name = "")]
//! fn unnamed() {}
//! # fn main() {}
//! ```
//!
//! and any unknown argument:
//!
//! ```compile_fail
//! use unittest::def_test;
//!
//! #[def_test(retries = 3)]
//! fn retried() {}
//! # fn main() {}
//! ```

#[macro_export]
macro_rules! assert {
    ($cond:expr $(,)?) => {
        $crate::assert_that($cond, stringify!($cond), line!(), file!())?
    };
}

#[macro_export]
macro_rules! assert_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_that(
            $left == $right,
            concat!(stringify!($left), " == ", stringify!($right)),
            line!(),
            file!(),
        )?
    };
}

#[macro_export]
macro_rules! assert_ne {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_that(
            $left != $right,
            concat!(stringify!($left), " != ", stringify!($right)),
            line!(),
            file!(),
        )?
    };
}
