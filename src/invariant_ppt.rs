//! Runtime invariants with contract-test bookkeeping
//!
//! Production code states its output invariants with [`assert_invariant!`].
//! Every check is counted per thread, so a test can later demand that a given
//! invariant was actually exercised by the inputs it fed in.
//!
//! ```rust,ignore
//! use crabcapture::invariant_ppt::contract_test;
//!
//! #[test]
//! fn contract_resolver() {
//!     let _ = crabcapture::resolve(intent, caps);
//!     contract_test("resolver", &["JPEG quality within 0..=100"]);
//! }
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

thread_local! {
    static CHECKED: RefCell<HashMap<&'static str, usize>> = RefCell::new(HashMap::new());
}

/// Check an invariant, recording that it was evaluated.
///
/// Panics with the invariant text (and optional context) when it does not hold.
#[macro_export]
macro_rules! assert_invariant {
    ($condition:expr, $message:expr) => {
        $crate::invariant_ppt::__check($condition, $message, None)
    };
    ($condition:expr, $message:expr, $context:expr) => {
        $crate::invariant_ppt::__check($condition, $message, Some($context))
    };
}

#[doc(hidden)]
pub fn __check(condition: bool, message: &'static str, context: Option<&str>) {
    CHECKED.with(|checked| {
        *checked.borrow_mut().entry(message).or_insert(0) += 1;
    });

    if !condition {
        panic!(
            "INVARIANT VIOLATION [{}]: {}",
            context.unwrap_or("unknown"),
            message
        );
    }
}

/// How many times `message` was checked on this thread since the last clear
pub fn invariant_check_count(message: &str) -> usize {
    CHECKED.with(|checked| checked.borrow().get(message).copied().unwrap_or(0))
}

/// Panics unless every invariant in `required` was checked at least once.
pub fn contract_test(test_name: &str, required: &[&str]) {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|message| invariant_check_count(message) == 0)
        .collect();

    if !missing.is_empty() {
        panic!(
            "CONTRACT FAILURE [{}]: invariants never checked:\n  - {}",
            test_name,
            missing.join("\n  - ")
        );
    }
}

pub fn clear_invariant_log() {
    CHECKED.with(|checked| checked.borrow_mut().clear());
}
