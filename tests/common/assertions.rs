//! Custom assertion macros and utilities
//!
//! Assertions over the alert slot, with messages that show what was visible.

/// Assert the visible alert has the given variant and message
#[macro_export]
macro_rules! assert_alert {
    ($alerts:expr, $variant:expr, $message:expr) => {
        match $alerts.current() {
            Some(alert) => {
                assert_eq!(alert.variant, $variant, "unexpected alert variant: {:?}", alert);
                assert_eq!(alert.message, $message, "unexpected alert message: {:?}", alert);
            }
            None => panic!("Expected a {:?} alert, none is visible", $variant),
        }
    };
}

/// Assert no alert is visible
#[macro_export]
macro_rules! assert_no_alert {
    ($alerts:expr) => {
        if let Some(alert) = $alerts.current() {
            panic!("Expected no alert, got: {:?}", alert);
        }
    };
}
