//! Exit code constants for the promptbind CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Validation failure (required template field is empty, stored record drifted)
//! - 3: Missing invocation argument
//! - 4: Policy violation (strict mode only)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Validation failure: empty name or template at persistence time.
pub const VALIDATION_FAILURE: i32 = 2;

/// An invocation was attempted without a value for a declared variable.
pub const MISSING_ARGUMENT: i32 = 3;

/// Caller-side policy check failed with `strict_policy` enabled.
pub const POLICY_VIOLATION: i32 = 4;
