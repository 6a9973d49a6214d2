//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage or request-build error
pub const USAGE: i32 = 1;

/// Internal software error (execution failure, variant mismatch)
pub const SOFTWARE: i32 = 70;
