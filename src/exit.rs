// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GENERIC_FAIL: i32 = 1;
pub const EXIT_INVALID_CONFIG: i32 = 2;
