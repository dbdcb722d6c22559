//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments with their own config directory,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;

#[allow(unused_imports)]
pub use command::NotetreeCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
