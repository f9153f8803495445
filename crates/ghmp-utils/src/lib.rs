pub mod atomic_write;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod lookup;
pub mod paths;
pub mod types;
