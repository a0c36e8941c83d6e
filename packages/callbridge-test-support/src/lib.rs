//! Test support utilities for the callbridge crate: unified logging
//! initialization for integration tests.

pub mod logging;
