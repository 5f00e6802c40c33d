//! Integration tests for deptsql.

pub mod bootstrap_test;
pub mod guard_test;
pub mod pipeline_test;
pub mod web_test;
