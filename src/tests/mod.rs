mod error_tests;
mod mode_tests;
