//! Unit test modules.

mod config_test;
mod formulas_test;
mod profile_test;
mod reports_test;
mod summary_test;
mod validator_test;
