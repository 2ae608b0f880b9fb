//! CLI parsing and command helper tests.

mod cli;
mod helpers;
