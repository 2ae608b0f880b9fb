//! Command helper tests.

use crate::commands::split_users;

#[test]
fn test_split_users_trims_and_drops_empties() {
    assert_eq!(split_users("alice, bob,,carol "), vec!["alice", "bob", "carol"]);
}

#[test]
fn test_split_users_single_name() {
    assert_eq!(split_users("alice"), vec!["alice"]);
}

#[test]
fn test_split_users_empty() {
    assert!(split_users(" , ").is_empty());
}
