//! Team administration through `keybase team`.
//!
//! Listing commands return the CLI's JSON output. Everything else reports
//! only success or failure.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::runner::Runner;

/// Leading argument of every team command.
pub const TEAM_COMMAND: &str = "team";

/// Membership role within a team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full control, including deleting the team.
    Owner,
    /// Manage members and settings.
    Admin,
    /// Read and write team content.
    Writer,
    /// Read-only access.
    #[default]
    Reader,
}

impl Role {
    /// Name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Admin => "admin",
            Role::Writer => "writer",
            Role::Reader => "reader",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "owner" => Ok(Role::Owner),
            "admin" => Ok(Role::Admin),
            "writer" => Ok(Role::Writer),
            "reader" => Ok(Role::Reader),
            other => Err(format!(
                "unknown role '{}' (expected owner, admin, writer or reader)",
                other
            )),
        }
    }
}

/// Checks a team name against Keybase's naming rules.
///
/// Subteams are dot-separated (`acme.ops`). Each part is 2-16 characters of
/// ASCII letters, digits and underscores, starts with a letter or digit, and
/// never contains two underscores in a row.
pub fn is_valid_team_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_valid_team_part)
}

fn is_valid_team_part(part: &str) -> bool {
    if !(2..=16).contains(&part.len()) {
        return false;
    }
    // Start "after an underscore" so a leading underscore is rejected.
    let mut after_underscore = true;
    for c in part.chars() {
        match c {
            '_' if after_underscore => return false,
            '_' => after_underscore = true,
            c if c.is_ascii_alphanumeric() => after_underscore = false,
            _ => return false,
        }
    }
    true
}

pub(crate) fn validate(team: &str) -> Result<()> {
    if is_valid_team_name(team) {
        Ok(())
    } else {
        Err(Error::InvalidTeamName(team.to_string()))
    }
}

/// Handle for team operations.
#[derive(Debug, Clone)]
pub struct Team<R> {
    runner: R,
}

impl<R: Runner> Team<R> {
    /// Create a team handle that executes through `runner`.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn full_args<'a>(args: &[&'a str]) -> Vec<&'a str> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push(TEAM_COMMAND);
        full.extend_from_slice(args);
        full
    }

    /// Run a team subcommand and parse its stdout as JSON.
    ///
    /// Empty output is treated as an empty object.
    pub fn call_json(&self, args: &[&str]) -> Result<Value> {
        let full = Self::full_args(args);
        let command = self.runner.describe(&full);
        let output = self.runner.run(&full, None)?.check(command)?;

        if output.stdout.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        Ok(serde_json::from_str(&output.stdout)?)
    }

    /// Run a team subcommand for its exit status only.
    pub fn call_status(&self, args: &[&str]) -> Result<()> {
        let full = Self::full_args(args);
        let command = self.runner.describe(&full);
        self.runner.run(&full, None)?.check(command.clone())?;
        tracing::info!("{}", command);
        Ok(())
    }

    /// List every team the current user belongs to.
    ///
    /// `force_poll` makes the daemon refresh identities from the server.
    pub fn list_memberships(&self, force_poll: bool) -> Result<Value> {
        let mut args = vec!["list-memberships", "--json"];
        if force_poll {
            args.push("--force-poll");
        }
        self.call_json(&args)
    }

    /// List the members of `team`.
    pub fn list_members(&self, team: &str, force_poll: bool) -> Result<Value> {
        validate(team)?;
        let mut args = vec!["list-members", team, "--json"];
        if force_poll {
            args.push("--force-poll");
        }
        self.call_json(&args)
    }

    /// Create a new team.
    pub fn create(&self, team: &str) -> Result<()> {
        validate(team)?;
        self.call_status(&["create", team])
    }

    /// Add `user` to `team` with `role`.
    ///
    /// With `email`, `user` is an email address to invite instead of a username.
    pub fn add_member(&self, team: &str, user: &str, role: Role, email: bool) -> Result<()> {
        validate(team)?;
        let who = if email {
            format!("--email={}", user)
        } else {
            format!("--user={}", user)
        };
        let role = format!("--role={}", role);
        self.call_status(&["add-member", team, &who, &role])
    }

    /// Remove `user` from `team`.
    pub fn remove_member(&self, team: &str, user: &str) -> Result<()> {
        validate(team)?;
        let who = format!("--user={}", user);
        self.call_status(&["remove-member", team, &who])
    }

    /// Change the role of `user` in `team`.
    pub fn edit_member(&self, team: &str, user: &str, role: Role) -> Result<()> {
        validate(team)?;
        let who = format!("--user={}", user);
        let role = format!("--role={}", role);
        self.call_status(&["edit-member", team, &who, &role])
    }

    /// Rename a subteam.
    pub fn rename(&self, old_team: &str, new_team: &str) -> Result<()> {
        validate(old_team)?;
        validate(new_team)?;
        self.call_status(&["rename", old_team, new_team])
    }

    /// Ask the admins of `team` for access.
    pub fn request_access(&self, team: &str) -> Result<()> {
        validate(team)?;
        self.call_status(&["request-access", team])
    }

    /// List pending requests to join teams administered by the current user.
    pub fn list_requests(&self) -> Result<Value> {
        self.call_json(&["list-requests", "--json"])
    }

    /// Ignore `user`'s request to join `team`.
    pub fn ignore_request(&self, team: &str, user: &str) -> Result<()> {
        validate(team)?;
        let who = format!("--user={}", user);
        self.call_status(&["ignore-request", team, &who])
    }

    /// Accept an email invitation using its token.
    pub fn accept_invite(&self, token: &str) -> Result<()> {
        let token = format!("--token={}", token);
        self.call_status(&["accept-invite", &token])
    }

    /// Leave `team`. With `permanent`, the team cannot re-add you.
    pub fn leave(&self, team: &str, permanent: bool) -> Result<()> {
        validate(team)?;
        let mut args = vec!["leave", team];
        if permanent {
            args.push("--permanent");
        }
        self.call_status(&args)
    }

    /// Delete `team`.
    pub fn delete(&self, team: &str) -> Result<()> {
        validate(team)?;
        self.call_status(&["delete", team])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRunner;
    use serde_json::json;

    fn team(runner: &ScriptedRunner) -> Team<&ScriptedRunner> {
        Team::new(runner)
    }

    #[test]
    fn test_valid_team_names() {
        for name in ["acme", "ab", "a_b", "acme.ops", "team_2024_", "ABC123", "a1.b2.c3"] {
            assert!(is_valid_team_name(name), "{} should be valid", name);
        }
    }

    #[test]
    fn test_invalid_team_names() {
        for name in [
            "",
            "a",
            "_acme",
            "ac__me",
            "acme.",
            ".acme",
            "has space",
            "emoji🙂",
            "seventeen_chars_x",
        ] {
            assert!(!is_valid_team_name(name), "{} should be invalid", name);
        }
    }

    #[test]
    fn test_role_round_trip_through_str() {
        for role in [Role::Owner, Role::Admin, Role::Writer, Role::Reader] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
        assert_eq!(Role::default(), Role::Reader);
        assert!("boss".parse::<Role>().is_err());
    }

    #[test]
    fn test_list_memberships_args() {
        let runner = ScriptedRunner::new()
            .respond(r#"{"teams": [{"fq_name": "acme"}]}"#)
            .respond("{}");
        let result = team(&runner).list_memberships(false).expect("list");
        assert_eq!(result["teams"][0]["fq_name"], "acme");
        assert_eq!(
            runner.last_call().args,
            vec!["team", "list-memberships", "--json"]
        );

        team(&runner).list_memberships(true).expect("list");
        assert_eq!(
            runner.last_call().args,
            vec!["team", "list-memberships", "--json", "--force-poll"]
        );
    }

    #[test]
    fn test_list_members_args() {
        let runner = ScriptedRunner::new().respond(r#"{"members": {}}"#);
        team(&runner).list_members("acme", true).expect("list");
        assert_eq!(
            runner.last_call().args,
            vec!["team", "list-members", "acme", "--json", "--force-poll"]
        );
    }

    #[test]
    fn test_empty_output_is_empty_object() {
        let runner = ScriptedRunner::new().respond("  \n");
        let result = team(&runner).list_memberships(false).expect("list");
        assert_eq!(result, json!({}));
    }

    #[test]
    fn test_json_call_failure() {
        let runner = ScriptedRunner::new().fail(1, "login required");
        match team(&runner).list_memberships(false) {
            Err(Error::CommandFailed { command, stderr, .. }) => {
                assert_eq!(command, "keybase team list-memberships --json");
                assert_eq!(stderr, "login required");
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_team_is_rejected_before_spawning() {
        let runner = ScriptedRunner::new();
        assert!(matches!(
            team(&runner).list_members("_bad", false),
            Err(Error::InvalidTeamName(_))
        ));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_add_member_args() {
        let runner = ScriptedRunner::new().respond("").respond("");
        team(&runner)
            .add_member("acme", "bob", Role::Writer, false)
            .expect("add");
        assert_eq!(
            runner.last_call().args,
            vec!["team", "add-member", "acme", "--user=bob", "--role=writer"]
        );

        team(&runner)
            .add_member("acme", "bob@example.com", Role::default(), true)
            .expect("invite");
        assert_eq!(
            runner.last_call().args,
            vec![
                "team",
                "add-member",
                "acme",
                "--email=bob@example.com",
                "--role=reader"
            ]
        );
    }

    #[test]
    fn test_membership_command_args() {
        let runner = ScriptedRunner::new()
            .respond("")
            .respond("")
            .respond("")
            .respond("");
        let t = team(&runner);
        t.create("acme").expect("create");
        t.remove_member("acme", "bob").expect("remove");
        t.edit_member("acme", "bob", Role::Admin).expect("edit");
        t.ignore_request("acme", "eve").expect("ignore");

        let args: Vec<Vec<String>> = runner.calls().into_iter().map(|c| c.args).collect();
        assert_eq!(
            args,
            vec![
                vec!["team", "create", "acme"],
                vec!["team", "remove-member", "acme", "--user=bob"],
                vec!["team", "edit-member", "acme", "--user=bob", "--role=admin"],
                vec!["team", "ignore-request", "acme", "--user=eve"],
            ]
        );
    }

    #[test]
    fn test_lifecycle_command_args() {
        let runner = ScriptedRunner::new()
            .respond("")
            .respond("")
            .respond("")
            .respond("")
            .respond("");
        let t = team(&runner);
        t.rename("acme.ops", "acme.sre").expect("rename");
        t.request_access("acme").expect("request");
        t.accept_invite("abc123").expect("accept");
        t.leave("acme", true).expect("leave");
        t.delete("acme").expect("delete");

        let args: Vec<Vec<String>> = runner.calls().into_iter().map(|c| c.args).collect();
        assert_eq!(
            args,
            vec![
                vec!["team", "rename", "acme.ops", "acme.sre"],
                vec!["team", "request-access", "acme"],
                vec!["team", "accept-invite", "--token=abc123"],
                vec!["team", "leave", "acme", "--permanent"],
                vec!["team", "delete", "acme"],
            ]
        );
    }

    #[test]
    fn test_list_requests() {
        let runner = ScriptedRunner::new().respond(r#"[{"name": "acme", "username": "eve"}]"#);
        let result = team(&runner).list_requests().expect("list");
        assert_eq!(result[0]["username"], "eve");
        assert_eq!(
            runner.last_call().args,
            vec!["team", "list-requests", "--json"]
        );
    }

    #[test]
    fn test_status_call_failure() {
        let runner = ScriptedRunner::new().fail(2, "not an admin");
        assert!(matches!(
            team(&runner).delete("acme"),
            Err(Error::CommandFailed { code: Some(2), .. })
        ));
    }
}
