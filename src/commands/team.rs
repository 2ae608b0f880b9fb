//! `kbl team` - team administration.

use std::process::ExitCode;

use keybase_local::{Client, Result};

use super::{fail, finish};
use crate::TeamAction;

/// Runs one team action.
///
/// Listing actions print JSON; the rest print nothing on success.
pub(crate) fn run_team_command(client: &Client, action: TeamAction) -> ExitCode {
    let team = match client.team() {
        Ok(team) => team,
        Err(e) => return fail(&e),
    };

    let done: Result<()> = match action {
        TeamAction::ListMemberships { force_poll } => {
            return finish(team.list_memberships(force_poll))
        }
        TeamAction::ListMembers {
            team: name,
            force_poll,
        } => return finish(team.list_members(&name, force_poll)),
        TeamAction::ListRequests => return finish(team.list_requests()),
        TeamAction::Create { team: name } => team.create(&name),
        TeamAction::AddMember {
            team: name,
            user,
            role,
            email,
        } => team.add_member(&name, &user, role, email),
        TeamAction::RemoveMember { team: name, user } => team.remove_member(&name, &user),
        TeamAction::EditMember {
            team: name,
            user,
            role,
        } => team.edit_member(&name, &user, role),
        TeamAction::Rename {
            team: name,
            new_name,
        } => team.rename(&name, &new_name),
        TeamAction::RequestAccess { team: name } => team.request_access(&name),
        TeamAction::IgnoreRequest { team: name, user } => team.ignore_request(&name, &user),
        TeamAction::AcceptInvite { token } => team.accept_invite(&token),
        TeamAction::Leave {
            team: name,
            permanent,
        } => team.leave(&name, permanent),
        TeamAction::Delete { team: name } => team.delete(&name),
    };

    match done {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}
