use serde::{Deserialize, Serialize};

use crate::domain::types::{Age, MemberId, TeamId, Username};

/// A persisted member. The owning side of the member/team association.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub username: Option<Username>,
    pub age: Option<Age>,
    pub team_id: Option<TeamId>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewMember {
    pub username: Option<Username>,
    pub age: Option<Age>,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    #[must_use]
    pub fn new(username: Option<Username>, age: Option<Age>, team_id: Option<TeamId>) -> Self {
        Self {
            username,
            age,
            team_id,
        }
    }

    /// Member without a team.
    #[must_use]
    pub fn unassigned(username: Username, age: Age) -> Self {
        Self::new(Some(username), Some(age), None)
    }

    /// Member placed in `team_id` from the start.
    #[must_use]
    pub fn in_team(username: Username, age: Age, team_id: TeamId) -> Self {
        Self::new(Some(username), Some(age), Some(team_id))
    }
}
