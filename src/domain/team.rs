use serde::{Deserialize, Serialize};

use crate::domain::member::Member;
use crate::domain::types::{TeamId, TeamName};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewTeam {
    pub name: TeamName,
}

impl NewTeam {
    #[must_use]
    pub fn new(name: TeamName) -> Self {
        Self { name }
    }
}

/// A team together with the members currently pointing at it.
///
/// The member list is always derived from `members.team_id`; it is a read
/// model and is never written back.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TeamWithMembers {
    #[serde(flatten)]
    pub team: Team,
    pub members: Vec<Member>,
}

impl From<(Team, Vec<Member>)> for TeamWithMembers {
    fn from((team, members): (Team, Vec<Member>)) -> Self {
        Self { team, members }
    }
}
