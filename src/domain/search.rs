//! Search condition and the flattened member/team projection it produces.

use serde::{Deserialize, Serialize};

use crate::domain::types::{MemberId, TeamId};

/// Optional filters applied to the member search.
///
/// A text filter is only active when it contains a non-whitespace character;
/// an age bound is active whenever it is set, zero included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

fn has_text(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|value| value.chars().any(|c| !c.is_whitespace()))
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Username filter, if active.
    pub fn username_filter(&self) -> Option<&str> {
        has_text(&self.username)
    }

    /// Team name filter, if active.
    pub fn team_name_filter(&self) -> Option<&str> {
        has_text(&self.team_name)
    }

    /// True when no filter is active and the search degrades to a full scan.
    pub fn is_unrestricted(&self) -> bool {
        self.username_filter().is_none()
            && self.team_name_filter().is_none()
            && self.age_goe.is_none()
            && self.age_loe.is_none()
    }
}

/// Read-only row of the member search: a member flattened with its team.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamDto {
    pub member_id: MemberId,
    pub username: Option<String>,
    pub age: Option<i32>,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
}
