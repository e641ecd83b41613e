//! Diesel models representing members and the member/team search row.

use diesel::prelude::*;

use crate::domain::member::{Member as DomainMember, NewMember as DomainNewMember};
use crate::domain::search::MemberTeamDto;
use crate::domain::types::{Age, MemberId, TeamId, TypeConstraintError, Username};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::members)]
/// Diesel model for [`crate::domain::member::Member`].
pub struct Member {
    pub id: i32,
    pub username: Option<String>,
    pub age: Option<i32>,
    pub team_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
/// Insertable form of [`Member`].
pub struct NewMember<'a> {
    pub username: Option<&'a str>,
    pub age: Option<i32>,
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, Queryable)]
/// Row selected from `members LEFT JOIN teams`.
pub struct MemberTeam {
    pub member_id: i32,
    pub username: Option<String>,
    pub age: Option<i32>,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl TryFrom<Member> for DomainMember {
    type Error = TypeConstraintError;

    fn try_from(member: Member) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MemberId::try_from(member.id)?,
            username: member.username.map(Username::new).transpose()?,
            age: member.age.map(Age::new).transpose()?,
            team_id: member.team_id.map(TeamId::new).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewMember> for NewMember<'a> {
    fn from(member: &'a DomainNewMember) -> Self {
        Self {
            username: member.username.as_ref().map(Username::as_str),
            age: member.age.map(Age::get),
            team_id: member.team_id.map(TeamId::get),
        }
    }
}

impl TryFrom<MemberTeam> for MemberTeamDto {
    type Error = TypeConstraintError;

    fn try_from(row: MemberTeam) -> Result<Self, Self::Error> {
        Ok(Self {
            member_id: MemberId::try_from(row.member_id)?,
            username: row.username,
            age: row.age,
            team_id: row.team_id.map(TeamId::new).transpose()?,
            team_name: row.team_name,
        })
    }
}
