//! Sample data used by local deployments.

use crate::domain::member::NewMember;
use crate::domain::team::NewTeam;
use crate::domain::types::{Age, TeamName, Username};
use crate::repository::{MemberReader, MemberWriter, TeamWriter};
use crate::services::ServiceResult;

pub const SAMPLE_MEMBER_COUNT: i32 = 100;

/// Creates `teamA`, `teamB` and a hundred members on an empty database.
///
/// Member `i` is `member{i}` aged `i`; even members join `teamA`, odd ones
/// `teamB`. Returns the number of members created, zero when members already
/// exist.
pub fn seed_sample_members<R>(repo: &R) -> ServiceResult<usize>
where
    R: MemberReader + MemberWriter + TeamWriter + ?Sized,
{
    if repo.count_members()? > 0 {
        log::info!("Members already present, skipping sample data");
        return Ok(0);
    }

    let team_a = repo.create_team(&NewTeam::new(TeamName::new("teamA")?))?;
    let team_b = repo.create_team(&NewTeam::new(TeamName::new("teamB")?))?;

    for i in 1..=SAMPLE_MEMBER_COUNT {
        let team = if i % 2 == 0 { &team_a } else { &team_b };
        let new_member =
            NewMember::in_team(Username::new(format!("member{i}"))?, Age::new(i)?, team.id);
        repo.create_member(&new_member)?;
    }

    log::info!("Seeded {SAMPLE_MEMBER_COUNT} sample members");
    Ok(SAMPLE_MEMBER_COUNT as usize)
}
