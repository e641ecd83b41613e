//! Repository implementation for teams and their members.

use diesel::prelude::*;

use crate::{
    domain::{
        member::Member,
        team::{NewTeam, Team},
        types::TeamId,
    },
    models::{
        member::Member as DbMember,
        team::{NewTeam as DbNewTeam, Team as DbTeam},
    },
    repository::{
        DieselRepository, TeamReader, TeamWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{members, teams},
};

impl TeamWriter for DieselRepository {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team> {
        let mut conn = self.conn()?;
        let insertable: DbNewTeam = new_team.into();

        let db_team = diesel::insert_into(teams::table)
            .values(&insertable)
            .get_result::<DbTeam>(&mut conn)?;

        Team::try_from(db_team).map_err(RepositoryError::from)
    }
}

impl TeamReader for DieselRepository {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>> {
        let mut conn = self.conn()?;
        let db_team = teams::table
            .find(id.get())
            .first::<DbTeam>(&mut conn)
            .optional()?;

        match db_team {
            Some(db_team) => Ok(Some(Team::try_from(db_team).map_err(RepositoryError::from)?)),
            None => Ok(None),
        }
    }

    fn list_teams(&self) -> RepositoryResult<Vec<Team>> {
        let mut conn = self.conn()?;
        teams::table
            .order(teams::id.asc())
            .load::<DbTeam>(&mut conn)?
            .into_iter()
            .map(|team| Team::try_from(team).map_err(RepositoryError::from))
            .collect()
    }

    fn list_team_members(&self, team_id: TeamId) -> RepositoryResult<Vec<Member>> {
        let mut conn = self.conn()?;
        members::table
            .filter(members::team_id.eq(team_id.get()))
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?
            .into_iter()
            .map(|member| Member::try_from(member).map_err(RepositoryError::from))
            .collect()
    }

    fn list_teams_with_members(&self) -> RepositoryResult<Vec<(Team, Vec<Member>)>> {
        self.in_transaction(|conn| {
            let db_teams = teams::table.order(teams::id.asc()).load::<DbTeam>(conn)?;

            let team_ids = db_teams.iter().map(|team| team.id).collect::<Vec<i32>>();

            let db_members = members::table
                .filter(members::team_id.eq_any(team_ids))
                .order(members::id.asc())
                .load::<DbMember>(conn)?;

            db_teams
                .into_iter()
                .map(|db_team| {
                    let team_members = db_members
                        .iter()
                        .filter(|member| member.team_id == Some(db_team.id))
                        .map(|member| {
                            Member::try_from(member.clone()).map_err(RepositoryError::from)
                        })
                        .collect::<Result<Vec<_>, RepositoryError>>()?;

                    let team = Team::try_from(db_team).map_err(RepositoryError::from)?;
                    Ok((team, team_members))
                })
                .collect::<Result<Vec<_>, RepositoryError>>()
        })
    }
}
