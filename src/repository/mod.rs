use diesel::Connection;

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::member::{Member, NewMember};
use crate::domain::search::{MemberSearchCondition, MemberTeamDto};
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::{Age, MemberId, TeamId, Username};
use crate::pagination::PageRequest;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod errors;
pub mod member;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod predicate;
pub mod team;

/// Diesel-backed implementation of every repository trait.
///
/// Cloning is cheap: clones share the underlying connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }

    /// Runs `f` inside a single transaction on one pooled connection.
    ///
    /// Commits when `f` returns `Ok`, rolls back otherwise.
    pub(crate) fn in_transaction<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut DbConnection) -> RepositoryResult<T>,
    {
        let mut conn = self.conn()?;
        conn.transaction::<T, RepositoryError, _>(f)
    }
}

pub trait MemberReader {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
    fn list_members(&self) -> RepositoryResult<Vec<Member>>;
    fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>>;
    fn count_members(&self) -> RepositoryResult<usize>;
    fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeamDto>>;
    /// Paged search whose count always runs next to the content query.
    fn search_members_page_simple(
        &self,
        condition: &MemberSearchCondition,
        page: PageRequest,
    ) -> RepositoryResult<(usize, Vec<MemberTeamDto>)>;
    /// Paged search whose count runs separately and only when the page
    /// content cannot determine the total.
    fn search_members_page_complex(
        &self,
        condition: &MemberSearchCondition,
        page: PageRequest,
    ) -> RepositoryResult<(usize, Vec<MemberTeamDto>)>;
}

pub trait MemberWriter {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
    fn change_member_team(&self, member_id: MemberId, team_id: TeamId)
    -> RepositoryResult<Member>;
    fn delete_members_older_than(&self, age: Age) -> RepositoryResult<usize>;
}

pub trait TeamReader {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
    fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
    fn list_team_members(&self, team_id: TeamId) -> RepositoryResult<Vec<Member>>;
    fn list_teams_with_members(&self) -> RepositoryResult<Vec<(Team, Vec<Member>)>>;
}

pub trait TeamWriter {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
}
