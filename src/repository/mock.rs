//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::member::{Member, NewMember};
use crate::domain::search::{MemberSearchCondition, MemberTeamDto};
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::{Age, MemberId, TeamId, Username};
use crate::pagination::PageRequest;
use crate::repository::errors::RepositoryResult;
use crate::repository::{MemberReader, MemberWriter, TeamReader, TeamWriter};

mock! {
    pub Repository {}

    impl MemberReader for Repository {
        fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
        fn list_members(&self) -> RepositoryResult<Vec<Member>>;
        fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>>;
        fn count_members(&self) -> RepositoryResult<usize>;
        fn search_members(
            &self,
            condition: &MemberSearchCondition,
        ) -> RepositoryResult<Vec<MemberTeamDto>>;
        fn search_members_page_simple(
            &self,
            condition: &MemberSearchCondition,
            page: PageRequest,
        ) -> RepositoryResult<(usize, Vec<MemberTeamDto>)>;
        fn search_members_page_complex(
            &self,
            condition: &MemberSearchCondition,
            page: PageRequest,
        ) -> RepositoryResult<(usize, Vec<MemberTeamDto>)>;
    }

    impl MemberWriter for Repository {
        fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
        fn change_member_team(
            &self,
            member_id: MemberId,
            team_id: TeamId,
        ) -> RepositoryResult<Member>;
        fn delete_members_older_than(&self, age: Age) -> RepositoryResult<usize>;
    }

    impl TeamReader for Repository {
        fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
        fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
        fn list_team_members(&self, team_id: TeamId) -> RepositoryResult<Vec<Member>>;
        fn list_teams_with_members(&self) -> RepositoryResult<Vec<(Team, Vec<Member>)>>;
    }

    impl TeamWriter for Repository {
        fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
    }
}
