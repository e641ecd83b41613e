#![allow(dead_code)]

use member_search::db::{DbPool, establish_connection_pool, run_migrations};
use member_search::domain::member::{Member, NewMember};
use member_search::domain::team::{NewTeam, Team};
use member_search::domain::types::{Age, TeamName, Username};
use member_search::repository::{DieselRepository, MemberWriter, TeamWriter};
use tempfile::TempDir;

/// Migrated SQLite database living in a temporary directory for one test.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url).expect("create pool");
        run_migrations(&pool).expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub struct Fixture {
    pub team_a: Team,
    pub team_b: Team,
    pub members: Vec<Member>,
}

pub fn create_team(repo: &DieselRepository, name: &str) -> Team {
    repo.create_team(&NewTeam::new(TeamName::new(name).unwrap()))
        .unwrap()
}

pub fn create_member(repo: &DieselRepository, name: &str, age: i32, team: Option<&Team>) -> Member {
    repo.create_member(&NewMember::new(
        Some(Username::new(name).unwrap()),
        Some(Age::new(age).unwrap()),
        team.map(|team| team.id),
    ))
    .unwrap()
}

/// Four members aged 10/20/30/40: the first two in teamA, the rest in teamB.
pub fn seed_four_members(repo: &DieselRepository) -> Fixture {
    let team_a = create_team(repo, "teamA");
    let team_b = create_team(repo, "teamB");

    let members = vec![
        create_member(repo, "member1", 10, Some(&team_a)),
        create_member(repo, "member2", 20, Some(&team_a)),
        create_member(repo, "member3", 30, Some(&team_b)),
        create_member(repo, "member4", 40, Some(&team_b)),
    ];

    Fixture {
        team_a,
        team_b,
        members,
    }
}
