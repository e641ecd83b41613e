use member_search::domain::member::NewMember;
use member_search::domain::search::{MemberSearchCondition, MemberTeamDto};
use member_search::domain::types::{Age, MemberId, TeamId, Username};
use member_search::pagination::PageRequest;
use member_search::repository::errors::RepositoryError;
use member_search::repository::{MemberReader, MemberWriter, TeamReader};

mod common;

fn usernames(rows: &[MemberTeamDto]) -> Vec<&str> {
    rows.iter()
        .map(|row| row.username.as_deref().unwrap_or_default())
        .collect()
}

#[test]
fn test_member_basic_crud() {
    let test_db = common::TestDb::new("test_member_basic_crud.db");
    let repo = test_db.repo();

    let member = repo
        .create_member(&NewMember::unassigned(
            Username::new("member1").unwrap(),
            Age::new(10).unwrap(),
        ))
        .unwrap();

    let found = repo.get_member_by_id(member.id).unwrap().unwrap();
    assert_eq!(found, member);

    assert_eq!(repo.list_members().unwrap(), vec![member.clone()]);
    assert_eq!(
        repo.list_members_by_username(&Username::new("member1").unwrap())
            .unwrap(),
        vec![member.clone()]
    );
    assert!(
        repo.list_members_by_username(&Username::new("nobody").unwrap())
            .unwrap()
            .is_empty()
    );
    assert_eq!(repo.count_members().unwrap(), 1);
}

#[test]
fn test_missing_member_is_none() {
    let test_db = common::TestDb::new("test_missing_member_is_none.db");
    let repo = test_db.repo();

    let missing = repo.get_member_by_id(MemberId::new(42).unwrap()).unwrap();

    assert!(missing.is_none());
}

#[test]
fn test_search_by_team_and_age_range() {
    let test_db = common::TestDb::new("test_search_by_team_and_age_range.db");
    let repo = test_db.repo();
    let fixture = common::seed_four_members(&repo);

    let condition = MemberSearchCondition::new()
        .age_goe(35)
        .age_loe(40)
        .team_name("teamB");

    let result = repo.search_members(&condition).unwrap();

    assert_eq!(usernames(&result), vec!["member4"]);
    assert_eq!(result[0].team_id, Some(fixture.team_b.id));
    assert_eq!(result[0].team_name.as_deref(), Some("teamB"));
}

#[test]
fn test_empty_condition_is_full_left_join() {
    let test_db = common::TestDb::new("test_empty_condition_is_full_left_join.db");
    let repo = test_db.repo();
    common::seed_four_members(&repo);
    common::create_member(&repo, "loner", 50, None);

    let result = repo.search_members(&MemberSearchCondition::new()).unwrap();

    assert_eq!(
        usernames(&result),
        vec!["member1", "member2", "member3", "member4", "loner"]
    );
    let loner = &result[4];
    assert!(loner.team_id.is_none());
    assert!(loner.team_name.is_none());
}

#[test]
fn test_team_name_filter_excludes_other_and_missing_teams() {
    let test_db = common::TestDb::new("test_team_name_filter.db");
    let repo = test_db.repo();
    common::seed_four_members(&repo);
    common::create_member(&repo, "loner", 35, None);

    let result = repo
        .search_members(&MemberSearchCondition::new().team_name("teamB"))
        .unwrap();

    assert_eq!(usernames(&result), vec!["member3", "member4"]);
    assert!(
        result
            .iter()
            .all(|row| row.team_name.as_deref() == Some("teamB"))
    );
}

#[test]
fn test_age_bounds_are_inclusive() {
    let test_db = common::TestDb::new("test_age_bounds_are_inclusive.db");
    let repo = test_db.repo();
    common::seed_four_members(&repo);

    let result = repo
        .search_members(&MemberSearchCondition::new().age_goe(20).age_loe(30))
        .unwrap();

    assert_eq!(usernames(&result), vec!["member2", "member3"]);
    assert!(
        result
            .iter()
            .all(|row| matches!(row.age, Some(age) if (20..=30).contains(&age)))
    );
}

#[test]
fn test_blank_username_is_ignored() {
    let test_db = common::TestDb::new("test_blank_username_is_ignored.db");
    let repo = test_db.repo();
    common::seed_four_members(&repo);

    let result = repo
        .search_members(&MemberSearchCondition::new().username("   "))
        .unwrap();

    assert_eq!(result.len(), 4);

    let exact = repo
        .search_members(&MemberSearchCondition::new().username("member2"))
        .unwrap();
    assert_eq!(usernames(&exact), vec!["member2"]);
}

#[test]
fn test_search_is_idempotent() {
    let test_db = common::TestDb::new("test_search_is_idempotent.db");
    let repo = test_db.repo();
    common::seed_four_members(&repo);
    let condition = MemberSearchCondition::new().age_goe(15);

    let first = repo.search_members(&condition).unwrap();
    let second = repo.search_members(&condition).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_search_page_simple_first_page() {
    let test_db = common::TestDb::new("test_search_page_simple_first_page.db");
    let repo = test_db.repo();
    common::seed_four_members(&repo);

    let (total, items) = repo
        .search_members_page_simple(
            &MemberSearchCondition::new(),
            PageRequest::new(0, 3).unwrap(),
        )
        .unwrap();

    assert_eq!(total, 4);
    assert_eq!(usernames(&items), vec!["member1", "member2", "member3"]);
}

#[test]
fn test_paging_variants_agree() {
    let test_db = common::TestDb::new("test_paging_variants_agree.db");
    let repo = test_db.repo();
    common::seed_four_members(&repo);
    for i in 5..=11 {
        common::create_member(&repo, &format!("member{i}"), i * 10, None);
    }

    let conditions = [
        MemberSearchCondition::new(),
        MemberSearchCondition::new().team_name("teamA"),
        MemberSearchCondition::new().age_goe(25),
        MemberSearchCondition::new().username("nobody"),
    ];

    for condition in &conditions {
        for size in 1..=5 {
            for page in 0..=4 {
                let request = PageRequest::new(page, size).unwrap();
                let simple = repo.search_members_page_simple(condition, request).unwrap();
                let complex = repo
                    .search_members_page_complex(condition, request)
                    .unwrap();
                assert_eq!(simple, complex, "{condition:?} page={page} size={size}");
            }
        }
    }
}

#[test]
fn test_window_past_the_end_is_empty() {
    let test_db = common::TestDb::new("test_window_past_the_end_is_empty.db");
    let repo = test_db.repo();
    common::seed_four_members(&repo);

    let condition = MemberSearchCondition::new();
    for request in [
        PageRequest::new(2, 2).unwrap(),
        PageRequest::new(1 << 40, 2).unwrap(),
        PageRequest::new(1 << 50, 3).unwrap(),
    ] {
        let simple = repo.search_members_page_simple(&condition, request).unwrap();
        let complex = repo
            .search_members_page_complex(&condition, request)
            .unwrap();

        assert_eq!(simple, (4, vec![]), "{request:?}");
        assert_eq!(complex, (4, vec![]), "{request:?}");
    }
}

#[test]
fn test_change_member_team_updates_both_sides() {
    let test_db = common::TestDb::new("test_change_member_team.db");
    let repo = test_db.repo();
    let fixture = common::seed_four_members(&repo);
    let member1 = &fixture.members[0];

    let moved = repo
        .change_member_team(member1.id, fixture.team_b.id)
        .unwrap();
    assert_eq!(moved.team_id, Some(fixture.team_b.id));

    let team_a_members = repo.list_team_members(fixture.team_a.id).unwrap();
    let team_b_members = repo.list_team_members(fixture.team_b.id).unwrap();
    assert!(team_a_members.iter().all(|m| m.id != member1.id));
    assert!(team_b_members.iter().any(|m| m.id == member1.id));

    let teams = repo.list_teams_with_members().unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].0.id, fixture.team_a.id);
    assert_eq!(teams[0].1.len(), 1);
    assert_eq!(teams[1].1.len(), 3);
}

#[test]
fn test_change_member_team_rejects_unknown_ids() {
    let test_db = common::TestDb::new("test_change_member_team_unknown.db");
    let repo = test_db.repo();
    let fixture = common::seed_four_members(&repo);

    let missing_team = repo.change_member_team(fixture.members[0].id, TeamId::new(999).unwrap());
    assert!(matches!(missing_team, Err(RepositoryError::NotFound)));

    let missing_member =
        repo.change_member_team(MemberId::new(999).unwrap(), fixture.team_a.id);
    assert!(matches!(missing_member, Err(RepositoryError::NotFound)));

    let unchanged = repo.get_member_by_id(fixture.members[0].id).unwrap().unwrap();
    assert_eq!(unchanged.team_id, Some(fixture.team_a.id));
}

#[test]
fn test_team_lookup_and_listing() {
    let test_db = common::TestDb::new("test_team_lookup_and_listing.db");
    let repo = test_db.repo();
    let fixture = common::seed_four_members(&repo);

    let team = repo.get_team_by_id(fixture.team_a.id).unwrap().unwrap();
    assert_eq!(team.name.as_str(), "teamA");
    assert!(repo.get_team_by_id(TeamId::new(999).unwrap()).unwrap().is_none());

    let names: Vec<String> = repo
        .list_teams()
        .unwrap()
        .into_iter()
        .map(|team| team.name.into_inner())
        .collect();
    assert_eq!(names, vec!["teamA", "teamB"]);
}

#[test]
fn test_bulk_delete_by_age() {
    let test_db = common::TestDb::new("test_bulk_delete_by_age.db");
    let repo = test_db.repo();
    common::seed_four_members(&repo);

    let deleted = repo.delete_members_older_than(Age::new(18).unwrap()).unwrap();

    assert_eq!(deleted, 3);
    let remaining = repo.search_members(&MemberSearchCondition::new()).unwrap();
    assert_eq!(usernames(&remaining), vec!["member1"]);
}
