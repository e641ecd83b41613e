//! Dynamic predicates for the member search.
//!
//! Every optional field of a [`MemberSearchCondition`] maps to an optional
//! predicate over `members LEFT JOIN teams`; the present ones are folded with
//! `AND`. No predicate at all means the search is unrestricted.

use diesel::helper_types::LeftJoinQuerySource;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable};
use diesel::sqlite::Sqlite;

use crate::domain::search::MemberSearchCondition;
use crate::schema::{members, teams};

/// Query source every member search runs against.
pub type MemberTeamSource = LeftJoinQuerySource<members::table, teams::table>;

/// Boxed boolean condition over [`MemberTeamSource`].
pub type MemberPredicate =
    Box<dyn BoxableExpression<MemberTeamSource, Sqlite, SqlType = Nullable<Bool>>>;

pub fn username_eq(username: Option<&str>) -> Option<MemberPredicate> {
    username.map(|username| -> MemberPredicate {
        Box::new(members::username.eq(username.to_string()))
    })
}

pub fn team_name_eq(team_name: Option<&str>) -> Option<MemberPredicate> {
    // Right-hand side of a left join is only selectable once made nullable.
    team_name.map(|team_name| -> MemberPredicate {
        Box::new(teams::name.nullable().eq(team_name.to_string()))
    })
}

pub fn age_goe(age: Option<i32>) -> Option<MemberPredicate> {
    age.map(|age| -> MemberPredicate { Box::new(members::age.ge(age)) })
}

pub fn age_loe(age: Option<i32>) -> Option<MemberPredicate> {
    age.map(|age| -> MemberPredicate { Box::new(members::age.le(age)) })
}

/// Conjunction of every active filter in `condition`, in a fixed order.
pub fn member_search_predicate(condition: &MemberSearchCondition) -> Option<MemberPredicate> {
    [
        username_eq(condition.username_filter()),
        team_name_eq(condition.team_name_filter()),
        age_goe(condition.age_goe),
        age_loe(condition.age_loe),
    ]
    .into_iter()
    .flatten()
    .reduce(|acc, predicate| -> MemberPredicate { Box::new(acc.and(predicate)) })
}
