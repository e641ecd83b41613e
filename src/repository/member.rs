//! Repository implementation for members and the member search.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    db::DbConnection,
    domain::{
        member::{Member, NewMember},
        search::{MemberSearchCondition, MemberTeamDto},
        types::{Age, MemberId, TeamId, Username},
    },
    models::member::{Member as DbMember, MemberTeam as DbMemberTeam, NewMember as DbNewMember},
    pagination::{PageRequest, resolve_total},
    repository::{
        DieselRepository, MemberReader, MemberWriter,
        errors::{RepositoryError, RepositoryResult},
        predicate::member_search_predicate,
    },
    schema::{members, teams},
};

fn into_members(rows: Vec<DbMember>) -> RepositoryResult<Vec<Member>> {
    rows.into_iter()
        .map(|row| Member::try_from(row).map_err(RepositoryError::from))
        .collect()
}

fn into_dtos(rows: Vec<DbMemberTeam>) -> RepositoryResult<Vec<MemberTeamDto>> {
    rows.into_iter()
        .map(|row| MemberTeamDto::try_from(row).map_err(RepositoryError::from))
        .collect()
}

/// `members LEFT JOIN teams` narrowed by the search condition, unordered and
/// without a projection.
fn filtered<'a>(
    condition: &MemberSearchCondition,
) -> diesel::dsl::IntoBoxed<'a, diesel::dsl::LeftJoin<members::table, teams::table>, Sqlite> {
    let mut query = members::table.left_join(teams::table).into_boxed::<Sqlite>();
    if let Some(predicate) = member_search_predicate(condition) {
        query = query.filter(predicate);
    }
    query
}

fn load_rows(
    conn: &mut DbConnection,
    condition: &MemberSearchCondition,
    page: Option<PageRequest>,
) -> RepositoryResult<Vec<MemberTeamDto>> {
    let mut query = filtered(condition)
        .select((
            members::id,
            members::username,
            members::age,
            teams::id.nullable(),
            teams::name.nullable(),
        ))
        .order(members::id.asc());

    if let Some(page) = page {
        let offset = i64::try_from(page.offset())
            .map_err(|_| RepositoryError::ValidationError(format!("offset {} out of range", page.offset())))?;
        let limit = i64::try_from(page.size())
            .map_err(|_| RepositoryError::ValidationError(format!("limit {} out of range", page.size())))?;
        query = query.offset(offset).limit(limit);
    }

    let rows = query.load::<DbMemberTeam>(conn)?;
    into_dtos(rows)
}

fn count_rows(conn: &mut DbConnection, condition: &MemberSearchCondition) -> RepositoryResult<usize> {
    let total = filtered(condition).count().get_result::<i64>(conn)?;
    Ok(total as usize)
}

impl MemberReader for DieselRepository {
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        let mut conn = self.conn()?;
        let db_member = members::table
            .find(id.get())
            .first::<DbMember>(&mut conn)
            .optional()?;

        db_member
            .map(|member| Member::try_from(member).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_members(&self) -> RepositoryResult<Vec<Member>> {
        let mut conn = self.conn()?;
        let rows = members::table
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_members(rows)
    }

    fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>> {
        let mut conn = self.conn()?;
        let rows = members::table
            .filter(members::username.eq(username.as_str()))
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_members(rows)
    }

    fn count_members(&self) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let total: i64 = members::table.count().get_result(&mut conn)?;
        Ok(total as usize)
    }

    fn search_members(
        &self,
        condition: &MemberSearchCondition,
    ) -> RepositoryResult<Vec<MemberTeamDto>> {
        let mut conn = self.conn()?;
        load_rows(&mut conn, condition, None)
    }

    fn search_members_page_simple(
        &self,
        condition: &MemberSearchCondition,
        page: PageRequest,
    ) -> RepositoryResult<(usize, Vec<MemberTeamDto>)> {
        self.in_transaction(|conn| {
            let total = count_rows(conn, condition)?;
            let items = load_rows(conn, condition, Some(page))?;
            Ok((total, items))
        })
    }

    fn search_members_page_complex(
        &self,
        condition: &MemberSearchCondition,
        page: PageRequest,
    ) -> RepositoryResult<(usize, Vec<MemberTeamDto>)> {
        let mut conn = self.conn()?;
        let items = load_rows(&mut conn, condition, Some(page))?;
        let total = resolve_total(page, items.len(), || count_rows(&mut conn, condition))?;

        Ok((total, items))
    }
}

impl MemberWriter for DieselRepository {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member> {
        let mut conn = self.conn()?;
        let insertable: DbNewMember = new_member.into();

        let db_member = diesel::insert_into(members::table)
            .values(&insertable)
            .get_result::<DbMember>(&mut conn)?;

        Member::try_from(db_member).map_err(RepositoryError::from)
    }

    fn change_member_team(
        &self,
        member_id: MemberId,
        team_id: TeamId,
    ) -> RepositoryResult<Member> {
        self.in_transaction(|conn| {
            let team_exists = teams::table
                .find(team_id.get())
                .select(teams::id)
                .first::<i32>(conn)
                .optional()?
                .is_some();
            if !team_exists {
                return Err(RepositoryError::NotFound);
            }

            let db_member = diesel::update(members::table.find(member_id.get()))
                .set(members::team_id.eq(Some(team_id.get())))
                .get_result::<DbMember>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            Member::try_from(db_member).map_err(RepositoryError::from)
        })
    }

    fn delete_members_older_than(&self, age: Age) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(members::table.filter(members::age.gt(age.get())))
            .execute(&mut conn)?;

        Ok(deleted)
    }
}
