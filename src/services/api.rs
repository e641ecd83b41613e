use crate::domain::search::{MemberSearchCondition, MemberTeamDto};
use crate::domain::team::TeamWithMembers;
use crate::forms::FormError;
use crate::forms::member::MemberSearchForm;
use crate::pagination::{Page, PageRequest};
use crate::repository::{MemberReader, TeamReader};
use crate::services::{ServiceError, ServiceResult};

fn rejected(err: FormError) -> ServiceError {
    log::warn!("Rejected member search: {err}");
    ServiceError::from(err)
}

fn paged_form(form: MemberSearchForm) -> ServiceResult<(MemberSearchCondition, PageRequest)> {
    form.into_parts().map_err(rejected)
}

/// Returns every member matching the form's filters, unpaged.
pub fn search_members<R>(repo: &R, form: MemberSearchForm) -> ServiceResult<Vec<MemberTeamDto>>
where
    R: MemberReader + ?Sized,
{
    let condition = form.into_condition().map_err(rejected)?;

    repo.search_members(&condition).map_err(ServiceError::from)
}

/// Returns one page of matching members; the total is counted alongside.
pub fn search_members_page_simple<R>(
    repo: &R,
    form: MemberSearchForm,
) -> ServiceResult<Page<MemberTeamDto>>
where
    R: MemberReader + ?Sized,
{
    let (condition, page) = paged_form(form)?;

    let (total, members) = repo
        .search_members_page_simple(&condition, page)
        .map_err(ServiceError::from)?;

    Ok(Page::new(members, page, total))
}

/// Returns one page of matching members; the total is counted only when the
/// page itself cannot determine it.
pub fn search_members_page_complex<R>(
    repo: &R,
    form: MemberSearchForm,
) -> ServiceResult<Page<MemberTeamDto>>
where
    R: MemberReader + ?Sized,
{
    let (condition, page) = paged_form(form)?;

    let (total, members) = repo
        .search_members_page_complex(&condition, page)
        .map_err(ServiceError::from)?;

    Ok(Page::new(members, page, total))
}

/// Lists every team with the members currently assigned to it.
pub fn list_teams<R>(repo: &R) -> ServiceResult<Vec<TeamWithMembers>>
where
    R: TeamReader + ?Sized,
{
    let teams = repo.list_teams_with_members().map_err(|err| {
        log::error!("Failed to list teams: {err}");
        ServiceError::from(err)
    })?;

    Ok(teams.into_iter().map(TeamWithMembers::from).collect())
}
