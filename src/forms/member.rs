use serde::Deserialize;
use validator::Validate;

use crate::domain::search::MemberSearchCondition;
use crate::forms::FormError;
use crate::pagination::{DEFAULT_PAGE_SIZE, PageRequest};

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Search filters and paging window read from the query string.
pub struct MemberSearchForm {
    pub username: Option<String>,
    pub team_name: Option<String>,
    /// Inclusive lower age bound.
    #[validate(range(min = 0))]
    pub age_goe: Option<i32>,
    /// Inclusive upper age bound.
    #[validate(range(min = 0))]
    pub age_loe: Option<i32>,
    /// Zero-based page number, ignored by unpaged searches.
    pub page: Option<usize>,
    /// Page size in `1..=MAX_PAGE_SIZE`, ignored by unpaged searches.
    pub size: Option<usize>,
}

impl MemberSearchForm {
    /// Validate the filters only; paging parameters are not looked at.
    pub fn into_condition(self) -> Result<MemberSearchCondition, FormError> {
        self.validate()?;

        Ok(MemberSearchCondition {
            username: self.username,
            team_name: self.team_name,
            age_goe: self.age_goe,
            age_loe: self.age_loe,
        })
    }

    /// Validate the form and split it into a search condition and a page.
    pub fn into_parts(self) -> Result<(MemberSearchCondition, PageRequest), FormError> {
        let page = PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )?;

        Ok((self.into_condition()?, page))
    }
}
