use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::member::MemberSearchForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::api as api_service;

#[get("/v1/members")]
pub async fn search_members_v1(
    params: web::Query<MemberSearchForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::search_members(repo.get_ref(), params.into_inner()) {
        Ok(members) => HttpResponse::Ok().json(members),
        Err(err) => error_response(err),
    }
}

#[get("/v2/members")]
pub async fn search_members_v2(
    params: web::Query<MemberSearchForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::search_members_page_simple(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}

#[get("/v3/members")]
pub async fn search_members_v3(
    params: web::Query<MemberSearchForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::search_members_page_complex(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}

#[get("/v1/teams")]
pub async fn list_teams_v1(repo: web::Data<DieselRepository>) -> impl Responder {
    match api_service::list_teams(repo.get_ref()) {
        Ok(teams) => HttpResponse::Ok().json(teams),
        Err(err) => error_response(err),
    }
}
