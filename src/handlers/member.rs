use actix_web::{HttpResponse, ResponseError, Result, web};
use uuid::Uuid;

use crate::models::*;
use crate::services::MemberService;

#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive name search"),
        ("status" = Option<String>, Query, description = "Active, Inactive or all")
    ),
    responses(
        (status = 200, description = "Member list", body = Vec<Member>)
    )
)]
pub async fn list_members(
    member_service: web::Data<MemberService>,
    query: web::Query<MemberQuery>,
) -> Result<HttpResponse> {
    let members = member_service.list(&query.into_inner());
    Ok(HttpResponse::Ok().json(ApiResponse::success(members)))
}

#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Invalid member fields")
    )
)]
pub async fn create_member(
    member_service: web::Data<MemberService>,
    request: web::Json<CreateMemberRequest>,
) -> Result<HttpResponse> {
    match member_service.create(request.into_inner()) {
        Ok(member) => Ok(HttpResponse::Created().json(ApiResponse::success(member))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member found", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    member_service: web::Data<MemberService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match member_service.get(path.into_inner()) {
        Ok(member) => Ok(HttpResponse::Ok().json(ApiResponse::success(member))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    request_body = UpdateMemberRequest,
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 400, description = "Invalid member fields"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    member_service: web::Data<MemberService>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateMemberRequest>,
) -> Result<HttpResponse> {
    match member_service.update(path.into_inner(), request.into_inner()) {
        Ok(member) => Ok(HttpResponse::Ok().json(ApiResponse::success(member))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member deleted"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    member_service: web::Data<MemberService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match member_service.delete(path.into_inner()) {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
            (),
            "Member deleted".to_string(),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/members/stats",
    tag = "members",
    responses(
        (status = 200, description = "Membership dashboard counts", body = DashboardStats)
    )
)]
pub async fn member_stats(member_service: web::Data<MemberService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(member_service.dashboard_stats())))
}

pub fn member_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .route("", web::get().to(list_members))
            .route("", web::post().to(create_member))
            .route("/stats", web::get().to(member_stats))
            .route("/{id}", web::get().to(get_member))
            .route("/{id}", web::put().to(update_member))
            .route("/{id}", web::delete().to(delete_member)),
    );
}
