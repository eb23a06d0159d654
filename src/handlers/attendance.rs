use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::models::*;
use crate::services::AttendanceService;

#[utoipa::path(
    get,
    path = "/services",
    tag = "services",
    responses(
        (status = 200, description = "Service catalog", body = Vec<ChurchService>)
    )
)]
pub async fn list_services(
    attendance_service: web::Data<AttendanceService>,
) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(attendance_service.services())))
}

#[utoipa::path(
    post,
    path = "/attendance",
    tag = "attendance",
    request_body = SaveAttendanceRequest,
    responses(
        (status = 201, description = "Attendance saved", body = SaveAttendanceResponse),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "Unknown service")
    )
)]
pub async fn save_attendance(
    attendance_service: web::Data<AttendanceService>,
    request: web::Json<SaveAttendanceRequest>,
) -> Result<HttpResponse> {
    match attendance_service.save_bulk(request.into_inner()) {
        Ok(response) => Ok(HttpResponse::Created().json(ApiResponse::success(response))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/attendance",
    tag = "attendance",
    params(
        ("start_date" = String, Query, description = "Window start, YYYY-MM-DD"),
        ("end_date" = String, Query, description = "Window end, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Records in the window", body = Vec<AttendanceRecord>),
        (status = 400, description = "Malformed date")
    )
)]
pub async fn list_attendance(
    attendance_service: web::Data<AttendanceService>,
    query: web::Query<AttendanceRangeQuery>,
) -> Result<HttpResponse> {
    match attendance_service.records_between(&query.start_date, &query.end_date) {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(records))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/attendance/stats",
    tag = "attendance",
    params(
        ("service_id" = String, Query, description = "Service id"),
        ("date" = String, Query, description = "Occurrence date, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Presence counts for one occurrence", body = AttendanceStats),
        (status = 400, description = "Malformed date")
    )
)]
pub async fn attendance_stats(
    attendance_service: web::Data<AttendanceService>,
    query: web::Query<AttendanceStatsQuery>,
) -> Result<HttpResponse> {
    match attendance_service.stats_for(&query.service_id, &query.date) {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn service_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/services", web::get().to(list_services));
}

pub fn attendance_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/attendance")
            .route("", web::post().to(save_attendance))
            .route("", web::get().to(list_attendance))
            .route("/stats", web::get().to(attendance_stats)),
    );
}
