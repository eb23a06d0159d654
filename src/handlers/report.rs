use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::models::*;
use crate::services::ReportService;

#[utoipa::path(
    get,
    path = "/reports/absences",
    tag = "reports",
    params(
        ("start_date" = String, Query, description = "Window start, YYYY-MM-DD"),
        ("end_date" = String, Query, description = "Window end, YYYY-MM-DD"),
        ("category" = Option<String>, Query, description = "Category filter, or all"),
        ("min_absences" = Option<usize>, Query, description = "Minimum absences, default 1")
    ),
    responses(
        (status = 200, description = "Absence report", body = Vec<AbsenceReportEntry>),
        (status = 400, description = "Malformed date or unknown category")
    )
)]
pub async fn absence_report(
    report_service: web::Data<ReportService>,
    query: web::Query<AbsenceReportQuery>,
) -> Result<HttpResponse> {
    match report_service.generate(&query.into_inner()) {
        Ok(entries) => Ok(HttpResponse::Ok().json(ApiResponse::success(entries))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/reports/absences/export",
    tag = "reports",
    params(
        ("start_date" = String, Query, description = "Window start, YYYY-MM-DD"),
        ("end_date" = String, Query, description = "Window end, YYYY-MM-DD"),
        ("category" = Option<String>, Query, description = "Category filter, or all"),
        ("min_absences" = Option<usize>, Query, description = "Minimum absences, default 1")
    ),
    responses(
        (status = 200, description = "CSV download of the filtered report"),
        (status = 400, description = "Malformed date or unknown category")
    )
)]
pub async fn export_absence_report(
    report_service: web::Data<ReportService>,
    query: web::Query<AbsenceReportQuery>,
) -> Result<HttpResponse> {
    match report_service.export(&query.into_inner()) {
        Ok((filename, csv)) => Ok(HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{filename}\""),
            ))
            .body(csv)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn report_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/absences", web::get().to(absence_report))
            .route("/absences/export", web::get().to(export_absence_report)),
    );
}
