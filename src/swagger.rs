use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::member::list_members,
        handlers::member::create_member,
        handlers::member::get_member,
        handlers::member::update_member,
        handlers::member::delete_member,
        handlers::member::member_stats,
        handlers::attendance::list_services,
        handlers::attendance::save_attendance,
        handlers::attendance::list_attendance,
        handlers::attendance::attendance_stats,
        handlers::report::absence_report,
        handlers::report::export_absence_report,
    ),
    components(
        schemas(
            Member,
            CreateMemberRequest,
            UpdateMemberRequest,
            DashboardStats,
            Gender,
            MemberCategory,
            MemberStatus,
            ChurchRole,
            ChurchService,
            AttendanceRecord,
            AttendanceMark,
            SaveAttendanceRequest,
            SaveAttendanceResponse,
            AttendanceStats,
            AbsenceReportEntry,
            ApiError,
        )
    ),
    tags(
        (name = "members", description = "Member management API"),
        (name = "services", description = "Service catalog API"),
        (name = "attendance", description = "Attendance recording API"),
        (name = "reports", description = "Absence report API"),
    ),
    info(
        title = "CAMS Backend API",
        version = "1.0.0",
        description = "Church attendance management REST API documentation",
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
