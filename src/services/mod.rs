pub mod attendance_service;
pub mod member_service;
pub mod report_service;

pub use attendance_service::*;
pub use member_service::*;
pub use report_service::*;
