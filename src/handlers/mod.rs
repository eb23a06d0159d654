pub mod attendance;
pub mod member;
pub mod report;

pub use attendance::{attendance_config, service_config};
pub use member::member_config;
pub use report::report_config;
