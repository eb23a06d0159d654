pub mod attendance;
pub mod common;
pub mod member;
pub mod report;
pub mod service;

pub use attendance::*;
pub use common::*;
pub use member::*;
pub use report::*;
pub use service::*;
