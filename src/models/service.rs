use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One recurring service (culto) the church holds.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChurchService {
    #[schema(example = "sunday")]
    pub id: String,
    #[schema(example = "Sunday Service")]
    pub name: String,
    /// Weekday the service recurs on, 0 = Sunday .. 6 = Saturday.
    pub day_of_week: Option<u32>,
}

impl ChurchService {
    /// The catalog every fresh store starts with.
    pub fn defaults() -> Vec<ChurchService> {
        vec![
            ChurchService {
                id: "wednesday".to_string(),
                name: "Wednesday Service".to_string(),
                day_of_week: Some(3),
            },
            ChurchService {
                id: "friday".to_string(),
                name: "Friday Service".to_string(),
                day_of_week: Some(5),
            },
            ChurchService {
                id: "sunday".to_string(),
                name: "Sunday Service".to_string(),
                day_of_week: Some(0),
            },
        ]
    }
}
