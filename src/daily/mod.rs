mod model;
mod routes;

pub use model::merge_days;
pub use model::DailyRecord;
pub use routes::organize;
pub use routes::router;
