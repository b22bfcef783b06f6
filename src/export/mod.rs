mod model;
mod routes;

pub use model::to_csv;
pub use model::ExportError;
pub use routes::router;

pub const CSV_FILE_NAME: &str = "oura_data.csv";
