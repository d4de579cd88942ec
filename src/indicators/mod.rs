pub mod deviation;
pub mod error;
pub mod parser;

pub use deviation::deviation_metric;
pub use error::EvaluationError;
pub use parser::parse_bulk_response;
