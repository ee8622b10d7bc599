pub mod errors;
pub mod formatting;
pub mod ids;
pub mod source;
pub mod statistics;

pub use errors::StatisticsError;
pub use ids::GridId;
pub use source::StatisticsSource;
