pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::aggregate_daily_commits;
pub use exec::exec;
pub use output::{output_chart, output_json, output_ndjson};
