mod dates;
mod result_ext;

pub use dates::{format_date, format_timestamp, parse_day, parse_due_date, validate_days};
pub use result_ext::ResultExt;
