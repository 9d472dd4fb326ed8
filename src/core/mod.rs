pub mod error;
pub mod record;
pub mod traits;

pub use error::{AppError, Result};
pub use record::{new_record_id, parse_calendar_date};
pub use traits::Repository;
