mod error;
mod record;
mod validation;

pub use error::{FieldError, FieldErrors, RangeBound};
pub use record::{Draft, FieldName, Record};
pub use validation::{AGE_MAX, AGE_MIN, validate};
