pub mod category;
pub mod field;
pub mod reading;
pub mod report;
pub mod result;

pub use category::{Category, EmissionFormula};
pub use field::{FieldError, FieldErrorKind, InputField, ValueRange};
pub use reading::ReadingSet;
pub use report::FootprintReport;
pub use result::{CategoryResult, Verdict};
