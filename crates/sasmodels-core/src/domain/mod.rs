pub mod errors;

pub use errors::{ExitPlaceholder, SasError, SasErrorCategory, SasResult};
