//! The sample services. Each module exposes the component name it is
//! registered under (`NAME`) and a `spec` function binding its routines.

pub mod cache;
pub mod error;
pub mod settings;
pub mod worker;

pub use error::ServiceError;
