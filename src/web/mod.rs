pub mod data;
mod error;
mod log;
pub mod midware;
pub mod routes;
mod serve;

pub use error::{ClientError, Error, Result};
pub use serve::{app_router, serve};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
