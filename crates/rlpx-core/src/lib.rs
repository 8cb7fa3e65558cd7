pub mod config;
pub mod dispatch;
pub mod error;
pub mod request;

pub use dispatch::{execute, handle};
pub use error::{RlpxError, RlpxResult};
pub use request::{Operation, Request};
