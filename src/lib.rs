pub mod api;
pub mod config;
pub mod error;
pub mod karyotype;
pub mod links;
pub mod optimizer;
pub mod order;
pub mod scorer;
pub mod selection;

pub use self::error::{OrResult, OrderError};
