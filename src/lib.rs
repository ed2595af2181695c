pub mod catalog;
pub mod encoder;
pub mod error;
pub mod io;
pub mod report;
pub mod search;
pub mod space;
pub mod types;

pub use error::{Error, Result};
