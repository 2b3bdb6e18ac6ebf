pub mod demonstration;

pub use crate::domain::ports::{LineSink, PaymentSystem};
pub use crate::utils::error::Result;
