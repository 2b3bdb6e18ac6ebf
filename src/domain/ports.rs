use crate::utils::error::Result;

/// Destination for the line-oriented demonstration output.
pub trait LineSink {
    fn emit(&mut self, line: &str) -> Result<()>;
}

/// Target interface the university code pays through.
pub trait PaymentSystem {
    fn process_payment(&self, amount: f64, sink: &mut dyn LineSink) -> Result<()>;
}
