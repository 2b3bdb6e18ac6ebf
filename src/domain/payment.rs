use crate::domain::ports::{LineSink, PaymentSystem};
use crate::utils::error::Result;
use crate::utils::format::format_amount;

/// Pre-existing payment provider with its own call shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalPayment;

impl ExternalPayment {
    pub fn new() -> Self {
        Self
    }

    pub fn make_payment(&self, amount: f64, sink: &mut dyn LineSink) -> Result<()> {
        sink.emit(&format!(
            "Payment of {} made using external system.",
            format_amount(amount)
        ))
    }
}

#[derive(Debug)]
pub struct PaymentAdapter {
    external: ExternalPayment,
}

impl PaymentAdapter {
    pub fn new(external: ExternalPayment) -> Self {
        Self { external }
    }
}

impl PaymentSystem for PaymentAdapter {
    fn process_payment(&self, amount: f64, sink: &mut dyn LineSink) -> Result<()> {
        tracing::debug!("Forwarding payment of {} to external system", amount);
        self.external.make_payment(amount, sink)
    }
}
