use crate::config::scenario::Scenario;
use crate::core::{LineSink, PaymentSystem, Result};
use crate::domain::factory::factory_for;
use crate::domain::payment::{ExternalPayment, PaymentAdapter};
use crate::domain::system::UniversitySystem;
use crate::utils::validation::Validate;

/// Counts of what a run printed, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub people: usize,
    pub payments: usize,
    pub department_members: usize,
}

pub struct Demonstration<P: PaymentSystem> {
    scenario: Scenario,
    payments: P,
}

impl Demonstration<PaymentAdapter> {
    /// Pays through the adapted external system.
    pub fn new(scenario: Scenario) -> Self {
        Self::with_payment_system(scenario, PaymentAdapter::new(ExternalPayment::new()))
    }
}

impl<P: PaymentSystem> Demonstration<P> {
    pub fn with_payment_system(scenario: Scenario, payments: P) -> Self {
        Self { scenario, payments }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn run(&self, sink: &mut dyn LineSink) -> Result<RunSummary> {
        self.scenario.validate()?;
        tracing::info!("Starting scenario '{}'", self.scenario.scenario.name);

        // Singleton
        UniversitySystem::instance().display_message(sink)?;

        // Factory
        for person in &self.scenario.people {
            tracing::debug!("Creating {} through its factory", person.kind);
            let created = factory_for(person.kind).create_person(&person.name);
            created.display_info(sink)?;
        }

        // Adapter
        for payment in &self.scenario.payments {
            self.payments.process_payment(payment.amount, sink)?;
        }

        // Composite
        let mut department_members = 0;
        if let Some(department) = self.scenario.build_department()? {
            department_members = department.len();
            department.display_details(sink)?;
        } else {
            tracing::debug!("Scenario has no department, skipping composite walkthrough");
        }

        let summary = RunSummary {
            people: self.scenario.people.len(),
            payments: self.scenario.payments.len(),
            department_members,
        };
        tracing::info!(
            "✅ Scenario finished: {} people, {} payments, {} department members",
            summary.people,
            summary.payments,
            summary.department_members
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::MemorySink;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPayments {
        amounts: RefCell<Vec<f64>>,
    }

    impl PaymentSystem for RecordingPayments {
        fn process_payment(&self, amount: f64, _sink: &mut dyn LineSink) -> Result<()> {
            self.amounts.borrow_mut().push(amount);
            Ok(())
        }
    }

    #[test]
    fn test_default_run_summary() {
        let mut sink = MemorySink::new();
        let summary = Demonstration::new(Scenario::default()).run(&mut sink).unwrap();
        assert_eq!(
            summary,
            RunSummary {
                people: 3,
                payments: 1,
                department_members: 2,
            }
        );
        assert_eq!(sink.lines().len(), 8);
    }

    #[test]
    fn test_payments_go_through_injected_system() {
        let mut scenario = Scenario::default();
        scenario.payments.push(crate::config::scenario::PaymentConfig { amount: -3.0 });

        let demo = Demonstration::with_payment_system(scenario, RecordingPayments::default());
        let mut sink = MemorySink::new();
        demo.run(&mut sink).unwrap();

        assert_eq!(*demo.payments.amounts.borrow(), vec![100.0, -3.0]);
        assert!(!sink.lines().iter().any(|l| l.starts_with("Payment of")));
    }

    #[test]
    fn test_invalid_scenario_prints_nothing() {
        let mut scenario = Scenario::default();
        scenario.people[0].name.clear();
        let mut sink = MemorySink::new();
        assert!(Demonstration::new(scenario).run(&mut sink).is_err());
        assert!(sink.lines().is_empty());
    }
}
