use crate::core::submitter::SignupSubmitter;
use crate::core::{Collector, Delivery, SignupStore};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runner around [`SignupSubmitter`]: logs the submission outcome and,
/// when enabled, process resource stats around the network call.
pub struct SignupEngine<C: Collector, S: SignupStore> {
    submitter: SignupSubmitter<C, S>,
    monitor: SystemMonitor,
}

impl<C: Collector, S: SignupStore> SignupEngine<C, S> {
    pub fn new(submitter: SignupSubmitter<C, S>) -> Self {
        Self {
            submitter,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(submitter: SignupSubmitter<C, S>, enabled: bool) -> Self {
        Self {
            submitter,
            monitor: SystemMonitor::new(enabled),
        }
    }

    pub async fn run(&self, raw_input: &str) -> Result<Delivery> {
        if self.submitter.has_collector() {
            tracing::info!("Submitting signup to the configured collector...");
        } else {
            tracing::info!("No collector configured, capturing signup locally...");
        }
        self.monitor.log_stats("Submit start");

        let delivery = self.submitter.submit(raw_input).await?;

        self.monitor.log_stats("Submit done");
        tracing::info!("Signup accepted by the {}", delivery);

        Ok(delivery)
    }
}
