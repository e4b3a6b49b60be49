use crate::core::{Collector, Delivery, EmailAddress, SignupRecord, SignupStore};
use crate::utils::error::{Result, SubmitError};

/// Drives the validated-submission sequence: parse the raw input, stamp a
/// capture timestamp, then hand the record to exactly one destination —
/// the collector when one is configured, the local store otherwise.
pub struct SignupSubmitter<C: Collector, S: SignupStore> {
    collector: Option<C>,
    store: S,
}

impl<C: Collector, S: SignupStore> SignupSubmitter<C, S> {
    pub fn new(collector: Option<C>, store: S) -> Self {
        Self { collector, store }
    }

    pub fn has_collector(&self) -> bool {
        self.collector.is_some()
    }

    pub async fn submit(&self, raw_input: &str) -> Result<Delivery> {
        let email = EmailAddress::parse(raw_input)?;
        let record = SignupRecord::capture(email);

        match &self.collector {
            Some(collector) => {
                tracing::debug!("Delivering signup to collector");
                let ack = collector.deliver(&record).await?;

                if !ack.is_success() {
                    return Err(SubmitError::RejectedByCollector {
                        message: ack
                            .message
                            .unwrap_or_else(|| "Submission failed".to_string()),
                    });
                }

                Ok(Delivery::Collector)
            }
            None => {
                tracing::debug!("No collector configured, appending to local store");
                self.store.append(record).await?;
                Ok(Delivery::LocalStore)
            }
        }
    }
}
