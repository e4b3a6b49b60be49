use crate::domain::model::{CollectorAck, Encoding, SignupRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote destination for captured signups.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Deliver a record and return the collector's acknowledgment.
    /// Transport failures and non-2xx responses are errors; interpreting
    /// the acknowledgment's status is the caller's concern.
    async fn deliver(&self, record: &SignupRecord) -> Result<CollectorAck>;
}

/// Local append-only fallback store. Insertion order is capture order;
/// duplicate emails are accepted.
pub trait SignupStore: Send + Sync {
    fn load(&self) -> impl std::future::Future<Output = Result<Vec<SignupRecord>>> + Send;
    fn append(
        &self,
        record: SignupRecord,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// `None` means no collector is configured and signups go to the
    /// local store instead.
    fn collector_endpoint(&self) -> Option<&str>;
    fn encoding(&self) -> Encoding;
    fn timeout_seconds(&self) -> u64;
    fn store_path(&self) -> &str;
    fn namespace(&self) -> &str;
}
