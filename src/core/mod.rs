pub mod engine;
pub mod export;
pub mod submitter;

pub use crate::domain::model::{CollectorAck, Delivery, EmailAddress, Encoding, SignupRecord};
pub use crate::domain::ports::{Collector, ConfigProvider, SignupStore};
pub use crate::utils::error::Result;
