use std::path::Path;

use crate::core::SignupStore;
use crate::utils::error::Result;

/// Write the locally stored signups to a CSV file (`email,timestamp`
/// header). Returns the number of records written.
pub async fn export_csv<S: SignupStore>(store: &S, output_path: &str) -> Result<usize> {
    let records = store.load().await?;

    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record(["email", "timestamp"])?;
    for record in &records {
        let timestamp = record.wire_timestamp();
        writer.write_record([record.email.as_str(), timestamp.as_str()])?;
    }
    writer.flush()?;

    Ok(records.len())
}
