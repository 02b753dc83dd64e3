//! The record submission workflow.

use intake_client::{BackendClient, SubmissionResult};
use intake_core::Record;

use log::debug;

/// Build one record from a single clock read and submit it exactly once.
///
/// Either the store acknowledges exactly this row or the call fails; there
/// is no retry and no partial state to clean up. Returns the submitted
/// record so the caller can report its id.
pub async fn submit_record(client: &BackendClient, table: &str) -> SubmissionResult<Record> {
    let record = Record::now();
    debug!("submitting record {} to table {table}", record.id);

    client.insert_row(table, &record).await?;

    Ok(record)
}
