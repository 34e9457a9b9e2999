use storage::SubmissionStore;
use storage::error::Result;

pub async fn reset(store: &SubmissionStore) -> Result<()> {
    store.reset().await
}
