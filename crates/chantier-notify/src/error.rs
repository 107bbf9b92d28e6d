use chantier_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}
