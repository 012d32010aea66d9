use thiserror::Error;

/// Errors raised by dashboard state transitions and payload decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// The bank is still referenced by at least one user
    #[error("Cannot delete bank with associated users.")]
    BankInUse { bank_id: i32, user_count: usize },

    /// The random-data payload could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
