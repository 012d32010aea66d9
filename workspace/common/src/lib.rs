//! Browser-independent core of the bank dashboard.
//!
//! Holds the user/bank model, the dashboard state store with its edit dialogs,
//! the delete-time integrity guard and the description of the random-data
//! source. The frontend crate renders this state and feeds it actions.

mod dialog;
mod error;
mod guard;
mod model;
mod source;
mod store;

#[cfg(test)]
mod tests;

pub use dialog::EditDialog;
pub use error::{DashboardError, Result};
pub use guard::ensure_bank_unreferenced;
pub use model::{Bank, BankField, Record, User, UserField, parse_bank_selection};
pub use source::{
    DEFAULT_BASE_URL, DEFAULT_INITIAL_BATCH_SIZE, RandomDataSource, Resource, decode_records,
};
pub use store::{DashboardAction, DashboardState};
