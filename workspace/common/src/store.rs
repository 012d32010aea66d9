//! Dashboard state and the actions that move it forward.
//!
//! Every transition builds a new [`DashboardState`]; the previous value is
//! never touched, so a rejected action simply leaves the caller holding the
//! old state.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::dialog::EditDialog;
use crate::error::Result;
use crate::guard::ensure_bank_unreferenced;
use crate::model::{Bank, BankField, Record, User, UserField};
use crate::source::Resource;

/// Commands accepted by [`DashboardState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    UsersFetched(Vec<User>),
    BanksFetched(Vec<Bank>),
    EditUser(User),
    UpdateUser(UserField),
    SaveUser,
    CancelUser,
    DeleteUser(i32),
    EditBank(Bank),
    UpdateBank(BankField),
    SaveBank,
    CancelBank,
    DeleteBank(i32),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub users: Vec<User>,
    pub banks: Vec<Bank>,
    pub user_dialog: EditDialog<User>,
    pub bank_dialog: EditDialog<Bank>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_user_modal_open(&self) -> bool {
        self.user_dialog.is_open()
    }

    pub fn is_bank_modal_open(&self) -> bool {
        self.bank_dialog.is_open()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user_dialog.draft()
    }

    pub fn current_bank(&self) -> Option<&Bank> {
        self.bank_dialog.draft()
    }

    pub fn bank(&self, bank_id: i32) -> Option<&Bank> {
        self.banks.iter().find(|bank| bank.id == bank_id)
    }

    /// Applies one action and returns the resulting state.
    pub fn apply(&self, action: DashboardAction) -> Result<Self> {
        debug!(?action, "Applying dashboard action");
        let next = match action {
            DashboardAction::UsersFetched(users) => self.append_users(users),
            DashboardAction::BanksFetched(banks) => self.append_banks(banks),
            DashboardAction::EditUser(user) => self.edit_user(&user),
            DashboardAction::UpdateUser(field) => self.update_user(field),
            DashboardAction::SaveUser => self.save_user(),
            DashboardAction::CancelUser => self.cancel_user(),
            DashboardAction::DeleteUser(user_id) => self.delete_user(user_id),
            DashboardAction::EditBank(bank) => self.edit_bank(&bank),
            DashboardAction::UpdateBank(field) => self.update_bank(field),
            DashboardAction::SaveBank => self.save_bank(),
            DashboardAction::CancelBank => self.cancel_bank(),
            DashboardAction::DeleteBank(bank_id) => self.delete_bank(bank_id)?,
        };
        Ok(next)
    }

    pub fn append_users(&self, incoming: Vec<User>) -> Self {
        self.append_users_counted(incoming).0
    }

    /// Like [`append_users`](Self::append_users), also returning how many
    /// records were actually appended.
    pub fn append_users_counted(&self, incoming: Vec<User>) -> (Self, usize) {
        let (users, appended) = append_unique(&self.users, incoming, Resource::Users);
        (
            Self {
                users,
                ..self.clone()
            },
            appended,
        )
    }

    pub fn append_banks(&self, incoming: Vec<Bank>) -> Self {
        self.append_banks_counted(incoming).0
    }

    pub fn append_banks_counted(&self, incoming: Vec<Bank>) -> (Self, usize) {
        let (banks, appended) = append_unique(&self.banks, incoming, Resource::Banks);
        (
            Self {
                banks,
                ..self.clone()
            },
            appended,
        )
    }

    /// Opens the user dialog on `user`. An open dialog is retargeted and its
    /// unsaved draft discarded.
    pub fn edit_user(&self, user: &User) -> Self {
        if self.user_dialog.is_open() {
            debug!(user_id = user.id, "Replacing open user draft");
        }
        Self {
            user_dialog: EditDialog::open(user),
            ..self.clone()
        }
    }

    pub fn update_user(&self, field: UserField) -> Self {
        Self {
            user_dialog: self.user_dialog.update(field),
            ..self.clone()
        }
    }

    pub fn save_user(&self) -> Self {
        match self.user_dialog.commit(&self.users) {
            Some(users) => Self {
                users,
                user_dialog: EditDialog::Closed,
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    pub fn cancel_user(&self) -> Self {
        Self {
            user_dialog: EditDialog::Closed,
            ..self.clone()
        }
    }

    pub fn delete_user(&self, user_id: i32) -> Self {
        Self {
            users: self
                .users
                .iter()
                .filter(|user| user.id != user_id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Opens the bank dialog on `bank`, discarding any unsaved draft.
    pub fn edit_bank(&self, bank: &Bank) -> Self {
        if self.bank_dialog.is_open() {
            debug!(bank_id = bank.id, "Replacing open bank draft");
        }
        Self {
            bank_dialog: EditDialog::open(bank),
            ..self.clone()
        }
    }

    pub fn update_bank(&self, field: BankField) -> Self {
        Self {
            bank_dialog: self.bank_dialog.update(field),
            ..self.clone()
        }
    }

    pub fn save_bank(&self) -> Self {
        match self.bank_dialog.commit(&self.banks) {
            Some(banks) => Self {
                banks,
                bank_dialog: EditDialog::Closed,
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    pub fn cancel_bank(&self) -> Self {
        Self {
            bank_dialog: EditDialog::Closed,
            ..self.clone()
        }
    }

    /// Removes the bank unless a user still references it.
    pub fn delete_bank(&self, bank_id: i32) -> Result<Self> {
        ensure_bank_unreferenced(&self.users, bank_id)?;
        Ok(Self {
            banks: self
                .banks
                .iter()
                .filter(|bank| bank.id != bank_id)
                .cloned()
                .collect(),
            ..self.clone()
        })
    }
}

/// Appends records in order, skipping ids already present.
///
/// Returns the merged collection and the number of records appended.
fn append_unique<T: Record>(existing: &[T], incoming: Vec<T>, resource: Resource) -> (Vec<T>, usize) {
    let mut seen: HashSet<i32> = existing.iter().map(Record::id).collect();
    let mut merged = existing.to_vec();

    for record in incoming {
        if seen.insert(record.id()) {
            merged.push(record);
        } else {
            warn!(
                id = record.id(),
                collection = resource.label(),
                "Skipping record with duplicate id"
            );
        }
    }

    let appended = merged.len() - existing.len();
    debug!(appended, collection = resource.label(), "Appended fetched records");
    (merged, appended)
}
