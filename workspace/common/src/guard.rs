use tracing::warn;

use crate::error::{DashboardError, Result};
use crate::model::User;

/// Fails when any user still points at `bank_id`.
///
/// Full scan over `users`; there is no index to keep consistent.
pub fn ensure_bank_unreferenced(users: &[User], bank_id: i32) -> Result<()> {
    let user_count = users
        .iter()
        .filter(|user| user.bank_id == Some(bank_id))
        .count();

    if user_count > 0 {
        warn!(bank_id, user_count, "Bank is still referenced by users");
        return Err(DashboardError::BankInUse { bank_id, user_count });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32, bank_id: Option<i32>) -> User {
        User {
            id,
            first_name: String::new(),
            last_name: String::new(),
            username: format!("user{}", id),
            email: format!("user{}@x.com", id),
            bank_id,
        }
    }

    #[test]
    fn test_unreferenced_bank_passes() {
        let users = vec![user(1, None), user(2, Some(11))];
        assert!(ensure_bank_unreferenced(&users, 10).is_ok());
    }

    #[test]
    fn test_referenced_bank_reports_user_count() {
        let users = vec![user(1, Some(10)), user(2, Some(10)), user(3, None)];
        let result = ensure_bank_unreferenced(&users, 10);

        assert_eq!(
            result,
            Err(DashboardError::BankInUse {
                bank_id: 10,
                user_count: 2
            })
        );
    }

    #[test]
    fn test_rejection_message() {
        let err = DashboardError::BankInUse {
            bank_id: 10,
            user_count: 1,
        };
        assert_eq!(err.to_string(), "Cannot delete bank with associated users.");
    }

    #[test]
    fn test_empty_user_list_passes() {
        assert!(ensure_bank_unreferenced(&[], 10).is_ok());
    }
}
