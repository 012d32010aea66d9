#[cfg(test)]
mod scenario_tests {
    use crate::{
        Bank, BankField, DEFAULT_INITIAL_BATCH_SIZE, DashboardAction, DashboardError,
        DashboardState, RandomDataSource, Resource, User, UserField, decode_records,
    };

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn users_payload(ids: std::ops::RangeInclusive<i32>) -> String {
        let users: Vec<serde_json::Value> = ids
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "uid": format!("uid-{}", id),
                    "first_name": format!("First{}", id),
                    "last_name": format!("Last{}", id),
                    "username": format!("user{}", id),
                    "email": format!("user{}@email.com", id),
                    "gender": "Agender",
                })
            })
            .collect();
        serde_json::to_string(&users).unwrap()
    }

    fn banks_payload(ids: std::ops::RangeInclusive<i32>) -> String {
        let banks: Vec<serde_json::Value> = ids
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "account_number": format!("{:010}", id),
                    "iban": format!("GB{:020}", id),
                    "bank_name": format!("Bank {}", id),
                    "routing_number": format!("{:09}", id),
                    "swift_bic": format!("BANK{:04}", id),
                })
            })
            .collect();
        serde_json::to_string(&banks).unwrap()
    }

    fn loaded_state() -> DashboardState {
        let size = DEFAULT_INITIAL_BATCH_SIZE as i32;
        let users: Vec<User> = decode_records(&users_payload(1..=size)).unwrap();
        let banks: Vec<Bank> = decode_records(&banks_payload(101..=100 + size)).unwrap();

        // Resolution order of the two initial loads is irrelevant.
        DashboardState::new()
            .apply(DashboardAction::BanksFetched(banks))
            .unwrap()
            .apply(DashboardAction::UsersFetched(users))
            .unwrap()
    }

    #[test]
    fn test_default_initial_batches_fill_five_of_each() {
        init_tracing();
        assert_eq!(DEFAULT_INITIAL_BATCH_SIZE, 5);
        let source = RandomDataSource::default();
        assert!(
            source
                .url(Resource::Users, DEFAULT_INITIAL_BATCH_SIZE)
                .ends_with("size=5")
        );

        let state = loaded_state();

        assert_eq!(state.users.len(), 5);
        assert_eq!(state.banks.len(), 5);
    }

    #[test]
    fn test_add_users_appends_exactly_n() {
        init_tracing();
        let state = loaded_state();
        let before = state.users.clone();

        let extra: Vec<User> = decode_records(&users_payload(6..=8)).unwrap();
        let next = state.apply(DashboardAction::UsersFetched(extra)).unwrap();

        assert_eq!(next.users.len(), before.len() + 3);
        assert_eq!(&next.users[..before.len()], &before[..]);
        assert_eq!(next.users[5].id, 6);
    }

    #[test]
    fn test_add_single_bank_from_object_payload() {
        init_tracing();
        let state = loaded_state();
        let body = r#"{"id": 106, "bank_name": "Solo", "routing_number": "1", "swift_bic": "SOLO"}"#;

        let extra: Vec<Bank> = decode_records(body).unwrap();
        let next = state.apply(DashboardAction::BanksFetched(extra)).unwrap();

        assert_eq!(next.banks.len(), 6);
        assert_eq!(next.banks.last().map(|b| b.bank_name.as_str()), Some("Solo"));
    }

    #[test]
    fn test_referenced_banks_cannot_be_deleted() {
        init_tracing();
        let mut state = loaded_state();
        for (user_id, bank_id) in [(1, 101), (2, 101), (3, 103)] {
            let target = state.users.iter().find(|u| u.id == user_id).cloned().unwrap();
            state = state
                .apply(DashboardAction::EditUser(target))
                .unwrap()
                .apply(DashboardAction::UpdateUser(UserField::BankId(Some(bank_id))))
                .unwrap()
                .apply(DashboardAction::SaveUser)
                .unwrap();
        }

        for bank_id in [101, 103] {
            let result = state.apply(DashboardAction::DeleteBank(bank_id));
            assert!(matches!(result, Err(DashboardError::BankInUse { .. })));
        }
        assert_eq!(state.banks.len(), 5);
    }

    #[test]
    fn test_unreferenced_bank_is_removed_alone() {
        init_tracing();
        let state = loaded_state();

        let next = state.apply(DashboardAction::DeleteBank(102)).unwrap();

        let ids: Vec<i32> = next.banks.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![101, 103, 104, 105]);
        for bank in &next.banks {
            assert_eq!(Some(bank), state.bank(bank.id));
        }
    }

    #[test]
    fn test_edit_email_then_save() {
        init_tracing();
        let state = loaded_state();
        let target = state.users[2].clone();

        let next = state
            .apply(DashboardAction::EditUser(target.clone()))
            .unwrap()
            .apply(DashboardAction::UpdateUser(UserField::Email("new@x.com".to_string())))
            .unwrap()
            .apply(DashboardAction::SaveUser)
            .unwrap();

        let matching: Vec<&User> = next.users.iter().filter(|u| u.id == target.id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(
            *matching[0],
            User {
                email: "new@x.com".to_string(),
                ..target.clone()
            }
        );
        for (old, new) in state.users.iter().zip(next.users.iter()) {
            if old.id != target.id {
                assert_eq!(old, new);
            }
        }
        assert!(!next.is_user_modal_open());
        assert!(next.current_user().is_none());
    }

    #[test]
    fn test_cancel_leaves_collections_byte_identical() {
        init_tracing();
        let state = loaded_state();
        let users_before = serde_json::to_string(&state.users).unwrap();
        let banks_before = serde_json::to_string(&state.banks).unwrap();

        let next = state
            .apply(DashboardAction::EditUser(state.users[0].clone()))
            .unwrap()
            .apply(DashboardAction::UpdateUser(UserField::FirstName(String::new())))
            .unwrap()
            .apply(DashboardAction::CancelUser)
            .unwrap()
            .apply(DashboardAction::EditBank(state.banks[0].clone()))
            .unwrap()
            .apply(DashboardAction::UpdateBank(BankField::SwiftBic("CHANGED".to_string())))
            .unwrap()
            .apply(DashboardAction::CancelBank)
            .unwrap();

        assert_eq!(serde_json::to_string(&next.users).unwrap(), users_before);
        assert_eq!(serde_json::to_string(&next.banks).unwrap(), banks_before);
        assert!(!next.is_user_modal_open());
        assert!(!next.is_bank_modal_open());
    }

    #[test]
    fn test_assign_bank_then_delete_is_rejected() {
        init_tracing();
        let state = DashboardState::new()
            .apply(DashboardAction::UsersFetched(vec![User {
                id: 1,
                first_name: String::new(),
                last_name: String::new(),
                username: String::new(),
                email: "a@x.com".to_string(),
                bank_id: None,
            }]))
            .unwrap()
            .apply(DashboardAction::BanksFetched(vec![Bank {
                id: 10,
                bank_name: "Acme".to_string(),
                routing_number: String::new(),
                swift_bic: String::new(),
            }]))
            .unwrap();

        let state = state
            .apply(DashboardAction::EditUser(state.users[0].clone()))
            .unwrap()
            .apply(DashboardAction::UpdateUser(UserField::BankId(Some(10))))
            .unwrap()
            .apply(DashboardAction::SaveUser)
            .unwrap();
        assert_eq!(state.users[0].bank_id, Some(10));

        let result = state.apply(DashboardAction::DeleteBank(10));
        assert_eq!(
            result,
            Err(DashboardError::BankInUse {
                bank_id: 10,
                user_count: 1
            })
        );
        assert!(state.banks.iter().any(|b| b.id == 10));
    }

    #[test]
    fn test_clearing_bank_reference_allows_delete() {
        init_tracing();
        let state = loaded_state();
        let assigned = state
            .apply(DashboardAction::EditUser(state.users[0].clone()))
            .unwrap()
            .apply(DashboardAction::UpdateUser(UserField::BankId(Some(101))))
            .unwrap()
            .apply(DashboardAction::SaveUser)
            .unwrap();
        assert!(assigned.apply(DashboardAction::DeleteBank(101)).is_err());

        let cleared = assigned
            .apply(DashboardAction::EditUser(assigned.users[0].clone()))
            .unwrap()
            .apply(DashboardAction::UpdateUser(UserField::BankId(None)))
            .unwrap()
            .apply(DashboardAction::SaveUser)
            .unwrap();
        let next = cleared.apply(DashboardAction::DeleteBank(101)).unwrap();

        assert_eq!(next.banks.len(), 4);
    }
}
