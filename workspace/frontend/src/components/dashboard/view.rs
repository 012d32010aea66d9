use common::{ensure_bank_unreferenced, Bank, BankField, DashboardAction, Resource, User, UserField};
use yew::prelude::*;

use super::bank_modal::BankModal;
use super::bank_table::BankTable;
use super::user_modal::UserModal;
use super::user_table::UserTable;
use crate::api_client::random_data::{fetch_banks, fetch_users};
use crate::common::toast::ToastContext;
use crate::settings;
use crate::store::DashboardStore;

/// Requests `size` users and appends whatever arrives to the store.
///
/// Failures are logged by the API client and otherwise dropped; the tables
/// keep showing the pre-fetch state.
fn load_users(dispatcher: UseReducerDispatcher<DashboardStore>, size: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Ok(users) = fetch_users(size).await {
            log::debug!("Fetched {} {}", users.len(), Resource::Users.label());
            dispatcher.dispatch(DashboardAction::UsersFetched(users));
        }
    });
}

fn load_banks(dispatcher: UseReducerDispatcher<DashboardStore>, size: u32) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Ok(banks) = fetch_banks(size).await {
            log::debug!("Fetched {} {}", banks.len(), Resource::Banks.label());
            dispatcher.dispatch(DashboardAction::BanksFetched(banks));
        }
    });
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    log::trace!("Dashboard component rendering");
    let store = use_reducer(DashboardStore::default);
    let toast_ctx = use_context::<ToastContext>();

    log::debug!(
        "Dashboard state: users={}, banks={}, user_modal={}, bank_modal={}",
        store.users.len(),
        store.banks.len(),
        store.is_user_modal_open(),
        store.is_bank_modal_open()
    );

    // Initial load: both requests run independently and may resolve in any order.
    {
        let dispatcher = store.dispatcher();
        use_effect_with((), move |_| {
            let size = settings::get_settings().initial_batch_size;
            log::info!("Loading initial {} users and {} banks", size, size);
            load_users(dispatcher.clone(), size);
            load_banks(dispatcher, size);
            || ()
        });
    }

    // Report what each batch actually added, after duplicate ids were skipped.
    {
        let toast_ctx = toast_ctx.clone();
        use_effect_with(store.notice.clone(), move |notice| {
            if let (Some(toast_ctx), Some(notice)) = (toast_ctx, notice) {
                toast_ctx.show_info(notice.message());
            }
            || ()
        });
    }

    let on_add_users = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_| {
            load_users(dispatcher.clone(), settings::get_settings().add_batch_size);
        })
    };

    let on_add_banks = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_| {
            load_banks(dispatcher.clone(), settings::get_settings().add_batch_size);
        })
    };

    let on_edit_user = {
        let dispatcher = store.dispatcher();
        Callback::from(move |user: User| {
            log::info!("Opening Edit User modal for ID: {}", user.id);
            dispatcher.dispatch(DashboardAction::EditUser(user));
        })
    };

    let on_delete_user = {
        let dispatcher = store.dispatcher();
        let toast_ctx = toast_ctx.clone();
        Callback::from(move |user_id: i32| {
            dispatcher.dispatch(DashboardAction::DeleteUser(user_id));
            if let Some(toast_ctx) = &toast_ctx {
                toast_ctx.show_success(format!("User {} deleted", user_id));
            }
        })
    };

    let on_user_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |field: UserField| {
            dispatcher.dispatch(DashboardAction::UpdateUser(field));
        })
    };

    let on_save_user = {
        let dispatcher = store.dispatcher();
        let toast_ctx = toast_ctx.clone();
        let draft_id = store.current_user().map(|u| u.id);
        Callback::from(move |_| {
            log::info!("Saving user draft {:?}", draft_id);
            dispatcher.dispatch(DashboardAction::SaveUser);
            if let (Some(toast_ctx), Some(id)) = (&toast_ctx, draft_id) {
                toast_ctx.show_success(format!("User {} saved", id));
            }
        })
    };

    let on_cancel_user = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(DashboardAction::CancelUser))
    };

    let on_edit_bank = {
        let dispatcher = store.dispatcher();
        Callback::from(move |bank: Bank| {
            log::info!("Opening Edit Bank modal for ID: {}", bank.id);
            dispatcher.dispatch(DashboardAction::EditBank(bank));
        })
    };

    // The guard runs against the users rendered right now; the reducer checks again.
    let on_delete_bank = {
        let dispatcher = store.dispatcher();
        let toast_ctx = toast_ctx.clone();
        let users = store.users.clone();
        Callback::from(move |bank_id: i32| {
            if let Err(e) = ensure_bank_unreferenced(&users, bank_id) {
                log::warn!("Refusing to delete bank {}: {}", bank_id, e);
                alert(&e.to_string());
                return;
            }
            dispatcher.dispatch(DashboardAction::DeleteBank(bank_id));
            if let Some(toast_ctx) = &toast_ctx {
                toast_ctx.show_success(format!("Bank {} deleted", bank_id));
            }
        })
    };

    let on_bank_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |field: BankField| {
            dispatcher.dispatch(DashboardAction::UpdateBank(field));
        })
    };

    let on_save_bank = {
        let dispatcher = store.dispatcher();
        let toast_ctx = toast_ctx.clone();
        let draft_id = store.current_bank().map(|b| b.id);
        Callback::from(move |_| {
            log::info!("Saving bank draft {:?}", draft_id);
            dispatcher.dispatch(DashboardAction::SaveBank);
            if let (Some(toast_ctx), Some(id)) = (&toast_ctx, draft_id) {
                toast_ctx.show_success(format!("Bank {} saved", id));
            }
        })
    };

    let on_cancel_bank = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(DashboardAction::CancelBank))
    };

    html! {
        <div class="container mx-auto max-w-6xl py-4 flex flex-col gap-8">
            <UserTable
                users={store.users.clone()}
                banks={store.banks.clone()}
                on_add={on_add_users}
                on_edit={on_edit_user}
                on_delete={on_delete_user}
            />
            <BankTable
                banks={store.banks.clone()}
                on_add={on_add_banks}
                on_edit={on_edit_bank}
                on_delete={on_delete_bank}
            />

            <UserModal
                draft={store.current_user().cloned()}
                banks={store.banks.clone()}
                on_change={on_user_change}
                on_save={on_save_user}
                on_cancel={on_cancel_user}
            />
            <BankModal
                draft={store.current_bank().cloned()}
                on_change={on_bank_change}
                on_save={on_save_bank}
                on_cancel={on_cancel_bank}
            />
        </div>
    }
}
