use std::collections::HashMap;

use common::{Bank, User};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserTableProps {
    pub users: Vec<User>,
    pub banks: Vec<Bank>, // For the bank name column
    pub on_add: Callback<()>,
    pub on_edit: Callback<User>,
    pub on_delete: Callback<i32>,
}

#[function_component(UserTable)]
pub fn user_table(props: &UserTableProps) -> Html {
    log::trace!("Rendering user table with {} rows", props.users.len());

    let bank_names: HashMap<i32, String> = props.banks.iter()
        .map(|b| (b.id, b.bank_name.clone()))
        .collect();

    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(()))
    };

    html! {
        <section class="w-full">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"Users"}</h2>
                <button class="btn btn-primary btn-sm" onclick={on_add}>
                    <i class="fas fa-plus"></i> {" Add User"}
                </button>
            </div>
            <div class="overflow-x-auto bg-base-100 shadow rounded-box">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"First Name"}</th>
                            <th>{"Last Name"}</th>
                            <th>{"Username"}</th>
                            <th>{"Email"}</th>
                            <th>{"Bank"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if props.users.is_empty() {
                            <tr>
                                <td colspan="7" class="text-center text-gray-500">{"No users loaded."}</td>
                            </tr>
                        }
                        { for props.users.iter().map(|user| {
                            let on_edit = {
                                let user = user.clone();
                                let on_edit = props.on_edit.clone();
                                Callback::from(move |_| {
                                    log::info!("Edit clicked for user ID: {}", user.id);
                                    on_edit.emit(user.clone());
                                })
                            };
                            let on_delete = {
                                let user_id = user.id;
                                let on_delete = props.on_delete.clone();
                                Callback::from(move |_| {
                                    log::info!("Delete clicked for user ID: {}", user_id);
                                    on_delete.emit(user_id);
                                })
                            };
                            // A dangling reference renders like no reference.
                            let bank_name = user.bank_id
                                .and_then(|id| bank_names.get(&id).cloned())
                                .unwrap_or_else(|| "-".to_string());

                            html! {
                                <tr key={user.id} class="hover">
                                    <td class="font-mono">{user.id}</td>
                                    <td>{&user.first_name}</td>
                                    <td>{&user.last_name}</td>
                                    <td>{&user.username}</td>
                                    <td>{&user.email}</td>
                                    <td><span class="badge badge-sm badge-ghost">{bank_name}</span></td>
                                    <td class="flex gap-2">
                                        <button class="btn btn-ghost btn-xs" aria-label="Edit" onclick={on_edit}>
                                            <i class="fas fa-edit"></i>
                                        </button>
                                        <button class="btn btn-ghost btn-xs text-error" aria-label="Delete" onclick={on_delete}>
                                            <i class="fas fa-trash"></i>
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
