use common::Bank;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BankTableProps {
    pub banks: Vec<Bank>,
    pub on_add: Callback<()>,
    pub on_edit: Callback<Bank>,
    pub on_delete: Callback<i32>,
}

#[function_component(BankTable)]
pub fn bank_table(props: &BankTableProps) -> Html {
    log::trace!("Rendering bank table with {} rows", props.banks.len());

    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(()))
    };

    html! {
        <section class="w-full">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{"Banks"}</h2>
                <button class="btn btn-primary btn-sm" onclick={on_add}>
                    <i class="fas fa-plus"></i> {" Add Bank"}
                </button>
            </div>
            <div class="overflow-x-auto bg-base-100 shadow rounded-box">
                <table class="table table-zebra">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Bank Name"}</th>
                            <th>{"Routing Number"}</th>
                            <th>{"SWIFT/BIC"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if props.banks.is_empty() {
                            <tr>
                                <td colspan="5" class="text-center text-gray-500">{"No banks loaded."}</td>
                            </tr>
                        }
                        { for props.banks.iter().map(|bank| {
                            let on_edit = {
                                let bank = bank.clone();
                                let on_edit = props.on_edit.clone();
                                Callback::from(move |_| {
                                    log::info!("Edit clicked for bank ID: {}", bank.id);
                                    on_edit.emit(bank.clone());
                                })
                            };
                            let on_delete = {
                                let bank_id = bank.id;
                                let on_delete = props.on_delete.clone();
                                Callback::from(move |_| {
                                    log::info!("Delete clicked for bank ID: {}", bank_id);
                                    on_delete.emit(bank_id);
                                })
                            };

                            html! {
                                <tr key={bank.id} class="hover">
                                    <td class="font-mono">{bank.id}</td>
                                    <td class="font-medium">{&bank.bank_name}</td>
                                    <td class="font-mono">{&bank.routing_number}</td>
                                    <td class="font-mono">{&bank.swift_bic}</td>
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
