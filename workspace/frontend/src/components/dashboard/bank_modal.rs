use common::{Bank, BankField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BankModalProps {
    /// Draft being edited; the modal is shown while this is set
    pub draft: Option<Bank>,
    pub on_change: Callback<BankField>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(BankModal)]
pub fn bank_modal(props: &BankModalProps) -> Html {
    let show = props.draft.is_some();
    let draft = props.draft.clone().unwrap_or_default();

    let oninput_for = |field: fn(String) -> BankField| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            on_change.emit(field(v));
        })
    };

    let on_submit = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(());
        })
    };

    let on_close = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            log::info!("Closing Bank modal without saving");
            on_cancel.emit(());
        })
    };

    html! {
        <dialog class={classes!("modal", show.then_some("modal-open"))} id="bank_modal">
            <div class="modal-box">
                <button class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2" onclick={on_close.clone()}>
                    <i class="fas fa-times"></i>
                </button>
                <h3 class="font-bold text-lg">{"Edit Bank"}</h3>
                <form onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Bank Name"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={draft.bank_name.clone()}
                            oninput={oninput_for(BankField::BankName)}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Routing Number"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={draft.routing_number.clone()}
                            oninput={oninput_for(BankField::RoutingNumber)}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"SWIFT/BIC"}</span>
                        </label>
                        <input
                            type="text"
                            class="input input-bordered w-full"
                            value={draft.swift_bic.clone()}
                            oninput={oninput_for(BankField::SwiftBic)}
                        />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" onclick={on_close.clone()}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {"Save"}
                        </button>
                    </div>
                </form>
            </div>
            <form class="modal-backdrop" method="dialog">
                <button onclick={on_close}>{"close"}</button>
            </form>
        </dialog>
    }
}
