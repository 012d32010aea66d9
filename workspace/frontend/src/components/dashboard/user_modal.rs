use common::{parse_bank_selection, Bank, User, UserField};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserModalProps {
    /// Draft being edited; the modal is shown while this is set
    pub draft: Option<User>,
    pub banks: Vec<Bank>, // Live bank list for the select
    pub on_change: Callback<UserField>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn text_input(
    label: &'static str,
    value: String,
    on_change: &Callback<UserField>,
    field: fn(String) -> UserField,
) -> Html {
    let oninput = {
        let on_change = on_change.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            on_change.emit(field(v));
        })
    };

    html! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input type="text" class="input input-bordered w-full" value={value} {oninput} />
        </div>
    }
}

#[function_component(UserModal)]
pub fn user_modal(props: &UserModalProps) -> Html {
    let show = props.draft.is_some();
    let draft = props.draft.clone().unwrap_or_default();

    let on_bank_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let v = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_change.emit(UserField::BankId(parse_bank_selection(&v)));
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
            log::info!("Closing User modal without saving");
            on_cancel.emit(());
        })
    };

    html! {
        <dialog class={classes!("modal", show.then_some("modal-open"))} id="user_modal">
            <div class="modal-box">
                <button class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2" onclick={on_close.clone()}>
                    <i class="fas fa-times"></i>
                </button>
                <h3 class="font-bold text-lg">{"Edit User"}</h3>
                <form onsubmit={on_submit} class="py-4 space-y-4">
                    { text_input("First Name", draft.first_name.clone(), &props.on_change, UserField::FirstName) }
                    { text_input("Last Name", draft.last_name.clone(), &props.on_change, UserField::LastName) }
                    { text_input("Username", draft.username.clone(), &props.on_change, UserField::Username) }
                    { text_input("Email", draft.email.clone(), &props.on_change, UserField::Email) }

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">{"Bank"}</span>
                        </label>
                        <select class="select select-bordered w-full" onchange={on_bank_change}>
                            <option value="" selected={draft.bank_id.is_none()}>{"None"}</option>
                            { for props.banks.iter().map(|b| {
                                html! {
                                    <option
                                        key={b.id}
                                        value={b.id.to_string()}
                                        selected={draft.bank_id == Some(b.id)}
                                    >
                                        {&b.bank_name}
                                    </option>
                                }
                            })}
                        </select>
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
