use shared::{Category, Transaction, TransactionDraft, TransactionKind};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_session::SessionHandle;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct TransactionFormModalProps {
    /// `Some` puts the form in edit mode, prefilled from the transaction.
    pub editing: Option<Transaction>,
    pub on_close: Callback<()>,
    pub on_saved: Callback<()>,
}

/// Modal create/edit form. The draft keeps the amount unsigned next to an
/// income/expense toggle; the sign is applied once on submit.
#[function_component(TransactionFormModal)]
pub fn transaction_form_modal(props: &TransactionFormModalProps) -> Html {
    let session = use_context::<SessionHandle>().expect("session context missing");
    let draft = use_state(|| match props.editing.as_ref() {
        Some(transaction) => TransactionDraft::for_edit(transaction),
        None => TransactionDraft::for_create(&date_utils::current_date()),
    });
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let set_kind = |kind: TransactionKind| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.kind = kind;
            draft.set(next);
        })
    };

    let on_title = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*draft).clone();
            next.title = input.value();
            draft.set(next);
        })
    };

    let on_amount = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*draft).clone();
            next.amount_input = input.value();
            draft.set(next);
        })
    };

    let on_category = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Ok(category) = select.value().parse::<Category>() {
                let mut next = (*draft).clone();
                next.category = category;
                draft.set(next);
            }
        })
    };

    let on_date = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*draft).clone();
            next.date = input.value();
            draft.set(next);
        })
    };

    let on_notes = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            let mut next = (*draft).clone();
            next.notes = area.value();
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let editing = props.editing.clone();
        let on_close = props.on_close.clone();
        let on_saved = props.on_saved.clone();
        let api = session.api_client();
        let expire = session.expire.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            let payload = match draft.validate() {
                Ok(payload) => payload,
                Err(errors) => {
                    let message = errors
                        .iter()
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>()
                        .join(". ");
                    error.set(Some(message));
                    return;
                }
            };

            submitting.set(true);
            error.set(None);

            let api = api.clone();
            let expire = expire.clone();
            let editing = editing.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let on_close = on_close.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = match editing.as_ref() {
                    Some(transaction) => api.update_transaction(&transaction.id, &payload).await,
                    None => api.create_transaction(&payload).await,
                };
                match result {
                    Ok(_) => {
                        on_saved.emit(());
                        on_close.emit(());
                    }
                    Err(err) if err.is_unauthorized() => expire.emit(()),
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let on_dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let heading = if props.editing.is_some() {
        "Edit Transaction"
    } else {
        "Add Transaction"
    };
    let submit_label = if props.editing.is_some() {
        "Update"
    } else {
        "Add"
    };

    let kind_class = |kind: TransactionKind| {
        if draft.kind == kind {
            "toggle-button active"
        } else {
            "toggle-button"
        }
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-card">
                <div class="modal-header">
                    <h2>{heading}</h2>
                    <button class="modal-close" onclick={on_dismiss.clone()}>
                        {"\u{00d7}"}
                    </button>
                </div>
                if let Some(message) = (*error).clone() {
                    <div class="alert alert-error">{message}</div>
                }
                <form {onsubmit}>
                    <div class="kind-toggle">
                        <button
                            type="button"
                            class={kind_class(TransactionKind::Expense)}
                            onclick={set_kind(TransactionKind::Expense)}
                        >
                            {"Expense"}
                        </button>
                        <button
                            type="button"
                            class={kind_class(TransactionKind::Income)}
                            onclick={set_kind(TransactionKind::Income)}
                        >
                            {"Income"}
                        </button>
                    </div>
                    <div class="form-group">
                        <label for="tx-title">{"Title"}</label>
                        <input
                            id="tx-title"
                            type="text"
                            placeholder="e.g. Groceries"
                            value={draft.title.clone()}
                            oninput={on_title}
                        />
                    </div>
                    <div class="form-group">
                        <label for="tx-amount">{"Amount"}</label>
                        <input
                            id="tx-amount"
                            type="number"
                            min="0"
                            step="0.01"
                            placeholder="0.00"
                            value={draft.amount_input.clone()}
                            oninput={on_amount}
                        />
                    </div>
                    <div class="form-group">
                        <label for="tx-category">{"Category"}</label>
                        <select id="tx-category" onchange={on_category}>
                            {for Category::ALL.iter().map(|category| html! {
                                <option
                                    value={category.label()}
                                    selected={draft.category == *category}
                                >
                                    {category.label()}
                                </option>
                            })}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="tx-date">{"Date"}</label>
                        <input
                            id="tx-date"
                            type="date"
                            value={draft.date.clone()}
                            onchange={on_date}
                        />
                    </div>
                    <div class="form-group">
                        <label for="tx-notes">{"Notes (optional)"}</label>
                        <textarea
                            id="tx-notes"
                            rows="3"
                            value={draft.notes.clone()}
                            oninput={on_notes}
                        />
                    </div>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_dismiss}
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled={*submitting}
                        >
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
