use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::lead_form::{use_lead_form, LeadFormStyles, Spinner, SuccessCard};
use crate::lead_capture::{
    attempt::{FormAction, FormStatus},
    fields::{EarlyAccessField, EarlyAccessFields},
};

#[function_component(EarlyAccessForm)]
pub fn early_access_form() -> Html {
    let attempt = use_lead_form::<EarlyAccessFields>();

    let on_email = {
        let attempt = attempt.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            attempt.dispatch(FormAction::Edit(EarlyAccessField::Email, input.value()));
        })
    };

    let on_submit = {
        let attempt = attempt.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            attempt.dispatch(FormAction::Submit);
        })
    };

    let on_again = {
        let attempt = attempt.clone();
        Callback::from(move |_: MouseEvent| attempt.dispatch(FormAction::SubmitAnother))
    };

    let submitting = attempt.status().is_submitting();

    html! {
        <div class="early-access-form">
            <LeadFormStyles />
            if *attempt.status() == FormStatus::Succeeded {
                <SuccessCard
                    heading="Thank You!"
                    body="We'll notify you when early access is available."
                    again_label="Submit another email"
                    on_again={on_again}
                />
            } else {
                <form onsubmit={on_submit} class="early-access-form__form">
                    <div class="early-access-form__row">
                        <input
                            type="email"
                            placeholder="Enter your email"
                            value={attempt.fields().email.clone()}
                            oninput={on_email}
                            required={true}
                        />
                        <button type="submit" disabled={submitting}>
                            if submitting {
                                <Spinner />
                            } else {
                                <span>{"Get Early Access"}</span>
                                <i class="arrow">{"→"}</i>
                            }
                        </button>
                    </div>
                    if let Some(message) = attempt.error_message() {
                        <p class="lead-error">{ message }</p>
                    }
                </form>
            }
            <style>
                {r#"
                .early-access-form {
                    width: 100%;
                    max-width: 28rem;
                    margin: 0 auto;
                }
                .early-access-form__row {
                    display: flex;
                    gap: 0.75rem;
                }
                .early-access-form__row input {
                    flex-grow: 1;
                    height: 3.5rem;
                    padding: 0 1.25rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
                    font-size: 1rem;
                }
                .early-access-form__row input:focus {
                    outline: 2px solid #00A99D;
                }
                .early-access-form__row button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    height: 3.5rem;
                    padding: 0 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: #00A99D;
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
                }
                .early-access-form__row button:disabled {
                    opacity: 0.8;
                    cursor: wait;
                }
                .early-access-form__row button:hover .arrow {
                    transform: translateX(5px);
                }
                .early-access-form .arrow {
                    font-style: normal;
                    transition: transform 0.3s ease;
                }
                @media (max-width: 640px) {
                    .early-access-form__row {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
