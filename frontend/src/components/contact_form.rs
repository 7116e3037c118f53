use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::components::lead_form::{use_lead_form, LeadFormStyles, Spinner, SuccessCard};
use crate::lead_capture::{
    attempt::{FormAction, FormStatus},
    fields::{ContactField, ContactFields, LeadFields},
};

/// Floating-label state: raised when the field is focused or filled,
/// highlighted only while focused.
pub fn label_class(field: ContactField, focused: Option<ContactField>, value: &str) -> Classes {
    let is_focused = focused == Some(field);
    classes!(
        "contact-form__label",
        (is_focused || !value.is_empty()).then_some("raised"),
        is_focused.then_some("focused"),
    )
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let attempt = use_lead_form::<ContactFields>();
    let focused = use_state(|| None::<ContactField>);

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

    let on_focus = |field: ContactField| {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(Some(field)))
    };
    let on_blur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(None))
    };

    let render_field = |field: ContactField| {
        let value = attempt.fields().get(field).to_string();
        let label = label_class(field, *focused, &value);
        let input = match field {
            ContactField::Message => {
                let attempt = attempt.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    attempt.dispatch(FormAction::Edit(field, input.value()));
                });
                html! {
                    <textarea
                        placeholder={field.label()}
                        value={value}
                        oninput={oninput}
                        onfocus={on_focus(field)}
                        onblur={on_blur.clone()}
                        required={true}
                    />
                }
            }
            ContactField::Name | ContactField::Email => {
                let attempt = attempt.clone();
                let oninput = Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    attempt.dispatch(FormAction::Edit(field, input.value()));
                });
                let input_type = if field == ContactField::Email { "email" } else { "text" };
                html! {
                    <input
                        type={input_type}
                        placeholder={field.label()}
                        value={value}
                        oninput={oninput}
                        onfocus={on_focus(field)}
                        onblur={on_blur.clone()}
                        required={true}
                    />
                }
            }
        };
        html! {
            <div class="contact-form__field">
                <div class={label}>{ field.label() }</div>
                { input }
            </div>
        }
    };

    let submitting = attempt.status().is_submitting();

    html! {
        <div class="contact-form">
            <LeadFormStyles />
            if *attempt.status() == FormStatus::Succeeded {
                <SuccessCard
                    heading="Message Sent!"
                    body="Thank you for reaching out. We'll get back to you as soon as possible."
                    again_label="Send another message"
                    on_again={on_again}
                />
            } else {
                <form onsubmit={on_submit}>
                    { for ContactField::ALL.into_iter().map(render_field) }
                    <button type="submit" class="contact-form__submit" disabled={submitting}>
                        if submitting {
                            <Spinner />
                        } else {
                            <span>{"✉"}</span>
                            <span>{"Send Message"}</span>
                            <i class="arrow">{"➤"}</i>
                        }
                    </button>
                    if let Some(message) = attempt.error_message() {
                        <p class="lead-error">{ message }</p>
                    }
                </form>
            }
            <style>
                {r#"
                .contact-form {
                    width: 100%;
                    max-width: 28rem;
                    margin: 0 auto;
                }
                .contact-form form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .contact-form__field {
                    position: relative;
                }
                .contact-form__label {
                    position: absolute;
                    top: -0.5rem;
                    left: 1rem;
                    padding: 0 0.5rem;
                    background: white;
                    font-size: 0.75rem;
                    font-weight: 500;
                    color: #64748b;
                    opacity: 0.7;
                    transform: translateY(10px);
                    transition: all 0.2s ease;
                    z-index: 1;
                }
                .contact-form__label.raised {
                    opacity: 1;
                    transform: translateY(0);
                }
                .contact-form__label.focused {
                    color: #00A99D;
                }
                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0 1rem;
                    border: 1px solid rgba(0, 169, 157, 0.2);
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.9);
                    font-size: 1rem;
                }
                .contact-form input {
                    height: 3.5rem;
                }
                .contact-form textarea {
                    min-height: 120px;
                    padding: 1rem;
                    font-family: inherit;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: 2px solid #00A99D;
                    border-color: transparent;
                }
                .contact-form__submit {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    height: 3.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: linear-gradient(to right, #0f3d57, #00A99D);
                    color: white;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.2s ease, opacity 0.2s ease;
                }
                .contact-form__submit:hover {
                    transform: scale(1.02);
                    opacity: 0.9;
                }
                .contact-form__submit:disabled {
                    cursor: wait;
                }
                .contact-form .arrow {
                    font-style: normal;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(classes: &Classes, class: &str) -> bool {
        classes.contains(class)
    }

    #[test]
    fn label_rests_when_unfocused_and_empty() {
        let classes = label_class(ContactField::Name, None, "");
        assert!(!has(&classes, "raised"));
        assert!(!has(&classes, "focused"));
    }

    #[test]
    fn label_raises_for_focus_or_content() {
        let focused = label_class(ContactField::Email, Some(ContactField::Email), "");
        assert!(has(&focused, "raised"));
        assert!(has(&focused, "focused"));

        let filled = label_class(ContactField::Email, Some(ContactField::Name), "jane@x.com");
        assert!(has(&filled, "raised"));
        assert!(!has(&filled, "focused"));
    }
}
