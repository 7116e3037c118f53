use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::lead_capture::{
    attempt::{FormAction, FormAttempt, SendTicket},
    controller,
    fields::LeadFields,
    sender::LeadSenderContext,
};

/// Form state for one lead-capture form. Whenever a submission passes
/// validation its ticket is delivered through the sender found in context
/// (the simulated one if none was provided) and the outcome fed back in.
#[hook]
pub fn use_lead_form<F: LeadFields>() -> UseReducerHandle<FormAttempt<F>> {
    let sender = use_context::<LeadSenderContext>().unwrap_or_default();
    let attempt = use_reducer(FormAttempt::<F>::default);

    {
        let dispatcher = attempt.dispatcher();
        use_effect_with_deps(
            move |pending: &Option<SendTicket<F>>| {
                if let Some(ticket) = pending.clone() {
                    spawn_local(async move {
                        let resolution = controller::deliver(sender.0.as_ref(), ticket).await;
                        dispatcher.dispatch(FormAction::Resolve(resolution));
                    });
                }
                || ()
            },
            attempt.pending_send(),
        );
    }

    attempt
}

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <span class="lead-spinner" aria-label="Submitting"></span>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessCardProps {
    pub heading: AttrValue,
    pub body: AttrValue,
    pub again_label: AttrValue,
    pub on_again: Callback<MouseEvent>,
}

#[function_component(SuccessCard)]
pub fn success_card(props: &SuccessCardProps) -> Html {
    html! {
        <div class="lead-success">
            <div class="lead-success__check">{"✓"}</div>
            <h3>{ props.heading.clone() }</h3>
            <p>{ props.body.clone() }</p>
            <button class="lead-success__again" onclick={props.on_again.clone()}>
                <span>{ props.again_label.clone() }</span>
            </button>
        </div>
    }
}

/// Styles shared by both lead-capture forms and their success cards.
#[function_component(LeadFormStyles)]
pub fn lead_form_styles() -> Html {
    html! {
        <style>
            {r#"
            .lead-success {
                background: rgba(255, 255, 255, 0.9);
                backdrop-filter: blur(8px);
                padding: 2rem;
                border-radius: 1rem;
                box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                display: flex;
                flex-direction: column;
                align-items: center;
                text-align: center;
                animation: popIn 0.35s ease-out;
            }
            .lead-success__check {
                width: 4rem;
                height: 4rem;
                border-radius: 50%;
                background: #dcfce7;
                color: #16a34a;
                font-size: 2rem;
                display: flex;
                align-items: center;
                justify-content: center;
                margin-bottom: 1rem;
            }
            .lead-success h3 {
                color: #0f3d57;
                font-size: 1.4rem;
                margin-bottom: 0.5rem;
            }
            .lead-success p {
                color: #374151;
            }
            .lead-success__again {
                margin-top: 1.5rem;
                background: none;
                border: none;
                color: #00A99D;
                font-weight: 600;
                cursor: pointer;
                transition: transform 0.2s ease;
            }
            .lead-success__again:hover {
                transform: scale(1.05);
            }
            .lead-spinner {
                display: inline-block;
                width: 1.25rem;
                height: 1.25rem;
                border: 2px solid rgba(255, 255, 255, 0.4);
                border-top-color: #fff;
                border-radius: 50%;
                animation: spin 0.8s linear infinite;
            }
            .lead-error {
                color: #ef4444;
                font-size: 0.875rem;
                margin-top: 0.5rem;
                animation: dropIn 0.3s ease-out;
            }
            @keyframes spin {
                to { transform: rotate(360deg); }
            }
            @keyframes popIn {
                from { opacity: 0; transform: scale(0.9); }
                to { opacity: 1; transform: scale(1); }
            }
            @keyframes dropIn {
                from { opacity: 0; transform: translateY(-10px); }
                to { opacity: 1; transform: translateY(0); }
            }
            "#}
        </style>
    }
}
