use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::lead::form::LeadField;
use crate::lead::service::{
    AccessKey, FormServiceResponse, FormTransport, TransportError, Web3FormsTransport,
};
use crate::lead::state::SubmissionPhase;
use crate::lead::workflow::{StartBlocked, SubmissionWorkflow};
use crate::Route;

pub enum ContactFormMsg {
    Edit(LeadField, String),
    Submit,
    Resolved(Result<FormServiceResponse, TransportError>),
    Reset,
}

/// Lead-capture form. Swaps itself for a thank-you panel once a lead is
/// accepted.
pub struct ContactForm {
    workflow: SubmissionWorkflow,
    transport: Web3FormsTransport,
    key: AccessKey,
    field_hint: Option<(LeadField, String)>,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            workflow: SubmissionWorkflow::new(),
            transport: Web3FormsTransport::from_config(),
            key: config::get_access_key(),
            field_hint: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Edit(field, value) => {
                self.workflow.input.set(field, value);
                if matches!(self.field_hint, Some((hinted, _)) if hinted == field) {
                    self.field_hint = None;
                }
                true
            }
            ContactFormMsg::Submit => {
                let request = match self.workflow.start(&self.key) {
                    Ok(request) => request,
                    Err(StartBlocked::InvalidField { field, hint }) => {
                        self.field_hint = Some((field, hint));
                        return true;
                    }
                    Err(StartBlocked::AlreadySubmitting) => return false,
                };
                self.field_hint = None;

                let transport = self.transport.clone();
                ctx.link().send_future(async move {
                    ContactFormMsg::Resolved(transport.send(&request).await)
                });
                true
            }
            ContactFormMsg::Resolved(outcome) => {
                self.workflow.finish(outcome);
                true
            }
            ContactFormMsg::Reset => {
                self.workflow.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="contact-form-wrapper">
                <style>
                    {r#"
                        .contact-form-wrapper {
                            max-width: 32rem;
                            margin: 0 auto;
                        }
                        .contact-form {
                            display: flex;
                            flex-direction: column;
                            gap: 1.5rem;
                            animation: contactIn 0.3s ease-out;
                        }
                        @keyframes contactIn {
                            from { opacity: 0; transform: translateY(20px); }
                            to { opacity: 1; transform: translateY(0); }
                        }
                        .contact-row {
                            display: grid;
                            grid-template-columns: 1fr 1fr;
                            gap: 1rem;
                        }
                        .contact-input {
                            width: 100%;
                            box-sizing: border-box;
                            padding: 0.75rem 1rem;
                            background: rgba(255, 255, 255, 0.05);
                            border: 1px solid rgba(255, 255, 255, 0.1);
                            border-radius: 12px;
                            color: #fff;
                            font: inherit;
                            transition: border-color 0.2s;
                        }
                        .contact-input::placeholder {
                            color: #64748b;
                        }
                        .contact-input:focus {
                            outline: none;
                            border-color: #a855f7;
                        }
                        .contact-input.invalid {
                            border-color: #f87171;
                        }
                        textarea.contact-input {
                            resize: none;
                        }
                        .field-hint {
                            color: #f87171;
                            font-size: 0.75rem;
                            margin-top: 0.25rem;
                        }
                        .error-message {
                            color: #f87171;
                            font-size: 0.875rem;
                            background: rgba(239, 68, 68, 0.1);
                            padding: 0.75rem;
                            border-radius: 8px;
                        }
                        .submit-button {
                            width: 100%;
                            min-height: 56px;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            gap: 0.5rem;
                            border: none;
                            border-radius: 12px;
                            color: #fff;
                            font-weight: 700;
                            font-size: 1rem;
                            cursor: pointer;
                            background: linear-gradient(90deg, #2563eb, #9333ea);
                            transition: all 0.2s;
                        }
                        .submit-button:disabled {
                            background: #334155;
                            cursor: not-allowed;
                        }
                        .loading-spinner {
                            display: inline-block;
                            width: 20px;
                            height: 20px;
                            border: 2px solid rgba(255, 255, 255, 0.3);
                            border-radius: 50%;
                            border-top-color: #fff;
                            animation: spin 1s linear infinite;
                        }
                        @keyframes spin { to { transform: rotate(360deg); } }
                        .consent-line {
                            font-size: 0.75rem;
                            color: #64748b;
                            text-align: center;
                        }
                        .consent-line a {
                            color: #94a3b8;
                        }
                        .success-panel {
                            text-align: center;
                            padding: 3rem 0;
                            animation: successIn 0.4s ease-out;
                        }
                        @keyframes successIn {
                            from { opacity: 0; transform: scale(0.9); }
                            to { opacity: 1; transform: scale(1); }
                        }
                        .success-icon {
                            width: 80px;
                            height: 80px;
                            margin: 0 auto 1.5rem;
                            border-radius: 50%;
                            background: rgba(34, 197, 94, 0.2);
                            color: #4ade80;
                            font-size: 2.5rem;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                        }
                        .success-panel h3 {
                            font-size: 1.875rem;
                            margin-bottom: 1rem;
                        }
                        .success-panel p {
                            color: #94a3b8;
                            margin-bottom: 2rem;
                        }
                        .again-button {
                            background: none;
                            border: none;
                            color: #c084fc;
                            font-weight: 600;
                            cursor: pointer;
                        }
                        @media (max-width: 768px) {
                            .contact-row {
                                grid-template-columns: 1fr;
                            }
                        }
                    "#}
                </style>
                {
                    if self.workflow.state().phase() == SubmissionPhase::Succeeded {
                        self.view_success(ctx)
                    } else {
                        self.view_form(ctx)
                    }
                }
            </div>
        }
    }
}

impl ContactForm {
    fn hint_for(&self, field: LeadField) -> Option<&str> {
        match &self.field_hint {
            Some((hinted, hint)) if *hinted == field => Some(hint.as_str()),
            _ => None,
        }
    }

    fn view_input(
        &self,
        ctx: &Context<Self>,
        field: LeadField,
        kind: &'static str,
        placeholder: &'static str,
        required: bool,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::Edit(field, input.value())
        });
        let hint = self.hint_for(field);

        html! {
            <div>
                <input
                    type={kind}
                    name={field.wire_name()}
                    class={classes!("contact-input", hint.is_some().then(|| "invalid"))}
                    placeholder={placeholder}
                    value={self.workflow.input.get(field).to_string()}
                    {required}
                    {oninput}
                />
                if let Some(hint) = hint {
                    <div class="field-hint">{hint}</div>
                }
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let state = self.workflow.state();
        let submitting = state.is_submitting();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let on_message = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::Edit(LeadField::Message, area.value())
        });

        html! {
            // novalidate: the component shows its own hints for required fields
            <form class="contact-form" {onsubmit} novalidate={true}>
                <div class="contact-row">
                    { self.view_input(ctx, LeadField::Name, "text", "Ваше имя", true) }
                    { self.view_input(ctx, LeadField::Email, "email", "Email", true) }
                </div>

                { self.view_input(ctx, LeadField::ContactHandle, "text", "Telegram (опционально)", false) }

                <div>
                    <textarea
                        name={LeadField::Message.wire_name()}
                        class="contact-input"
                        placeholder="Расскажите о вашей идее или задайте вопрос"
                        rows="4"
                        value={self.workflow.input.message.clone()}
                        oninput={on_message}
                    />
                </div>

                if let Some(message) = state.error_message() {
                    <div class="error-message">{message}</div>
                }

                <button type="submit" class="submit-button" disabled={submitting}>
                    if submitting {
                        <span class="loading-spinner"></span>
                        {"Отправка..."}
                    } else {
                        <span>{"➤"}</span>
                        {"Отправить заявку"}
                    }
                </button>

                <p class="consent-line">
                    {"Нажимая кнопку, вы соглашаетесь с "}
                    <Link<Route> to={Route::Privacy}>{"политикой конфиденциальности"}</Link<Route>>
                </p>
            </form>
        }
    }

    fn view_success(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_: MouseEvent| ContactFormMsg::Reset);

        html! {
            <div class="success-panel">
                <div class="success-icon">{"✓"}</div>
                <h3>{"Заявка отправлена!"}</h3>
                <p>{"Спасибо за интерес! Мы свяжемся с вами в ближайшее время для обсуждения деталей."}</p>
                <button class="again-button" {onclick}>
                    {"Отправить еще одну заявку"}
                </button>
            </div>
        }
    }
}
