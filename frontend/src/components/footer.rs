use std::collections::HashMap;

use chrono::Datelike;
use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config::{self, DisclosureConfig};
use crate::donation::clipboard::{self, ClipboardError, CopyPath};
use crate::donation::disclosure::{Disclosure, Input};
use crate::donation::feedback::{CopyFeedback, CopyField};
use crate::donation::outside::OutsidePointerListener;
use crate::donation::timers::{Effect, TimerKind, TimerToken};
use crate::donation::viewport::{ViewportClass, VisibilityObserver};

pub enum FooterMsg {
    Panel(Input),
    Intersection(bool),
    Copy(CopyField),
    Copied(CopyField, CopyPath),
    CopyFailed(CopyField, ClipboardError),
    FeedbackElapsed(TimerToken),
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub viewport: ViewportClass,
}

pub struct Footer {
    disclosure: Disclosure,
    feedback: CopyFeedback,
    timeouts: HashMap<TimerKind, (TimerToken, Timeout)>,
    outside: Option<OutsidePointerListener>,
    observer: Option<VisibilityObserver>,
    container: NodeRef,
}

impl Component for Footer {
    type Message = FooterMsg;
    type Properties = FooterProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            disclosure: Disclosure::new(DisclosureConfig::default(), ctx.props().viewport),
            feedback: CopyFeedback::default(),
            timeouts: HashMap::new(),
            outside: None,
            observer: None,
            container: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let effects = self
            .disclosure
            .handle(Input::ViewportChanged(ctx.props().viewport));
        self.apply(ctx, effects);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            FooterMsg::Panel(input) => self.drive(ctx, input),
            FooterMsg::Intersection(visible) => {
                let input = if visible {
                    Input::EnteredViewport
                } else {
                    Input::LeftViewport
                };
                self.drive(ctx, input)
            }
            FooterMsg::Copy(field) => {
                ctx.link().send_future(async move {
                    match clipboard::copy_text(field.value()).await {
                        Ok(path) => FooterMsg::Copied(field, path),
                        Err(err) => FooterMsg::CopyFailed(field, err),
                    }
                });
                false
            }
            FooterMsg::Copied(field, path) => {
                debug!("Copied {:?} via {:?}", field, path);
                let effects = self.feedback.copied(field);
                self.apply(ctx, effects);
                true
            }
            FooterMsg::CopyFailed(field, err) => {
                error!("Copy failed for {:?}: {}", field, err);
                false
            }
            FooterMsg::FeedbackElapsed(token) => {
                self.forget_timeout(token);
                self.feedback.elapsed(token)
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if let Some(element) = self.container.cast::<Element>() {
            let on_change = ctx.link().callback(FooterMsg::Intersection);
            match VisibilityObserver::observe(
                &element,
                config::FOOTER_VISIBILITY_THRESHOLD,
                on_change,
            ) {
                Ok(observer) => self.observer = Some(observer),
                Err(err) => warn!("Footer visibility observer unavailable: {:?}", err),
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.disclosure.handle(Input::Unmount);
        self.feedback.reset();
        self.timeouts.clear();
        self.outside = None;
        self.observer = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let year = chrono::Local::now().year();

        let trigger_tap = link.callback(|e: MouseEvent| {
            e.stop_propagation();
            FooterMsg::Panel(Input::TriggerTap)
        });
        let panel_tap = link.callback(|e: MouseEvent| {
            e.stop_propagation();
            FooterMsg::Panel(Input::PanelTap)
        });

        html! {
            <footer class="site-footer" ref={self.container.clone()}>
                <style>{FOOTER_CSS}</style>
                <div class="footer-content">
                    <div class="footer-logo">
                        <img src="/images/rostro logo.png" alt="Instituto Sobre'Viver" />
                    </div>

                    <div class="footer-contact">
                        <h3 class="footer-title">{"Fale Conosco"}</h3>
                        <p class="footer-address">{config::ADDRESS}</p>

                        <div class="donation">
                            <button
                                class="donation-trigger"
                                onmouseenter={link.callback(|_| FooterMsg::Panel(Input::TriggerEnter))}
                                onmouseleave={link.callback(|_| FooterMsg::Panel(Input::TriggerLeave))}
                                onclick={trigger_tap}
                            >
                                <span class="donation-headline">{"Transforme Vidas"}</span>
                                <br />
                                <span class="donation-sub">{"Faça sua Doação"}</span>
                            </button>

                            <div
                                class={classes!("donation-panel", self.disclosure.is_visible().then(|| "open"))}
                                onmouseenter={link.callback(|_| FooterMsg::Panel(Input::PanelEnter))}
                                onmouseleave={link.callback(|_| FooterMsg::Panel(Input::PanelLeave))}
                                onclick={panel_tap}
                            >
                                <div class="donation-panel-arrow"></div>
                                <h4>{"Dados Bancários"}</h4>
                                <div class="donation-rows">
                                    { self.copy_row(ctx, CopyField::Bank, false) }
                                    { self.copy_row(ctx, CopyField::Cooperative, false) }
                                    { self.copy_row(ctx, CopyField::Account, true) }
                                    <div class="donation-pix">
                                        <p class="donation-pix-label">{CopyField::PixKey.label()}</p>
                                        <div class="donation-pix-value">
                                            <p>{CopyField::PixKey.value()}</p>
                                            { self.copy_button(ctx, CopyField::PixKey) }
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="footer-links">
                            <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer">
                                {"Whatsapp Oficial"}
                            </a>
                            <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                                {"Instagram"}
                            </a>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} Instituto Sobre'Viver. Todos os direitos reservados.", year)}</p>
                </div>
            </footer>
        }
    }
}

impl Footer {
    fn drive(&mut self, ctx: &Context<Self>, input: Input) -> bool {
        if let Input::Elapsed(token) = input {
            self.forget_timeout(token);
        }
        let before = (self.disclosure.is_visible(), self.disclosure.is_locked());
        let effects = self.disclosure.handle(input);
        self.apply(ctx, effects);
        before != (self.disclosure.is_visible(), self.disclosure.is_locked())
    }

    fn apply(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule { token, delay_ms } => {
                    let link = ctx.link().clone();
                    let timeout = Timeout::new(delay_ms, move || {
                        let msg = match token.kind() {
                            TimerKind::FeedbackClear => FooterMsg::FeedbackElapsed(token),
                            _ => FooterMsg::Panel(Input::Elapsed(token)),
                        };
                        link.send_message(msg);
                    });
                    // Replacing the old handle drops it, which clears its timeout.
                    self.timeouts.insert(token.kind(), (token, timeout));
                }
                Effect::Cancel(token) => self.forget_timeout(token),
                Effect::AcquireOutsideListener => {
                    let Some(container) = self.container.cast::<Element>() else {
                        continue;
                    };
                    let on_outside = ctx
                        .link()
                        .callback(|()| FooterMsg::Panel(Input::OutsidePointer));
                    match OutsidePointerListener::attach(container, on_outside) {
                        Ok(listener) => self.outside = Some(listener),
                        Err(err) => warn!("Could not listen for outside presses: {:?}", err),
                    }
                }
                Effect::ReleaseOutsideListener => self.outside = None,
            }
        }
    }

    fn forget_timeout(&mut self, token: TimerToken) {
        if matches!(self.timeouts.get(&token.kind()), Some((live, _)) if *live == token) {
            self.timeouts.remove(&token.kind());
        }
    }

    fn copy_row(&self, ctx: &Context<Self>, field: CopyField, highlighted: bool) -> Html {
        html! {
            <div class={classes!("donation-row", highlighted.then(|| "highlighted"))}>
                <span class="donation-row-label">{field.label()}</span>
                <div class="donation-row-value">
                    <span>{field.value()}</span>
                    { self.copy_button(ctx, field) }
                </div>
            </div>
        }
    }

    fn copy_button(&self, ctx: &Context<Self>, field: CopyField) -> Html {
        let onclick = ctx.link().callback(move |e: MouseEvent| {
            e.stop_propagation();
            FooterMsg::Copy(field)
        });
        let icon = if self.feedback.is_active(field) {
            html! {
                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="#10b981" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <polyline points="20 6 9 17 4 12"></polyline>
                </svg>
            }
        } else {
            html! {
                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect>
                    <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path>
                </svg>
            }
        };

        html! {
            <button class="copy-button" title={field.copy_title()} {onclick}>
                { icon }
            </button>
        }
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        background: var(--azure-deep);
        color: #fff;
        padding: 4rem 0;
        position: relative;
        z-index: 10;
    }
    .footer-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 2.5rem;
    }
    .footer-logo {
        width: 10rem;
        height: 10rem;
        animation: footerFloat 4s ease-in-out infinite;
    }
    .footer-logo img {
        width: 100%;
        height: 100%;
        object-fit: contain;
    }
    @keyframes footerFloat {
        0%, 100% { transform: translateY(0) scale(1); }
        50% { transform: translateY(-10px) scale(1.02); }
    }
    .footer-contact {
        display: flex;
        flex-direction: column;
        align-items: flex-end;
        text-align: right;
        gap: 0.5rem;
    }
    .footer-title {
        font-size: 1.875rem;
        font-weight: 700;
        color: var(--azure-vibrant);
        margin: 0 0 0.75rem 0;
    }
    .footer-address {
        color: rgba(255, 255, 255, 0.8);
        margin: 0 0 1rem 0;
    }
    .donation {
        position: relative;
        display: flex;
        flex-direction: column;
        align-items: flex-end;
        margin-bottom: 1.5rem;
    }
    .donation-trigger {
        background: none;
        border: none;
        cursor: pointer;
        font-family: inherit;
        text-align: right;
        position: relative;
        z-index: 30;
    }
    .donation-trigger:active {
        transform: scale(0.95);
    }
    .donation-headline {
        display: inline-block;
        font-size: 1.5rem;
        font-weight: 700;
        animation: headlineBob 3s ease-in-out infinite, headlineColor 3s ease-in-out infinite;
    }
    @keyframes headlineBob {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-4px); }
    }
    @keyframes headlineColor {
        0%, 100% { color: var(--azure-vibrant); }
        50% { color: #ffffff; }
    }
    .donation-sub {
        color: #fff;
        font-size: 1.125rem;
    }
    .donation-panel {
        position: absolute;
        bottom: 100%;
        right: 0;
        margin-bottom: 1.5rem;
        width: 20rem;
        background: #fff;
        color: var(--azure-deep);
        padding: 1.5rem;
        border-radius: 1rem;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
        transition: all 0.3s;
        transform-origin: bottom;
        z-index: 9999;
        opacity: 0;
        visibility: hidden;
        transform: translateY(1rem) scale(0.95);
    }
    .donation-panel.open {
        opacity: 1;
        visibility: visible;
        transform: translateY(0) scale(1);
    }
    .donation-panel-arrow {
        position: absolute;
        top: 100%;
        right: 2.5rem;
        border: 10px solid transparent;
        border-top-color: #fff;
    }
    .donation-panel h4 {
        text-align: center;
        font-size: 1.25rem;
        font-weight: 700;
        color: var(--azure-vibrant);
        margin: 0 0 0.75rem 0;
        padding-bottom: 0.5rem;
        border-bottom: 1px solid rgba(36, 82, 110, 0.1);
    }
    .donation-rows {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        font-size: 0.875rem;
    }
    .donation-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
        background: #f9fafb;
        padding: 0.5rem;
        border-radius: 0.5rem;
    }
    .donation-row.highlighted {
        background: rgba(36, 82, 110, 0.1);
        border: 1px solid rgba(36, 82, 110, 0.2);
        font-weight: 800;
    }
    .donation-row-value, .donation-pix-value {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-weight: 700;
    }
    .donation-pix {
        padding-top: 0.5rem;
        text-align: center;
    }
    .donation-pix-label {
        font-size: 0.75rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        color: rgba(36, 82, 110, 0.5);
        margin: 0 0 0.25rem 0;
    }
    .donation-pix-value {
        justify-content: center;
        font-size: 1.125rem;
    }
    .donation-pix-value p {
        margin: 0;
        user-select: all;
    }
    .copy-button {
        background: none;
        border: none;
        padding: 0.25rem;
        cursor: pointer;
        color: var(--azure-vibrant);
    }
    .copy-button:hover {
        color: var(--azure-deep);
    }
    .footer-links {
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }
    .footer-links a {
        color: #fff;
        font-size: 1.125rem;
        text-decoration: none;
        transition: color 0.3s;
    }
    .footer-links a:hover {
        color: var(--azure-vibrant);
    }
    .footer-bottom {
        max-width: 80rem;
        margin: 3rem auto 0 auto;
        padding: 2rem 1.5rem 0 1.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        font-size: 0.875rem;
        color: rgba(255, 255, 255, 0.4);
    }
    @media (max-width: 767px) {
        .footer-content {
            flex-direction: column;
        }
        .footer-logo {
            width: 8rem;
            height: 8rem;
        }
        .footer-contact, .donation {
            align-items: center;
            text-align: center;
        }
        .donation-trigger {
            text-align: center;
        }
        .donation-panel {
            right: 50%;
            transform: translate(50%, 1rem) scale(0.95);
        }
        .donation-panel.open {
            transform: translate(50%, 0) scale(1);
        }
        .donation-panel-arrow {
            right: auto;
            left: 50%;
            transform: translateX(-50%);
        }
        .footer-bottom {
            text-align: center;
        }
    }
"#;
