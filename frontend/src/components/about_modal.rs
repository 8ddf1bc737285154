use web_sys::{window, MouseEvent};
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct AboutModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Pins the body while the modal is open so touch scrolling stays inside it.
fn set_body_scroll_lock(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let (overflow, position, width) = if locked {
        ("hidden", "fixed", "100%")
    } else {
        ("unset", "unset", "unset")
    };
    let style = body.style();
    let _ = style.set_property("overflow", overflow);
    let _ = style.set_property("position", position);
    let _ = style.set_property("width", width);
}

#[function_component(AboutModal)]
pub fn about_modal(props: &AboutModalProps) -> Html {
    use_effect_with_deps(
        move |is_open: &bool| {
            set_body_scroll_lock(*is_open);
            || set_body_scroll_lock(false)
        },
        props.is_open,
    );

    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="about-backdrop" onclick={close.clone()}>
            <style>{r#"
                .about-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    animation: aboutFade 0.3s ease-out;
                }
                .about-card {
                    position: relative;
                    width: 100%;
                    max-width: 420px;
                    height: 85vh;
                    max-height: 850px;
                    border-radius: 32px;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
                    animation: aboutRise 0.35s ease-out;
                }
                @keyframes aboutFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes aboutRise {
                    from { opacity: 0; transform: translateY(30px) scale(0.95); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }
                .about-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    z-index: 70;
                    padding: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.2);
                    color: #fff;
                    cursor: pointer;
                }
                .about-close:hover {
                    background: rgba(0, 0, 0, 0.4);
                }
                .about-wall {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 65%;
                }
                .about-wall img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: 75% 50%;
                }
                .about-wall::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, transparent 50%, var(--azure-deep));
                }
                .about-title {
                    position: absolute;
                    top: 2rem;
                    left: 1.5rem;
                    z-index: 10;
                    margin: 0;
                    font-size: 2.25rem;
                    font-weight: 800;
                    color: #fff;
                    text-shadow: 0 4px 12px rgba(0, 0, 0, 0.6);
                    animation: aboutSlide 0.6s ease-out 0.2s both;
                }
                @keyframes aboutSlide {
                    from { opacity: 0; transform: translateX(-30px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                .about-blue {
                    position: absolute;
                    top: calc(65% - 3rem);
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    z-index: 10;
                    background: var(--azure-deep);
                }
                .about-scroll {
                    position: absolute;
                    inset: 0;
                    z-index: 30;
                    overflow-y: auto;
                    overscroll-behavior: contain;
                    scrollbar-width: none;
                }
                .about-scroll::-webkit-scrollbar {
                    display: none;
                }
                .about-spacer {
                    height: calc(65% - 3rem);
                }
                .about-text {
                    position: relative;
                    padding: 1rem 2rem 4rem 2rem;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .about-float {
                    float: right;
                    width: 150px;
                    height: 400px;
                    margin: 40px -1rem 0 0;
                }
                .about-name {
                    font-weight: 700;
                    color: var(--azure-vibrant);
                    transition: color 0.3s;
                }
                .about-name:hover {
                    color: #f9a8d4;
                }
                .about-instagram {
                    font-weight: 700;
                    display: inline-block;
                    animation: aboutPulse 3s ease-in-out infinite;
                }
                .about-instagram:hover {
                    transform: scale(1.05);
                }
                @keyframes aboutPulse {
                    0%, 100% { color: #00b4d8; }
                    50% { color: #ff9ec3; }
                }
                .about-illustration {
                    position: absolute;
                    bottom: -10px;
                    right: -45px;
                    width: 250px;
                    height: 600px;
                    z-index: 60;
                    pointer-events: none;
                }
                .about-illustration img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    object-position: bottom;
                }
            "#}</style>
            <div class="about-card" onclick={keep_open}>
                <button class="about-close" onclick={close} aria-label="Fechar">
                    <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M18 6 6 18" />
                        <path d="M6 6 18 18" />
                    </svg>
                </button>

                <div class="about-wall">
                    <img src="/images/fondo_tarjeta.png" alt="Muro do Instituto" />
                    <h2 class="about-title">{"Quem somos?"}</h2>
                </div>
                <div class="about-blue"></div>

                <div class="about-scroll">
                    <div class="about-spacer"></div>
                    <div class="about-text">
                        <div class="about-float"></div>
                        <p>
                            {"Fundado por "}
                            <span class="about-name">{"Valquíria Santos"}</span>
                            {", em homenagem à sua filha Laura, que enfrentou 8 anos de adoecimento com dignidade, felicidade e uma força impressionante."}
                        </p>
                        <p>
                            {"Laura desafiou todas as expectativas, mostrando que o amor é mais forte que qualquer dor. O Instituto vai além de preservar sua memória; é um tributo à fé e à certeza de que o amor floresce."}
                        </p>
                        <p>
                            {"A história de Laura nos inspira a acreditar que o amor é imbatível. Conheçam mais sobre o nosso instituto e já "}
                            <br />
                            {"nos siga no "}
                            <a class="about-instagram" href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                                {"Instagram!"}
                            </a>
                        </p>
                    </div>
                </div>

                <div class="about-illustration">
                    <img src="/images/lau.png" alt="Ilustração de Laura e Valquíria" />
                </div>
            </div>
        </div>
    }
}
