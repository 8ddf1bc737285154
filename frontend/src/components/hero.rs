use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::about_modal::AboutModal;
use crate::config::HERO_CYCLE_MS;

const WAVES: [(&str, &str, &str); 3] = [
    (
        "M0,256L48,229.3C96,203,192,149,288,154.7C384,160,480,224,576,218.7C672,213,768,139,864,128C960,117,1056,171,1152,197.3C1248,224,1344,224,1392,224L1440,224L1440,320L1392,320C1344,320,1248,320,1152,320C1056,320,960,320,864,320C768,320,672,320,576,320C480,320,384,320,288,320C192,320,96,320,48,320L0,320Z",
        "-20%",
        "120%",
    ),
    (
        "M0,64L48,80C96,96,192,128,288,128C384,128,480,96,576,106.7C672,117,768,171,864,197.3C960,224,1056,224,1152,213.3C1248,203,1344,181,1392,170.7L1440,160L1440,320L1392,320C1344,320,1248,320,1152,320C1056,320,960,320,864,320C768,320,672,320,576,320C480,320,384,320,288,320C192,320,96,320,48,320L0,320Z",
        "-10%",
        "100%",
    ),
    (
        "M0,160L48,176C96,192,192,224,288,208C384,192,480,128,576,133.3C672,139,768,213,864,229.3C960,245,1056,203,1152,181.3C1248,160,1344,160,1392,160L1440,160L1440,320L1392,320C1344,320,1248,320,1152,320C1056,320,960,320,864,320C768,320,672,320,576,320C480,320,384,320,288,320C192,320,96,320,48,320L0,320Z",
        "-15%",
        "90%",
    ),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let hovered = use_state_eq(|| false);
    let cycle_active = use_state_eq(|| false);
    let cycle_timer = use_mut_ref(|| None::<Timeout>);
    let modal_open = use_state_eq(|| false);

    // Drop the pending cycle timeout if the page goes away mid-cycle
    {
        let cycle_timer = cycle_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    cycle_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    // One tap plays a full wave cycle; taps during a cycle are ignored.
    let trigger_cycle = {
        let cycle_active = cycle_active.clone();
        let cycle_timer = cycle_timer.clone();
        Callback::from(move |_: MouseEvent| {
            if *cycle_active {
                return;
            }
            debug!("hero: starting wave cycle");
            cycle_active.set(true);
            let cycle_active = cycle_active.clone();
            *cycle_timer.borrow_mut() = Some(Timeout::new(HERO_CYCLE_MS, move || {
                cycle_active.set(false);
            }));
        })
    };

    let on_hover_start = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_hover_end = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    let show_waves = *hovered || *cycle_active;

    html! {
        <section id="historia" class={classes!("hero", show_waves.then(|| "waves-on"))}>
            <style>{HERO_CSS}</style>
            <AboutModal is_open={*modal_open} on_close={close_modal} />

            <div class="hero-waves">
                { for WAVES.iter().enumerate().map(|(index, (path, left, height))| html! {
                    <div
                        class={format!("hero-wave hero-wave-{}", index)}
                        style={format!("left: {}; height: {}; --wave-index: {};", left, height, index)}
                    >
                        <svg viewBox="0 0 1440 320" preserveAspectRatio="none">
                            <path fill-opacity="1" d={*path}></path>
                        </svg>
                    </div>
                }) }
            </div>

            <div class="hero-grid">
                <div class="hero-text" onclick={trigger_cycle.clone()}>
                    <h1>{"Instituto"}<br />{"Sobre'Viver"}</h1>
                    <p>
                        {"\"Para quem tem fé, a vida nunca acaba.\""}
                        <br />
                        {"Cuidamos de pessoas que enfrentam doenças graves, progressivas e sem possibilidade de cura, oferecendo cuidados paliativos com respeito, dignidade e acolhimento."}
                    </p>
                    <div class="hero-actions">
                        <button class="hero-about-button" onclick={open_modal}>{"Quem Somos"}</button>
                    </div>
                </div>

                <div
                    class="hero-logo"
                    onmouseenter={on_hover_start}
                    onmouseleave={on_hover_end}
                    onclick={trigger_cycle}
                >
                    <img src="/images/logo.png" alt="Instituto Sobre'Viver Logo" />
                </div>
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 90vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 8rem 0 3rem 0;
        overflow: hidden;
        background: var(--bone);
    }
    .hero-waves {
        position: absolute;
        inset: 0;
        z-index: 0;
        pointer-events: none;
        overflow: hidden;
    }
    .hero-wave {
        position: absolute;
        bottom: 0;
        width: 150%;
        opacity: 0;
        transform: translateX(-100%);
        transition: transform 0.8s ease-in-out, opacity 0.8s ease-in-out;
        transition-delay: calc(var(--wave-index) * 0.1s);
    }
    .hero-wave svg {
        width: 100%;
        height: 100%;
        fill: currentColor;
    }
    .hero-wave-0 { color: rgba(36, 82, 110, 0.15); }
    .hero-wave-1 { color: rgba(74, 142, 161, 0.15); }
    .hero-wave-2 { color: rgba(139, 188, 196, 0.5); }
    .waves-on .hero-wave {
        opacity: 1;
        transform: translateX(0);
        transition-duration: 1.2s;
        transition-delay: calc(var(--wave-index) * 0.2s);
        animation: waveDrift calc(3s + var(--wave-index) * 1s) ease-in-out 1.2s infinite alternate;
    }
    .waves-on .hero-wave-1 {
        animation-name: waveDriftBack;
    }
    @keyframes waveDrift {
        from { transform: translateX(0); }
        to { transform: translateX(5%); }
    }
    @keyframes waveDriftBack {
        from { transform: translateX(0); }
        to { transform: translateX(-5%); }
    }
    .hero-grid {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        width: 100%;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .hero-text {
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        transition: transform 0.6s ease-out;
    }
    .waves-on .hero-text {
        transform: translateX(10px) scale(1.05);
    }
    .hero-text h1 {
        font-size: 4.5rem;
        font-weight: 700;
        line-height: 1.1;
        color: var(--azure-deep);
        margin: 0 0 1.5rem 0;
    }
    .hero-text p {
        font-size: 1.5rem;
        font-weight: 300;
        line-height: 1.6;
        color: rgba(36, 82, 110, 0.7);
        margin: 0 0 2rem 0;
    }
    .hero-about-button {
        padding: 0.75rem 2rem;
        background: var(--azure-vibrant);
        color: var(--bone);
        border: none;
        border-radius: 9999px;
        font-family: inherit;
        font-weight: 700;
        font-size: 1.125rem;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
        transition: all 0.3s;
    }
    .hero-about-button:hover {
        background: var(--azure-deep);
        color: #fff;
        transform: scale(1.05);
    }
    .hero-logo {
        position: relative;
        height: 600px;
        display: flex;
        justify-content: center;
        align-items: center;
        cursor: pointer;
        transition: transform 0.6s ease-out;
    }
    .hero-logo img {
        width: 100%;
        height: 100%;
        object-fit: contain;
        filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
    }
    .waves-on .hero-logo {
        animation: logoSway 2s ease-in-out infinite;
    }
    @keyframes logoSway {
        0%, 100% { transform: scale(1.05) rotate(0deg); }
        33% { transform: scale(1.05) rotate(-2deg); }
        66% { transform: scale(1.05) rotate(2deg); }
    }
    @media (max-width: 767px) {
        .hero-grid {
            grid-template-columns: 1fr;
        }
        .hero-logo {
            order: 1;
            height: 400px;
        }
        .hero-text {
            order: 2;
        }
        .hero-text h1 {
            font-size: 3rem;
        }
        .hero-text p {
            font-size: 1.25rem;
        }
        .hero-wave {
            width: 300%;
        }
    }
"#;
