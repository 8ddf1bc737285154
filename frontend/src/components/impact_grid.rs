use yew::prelude::*;

use crate::donation::viewport::use_revealed;

struct ImpactItem {
    image: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
}

static IMPACT_ITEMS: [ImpactItem; 2] = [
    ImpactItem {
        image: "/images/seccion2.1.png",
        title: "IMPACTO SOCIAL SUPERIOR R$145 MIL COM SERVIÇOS PALIATIVOS",
        subtitle: "21 Pacientes ativos mensalmente",
        description: "Recebendo cuidados integrais e atenção multidisciplinar personalizada.",
    },
    ImpactItem {
        image: "/images/seccion2.2.png",
        title: "BLOQUEIO JUDICIAL DE R$384 MIL PARA TRATAMENTOS DE PACIENTES TERMINAIS",
        subtitle: "370+ Pessoas Atendidas",
        description: "Nos últimos dois anos, oferecendo suporte contínuo e humano.",
    },
];

/// "Nosso Impacto" with a ribbon sweeping across it the first time it is seen.
#[function_component(RibbonTitle)]
fn ribbon_title() -> Html {
    let node = use_node_ref();
    let revealed = use_revealed(node.clone());

    html! {
        <div ref={node} class={classes!("ribbon-title", revealed.then(|| "revealed"))}>
            <h2 class="ribbon-base">{"Nosso Impacto"}</h2>
            <div class="ribbon-sweep">
                <div class="ribbon-band"></div>
                <h2 class="ribbon-text">{"Nosso Impacto"}</h2>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ImpactCardProps {
    index: usize,
}

#[function_component(ImpactCard)]
fn impact_card(props: &ImpactCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_revealed(node.clone());
    let item = &IMPACT_ITEMS[props.index];

    html! {
        <div
            ref={node}
            class={classes!("impact-item", revealed.then(|| "revealed"))}
            style={format!("transition-delay: {:.1}s;", props.index as f64 * 0.2)}
        >
            <div class="impact-image">
                <img src={item.image} alt={item.title} />
            </div>
            <div class="impact-card">
                <h3>{item.title}</h3>
                <div class="impact-separator"></div>
                <h4>{item.subtitle}</h4>
                <p>{item.description}</p>
                <div class="impact-shine"></div>
            </div>
        </div>
    }
}

#[function_component(ImpactGrid)]
pub fn impact_grid() -> Html {
    let subtitle_node = use_node_ref();
    let subtitle_revealed = use_revealed(subtitle_node.clone());

    html! {
        <section id="impacto" class="impact">
            <style>{IMPACT_CSS}</style>
            <div class="impact-content">
                <div class="impact-header">
                    <RibbonTitle />
                    <p
                        ref={subtitle_node}
                        class={classes!("impact-subtitle", subtitle_revealed.then(|| "revealed"))}
                    >
                        {"Transformando realidades através do cuidado integral."}
                    </p>
                </div>

                <div class="impact-list">
                    { for (0..IMPACT_ITEMS.len()).map(|index| html! { <ImpactCard {index} /> }) }
                </div>
            </div>
        </section>
    }
}

const IMPACT_CSS: &str = r#"
    .impact {
        padding: 6rem 0;
        background: #f8f7f4;
    }
    .impact-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .impact-header {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        margin-bottom: 4rem;
    }
    .ribbon-title {
        position: relative;
        display: inline-block;
        margin-bottom: 1rem;
    }
    .ribbon-title h2 {
        font-size: 2.25rem;
        font-weight: 700;
        margin: 0;
    }
    .ribbon-base {
        color: var(--azure-deep);
        transition: color 0.5s cubic-bezier(0.34, 1.56, 0.64, 1) 1.8s, transform 0.5s cubic-bezier(0.34, 1.56, 0.64, 1) 1.8s;
    }
    .ribbon-title.revealed .ribbon-base {
        color: #00bfff;
        transform: scale(1.15);
    }
    .ribbon-sweep {
        position: absolute;
        inset: 0;
        overflow: hidden;
        pointer-events: none;
        clip-path: inset(0 100% 0 0);
    }
    .ribbon-title.revealed .ribbon-sweep {
        animation: ribbonSweep 1.8s ease-in-out forwards;
    }
    @keyframes ribbonSweep {
        0% { clip-path: inset(0 100% 0 0); }
        50% { clip-path: inset(0 0 0 0); }
        100% { clip-path: inset(0 0 0 100%); }
    }
    .ribbon-band {
        position: absolute;
        inset: 0;
        opacity: 0.9;
        background: linear-gradient(to right, transparent, #00bfff, #00bfff);
    }
    .ribbon-text {
        position: relative;
        color: #fff;
    }
    .impact-subtitle {
        font-size: 1.25rem;
        font-weight: 300;
        color: rgba(36, 82, 110, 0.7);
        max-width: 42rem;
        opacity: 0;
        transform: translateY(10px);
        transition: opacity 0.8s ease 2s, transform 0.8s ease 2s;
    }
    .impact-subtitle.revealed {
        opacity: 1;
        transform: translateY(0);
    }
    .impact-list {
        display: flex;
        flex-direction: column;
        gap: 4rem;
    }
    .impact-item {
        display: flex;
        align-items: center;
        gap: 4rem;
        opacity: 0;
        transform: translateY(50px);
        transition-property: opacity, transform;
        transition-duration: 0.8s;
    }
    .impact-item.revealed {
        opacity: 1;
        transform: translateY(0);
    }
    .impact-image {
        width: 50%;
        aspect-ratio: 4 / 3;
        overflow: hidden;
        border-radius: 1rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
    }
    .impact-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        filter: grayscale(1);
        transition: filter 0.7s ease-in-out, transform 0.5s;
    }
    .impact-item:hover .impact-image img,
    .impact-item:active .impact-image img {
        filter: grayscale(0);
        transform: scale(1.05);
    }
    .impact-card {
        position: relative;
        overflow: hidden;
        width: 50%;
        padding: 2rem;
        background: #fff;
        border-radius: 1.5rem;
        border: 1px solid rgba(255, 255, 255, 0.5);
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
        transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
    }
    .impact-card:hover, .impact-card:active {
        transform: translateY(-8px) scale(1.02);
    }
    .impact-card h3 {
        font-size: 1.875rem;
        font-weight: 900;
        line-height: 1.2;
        text-transform: uppercase;
        color: var(--azure-vibrant);
        margin: 0 0 1rem 0;
    }
    .impact-separator {
        width: 5rem;
        height: 0.375rem;
        border-radius: 9999px;
        opacity: 0.5;
        background: linear-gradient(to right, var(--azure-vibrant), rgba(36, 82, 110, 0.2));
        margin-bottom: 1rem;
    }
    .impact-card h4 {
        font-size: 1.25rem;
        font-weight: 700;
        color: var(--azure-deep);
        margin: 0 0 1rem 0;
    }
    .impact-card p {
        font-size: 1.125rem;
        line-height: 1.6;
        color: rgba(36, 82, 110, 0.8);
        margin: 0;
    }
    .impact-shine {
        position: absolute;
        inset: 0;
        pointer-events: none;
        opacity: 0;
        transform: translateX(-100%);
        background: linear-gradient(to top right, rgba(255, 255, 255, 0), rgba(255, 255, 255, 0.4), rgba(255, 255, 255, 0));
        transition: opacity 0.7s, transform 0.7s ease-in-out;
    }
    .impact-card:hover .impact-shine {
        opacity: 1;
        transform: translateX(100%);
    }
    @media (max-width: 767px) {
        .impact-item {
            flex-direction: column;
            gap: 2rem;
        }
        .impact-image, .impact-card {
            width: 100%;
        }
        .impact-card h3 {
            font-size: 1.5rem;
        }
    }
"#;
