use yew::prelude::*;

use crate::donation::viewport::ViewportClass;

struct Service {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

static SERVICES: [Service; 3] = [
    Service {
        title: "Terapias Integrativas",
        description: "Ozonioterapia, Acupuntura, Auriculoterapia, Reiki e Massoterapia para alívio da dor e bem-estar.",
        image: "/images/3.png",
    },
    Service {
        title: "Suporte Profissional",
        description: "Equipe multidisciplinar com Psicologia e Suporte Jurídico para garantir direitos e saúde mental.",
        image: "/images/service_focus.png",
    },
    Service {
        title: "Atividades & Inclusão",
        description: "Aulas de Artes e eventos comunitários (Bazar, Feijuca) para integração social e angariação de fundos.",
        image: "/images/service3.jpg",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    let viewport = use_context::<ViewportClass>().unwrap_or_default();

    // Phones get no hover, so the ribbon cycles its colours on its own instead.
    let ribbon_class = classes!("services-ribbon", viewport.is_narrow().then(|| "cycling"));

    html! {
        <section id="servicos" class="services">
            <style>{SERVICES_CSS}</style>
            <div class={ribbon_class}>
                <div class="services-ribbon-bg"></div>
                <div class="services-ribbon-content">
                    <h2><span>{"Nossos Serviços"}</span></h2>
                    <p>
                        <span>{"\"Curar algumas vezes, aliviar frequentemente, confortar sempre.\""}</span>
                    </p>
                </div>
            </div>

            <div class="services-content">
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <div class="service-image">
                                <img src={service.image} alt={service.title} />
                            </div>
                            <div class="service-body">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                            <div class="service-bar"></div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const SERVICES_CSS: &str = r#"
    .services {
        padding-bottom: 6rem;
        background: rgba(255, 255, 255, 0.4);
    }
    .services-ribbon {
        position: relative;
        width: 100%;
        margin-bottom: 4rem;
        padding: 2.5rem 0;
        cursor: default;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .services-ribbon-bg {
        position: absolute;
        inset: 0;
        background: var(--azure-vibrant);
        transition: background-color 0.5s;
    }
    .services-ribbon:hover .services-ribbon-bg {
        background: var(--azure-deep);
    }
    .services-ribbon-content {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        text-align: center;
    }
    .services-ribbon h2 {
        font-size: 3rem;
        font-weight: 700;
        color: var(--azure-deep);
        margin: 0 0 0.5rem 0;
        transition: color 0.5s;
    }
    .services-ribbon p {
        font-size: 1.25rem;
        font-weight: 500;
        font-style: italic;
        color: #4b5563;
        margin: 0;
        transition: color 0.5s;
    }
    .services-ribbon:hover h2 {
        color: #fff;
    }
    .services-ribbon:hover p {
        color: var(--azure-vibrant);
    }
    .services-ribbon.cycling .services-ribbon-bg {
        animation: ribbonBg 9s ease-in-out infinite;
    }
    .services-ribbon.cycling h2 span {
        animation: ribbonTitle 9s ease-in-out infinite;
    }
    .services-ribbon.cycling p span {
        animation: ribbonQuote 9s ease-in-out infinite;
    }
    @keyframes ribbonBg {
        0%, 44% { background-color: #24526e; }
        45%, 99% { background-color: #34bbce; }
        100% { background-color: #24526e; }
    }
    @keyframes ribbonTitle {
        0%, 44% { color: #ffffff; }
        45%, 99% { color: #24526e; }
        100% { color: #ffffff; }
    }
    @keyframes ribbonQuote {
        0%, 44% { color: #34bbce; }
        45%, 99% { color: #4b5563; }
        100% { color: #34bbce; }
    }
    .services-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2.5rem;
    }
    .service-card {
        position: relative;
        background: #fff;
        border-radius: 1rem;
        overflow: hidden;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
        transition: box-shadow 0.3s;
    }
    .service-card:hover {
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
    }
    .service-image {
        height: 16rem;
        overflow: hidden;
    }
    .service-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        object-position: center;
        transition: transform 0.7s, filter 0.7s;
    }
    .service-card:hover .service-image img {
        transform: scale(1.1);
    }
    .service-body {
        padding: 2rem;
    }
    .service-body h3 {
        font-size: 1.5rem;
        font-weight: 700;
        color: var(--azure-deep);
        margin: 0 0 0.75rem 0;
        transition: color 0.3s;
    }
    .service-card:hover .service-body h3 {
        color: var(--azure-vibrant);
    }
    .service-body p {
        color: #4b5563;
        line-height: 1.6;
        margin: 0;
    }
    .service-bar {
        height: 0.25rem;
        width: 0;
        background: var(--azure-deep);
        transition: width 0.5s;
    }
    .service-card:hover .service-bar {
        width: 100%;
    }
    @media (max-width: 767px) {
        .services-grid {
            grid-template-columns: 1fr;
        }
        .services-ribbon h2 {
            font-size: 2.25rem;
        }
    }
"#;
