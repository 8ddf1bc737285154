use yew::prelude::*;

use crate::config;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <style>{r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: linear-gradient(to right, var(--azure-deep), var(--azure-vibrant));
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    color: var(--bone);
                }
                .header-handle {
                    font-weight: 700;
                    font-size: 1.125rem;
                    letter-spacing: 0.025em;
                    color: inherit;
                    text-decoration: none;
                    opacity: 0.9;
                }
                .header-handle:hover {
                    opacity: 1;
                    color: #fff;
                }
                .header-nav {
                    display: flex;
                    flex: 1;
                    justify-content: center;
                    gap: 3rem;
                }
                .header-nav a {
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #fff;
                    text-decoration: none;
                    text-underline-offset: 4px;
                }
                .header-nav a:hover {
                    color: #e7e5e4;
                    text-decoration: underline;
                }
                .header-cta {
                    background: var(--azure-deep);
                    color: var(--bone);
                    padding: 0.5rem 2rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 0.875rem;
                    text-decoration: none;
                    border: 1px solid transparent;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    transition: all 0.3s;
                }
                .header-cta:hover {
                    background: var(--bone);
                    color: var(--azure-deep);
                    border-color: var(--azure-deep);
                }
                @media (max-width: 767px) {
                    .header-nav {
                        display: none;
                    }
                }
            "#}</style>
            <div class="header-content">
                <a class="header-handle" href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">
                    {config::INSTAGRAM_HANDLE}
                </a>

                <nav class="header-nav">
                    <a href="#historia">{"Nossa História"}</a>
                    <a href="#impacto">{"Impacto"}</a>
                    <a href="#servicos">{"Serviços"}</a>
                </nav>

                <a class="header-cta" href={config::WHATSAPP_CTA_URL} target="_blank" rel="noopener noreferrer">
                    {"Fale Conosco"}
                </a>
            </div>
        </header>
    }
}
