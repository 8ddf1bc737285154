use yew::prelude::*;

use crate::components::{
    footer::Footer, header::Header, hero::Hero, impact_grid::ImpactGrid, services::Services,
};
use crate::donation::viewport::ViewportClass;

#[function_component(Home)]
pub fn home() -> Html {
    let viewport = use_context::<ViewportClass>().unwrap_or_default();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="home">
            <style>{r#"
                :root {
                    --azure-deep: #24526e;
                    --azure-vibrant: #34bbce;
                    --bone: #f5f3ee;
                }
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: 'Outfit', -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    -webkit-font-smoothing: antialiased;
                    background: var(--bone);
                }
                .home {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                }
            "#}</style>
            <Header />
            <Hero />
            <ImpactGrid />
            <Services />
            <Footer {viewport} />
        </main>
    }
}
