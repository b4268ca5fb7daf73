use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::LIFESTYLE_IMAGES;

#[function_component(Lifestyle)]
pub fn lifestyle() -> Html {
    html! {
        <section class="section lifestyle">
            <div class="container lifestyle-grid">
                <Reveal class="lifestyle-text">
                    <h2 class="section-title">{"Mais Que Uma Moto, Um Estilo de Vida"}</h2>
                    <p class="muted">
                        {"A Scrambler 400X não é apenas uma motocicleta. É sua passagem para explorar estradas menos percorridas, descobrir novos horizontes e viver cada momento com intensidade."}
                    </p>
                    <p class="muted">
                        {"Com seu design clássico reinterpretado e tecnologia moderna, ela combina o melhor dos dois mundos: a autenticidade de uma scrambler britânica e a confiabilidade que você precisa para qualquer aventura."}
                    </p>
                    <p class="lifestyle-quote">
                        {"\"Não se trata de chegar ao destino. Trata-se de cada curva, cada trilha, cada momento em que você se sente verdadeiramente livre.\""}
                    </p>
                </Reveal>

                <div class="lifestyle-images">
                    { for LIFESTYLE_IMAGES.iter().enumerate().map(|(i, (src, alt))| html! {
                        <Reveal key={*src} class={classes!("lifestyle-image", (i == 0).then(|| "wide"))} delay_secs={i as f64 * 0.1}>
                            <img src={config::asset_url(src)} alt={*alt} loading="lazy" />
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .lifestyle {
                        background: rgba(26, 31, 36, 0.3);
                    }

                    .lifestyle-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .lifestyle-text .section-title {
                        text-align: left;
                        margin-bottom: 1.5rem;
                    }

                    .lifestyle-text p {
                        font-size: 1.125rem;
                        line-height: 1.7;
                    }

                    .lifestyle-quote {
                        font-style: italic;
                        border-left: 2px solid rgba(243, 244, 242, 0.3);
                        padding-left: 1rem;
                    }

                    .lifestyle-images {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }

                    .lifestyle-image {
                        border-radius: 16px;
                        overflow: hidden;
                        aspect-ratio: 1 / 1;
                    }

                    .lifestyle-image.wide {
                        grid-column: span 2;
                        aspect-ratio: 16 / 9;
                    }

                    .lifestyle-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }

                    .lifestyle-image:hover img {
                        transform: scale(1.05);
                    }

                    @media (max-width: 768px) {
                        .lifestyle-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
