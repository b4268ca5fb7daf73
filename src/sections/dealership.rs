use yew::prelude::*;

use crate::components::glass_button::GlassButton;
use crate::components::icon::{stroke_icon, CLOCK, PHONE, PIN, PIN_DOT};
use crate::components::reveal::Reveal;
use crate::config;
use crate::sections::DEALERSHIP_ID;
use crate::styles::GlassTone;

fn lines(items: &[&'static str]) -> Html {
    html! {
        <>
            { for items.iter().map(|line| html! { <>{ *line }<br /></> }) }
        </>
    }
}

#[function_component(Dealership)]
pub fn dealership() -> Html {
    html! {
        <section class="section dealership" id={DEALERSHIP_ID}>
            <div class="container">
                <h2 class="section-title">{"Concessionária Triumph em São José do Rio Preto"}</h2>

                <div class="dealership-grid">
                    <Reveal class="dealership-info">
                        <h3 class="panel-title">{ config::DEALERSHIP_NAME }</h3>

                        <div class="contact-row">
                            { stroke_icon(&[PIN, PIN_DOT], "icon contact-icon") }
                            <div>
                                <p class="contact-title">{"Endereço"}</p>
                                <p class="muted">{ lines(config::DEALERSHIP_ADDRESS) }</p>
                            </div>
                        </div>

                        <div class="contact-row">
                            { stroke_icon(&[PHONE], "icon contact-icon") }
                            <div>
                                <p class="contact-title">{"Telefone"}</p>
                                <a class="muted contact-link" href={config::phone_link()}>
                                    { config::DEALERSHIP_PHONE_DISPLAY }
                                </a>
                            </div>
                        </div>

                        <div class="contact-row">
                            { stroke_icon(&[CLOCK], "icon contact-icon") }
                            <div>
                                <p class="contact-title">{"Horário de Funcionamento"}</p>
                                <p class="muted">{ lines(config::DEALERSHIP_HOURS) }</p>
                            </div>
                        </div>

                        <div class="dealership-actions">
                            <GlassButton
                                tone={GlassTone::Primary}
                                aria_label="Abrir no Google Maps"
                                href={AttrValue::from(config::map_search_url(config::MAP_SEARCH_QUERY))}
                                external={true}
                            >
                                { stroke_icon(&[PIN, PIN_DOT], "icon") }
                                {"Abrir no Google Maps"}
                            </GlassButton>
                            <GlassButton
                                tone={GlassTone::Secondary}
                                aria_label="Ligar Agora"
                                href={AttrValue::from(config::phone_link())}
                            >
                                { stroke_icon(&[PHONE], "icon") }
                                {"Ligar Agora"}
                            </GlassButton>
                        </div>
                    </Reveal>

                    <Reveal class="map-frame" delay_secs={0.1}>
                        <iframe
                            src={config::MAP_EMBED_URL}
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            allowfullscreen={true}
                            title="Localização da Concessionária Triumph Euro Motors em São José do Rio Preto"
                        />
                    </Reveal>
                </div>
            </div>

            <style>
                {r#"
                    .dealership {
                        background: rgba(26, 31, 36, 0.3);
                    }

                    .dealership-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: start;
                    }

                    .contact-row {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }

                    .contact-row p {
                        margin: 0;
                    }

                    .contact-icon {
                        flex-shrink: 0;
                        margin-top: 0.25rem;
                    }

                    .contact-title {
                        font-weight: 500;
                        margin-bottom: 0.25rem !important;
                    }

                    .contact-link {
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }

                    .contact-link:hover {
                        color: #F3F4F2;
                    }

                    .dealership-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        padding-top: 1rem;
                    }

                    .dealership-actions .glass-button {
                        padding: 0.75rem 1.5rem;
                    }

                    .map-frame {
                        position: relative;
                        aspect-ratio: 1 / 1;
                        border-radius: 24px;
                        overflow: hidden;
                        border: 1px solid rgba(243, 244, 242, 0.2);
                        box-shadow: 0 12px 48px rgba(0, 0, 0, 0.6);
                    }

                    .map-frame iframe {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        border: 0;
                    }

                    @media (max-width: 768px) {
                        .dealership-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
