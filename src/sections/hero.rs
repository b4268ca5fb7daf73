use log::info;
use yew::prelude::*;

use crate::components::glass_button::GlassButton;
use crate::components::icon::{stroke_icon, ARROW_DOWN, ARROW_RIGHT};
use crate::components::reveal::Reveal;
use crate::config;
use crate::effects::scroll_to_section;
use crate::hooks::use_scroll_y;
use crate::sections::{DEALERSHIP_ID, GALLERY_ID, SPECS_ID};
use crate::styles::{self, GlassTone};

const HERO_VIDEO: &str = "/hero-video.mp4";
const HERO_VIDEO_FALLBACK: &str = "https://videos.pexels.com/video-files/3045163/3045163-uhd_2560_1440_25fps.mp4";
const HERO_POSTER: &str = "/scrambler-wallpaper-7.jpeg";
const LOGO: &str = "/logo-sem-fundo1-triumph.png";

fn scroll_callback(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        info!("Scrolling to #{}", id);
        scroll_to_section(id);
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll_y = use_scroll_y();
    let poster = config::asset_url(HERO_POSTER);

    html! {
        <section class="hero">
            <div class="hero-background">
                <video
                    class="hero-video"
                    style={styles::parallax(scroll_y)}
                    autoplay={true}
                    loop={true}
                    muted={true}
                    playsinline={true}
                    poster={poster.clone()}
                    aria-label="Vídeo de fundo da Scrambler 400X"
                >
                    <source src={config::asset_url(HERO_VIDEO)} type="video/mp4" />
                    <source src={HERO_VIDEO_FALLBACK} type="video/mp4" />
                    <img src={poster} alt="Triumph Scrambler 400X" class="hero-video" />
                </video>
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content container">
                <Reveal class="hero-stack">
                    <img
                        class="hero-logo"
                        src={config::asset_url(LOGO)}
                        alt="Triumph Euro Motors - Concessionária Triumph em São José do Rio Preto"
                    />
                    <h1 class="hero-title">{"Scrambler 400X"}</h1>
                    <p class="hero-tagline">{"Liberdade em duas rodas"}</p>
                    <p class="hero-subtitle muted">
                        {"Design clássico. Performance moderna. Para quem vive a estrada com propósito."}
                    </p>
                    <p class="hero-dealer muted">
                        {"Disponível em São José do Rio Preto na "}
                        <strong>{"Triumph Euro Motors"}</strong>
                    </p>

                    <div class="hero-cta-group">
                        <GlassButton
                            tone={GlassTone::Primary}
                            aria_label="Agende um test-ride"
                            onclick={scroll_callback(DEALERSHIP_ID)}
                        >
                            {"Agende um test-ride"}
                            { stroke_icon(&[ARROW_RIGHT], "icon") }
                        </GlassButton>
                        <GlassButton
                            tone={GlassTone::Secondary}
                            aria_label="Ver galeria"
                            onclick={scroll_callback(GALLERY_ID)}
                        >
                            {"Ver galeria"}
                        </GlassButton>
                        <GlassButton
                            tone={GlassTone::Secondary}
                            aria_label="Ver ficha técnica"
                            onclick={scroll_callback(SPECS_ID)}
                        >
                            {"Ficha Técnica"}
                        </GlassButton>
                    </div>

                    <div class="scroll-indicator">
                        { stroke_icon(&[ARROW_DOWN], "icon") }
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        overflow: hidden;
                    }

                    .hero-video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        will-change: transform;
                    }

                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(12, 15, 18, 0.8), rgba(12, 15, 18, 0.4), transparent);
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        padding-top: 8rem;
                        padding-bottom: 8rem;
                        text-align: center;
                    }

                    .hero-logo {
                        height: 10rem;
                        width: auto;
                        object-fit: contain;
                        filter: brightness(1.1) drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
                        margin-bottom: 1rem;
                    }

                    .hero-title {
                        font-size: clamp(3rem, 8vw, 6rem);
                        line-height: 1.1;
                        letter-spacing: -0.02em;
                    }

                    .hero-tagline {
                        font-family: 'Oswald', sans-serif;
                        font-size: clamp(1.5rem, 3vw, 2.25rem);
                        letter-spacing: 0.03em;
                        margin: 1.5rem 0 1rem;
                    }

                    .hero-subtitle {
                        font-size: clamp(1.1rem, 2vw, 1.5rem);
                        line-height: 1.6;
                        max-width: 42rem;
                        margin: 0 auto 1rem;
                    }

                    .hero-dealer strong {
                        color: #F3F4F2;
                    }

                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        padding-top: 2rem;
                    }

                    .scroll-indicator {
                        padding-top: 3rem;
                        color: rgba(184, 189, 195, 0.6);
                        animation: bounce 1s infinite;
                    }

                    .scroll-indicator .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }

                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }

                    @media (max-width: 768px) {
                        .hero-logo {
                            height: 7rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
