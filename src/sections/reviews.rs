use log::info;
use yew::prelude::*;

use crate::components::icon::PLAY;
use crate::config;
use crate::content::{ReviewVideo, REVIEW_VIDEOS};
use crate::hooks::use_hover;
use crate::state::{Selection, SelectionAction};
use crate::styles;

#[derive(Properties, PartialEq)]
struct VideoCardProps {
    video: &'static ReviewVideo,
    on_open: Callback<&'static ReviewVideo>,
}

#[function_component(VideoCard)]
fn video_card(props: &VideoCardProps) -> Html {
    let hover = use_hover();
    let onclick = {
        let on_open = props.on_open.clone();
        let video = props.video;
        Callback::from(move |_: MouseEvent| on_open.emit(video))
    };

    html! {
        <button
            class="video-card"
            style={styles::lift(hover.hovered, 4, None)}
            aria-label={format!("Assistir: {}", props.video.title)}
            onclick={onclick}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            <img
                class="video-thumbnail"
                src={config::video_thumbnail_url(props.video.youtube_id)}
                alt={props.video.title}
                loading="lazy"
            />
            <div class="video-shade"></div>
            <div class="play-badge">
                <svg class="play-icon" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                    <path d={PLAY} />
                </svg>
            </div>
            <div class="video-info">
                <h3>{ props.video.title }</h3>
                <p>{ props.video.description }</p>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReviewsProps {
    pub selection: Selection,
}

#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    let on_open = {
        let selection = props.selection.clone();
        Callback::from(move |video: &'static ReviewVideo| {
            info!("Opening review video {}", video.id);
            selection.dispatch(SelectionAction::OpenVideoModal(video.clone()));
        })
    };

    html! {
        <section class="section reviews">
            <div class="container">
                <div class="testimonial">
                    <h2 class="section-title">{"Mais Que Uma Moto, Uma Experiência"}</h2>
                    <p class="testimonial-quote muted">
                        {"\"A estrada não escolhe seus pilotos. Mas a Scrambler 400X escolhe quem está pronto para viver cada curva, cada trilha, cada momento como se fosse o último.\""}
                    </p>
                    <p class="testimonial-line">
                        {"É sobre liberdade. É sobre descobrir quem você realmente é quando não há nada entre você e o horizonte."}
                    </p>
                </div>

                <div class="video-grid">
                    { for REVIEW_VIDEOS.iter().map(|video| html! {
                        <VideoCard key={video.id} video={video} on_open={on_open.clone()} />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .testimonial {
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto 4rem;
                    }

                    .testimonial .section-title {
                        margin-bottom: 1.5rem;
                    }

                    .testimonial-quote {
                        font-size: clamp(1.25rem, 2vw, 1.5rem);
                        font-style: italic;
                        line-height: 1.6;
                        margin-bottom: 1rem;
                    }

                    .testimonial-line {
                        font-size: 1.125rem;
                        font-weight: 500;
                    }

                    .video-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }

                    .video-card {
                        position: relative;
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        padding: 0;
                        border-radius: 24px;
                        overflow: hidden;
                        cursor: pointer;
                        background: rgba(12, 15, 18, 0.12);
                        border: 2px solid rgba(243, 244, 242, 0.8);
                        box-shadow: 0 0 20px rgba(243, 244, 242, 0.4), 0 0 40px rgba(243, 244, 242, 0.2), 0 12px 48px rgba(0, 0, 0, 0.8);
                        transition: transform 0.5s ease;
                    }

                    .video-thumbnail {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }

                    .video-card:hover .video-thumbnail {
                        transform: scale(1.05);
                    }

                    .video-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(12, 15, 18, 0.6), transparent);
                    }

                    .play-badge {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #FFFFFF;
                        z-index: 20;
                        background: rgba(243, 244, 242, 0.08);
                        backdrop-filter: blur(8px);
                        -webkit-backdrop-filter: blur(8px);
                        border: 1px solid rgba(243, 244, 242, 0.3);
                    }

                    .play-icon {
                        width: 2rem;
                        height: 2rem;
                        margin-left: 0.25rem;
                    }

                    .video-info {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 1.25rem 1.5rem;
                        text-align: left;
                        color: #FFFFFF;
                        border-top: 1px solid rgba(243, 244, 242, 0.08);
                        text-shadow: 0 3px 20px rgba(0, 0, 0, 1), 0 6px 12px rgba(0, 0, 0, 1);
                    }

                    .video-info h3 {
                        font-size: 1.5rem;
                        letter-spacing: 0.5px;
                    }

                    .video-info p {
                        margin: 0.25rem 0 0;
                        font-size: 0.95rem;
                    }

                    @media (max-width: 768px) {
                        .video-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
