use yew::prelude::*;

use crate::components::icon::{stroke_icon, CLOSE};
use crate::config;
use crate::content::ReviewVideo;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub video: ReviewVideo,
    pub on_close: Callback<()>,
}

#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let src = config::video_embed_url(props.video.youtube_id, true, props.video.start_secs);

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div
                class="video-modal"
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <button class="modal-close" onclick={close} aria-label="Fechar vídeo">
                    { stroke_icon(&[CLOSE], "icon") }
                </button>
                <div class="video-modal-title">
                    <h3>{ props.video.title }</h3>
                    <p class="muted">{ props.video.description }</p>
                </div>
                <div class="video-frame">
                    <iframe
                        src={src}
                        title={props.video.title}
                        frameborder="0"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                        allowfullscreen={true}
                    />
                </div>
            </div>
            <style>
                {r#"
                    .video-modal {
                        position: relative;
                        width: 100%;
                        max-width: 960px;
                        border-radius: 24px;
                        overflow: hidden;
                        background: rgba(12, 15, 18, 0.6);
                        border: 1px solid rgba(243, 244, 242, 0.2);
                        box-shadow: 0 24px 80px rgba(0, 0, 0, 0.8);
                    }

                    .video-modal-title {
                        padding: 1.25rem 4.5rem 1rem 1.5rem;
                    }

                    .video-modal-title p {
                        margin: 0.25rem 0 0;
                    }

                    .video-frame {
                        position: relative;
                        aspect-ratio: 16 / 9;
                    }

                    .video-frame iframe {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                    }
                "#}
            </style>
        </div>
    }
}
