use yew::prelude::*;

use crate::components::icon::{stroke_icon, CLOSE};
use crate::config;
use crate::content::GalleryImage;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub image: GalleryImage,
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div
                class="lightbox"
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <img src={config::asset_url(props.image.src)} alt={props.image.alt} />
                <button class="modal-close" onclick={close} aria-label="Fechar imagem">
                    { stroke_icon(&[CLOSE], "icon") }
                </button>
            </div>
            <style>
                {r#"
                    .lightbox {
                        position: relative;
                        max-width: 64rem;
                        max-height: 90vh;
                        border-radius: 24px;
                        overflow: hidden;
                        border: 1px solid rgba(243, 244, 242, 0.2);
                        box-shadow: 0 24px 80px rgba(0, 0, 0, 0.8);
                    }

                    .lightbox img {
                        display: block;
                        max-width: 100%;
                        max-height: 90vh;
                        object-fit: contain;
                    }
                "#}
            </style>
        </div>
    }
}
