use log::info;
use yew::prelude::*;

use crate::config;
use crate::content::{GalleryImage, GALLERY_IMAGES};
use crate::hooks::use_hover;
use crate::sections::GALLERY_ID;
use crate::state::{Selection, SelectionAction};
use crate::styles;

#[derive(Properties, PartialEq)]
struct GalleryTileProps {
    image: &'static GalleryImage,
    on_open: Callback<&'static GalleryImage>,
}

#[function_component(GalleryTile)]
fn gallery_tile(props: &GalleryTileProps) -> Html {
    let hover = use_hover();
    let onclick = {
        let on_open = props.on_open.clone();
        let image = props.image;
        Callback::from(move |_: MouseEvent| on_open.emit(image))
    };

    html! {
        <div
            class="gallery-tile"
            style={styles::lift(hover.hovered, 4, Some(1.02))}
            onclick={onclick}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            <img
                src={config::asset_url(props.image.src)}
                alt={props.image.alt}
                loading="lazy"
                decoding="async"
                width="400"
                height="300"
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub selection: Selection,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let on_open = {
        let selection = props.selection.clone();
        Callback::from(move |image: &'static GalleryImage| {
            info!("Opening gallery image {}", image.id);
            selection.dispatch(SelectionAction::OpenGalleryImage(image.clone()));
        })
    };

    html! {
        <section class="section gallery" id={GALLERY_ID}>
            <div class="container">
                <h2 class="section-title">{"Galeria"}</h2>
                <div class="gallery-grid">
                    { for GALLERY_IMAGES.iter().map(|image| html! {
                        <GalleryTile key={image.id} image={image} on_open={on_open.clone()} />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }

                    .gallery-tile {
                        aspect-ratio: 4 / 3;
                        border-radius: 24px;
                        overflow: hidden;
                        cursor: pointer;
                        border: 1px solid rgba(243, 244, 242, 0.15);
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                        transition: transform 0.3s ease;
                    }

                    .gallery-tile img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    @media (max-width: 768px) {
                        .gallery-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
