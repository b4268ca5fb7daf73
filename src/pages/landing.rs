use log::info;
use yew::prelude::*;

use crate::components::lightbox::Lightbox;
use crate::components::video_modal::VideoModal;
use crate::sections::{
    configurator::Configurator, dealership::Dealership, footer::Footer, gallery::Gallery,
    hero::Hero, highlights::Highlights, lifestyle::Lifestyle, reviews::Reviews,
    spec_sheet::SpecSheet,
};
use crate::specs::SpecificationDocument;
use crate::state::{SelectionAction, SelectionState};

#[function_component(Landing)]
pub fn landing() -> Html {
    let selection = use_reducer(SelectionState::default);
    let specs = use_memo(|_| SpecificationDocument::load(), ());

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            info!("Landing page mounted");
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || info!("Landing page unmounted")
        },
        (),
    );

    let close_video = {
        let selection = selection.clone();
        Callback::from(move |_: ()| {
            if selection.video_modal_open() {
                info!("Closing review video");
            }
            selection.dispatch(SelectionAction::CloseVideoModal);
        })
    };

    let close_image = {
        let selection = selection.clone();
        Callback::from(move |_: ()| {
            info!("Closing gallery image");
            selection.dispatch(SelectionAction::CloseGalleryImage);
        })
    };

    html! {
        <div class="landing-page">
            <Hero />
            <Configurator selection={selection.clone()} />
            <Reviews selection={selection.clone()} />
            <Highlights />
            <Lifestyle />
            <SpecSheet selection={selection.clone()} specs={specs} />
            <Gallery selection={selection.clone()} />
            <Dealership />
            <Footer />

            {
                if let Some(video) = selection.selected_video() {
                    html! { <VideoModal video={video.clone()} on_close={close_video} /> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(image) = selection.selected_image() {
                    html! { <Lightbox image={image.clone()} on_close={close_image} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
