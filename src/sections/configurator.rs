use log::info;
use yew::prelude::*;

use crate::components::glass_button::GlassButton;
use crate::components::icon::{filled_icon, CHECK_CIRCLE};
use crate::config;
use crate::content::{ColorOption, COLOR_OPTIONS, FALLBACK_PRODUCT_IMAGE, PRICE, QUICK_SPECS};
use crate::effects::scroll_to_section;
use crate::hooks::use_hover;
use crate::sections::DEALERSHIP_ID;
use crate::state::{Selection, SelectionAction};
use crate::styles::{self, GlassTone};

#[derive(Properties, PartialEq)]
struct SwatchProps {
    option: &'static ColorOption,
    selected: bool,
    on_select: Callback<&'static str>,
}

#[function_component(Swatch)]
fn swatch(props: &SwatchProps) -> Html {
    let hover = use_hover();
    let onclick = {
        let on_select = props.on_select.clone();
        let id = props.option.id;
        Callback::from(move |_: MouseEvent| on_select.emit(id))
    };

    html! {
        <button
            class="swatch"
            style={styles::color_swatch(props.option, props.selected, hover.hovered)}
            aria-pressed={props.selected.to_string()}
            onclick={onclick}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            <div class="swatch-color" style={format!("background-color: {};", props.option.color)}></div>
            <p class={classes!("swatch-name", (!props.selected).then(|| "muted"))}>
                { props.option.name }
            </p>
            {
                if props.selected {
                    html! {
                        <div class="swatch-check">
                            { filled_icon(CHECK_CIRCLE, "0 0 20 20", "icon") }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfiguratorProps {
    pub selection: Selection,
}

#[function_component(Configurator)]
pub fn configurator(props: &ConfiguratorProps) -> Html {
    let selection = &props.selection;
    let selected_id = selection.selected_color();
    let selected = selection.selected_color_option();

    let image_src = config::asset_url(selected.map_or(FALLBACK_PRODUCT_IMAGE, |c| c.image));
    let image_alt = format!("Scrambler 400X {}", selected.map_or("", |c| c.name));

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |id: &'static str| {
            info!("Color selected: {}", id);
            selection.dispatch(SelectionAction::SelectColor(id.to_string()));
        })
    };

    let book_test_ride = Callback::from(|_: MouseEvent| scroll_to_section(DEALERSHIP_ID));

    html! {
        <section class="section configurator">
            <div class="container">
                <h2 class="section-title">{"Monte Sua Scrambler 400X"}</h2>

                <div class="configurator-grid">
                    <div class="product-frame">
                        <img
                            class="product-image"
                            src={image_src}
                            alt={image_alt}
                            style={styles::product_image_filter(selected_id)}
                        />
                    </div>

                    <div class="configurator-side">
                        <div>
                            <h3 class="panel-title">{"Escolha a Cor"}</h3>
                            <div class="swatch-grid">
                                { for COLOR_OPTIONS.iter().map(|option| html! {
                                    <Swatch
                                        key={option.id}
                                        option={option}
                                        selected={option.id == selected_id}
                                        on_select={on_select.clone()}
                                    />
                                }) }
                            </div>
                        </div>

                        <div class="glass-panel" style={styles::glass_panel(0.15)}>
                            <h3 class="panel-title">{"Especificações Rápidas"}</h3>
                            <div class="quick-specs">
                                { for QUICK_SPECS.iter().map(|spec| html! {
                                    <div class="quick-spec" key={spec.label}>
                                        <div class="quick-spec-label muted">{ spec.label }</div>
                                        <div class="quick-spec-value">{ spec.value }</div>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div class="glass-panel price-panel" style={styles::glass_panel(0.3)}>
                            <p class="muted">{"A partir de"}</p>
                            <p class="price">{ PRICE }</p>
                            <GlassButton
                                tone={GlassTone::Solid}
                                aria_label="Agende um test-ride"
                                class="price-button"
                                onclick={book_test_ride}
                            >
                                {"Agende um test-ride"}
                            </GlassButton>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .configurator {
                        background: rgba(12, 15, 18, 0.3);
                    }

                    .configurator-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .product-frame {
                        position: relative;
                        aspect-ratio: 1 / 1;
                        background: #FFFFFF;
                        border-radius: 24px;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border: 2px solid rgba(243, 244, 242, 0.6);
                        box-shadow: 0 0 20px rgba(243, 244, 242, 0.3), 0 0 40px rgba(243, 244, 242, 0.15), 0 12px 48px rgba(0, 0, 0, 0.6);
                    }

                    .product-image {
                        width: 100%;
                        height: 100%;
                        object-fit: contain;
                        transform: scale(1.5);
                        transition: opacity 0.3s ease;
                    }

                    .configurator-side {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }

                    .panel-title {
                        font-size: 24px;
                        line-height: 1.3;
                        margin-bottom: 1.5rem;
                    }

                    .swatch-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                    }

                    .swatch {
                        position: relative;
                        padding: 1rem;
                        border-radius: 16px;
                        cursor: pointer;
                        color: #F3F4F2;
                        transition: all 0.5s ease;
                    }

                    .swatch-color {
                        width: 100%;
                        height: 5rem;
                        border-radius: 8px;
                        margin-bottom: 0.75rem;
                        transition: transform 0.3s ease;
                    }

                    .swatch:hover .swatch-color {
                        transform: scale(1.05);
                    }

                    .swatch-name {
                        font-size: 0.75rem;
                        text-align: center;
                        margin: 0;
                    }

                    .swatch-check {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.5rem;
                    }

                    .glass-panel {
                        border-radius: 16px;
                        padding: 1.5rem;
                    }

                    .quick-specs {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }

                    .quick-spec {
                        border-bottom: 1px solid rgba(184, 189, 195, 0.1);
                        padding-bottom: 0.75rem;
                    }

                    .quick-spec-label {
                        font-size: 0.75rem;
                        margin-bottom: 0.25rem;
                    }

                    .quick-spec-value {
                        font-family: 'Oswald', sans-serif;
                        font-size: 1.125rem;
                    }

                    .price-panel {
                        text-align: center;
                    }

                    .price {
                        font-family: 'Oswald', sans-serif;
                        font-size: 2.25rem;
                        margin: 0 0 1rem;
                    }

                    .price-button {
                        width: 100%;
                        padding: 0.75rem 1.5rem;
                    }

                    @media (max-width: 768px) {
                        .configurator-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
