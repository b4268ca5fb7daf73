use yew::prelude::*;

use crate::components::icon::stroke_icon;
use crate::components::reveal::Reveal;
use crate::content::{Highlight, HIGHLIGHTS};
use crate::hooks::use_hover;
use crate::styles;

// Cards fade in one after another.
const STAGGER_SECS: f64 = 0.1;

#[derive(Properties, PartialEq)]
struct HighlightCardProps {
    highlight: &'static Highlight,
    delay_secs: f64,
}

#[function_component(HighlightCard)]
fn highlight_card(props: &HighlightCardProps) -> Html {
    let hover = use_hover();
    let card_style = format!("{} {}", styles::glass_panel(0.15), styles::lift(hover.hovered, 4, None));

    html! {
        <Reveal delay_secs={props.delay_secs}>
            <div
                class="highlight-card"
                style={card_style}
                onmouseenter={hover.onmouseenter}
                onmouseleave={hover.onmouseleave}
            >
                <div class="highlight-icon">
                    { stroke_icon(&[props.highlight.icon_path], "highlight-svg") }
                </div>
                <div class="highlight-value">{ props.highlight.value }</div>
                <h3>{ props.highlight.title }</h3>
                <p class="muted">{ props.highlight.text }</p>
            </div>
        </Reveal>
    }
}

#[function_component(Highlights)]
pub fn highlights() -> Html {
    html! {
        <section class="section highlights">
            <div class="container">
                <h2 class="section-title">{"Por Que Escolher a Scrambler 400X?"}</h2>
                <div class="highlight-grid">
                    { for HIGHLIGHTS.iter().enumerate().map(|(i, highlight)| html! {
                        <HighlightCard
                            key={highlight.title}
                            highlight={highlight}
                            delay_secs={i as f64 * STAGGER_SECS}
                        />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .highlight-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }

                    .highlight-card {
                        height: 100%;
                        border-radius: 24px;
                        padding: 2rem;
                        transition: transform 0.3s ease;
                    }

                    .highlight-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 16px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                        background: rgba(243, 244, 242, 0.05);
                        border: 1px solid rgba(243, 244, 242, 0.15);
                    }

                    .highlight-svg {
                        width: 2rem;
                        height: 2rem;
                    }

                    .highlight-value {
                        font-family: 'Oswald', sans-serif;
                        font-size: 3rem;
                        margin-bottom: 0.5rem;
                    }

                    .highlight-card h3 {
                        font-size: 1.125rem;
                        margin-bottom: 0.5rem;
                    }

                    .highlight-card p {
                        font-size: 0.875rem;
                        margin: 0;
                    }

                    @media (max-width: 1024px) {
                        .highlight-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    @media (max-width: 640px) {
                        .highlight-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
