use yew::prelude::*;

use crate::hooks::use_hover;
use crate::styles::{self, GlassTone};

#[derive(Properties, PartialEq)]
pub struct GlassButtonProps {
    pub tone: GlassTone,
    pub aria_label: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Renders a link instead of a button when set.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub external: bool,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(GlassButton)]
pub fn glass_button(props: &GlassButtonProps) -> Html {
    let hover = use_hover();
    let style = styles::glass_button(props.tone, hover.hovered);
    let class = classes!("glass-button", props.class.clone());

    match &props.href {
        Some(href) => {
            let (target, rel): (Option<AttrValue>, Option<AttrValue>) = if props.external {
                (Some("_blank".into()), Some("noopener noreferrer".into()))
            } else {
                (None, None)
            };
            html! {
                <a
                    href={href.clone()}
                    target={target}
                    rel={rel}
                    class={class}
                    style={style}
                    aria-label={props.aria_label.clone()}
                    onmouseenter={hover.onmouseenter}
                    onmouseleave={hover.onmouseleave}
                >
                    { for props.children.iter() }
                </a>
            }
        }
        None => html! {
            <button
                class={class}
                style={style}
                aria-label={props.aria_label.clone()}
                onclick={props.onclick.clone()}
                onmouseenter={hover.onmouseenter}
                onmouseleave={hover.onmouseleave}
            >
                { for props.children.iter() }
            </button>
        },
    }
}
