use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::effects::RevealObserver;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Extra inline style appended after the reveal transition.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub delay_secs: f64,
    pub children: Children,
}

/// Fades its children up the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_visible = {
                        let visible = visible.clone();
                        move || visible.set(true)
                    };
                    match RevealObserver::observe(&element, on_visible) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            // Without an observer the content is shown straight away
                            warn!("IntersectionObserver unavailable: {:?}", e);
                            visible.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (),
        );
    }

    let style = format!(
        "{} {}",
        styles::reveal(*visible, props.delay_secs),
        props.style.as_deref().unwrap_or_default()
    );

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}
