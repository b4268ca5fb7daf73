use log::error;
use yew::prelude::*;

use crate::effects::ScrollListener;

/// Current vertical scroll offset of the window. The listener is registered on
/// mount and removed on unmount.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let listener = match ScrollListener::new(move |y| scroll_y.set(y)) {
                    Ok(listener) => Some(listener),
                    Err(e) => {
                        error!("Failed to register scroll listener: {:?}", e);
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    *scroll_y
}

pub struct Hover {
    pub hovered: bool,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

#[hook]
pub fn use_hover() -> Hover {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    Hover {
        hovered: *hovered,
        onmouseenter,
        onmouseleave,
    }
}
