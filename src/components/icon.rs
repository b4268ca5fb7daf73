use yew::prelude::*;

pub const ARROW_RIGHT: &str = "M13 7l5 5m0 0l-5 5m5-5H6";
pub const ARROW_DOWN: &str = "M19 14l-7 7m0 0l-7-7m7 7V3";
pub const CLOSE: &str = "M6 18L18 6M6 6l12 12";
pub const PIN: &str = "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z";
pub const PIN_DOT: &str = "M15 11a3 3 0 11-6 0 3 3 0 016 0z";
pub const PHONE: &str = "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z";
pub const CLOCK: &str = "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z";
pub const PLAY: &str = "M8 5v14l11-7z";
pub const CHECK_CIRCLE: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z";

/// Outlined 24x24 icon drawn with the current text color.
pub fn stroke_icon(paths: &[&'static str], class: &'static str) -> Html {
    html! {
        <svg class={class} fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            { for paths.iter().map(|d| html! {
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={*d} />
            }) }
        </svg>
    }
}

pub fn filled_icon(path: &'static str, view_box: &'static str, class: &'static str) -> Html {
    html! {
        <svg class={class} fill="currentColor" viewBox={view_box} aria-hidden="true">
            <path fill-rule="evenodd" clip-rule="evenodd" d={path} />
        </svg>
    }
}
