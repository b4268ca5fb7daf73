pub mod glass_button;
pub mod icon;
pub mod lightbox;
pub mod reveal;
pub mod video_modal;
