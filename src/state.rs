use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::content::{self, ColorOption, GalleryImage, ReviewVideo, SpecTab};

/// View state of the landing page. Owned by the page through `use_reducer`
/// and handed to each section as a prop.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
    selected_color: &'static str,
    active_spec_tab: SpecTab,
    selected_image: Option<GalleryImage>,
    // The modal is open exactly when a video is selected, so there is no
    // separate flag to drift out of sync.
    selected_video: Option<ReviewVideo>,
}

pub enum SelectionAction {
    SelectColor(String),
    SelectSpecTab(String),
    OpenGalleryImage(GalleryImage),
    CloseGalleryImage,
    OpenVideoModal(ReviewVideo),
    CloseVideoModal,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_color: content::DEFAULT_COLOR_ID,
            active_spec_tab: SpecTab::default(),
            selected_image: None,
            selected_video: None,
        }
    }
}

impl SelectionState {
    pub fn selected_color(&self) -> &'static str {
        self.selected_color
    }

    pub fn selected_color_option(&self) -> Option<&'static ColorOption> {
        content::find_color(self.selected_color)
    }

    pub fn active_spec_tab(&self) -> SpecTab {
        self.active_spec_tab
    }

    pub fn is_tab_active(&self, tab: SpecTab) -> bool {
        self.active_spec_tab == tab
    }

    pub fn selected_image(&self) -> Option<&GalleryImage> {
        self.selected_image.as_ref()
    }

    pub fn selected_video(&self) -> Option<&ReviewVideo> {
        self.selected_video.as_ref()
    }

    pub fn video_modal_open(&self) -> bool {
        self.selected_video.is_some()
    }

    /// Returns the next state. Unknown color or tab ids leave the state as is.
    pub fn apply(&self, action: SelectionAction) -> Self {
        let mut next = self.clone();
        match action {
            SelectionAction::SelectColor(id) => match content::find_color(&id) {
                Some(option) => next.selected_color = option.id,
                None => debug!("Ignoring unknown color id {}", id),
            },
            SelectionAction::SelectSpecTab(id) => match SpecTab::from_id(&id) {
                Some(tab) => next.active_spec_tab = tab,
                None => debug!("Ignoring unknown spec tab {}", id),
            },
            SelectionAction::OpenGalleryImage(image) => next.selected_image = Some(image),
            SelectionAction::CloseGalleryImage => next.selected_image = None,
            SelectionAction::OpenVideoModal(video) => next.selected_video = Some(video),
            SelectionAction::CloseVideoModal => next.selected_video = None,
        }
        next
    }
}

impl Reducible for SelectionState {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub type Selection = UseReducerHandle<SelectionState>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{COLOR_OPTIONS, GALLERY_IMAGES, REVIEW_VIDEOS};

    fn assert_modal_consistent(state: &SelectionState) {
        assert_eq!(state.video_modal_open(), state.selected_video().is_some());
    }

    #[test]
    fn test_initial_state() {
        let state = SelectionState::default();
        assert_eq!(state.selected_color(), "baja-orange");
        assert_eq!(state.active_spec_tab().id(), "motor");
        assert!(state.selected_image().is_none());
        assert!(!state.video_modal_open());
        assert!(state.selected_video().is_none());
    }

    #[test]
    fn test_select_every_known_color() {
        let mut state = SelectionState::default();
        for option in COLOR_OPTIONS {
            state = state.apply(SelectionAction::SelectColor(option.id.to_string()));
            assert_eq!(state.selected_color(), option.id);
            assert_eq!(state.selected_color_option(), Some(option));
        }
    }

    #[test]
    fn test_unknown_color_is_ignored() {
        let state = SelectionState::default()
            .apply(SelectionAction::SelectColor("khaki-green".to_string()));
        let after = state.apply(SelectionAction::SelectColor("neon-pink".to_string()));
        assert_eq!(after, state);
        assert_eq!(after.selected_color(), "khaki-green");
    }

    #[test]
    fn test_exactly_one_tab_active() {
        let mut state = SelectionState::default();
        for id in ["chassi", "bogus", "equipamentos", "dimensoes", "", "motor", "chassi"] {
            state = state.apply(SelectionAction::SelectSpecTab(id.to_string()));
            let active = SpecTab::ALL
                .iter()
                .filter(|tab| state.is_tab_active(**tab))
                .count();
            assert_eq!(active, 1);
        }
        assert_eq!(state.active_spec_tab(), SpecTab::Chassi);
    }

    #[test]
    fn test_unknown_tab_is_ignored() {
        let state = SelectionState::default()
            .apply(SelectionAction::SelectSpecTab("dimensoes".to_string()));
        let after = state.apply(SelectionAction::SelectSpecTab("garantia".to_string()));
        assert_eq!(after.active_spec_tab(), SpecTab::Dimensoes);
    }

    #[test]
    fn test_video_modal_fields_move_together() {
        let video = REVIEW_VIDEOS[1].clone();
        let mut state = SelectionState::default();
        assert_modal_consistent(&state);

        state = state.apply(SelectionAction::OpenVideoModal(video.clone()));
        assert!(state.video_modal_open());
        assert_eq!(state.selected_video(), Some(&video));

        state = state.apply(SelectionAction::OpenVideoModal(REVIEW_VIDEOS[0].clone()));
        assert_modal_consistent(&state);
        assert_eq!(state.selected_video(), Some(&REVIEW_VIDEOS[0]));

        state = state.apply(SelectionAction::CloseVideoModal);
        assert!(!state.video_modal_open());
        assert!(state.selected_video().is_none());

        state = state.apply(SelectionAction::CloseVideoModal);
        assert_modal_consistent(&state);
    }

    #[test]
    fn test_gallery_close_is_idempotent() {
        let image = GALLERY_IMAGES[2].clone();
        let state = SelectionState::default()
            .apply(SelectionAction::OpenGalleryImage(image.clone()));
        assert_eq!(state.selected_image(), Some(&image));

        let closed = state.apply(SelectionAction::CloseGalleryImage);
        assert!(closed.selected_image().is_none());
        let closed_twice = closed.apply(SelectionAction::CloseGalleryImage);
        assert_eq!(closed_twice, closed);
    }

    #[test]
    fn test_selections_are_independent() {
        let state = SelectionState::default()
            .apply(SelectionAction::OpenVideoModal(REVIEW_VIDEOS[0].clone()))
            .apply(SelectionAction::SelectColor("phantom-black".to_string()))
            .apply(SelectionAction::OpenGalleryImage(GALLERY_IMAGES[0].clone()))
            .apply(SelectionAction::CloseGalleryImage);
        assert!(state.video_modal_open());
        assert_eq!(state.selected_color(), "phantom-black");
        assert_eq!(state.active_spec_tab(), SpecTab::Motor);
    }

    #[test]
    fn test_reduce_keeps_rc_on_noop() {
        let state = Rc::new(SelectionState::default());
        let same = state.clone().reduce(SelectionAction::SelectColor("nope".to_string()));
        assert!(Rc::ptr_eq(&state, &same));
        let changed = state.clone().reduce(SelectionAction::SelectSpecTab("chassi".to_string()));
        assert!(!Rc::ptr_eq(&state, &changed));
    }
}
