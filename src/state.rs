use std::collections::BTreeMap;

use crate::{catalog, nav::Section};

/// UI state for one page session. Every slot moves independently of the others.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    menu_open: bool,
    scroll_y: u32,
    // Never reassigned; kept so a future project carousel has a slot to drive.
    active_project_index: usize,
    gallery_open: bool,
    flipped: BTreeMap<usize, bool>,
    hovered_skill: Option<usize>,
    project_count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    ToggleMenu,
    CloseMenu,
    RecordScroll(u32),
    OpenGallery,
    CloseGallery,
    ToggleFlip(usize),
    SetHoveredSkill(Option<usize>),
    Navigate(Section),
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_project_count(catalog::project_count())
    }
}

impl ViewState {
    pub fn with_project_count(project_count: usize) -> Self {
        Self {
            menu_open: false,
            scroll_y: 0,
            active_project_index: 0,
            gallery_open: false,
            flipped: BTreeMap::new(),
            hovered_skill: None,
            project_count,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    pub fn active_project_index(&self) -> usize {
        self.active_project_index
    }

    pub fn gallery_open(&self) -> bool {
        self.gallery_open
    }

    /// Only indices the user has toggled are present.
    pub fn flipped(&self) -> &BTreeMap<usize, bool> {
        &self.flipped
    }

    pub fn is_flipped(&self, project_index: usize) -> bool {
        self.flipped.get(&project_index).copied().unwrap_or(false)
    }

    pub fn hovered_skill(&self) -> Option<usize> {
        self.hovered_skill
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn record_scroll(&mut self, position: u32) {
        self.scroll_y = position;
    }

    pub fn open_gallery(&mut self) {
        self.gallery_open = true;
    }

    /// Leaves `flipped` alone so reopening shows the same card faces.
    pub fn close_gallery(&mut self) {
        self.gallery_open = false;
    }

    pub fn toggle_flip(&mut self, project_index: usize) {
        if project_index >= self.project_count {
            return;
        }

        let next = !self.is_flipped(project_index);
        self.flipped.insert(project_index, next);
    }

    pub fn set_hovered_skill(&mut self, index: Option<usize>) {
        self.hovered_skill = index;
    }

    /// Scrolling itself is the render layer's job; selecting any section
    /// dismisses the mobile menu.
    pub fn navigate(&mut self, _section: Section) {
        self.close_menu();
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::ToggleMenu => self.toggle_menu(),
            ViewAction::CloseMenu => self.close_menu(),
            ViewAction::RecordScroll(position) => self.record_scroll(position),
            ViewAction::OpenGallery => self.open_gallery(),
            ViewAction::CloseGallery => self.close_gallery(),
            ViewAction::ToggleFlip(index) => self.toggle_flip(index),
            ViewAction::SetHoveredSkill(index) => self.set_hovered_skill(index),
            ViewAction::Navigate(section) => self.navigate(section),
        }
    }

    /// The state after `action`, or `None` when the action changes nothing.
    pub fn applied(&self, action: ViewAction) -> Option<Self> {
        let mut next = self.clone();
        next.apply(action);
        (next != *self).then_some(next)
    }
}
