//! Application state types and entry glue.
//!
//! Defines the enums and structs that model the TUI state, the local
//! directory operations, and the application loop entry (re-exported as
//! `run`).
//!
pub mod update;

use ratatui::style::Color;
use std::time::Instant;

use crate::api::User;
use tracing::{debug, info, warn};

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Modal,
}

/// Lifecycle of the one-shot directory fetch.
///
/// `Loading` resolves to exactly one of the other two states and never
/// returns; a failure is rendered, not swallowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Theme {
    /// Dark default theme.
    #[allow(dead_code)]
    pub fn dark() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::Gray,
            header_bg: Color::Black,
            header_fg: Color::Cyan,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            highlight_fg: Color::Yellow,
            highlight_bg: Color::Reset,
        }
    }

    /// Catppuccin Mocha theme defaults.
    pub fn mocha() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            // text & neutrals
            text: Color::Rgb(0xcd, 0xd6, 0xf4),      // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),     // overlay1
            // accents and chrome
            title: Color::Rgb(0xcb, 0xa6, 0xf7),     // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),    // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44), // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe), // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4), // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
        }
    }
}

/// The editable fields of a user, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditField {
    Name,
    Email,
    Phone,
    Website,
}

impl EditField {
    pub const ALL: [EditField; 4] = [Self::Name, Self::Email, Self::Phone, Self::Website];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Website => "Website",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A modal edit session over one user's editable fields.
///
/// Created when the modal opens, merged back on a valid save, dropped on
/// cancel. Only these four drafts ever flow back into the directory; id,
/// username, and the like flag cannot drift through an edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditForm {
    pub user_id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub focus: EditField,
    pub show_errors: bool,
}

impl EditForm {
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
            focus: EditField::Name,
            show_errors: false,
        }
    }

    pub fn value(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.name,
            EditField::Email => &self.email,
            EditField::Phone => &self.phone,
            EditField::Website => &self.website,
        }
    }

    pub fn value_mut(&mut self, field: EditField) -> &mut String {
        match field {
            EditField::Name => &mut self.name,
            EditField::Email => &mut self.email,
            EditField::Phone => &mut self.phone,
            EditField::Website => &mut self.website,
        }
    }

    /// Fields failing the required rule, in form order. Empty means valid.
    pub fn missing(&self) -> Vec<EditField> {
        EditField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }
}

pub struct AppState {
    pub started_at: Instant,
    pub endpoint: String,
    pub load: LoadState,
    /// The directory as fetched, plus local like/edit/delete mutations.
    pub users_all: Vec<User>,
    /// Visible projection of `users_all` under the current search query.
    pub users: Vec<User>,
    pub selected_index: usize,
    pub grid_cols: usize,
    pub rows_per_page: usize,
    pub input_mode: InputMode,
    pub search_query: String,
    pub theme: Theme,
    pub editor: Option<EditForm>,
    pub show_help: bool,
}

impl AppState {
    /// Create a new `AppState` that is waiting for the directory fetch.
    pub fn new(endpoint: String) -> Self {
        Self {
            started_at: Instant::now(),
            endpoint,
            load: LoadState::Loading,
            users_all: Vec::new(),
            users: Vec::new(),
            selected_index: 0,
            grid_cols: 1,
            rows_per_page: 1,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            theme: Theme::mocha(),
            editor: None,
            show_help: false,
        }
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.users.get(self.selected_index)
    }

    pub fn liked_count(&self) -> usize {
        self.users_all.iter().filter(|u| u.liked).count()
    }

    /// Replaces the whole collection with the fetched list. The first
    /// resolution wins; later calls are ignored.
    pub fn finish_load(&mut self, users: Vec<User>) {
        if self.load != LoadState::Loading {
            return;
        }
        info!("directory loaded with {} users", users.len());
        self.users_all = users;
        self.load = LoadState::Loaded;
        crate::search::apply_search(self);
    }

    /// Records a fetch failure. The first resolution wins.
    pub fn fail_load(&mut self, message: String) {
        if self.load != LoadState::Loading {
            return;
        }
        warn!("directory load failed: {message}");
        self.load = LoadState::Failed(message);
    }

    /// Flips the like flag on the matching user. No-op when the id is gone.
    pub fn toggle_like(&mut self, id: u64) {
        let Some(user) = self.users_all.iter_mut().find(|u| u.id == id) else {
            return;
        };
        user.liked = !user.liked;
        let liked = user.liked;
        debug!("like for user {id} now {liked}");
        crate::search::apply_search(self);
    }

    /// Removes the matching user, keeping the order of the rest. No-op when
    /// the id is gone.
    pub fn delete_user(&mut self, id: u64) {
        let before = self.users_all.len();
        self.users_all.retain(|u| u.id != id);
        if self.users_all.len() != before {
            debug!("user {id} deleted, {} remain", self.users_all.len());
        }
        crate::search::apply_search(self);
    }

    /// Opens the edit modal over the selected user, prefilled with its
    /// current values. No-op when nothing is selected.
    pub fn open_editor(&mut self) {
        let Some(form) = self.selected_user().map(EditForm::for_user) else {
            return;
        };
        self.editor = Some(form);
        self.input_mode = InputMode::Modal;
    }

    /// Validates the drafts and, when all four are non-empty, overwrites
    /// exactly name/email/phone/website on the record matching the captured
    /// id, then closes the modal. An invalid form stays open with its
    /// errors shown and the collection untouched.
    pub fn save_editor(&mut self) {
        let Some(form) = self.editor.as_mut() else {
            return;
        };
        if !form.missing().is_empty() {
            form.show_errors = true;
            return;
        }
        let id = form.user_id;
        let name = form.name.clone();
        let email = form.email.clone();
        let phone = form.phone.clone();
        let website = form.website.clone();
        if let Some(user) = self.users_all.iter_mut().find(|u| u.id == id) {
            user.name = name;
            user.email = email;
            user.phone = phone;
            user.website = website;
            debug!("user {id} updated from the edit form");
        }
        self.close_editor();
        crate::search::apply_search(self);
    }

    /// Drops the edit session without touching the collection.
    pub fn close_editor(&mut self) {
        self.editor = None;
        self.input_mode = InputMode::Normal;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::api::DEFAULT_ENDPOINT.to_string())
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
