//! Sidebar navigation state.
//!
//! Purely presentational: collapsing the sidebar or expanding a
//! section never touches the conversation store, and activating a
//! leaf item inside a section has no effect at all — the destinations
//! are decorative.

/// A collapsible group of navigation items.
#[derive(Debug, Clone, Copy)]
pub struct SectionDef {
    /// Section label; doubles as the expansion key.
    pub title: &'static str,
    /// Leaf items shown while the section is expanded.
    pub items: &'static [&'static str],
}

/// The fixed sidebar sections.
pub const SECTIONS: &[SectionDef] = &[
    SectionDef {
        title: "Chat",
        items: &["New Chat", "Saved Chats", "Chat History"],
    },
    SectionDef {
        title: "Portfolio",
        items: &["Overview", "Investments", "Performance", "Transactions"],
    },
    SectionDef {
        title: "News & Updates",
        items: &[
            "Market News",
            "Company Updates",
            "Industry Trends",
            "Watchlist Updates",
        ],
    },
    SectionDef {
        title: "Reports",
        items: &["Weekly Analysis", "Monthly Summary", "Custom Reports"],
    },
    SectionDef {
        title: "Goals",
        items: &["Investment Goals", "Progress Tracking", "Achievements"],
    },
    SectionDef {
        title: "Settings",
        items: &["Profile", "Preferences", "Data Sources"],
    },
];

/// A selectable row in the rendered sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    /// Section header (index into [`SECTIONS`]).
    Section(usize),
    /// Leaf item (section index, item index).
    Item(usize, usize),
}

/// Sidebar state: collapse flag, at most one expanded section, and a
/// cursor over the visible rows.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    /// Whether the sidebar is collapsed to its narrow form.
    pub collapsed: bool,
    /// Title of the expanded section, if any.
    pub expanded: Option<&'static str>,
    /// Cursor position within [`NavState::rows`].
    pub cursor: usize,
}

impl NavState {
    /// Session start: sidebar expanded, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip between collapsed and expanded rendering.
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Expand the given section, or collapse it if already expanded.
    pub fn toggle_section(&mut self, title: &'static str) {
        if self.expanded == Some(title) {
            self.expanded = None;
        } else {
            self.expanded = Some(title);
        }
        self.clamp_cursor();
    }

    /// The currently visible rows: every section header, plus the leaf
    /// items of the expanded section directly below its header.
    pub fn rows(&self) -> Vec<NavRow> {
        let mut rows = Vec::new();
        for (si, section) in SECTIONS.iter().enumerate() {
            rows.push(NavRow::Section(si));
            if self.expanded == Some(section.title) {
                for ii in 0..section.items.len() {
                    rows.push(NavRow::Item(si, ii));
                }
            }
        }
        rows
    }

    /// Row the cursor is on.
    pub fn cursor_row(&self) -> NavRow {
        let rows = self.rows();
        rows[self.cursor.min(rows.len() - 1)]
    }

    /// Move the cursor up one row.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one row.
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.rows().len() {
            self.cursor += 1;
        }
    }

    /// Activate the row under the cursor: section headers toggle their
    /// expansion, leaf items do nothing.
    pub fn activate(&mut self) {
        match self.cursor_row() {
            NavRow::Section(si) => self.toggle_section(SECTIONS[si].title),
            NavRow::Item(..) => {}
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}
