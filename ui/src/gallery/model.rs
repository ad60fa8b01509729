//! Gallery position and viewer state, independent of rendering.

/// Index into a non-empty list of images; stepping wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    index: usize,
}

impl Gallery {
    /// `None` for an empty image list.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, index: 0 })
    }

    /// Starts at `index`, reduced modulo `len`.
    pub fn at(len: usize, index: usize) -> Option<Self> {
        Self::new(len).map(|g| Self {
            index: index % g.len,
            ..g
        })
    }

    pub fn len(self) -> usize {
        self.len
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// One-based counter text, e.g. `3 / 5`.
    pub fn counter(self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}

/// Thumbnails shown beside the main image in the desktop grid.
pub const GRID_THUMBNAILS: usize = 4;

/// Count for the "+N" overlay on the last thumbnail, if any images are hidden.
pub fn hidden_count(len: usize) -> Option<usize> {
    let shown = 1 + GRID_THUMBNAILS;
    (len > shown).then(|| len - shown)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Close,
    Prev,
    Next,
}

impl ViewerCommand {
    /// Keyboard mapping while the viewer is open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(ViewerCommand::Close),
            "ArrowLeft" => Some(ViewerCommand::Prev),
            "ArrowRight" => Some(ViewerCommand::Next),
            _ => None,
        }
    }
}

impl ViewerState {
    pub fn open(index: usize) -> Self {
        ViewerState::Open { index }
    }

    pub fn is_open(self) -> bool {
        matches!(self, ViewerState::Open { .. })
    }

    /// Commands are ignored while closed.
    pub fn apply(self, command: ViewerCommand, len: usize) -> Self {
        let ViewerState::Open { index } = self else {
            return self;
        };
        let Some(gallery) = Gallery::at(len, index) else {
            return ViewerState::Closed;
        };
        match command {
            ViewerCommand::Close => ViewerState::Closed,
            ViewerCommand::Prev => ViewerState::open(gallery.prev().index()),
            ViewerCommand::Next => ViewerState::open(gallery.next().index()),
        }
    }
}
