// File: crates/skyai-chart/src/interaction.rs
// Summary: Hover/selection state machine and the precedence rules that pick the active point.
//
// Hover is transient: it is set when the pointer enters a point's hit region
// and only cleared when the pointer leaves the whole surface. Selection is
// sticky and toggled by clicks. Both can exist at once.

/// Pointer state of one chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered(usize),
    Selected(usize),
    HoveredAndSelected { hovered: usize, selected: usize },
}

/// Why a point is the one being displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSource {
    Hover,
    Selection,
}

/// The point whose value the readout shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivePoint {
    pub index: usize,
    pub source: ActiveSource,
}

/// Visual emphasis of a single point marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Emphasis {
    #[default]
    Normal,
    Hovered,
    Selected,
    HoveredAndSelected,
}

impl Emphasis {
    /// Enlarged, white-filled, glowing.
    pub fn is_emphasized(self) -> bool { !matches!(self, Emphasis::Normal) }

    /// Selected but not under the pointer: draws the faint outer ring.
    pub fn has_ring(self) -> bool { matches!(self, Emphasis::Selected) }
}

impl InteractionState {
    fn from_parts(hovered: Option<usize>, selected: Option<usize>) -> Self {
        match (hovered, selected) {
            (None, None) => Self::Idle,
            (Some(h), None) => Self::Hovered(h),
            (None, Some(s)) => Self::Selected(s),
            (Some(hovered), Some(selected)) => Self::HoveredAndSelected { hovered, selected },
        }
    }

    pub fn hovered(self) -> Option<usize> {
        match self {
            Self::Hovered(h) | Self::HoveredAndSelected { hovered: h, .. } => Some(h),
            Self::Idle | Self::Selected(_) => None,
        }
    }

    pub fn selected(self) -> Option<usize> {
        match self {
            Self::Selected(s) | Self::HoveredAndSelected { selected: s, .. } => Some(s),
            Self::Idle | Self::Hovered(_) => None,
        }
    }

    /// Pointer entered the hit region of `index`.
    #[must_use]
    pub fn hover(self, index: usize) -> Self {
        Self::from_parts(Some(index), self.selected())
    }

    /// Pointer left the chart surface.
    #[must_use]
    pub fn clear_hover(self) -> Self {
        Self::from_parts(None, self.selected())
    }

    /// Click on `index`: deselect when it is already selected, otherwise select it.
    #[must_use]
    pub fn click(self, index: usize) -> Self {
        let selected = if self.selected() == Some(index) { None } else { Some(index) };
        Self::from_parts(self.hovered(), selected)
    }

    /// Drop references to points at or beyond `len` (after the data shrank).
    #[must_use]
    pub fn retain_below(self, len: usize) -> Self {
        let keep = |i: Option<usize>| i.filter(|&i| i < len);
        Self::from_parts(keep(self.hovered()), keep(self.selected()))
    }

    /// Hover wins over selection; `None` means "show the latest sample".
    pub fn active(self) -> Option<ActivePoint> {
        match self {
            Self::Idle => None,
            Self::Hovered(index) | Self::HoveredAndSelected { hovered: index, .. } => {
                Some(ActivePoint { index, source: ActiveSource::Hover })
            }
            Self::Selected(index) => Some(ActivePoint { index, source: ActiveSource::Selection }),
        }
    }

    pub fn emphasis(self, index: usize) -> Emphasis {
        let hovered = self.hovered() == Some(index);
        let selected = self.selected() == Some(index);
        match (hovered, selected) {
            (false, false) => Emphasis::Normal,
            (true, false) => Emphasis::Hovered,
            (false, true) => Emphasis::Selected,
            (true, true) => Emphasis::HoveredAndSelected,
        }
    }
}
