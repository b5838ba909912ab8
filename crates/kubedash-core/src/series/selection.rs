//! Series selection and colour assignment
//!
//! Selecting a label only filters what gets rendered. Colours are always
//! taken from a series' position in the full list, so an isolated series
//! keeps the colour it had when everything was shown.

use super::palette::{Palette, ThemeMode};
use super::ChartSeries;
use serde::{Deserialize, Serialize};

/// The currently isolated series, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection(Option<String>);

impl Selection {
    /// Nothing selected, all series render
    pub fn none() -> Self {
        Self(None)
    }

    pub fn of(label: impl Into<String>) -> Self {
        Self(Some(label.into()))
    }

    pub fn selected(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Legend click: selecting the current label clears, any other label selects
    pub fn toggle(&mut self, label: &str) {
        if self.selected() == Some(label) {
            self.0 = None;
        } else {
            self.0 = Some(label.to_string());
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.selected().map_or(true, |selected| selected == name)
    }
}

/// A series ready to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledSeries<'a> {
    pub series: &'a ChartSeries,
    /// Position in the unfiltered list
    pub index: usize,
    pub color: &'a str,
}

/// Series to draw under the current selection, each with its stable colour
pub fn renderable<'a>(
    series: &'a [ChartSeries],
    selection: &Selection,
    palette: &'a Palette,
    mode: ThemeMode,
) -> Vec<StyledSeries<'a>> {
    series
        .iter()
        .enumerate()
        .filter(|(_, s)| selection.matches(&s.name))
        .map(|(index, s)| StyledSeries {
            series: s,
            index,
            color: palette.color(index, mode),
        })
        .collect()
}
