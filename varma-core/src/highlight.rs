//! Highlight state machine.
//!
//! ```text
//!            apply(non-empty)             select(id)
//!   Idle ─────────────────────> SearchResult ───────> SearchResult (focus only)
//!    │  ^                           │
//!    │  └──── clear_all / apply(∅) ─┘
//!    │ select(id)
//!    v
//!   SingleSelect ── select(id') ──> SingleSelect ({id'})
//! ```
//!
//! Every operation returns a [`Transition`]. Consumers apply `glow_off`
//! before `glow_on`, so the outgoing and incoming sets are never lit
//! together.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::registry::RendererId;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Mode {
    #[default]
    Idle,
    SingleSelect,
    SearchResult,
}

/// Visual side effects of one state change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Ids that stop glowing. Applied first.
    pub glow_off: Vec<RendererId>,
    /// Ids that start glowing. Applied after `glow_off`.
    pub glow_on: Vec<RendererId>,
    /// Camera / info panel target.
    pub focus: Option<RendererId>,
}

impl Transition {
    fn between(previous: &BTreeSet<RendererId>, next: &BTreeSet<RendererId>) -> Self {
        Self {
            glow_off: previous.difference(next).cloned().collect(),
            glow_on: next.difference(previous).cloned().collect(),
            focus: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.glow_off.is_empty() && self.glow_on.is_empty() && self.focus.is_none()
    }
}

/// The set of glowing renderer objects and the mode that produced it.
///
/// One instance is owned by whoever drives the viewer; there is no shared
/// global highlight list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightState {
    highlighted: BTreeSet<RendererId>,
    mode: Mode,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn highlighted(&self) -> &BTreeSet<RendererId> {
        &self.highlighted
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted.contains(id)
    }

    /// Replace the highlight set with a search result.
    /// An empty result leaves the machine `Idle`.
    pub fn apply_search_results(
        &mut self,
        ids: impl IntoIterator<Item = RendererId>,
    ) -> Transition {
        let next: BTreeSet<RendererId> = ids.into_iter().collect();
        self.mode = if next.is_empty() {
            Mode::Idle
        } else {
            Mode::SearchResult
        };
        self.replace_highlighted(next)
    }

    /// Select one point. While a search result is shown this only focuses
    /// the point and keeps the result set and mode.
    pub fn select_single(&mut self, id: RendererId) -> Transition {
        if self.mode == Mode::SearchResult {
            return Transition {
                focus: Some(id),
                ..Transition::default()
            };
        }

        self.mode = Mode::SingleSelect;
        let mut transition = self.replace_highlighted(BTreeSet::from([id.clone()]));
        transition.focus = Some(id);
        transition
    }

    /// Drop every highlight and leave any search context.
    pub fn clear_all(&mut self) -> Transition {
        self.mode = Mode::Idle;
        self.replace_highlighted(BTreeSet::new())
    }

    // Glow bookkeeping only; mode changes belong to the public transitions.
    fn replace_highlighted(&mut self, next: BTreeSet<RendererId>) -> Transition {
        let transition = Transition::between(&self.highlighted, &next);
        self.highlighted = next;
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(value: &str) -> RendererId {
        RendererId::new(value)
    }

    fn set(values: &[&str]) -> BTreeSet<RendererId> {
        values.iter().map(|v| id(v)).collect()
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = HighlightState::new();
        assert_eq!(state.mode(), Mode::Idle);
        assert!(state.highlighted().is_empty());
    }

    #[test]
    fn search_results_enter_search_mode() {
        let mut state = HighlightState::new();
        let transition = state.apply_search_results([id("A_L"), id("A_R"), id("B")]);

        assert_eq!(state.mode(), Mode::SearchResult);
        assert_eq!(state.highlighted(), &set(&["A_L", "A_R", "B"]));
        assert_eq!(transition.glow_off, Vec::<RendererId>::new());
        assert_eq!(transition.glow_on, vec![id("A_L"), id("A_R"), id("B")]);
        assert_eq!(transition.focus, None);
    }

    #[test]
    fn empty_search_result_is_idle() {
        let mut state = HighlightState::new();
        state.select_single(id("A"));
        let transition = state.apply_search_results(std::iter::empty());

        assert_eq!(state.mode(), Mode::Idle);
        assert!(state.highlighted().is_empty());
        assert_eq!(transition.glow_off, vec![id("A")]);
    }

    #[test]
    fn select_in_search_mode_only_focuses() {
        let mut state = HighlightState::new();
        state.apply_search_results([id("A"), id("B")]);

        let transition = state.select_single(id("A"));

        assert_eq!(state.mode(), Mode::SearchResult);
        assert_eq!(state.highlighted(), &set(&["A", "B"]));
        assert_eq!(
            transition,
            Transition {
                focus: Some(id("A")),
                ..Transition::default()
            }
        );
    }

    #[test]
    fn select_outside_search_replaces_single_highlight() {
        let mut state = HighlightState::new();
        state.select_single(id("A"));
        let transition = state.select_single(id("B"));

        assert_eq!(state.mode(), Mode::SingleSelect);
        assert_eq!(state.highlighted(), &set(&["B"]));
        assert_eq!(transition.glow_off, vec![id("A")]);
        assert_eq!(transition.glow_on, vec![id("B")]);
        assert_eq!(transition.focus, Some(id("B")));
    }

    #[test]
    fn new_search_replaces_previous_search() {
        let mut state = HighlightState::new();
        state.apply_search_results([id("A"), id("B")]);
        let transition = state.apply_search_results([id("B"), id("C")]);

        assert_eq!(state.highlighted(), &set(&["B", "C"]));
        // "B" stays lit and is not toggled.
        assert_eq!(transition.glow_off, vec![id("A")]);
        assert_eq!(transition.glow_on, vec![id("C")]);
    }

    #[test]
    fn search_replaces_single_selection() {
        let mut state = HighlightState::new();
        state.select_single(id("A"));
        state.apply_search_results([id("B")]);
        assert_eq!(state.mode(), Mode::SearchResult);
        assert_eq!(state.highlighted(), &set(&["B"]));
    }

    #[test]
    fn clear_all_always_resets() {
        let sequences: Vec<Box<dyn Fn(&mut HighlightState)>> = vec![
            Box::new(|_| {}),
            Box::new(|s| {
                s.select_single(id("A"));
            }),
            Box::new(|s| {
                s.apply_search_results([id("A"), id("B")]);
                s.select_single(id("C"));
            }),
            Box::new(|s| {
                s.clear_all();
                s.clear_all();
            }),
        ];

        for run in sequences {
            let mut state = HighlightState::new();
            run(&mut state);
            state.clear_all();
            assert_eq!(state.mode(), Mode::Idle);
            assert!(state.highlighted().is_empty());
        }
    }

    #[test]
    fn clear_after_clear_is_a_no_op() {
        let mut state = HighlightState::new();
        state.clear_all();
        assert!(state.clear_all().is_empty());
    }

    #[test]
    fn focus_after_clear_selects_again() {
        let mut state = HighlightState::new();
        state.apply_search_results([id("A"), id("B")]);
        state.clear_all();
        let transition = state.select_single(id("A"));
        assert_eq!(state.mode(), Mode::SingleSelect);
        assert_eq!(transition.glow_on, vec![id("A")]);
    }
}
