use bevy::prelude::*;
use varma_core::{
    AliasRegistry, HighlightState, Matcher, RendererId, Transition, ViewerCommand, ViewerReport,
};

use crate::engine::scene::point_markers::{PointGlow, PointIndex};
use crate::rpc::web_messages::ViewerOutbox;

/// Decoded host command, produced by the message layer.
#[derive(Event, Debug, Clone)]
pub struct HostCommandEvent {
    pub command: ViewerCommand,
}

/// A marker the user clicked in the viewport.
#[derive(Event, Debug, Clone)]
pub struct PointPickedEvent {
    pub id: RendererId,
}

/// Point the camera and info panel should show.
#[derive(Event, Debug, Clone)]
pub struct FocusPointEvent {
    pub id: RendererId,
}

#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetCameraEvent;

/// Viewer-side mirror of the host's highlight state.
///
/// Fed only by the commands the host sends, so both sides land on the same
/// set. Host payloads are usually renderer ids already, which the matcher
/// resolves to themselves. Local clicks never enter the mirror; the host
/// answers a reported click with a `SelectPoint` when it recognises it.
#[derive(Resource)]
pub struct HighlightDispatcher {
    matcher: Matcher,
    state: HighlightState,
}

impl HighlightDispatcher {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            state: HighlightState::new(),
        }
    }

    /// Built-in registry, or an empty one if the table fails validation.
    pub fn builtin() -> Self {
        let registry = AliasRegistry::builtin().unwrap_or_else(|err| {
            error!("Built-in point registry rejected: {}", err);
            AliasRegistry::empty()
        });
        Self::new(Matcher::new(registry))
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn state(&self) -> &HighlightState {
        &self.state
    }

    /// Run one host command through the state machine. Camera commands
    /// produce no transition.
    pub fn apply(&mut self, command: &ViewerCommand) -> Option<Transition> {
        match command {
            ViewerCommand::HighlightPointsList(points) => {
                let ids = self.matcher.resolve(points);
                info!(
                    "Highlighting {} of {} requested points",
                    ids.len(),
                    points.len()
                );
                Some(self.state.apply_search_results(ids))
            }
            ViewerCommand::SelectPoint(raw) => {
                let id = self.matcher.resolve_one(raw)?;
                Some(self.state.select_single(id))
            }
            ViewerCommand::ClearAllHighlights => Some(self.state.clear_all()),
            ViewerCommand::ResetCamera => None,
        }
    }
}

impl Default for HighlightDispatcher {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Apply host commands in arrival order, then forward local clicks.
///
/// A click focuses the camera and is reported to the host; glow changes only
/// when the host's `SelectPoint` comes back.
pub fn dispatch_highlight_events(
    mut dispatcher: ResMut<HighlightDispatcher>,
    mut host_commands: EventReader<HostCommandEvent>,
    mut picked: EventReader<PointPickedEvent>,
    index: Res<PointIndex>,
    mut glows: Query<&mut PointGlow>,
    mut focus_events: EventWriter<FocusPointEvent>,
    mut reset_events: EventWriter<ResetCameraEvent>,
    mut outbox: ResMut<ViewerOutbox>,
) {
    for event in host_commands.read() {
        if matches!(event.command, ViewerCommand::ResetCamera) {
            reset_events.write(ResetCameraEvent);
            continue;
        }
        if let Some(transition) = dispatcher.apply(&event.command) {
            apply_transition(transition, &index, &mut glows, &mut focus_events);
        }
    }

    for event in picked.read() {
        focus_events.write(FocusPointEvent {
            id: event.id.clone(),
        });
        outbox.report(ViewerReport::PointClicked(event.id.as_str().to_string()));
    }
}

/// Glow off strictly before glow on, then focus.
fn apply_transition(
    transition: Transition,
    index: &PointIndex,
    glows: &mut Query<&mut PointGlow>,
    focus_events: &mut EventWriter<FocusPointEvent>,
) {
    for id in &transition.glow_off {
        set_glow(index, glows, id, false);
    }
    for id in &transition.glow_on {
        set_glow(index, glows, id, true);
    }
    if let Some(id) = transition.focus {
        focus_events.write(FocusPointEvent { id });
    }
}

fn set_glow(index: &PointIndex, glows: &mut Query<&mut PointGlow>, id: &RendererId, lit: bool) {
    let Some(entity) = index.get(id.as_str()) else {
        warn!("No scene object named '{}'", id);
        return;
    };
    match glows.get_mut(entity) {
        Ok(mut glow) => glow.lit = lit,
        Err(err) => warn!("Scene object '{}' has no glow: {}", id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::point_markers::VarmaPoint;
    use pretty_assertions::assert_eq;
    use varma_core::Mode;

    const SCENE: &[&str] = &[
        "6_Porchai_L",
        "6_Porchai_R",
        "1_UtchiVarmam",
        "15_ThilardhaVarmam",
    ];

    fn app() -> App {
        let mut app = App::new();
        app.add_event::<HostCommandEvent>()
            .add_event::<PointPickedEvent>()
            .add_event::<FocusPointEvent>()
            .add_event::<ResetCameraEvent>()
            .init_resource::<HighlightDispatcher>()
            .init_resource::<ViewerOutbox>()
            .add_systems(Update, dispatch_highlight_events);

        let mut index = PointIndex::default();
        for id in SCENE {
            let entity = app
                .world_mut()
                .spawn((
                    VarmaPoint {
                        id: RendererId::new(*id),
                    },
                    PointGlow::default(),
                ))
                .id();
            index.insert(RendererId::new(*id), entity);
        }
        app.insert_resource(index);
        app
    }

    fn send(app: &mut App, command: ViewerCommand) {
        app.world_mut().send_event(HostCommandEvent { command });
        app.update();
    }

    fn lit(app: &mut App) -> Vec<String> {
        let mut query = app.world_mut().query::<(&VarmaPoint, &PointGlow)>();
        let mut ids: Vec<String> = query
            .iter(app.world())
            .filter(|(_, glow)| glow.lit)
            .map(|(point, _)| point.id.as_str().to_string())
            .collect();
        ids.sort();
        ids
    }

    fn focused(app: &App) -> Vec<String> {
        let events = app.world().resource::<Events<FocusPointEvent>>();
        events
            .iter_current_update_events()
            .map(|e| e.id.as_str().to_string())
            .collect()
    }

    #[test]
    fn highlight_list_lights_both_sides() {
        let mut app = app();
        send(
            &mut app,
            ViewerCommand::HighlightPointsList(vec!["Porchai".to_string()]),
        );
        assert_eq!(lit(&mut app), vec!["6_Porchai_L", "6_Porchai_R"]);
        assert_eq!(
            app.world().resource::<HighlightDispatcher>().state().mode(),
            Mode::SearchResult
        );
    }

    #[test]
    fn select_during_search_only_focuses() {
        let mut app = app();
        send(
            &mut app,
            ViewerCommand::HighlightPointsList(vec![
                "Thilartha Kalam".to_string(),
                "Uchi Varma".to_string(),
            ]),
        );
        send(
            &mut app,
            ViewerCommand::SelectPoint("6_Porchai_L".to_string()),
        );

        assert_eq!(lit(&mut app), vec!["15_ThilardhaVarmam", "1_UtchiVarmam"]);
        assert_eq!(focused(&app), vec!["6_Porchai_L"]);
    }

    #[test]
    fn selection_replaces_previous_selection() {
        let mut app = app();
        send(
            &mut app,
            ViewerCommand::SelectPoint("1_UtchiVarmam".to_string()),
        );
        // A two-sided concept name selects its left object.
        send(&mut app, ViewerCommand::SelectPoint("Porchai".to_string()));
        assert_eq!(lit(&mut app), vec!["6_Porchai_L"]);
    }

    #[test]
    fn clear_all_turns_everything_off() {
        let mut app = app();
        send(
            &mut app,
            ViewerCommand::HighlightPointsList(vec!["Porchai".to_string(), "Utchi".to_string()]),
        );
        send(&mut app, ViewerCommand::ClearAllHighlights);

        assert!(lit(&mut app).is_empty());
        assert_eq!(
            app.world().resource::<HighlightDispatcher>().state().mode(),
            Mode::Idle
        );
    }

    #[test]
    fn reset_camera_does_not_touch_glow() {
        let mut app = app();
        send(
            &mut app,
            ViewerCommand::SelectPoint("1_UtchiVarmam".to_string()),
        );
        send(&mut app, ViewerCommand::ResetCamera);

        assert_eq!(lit(&mut app), vec!["1_UtchiVarmam"]);
        let resets = app.world().resource::<Events<ResetCameraEvent>>();
        assert_eq!(resets.iter_current_update_events().count(), 1);
    }

    #[test]
    fn click_reports_and_focuses_without_glow() {
        let mut app = app();
        app.world_mut().send_event(PointPickedEvent {
            id: RendererId::new("6_Porchai_R"),
        });
        app.update();

        assert!(lit(&mut app).is_empty());
        assert_eq!(focused(&app), vec!["6_Porchai_R"]);
        assert_eq!(
            app.world().resource::<HighlightDispatcher>().state().mode(),
            Mode::Idle
        );
        let reports = app.world_mut().resource_mut::<ViewerOutbox>().drain();
        assert_eq!(
            reports,
            vec![ViewerReport::PointClicked("6_Porchai_R".to_string())]
        );
    }

    #[test]
    fn click_glows_once_the_host_echoes_it() {
        let mut app = app();
        app.world_mut().send_event(PointPickedEvent {
            id: RendererId::new("6_Porchai_R"),
        });
        app.update();
        assert!(lit(&mut app).is_empty());

        send(
            &mut app,
            ViewerCommand::SelectPoint("6_Porchai_R".to_string()),
        );
        assert_eq!(lit(&mut app), vec!["6_Porchai_R"]);
    }

    #[test]
    fn click_inside_search_leaves_results_lit() {
        let mut app = app();
        send(
            &mut app,
            ViewerCommand::HighlightPointsList(vec!["Porchai".to_string()]),
        );
        app.world_mut().send_event(PointPickedEvent {
            id: RendererId::new("1_UtchiVarmam"),
        });
        app.update();

        assert_eq!(lit(&mut app), vec!["6_Porchai_L", "6_Porchai_R"]);
        assert_eq!(
            app.world().resource::<HighlightDispatcher>().state().mode(),
            Mode::SearchResult
        );
    }
}
