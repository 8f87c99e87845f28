use facility::{
    FacilityQuery, FacilityQueryRouter, LocationError, ResultNormalizer, SearchConfig, SearchError,
};
use foundation::geo::LatLng;
use foundation::handles::{Generation, GenerationCounter};
use scene::{ActionKind, EntryAction, EntryKey, ListSurface, MapSurface, Scene, SelectionState};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::notify::{Notifier, Toast};
use crate::session::{SearchParams, SearchTicket, SessionOutcome};

/// Top-level context of a finder page.
///
/// Owns the scene, the feedback channel and the session counter. Sessions run
/// as three steps (`begin`, `locate`, `complete`); the last two drop their
/// input when a newer session has started since.
pub struct Finder<M: MapSurface, L: ListSurface, N: Notifier> {
    scene: Scene<M, L>,
    notifier: N,
    sessions: GenerationCounter,
    router: FacilityQueryRouter,
    normalizer: ResultNormalizer,
    config: SearchConfig,
}

impl<M: MapSurface, L: ListSurface, N: Notifier> Finder<M, L, N> {
    pub fn new(map: M, list: L, notifier: N, config: SearchConfig) -> Self {
        Self {
            scene: Scene::new(map, list, config.detail_radius_m),
            notifier,
            sessions: GenerationCounter::new(),
            router: FacilityQueryRouter::new(config.clone()),
            normalizer: ResultNormalizer,
            config,
        }
    }

    /// Centres the map on the configured start position.
    pub fn show_initial_view(&mut self) {
        self.scene
            .recenter(self.config.initial_center(), self.config.initial_level);
    }

    /// Starts a session and makes it the newest one.
    pub fn begin(&mut self, params: SearchParams) -> SearchTicket {
        let generation = self.sessions.advance();
        let category = params.category;
        self.notifier.highlight_category(category);
        self.notifier.status(category.searching_status());
        info!(%category, ?generation, "search started");
        SearchTicket { generation, params }
    }

    /// Applies the acquired position and returns the request to issue.
    pub fn locate(
        &mut self,
        ticket: &SearchTicket,
        position: Result<LatLng, LocationError>,
    ) -> Result<FacilityQuery, SessionOutcome> {
        if let Some(outcome) = self.superseded(ticket, "location") {
            return Err(outcome);
        }
        let at = match position {
            Ok(at) => at,
            Err(err) => return Err(self.fail(ticket, err.into())),
        };

        let category = ticket.category();
        self.scene.recenter(at, self.config.level_for(category));
        self.scene.show_user_location(at);

        let params = &ticket.params;
        Ok(self
            .router
            .route(category, at, params.keyword.as_deref(), params.radius_km))
    }

    /// Applies the fetched response, if this is still the newest session.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        query: &FacilityQuery,
        response: Result<Value, SearchError>,
    ) -> SessionOutcome {
        if let Some(outcome) = self.superseded(ticket, "response") {
            return outcome;
        }
        let records = match response.and_then(|raw| self.normalizer.normalize(query, raw)) {
            Ok(records) => records,
            Err(err) => return self.fail(ticket, err),
        };

        let count = records.len();
        self.scene
            .rebuild(ticket.generation, ticket.category(), records);
        self.notifier.clear_status();
        self.notifier
            .success(&Toast::search_complete(self.config.success_toast_ms));
        SessionOutcome::Rebuilt {
            generation: ticket.generation,
            count,
        }
    }

    /// Marker or list-body click.
    pub fn select(&mut self, key: EntryKey) -> bool {
        self.scene.select(key)
    }

    /// Action control click. Returns the action to carry out; selection is
    /// left alone.
    pub fn activate(&self, key: EntryKey, kind: ActionKind) -> Option<EntryAction> {
        let action = self.scene.action(key, kind).cloned();
        debug!(?key, ?kind, found = action.is_some(), "action activated");
        action
    }

    pub fn selection(&self) -> SelectionState {
        self.scene.selection()
    }

    pub fn latest_generation(&self) -> Generation {
        self.sessions.latest()
    }

    pub fn scene(&self) -> &Scene<M, L> {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene<M, L> {
        &mut self.scene
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn superseded(&self, ticket: &SearchTicket, stage: &'static str) -> Option<SessionOutcome> {
        if self.sessions.is_latest(ticket.generation) {
            return None;
        }
        debug!(
            generation = ?ticket.generation,
            latest = ?self.sessions.latest(),
            stage,
            "discarding superseded session"
        );
        Some(SessionOutcome::Superseded {
            generation: ticket.generation,
        })
    }

    fn fail(&mut self, ticket: &SearchTicket, err: SearchError) -> SessionOutcome {
        warn!(category = %ticket.category(), generation = ?ticket.generation, "search failed: {err}");
        match err.status_message() {
            "" => self.notifier.clear_status(),
            text => self.notifier.status(text),
        }
        if let Some(text) = err.alert_message() {
            self.notifier.alert(&text);
        }
        SessionOutcome::Failed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::Finder;
    use crate::event_bus::{Notice, NoticeBus};
    use crate::session::{SearchParams, SessionOutcome};
    use facility::{LocationError, SearchCategory, SearchConfig, SearchError};
    use foundation::geo::LatLng;
    use foundation::handles::Generation;
    use pretty_assertions::assert_eq;
    use scene::headless::{HeadlessList, HeadlessMap};
    use scene::{ActionKind, EntryKey, MarkerImage, SelectionState};
    use serde_json::json;

    type TestFinder = Finder<HeadlessMap, HeadlessList, NoticeBus>;

    const HERE: LatLng = LatLng::new(37.50, 127.03);

    fn finder() -> TestFinder {
        Finder::new(
            HeadlessMap::new(),
            HeadlessList::new(),
            NoticeBus::new(),
            SearchConfig::default(),
        )
    }

    fn two_hospitals() -> serde_json::Value {
        json!([
            {"name": "강남세브란스", "lat": 37.4925, "lng": 127.0463, "address": "서울 강남구", "phone": "1599-6114", "distance": 1.52},
            {"name": "삼성서울병원", "lat": 37.4881, "lng": 127.0855, "distance": 2.31}
        ])
    }

    fn search(finder: &mut TestFinder, params: SearchParams, response: Result<serde_json::Value, SearchError>) -> SessionOutcome {
        let ticket = finder.begin(params);
        match finder.locate(&ticket, Ok(HERE)) {
            Ok(query) => finder.complete(&ticket, &query, response),
            Err(outcome) => outcome,
        }
    }

    #[test]
    fn general_search_builds_both_surfaces() {
        let mut f = finder();
        let params = SearchParams::new(SearchCategory::General)
            .with_keyword("")
            .with_radius_km(3.0);
        let outcome = search(&mut f, params, Ok(two_hospitals()));

        assert_eq!(
            outcome,
            SessionOutcome::Rebuilt {
                generation: Generation(1),
                count: 2
            }
        );
        let scene = f.scene();
        for i in 0..2 {
            let key = EntryKey::new(i, Generation(1));
            assert!(scene.map().marker_for(key).is_some());
            assert!(scene.list().by_dom_id(&format!("item-{i}")).is_some());
        }
        assert_eq!(f.selection(), SelectionState::NoSelection);
        assert_eq!(scene.map().level(), Some(4));
        assert!(scene.map().user_marker().is_some());

        let bus = f.notifier();
        assert_eq!(bus.current_status(), None);
        assert!(bus.succeeded());
        assert_eq!(bus.notices()[0], Notice::Highlight(SearchCategory::General));
        assert_eq!(bus.notices()[1], Notice::Status("🏥 병원 조회 중...".into()));
    }

    #[test]
    fn full_emergency_room_selects_and_pans() {
        let mut f = finder();
        let response = json!([{"name": "길병원", "lat": 37.452, "lng": 126.707, "distance": 4.2, "available": 0}]);
        let outcome = search(&mut f, SearchParams::new(SearchCategory::Emergency), Ok(response));
        assert!(outcome.is_rebuilt());
        assert_eq!(f.scene().map().level(), Some(7));

        let key = EntryKey::new(0, Generation(1));
        let marker = f.scene().map().marker_for(key).map(|m| m.visual.image);
        assert_eq!(marker, Some(MarkerImage::BedsFull));
        let badge = f.scene().list().items()[0]
            .entry
            .availability
            .as_ref()
            .map(|a| a.label.clone());
        assert!(badge.is_some_and(|b| b.contains("불가")));

        assert!(f.select(key));
        assert_eq!(f.selection(), SelectionState::SelectedIndex(0));
        assert_eq!(f.scene().map().center(), Some(LatLng::new(37.452, 126.707)));
    }

    #[test]
    fn overloaded_emergency_room_renders_as_full() {
        let mut f = finder();
        let response = json!([
            {"name": "아주대병원", "lat": 37.279, "lng": 127.047, "distance": 1.1, "available": 5},
            {"name": "길병원", "lat": 37.452, "lng": 126.707, "distance": 4.2, "available": -2}
        ]);
        let outcome = search(&mut f, SearchParams::new(SearchCategory::Emergency), Ok(response));
        assert_eq!(
            outcome,
            SessionOutcome::Rebuilt {
                generation: Generation(1),
                count: 2
            }
        );

        let key = EntryKey::new(1, Generation(1));
        let marker = f.scene().map().marker_for(key).map(|m| m.visual.image);
        assert_eq!(marker, Some(MarkerImage::BedsFull));
        let badge = f.scene().list().items()[1]
            .entry
            .availability
            .as_ref()
            .map(|a| a.label.clone());
        assert!(badge.is_some_and(|b| b.contains("불가")));
        assert!(f.notifier().succeeded());
    }

    #[test]
    fn empty_pharmacy_result_leaves_previous_results() {
        let mut f = finder();
        search(&mut f, SearchParams::new(SearchCategory::General), Ok(two_hospitals()));
        f.select(EntryKey::new(1, Generation(1)));
        f.notifier_mut().drain();
        f.scene_mut().list_mut().take_calls();

        let params = SearchParams::new(SearchCategory::Pharmacy).with_radius_km(3.0);
        let outcome = search(&mut f, params, Ok(json!([])));

        assert_eq!(
            outcome,
            SessionOutcome::Failed(SearchError::EmptyResult {
                category: SearchCategory::Pharmacy,
                radius_km: Some(3.0),
            })
        );
        assert_eq!(f.scene().len(), 2);
        assert_eq!(f.scene().map().marker_count(), 2);
        assert!(f.scene().list().calls().is_empty());
        assert_eq!(f.selection(), SelectionState::SelectedIndex(1));

        let bus = f.notifier();
        assert!(!bus.succeeded());
        assert_eq!(bus.current_status(), None);
        let alerts: Vec<_> = bus.alerts().collect();
        assert_eq!(alerts, vec!["주변 3km 이내에 약국 검색 결과가 없습니다."]);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut f = finder();
        let a = f.begin(SearchParams::new(SearchCategory::General));
        let b = f.begin(SearchParams::new(SearchCategory::Emergency));

        let Ok(qb) = f.locate(&b, Ok(HERE)) else {
            panic!("newest session must locate");
        };
        let er = json!([{"name": "응급", "lat": 37.5, "lng": 127.0, "distance": 1.0, "available": 3}]);
        assert!(f.complete(&b, &qb, Ok(er)).is_rebuilt());
        let notices_before = f.notifier().notices().len();

        let stale = f.locate(&a, Ok(HERE));
        assert_eq!(stale, Err(SessionOutcome::Superseded { generation: Generation(1) }));
        let qa = f.router.route(SearchCategory::General, HERE, None, None);
        let outcome = f.complete(&a, &qa, Ok(two_hospitals()));
        assert_eq!(outcome, SessionOutcome::Superseded { generation: Generation(1) });

        assert_eq!(f.scene().len(), 1);
        assert_eq!(f.scene().results().generation(), Generation(2));
        assert_eq!(f.scene().results().category(), Some(SearchCategory::Emergency));
        assert_eq!(f.notifier().notices().len(), notices_before);
    }

    #[test]
    fn stale_failure_does_not_alert() {
        let mut f = finder();
        let a = f.begin(SearchParams::new(SearchCategory::Pharmacy));
        f.begin(SearchParams::new(SearchCategory::General));
        let qa = f.router.route(SearchCategory::Pharmacy, HERE, None, None);
        let outcome = f.complete(&a, &qa, Ok(json!([])));
        assert!(matches!(outcome, SessionOutcome::Superseded { .. }));
        assert_eq!(f.notifier().alerts().count(), 0);
    }

    #[test]
    fn failed_location_reports_on_status_line() {
        let mut f = finder();
        let ticket = f.begin(SearchParams::new(SearchCategory::General));
        let outcome = f.locate(&ticket, Err(LocationError::Failed("denied".into())));
        assert!(matches!(outcome, Err(SessionOutcome::Failed(SearchError::LocationUnavailable(_)))));
        assert_eq!(f.notifier().current_status(), Some("위치 확보 실패"));
        assert_eq!(f.notifier().alerts().count(), 0);
        assert!(f.scene().map().user_marker().is_none());
    }

    #[test]
    fn unsupported_location_alerts() {
        let mut f = finder();
        let ticket = f.begin(SearchParams::new(SearchCategory::Emergency));
        let _ = f.locate(&ticket, Err(LocationError::Unsupported));
        let alerts: Vec<_> = f.notifier().alerts().collect();
        assert_eq!(alerts, vec!["위치 정보를 사용할 수 없습니다."]);
    }

    #[test]
    fn upstream_error_is_shown_verbatim() {
        let mut f = finder();
        let outcome = search(
            &mut f,
            SearchParams::new(SearchCategory::Emergency),
            Ok(json!({"error": "API 키 오류"})),
        );
        assert_eq!(outcome, SessionOutcome::Failed(SearchError::Upstream("API 키 오류".into())));
        let alerts: Vec<_> = f.notifier().alerts().collect();
        assert_eq!(alerts, vec!["API 오류: API 키 오류"]);
        assert!(f.scene().is_empty());
    }

    #[test]
    fn transport_error_uses_generic_message() {
        let mut f = finder();
        let err = SearchError::transport(SearchCategory::General, "connection refused");
        let outcome = search(&mut f, SearchParams::new(SearchCategory::General), Err(err));
        assert!(matches!(outcome, SessionOutcome::Failed(SearchError::Transport { .. })));
        let alerts: Vec<_> = f.notifier().alerts().collect();
        assert_eq!(alerts, vec!["병원 데이터 서버 오류"]);
    }

    #[test]
    fn activating_an_action_keeps_selection() {
        let mut f = finder();
        search(&mut f, SearchParams::new(SearchCategory::General), Ok(two_hospitals()));
        f.select(EntryKey::new(0, Generation(1)));

        let action = f.activate(EntryKey::new(1, Generation(1)), ActionKind::Detail);
        assert!(action.is_some());
        assert_eq!(f.selection(), SelectionState::SelectedIndex(0));
        assert_eq!(f.activate(EntryKey::new(1, Generation(1)), ActionKind::Call), None);
    }

    #[test]
    fn initial_view_uses_configured_center() {
        let mut f = finder();
        f.show_initial_view();
        assert_eq!(f.scene().map().center(), Some(LatLng::new(37.5665, 126.9780)));
        assert_eq!(f.scene().map().level(), Some(5));
    }
}
