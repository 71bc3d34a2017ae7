//! 検証フロー全体の結合テスト
//!
//! 記録型フェイクサーフェスでカメラ指示と状態遷移を合わせて検証する

use std::cell::RefCell;

use sat_verify_common::{
    approach, demo_result, parse_coordinate, return_to_idle, target_view, CameraView, MapSurface,
    ProjectType, ViewState, CONNECTION_FAILED, IDLE_VIEW, MARKER_COLOR,
};

/// サーフェスへ発行されたコマンドの記録
#[derive(Debug, Clone, PartialEq)]
enum Command {
    FlyTo(CameraView),
    Marker { lat: f64, lon: f64, color: String },
}

#[derive(Default)]
struct RecordingSurface {
    commands: RefCell<Vec<Command>>,
}

impl RecordingSurface {
    fn commands(&self) -> Vec<Command> {
        self.commands.borrow().clone()
    }

    fn marker_count(&self) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|c| matches!(c, Command::Marker { .. }))
            .count()
    }
}

impl MapSurface for RecordingSurface {
    fn fly_to(&self, view: &CameraView) {
        self.commands.borrow_mut().push(Command::FlyTo(*view));
    }

    fn place_marker(&self, lat: f64, lon: f64, color: &str) {
        self.commands.borrow_mut().push(Command::Marker {
            lat,
            lon,
            color: color.to_string(),
        });
    }
}

#[test]
fn test_verify_issues_one_flyto_then_one_marker() {
    let surface = RecordingSurface::default();
    let mut state = ViewState::new();
    state.map_ready();

    let lat = parse_coordinate("5.9667");
    let lon = parse_coordinate("5.6667");
    state.begin_verification();
    approach(&surface, lat, lon);

    let commands = surface.commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0], Command::FlyTo(target_view(lat, lon)));
    assert_eq!(
        commands[1],
        Command::Marker {
            lat,
            lon,
            color: MARKER_COLOR.to_string()
        }
    );
}

#[test]
fn test_success_flow_shows_response_after_delay() {
    let surface = RecordingSurface::default();
    let mut state = ViewState::new();
    state.map_ready();

    let generation = state.begin_verification();
    approach(&surface, 5.9667, 5.6667);

    // 通信中の画面状態
    assert!(state.loading);
    assert!(!state.rotating);
    assert!(!state.show_results);

    // 演出ディレイ後にそのまま表示される
    let mut response = demo_result(ProjectType::OilSpillRemediation, 5.9667, 5.6667);
    response.satellite_analysis.verdict = "VERIFIED".to_string();
    response.satellite_analysis.risk_flag = false;
    assert!(state.apply_success(generation, response.clone()));

    assert!(!state.loading);
    assert!(state.show_results);
    assert_eq!(state.result, Some(response));
}

#[test]
fn test_failure_then_fallback_masks_error() {
    let surface = RecordingSurface::default();
    let mut state = ViewState::new();
    state.map_ready();

    let generation = state.begin_verification();
    approach(&surface, 5.9667, 5.6667);

    // 失敗直後はバナーだけが出る
    assert!(state.apply_failure(generation, CONNECTION_FAILED));
    assert!(state.has_error());
    assert_eq!(state.error, CONNECTION_FAILED);
    assert!(!state.show_results);

    // ディレイ後、合成結果がバナーを覆い隠す
    let fallback = demo_result(ProjectType::OilSpillRemediation, 5.9667, 5.6667);
    assert!(state.apply_fallback(generation, fallback.clone()));
    assert!(!state.has_error());
    assert!(state.show_results);

    let analysis = &state.result.as_ref().unwrap().satellite_analysis;
    assert_eq!(analysis.verdict, "SPILL DETECTED");
    assert_eq!(analysis.calculated_index, 0.08);
    assert!(analysis.risk_flag);
}

#[test]
fn test_fallback_verdict_depends_on_project_type() {
    let mut state = ViewState::new();
    let generation = state.begin_verification();

    let fallback = demo_result(ProjectType::Building, 1.0, 2.0);
    state.apply_fallback(generation, fallback);

    let analysis = &state.result.as_ref().unwrap().satellite_analysis;
    assert_eq!(analysis.verdict, "GHOST PROJECT RISK");
    assert_eq!(analysis.calculated_index, 0.62);
}

#[test]
fn test_superseded_attempt_is_discarded() {
    let surface = RecordingSurface::default();
    let mut state = ViewState::new();
    state.map_ready();

    let first = state.begin_verification();
    approach(&surface, 1.0, 1.0);

    // 1回目の通信が終わる前に2回目が始まる
    let second = state.begin_verification();
    approach(&surface, 2.0, 2.0);

    // 1回目の遅延結果は成功・失敗・フォールバックとも捨てられる
    assert!(!state.apply_success(first, demo_result(ProjectType::Road, 1.0, 1.0)));
    assert!(!state.apply_failure(first, CONNECTION_FAILED));
    assert!(!state.apply_fallback(first, demo_result(ProjectType::Road, 1.0, 1.0)));
    assert!(state.result.is_none());
    assert!(state.loading);

    // 2回目は受理される
    let response = demo_result(ProjectType::Factory, 2.0, 2.0);
    assert!(state.apply_success(second, response.clone()));
    assert_eq!(state.result, Some(response));
}

#[test]
fn test_reset_restores_rotation_and_returns_to_idle() {
    let surface = RecordingSurface::default();
    let mut state = ViewState::new();
    state.map_ready();

    let generation = state.begin_verification();
    approach(&surface, 5.9667, 5.6667);
    state.apply_success(generation, demo_result(ProjectType::Road, 5.9667, 5.6667));

    state.reset();
    return_to_idle(&surface);

    assert!(!state.show_results);
    assert!(state.result.is_none());
    assert!(state.rotating);

    // 最後のコマンドは地球全景へのflyTo1回だけ
    let commands = surface.commands();
    assert_eq!(commands.last(), Some(&Command::FlyTo(IDLE_VIEW)));
    let idle_flights = commands
        .iter()
        .filter(|c| **c == Command::FlyTo(IDLE_VIEW))
        .count();
    assert_eq!(idle_flights, 1);
}

#[test]
fn test_markers_accumulate_across_verifications() {
    let surface = RecordingSurface::default();
    let mut state = ViewState::new();
    state.map_ready();

    for (lat, lon) in [(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)] {
        let generation = state.begin_verification();
        approach(&surface, lat, lon);
        state.apply_success(generation, demo_result(ProjectType::Road, lat, lon));
        state.reset();
        return_to_idle(&surface);
    }

    // マーカーは撤去されず増え続ける
    assert_eq!(surface.marker_count(), 3);
}

#[test]
fn test_nan_coordinates_flow_through_uncorrected() {
    let surface = RecordingSurface::default();
    let mut state = ViewState::new();
    state.map_ready();

    let lat = parse_coordinate("not a number");
    let lon = parse_coordinate("");
    assert!(lat.is_nan());
    assert!(lon.is_nan());

    let generation = state.begin_verification();
    approach(&surface, lat, lon);

    // NaNのままマーカー設置まで届く
    let commands = surface.commands();
    match &commands[1] {
        Command::Marker { lat, lon, .. } => {
            assert!(lat.is_nan());
            assert!(lon.is_nan());
        }
        other => panic!("expected marker, got {:?}", other),
    }

    // フォールバック結果にもNaNが写る
    let fallback = demo_result(ProjectType::OilSpillRemediation, lat, lon);
    state.apply_fallback(generation, fallback);
    assert!(state.result.as_ref().unwrap().location.lat.is_nan());
}
