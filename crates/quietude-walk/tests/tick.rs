//! Walk mode integration tests: handoff, tick protocol and persistence.

use quietude_core::{AttrKey, GridDims, LayerCategory};
use quietude_grid::{Cell, GridLayer};
use quietude_store::StoreError;
use quietude_test_utils::{
    default_area, two_by_two_area, FailingLogic, MockRenderer, PhaseLog, RecordingLogic,
    ScriptedInput,
};
use quietude_walk::{
    Collaborators, Phase, TickOutcome, WalkCommand, WalkConfig, WalkError, WalkMode,
};

// ── Helpers ─────────────────────────────────────────────────────

fn config_2x2() -> WalkConfig {
    WalkConfig {
        size_y: 2,
        size_x: 2,
        ..WalkConfig::default()
    }
}

fn active_mode() -> WalkMode {
    let mut mode = WalkMode::new(config_2x2()).unwrap();
    mode.init(Cell::area(two_by_two_area())).unwrap();
    mode
}

// ── Tick protocol ───────────────────────────────────────────────

#[test]
fn phases_run_output_input_logic() {
    let log = PhaseLog::new();
    let mut renderer = MockRenderer::new(log.clone());
    let mut input = ScriptedInput::commands(log.clone(), [WalkCommand::North, WalkCommand::Wait]);
    let mut logic = RecordingLogic::new(log.clone());
    let mut mode = active_mode();

    {
        let mut collab = Collaborators::new(&mut renderer, &mut input, &mut logic);
        for _ in 0..2 {
            assert_eq!(mode.tick(&mut collab).unwrap(), TickOutcome::Continue);
        }
    }

    assert_eq!(
        log.phases(),
        vec![
            Phase::Output,
            Phase::Input,
            Phase::Logic,
            Phase::Output,
            Phase::Input,
            Phase::Logic,
        ]
    );
    assert_eq!(renderer.ticks_seen, vec![0, 1]);
    assert_eq!(logic.commands, vec![WalkCommand::North, WalkCommand::Wait]);
    assert_eq!(mode.session().unwrap().ticks(), 2);
}

#[test]
fn quit_requests_exit() {
    let log = PhaseLog::new();
    let mut renderer = MockRenderer::new(log.clone());
    let mut input = ScriptedInput::commands(log.clone(), [WalkCommand::Quit]);
    let mut logic = RecordingLogic::new(log.clone());
    let mut mode = active_mode();

    let mut collab = Collaborators::new(&mut renderer, &mut input, &mut logic);
    assert_eq!(mode.tick(&mut collab).unwrap(), TickOutcome::Exit);
    drop(collab);

    let area = mode.end().unwrap();
    assert_eq!(area, two_by_two_area());
}

#[test]
fn invalid_code_skips_logic() {
    let log = PhaseLog::new();
    let mut renderer = MockRenderer::new(log.clone());
    let mut input = ScriptedInput::new(log.clone(), [42]);
    let mut logic = RecordingLogic::new(log.clone());
    let mut mode = active_mode();

    let mut collab = Collaborators::new(&mut renderer, &mut input, &mut logic);
    let err = mode.tick(&mut collab).unwrap_err();
    drop(collab);

    assert!(matches!(err, WalkError::InvalidCommand { code: 42 }));
    assert_eq!(log.phases(), vec![Phase::Output, Phase::Input]);
    assert!(logic.commands.is_empty());
    assert_eq!(mode.session().unwrap().ticks(), 0);
}

#[test]
fn render_failure_stops_tick_before_input() {
    let log = PhaseLog::new();
    let mut renderer = MockRenderer::new(log.clone());
    renderer.fail_with = Some("window closed".into());
    let mut input = ScriptedInput::new(log.clone(), std::iter::empty());
    let mut logic = RecordingLogic::new(log.clone());
    let mut mode = active_mode();

    let mut collab = Collaborators::new(&mut renderer, &mut input, &mut logic);
    let err = mode.tick(&mut collab).unwrap_err();
    assert!(matches!(
        err,
        WalkError::Phase {
            phase: Phase::Output,
            ..
        }
    ));
    drop(collab);
    assert_eq!(log.phases(), vec![Phase::Output]);
}

#[test]
fn logic_failure_keeps_session_running() {
    let log = PhaseLog::new();
    let mut renderer = MockRenderer::new(log.clone());
    let mut input = ScriptedInput::new(log.clone(), std::iter::empty());
    let mut logic = FailingLogic::new(1);
    let mut mode = active_mode();

    let mut collab = Collaborators::new(&mut renderer, &mut input, &mut logic);
    mode.tick(&mut collab).unwrap();
    let err = mode.tick(&mut collab).unwrap_err();
    drop(collab);

    assert!(matches!(
        err,
        WalkError::Phase {
            phase: Phase::Logic,
            ..
        }
    ));
    assert_eq!(logic.calls(), 2);
    assert!(mode.is_active());
    assert_eq!(mode.session().unwrap().ticks(), 1);
}

#[test]
fn tick_without_session_reported() {
    let log = PhaseLog::new();
    let mut renderer = MockRenderer::new(log.clone());
    let mut input = ScriptedInput::new(log.clone(), std::iter::empty());
    let mut logic = RecordingLogic::new(log.clone());
    let mut mode = WalkMode::new(config_2x2()).unwrap();

    let mut collab = Collaborators::new(&mut renderer, &mut input, &mut logic);
    assert!(matches!(
        mode.tick(&mut collab),
        Err(WalkError::NotInitialized)
    ));
    drop(collab);
    assert!(log.phases().is_empty());
}

// ── Lifecycle ───────────────────────────────────────────────────

#[test]
fn mode_can_be_reinitialized_after_end() {
    let mut mode = active_mode();
    assert!(matches!(
        mode.init(Cell::area(two_by_two_area())),
        Err(WalkError::AlreadyInitialized)
    ));
    mode.end().unwrap();
    mode.init(Cell::area(two_by_two_area())).unwrap();
    assert_eq!(mode.session().unwrap().ticks(), 0);
}

#[test]
fn text_handoff_refused() {
    let mut mode = WalkMode::new(config_2x2()).unwrap();
    assert!(matches!(
        mode.init(Cell::text("not an area")),
        Err(WalkError::HandoffMismatch { .. })
    ));
    assert!(!mode.is_active());
}

// ── Persistence ─────────────────────────────────────────────────

#[test]
fn save_then_init_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walk.qwlk");
    let config = WalkConfig {
        save_path: Some(path.clone()),
        ..config_2x2()
    };

    let mut mode = WalkMode::new(config.clone()).unwrap();
    mode.init(Cell::area(two_by_two_area())).unwrap();
    mode.session_mut()
        .unwrap()
        .area_mut()
        .earth_mut()
        .slot_attrs_mut(3)
        .unwrap()
        .set(AttrKey::Description, Cell::text("A mossy stone."))
        .unwrap();
    let saved_to = mode.session().unwrap().save_configured().unwrap();
    assert_eq!(saved_to, path);
    let original = mode.end().unwrap();

    let mut restored = WalkMode::init_from_file(&path, config).unwrap();
    assert!(restored.is_active());
    let area = restored.end().unwrap();
    assert_eq!(area, original);
    assert_eq!(
        area.earth().slot_attrs(3).unwrap().text(AttrKey::Description),
        Some("A mossy stone.")
    );
}

#[test]
fn save_path_in_missing_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saves").join("area.qwlk");
    let config = WalkConfig {
        save_path: Some(path.clone()),
        ..config_2x2()
    };
    let mut mode = WalkMode::new(config.clone()).unwrap();
    mode.init(Cell::area(two_by_two_area())).unwrap();
    mode.session().unwrap().save_configured().unwrap();

    let restored = WalkMode::init_from_file(&path, config).unwrap();
    assert_eq!(restored.session().unwrap().area(), &two_by_two_area());
}

#[test]
fn refused_save_keeps_previous_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walk.qwlk");
    let config = WalkConfig {
        save_path: Some(path.clone()),
        ..config_2x2()
    };
    let mut mode = WalkMode::new(config.clone()).unwrap();
    mode.init(Cell::area(two_by_two_area())).unwrap();
    mode.session().unwrap().save_configured().unwrap();

    let session = mode.session_mut().unwrap();
    let emptied = GridLayer::new(GridDims::new(2, 2).unwrap(), LayerCategory::Earth);
    *session.area_mut().earth_mut() = emptied;
    let err = session.save_configured().unwrap_err();
    assert!(matches!(
        err,
        WalkError::Store(StoreError::IncompleteLayer {
            filled: 0,
            capacity: 4
        })
    ));

    let restored = WalkMode::init_from_file(&path, config).unwrap();
    assert_eq!(restored.session().unwrap().area(), &two_by_two_area());
}

#[test]
fn init_from_file_checks_configured_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.qwlk");
    quietude_store::save_area(&path, &default_area(3, 3)).unwrap();

    let err = WalkMode::init_from_file(&path, config_2x2()).unwrap_err();
    assert!(matches!(
        err,
        WalkError::DimsMismatch { expected, found }
            if expected == GridDims::new(2, 2).unwrap() && found == GridDims::new(3, 3).unwrap()
    ));
}

#[test]
fn config_file_drives_mode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("walk.toml");
    std::fs::write(&path, "size_y = 3\nsize_x = 3\n").unwrap();

    let config = WalkConfig::load(&path).unwrap();
    let mut mode = WalkMode::new(config).unwrap();
    mode.init(Cell::area(default_area(3, 3))).unwrap();
    assert_eq!(mode.session().unwrap().area().dims(), GridDims::new(3, 3).unwrap());
}
