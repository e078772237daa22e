use std::fs;

use game_core::{Allegiance, GameEvent, Position, SkillSlot, Unit};
use runtime::{RuntimeConfig, RuntimeError, ScenarioSource, Session, Topic};

fn drain(rx: &mut tokio::sync::broadcast::Receiver<runtime::Event>) -> Vec<runtime::Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Basic preset played to the end: the goblin closes in, the knight wins.
#[test]
fn basic_preset_plays_to_victory() {
    let mut session = Session::from_config(&RuntimeConfig::default()).unwrap();
    let mut turns = session.subscribe(Topic::Turn).unwrap();
    let mut board = session.subscribe(Topic::Board).unwrap();

    let knight = session.engine().unit_at(Position::ORIGIN).unwrap().id();
    let goblin = session.engine().unit_at(Position::new(2, 2)).unwrap().id();

    session.move_unit(knight, Position::new(1, 1)).unwrap();
    session.end_turn();
    assert_eq!(
        session.engine().unit(goblin).map(Unit::position),
        Some(Position::new(1, 2))
    );
    assert_eq!(session.engine().unit(knight).map(Unit::hp), Some(90));

    session
        .cast_skill(knight, SkillSlot(0), Position::new(1, 2))
        .unwrap();
    assert_eq!(session.engine().unit(goblin).map(Unit::hp), Some(15));
    session.end_turn();
    assert_eq!(session.engine().unit(knight).map(Unit::hp), Some(80));

    session.attack_unit(knight, Position::new(1, 2)).unwrap();
    assert!(session.engine().unit(goblin).is_none());
    assert_eq!(session.engine().outcome(), Some(Allegiance::Enemy));

    let turn_events: Vec<GameEvent> = drain(&mut turns).into_iter().map(|e| e.event).collect();
    assert_eq!(
        turn_events,
        vec![
            GameEvent::TurnEnded { turn: 2 },
            GameEvent::TurnEnded { turn: 3 },
            GameEvent::GameOver {
                loser: Allegiance::Enemy
            },
        ]
    );

    let board_events = drain(&mut board);
    assert!(board_events.windows(2).all(|w| w[0].seq < w[1].seq));
    assert!(
        board_events
            .iter()
            .any(|e| matches!(e.event, GameEvent::UnitDefeated { unit, .. } if unit == goblin))
    );
}

#[test]
fn scenario_and_content_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("units.ron"),
        r#"[
            ("squire", (unit_type: "Squire", stats: (max_hp: 40, atk: 5, movement: 1, attack_range: 1))),
            ("wolf", (unit_type: "Wolf", stats: (max_hp: 30, atk: 8, movement: 3, attack_range: 1))),
        ]"#,
    )
    .unwrap();
    fs::write(dir.path().join("skills.ron"), "[]").unwrap();
    fs::write(dir.path().join("rules.toml"), "notify_rejections = false\n").unwrap();
    let scenario = dir.path().join("glade.ron");
    fs::write(
        &scenario,
        r#"(
            name: "glade",
            rows: 4,
            columns: 4,
            territory: "forest",
            placements: [
                (template: "squire", allegiance: player, position: (x: 0, y: 0)),
                (template: "wolf", allegiance: enemy, position: (x: 3, y: 3)),
            ],
        )"#,
    )
    .unwrap();

    let config = RuntimeConfig {
        scenario: ScenarioSource::File(scenario),
        game_config_path: Some(dir.path().join("rules.toml")),
        data_dir: Some(dir.path().to_path_buf()),
        event_buffer_size: 4,
    };
    let mut session = Session::from_config(&config).unwrap();
    assert_eq!(session.engine().grid().territory(), "forest");
    assert!(!session.engine().config().notify_rejections);

    let mut notices = session.subscribe(Topic::Notice).unwrap();
    let squire = session.engine().unit_at(Position::ORIGIN).unwrap().id();
    assert!(session.move_unit(squire, Position::new(2, 2)).is_err());
    assert!(drain(&mut notices).is_empty());
}

#[test]
fn missing_scenario_file_is_an_io_error() {
    let config = RuntimeConfig {
        scenario: ScenarioSource::File("/nonexistent/battle.ron".into()),
        ..RuntimeConfig::default()
    };
    assert!(matches!(
        Session::from_config(&config),
        Err(RuntimeError::Io { .. })
    ));
}
