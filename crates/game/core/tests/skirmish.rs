//! End-to-end battles driven through the public engine API.

use game_core::{
    ActionBudget, ActionError, AiDecision, Allegiance, EffectType, GameEngine, GameEvent,
    Position, SkillSlot, SkillSpec, Unit, UnitSpec, UnitStats,
};

fn knight() -> UnitSpec {
    UnitSpec::new("Knight", UnitStats::new(100, 20, 2, 1), Allegiance::Player)
}

fn goblin() -> UnitSpec {
    UnitSpec::new("Goblin", UnitStats::new(50, 10, 2, 1), Allegiance::Enemy)
}

fn rooted(spec: UnitSpec) -> UnitSpec {
    let mut stats = spec.stats;
    stats.movement = 0;
    UnitSpec { stats, ..spec }
}

#[test]
fn knight_cannot_reach_goblin_on_first_turn() {
    let mut engine = GameEngine::new(5, 5, "plain");
    let knight = engine.place_unit(knight(), Position::ORIGIN).unwrap();
    let goblin = engine.place_unit(goblin(), Position::new(2, 2)).unwrap();

    let moved = engine.move_unit(knight, Position::new(1, 1));
    assert!(moved.is_ok());
    assert_eq!(engine.cell(Position::new(1, 1)), Some(knight));
    assert_eq!(engine.cell(Position::ORIGIN), None);

    assert_eq!(
        engine.attack_unit(knight, Position::new(2, 2)),
        Err(ActionError::OutOfRange {
            distance: 2,
            range: 1
        })
    );
    assert_eq!(engine.unit(goblin).map(Unit::hp), Some(50));
}

#[test]
fn knight_closes_in_over_two_turns() {
    let mut engine = GameEngine::new(5, 5, "plain");
    let knight = engine.place_unit(knight(), Position::ORIGIN).unwrap();
    let goblin = engine.place_unit(rooted(goblin()), Position::new(2, 2)).unwrap();

    assert_eq!(
        engine.move_unit(knight, Position::new(2, 1)),
        Err(ActionError::OutOfRange {
            distance: 3,
            range: 2
        })
    );
    engine.move_unit(knight, Position::new(1, 1)).unwrap();

    let summary = engine.end_turn();
    assert_eq!(summary.opponent_moves[0].decision, AiDecision::Idle);

    engine.move_unit(knight, Position::new(2, 1)).unwrap();
    engine.attack_unit(knight, Position::new(2, 2)).unwrap();
    assert_eq!(engine.unit(goblin).map(Unit::hp), Some(30));
}

#[test]
fn heal_clamps_and_blocks_recast_while_cooling_down() {
    let mut engine = GameEngine::new(5, 5, "plain");
    let cleric = engine
        .place_unit(
            UnitSpec::new("Cleric", UnitStats::new(60, 5, 2, 1), Allegiance::Player)
                .with_skill(SkillSpec::new("Heal", 30, 2, EffectType::Heal, 3)),
            Position::ORIGIN,
        )
        .unwrap();
    let archer = engine
        .place_unit(
            UnitSpec::new("Archer", UnitStats::new(60, 15, 3, 2), Allegiance::Player),
            Position::new(0, 1),
        )
        .unwrap();
    // The brute only reaches the archer and brings it down to 40.
    engine
        .place_unit(
            rooted(UnitSpec::new("Brute", UnitStats::new(200, 20, 2, 1), Allegiance::Enemy)),
            Position::new(0, 2),
        )
        .unwrap();
    engine.end_turn();
    assert_eq!(engine.unit(archer).map(Unit::hp), Some(40));

    engine
        .cast_skill(cleric, SkillSlot(0), Position::new(0, 1))
        .unwrap();
    assert_eq!(engine.unit(archer).map(Unit::hp), Some(60));
    let heal = &engine.unit(cleric).unwrap().skills()[0];
    assert_eq!(heal.turns_until_ready(), 3);

    assert_eq!(
        engine.cast_skill(cleric, SkillSlot(0), Position::new(0, 1)),
        Err(ActionError::OnCooldown { turns: 3 })
    );
}

#[test]
fn distant_enemy_approaches_without_attacking() {
    let mut engine = GameEngine::new(8, 8, "plain");
    let knight = engine.place_unit(knight(), Position::new(1, 1)).unwrap();
    let goblin = engine.place_unit(goblin(), Position::new(4, 3)).unwrap();
    assert_eq!(Position::new(1, 1).distance(Position::new(4, 3)), 5);

    let summary = engine.end_turn();
    let decision = summary.opponent_moves[0].decision;
    assert!(matches!(decision, AiDecision::Advance { .. }));

    let position = engine.unit(goblin).unwrap().position();
    assert_eq!(position.distance(Position::new(1, 1)), 3);
    assert_eq!(engine.unit(knight).map(Unit::hp), Some(100));
}

#[test]
fn attacking_spends_the_whole_budget() {
    let mut engine = GameEngine::new(5, 5, "plain");
    let knight = engine.place_unit(knight(), Position::new(1, 2)).unwrap();
    engine.place_unit(goblin(), Position::new(2, 2)).unwrap();

    engine.attack_unit(knight, Position::new(2, 2)).unwrap();
    let unit = engine.unit(knight).unwrap();
    assert_eq!(unit.budget(), ActionBudget::Spent);
    assert!(unit.has_moved());
    assert!(unit.has_attacked());
    assert_eq!(
        engine.move_unit(knight, Position::new(0, 2)),
        Err(ActionError::AlreadyActed { unit: knight })
    );
}

#[test]
fn moving_leaves_the_attack_available() {
    let mut engine = GameEngine::new(5, 5, "plain");
    let knight = engine.place_unit(knight(), Position::ORIGIN).unwrap();
    let goblin = engine.place_unit(rooted(goblin()), Position::new(1, 2)).unwrap();

    engine.move_unit(knight, Position::new(1, 1)).unwrap();
    assert_eq!(
        engine.unit(knight).map(Unit::budget),
        Some(ActionBudget::Moved)
    );
    assert_eq!(
        engine.move_unit(knight, Position::new(0, 1)),
        Err(ActionError::AlreadyActed { unit: knight })
    );
    engine.attack_unit(knight, Position::new(1, 2)).unwrap();
    assert_eq!(engine.unit(goblin).map(Unit::hp), Some(30));
}

#[test]
fn hostile_unit_on_greedy_path_blocks_move() {
    let mut engine = GameEngine::new(5, 5, "plain");
    let knight = engine.place_unit(knight(), Position::ORIGIN).unwrap();
    engine.place_unit(rooted(goblin()), Position::new(1, 0)).unwrap();

    assert_eq!(
        engine.move_unit(knight, Position::new(2, 0)),
        Err(ActionError::PathBlocked {
            position: Position::new(1, 0)
        })
    );
    // Diagonal first step sidesteps the goblin.
    assert!(engine.move_unit(knight, Position::new(1, 1)).is_ok());
}

#[test]
fn every_state_change_emits_an_update() {
    let mut engine = GameEngine::new(5, 5, "plain");
    let knight = engine.place_unit(knight(), Position::ORIGIN).unwrap();
    engine.place_unit(rooted(goblin()), Position::new(4, 4)).unwrap();
    engine.drain_events();

    engine.move_unit(knight, Position::new(0, 2)).unwrap();
    assert_eq!(
        engine.drain_events(),
        vec![
            GameEvent::UnitMoved {
                unit: knight,
                from: Position::ORIGIN,
                to: Position::new(0, 2),
            },
            GameEvent::Updated,
        ]
    );
}

#[test]
fn wiping_the_player_side_ends_the_game_once() {
    let mut engine = GameEngine::new(4, 4, "plain");
    engine
        .place_unit(
            UnitSpec::new("Squire", UnitStats::new(20, 5, 2, 1), Allegiance::Player),
            Position::new(0, 1),
        )
        .unwrap();
    engine
        .place_unit(
            UnitSpec::new("Orc", UnitStats::new(120, 25, 2, 1), Allegiance::Enemy),
            Position::new(0, 2),
        )
        .unwrap();

    let first = engine.end_turn();
    assert_eq!(first.outcome, Some(Allegiance::Player));
    assert!(engine.is_over());
    assert!(!engine.is_army_alive(Allegiance::Player));

    engine.end_turn();
    let game_overs = engine
        .drain_events()
        .into_iter()
        .filter(GameEvent::is_game_over)
        .count();
    assert_eq!(game_overs, 1);
}
