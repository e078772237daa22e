//! Text rendering of the board and of engine events.

use std::fmt::Write;

use game_core::{Allegiance, EffectType, GameEngine, GameEvent, Grid, Position, UnitId};

use crate::config::DisplayConfig;

/// Draws the grid one row per line, rows top to bottom.
///
/// Empty cells are `.`, units are `P` or `E` followed by their id.
pub fn board(grid: &Grid) -> String {
    let mut out = String::new();
    let width = (grid.columns() as usize * 6).saturating_sub(3);

    let _ = write!(out, "    ");
    for y in 0..grid.columns() {
        let _ = write!(out, "{:^3}   ", y);
    }
    let _ = writeln!(out);

    for x in 0..grid.rows() as i32 {
        let cells: Vec<String> = (0..grid.columns() as i32)
            .map(|y| cell(grid, Position::new(x, y)))
            .collect();
        let _ = writeln!(out, "{:>2}  {}", x, cells.join(" | "));
        let _ = writeln!(out, "    {}", "-".repeat(width));
    }
    let _ = write!(
        out,
        "turn {} | {} | player units {} | enemy units {}",
        grid.turn(),
        grid.territory(),
        grid.units_of(Allegiance::Player).count(),
        grid.units_of(Allegiance::Enemy).count()
    );
    out
}

fn cell(grid: &Grid, position: Position) -> String {
    match grid.unit_at(position) {
        None => format!("{:^3}", "."),
        Some(unit) => {
            let side = match unit.allegiance() {
                Allegiance::Player => 'P',
                Allegiance::Enemy => 'E',
            };
            format!("{:<3}", format!("{}{}", side, unit.id().0))
        }
    }
}

/// Short roster line per unit: id, name, HP, position, and budget.
pub fn roster(grid: &Grid) -> Vec<String> {
    grid.units()
        .map(|unit| {
            format!(
                "{} {} [{}] hp {}/{} at {} ({:?})",
                unit.id(),
                unit.name(),
                unit.allegiance(),
                unit.hp(),
                unit.max_hp(),
                unit.position(),
                unit.budget()
            )
        })
        .collect()
}

fn label(engine: &GameEngine, unit: UnitId) -> String {
    match engine.unit(unit) {
        Some(found) => format!("{} {}", found.name(), unit),
        None => unit.to_string(),
    }
}

/// One line describing `event`, or `None` when it should not be printed.
pub fn describe(engine: &GameEngine, event: &GameEvent, display: &DisplayConfig) -> Option<String> {
    let line = match event {
        GameEvent::Updated => return None,
        GameEvent::UnitPlaced { unit, position } => {
            format!("{} enters at {}", label(engine, *unit), position)
        }
        GameEvent::UnitMoved { unit, from, to } => {
            if !display.show_movement {
                return None;
            }
            format!("{} moves {} -> {}", label(engine, *unit), from, to)
        }
        GameEvent::UnitAttacked {
            attacker,
            target,
            damage,
            remaining_hp,
        } => format!(
            "{} attacks {} for {} damage (hp {})",
            label(engine, *attacker),
            target,
            damage,
            remaining_hp
        ),
        GameEvent::SkillCast {
            caster,
            slot,
            target,
            effect,
            amount,
            remaining_hp,
        } => {
            let verb = match effect {
                EffectType::Attack => "hits",
                EffectType::Heal => "heals",
                EffectType::Buff | EffectType::Debuff => "affects",
            };
            let skill = engine
                .unit(*caster)
                .and_then(|unit| unit.skill(*slot))
                .map_or_else(|| slot.to_string(), |skill| skill.name().to_string());
            format!(
                "{} casts {}: {} {} by {} (hp {})",
                label(engine, *caster),
                skill,
                verb,
                target,
                amount,
                remaining_hp
            )
        }
        GameEvent::UnitWaited { unit } => {
            if !display.show_waits {
                return None;
            }
            format!("{} waits", label(engine, *unit))
        }
        GameEvent::UnitDefeated {
            unit,
            name,
            position,
        } => format!("{} {} defeated at {}!", name, unit, position),
        GameEvent::TurnEnded { turn } => format!("-- turn {} --", turn),
        GameEvent::GameOver { loser } => match loser {
            Allegiance::Enemy => "Victory! All enemy units are defeated.".to_string(),
            Allegiance::Player => "Defeat. All player units are lost.".to_string(),
        },
        GameEvent::Notification { message } => format!("! {}", message),
    };
    Some(line)
}
