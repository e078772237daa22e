use crate::action::{ActionOutcome, ActionTransition, validate};
use crate::error::ActionError;
use crate::state::{EffectType, Grid, Position, SkillSlot, UnitId};

/// Basic attack against the unit standing at `target`.
///
/// Attacking ends the attacker's turn: it can neither move nor attack again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub attacker: UnitId,
    pub target: Position,
}

impl AttackAction {
    pub fn new(attacker: UnitId, target: Position) -> Self {
        Self { attacker, target }
    }
}

impl ActionTransition for AttackAction {
    fn actor(&self) -> UnitId {
        self.attacker
    }

    fn pre_validate(&self, grid: &Grid) -> Result<(), ActionError> {
        let attacker = grid
            .unit(self.attacker)
            .ok_or(ActionError::UnknownUnit(self.attacker))?;
        validate::can_attack(grid, attacker, attacker.position(), self.target)
    }

    fn apply(&self, grid: &mut Grid) -> Result<ActionOutcome, ActionError> {
        let damage = grid
            .unit(self.attacker)
            .ok_or(ActionError::UnknownUnit(self.attacker))?
            .atk();
        let target = grid.cell(self.target).ok_or(ActionError::InvalidTarget {
            position: self.target,
        })?;

        let defender = grid
            .unit_mut(target)
            .ok_or(ActionError::UnknownUnit(target))?;
        defender.take_damage(damage);
        let remaining_hp = defender.hp();

        if let Some(attacker) = grid.unit_mut(self.attacker) {
            attacker.spend();
        }

        Ok(ActionOutcome::Attacked {
            attacker: self.attacker,
            target,
            damage,
            remaining_hp,
        })
    }
}

/// Casts the skill in `slot` on the unit standing at `target`.
///
/// Casting consumes the caster's whole turn and starts the skill's cooldown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastAction {
    pub caster: UnitId,
    pub slot: SkillSlot,
    pub target: Position,
}

impl CastAction {
    pub fn new(caster: UnitId, slot: SkillSlot, target: Position) -> Self {
        Self {
            caster,
            slot,
            target,
        }
    }
}

impl ActionTransition for CastAction {
    fn actor(&self) -> UnitId {
        self.caster
    }

    fn pre_validate(&self, grid: &Grid) -> Result<(), ActionError> {
        let caster = grid
            .unit(self.caster)
            .ok_or(ActionError::UnknownUnit(self.caster))?;
        validate::can_cast_skill(grid, caster, self.slot, caster.position(), self.target)
    }

    fn apply(&self, grid: &mut Grid) -> Result<ActionOutcome, ActionError> {
        let (effect, power) = {
            let caster = grid
                .unit(self.caster)
                .ok_or(ActionError::UnknownUnit(self.caster))?;
            let skill = caster.skill(self.slot).ok_or(ActionError::UnknownSkill {
                unit: self.caster,
                slot: self.slot,
            })?;
            (
                skill.effect_type(),
                i32::try_from(skill.damage()).unwrap_or(i32::MAX),
            )
        };
        let target = grid.cell(self.target).ok_or(ActionError::InvalidTarget {
            position: self.target,
        })?;

        let recipient = grid
            .unit_mut(target)
            .ok_or(ActionError::UnknownUnit(target))?;
        let amount = match effect {
            EffectType::Attack => {
                recipient.take_damage(power);
                power
            }
            EffectType::Heal => recipient.heal(power),
            // No numeric effect is defined for buffs and debuffs yet.
            EffectType::Buff | EffectType::Debuff => 0,
        };
        let remaining_hp = recipient.hp();

        if let Some(caster) = grid.unit_mut(self.caster) {
            if let Some(skill) = caster.skill_mut(self.slot) {
                skill.trigger_cooldown();
            }
            caster.spend();
        }

        Ok(ActionOutcome::SkillCast {
            caster: self.caster,
            slot: self.slot,
            target,
            effect,
            amount,
            remaining_hp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActionBudget, Allegiance, DEFAULT_TERRITORY, SkillSpec, UnitSpec, UnitStats};

    fn grid_with(attacker: UnitSpec, defender: UnitSpec) -> (Grid, UnitId, UnitId) {
        let mut grid = Grid::new(5, 5, DEFAULT_TERRITORY);
        let a = grid.place(attacker, Position::new(2, 1)).unwrap();
        let d = grid.place(defender, Position::new(2, 2)).unwrap();
        (grid, a, d)
    }

    #[test]
    fn attack_subtracts_atk_and_spends_budget() {
        let (mut grid, knight, goblin) = grid_with(
            UnitSpec::new("Knight", UnitStats::new(100, 20, 2, 1), Allegiance::Player),
            UnitSpec::new("Goblin", UnitStats::new(50, 10, 2, 1), Allegiance::Enemy),
        );

        let action = AttackAction::new(knight, Position::new(2, 2));
        action.pre_validate(&grid).unwrap();
        let outcome = action.apply(&mut grid).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::Attacked {
                attacker: knight,
                target: goblin,
                damage: 20,
                remaining_hp: 30
            }
        );
        assert_eq!(outcome.defeated_target(), None);
        let attacker = grid.unit(knight).unwrap();
        assert_eq!(attacker.budget(), ActionBudget::Spent);
        assert!(attacker.has_moved());
        assert!(attacker.has_attacked());
    }

    #[test]
    fn lethal_attack_reports_defeated_target() {
        let (mut grid, _, goblin) = grid_with(
            UnitSpec::new("Orc", UnitStats::new(120, 60, 2, 1), Allegiance::Player),
            UnitSpec::new("Goblin", UnitStats::new(50, 10, 2, 1), Allegiance::Enemy),
        );
        let attacker = grid.cell(Position::new(2, 1)).unwrap();

        let outcome = AttackAction::new(attacker, Position::new(2, 2))
            .apply(&mut grid)
            .unwrap();
        assert_eq!(outcome.defeated_target(), Some(goblin));
    }

    #[test]
    fn heal_cast_clamps_and_starts_cooldown() {
        let (mut grid, cleric, ally) = grid_with(
            UnitSpec::new("Cleric", UnitStats::new(60, 5, 2, 1), Allegiance::Player)
                .with_skill(SkillSpec::new("Heal", 30, 2, EffectType::Heal, 3)),
            UnitSpec::new("Squire", UnitStats::new(60, 10, 2, 1), Allegiance::Player),
        );
        grid.unit_mut(ally).unwrap().take_damage(20);

        let action = CastAction::new(cleric, SkillSlot(0), Position::new(2, 2));
        action.pre_validate(&grid).unwrap();
        let outcome = action.apply(&mut grid).unwrap();

        assert_eq!(
            outcome,
            ActionOutcome::SkillCast {
                caster: cleric,
                slot: SkillSlot(0),
                target: ally,
                effect: EffectType::Heal,
                amount: 20,
                remaining_hp: 60
            }
        );
        let caster = grid.unit(cleric).unwrap();
        assert_eq!(caster.skills()[0].turns_until_ready(), 3);
        assert_eq!(caster.budget(), ActionBudget::Spent);
    }

    #[test]
    fn buff_cast_is_a_successful_no_op() {
        let (mut grid, bard, ally) = grid_with(
            UnitSpec::new("Bard", UnitStats::new(60, 5, 2, 1), Allegiance::Enemy)
                .with_skill(SkillSpec::new("War Bless", 1, 2, EffectType::Buff, 4)),
            UnitSpec::new("Goblin", UnitStats::new(50, 10, 2, 1), Allegiance::Enemy),
        );

        let outcome = CastAction::new(bard, SkillSlot(0), Position::new(2, 2))
            .apply(&mut grid)
            .unwrap();
        assert_eq!(
            outcome,
            ActionOutcome::SkillCast {
                caster: bard,
                slot: SkillSlot(0),
                target: ally,
                effect: EffectType::Buff,
                amount: 0,
                remaining_hp: 50
            }
        );
        assert_eq!(grid.unit(bard).unwrap().skills()[0].turns_until_ready(), 4);
    }

    #[test]
    fn oversized_skill_damage_saturates() {
        let (mut grid, mage, goblin) = grid_with(
            UnitSpec::new("Mage", UnitStats::new(60, 5, 2, 1), Allegiance::Player).with_skill(
                SkillSpec::new("Meteor", u32::MAX, 3, EffectType::Attack, 5),
            ),
            UnitSpec::new("Goblin", UnitStats::new(50, 10, 2, 1), Allegiance::Enemy),
        );

        let outcome = CastAction::new(mage, SkillSlot(0), Position::new(2, 2))
            .apply(&mut grid)
            .unwrap();
        assert!(matches!(
            outcome,
            ActionOutcome::SkillCast { amount: i32::MAX, remaining_hp, .. } if remaining_hp < 0
        ));
        assert_eq!(outcome.defeated_target(), Some(goblin));
        assert!(grid.unit(goblin).is_some_and(|unit| unit.hp() <= 0));
    }
}
