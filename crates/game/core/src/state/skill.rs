//! Skills owned by units.

/// What a skill does to its target.
///
/// Offensive effects target the opposing allegiance, supportive effects target
/// the caster's own side.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectType {
    /// Subtracts `damage` from the target's HP.
    Attack,
    /// Restores `damage` HP, clamped to the target's maximum.
    Heal,
    /// Reserved. Casts succeed without a numeric effect.
    Buff,
    /// Reserved. Casts succeed without a numeric effect.
    Debuff,
}

impl EffectType {
    /// Attack and debuff require a target of the opposing allegiance.
    pub const fn is_offensive(self) -> bool {
        matches!(self, Self::Attack | Self::Debuff)
    }

    /// Heal and buff require a target of the caster's allegiance.
    pub const fn is_supportive(self) -> bool {
        !self.is_offensive()
    }
}

/// Plain skill record supplied by content or scenario data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSpec {
    pub name: String,
    /// Damage dealt, or HP restored when the effect is [`EffectType::Heal`].
    pub damage: u32,
    pub range: u32,
    pub effect_type: EffectType,
    /// Turns the skill stays unavailable after a cast.
    pub cooldown: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl SkillSpec {
    pub fn new(
        name: impl Into<String>,
        damage: u32,
        range: u32,
        effect_type: EffectType,
        cooldown: u32,
    ) -> Self {
        Self {
            name: name.into(),
            damage,
            range,
            effect_type,
            cooldown,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Index of a skill within its owner's skill list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSlot(pub usize);

impl std::fmt::Display for SkillSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// A skill instance with its cooldown state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    spec: SkillSpec,
    turns_until_ready: u32,
}

impl Skill {
    /// Creates a skill that is ready to use.
    pub fn new(spec: SkillSpec) -> Self {
        Self {
            spec,
            turns_until_ready: 0,
        }
    }

    pub fn spec(&self) -> &SkillSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn damage(&self) -> u32 {
        self.spec.damage
    }

    pub fn range(&self) -> u32 {
        self.spec.range
    }

    pub fn effect_type(&self) -> EffectType {
        self.spec.effect_type
    }

    pub fn cooldown(&self) -> u32 {
        self.spec.cooldown
    }

    pub fn turns_until_ready(&self) -> u32 {
        self.turns_until_ready
    }

    pub fn is_ready(&self) -> bool {
        self.turns_until_ready == 0
    }

    /// Puts the skill on cooldown after a cast.
    pub(crate) fn trigger_cooldown(&mut self) {
        self.turns_until_ready = self.spec.cooldown;
    }

    /// Advances the cooldown by one turn. Returns true if the counter changed.
    pub(crate) fn tick_cooldown(&mut self) -> bool {
        if self.turns_until_ready == 0 {
            return false;
        }
        self.turns_until_ready -= 1;
        true
    }
}

impl From<SkillSpec> for Skill {
    fn from(spec: SkillSpec) -> Self {
        Self::new(spec)
    }
}
