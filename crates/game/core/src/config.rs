/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Turn number a fresh engine starts on.
    pub first_turn: u32,

    /// When true, attack skills that drop a target to zero HP remove it and
    /// check for an army wipe exactly like basic attacks. When false the
    /// target stays on the grid until something else finishes it.
    pub skill_defeats: bool,

    /// Emit a [`GameEvent::Notification`](crate::engine::GameEvent::Notification)
    /// for every rejected action.
    pub notify_rejections: bool,
}

impl GameConfig {
    // ===== compile-time limits =====
    /// Largest accepted grid height.
    pub const MAX_ROWS: u32 = 64;
    /// Largest accepted grid width.
    pub const MAX_COLUMNS: u32 = 64;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FIRST_TURN: u32 = 1;

    pub fn new() -> Self {
        Self {
            first_turn: Self::DEFAULT_FIRST_TURN,
            skill_defeats: true,
            notify_rejections: true,
        }
    }

    #[must_use]
    pub fn with_skill_defeats(mut self, skill_defeats: bool) -> Self {
        self.skill_defeats = skill_defeats;
        self
    }

    #[must_use]
    pub fn with_notify_rejections(mut self, notify_rejections: bool) -> Self {
        self.notify_rejections = notify_rejections;
        self
    }

    /// Clamps grid dimensions into the supported range.
    pub fn clamp_dimensions(rows: u32, columns: u32) -> (u32, u32) {
        (
            rows.clamp(1, Self::MAX_ROWS),
            columns.clamp(1, Self::MAX_COLUMNS),
        )
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
