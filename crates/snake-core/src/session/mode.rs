use strum::{Display, EnumString, FromRepr, IntoStaticStr};

/// Rule variant for wall collisions, tracked per session
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    FromRepr,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[repr(u8)]
pub enum GameMode {
    #[default]
    #[strum(serialize = "MODO_NORMAL")]
    Normal = 1,
    #[strum(serialize = "MODO_ATRAVESAR_PAREDES")]
    WallsPassthrough = 2,
}

impl GameMode {
    /// Menu code used by the game engine (1 = normal, 2 = walls passthrough)
    pub fn from_code(code: i32) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    /// Parse a stored mode tag. Matching is exact; anything else is `Normal`.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    pub fn tag(&self) -> &'static str {
        self.into()
    }

    /// Human-readable name shown in session reports
    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Normal mode",
            Self::WallsPassthrough => "Walls passthrough mode",
        }
    }
}
