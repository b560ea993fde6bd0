use gridpack_core::Vec2;

pub const WIDTH_VAR: &str = "GRIDPACK_WIDTH";
pub const HEIGHT_VAR: &str = "GRIDPACK_HEIGHT";

const DEFAULT_WIDTH: i32 = 8;
const DEFAULT_HEIGHT: i32 = 6;

/// Demo session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            width: dimension(&lookup, WIDTH_VAR, defaults.width),
            height: dimension(&lookup, HEIGHT_VAR, defaults.height),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

fn dimension(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: i32) -> i32 {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<i32>() {
        Ok(value) if value > 0 => value,
        _ => {
            tracing::warn!("{key}={raw:?} is not a positive integer; using {default}");
            default
        }
    }
}
