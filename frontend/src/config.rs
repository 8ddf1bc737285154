use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose widget transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewports narrower than this use tap rules instead of hover rules.
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

pub const AUTO_OPEN_DELAY_MS: u32 = 2000;
pub const AUTO_CLOSE_DELAY_MS: u32 = 4000;
pub const HOVER_GRACE_MS: u32 = 2000;
pub const COPY_FEEDBACK_MS: u32 = 2000;

/// Share of the footer that must be on screen before it counts as "in view".
pub const FOOTER_VISIBILITY_THRESHOLD: f64 = 0.5;

pub const HERO_CYCLE_MS: u32 = 5000;

pub const INSTAGRAM_HANDLE: &str = "@institutosobreviver37";
pub const INSTAGRAM_URL: &str = "https://instagram.com/institutosobreviver37";
pub const WHATSAPP_URL: &str = "https://wa.me/553797783092";
pub const WHATSAPP_CTA_URL: &str = "https://wa.me/message/RSUNMVLOFHJYF1";
pub const ADDRESS: &str = "Rua Itaguara, 50 - Vila Espírito Santo, Divinópolis/MG";

pub const BANK_CODE: &str = "748";
pub const COOPERATIVE: &str = "0221";
pub const ACCOUNT: &str = "06909-8";
pub const PIX_KEY: &str = "52.966.894/0001-72";

/// Timings for the donation panel state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisclosureConfig {
    pub auto_open_ms: u32,
    pub auto_close_ms: u32,
    pub hover_grace_ms: u32,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            auto_open_ms: AUTO_OPEN_DELAY_MS,
            auto_close_ms: AUTO_CLOSE_DELAY_MS,
            hover_grace_ms: HOVER_GRACE_MS,
        }
    }
}
