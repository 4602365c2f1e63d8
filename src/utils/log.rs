use colog::format::CologStyle;
use env_logger::Builder;
use log::{Level, LevelFilter};

struct CustomLevelTokens;

impl CologStyle for CustomLevelTokens {
    fn level_token(&self, level: &Level) -> &str {
        match *level {
            Level::Error => "ERR",
            Level::Warn => "WRN",
            Level::Info => "INF",
            Level::Debug => "DBG",
            Level::Trace => "TRC",
        }
    }
}

pub struct Logger;

impl Logger {
    /// Installs the global logger. `ROLEBOT_LOG` overrides `level` for this crate.
    pub fn init(level: Option<LevelFilter>) {
        let level = std::env::var("ROLEBOT_LOG")
            .ok()
            .and_then(|level| level.parse().ok())
            .or(level)
            .unwrap_or(LevelFilter::Info);

        Builder::new()
            .filter(Some("rolebot"), level)
            .filter(Some("serenity"), LevelFilter::Warn)
            .filter(Some("poise"), LevelFilter::Warn)
            .filter(Some("tracing"), LevelFilter::Warn)
            .target(env_logger::Target::Stdout)
            .format(colog::formatter(CustomLevelTokens))
            .write_style(env_logger::WriteStyle::Always)
            .init();
    }
}
