use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use tapline_core::Size;
use tapline_tuio::DEFAULT_PORT;

pub const USAGE: &str = "usage: tuio-monitor [--port N] [--display WxH] [--tick-hz N] [--ticks N]";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitorSettings {
    pub port: u16,
    /// Display the tracker's normalized coordinates are scaled to.
    pub display: Size,
    pub tick_rate_hz: u32,
    /// Stop after this many ticks; runs until killed when `None`.
    pub max_ticks: Option<u64>,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            display: Size::new(1920, 1080),
            tick_rate_hz: 60,
            max_ticks: None,
        }
    }
}

impl MonitorSettings {
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_display(mut self, display: Size) -> Self {
        self.display = display;
        self
    }

    pub fn with_tick_rate(mut self, hz: u32) -> Self {
        self.tick_rate_hz = hz;
        self
    }

    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }

    /// Parses command-line arguments, without the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut settings = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| anyhow!("{name} needs a value\n{USAGE}"))
            };
            match flag.as_str() {
                "--port" => {
                    let raw = value("--port")?;
                    settings.port = raw.parse().with_context(|| format!("bad port {raw:?}"))?;
                }
                "--display" => settings.display = parse_size(&value("--display")?)?,
                "--tick-hz" => {
                    let raw = value("--tick-hz")?;
                    let hz: u32 = raw
                        .parse()
                        .with_context(|| format!("bad tick rate {raw:?}"))?;
                    if hz == 0 {
                        bail!("tick rate must be positive");
                    }
                    settings.tick_rate_hz = hz;
                }
                "--ticks" => {
                    let raw = value("--ticks")?;
                    settings.max_ticks =
                        Some(raw.parse().with_context(|| format!("bad tick count {raw:?}"))?);
                }
                other => bail!("unknown argument {other:?}\n{USAGE}"),
            }
        }
        Ok(settings)
    }
}

fn parse_size(raw: &str) -> Result<Size> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("display must look like 1920x1080, got {raw:?}"))?;
    let width: i32 = width.parse().with_context(|| format!("bad width in {raw:?}"))?;
    let height: i32 = height.parse().with_context(|| format!("bad height in {raw:?}"))?;
    if width <= 0 || height <= 0 {
        bail!("display size must be positive, got {raw:?}");
    }
    Ok(Size::new(width, height))
}
