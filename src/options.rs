use anyhow::{Context, Result, bail};
use std::time::Duration;
use trace_core::TraceConfig;

pub const USAGE: &str = "Usage: overlay-trace [--max-entries N] [--scale S] [--heartbeat-ms N]";

#[derive(Debug, Default)]
pub struct LaunchOptions {
    pub config: TraceConfig,
    pub heartbeat: Option<Duration>,
}

impl LaunchOptions {
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = LaunchOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            let mut value = || -> Result<String> {
                args.next()
                    .map(|v| v.as_ref().to_owned())
                    .with_context(|| format!("missing value for {arg}"))
            };

            match arg {
                "--max-entries" => {
                    let raw = value()?;
                    let limit: usize = raw
                        .parse()
                        .with_context(|| format!("invalid --max-entries value '{raw}'"))?;
                    options.config.max_entries = Some(limit);
                }
                "--scale" => {
                    let raw = value()?;
                    let scale: f64 = raw
                        .parse()
                        .with_context(|| format!("invalid --scale value '{raw}'"))?;
                    options.config.scale_x = scale;
                    options.config.scale_y = scale;
                }
                "--heartbeat-ms" => {
                    let raw = value()?;
                    let ms: u64 = raw
                        .parse()
                        .with_context(|| format!("invalid --heartbeat-ms value '{raw}'"))?;
                    if ms == 0 {
                        bail!("--heartbeat-ms must be greater than zero");
                    }
                    options.heartbeat = Some(Duration::from_millis(ms));
                }
                other => bail!("unknown argument '{other}'\n{USAGE}"),
            }
        }

        options.config.validate()?;
        Ok(options)
    }
}
