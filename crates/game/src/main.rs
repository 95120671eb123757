// crates/game/src/main.rs
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use engine_core::{config, exit_code, Game, HeadlessPlatform, DEFAULT_CONFIG_PATH};
use engine_shared::GameOptions;
use game::StarterGame;
use tracing::{error, info, Level};

struct LaunchArgs {
    config: Option<PathBuf>,
    headless_frames: Option<u64>,
}

fn parse_args(args: &[String]) -> anyhow::Result<LaunchArgs> {
    let mut launch = LaunchArgs {
        config: None,
        headless_frames: None,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                launch.config = Some(PathBuf::from(path));
            }
            "--headless" => {
                let frames = iter.next().context("--headless needs a frame count")?;
                launch.headless_frames = Some(
                    frames
                        .parse()
                        .with_context(|| format!("invalid frame count '{frames}'"))?,
                );
            }
            other => bail!("unknown argument '{other}'"),
        }
    }
    Ok(launch)
}

/// Options from the project's `game.toml` (or `--config`), defaults otherwise.
fn load_options(explicit: Option<&Path>) -> anyhow::Result<GameOptions> {
    let path = match explicit {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Path::new(DEFAULT_CONFIG_PATH),
        None => return Ok(GameOptions::default()),
    };
    info!(path = %path.display(), "Loading options");
    Ok(config::load_options(path)?)
}

/// A project without a title in its config runs under the game's own name.
fn with_fallback_title(mut options: GameOptions) -> GameOptions {
    if options.title.trim().is_empty() {
        options.title = StarterGame::TITLE.to_string();
    }
    options
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(Level::INFO)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let launch = match parse_args(&args) {
        Ok(launch) => launch,
        Err(err) => {
            error!("{err:#}");
            return ExitCode::from(exit_code::MISUSE as u8);
        }
    };

    let options = match load_options(launch.config.as_deref()) {
        Ok(options) => with_fallback_title(options),
        Err(err) => {
            error!("{err:#}");
            return ExitCode::from(exit_code::CONFIGURATION as u8);
        }
    };

    let mut game = Game::with_options(StarterGame, options);

    let status = match launch.headless_frames {
        Some(frames) => game.run_on(&mut HeadlessPlatform::quit_after(frames)),
        None => game.run(),
    };
    ExitCode::from(status as u8)
}
