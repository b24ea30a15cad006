//! Command-line configuration
//!
//! [`Args`] is the raw clap surface; [`Args::into_config`] validates it into
//! a [`Config`] before anything touches the terminal.

use crate::engine::{SessionOptions, SizeBounds, SortSession};
use crate::errors::ConfigurationError;
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::registry::{Registry, DEFAULT_STATE_CAPACITY};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Fastest autoplay delay reachable with the speed keys
pub const MIN_DELAY: Duration = Duration::from_millis(1);

/// Slowest autoplay delay reachable with the speed keys
pub const MAX_DELAY: Duration = Duration::from_millis(2000);

#[derive(Parser, Debug, Clone)]
#[command(name = "sortty")]
#[command(about = "Step through sorting algorithms on a terminal bar chart")]
pub struct Args {
    /// Initial array length
    #[arg(long, default_value_t = 10)]
    pub size: usize,

    /// Smallest array length reachable by resizing
    #[arg(long, default_value_t = 2)]
    pub min_size: usize,

    /// Largest array length reachable by resizing
    #[arg(long, default_value_t = 64)]
    pub max_size: usize,

    /// Initial algorithm, by display name (e.g. "Merge Sort")
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Autoplay delay between step batches, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Steps performed each time the autoplay delay elapses
    #[arg(long, default_value_t = 1)]
    pub steps_per_tick: usize,

    /// Seed for reproducible shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// State slots available to each algorithm
    #[arg(long, default_value_t = DEFAULT_STATE_CAPACITY)]
    pub state_capacity: usize,

    /// Snapshots kept for stepping backward
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub history_limit: usize,

    /// Write tracing output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start playing immediately instead of paused
    #[arg(long)]
    pub autoplay: bool,
}

/// Autoplay timing used by the UI loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    pub delay: Duration,
    pub steps_per_tick: usize,
}

impl Playback {
    /// Halve the delay, down to [`MIN_DELAY`]
    pub fn faster(&mut self) {
        self.delay = (self.delay / 2).max(MIN_DELAY);
    }

    /// Double the delay, up to [`MAX_DELAY`]
    pub fn slower(&mut self) {
        self.delay = (self.delay * 2).min(MAX_DELAY);
    }
}

impl Default for Playback {
    fn default() -> Self {
        Playback {
            delay: Duration::from_millis(100),
            steps_per_tick: 1,
        }
    }
}

/// Validated startup configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub session: SessionOptions,
    pub algorithm: Option<String>,
    pub playback: Playback,
    pub state_capacity: usize,
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn into_config(self) -> Result<Config, ConfigurationError> {
        let bounds = SizeBounds {
            min: self.min_size,
            max: self.max_size,
        };
        if !bounds.is_valid() || !bounds.contains(self.size) {
            return Err(ConfigurationError::InvalidSizeBounds {
                size: self.size,
                min: self.min_size,
                max: self.max_size,
            });
        }
        if self.steps_per_tick == 0 {
            return Err(ConfigurationError::InvalidStepsPerTick);
        }

        Ok(Config {
            session: SessionOptions {
                size: self.size,
                bounds,
                algorithm_index: 0,
                seed: self.seed,
                paused: !self.autoplay,
                history_limit: self.history_limit,
            },
            algorithm: self.algorithm,
            playback: Playback {
                delay: Duration::from_millis(self.delay_ms).clamp(MIN_DELAY, MAX_DELAY),
                steps_per_tick: self.steps_per_tick,
            },
            state_capacity: self.state_capacity,
            log_file: self.log_file,
        })
    }
}

impl Config {
    /// Register every algorithm and build the session this config describes.
    pub fn build_session(&self) -> Result<SortSession, ConfigurationError> {
        let mut registry = Registry::new(self.state_capacity);
        registry.register_all()?;

        let mut options = self.session.clone();
        if let Some(name) = &self.algorithm {
            options.algorithm_index =
                registry
                    .index_of(name)
                    .map_err(|_| ConfigurationError::UnknownAlgorithm {
                        name: name.clone(),
                    })?;
        }
        SortSession::new(registry, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sortty").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).into_config().unwrap();

        assert_eq!(config.session.size, 10);
        assert_eq!(config.session.bounds, SizeBounds { min: 2, max: 64 });
        assert!(config.session.paused);
        assert_eq!(config.playback, Playback::default());
        assert_eq!(config.state_capacity, 17);
    }

    #[test]
    fn test_size_outside_bounds_rejected() {
        let err = parse(&["--size", "5", "--min-size", "6"])
            .into_config()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidSizeBounds {
                size: 5,
                min: 6,
                max: 64
            }
        );
    }

    #[test]
    fn test_max_size_beyond_value_range_rejected() {
        let too_big = (i32::MAX as u64 + 1).to_string();
        let err = parse(&["--max-size", &too_big]).into_config().unwrap_err();

        assert!(matches!(err, ConfigurationError::InvalidSizeBounds { min: 2, .. }));
    }

    #[test]
    fn test_zero_steps_per_tick_rejected() {
        let err = parse(&["--steps-per-tick", "0"]).into_config().unwrap_err();
        assert_eq!(err, ConfigurationError::InvalidStepsPerTick);
    }

    #[test]
    fn test_named_algorithm_selected() {
        let config = parse(&["--algorithm", "Merge Sort", "--seed", "3"])
            .into_config()
            .unwrap();
        let session = config.build_session().unwrap();

        assert_eq!(session.algorithm_name(), "Merge Sort");
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let config = parse(&["--algorithm", "Bogo Sort"]).into_config().unwrap();
        let err = config.build_session().unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::UnknownAlgorithm {
                name: "Bogo Sort".to_string()
            }
        );
    }

    #[test]
    fn test_small_state_capacity_is_fatal() {
        let config = parse(&["--state-capacity", "4"]).into_config().unwrap();
        let err = config.build_session().unwrap_err();

        assert!(matches!(
            err,
            ConfigurationError::StateCapacityExceeded { ref name, .. } if name == "Merge Sort"
        ));
    }

    #[test]
    fn test_playback_speed_clamps() {
        let mut playback = Playback {
            delay: Duration::from_millis(3),
            steps_per_tick: 1,
        };
        playback.faster();
        playback.faster();
        playback.faster();
        assert_eq!(playback.delay, MIN_DELAY);

        playback.delay = Duration::from_millis(1500);
        playback.slower();
        assert_eq!(playback.delay, MAX_DELAY);
    }
}
