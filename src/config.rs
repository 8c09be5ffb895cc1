use crate::consts;
use crate::game::{Cell, Direction, Grid, Spawn};
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Board geometry, timing and the initial snake
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// What carries over from one snake to the next
    #[serde(default)]
    pub(crate) respawn: RespawnPolicy,

    /// Where and how much to log
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Host-supplied game settings, fixed for the life of the process
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    pub(crate) cell_pixel_width: u32,
    pub(crate) cell_pixel_height: u32,
    pub(crate) canvas_width: u32,
    pub(crate) canvas_height: u32,
    pub(crate) tick_interval_ms: u64,
    pub(crate) respawn_delay_ms: u64,
    pub(crate) initial_body_length: usize,
    pub(crate) initial_body_cell: Cell,
    pub(crate) initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            cell_pixel_width: consts::DEFAULT_CELL_PIXEL_WIDTH,
            cell_pixel_height: consts::DEFAULT_CELL_PIXEL_HEIGHT,
            canvas_width: consts::DEFAULT_CANVAS_WIDTH,
            canvas_height: consts::DEFAULT_CANVAS_HEIGHT,
            tick_interval_ms: consts::DEFAULT_TICK_INTERVAL_MS,
            respawn_delay_ms: consts::DEFAULT_RESPAWN_DELAY_MS,
            initial_body_length: consts::DEFAULT_INITIAL_BODY_LENGTH,
            initial_body_cell: consts::DEFAULT_INITIAL_BODY_CELL,
            initial_direction: consts::DEFAULT_INITIAL_DIRECTION,
        }
    }
}

impl GameConfig {
    /// Derive the board from the canvas and cell sizes.  Partial cells at the
    /// right and bottom edges of the canvas are dropped.
    pub(crate) fn grid(&self) -> Result<Grid, ConfigError> {
        if self.cell_pixel_width == 0 || self.cell_pixel_height == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let wide = self.canvas_width / self.cell_pixel_width;
        let high = self.canvas_height / self.cell_pixel_height;
        let (Ok(width), Ok(height)) = (u16::try_from(wide), u16::try_from(high)) else {
            return Err(ConfigError::GridTooLarge { wide, high });
        };
        Grid::new(width, height).ok_or(ConfigError::EmptyGrid {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            cell_width: self.cell_pixel_width,
            cell_height: self.cell_pixel_height,
        })
    }

    /// Return the template for new snakes on `grid`
    pub(crate) fn spawn(&self, grid: Grid) -> Result<Spawn, ConfigError> {
        if self.initial_body_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        let cell = self.initial_body_cell;
        if !grid.is_in_bounds(cell) {
            return Err(ConfigError::SpawnOutOfBounds { x: cell.x, y: cell.y });
        }
        Ok(Spawn {
            cell,
            length: self.initial_body_length,
            direction: self.initial_direction,
        })
    }

    pub(crate) fn timing(&self) -> Result<Timing, ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(Timing {
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            respawn_delay: Duration::from_millis(self.respawn_delay_ms),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Timing {
    /// Minimum time between two ticks
    pub(crate) tick_interval: Duration,

    /// Time between a death and the next snake
    pub(crate) respawn_delay: Duration,
}

/// Whether the score and the apple survive the death of a snake
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct RespawnPolicy {
    pub(crate) reset_score: bool,
    pub(crate) replace_apple: bool,
}

impl Default for RespawnPolicy {
    fn default() -> RespawnPolicy {
        RespawnPolicy {
            reset_score: true,
            replace_apple: false,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// Path of the log file; defaults to a file in the local data directory
    file: Option<PathBuf>,
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    /// Return the file to log to, or `None` if no path is configured and the
    /// default could not be computed
    pub(crate) fn path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("gridsnake").join("gridsnake.log"))
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("cell pixel width and height must be nonzero")]
    ZeroCellSize,
    #[error("a {canvas_width}x{canvas_height} canvas holds no whole {cell_width}x{cell_height} cells")]
    EmptyGrid {
        canvas_width: u32,
        canvas_height: u32,
        cell_width: u32,
        cell_height: u32,
    },
    #[error("a grid of {wide}x{high} cells is too large")]
    GridTooLarge { wide: u32, high: u32 },
    #[error("initial snake length must be at least 1")]
    ZeroLength,
    #[error("initial snake cell ({x}, {y}) is outside the board")]
    SpawnOutOfBounds { x: i32, y: i32 },
    #[error("tick interval must be nonzero")]
    ZeroTickInterval,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_file_is_default() {
        let config = toml::from_str::<Config>("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.game.grid().unwrap(), Grid::new(32, 24).unwrap());
        assert_eq!(
            config.game.timing().unwrap(),
            Timing {
                tick_interval: Duration::from_millis(50),
                respawn_delay: Duration::from_millis(2000),
            }
        );
        assert!(config.respawn.reset_score);
        assert!(!config.respawn.replace_apple);
        assert_eq!(config.log.level, LevelFilter::Info);
    }

    #[test]
    fn full_file() {
        let src = concat!(
            "[game]\n",
            "cell-pixel-width = 10\n",
            "cell-pixel-height = 16\n",
            "canvas-width = 205\n",
            "canvas-height = 100\n",
            "tick-interval-ms = 120\n",
            "respawn-delay-ms = 500\n",
            "initial-body-length = 3\n",
            "initial-body-cell = { x = 5, y = 1 }\n",
            "initial-direction = \"right\"\n",
            "\n",
            "[respawn]\n",
            "reset-score = false\n",
            "replace-apple = true\n",
            "\n",
            "[log]\n",
            "file = \"/tmp/snake.log\"\n",
            "level = \"debug\"\n",
        );
        let config = toml::from_str::<Config>(src).unwrap();
        let grid = config.game.grid().unwrap();
        assert_eq!(grid, Grid::new(20, 6).unwrap());
        assert_eq!(
            config.game.spawn(grid).unwrap(),
            Spawn {
                cell: Cell::new(5, 1),
                length: 3,
                direction: Direction::Right,
            }
        );
        assert_eq!(
            config.respawn,
            RespawnPolicy {
                reset_score: false,
                replace_apple: true,
            }
        );
        assert_eq!(config.log.path(), Some(PathBuf::from("/tmp/snake.log")));
        assert_eq!(config.log.level, LevelFilter::Debug);
    }

    #[test]
    fn bad_direction() {
        let r = toml::from_str::<Config>("[game]\ninitial-direction = \"sideways\"\n");
        assert!(r.is_err());
    }

    #[test]
    fn negative_size_is_rejected() {
        let r = toml::from_str::<Config>("[game]\ncanvas-width = -640\n");
        assert!(r.is_err());
    }

    #[rstest]
    #[case(0, 20, 640, 480)]
    #[case(20, 0, 640, 480)]
    fn zero_cell_size(
        #[case] cell_pixel_width: u32,
        #[case] cell_pixel_height: u32,
        #[case] canvas_width: u32,
        #[case] canvas_height: u32,
    ) {
        let game = GameConfig {
            cell_pixel_width,
            cell_pixel_height,
            canvas_width,
            canvas_height,
            ..GameConfig::default()
        };
        assert!(matches!(game.grid(), Err(ConfigError::ZeroCellSize)));
    }

    #[rstest]
    #[case(19, 480)]
    #[case(640, 19)]
    #[case(0, 0)]
    fn empty_grid(#[case] canvas_width: u32, #[case] canvas_height: u32) {
        let game = GameConfig {
            canvas_width,
            canvas_height,
            ..GameConfig::default()
        };
        assert!(matches!(game.grid(), Err(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn huge_grid() {
        let game = GameConfig {
            cell_pixel_width: 1,
            cell_pixel_height: 1,
            canvas_width: 70_000,
            ..GameConfig::default()
        };
        assert!(matches!(
            game.grid(),
            Err(ConfigError::GridTooLarge {
                wide: 70_000,
                high: 480
            })
        ));
    }

    #[test]
    fn partial_cells_are_truncated() {
        let game = GameConfig {
            canvas_width: 659,
            canvas_height: 481,
            ..GameConfig::default()
        };
        assert_eq!(game.grid().unwrap(), Grid::new(32, 24).unwrap());
    }

    #[rstest]
    #[case(0, Cell::new(2, 2), "ZeroLength")]
    #[case(4, Cell::new(4, 2), "SpawnOutOfBounds")]
    #[case(4, Cell::new(2, -1), "SpawnOutOfBounds")]
    fn bad_spawn(#[case] initial_body_length: usize, #[case] cell: Cell, #[case] kind: &str) {
        let game = GameConfig {
            initial_body_length,
            initial_body_cell: cell,
            ..GameConfig::default()
        };
        let grid = Grid::new(4, 4).unwrap();
        let e = game.spawn(grid).unwrap_err();
        assert!(format!("{e:?}").starts_with(kind), "unexpected error {e:?}");
    }

    #[test]
    fn zero_tick_interval() {
        let game = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(matches!(game.timing(), Err(ConfigError::ZeroTickInterval)));
    }

    #[test]
    fn load_missing_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[game]\ntick-interval-ms = 80\n").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.game.tick_interval_ms, 80);
        assert_eq!(config.game.canvas_width, 640);
    }

    #[test]
    fn load_invalid_file() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[game\n").unwrap();
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Parse(_))
        ));
    }
}
