use std::{
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use hoopgrid_evaluator::{AchievementRegistry, EligibilityResolver};
use hoopgrid_game::{Game, GeneratorConfig, GridGenerator, GridSeed};
use hoopgrid_league::{League, LeagueDocument};
use rand::Rng as _;
use tracing::info;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Reads a league document and builds its indices.
///
/// # Errors
///
/// Returns error if the file cannot be opened, is not valid JSON, or has no
/// `players` array.
pub fn read_league_file<P>(path: P) -> anyhow::Result<League>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open league file: {}", path.display()))?;
    let document = LeagueDocument::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to load league file: {}", path.display()))?;
    info!(
        players = document.players.len(),
        teams = document.teams.len(),
        path = %path.display(),
        "loaded league document"
    );
    Ok(League::new(document))
}

/// Grid generator flags shared by every subcommand that builds a grid.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GeneratorArg {
    /// Seed as 32 hex digits; a random seed is drawn when omitted
    #[arg(long)]
    seed: Option<GridSeed>,
    /// JSON file with a full generator config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Random attempts before the team-only fallback
    #[arg(long)]
    max_attempts: Option<usize>,
    /// Players a team needs to be usable
    #[arg(long)]
    min_team_players: Option<usize>,
    /// Players an achievement needs to be usable
    #[arg(long)]
    min_achievement_players: Option<usize>,
}

impl GeneratorArg {
    /// The config file (or defaults) with command-line overrides applied.
    pub(crate) fn config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => read_json_file("generator config", path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
        if let Some(min_team_players) = self.min_team_players {
            config.min_team_players = min_team_players;
        }
        if let Some(min_achievement_players) = self.min_achievement_players {
            config.min_achievement_players = min_achievement_players;
        }
        Ok(config)
    }

    pub(crate) fn seed(&self) -> GridSeed {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }

    pub(crate) fn generate(
        &self,
        league: &League,
        registry: &AchievementRegistry,
    ) -> anyhow::Result<Game> {
        let generator = GridGenerator::new(league, registry, self.config()?);
        let seed = self.seed();
        let game = generator
            .generate(seed)
            .with_context(|| format!("Failed to generate a grid from seed {seed}"))?;
        Ok(game)
    }
}

/// Where a subcommand gets its grid: a saved game, or a fresh one.
///
/// A saved game is re-resolved against the loaded league before use.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GameArg {
    /// Game JSON written by `generate`; a new grid is generated when omitted
    #[arg(long, conflicts_with = "seed")]
    game: Option<PathBuf>,
    #[clap(flatten)]
    generator: GeneratorArg,
}

impl GameArg {
    pub(crate) fn load(
        &self,
        league: &League,
        registry: &AchievementRegistry,
    ) -> anyhow::Result<Game> {
        match &self.game {
            Some(path) => {
                let game: Game = read_json_file("game", path)?;
                game.verify(&EligibilityResolver::new(league, registry))
                    .with_context(|| {
                        format!("Game file does not match the league: {}", path.display())
                    })?;
                Ok(game)
            }
            None => self.generator.generate(league, registry),
        }
    }
}
