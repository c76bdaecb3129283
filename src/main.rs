//! Brick Breaker entry point
//!
//! Headless driver: loads settings, feeds autopilot input into the tick loop
//! and reports the outcome. Frames can be printed as ASCII art.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use brick_breaker::Settings;
use brick_breaker::platform::LogPlatform;
use brick_breaker::renderer::{
    BallShape, BrickShape, Canvas, HudShape, PaddleShape, PowerUpShape, paint, palette,
};
use brick_breaker::sim::{GameField, Rect, autopilot_target, tick};

#[derive(Parser, Debug)]
#[command(name = "brick-breaker")]
#[command(about = "Deterministic brick breaker simulation driven by an autopilot")]
struct Cli {
    /// Settings file (JSON); defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game with the autopilot holding the pointer
    Run {
        /// RNG seed; derived from the clock when omitted
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 10_000)]
        ticks: u64,
        /// Print an ASCII frame every N ticks (0 = never)
        #[arg(long, default_value_t = 0)]
        render_every: u64,
        /// Write the final field state as JSON
        #[arg(long)]
        dump_state: Option<PathBuf>,
        /// Pace ticks at the configured timer interval
        #[arg(long)]
        realtime: bool,
    },
    /// Write the default settings to a file
    InitConfig {
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            seed,
            ticks,
            render_every,
            dump_state,
            realtime,
        } => {
            let settings = load_settings(cli.config)?;
            let options = RunOptions {
                seed: seed.unwrap_or_else(clock_seed),
                ticks,
                render_every,
                dump_state,
                realtime,
            };
            run(settings, options)
        }
        Commands::InitConfig { output } => {
            if output.exists() {
                bail!("refusing to overwrite {}", output.display());
            }
            Settings::default()
                .save(&output)
                .with_context(|| format!("failed writing {}", output.display()))
        }
    }
}

fn load_settings(path: Option<PathBuf>) -> Result<Settings> {
    let settings = match path {
        Some(path) => Settings::load(&path)
            .with_context(|| format!("failed loading settings {}", path.display()))?,
        None => Settings::default(),
    };
    settings.validate().context("invalid settings")?;
    Ok(settings)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

struct RunOptions {
    seed: u64,
    ticks: u64,
    render_every: u64,
    dump_state: Option<PathBuf>,
    realtime: bool,
}

fn run(settings: Settings, options: RunOptions) -> Result<()> {
    let RunOptions {
        seed,
        ticks,
        render_every,
        dump_state,
        realtime,
    } = options;
    log::info!("Brick Breaker starting with seed {seed}");
    let interval = Duration::from_millis(settings.tick_interval_ms);
    let mut field = GameField::with_seed(settings, seed);
    let mut platform = LogPlatform::default();
    let mut best_score = 0;
    let mut best_level = field.level;

    for n in 1..=ticks {
        if let Some((x, y)) = autopilot_target(&field) {
            field.pointer_move(x, y);
        }
        if !field.is_running() {
            field.start();
        }

        tick(&mut field, &mut platform);
        if realtime {
            thread::sleep(interval);
        }

        best_score = best_score.max(field.score);
        best_level = best_level.max(field.level);

        if render_every > 0 && n % render_every == 0 {
            let mut canvas = AsciiCanvas::new(&field.settings);
            paint(&field, &mut canvas);
            println!("{}", canvas.frame());
        }
    }

    log::info!(
        "Finished {ticks} ticks: level {}, score {}, lives {}, {} sounds, {} messages",
        field.level,
        field.score,
        field.lives,
        platform.sounds_played,
        platform.messages.len()
    );
    println!(
        "seed={seed} ticks={ticks} level={} score={} best_score={best_score} \
         best_level={best_level}",
        field.level, field.score
    );

    if let Some(path) = dump_state {
        let json = serde_json::to_string_pretty(&field).context("failed encoding field state")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed writing {}", path.display()))?;
        log::info!("Field state written to {}", path.display());
    }

    Ok(())
}

/// Character-cell canvas for terminal output
struct AsciiCanvas {
    cell_width: i32,
    cell_height: i32,
    columns: usize,
    rows: usize,
    cells: Vec<char>,
    header: String,
}

impl AsciiCanvas {
    const CELL_WIDTH: i32 = 10;
    const CELL_HEIGHT: i32 = 20;

    fn new(settings: &Settings) -> Self {
        let columns = (settings.field_width / Self::CELL_WIDTH).max(1) as usize;
        let rows = (settings.field_height / Self::CELL_HEIGHT).max(1) as usize;
        Self {
            cell_width: Self::CELL_WIDTH,
            cell_height: Self::CELL_HEIGHT,
            columns,
            rows,
            cells: vec![' '; columns * rows],
            header: String::new(),
        }
    }

    fn put(&mut self, x: i32, y: i32, c: char) {
        if x < 0 || y < 0 {
            return;
        }
        let (col, row) = ((x / self.cell_width) as usize, (y / self.cell_height) as usize);
        if col < self.columns && row < self.rows {
            self.cells[row * self.columns + col] = c;
        }
    }

    fn fill(&mut self, rect: &Rect, c: char) {
        let mut y = rect.top();
        while y < rect.bottom() {
            let mut x = rect.left();
            while x < rect.right() {
                self.put(x, y, c);
                x += self.cell_width;
            }
            y += self.cell_height;
        }
    }

    fn frame(&self) -> String {
        let mut out = String::with_capacity(self.header.len() + (self.columns + 1) * self.rows);
        out.push_str(&self.header);
        out.push('\n');
        for row in self.cells.chunks(self.columns) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl Canvas for AsciiCanvas {
    fn draw_hud(&mut self, hud: &HudShape) {
        for border in &hud.borders {
            self.fill(border, '#');
        }
        self.header = format!("{}  {}", hud.status, hud.lives);
    }

    fn draw_brick(&mut self, brick: &BrickShape) {
        let c = if brick.indicator == palette::RED {
            '3'
        } else if brick.indicator == palette::ORANGE {
            '2'
        } else {
            '1'
        };
        self.fill(&brick.rect, c);
    }

    fn draw_paddle(&mut self, paddle: &PaddleShape) {
        self.fill(&paddle.rect, '=');
    }

    fn draw_power_up(&mut self, power_up: &PowerUpShape) {
        let c = power_up.label.chars().next().unwrap_or('?');
        self.fill(&power_up.rect, c);
    }

    fn draw_ball(&mut self, ball: &BallShape) {
        let c = if ball.color == palette::BLACK { 'x' } else { 'o' };
        self.put(ball.center.x as i32, ball.center.y as i32, c);
    }
}
