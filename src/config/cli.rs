use crate::config::{Settings, TomlConfig};
use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "golf-ranking")]
#[command(about = "Golf tournament scoreboard with handicap-based rankings")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Courses CSV file (overrides the config file)
    #[arg(long, global = true)]
    pub courses_file: Option<String>,

    /// Scores CSV file (overrides the config file)
    #[arg(long, global = true)]
    pub scores_file: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute the handicap ranking for a course
    Rank {
        #[arg(short, long)]
        location: String,

        /// Fix the random source so exclusions are reproducible
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Record a player's 18-hole round
    Submit {
        #[arg(short, long)]
        location: String,

        #[arg(short, long)]
        player: String,

        /// 18 comma separated hole scores
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        scores: Vec<i64>,

        #[arg(long)]
        email: Option<String>,
    },

    /// List registered courses
    Courses,

    /// Register a course with its 18 par values
    AddCourse {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        location: String,

        /// 18 comma separated par values
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        pars: Vec<i64>,
    },
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Settings::from(&TomlConfig::from_file(path)?)
            }
            None => Settings::default(),
        };

        if let Some(courses) = &self.courses_file {
            settings.courses_path = courses.clone();
        }
        if let Some(scores) = &self.scores_file {
            settings.scores_path = scores.clone();
        }
        if self.json_logs {
            settings.json_logs = true;
        }

        if let Command::Rank {
            seed,
            format,
            output,
            ..
        } = &self.command
        {
            if seed.is_some() {
                settings.seed = *seed;
            }
            if let Some(format) = format {
                settings.output_format = *format;
            }
            if output.is_some() {
                settings.output_path = output.clone();
            }
        }

        Ok(settings)
    }
}
