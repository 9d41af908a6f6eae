use anyhow::Context;
use clap::Parser;
use golf_ranking::config::cli::Command;
use golf_ranking::domain::ports::ConfigProvider;
use golf_ranking::utils::error::{ErrorSeverity, RankingError};
use golf_ranking::utils::{logger, validation::Validate};
use golf_ranking::{render, CliConfig, CsvRoundStore, RankingEngine, ScoreSubmission, Settings};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Effective settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let store = CsvRoundStore::new(settings.courses_path(), settings.scores_path());
    let engine = RankingEngine::new(store).with_seed(settings.seed());

    if let Err(e) = run(&engine, cli.command, &settings).await {
        let Some(ranking_error) = e.downcast_ref::<RankingError>() else {
            tracing::error!("❌ Command failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::error!(
            "❌ Command failed: {:#} (Category: {:?}, Severity: {:?})",
            e,
            ranking_error.category(),
            ranking_error.severity()
        );
        eprintln!("❌ {}", ranking_error.user_friendly_message());
        eprintln!("💡 建議: {}", ranking_error.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match ranking_error.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(
    engine: &RankingEngine<CsvRoundStore>,
    command: Command,
    settings: &Settings,
) -> anyhow::Result<()> {
    match command {
        Command::Rank { location, .. } => {
            let report = engine.rank(&location).await?;
            let rendered = render(&report, settings.output_format)?;

            match &settings.output_path {
                Some(path) => {
                    if let Some(parent) = std::path::Path::new(path).parent() {
                        if !parent.as_os_str().is_empty() {
                            tokio::fs::create_dir_all(parent).await.with_context(|| {
                                format!("failed to create output directory {}", parent.display())
                            })?;
                        }
                    }
                    tokio::fs::write(path, rendered)
                        .await
                        .with_context(|| format!("failed to write ranking to {}", path))?;
                    tracing::info!("📁 Ranking saved to: {}", path);
                    println!("✅ Ranking saved to: {}", path);
                }
                None => println!("{}", rendered),
            }
        }
        Command::Submit {
            location,
            player,
            scores,
            email,
        } => {
            let total: i64 = scores.iter().sum();
            engine
                .submit(ScoreSubmission {
                    player_name: player.clone(),
                    location: location.clone(),
                    scores,
                    email,
                })
                .await?;
            println!("✅ Recorded {} strokes for {} at {}", total, player, location);
        }
        Command::Courses => {
            let courses = engine.courses().await?;
            if courses.is_empty() {
                println!("No courses registered");
            }
            for course in courses {
                println!(
                    "{:<30} {:<20} par {}",
                    course.name,
                    course.location,
                    course.total_par()
                );
            }
        }
        Command::AddCourse {
            name,
            location,
            pars,
        } => {
            let course = engine.register_course(&name, &location, &pars).await?;
            println!(
                "✅ Registered {} at {} (total par {})",
                course.name,
                course.location,
                course.total_par()
            );
        }
    }

    Ok(())
}
