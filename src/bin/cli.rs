//! Disare CLI
//!
//! Drives the mini app from a terminal against a running Disare API:
//! - Track mood, chat, and write journal entries
//! - Browse history and weekly stats
//! - Generate a config file
//!
//! The Telegram init data is taken from `--init-data` or `DISARE_INIT_DATA`.

use clap::{Parser, Subcommand, ValueEnum};
use disare::app::{MiniApp, MoodLevel, Sender};
use disare::client::{ApiClient, HttpTransport, JournalQuery};
use disare::config::{Config, LoadedConfig, LoggingConfig};
use disare::host::Host;
use disare::panel::Panel;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "disare")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the Disare mental health mini app")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Telegram WebApp init data
    #[arg(long, global = true)]
    pub init_data: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HistoryKind {
    Mood,
    Chat,
    Journal,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Track today's mood (1-5)
    Mood {
        level: u8,
        /// Optional comment
        #[arg(short, long, default_value = "")]
        comment: String,
    },

    /// Send a message to the assistant
    Chat {
        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Save a journal entry
    Journal {
        /// Local time, e.g. 2024-03-01T23:30
        #[arg(long)]
        sleep_start: Option<String>,
        /// Local time, e.g. 2024-03-02T07:10
        #[arg(long)]
        sleep_end: Option<String>,
        /// Nutrition notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Show recent entries
    History {
        #[arg(value_enum)]
        kind: HistoryKind,
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Show weekly mood and sleep stats
    Stats,

    /// Attach a phone number to the profile
    Phone { number: String },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Host backed by the terminal: alerts are printed, expand is a no-op
struct TerminalHost {
    init_data: Option<String>,
}

impl Host for TerminalHost {
    fn init_data(&self) -> Option<String> {
        self.init_data.clone()
    }

    fn show_alert(&self, message: &str) {
        println!("{}", message);
    }

    fn expand(&self) {}
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let config = disare::config::generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &config)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", config),
        }
        return Ok(());
    }

    let loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::discover(),
    };
    init_tracing(&loaded.config.logging);
    loaded.log();

    let mut config = loaded.config;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    let init_data = cli
        .init_data
        .clone()
        .or_else(|| std::env::var("DISARE_INIT_DATA").ok());
    let host = TerminalHost { init_data };
    let client = ApiClient::new(HttpTransport::new(&config.api)?);
    let app = MiniApp::new(client, host);

    let session = match app.bootstrap().await {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Cannot start session: {}", e);
            eprintln!("Pass Telegram init data with --init-data or DISARE_INIT_DATA.");
            std::process::exit(1);
        }
    };
    tracing::debug!("Signed in as {}", session.display_name());

    let ok = match cli.command {
        Commands::Mood { level, comment } => {
            let Some(level) = MoodLevel::new(level) else {
                eprintln!("Mood level must be between {} and {}", MoodLevel::MIN, MoodLevel::MAX);
                std::process::exit(1);
            };
            app.start();
            app.select_mood(level);
            app.set_mood_comment(comment);
            app.submit_mood().await.is_ok()
        }

        Commands::Chat { message } => {
            app.show_panel(Panel::Chat);
            app.set_chat_input(message.join(" "));
            let ok = app.send_chat().await.is_ok();
            for turn in app.chat_log() {
                let who = match turn.sender {
                    Sender::User => "you",
                    Sender::Responder => "disare",
                };
                println!("{:>7}: {}", who, turn.text);
            }
            ok
        }

        Commands::Journal {
            sleep_start,
            sleep_end,
            notes,
        } => {
            app.show_panel(Panel::Journal);
            app.set_sleep_start(sleep_start.unwrap_or_default());
            app.set_sleep_end(sleep_end.unwrap_or_default());
            app.set_nutrition_notes(notes);
            app.save_journal().await.is_ok()
        }

        Commands::History { kind, limit } => {
            let id = session.telegram_id;
            let client = app.client();
            let result = match kind {
                HistoryKind::Mood => client.mood_history(id, limit).await.map(|items| {
                    print_output(cli.format, &items, || {
                        println!("{:<28} {:<6} {}", "When", "Mood", "Comment");
                        println!("{}", "-".repeat(60));
                        for item in &items {
                            println!(
                                "{:<28} {:<6} {}",
                                item.created_at.as_deref().unwrap_or("-"),
                                item.mood_level,
                                item.comment.as_deref().unwrap_or("")
                            );
                        }
                    })
                }),
                HistoryKind::Chat => client.chat_history(id, limit).await.map(|items| {
                    print_output(cli.format, &items, || {
                        for item in &items {
                            println!("[{}]", item.timestamp.as_deref().unwrap_or("-"));
                            println!("    you: {}", item.message);
                            println!(" disare: {}", item.response);
                        }
                    })
                }),
                HistoryKind::Journal => {
                    let query = JournalQuery {
                        limit,
                        ..JournalQuery::default()
                    };
                    client.journal_entries(id, &query).await.map(|items| {
                        print_output(cli.format, &items, || {
                            println!("{:<28} {:<26} {:<26} {}", "When", "Sleep start", "Sleep end", "Notes");
                            println!("{}", "-".repeat(100));
                            for item in &items {
                                println!(
                                    "{:<28} {:<26} {:<26} {}",
                                    item.created_at.as_deref().unwrap_or("-"),
                                    item.sleep_start.as_deref().unwrap_or("-"),
                                    item.sleep_end.as_deref().unwrap_or("-"),
                                    item.nutrition_notes.as_deref().unwrap_or("")
                                );
                            }
                        })
                    })
                }
            };
            report(result)
        }

        Commands::Stats => {
            app.show_panel(Panel::Insights);
            match app.refresh_insights().await {
                Ok(insights) => {
                    print_output(cli.format, &insights, || {
                        let mood = &insights.mood;
                        let journal = &insights.journal;
                        println!("Last 7 days");
                        println!();
                        println!("Mood entries:     {}", mood.total_entries);
                        println!("Average mood:     {}", fmt_opt(mood.average_mood, ""));
                        println!(
                            "Sentiment:        {}",
                            insights
                                .average_sentiment()
                                .map(|s| s.label())
                                .unwrap_or("-")
                        );
                        println!("Journal entries:  {}", journal.total_entries);
                        println!("Average sleep:    {}", fmt_opt(journal.average_sleep_duration, "h"));
                    });
                    true
                }
                Err(_) => false,
            }
        }

        Commands::Phone { number } => {
            let result = app
                .client()
                .attach_phone(session.telegram_id, &number)
                .await
                .map(|ack| println!("{}", ack.message));
            report(result)
        }

        Commands::Config { .. } => true,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("disare={}", logging.level).into());
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// JSON dump or the table printer
fn print_output<T: serde::Serialize>(format: OutputFormat, data: &T, table: impl FnOnce()) {
    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(data) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to render JSON: {}", e),
        },
        OutputFormat::Table => table(),
    }
}

fn report<E: std::fmt::Display>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            eprintln!("Request failed: {}", e);
            false
        }
    }
}

fn fmt_opt(value: Option<f64>, unit: &str) -> String {
    value
        .map(|v| format!("{:.1}{}", v, unit))
        .unwrap_or_else(|| "-".to_string())
}
