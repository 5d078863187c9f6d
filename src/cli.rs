use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use time::Date;

use yanews_application::prelude as flows;
use yanews_core::{entities::parse_date, usecases::NewNews};
use yanews_db_sqlite::{self as sqlite, Connections};
use yanews_webserver::Cfg;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "yanews", version, about = "A small news site with comments")]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web server
    Serve,
    /// Publish a news item
    AddNews {
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
        /// Publication date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
    },
}

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let cfg = Config::try_load_from_file_or_default(args.config_file.as_ref())?;

    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            if cfg.webserver.enable_cors {
                log::info!("CORS is enabled");
            }
            let web_cfg = Cfg {
                news_count_on_home_page: cfg.news.count_on_home_page,
            };
            yanews_webserver::run(connections, cfg.webserver.enable_cors, web_cfg).await;
        }
        Command::AddNews { title, text, date } => {
            let news = flows::create_news(&connections, NewNews { title, text, date })?;
            log::info!("Published news {} ({})", news.id, news.date);
            println!("{}", news.id);
        }
    }
    Ok(())
}
