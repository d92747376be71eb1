//! One-shot, idempotent database (re)initialization: runs the bundled
//! migrations, optionally dropping the schema first.

use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use std::env;

#[derive(Parser)]
#[command(name = "init-db", about = "Initialize the news-wire database schema")]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Drop existing tables before re-creating them
    #[arg(long)]
    drop: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .ok_or_else(|| {
            anyhow::anyhow!("DATABASE_URL must be set or passed with --database-url")
        })?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if cli.drop {
        println!("Dropping existing tables");
        sqlx::query("DROP TABLE IF EXISTS posts CASCADE")
            .execute(&pool)
            .await?;
        sqlx::query("DROP TABLE IF EXISTS users CASCADE")
            .execute(&pool)
            .await?;
        sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
            .execute(&pool)
            .await?;
    }

    println!("Running migrations");
    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("Database initialized");
    Ok(())
}
