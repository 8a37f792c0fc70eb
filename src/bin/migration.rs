use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use catalog_api::{config, db, migrator::Migrator};

const USAGE: &str = "usage: migration [up|down [N]|status|fresh|refresh|reset]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_config()?;
    config::init_tracing(cfg.log_level(), cfg.log_json);

    // DATABASE_URL wins over the layered configuration
    let mut db_cfg = db::DbConfig::from(&cfg);
    if let Ok(url) = std::env::var("DATABASE_URL") {
        db_cfg.url = url;
    }
    db_cfg.max_connections = 1;
    db_cfg.min_connections = 1;

    let pool = db::establish_connection_with_config(&db_cfg).await?;

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "up".to_string());
    info!(command = %command, "Starting database migration");

    let result = match command.as_str() {
        "up" => Migrator::up(&pool, None).await,
        "down" => {
            let steps = match args.next() {
                Some(raw) => raw
                    .parse::<u32>()
                    .map_err(|_| anyhow::anyhow!("invalid step count `{raw}`\n{USAGE}"))?,
                None => 1,
            };
            Migrator::down(&pool, Some(steps)).await
        }
        "status" => Migrator::status(&pool).await,
        "fresh" => Migrator::fresh(&pool).await,
        "refresh" => Migrator::refresh(&pool).await,
        "reset" => Migrator::reset(&pool).await,
        other => anyhow::bail!("unknown command `{other}`\n{USAGE}"),
    };

    if let Err(e) = result {
        error!(command = %command, "Migration failed: {}", e);
        return Err(e.into());
    }

    info!(command = %command, "Migration completed successfully");
    db::close_pool(pool).await?;
    Ok(())
}
