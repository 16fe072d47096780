use anyhow::Context;
use clap::Parser;
use discovery_manage::cli::{Cli, Command};
use discovery_manage::commands::migrate_url_slugs;
use discovery_manage::config::ManageConfig;
use discovery_manage::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.log_json);

    match cli.command {
        Command::MigrateUrlSlugs(args) => {
            // Validate arguments before touching the database.
            let uuids = migrate_url_slugs::parse_course_uuids(&args.courses)?;

            let config = ManageConfig::from_env(cli.database_url.as_deref())?;
            let pool = discovery_db::create_pool(&config.database_url, config.max_connections)
                .await
                .context("Failed to connect to database")?;

            tracing::info!(
                courses = uuids.len(),
                dry_run = args.dry_run,
                "Migrating course url slugs"
            );
            let report = migrate_url_slugs::run(&pool, &uuids, args.dry_run).await?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary());
            }
        }
    }

    Ok(())
}
