use dotenvy::dotenv;
use salesdesk::errors::Result;
use salesdesk::{config, core};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();

    // 3. Connect the store and create tables
    let db = config::database::create_connection().await?;
    config::database::create_tables(&db).await?;
    info!("store initialized at {}", config::database::database_url());

    // 4. Seed the demo dataset if the store is empty
    let seed = config::seed::load_default_config()?;
    config::seed::seed_demo_data(&db, &seed).await?;

    // 5. Log a dashboard summary
    let metrics = core::metrics::compute_metrics(&db, chrono::Utc::now()).await?;
    info!(
        total_revenue = metrics.total_revenue,
        monthly_revenue = metrics.monthly_revenue,
        total_leads = metrics.total_leads,
        conversion_rate = metrics.conversion_rate,
        average_deal_size = metrics.average_deal_size,
        "dashboard summary"
    );

    for stage in &metrics.sales_by_stage {
        info!(stage = ?stage.stage, count = stage.count, "pipeline stage");
    }

    for point in &metrics.monthly_trend {
        info!(
            month = %point.label,
            revenue = point.revenue,
            leads = point.leads,
            "monthly trend"
        );
    }

    for activity in core::activity::recent_activities(&db, 5).await? {
        info!(
            kind = ?activity.kind,
            customer = %activity.customer_name,
            description = %activity.description,
            "recent activity"
        );
    }

    Ok(())
}
