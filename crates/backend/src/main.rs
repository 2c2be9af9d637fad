use backend::dashboards::d100_sales_performance::service as dashboard;
use backend::domain::a001_employee::{service as employees, EmployeeRoster};
use backend::shared;

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let (config, config_source) = shared::config::load_config()?;

    // Создаем директорию для логов
    let log_dir = std::path::Path::new(&config.logging.dir);
    std::fs::create_dir_all(log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    // stdout занят JSON-ответом, консольные логи идут в stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            config
                .logging
                .effective_filter(std::env::var("RUST_LOG").ok()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    tracing::info!("Loading config from: {}", config_source);

    let mut roster = EmployeeRoster::new();
    if config.roster.seed_sample {
        employees::insert_test_data(&mut roster);
    }
    for request in config.roster.extra {
        let name = request.name.clone();
        if let Err(e) = employees::create(&mut roster, request) {
            tracing::warn!("employee {:?} rejected: {}", name, e);
        }
    }

    let response = dashboard::build_dashboard(roster.list_all());
    tracing::info!("Сотрудников в расчёте: {}", roster.len());
    for (label, value) in dashboard::summary_lines(&response.stats) {
        tracing::info!("{}: {}", label, value);
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
