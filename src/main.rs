use anyhow::{Context, Result};
use tracing::info;

use service_alarms::{
    build_alarm_document, compose_service_alarms, load_deployment_config, load_pipeline_config, AlarmReport,
    Exposure,
};

const FRONTEND_ID: &str = "Frontend";

fn main() -> Result<()> {
    init_tracing();
    let deployment = load_deployment_config().context("Invalid deployment configuration")?;
    let pipeline = load_pipeline_config().context("Invalid pipeline configuration")?;
    info!(
        "deployment = {} ({}), pipeline = {}, existing resources = {}",
        deployment.name(),
        deployment.branch(),
        pipeline.pipeline(),
        pipeline.existing_resources().name()
    );

    let frontend = compose_service_alarms(&deployment, &pipeline, FRONTEND_ID, Exposure::LoadBalanced)
        .context("Failed to compose frontend alarms")?;

    let mut report = AlarmReport::new(&deployment);
    report.add_composition(FRONTEND_ID, &frontend.composition);
    let summary = report.summary();
    info!(
        "Alarm summary: {} alarms across {} services (cpu {}, memory {}, edge {})",
        summary.total_alarms(),
        summary.service_count,
        summary.cpu_alarm_count,
        summary.memory_alarm_count,
        summary.edge_alarm_count
    );

    let document = build_alarm_document(&format!("{}Alarms", FRONTEND_ID), &frontend.composition)?;
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
