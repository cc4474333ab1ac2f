use criterion::{black_box, criterion_group, criterion_main, Criterion};
use service_alarms::existing::development;
use service_alarms::{
    compose, load_deployment_config_with_env, DeploymentConfig, Exposure, LocatorKind, MockEnvironment,
    ServiceDefinition,
};

fn composition_benchmark(c: &mut Criterion) {
    let config = DeploymentConfig::from_name(
        "demo",
        "some-branch",
        "https://pankbase-some-test-backend.demo.pankbase.org",
        vec![("test".to_string(), "tag".to_string())],
    )
    .unwrap();
    let existing = LocatorKind::Development.locator().resolve(&development::us_west_2()).unwrap();
    let service = ServiceDefinition::compose(&config, &existing, "Frontend", Exposure::LoadBalanced);

    c.bench_function("compose_fronted_service", |b| {
        b.iter(|| black_box(compose(black_box(&config), black_box(&existing), black_box(&service.handle))))
    });
}

fn config_loading_benchmark(c: &mut Criterion) {
    let env = MockEnvironment::new()
        .with_var("DEPLOYMENT_NAME", "demo")
        .with_var("BRANCH", "some-branch")
        .with_var("BACKEND_URL", "https://pankbase-some-test-backend.demo.pankbase.org")
        .with_var("TAGS", "test=tag,project=pankbase,owner=platform");

    c.bench_function("load_deployment_config_with_env", |b| {
        b.iter(|| black_box(load_deployment_config_with_env(black_box(&env))))
    });
}

fn locator_benchmark(c: &mut Criterion) {
    let locator = LocatorKind::Development.locator();
    let target = development::us_west_2();

    c.bench_function("resolve_development_resources", |b| {
        b.iter(|| black_box(locator.resolve(black_box(&target))))
    });
}

criterion_group!(benches, composition_benchmark, config_loading_benchmark, locator_benchmark);
criterion_main!(benches);
