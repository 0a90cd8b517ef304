//! End-to-end tests of one bootstrap pass through the library.

use std::cell::Cell;
use std::time::Duration;

use app_bootstrap::calculator::SampleCalculation;
use app_bootstrap::config::{load_config_from_process, ConfigError};
use app_bootstrap::error::ProcessingError;
use app_bootstrap::input::InputError;
use app_bootstrap::lifecycle::{startup, LifecycleCoordinator, ShutdownOutcome, ShutdownState};
use app_bootstrap::{AppError, ApplicationInput, ValidatedConfig};
use serial_test::serial;

mod common;

#[test]
fn test_successful_run_signals_completion() {
    let coordinator = LifecycleCoordinator::new();
    let input = startup::run(&coordinator, &common::valid_env(), &[common::SAMPLE_INPUT], SampleCalculation).unwrap();

    assert_eq!(input.example_string_field.as_deref(), Some("hello"));
    assert_eq!(input.example_list_field, vec!["a", "b"]);
    assert_eq!(coordinator.state(), ShutdownState::Completed);
}

#[test]
fn test_config_failure_still_signals_completion() {
    let coordinator = LifecycleCoordinator::new();
    let err = startup::run(
        &coordinator,
        &common::env_with("REGION", None),
        &[common::SAMPLE_INPUT],
        SampleCalculation,
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Config(ConfigError::Invalid(_))));
    assert!(err.to_string().contains("Required environment variable 'REGION' is not set"));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(coordinator.state(), ShutdownState::Completed);
}

#[test]
fn test_input_failure_still_signals_completion() {
    let coordinator = LifecycleCoordinator::new();
    let args: [&str; 0] = [];
    let err = startup::run(&coordinator, &common::valid_env(), &args, SampleCalculation).unwrap_err();

    assert!(matches!(err, AppError::Input(InputError::Missing)));
    assert_eq!(coordinator.state(), ShutdownState::Completed);
}

#[test]
fn test_config_checked_before_input() {
    let coordinator = LifecycleCoordinator::new();
    let err = startup::run(&coordinator, &common::env_with("EXAMPLE_INT_VAR", Some("3.14")), &["{"], SampleCalculation)
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("must be a valid integer, got: 3.14"), "{message}");
}

#[test]
fn test_processor_not_run_on_config_failure() {
    let called = Cell::new(false);
    let coordinator = LifecycleCoordinator::new();
    let processor = |_: &ValidatedConfig, _: &ApplicationInput| -> Result<(), ProcessingError> {
        called.set(true);
        Ok(())
    };

    let result = startup::run(&coordinator, &common::env_with("STAGE", Some("  ")), &[common::SAMPLE_INPUT], processor);
    assert!(result.is_err());
    assert!(!called.get());
}

#[test]
fn test_second_argument_ignored() {
    let coordinator = LifecycleCoordinator::new();
    let first = common::valid_input("first", 1, true, "2024-01-01T00:00:00Z", &["a"]);
    let second = common::valid_input("second", 2, false, "2025-01-01T00:00:00Z", &["b"]);

    let input = startup::run(&coordinator, &common::valid_env(), &[first, second], SampleCalculation).unwrap();
    assert_eq!(input.example_string_field.as_deref(), Some("first"));
    assert!(input.example_boolean_field);
}

#[tokio::test]
async fn test_waiting_handler_released_by_run() {
    let coordinator = LifecycleCoordinator::with_grace_period(Duration::from_secs(5));
    let handler = tokio::spawn({
        let coordinator = coordinator.clone();
        async move { coordinator.handle_termination().await }
    });
    while !coordinator.is_termination_requested() {
        tokio::task::yield_now().await;
    }

    let coordinator_main = coordinator.clone();
    let run = tokio::task::spawn_blocking(move || {
        assert!(coordinator_main.is_termination_requested());
        startup::run(&coordinator_main, &common::valid_env(), &[common::SAMPLE_INPUT], SampleCalculation).is_ok()
    });

    assert!(run.await.unwrap());
    assert_eq!(handler.await.unwrap().unwrap(), ShutdownOutcome::Completed);
}

#[test]
#[serial]
fn test_load_from_process_environment() {
    for (key, value) in common::valid_env_pairs() {
        std::env::set_var(key, value);
    }
    std::env::set_var("EXAMPLE_INT_VAR", "-5");

    let config = load_config_from_process().unwrap();
    assert_eq!(config.stage, "unit");
    assert_eq!(config.example_int_var, -5);

    std::env::remove_var("EXAMPLE_BOOLEAN_VAR");
    let err = load_config_from_process().unwrap_err();
    assert!(err.to_string().contains("EXAMPLE_BOOLEAN_VAR"));

    for (key, _) in common::valid_env_pairs() {
        std::env::remove_var(key);
    }
}
