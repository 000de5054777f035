//! Behavioral tests for the SdkFactory façade.

use std::sync::Arc;

use matchkit_api::{ConfigApi, EngineApi};
use matchkit_factory::{FactoryConfig, SdkFactory};
use matchkit_grpc::{GrpcConfig, GrpcEngine};
use matchkit_local::{LocalConfig, LocalEngine};

fn local_config() -> FactoryConfig {
    FactoryConfig {
        module_name: "factory-tests".to_string(),
        engine_config_json: "{}".to_string(),
        ..Default::default()
    }
}

fn remote_config(address: &str) -> FactoryConfig {
    FactoryConfig {
        grpc_address: address.to_string(),
        ..local_config()
    }
}

#[tokio::test]
async fn racing_accessors_construct_one_client() {
    let factory = Arc::new(SdkFactory::new(local_config()));

    let mut handles = Vec::new();
    for _ in 0..16 {
        let factory = Arc::clone(&factory);
        handles.push(tokio::spawn(async move { factory.engine().await.unwrap() }));
    }

    let mut engines = Vec::new();
    for handle in handles {
        engines.push(handle.await.unwrap());
    }

    for engine in &engines[1..] {
        assert!(Arc::ptr_eq(&engines[0], engine));
    }
}

#[tokio::test]
async fn repeated_calls_return_the_cached_client() {
    let factory = SdkFactory::new(local_config());
    let first = factory.product().await.unwrap();
    let second = factory.product().await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn remote_kinds_share_a_single_dial() {
    let factory = SdkFactory::new(remote_config("localhost:8258"));

    factory.config().await.unwrap();
    factory.engine().await.unwrap();
    factory.diagnostic().await.unwrap();

    assert_eq!(factory.dial_count(), 1);
}

#[tokio::test]
async fn local_factory_never_dials() {
    let factory = SdkFactory::new(local_config());

    factory.config().await.unwrap();
    factory.config_manager().await.unwrap();
    factory.diagnostic().await.unwrap();
    factory.engine().await.unwrap();
    factory.product().await.unwrap();

    assert_eq!(factory.dial_count(), 0);
}

#[tokio::test]
async fn instances_are_isolated() {
    let local = SdkFactory::new(local_config());
    let remote = SdkFactory::new(remote_config("localhost:8258"));

    // Instance A: in-process variants, no channel.
    let local_config_client = local.config().await.unwrap();
    let local_engine = local.engine().await.unwrap();
    assert!(local_config_client.as_any().is::<LocalConfig>());
    assert!(local_engine.as_any().is::<LocalEngine>());
    assert_eq!(local.dial_count(), 0);

    // Instance B: remote variants, one shared dial.
    let remote_config_client = remote.config().await.unwrap();
    let remote_engine = remote.engine().await.unwrap();
    assert!(remote_config_client.as_any().is::<GrpcConfig>());
    assert!(remote_engine.as_any().is::<GrpcEngine>());
    assert_eq!(remote.dial_count(), 1);

    // No handle leaked across instances.
    assert!(!Arc::ptr_eq(&local_engine, &remote_engine));
    assert_eq!(local.dial_count(), 0);
}

#[tokio::test]
async fn unreachable_endpoint_defers_the_failure_to_first_use() {
    // Nothing listens on port 1; the dial fails and is logged, but the
    // accessor still returns a usable-shaped handle.
    let factory = SdkFactory::new(remote_config("127.0.0.1:1"));

    let engine = factory.engine().await.unwrap();
    assert_eq!(factory.dial_count(), 1);

    // The broken channel surfaces on the first real call.
    assert!(engine.purge_repository().await.is_err());

    // Still no second dial afterwards.
    let _ = factory.product().await.unwrap();
    assert_eq!(factory.dial_count(), 1);
}

#[tokio::test]
async fn malformed_address_fails_the_accessor() {
    let factory = SdkFactory::new(remote_config("not a valid address"));
    assert!(factory.engine().await.is_err());
}
