use std::sync::Arc;

use assert_matches::assert_matches;
use device_store::{InMemoryStorer, Storer};
use signature_device::{chain_anchor, SignatureAlgorithm};
use tracing::info;
use uuid::Uuid;

use super::{
    op_create_device, op_get_device, op_get_public_key, op_list_devices, op_sign, Logic, LogicOp,
};

fn test_logic() -> (Logic<Arc<InMemoryStorer>>, Arc<InMemoryStorer>) {
    let storer = Arc::new(InMemoryStorer::new());
    let logic = Logic {
        storer: Arc::clone(&storer),
    };
    (logic, storer)
}

fn create_request(id: Uuid, algorithm: &str) -> op_create_device::Request {
    op_create_device::Request {
        id: id.to_string(),
        label: Some("register 1".to_owned()),
        algorithm: algorithm.to_owned(),
    }
}

#[tokio::test]
#[tracing_test::traced_test]
async fn signing_flow() {
    let (logic, storer) = test_logic();
    let id = Uuid::new_v4();

    let created = logic.call(create_request(id, "ECDSA")).await.unwrap();
    assert_eq!(created.id, id);
    assert_eq!(created.label.as_deref(), Some("register 1"));
    assert_eq!(created.signature_algorithm, SignatureAlgorithm::Ecdsa);
    assert_eq!(created.signature_counter, 0);
    assert!(logs_contain("Created signature device"));

    info!("Signing the first transaction");
    let first = logic
        .call(op_sign::Request {
            id: id.to_string(),
            data: "first".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(first.signed_data, format!("0_first_{}", chain_anchor(id)));

    info!("Signing the second transaction");
    let second = logic
        .call(op_sign::Request {
            id: id.to_string(),
            data: "second".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(
        second.signed_data,
        format!("1_second_{}", first.signature)
    );

    let device = storer.read_one(id).await.unwrap().unwrap();
    assert!(device.verify(&first.signed_data, &first.signature));
    assert!(device.verify(&second.signed_data, &second.signature));

    let fetched = logic
        .call(op_get_device::Request { id: id.to_string() })
        .await
        .unwrap();
    assert_eq!(fetched.signature_counter, 2);
}

#[tokio::test]
async fn rsa_device_flow() {
    let (logic, storer) = test_logic();
    let id = Uuid::new_v4();

    let created = logic.call(create_request(id, "RSA")).await.unwrap();
    assert_eq!(created.signature_algorithm, SignatureAlgorithm::Rsa);

    let res = logic
        .call(op_get_public_key::Request { id: id.to_string() })
        .await
        .unwrap();
    assert_eq!(res.algorithm, SignatureAlgorithm::Rsa);
    assert!(res.public_key.starts_with("-----BEGIN PUBLIC KEY-----"));

    let signed = logic
        .call(op_sign::Request {
            id: id.to_string(),
            data: "rsa tx".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(signed.signed_data, format!("0_rsa tx_{}", chain_anchor(id)));

    let device = storer.read_one(id).await.unwrap().unwrap();
    assert!(device.verify(&signed.signed_data, &signed.signature));
    assert_eq!(device.signature_counter().await, 1);
}

#[tokio::test]
async fn create_rejects_invalid_input() {
    let (logic, storer) = test_logic();

    assert_matches!(
        logic.call(create_request(Uuid::new_v4(), "AES")).await,
        Err(op_create_device::Error::UnsupportedAlgorithm)
    );
    assert_matches!(
        logic.call(create_request(Uuid::new_v4(), "ecdsa")).await,
        Err(op_create_device::Error::UnsupportedAlgorithm)
    );
    assert_matches!(
        logic.call(create_request(Uuid::nil(), "ECDSA")).await,
        Err(op_create_device::Error::InvalidId)
    );
    assert_matches!(
        logic
            .call(op_create_device::Request {
                id: "not a uuid".to_owned(),
                label: None,
                algorithm: "ECDSA".to_owned(),
            })
            .await,
        Err(op_create_device::Error::InvalidId)
    );

    assert!(storer.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_duplicates() {
    let (logic, _) = test_logic();
    let id = Uuid::new_v4();

    logic.call(create_request(id, "ECDSA")).await.unwrap();
    logic
        .call(op_sign::Request {
            id: id.to_string(),
            data: "data".to_owned(),
        })
        .await
        .unwrap();

    assert_matches!(
        logic.call(create_request(id, "RSA")).await,
        Err(op_create_device::Error::DeviceAlreadyExists)
    );

    let device = logic
        .call(op_get_device::Request { id: id.to_string() })
        .await
        .unwrap();
    assert_eq!(device.signature_algorithm, SignatureAlgorithm::Ecdsa);
    assert_eq!(device.signature_counter, 1);
}

#[tokio::test]
async fn lists_devices() {
    let (logic, _) = test_logic();
    assert!(logic.call(op_list_devices::Request).await.unwrap().is_empty());

    let mut ids = vec![Uuid::new_v4(), Uuid::new_v4()];
    for id in &ids {
        logic.call(create_request(*id, "ECDSA")).await.unwrap();
    }
    ids.sort();

    let listed: Vec<_> = logic
        .call(op_list_devices::Request)
        .await
        .unwrap()
        .into_iter()
        .map(|device| device.id)
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn unknown_devices() {
    let (logic, _) = test_logic();
    let id = Uuid::new_v4().to_string();

    assert_matches!(
        logic
            .call(op_sign::Request {
                id: id.clone(),
                data: "data".to_owned(),
            })
            .await,
        Err(op_sign::Error::DeviceNotFound)
    );
    assert_matches!(
        logic.call(op_get_device::Request { id: id.clone() }).await,
        Err(op_get_device::Error::DeviceNotFound)
    );
    assert_matches!(
        logic.call(op_get_public_key::Request { id }).await,
        Err(op_get_public_key::Error::DeviceNotFound)
    );
    assert_matches!(
        logic
            .call(op_sign::Request {
                id: "bogus".to_owned(),
                data: "data".to_owned(),
            })
            .await,
        Err(op_sign::Error::InvalidId)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_signing_through_the_logic() {
    let (logic, _) = test_logic();
    let logic = Arc::new(logic);
    let id = Uuid::new_v4();
    logic.call(create_request(id, "ECDSA")).await.unwrap();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let logic = Arc::clone(&logic);
            tokio::spawn(async move {
                logic
                    .call(op_sign::Request {
                        id: id.to_string(),
                        data: format!("tx{i}"),
                    })
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut counters = Vec::new();
    for handle in handles {
        let res = handle.await.unwrap();
        let (counter, _) = res.signed_data.split_once('_').unwrap();
        counters.push(counter.parse::<u64>().unwrap());
    }
    counters.sort_unstable();
    assert_eq!(counters, (0..16).collect::<Vec<_>>());

    let device = logic
        .call(op_get_device::Request { id: id.to_string() })
        .await
        .unwrap();
    assert_eq!(device.signature_counter, 16);
}
