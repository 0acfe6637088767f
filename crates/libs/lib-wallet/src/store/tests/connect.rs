use super::*;

#[tokio::test]
async fn test_connect_success() {
    let provider = MockProvider::new();
    let storage = Rc::new(MemoryStorage::new());
    let store = test_store(Some(provider.clone()), storage.clone());

    let account = store.connect().await.unwrap();

    assert_eq!(account.as_deref(), Some(ACCOUNT_A));
    assert_eq!(store.state(), connected_state(ACCOUNT_A));
    assert_eq!(consent_value(&storage).as_deref(), Some("true"));
    assert_eq!(provider.request_calls.get(), 1);
}

#[tokio::test]
async fn test_connect_keeps_provider_casing() {
    let provider = MockProvider::new();
    provider.set_request_reply(Ok(vec!["0xAA11".to_string(), "0xbb22".to_string()]));
    let store = test_store(Some(provider), Rc::new(MemoryStorage::new()));

    store.connect().await.unwrap();

    assert_eq!(store.state().account.as_deref(), Some("0xAA11"));
}

#[tokio::test]
async fn test_connect_without_provider() {
    let storage = Rc::new(MemoryStorage::new());
    let store = test_store(None, storage.clone());

    let result = store.connect().await;

    assert!(matches!(result, Err(WalletError::ProviderMissing)));
    let state = store.state();
    assert!(!state.is_connected);
    assert!(!state.loading);
    assert_eq!(
        state.error.as_deref(),
        Some("MetaMask is not installed. Please install it to connect.")
    );
    assert_eq!(consent_value(&storage), None);
}

#[tokio::test]
async fn test_connect_rejected_by_user() {
    let provider = MockProvider::new();
    provider.set_request_reply(Err(rejected()));
    let storage = Rc::new(MemoryStorage::new());
    let store = test_store(Some(provider), storage.clone());

    let result = store.connect().await;

    assert!(matches!(result, Err(WalletError::UserRejected)));
    let state = store.state();
    assert_eq!(state.error.as_deref(), Some("You rejected the wallet connection request."));
    assert!(!state.is_connected);
    assert!(!state.loading);
    assert_eq!(state.status(), crate::ConnectionStatus::Error);
    assert_eq!(consent_value(&storage), None);
}

#[tokio::test]
async fn test_connect_provider_error_passes_message() {
    let provider = MockProvider::new();
    provider.set_request_reply(Err(ProviderRpcError::new(
        Some(-32002),
        "Already processing eth_requestAccounts. Please wait.",
    )));
    let store = test_store(Some(provider), Rc::new(MemoryStorage::new()));

    let result = store.connect().await;

    assert!(matches!(result, Err(WalletError::Provider { code: Some(-32002), .. })));
    assert_eq!(
        store.state().error.as_deref(),
        Some("Already processing eth_requestAccounts. Please wait.")
    );
}

#[tokio::test]
async fn test_connect_error_without_message() {
    let provider = MockProvider::new();
    provider.set_request_reply(Err(ProviderRpcError::new(None, "")));
    let store = test_store(Some(provider), Rc::new(MemoryStorage::new()));

    assert!(store.connect().await.is_err());
    assert_eq!(store.state().error.as_deref(), Some("Failed to connect wallet"));
}

#[tokio::test]
async fn test_connect_with_no_accounts_granted() {
    let provider = MockProvider::new();
    provider.set_request_reply(Ok(vec![]));
    let storage = Rc::new(MemoryStorage::new());
    let store = test_store(Some(provider), storage.clone());

    let account = store.connect().await.unwrap();

    assert_eq!(account, None);
    assert_eq!(store.state(), ConnectionState::default());
    assert_eq!(consent_value(&storage), None);
}

#[tokio::test]
async fn test_retry_clears_previous_error() {
    let provider = MockProvider::new();
    provider.set_request_reply(Err(rejected()));
    let store = test_store(Some(provider.clone()), Rc::new(MemoryStorage::new()));

    let _ = store.connect().await;
    assert!(store.state().error.is_some());

    provider.set_request_reply(Ok(vec![ACCOUNT_B.to_string()]));
    store.connect().await.unwrap();

    assert_eq!(store.state(), connected_state(ACCOUNT_B));
}

#[tokio::test]
async fn test_overlapping_connects_prompt_once() {
    let provider = MockProvider::new();
    provider.suspend_requests();
    let store = test_store(Some(provider.clone()), Rc::new(MemoryStorage::new()));

    let (first, second, loading_while_pending) = tokio::join!(
        store.connect(),
        store.connect(),
        async { store.state().loading }
    );

    assert_eq!(first.unwrap().as_deref(), Some(ACCOUNT_A));
    assert_eq!(second.unwrap(), None);
    assert!(loading_while_pending);
    assert_eq!(provider.request_calls.get(), 1);
    assert_eq!(store.state(), connected_state(ACCOUNT_A));
}

#[tokio::test]
async fn test_cancelled_connect_allows_retry() {
    let provider = MockProvider::new();
    provider.suspend_requests();
    let store = test_store(Some(provider.clone()), Rc::new(MemoryStorage::new()));

    tokio::select! {
        biased;
        _ = store.connect() => panic!("connect finished before the wallet prompt resolved"),
        _ = async {} => {}
    }

    assert!(!store.state().loading);
    assert!(!store.state().is_connected);

    let account = store.connect().await.unwrap();

    assert_eq!(account.as_deref(), Some(ACCOUNT_A));
    assert_eq!(provider.request_calls.get(), 2);
    assert_eq!(store.state(), connected_state(ACCOUNT_A));
}

#[tokio::test]
async fn test_connect_survives_storage_failure() {
    let provider = MockProvider::new();
    let store = ConnectionStore::new(Some(provider), ReadOnlyStorage, WalletConfig::default()).unwrap();

    let account = store.connect().await.unwrap();

    assert_eq!(account.as_deref(), Some(ACCOUNT_A));
    assert!(store.state().is_connected);
    assert!(!store.consent_granted());
}

#[tokio::test]
async fn test_subscribers_see_connection() {
    let provider = MockProvider::new();
    let store = test_store(Some(provider), Rc::new(MemoryStorage::new()));
    let mut receiver = store.subscribe();

    store.connect().await.unwrap();

    assert!(receiver.has_changed().unwrap());
    let state = receiver.borrow_and_update().clone();
    assert_eq!(state, connected_state(ACCOUNT_A));
    assert_eq!(state.display_address(), "0xaa00...0001");
}
