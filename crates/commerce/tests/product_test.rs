//! Product slice tests: the create command and the paginated listing,
//! exercised end-to-end through the in-memory store.

use commerce::di::DependenciesInject;
use commerce::domain::requests::{CreateProductRequest, SearchProducts};
use commerce::model::Category;
use commerce::repository::{InMemoryStore, MemoryUnitOfWork};
use shared::config::AppConfig;
use shared::errors::ServiceError;
use shared::localization::StaticLocalizer;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

async fn setup() -> (Arc<InMemoryStore>, DependenciesInject) {
    let store = InMemoryStore::new();
    let uow = Arc::new(MemoryUnitOfWork::new(store.clone()));
    let localizer = Arc::new(StaticLocalizer::default());
    let di = DependenciesInject::new(uow, localizer, AppConfig::default());
    (store, di)
}

async fn seed_default_category(store: &InMemoryStore) {
    store
        .seed_category(Category {
            category_id: 1,
            name: "Electronics".to_string(),
        })
        .await;
}

fn create_request(name: &str) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        price: 49999,
        stock: 10,
        category_id: 1,
    }
}

fn search(page: i32, page_size: i32, search: &str) -> SearchProducts {
    SearchProducts {
        page,
        page_size,
        search: search.to_string(),
    }
}

#[tokio::test]
async fn create_product_returns_success_envelope() {
    let (store, di) = setup().await;
    seed_default_category(&store).await;
    let cancel = CancellationToken::new();

    let envelope = di
        .product_command
        .create_product(&create_request("Smartphone"), &cancel)
        .await
        .unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.code, "create_success");
    assert!(envelope.errors.is_empty());

    let created = envelope.data.expect("created product payload");
    assert_eq!(created.name, "Smartphone");

    let fetched = di.product_query.find_by_id(created.id).await.unwrap();
    assert!(fetched.success);
    assert_eq!(fetched.data.unwrap().name, "Smartphone");
}

#[tokio::test]
async fn invalid_payload_surfaces_field_errors_verbatim() {
    let (store, di) = setup().await;
    seed_default_category(&store).await;
    let cancel = CancellationToken::new();

    let request = CreateProductRequest {
        name: String::new(),
        price: 0,
        stock: 10,
        category_id: 1,
    };

    let envelope = di
        .product_command
        .create_product(&request, &cancel)
        .await
        .unwrap();

    assert!(!envelope.success);
    assert_eq!(envelope.code, "create_error");
    assert!(envelope.data.is_none());
    assert_eq!(envelope.errors.len(), 2);
    assert_eq!(envelope.errors[0].field, "name");
    assert_eq!(envelope.errors[0].message, "Name is required");
    assert_eq!(envelope.errors[1].field, "price");
}

#[tokio::test]
async fn single_invalid_field_yields_exactly_one_error_entry() {
    let (store, di) = setup().await;
    seed_default_category(&store).await;
    let cancel = CancellationToken::new();

    let request = CreateProductRequest {
        name: String::new(),
        price: 1000,
        stock: 10,
        category_id: 1,
    };

    let envelope = di
        .product_command
        .create_product(&request, &cancel)
        .await
        .unwrap();

    assert_eq!(envelope.errors.len(), 1);
    assert_eq!(envelope.errors[0].field, "name");
}

#[tokio::test]
async fn duplicate_name_reports_existed() {
    let (store, di) = setup().await;
    seed_default_category(&store).await;
    let cancel = CancellationToken::new();

    di.product_command
        .create_product(&create_request("Keyboard"), &cancel)
        .await
        .unwrap();

    let envelope = di
        .product_command
        .create_product(&create_request("Keyboard"), &cancel)
        .await
        .unwrap();

    assert!(!envelope.success);
    assert_eq!(envelope.code, "existed");
    assert!(envelope.message.contains("already exists"));
    assert!(envelope.data.is_none());
}

#[tokio::test]
async fn unknown_category_reports_not_found() {
    let (_store, di) = setup().await;
    let cancel = CancellationToken::new();

    let envelope = di
        .product_command
        .create_product(&create_request("Smartwatch"), &cancel)
        .await
        .unwrap();

    assert!(!envelope.success);
    assert_eq!(envelope.code, "not_found");
    assert_eq!(envelope.message, "The requested category was not found");
}

#[tokio::test]
async fn cancelled_token_aborts_the_create() {
    let (store, di) = setup().await;
    seed_default_category(&store).await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = di
        .product_command
        .create_product(&create_request("Tablet"), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Cancelled));
}

#[tokio::test]
async fn listing_pages_carry_totals() {
    let (store, di) = setup().await;
    seed_default_category(&store).await;
    let cancel = CancellationToken::new();

    for i in 1..=25 {
        di.product_command
            .create_product(&create_request(&format!("Item {i:02}")), &cancel)
            .await
            .unwrap();
    }

    let envelope = di
        .product_query
        .find_all(&search(3, 10, ""), &cancel)
        .await
        .unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.code, "get_success");

    let page = envelope.data.expect("page payload");
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total_items, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 3);
}

#[tokio::test]
async fn listing_filters_by_search_term() {
    let (store, di) = setup().await;
    seed_default_category(&store).await;
    let cancel = CancellationToken::new();

    for name in ["Red mug", "Blue mug", "Red plate"] {
        di.product_command
            .create_product(&create_request(name), &cancel)
            .await
            .unwrap();
    }

    let envelope = di
        .product_query
        .find_all(&search(1, 10, "red"), &cancel)
        .await
        .unwrap();

    let page = envelope.data.unwrap();
    assert_eq!(page.total_items, 2);
    assert!(page.items.iter().all(|p| p.name.to_lowercase().contains("red")));
}

#[tokio::test]
async fn non_positive_paging_input_falls_back_to_defaults() {
    let (store, di) = setup().await;
    seed_default_category(&store).await;
    let cancel = CancellationToken::new();

    di.product_command
        .create_product(&create_request("Lamp"), &cancel)
        .await
        .unwrap();

    let envelope = di
        .product_query
        .find_all(&search(0, -5, ""), &cancel)
        .await
        .unwrap();

    let page = envelope.data.unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.total_items, 1);
}

#[tokio::test]
async fn oversized_page_size_is_clamped_to_the_configured_maximum() {
    let (store, di) = setup().await;
    seed_default_category(&store).await;
    let cancel = CancellationToken::new();

    di.product_command
        .create_product(&create_request("Desk"), &cancel)
        .await
        .unwrap();

    let envelope = di
        .product_query
        .find_all(&search(1, 5000, ""), &cancel)
        .await
        .unwrap();

    assert_eq!(envelope.data.unwrap().page_size, 100);
}
