//! Dispatch registry tests: every request variant resolves to its handler
//! and faults propagate through the dispatcher unchanged.

use chrono::Utc;
use commerce::di::DependenciesInject;
use commerce::dispatch::{AppRequest, AppResponse, Dispatcher};
use commerce::domain::requests::{CreateProductRequest, SearchProducts, SearchUsers, UpdateOrderRequest};
use commerce::model::{Category, Order};
use commerce::repository::{InMemoryStore, MemoryUnitOfWork};
use shared::config::AppConfig;
use shared::errors::ServiceError;
use shared::localization::StaticLocalizer;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

async fn dispatcher() -> (Arc<InMemoryStore>, Dispatcher) {
    let store = InMemoryStore::new();
    let uow = Arc::new(MemoryUnitOfWork::new(store.clone()));
    let localizer = Arc::new(StaticLocalizer::default());
    let dispatcher =
        DependenciesInject::new(uow, localizer, AppConfig::default()).into_dispatcher();
    (store, dispatcher)
}

#[tokio::test]
async fn every_variant_resolves_to_its_handler() {
    let (store, dispatcher) = dispatcher().await;
    let cancel = CancellationToken::new();

    store
        .seed_category(Category {
            category_id: 1,
            name: "Electronics".to_string(),
        })
        .await;
    store
        .seed_order(Order {
            order_id: 1,
            user_id: 1,
            status: "pending".to_string(),
            order_date: Utc::now().naive_utc(),
            total: 500,
            created_at: None,
            updated_at: None,
        })
        .await;

    let created = dispatcher
        .dispatch(
            AppRequest::CreateProduct(CreateProductRequest {
                name: "Camera".to_string(),
                price: 250_000,
                stock: 3,
                category_id: 1,
            }),
            &cancel,
        )
        .await
        .unwrap();
    let AppResponse::Product(envelope) = created else {
        panic!("expected a product envelope");
    };
    assert!(envelope.success);
    let product_id = envelope.data.unwrap().id;

    let listed = dispatcher
        .dispatch(
            AppRequest::FindAllProducts(SearchProducts {
                page: 1,
                page_size: 10,
                search: String::new(),
            }),
            &cancel,
        )
        .await
        .unwrap();
    let AppResponse::Products(envelope) = listed else {
        panic!("expected a product page envelope");
    };
    assert_eq!(envelope.data.unwrap().total_items, 1);

    let fetched = dispatcher
        .dispatch(AppRequest::FindProductById(product_id), &cancel)
        .await
        .unwrap();
    let AppResponse::Product(envelope) = fetched else {
        panic!("expected a product envelope");
    };
    assert!(envelope.success);

    let updated = dispatcher
        .dispatch(
            AppRequest::UpdateOrder(UpdateOrderRequest {
                order_id: 1,
                status: "shipped".to_string(),
                order_date: Some(Utc::now().naive_utc()),
            }),
            &cancel,
        )
        .await
        .unwrap();
    let AppResponse::Order(envelope) = updated else {
        panic!("expected an order envelope");
    };
    assert!(envelope.success);

    let users = dispatcher
        .dispatch(
            AppRequest::FindAllUsers(SearchUsers {
                page: 1,
                page_size: 10,
                search: String::new(),
            }),
            &cancel,
        )
        .await
        .unwrap();
    let AppResponse::Users(envelope) = users else {
        panic!("expected a user page envelope");
    };
    assert_eq!(envelope.data.unwrap().total_items, 0);

    let missing_user = dispatcher
        .dispatch(AppRequest::FindUserById(99), &cancel)
        .await
        .unwrap();
    let AppResponse::User(envelope) = missing_user else {
        panic!("expected a user envelope");
    };
    assert!(!envelope.success);
    assert_eq!(envelope.code, "not_found");
}

#[tokio::test]
async fn cancellation_propagates_through_the_dispatcher() {
    let (_store, dispatcher) = dispatcher().await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = dispatcher
        .dispatch(
            AppRequest::FindAllProducts(SearchProducts {
                page: 1,
                page_size: 10,
                search: String::new(),
            }),
            &cancel,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Cancelled));
}
