//! HTTP mapping of store failures that a real store cannot be made to produce, driven by
//! `MockClient`.

use axum::Router;
use catalog_service::http::{self, DeleteStyle, ResourceState};
use catalog_service::model::{Product, User};
use reqwest::StatusCode;
use resource_store::mock::MockClient;
use resource_store::{IdKind, RecordId, StoreError};
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn phone(id: i64) -> Product {
    Product {
        id: RecordId::Number(id),
        name: "Phone".into(),
        category: "Phones".into(),
        description: String::new(),
        price: 30000.0,
        stock: 1.0,
        rating: 0.0,
    }
}

fn app(products: &MockClient<Product>, users: &MockClient<User>) -> Router {
    http::router(
        ResourceState::new(products.client(), IdKind::Number, DeleteStyle::NoContent),
        ResourceState::new(users.client(), IdKind::Text, DeleteStyle::NoContent),
    )
}

#[tokio::test]
async fn test_internal_failures_become_500() {
    let mut products = MockClient::<Product>::new();
    let users = MockClient::<User>::new();
    products.expect_list().return_err(StoreError::ActorClosed);
    products
        .expect_create()
        .return_err(StoreError::DuplicateId(RecordId::Number(1)));

    let base = serve(app(&products, &users)).await;
    let http = reqwest::Client::new();

    let resp = http.get(format!("{base}/api/products")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.json::<Value>().await.unwrap(),
        json!({ "error": "Internal server error" })
    );

    let resp = http
        .post(format!("{base}/api/products"))
        .json(&json!({ "name": "Phone", "category": "Phones" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    products.verify();
}

#[tokio::test]
async fn test_path_ids_follow_the_store_id_kind() {
    let mut products = MockClient::<Product>::new();
    let mut users = MockClient::<User>::new();

    // integer store: canonical digits become integer keys, anything else stays text
    products.expect_get(RecordId::Number(7)).return_ok(phone(7));
    products
        .expect_get(RecordId::from("007"))
        .return_err(StoreError::NotFound {
            resource: "Product",
            id: RecordId::from("007"),
        });
    // text store: digits are still text
    users
        .expect_delete(RecordId::from("42"))
        .return_ok(User {
            id: RecordId::from("42"),
            name: "Ann".into(),
            age: 31.0,
        });

    let base = serve(app(&products, &users)).await;
    let http = reqwest::Client::new();

    let resp = http.get(format!("{base}/api/products/7")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], json!(7));

    let resp = http.get(format!("{base}/api/products/007")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = http.delete(format!("{base}/api/users/42")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    products.verify();
    users.verify();
}
