use actor_framework::mock::{create_mock_client, MockClient};
use actor_framework::FrameworkError;
use chrono::Utc;
use favorites_service::clients::{ProductClient, UserClient};
use favorites_service::favorites::{FailurePolicy, FavoritesAggregator};
use favorites_service::model::{Product, UserCreate};
use favorites_service::user_actor;
use favorites_service::user_service::UserService;
use std::sync::Arc;
use std::time::Duration;

fn product(id: &str) -> Product {
    Product {
        id: id.into(),
        name: format!("product-{id}"),
        description: String::new(),
        price: 1.0,
        stock: 1,
        created_at: Utc::now(),
    }
}

fn start_users() -> UserClient {
    let (actor, client) = user_actor::new(16);
    tokio::spawn(actor.run(()));
    client
}

fn service(users: UserClient, products: ProductClient, policy: FailurePolicy) -> UserService {
    UserService::new(users, FavoritesAggregator::new(Arc::new(products), policy))
}

async fn user_with_favorites(users: &UserClient, favorites: &[&str]) {
    let id = users
        .create_user(UserCreate::new("Alice", "alice@example.com", 30))
        .await
        .unwrap();
    for &favorite in favorites {
        users.add_favorite(id.clone(), favorite.into()).await.unwrap();
    }
}

#[tokio::test]
async fn test_each_favorite_is_looked_up_once() {
    let users = start_users();
    user_with_favorites(&users, &["3", "1", "2"]).await;

    let mut catalog = MockClient::<Product>::new();
    for id in ["1", "2", "3"] {
        catalog.expect_get(id.into()).return_ok(Some(product(id)));
    }
    let service = service(users, ProductClient::new(catalog.client()), FailurePolicy::AllOrNothing);

    let user = service.get_user("1".into()).await.unwrap();
    let ids: Vec<_> = user.favorites.iter().map(|p| p.id.0.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2"]);
    catalog.verify();
}

#[tokio::test]
async fn test_catalog_failure_never_fails_the_request() {
    let users = start_users();
    user_with_favorites(&users, &["1", "2"]).await;

    let mut catalog = MockClient::<Product>::new();
    catalog.expect_get("1".into()).return_ok(Some(product("1")));
    catalog.expect_get("2".into()).return_err(FrameworkError::ActorClosed);
    let service = service(users, ProductClient::new(catalog.client()), FailurePolicy::AllOrNothing);

    let user = service.get_user("1".into()).await.unwrap();
    assert!(user.favorites.is_empty());
}

#[tokio::test]
async fn test_create_user_does_not_touch_the_catalog() {
    let users = start_users();
    let (inner, mut receiver) = create_mock_client::<Product>(10);
    let service = service(users, ProductClient::new(inner), FailurePolicy::AllOrNothing);

    let user = service
        .create_user(UserCreate::new("Bob", "bob@example.com", 22))
        .await
        .unwrap();
    assert!(user.favorites.is_empty());
    assert!(receiver.try_recv().is_err());
}

#[tokio::test]
async fn test_slow_catalog_times_out_into_empty_favorites() {
    let users = start_users();
    user_with_favorites(&users, &["1"]).await;

    // Nobody reads the catalog channel, so every lookup hits the timeout.
    let (inner, _receiver) = create_mock_client::<Product>(10);
    let products = ProductClient::new(inner).with_timeout(Duration::from_millis(20));
    let service = service(users, products, FailurePolicy::Partial);

    let user = service.get_user("1".into()).await.unwrap();
    assert!(user.favorites.is_empty());
}

#[tokio::test]
async fn test_list_users_resolves_each_user() {
    let users = start_users();
    user_with_favorites(&users, &["1"]).await;
    user_with_favorites(&users, &["2", "9"]).await;
    user_with_favorites(&users, &[]).await;

    let mut catalog = MockClient::<Product>::new();
    catalog.expect_get("1".into()).return_ok(Some(product("1")));
    catalog.expect_get("2".into()).return_ok(Some(product("2")));
    catalog.expect_get("9".into()).return_ok(None);
    let service = service(users, ProductClient::new(catalog.client()), FailurePolicy::AllOrNothing);

    let page = service.list_users(0, 10).await.unwrap();
    assert_eq!(page.total, 3);
    let counts: Vec<_> = page.users.iter().map(|u| u.favorites.len()).collect();
    // The second user's missing "9" only collapses that user's list.
    assert_eq!(counts, [1, 0, 0]);
    catalog.verify();
}
