//! # Mock Framework
//!
//! Test doubles that speak the same channel protocol as a real [`ResourceActor`](crate::ResourceActor),
//! so any code holding a [`ResourceClient`] can be exercised without spawning the real actor.
//!
//! | | `MockClient` | `create_mock_client` + `expect_*` | real actor |
//! |---|---|---|---|
//! | Style | declare replies up front | answer each request by hand | real state |
//! | Good for | error injection, call counting | inspecting payloads, holding a reply back | end-to-end |
//!
//! `MockClient` matches each incoming request with the first queued expectation of the same
//! kind and id, so callers that fan requests out concurrently don't depend on arrival order.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Item { id: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("item error")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u32; type Create = (); type Update = (); type Action = ();
//!     type ActionResult = (); type Context = (); type Error = ItemError;
//!     fn from_create_params(id: u32, _: ()) -> Result<Self, ItemError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), ItemError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), ItemError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Item>::new();
//!     mock.expect_get(1).return_ok(Some(Item { id: 1 }));
//!     mock.expect_get(2).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(matches!(client.get(2).await, Err(FrameworkError::ActorClosed)));
//!     assert_eq!(client.get(1).await.unwrap().unwrap().id, 1);
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::page::Page;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A queued reply for one expected request.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Page<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// Remove and return the first expectation accepted by `pick`.
fn take_matching<T: ActorEntity, R>(
    expectations: &Expectations<T>,
    mut pick: impl FnMut(&Expectation<T>) -> bool,
    extract: impl FnOnce(Expectation<T>) -> Option<R>,
) -> Option<R> {
    let mut exps = expectations.lock().unwrap();
    let position = exps.iter().position(|e| pick(e))?;
    exps.remove(position).and_then(extract)
}

fn reply<R>(
    respond_to: oneshot::Sender<Result<R, FrameworkError>>,
    response: Option<Result<R, FrameworkError>>,
    what: &str,
) {
    match response {
        Some(response) => {
            let _ = respond_to.send(response);
        }
        None => panic!("Unexpected {what} request: no matching expectation"),
    }
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let exps = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                match request {
                    ResourceRequest::Get { id, respond_to } => {
                        let response = take_matching(
                            &exps,
                            |e| matches!(e, Expectation::Get { id: expected, .. } if *expected == id),
                            |e| match e {
                                Expectation::Get { response, .. } => Some(response),
                                _ => None,
                            },
                        );
                        reply(respond_to, response, "Get");
                    }
                    ResourceRequest::Create { respond_to, .. } => {
                        let response = take_matching(
                            &exps,
                            |e| matches!(e, Expectation::Create { .. }),
                            |e| match e {
                                Expectation::Create { response } => Some(response),
                                _ => None,
                            },
                        );
                        reply(respond_to, response, "Create");
                    }
                    ResourceRequest::List { respond_to, .. } => {
                        let response = take_matching(
                            &exps,
                            |e| matches!(e, Expectation::List { .. }),
                            |e| match e {
                                Expectation::List { response } => Some(response),
                                _ => None,
                            },
                        );
                        reply(respond_to, response, "List");
                    }
                    ResourceRequest::Update { id, respond_to, .. } => {
                        let response = take_matching(
                            &exps,
                            |e| matches!(e, Expectation::Update { id: expected, .. } if *expected == id),
                            |e| match e {
                                Expectation::Update { response, .. } => Some(response),
                                _ => None,
                            },
                        );
                        reply(respond_to, response, "Update");
                    }
                    ResourceRequest::Delete { id, respond_to } => {
                        let response = take_matching(
                            &exps,
                            |e| matches!(e, Expectation::Delete { id: expected, .. } if *expected == id),
                            |e| match e {
                                Expectation::Delete { response, .. } => Some(response),
                                _ => None,
                            },
                        );
                        reply(respond_to, response, "Delete");
                    }
                    ResourceRequest::Action { id, respond_to, .. } => {
                        let response = take_matching(
                            &exps,
                            |e| matches!(e, Expectation::Action { id: expected, .. } if *expected == id),
                            |e| match e {
                                Expectation::Action { response, .. } => Some(response),
                                _ => None,
                            },
                        );
                        reply(respond_to, response, "Action");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Get { id, response })
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create { response })
    }

    /// Expects a `list`, whatever the window.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Page<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List { response })
    }

    /// Expects an `update` of `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Action { id, response })
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Finishes an expectation by choosing its reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: &Expectations<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            build: Box::new(build),
        }
    }

    /// Reply with a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Reply with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client wired to a receiver the test drives by hand.
///
/// Nothing answers unless the test does, which also makes it the simplest way to simulate an
/// actor that never replies.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a List request.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(usize, usize, oneshot::Sender<Result<Page<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List {
            offset,
            limit,
            respond_to,
        }) => Some((offset, limit, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;

    #[derive(Clone, Debug, PartialEq)]
    struct Gadget {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct GadgetCreate {
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("gadget error")]
    struct GadgetError;

    #[async_trait]
    impl ActorEntity for Gadget {
        type Id = u32;
        type Create = GadgetCreate;
        type Update = ();
        type Action = ();
        type ActionResult = ();
        type Context = ();
        type Error = GadgetError;

        fn from_create_params(id: u32, params: GadgetCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn gadget(id: u32) -> Gadget {
        Gadget {
            id,
            label: format!("gadget-{id}"),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Gadget>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(GadgetCreate {
                    label: "spring".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "spring");
        responder.send(Ok(7)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn test_gets_match_by_id_not_arrival_order() {
        let mut mock = MockClient::<Gadget>::new();
        mock.expect_get(1).return_ok(Some(gadget(1)));
        mock.expect_get(2).return_ok(None);

        let client = mock.client();
        assert_eq!(client.get(2).await.unwrap(), None);
        assert_eq!(client.get(1).await.unwrap(), Some(gadget(1)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_list_expectation() {
        let mut mock = MockClient::<Gadget>::new();
        mock.expect_list()
            .return_ok(Page::new(vec![gadget(3)], 12));

        let page = mock.client().list(2, 1).await.unwrap();
        assert_eq!(page.total, 12);
        assert_eq!(page.items, vec![gadget(3)]);
        assert_eq!(mock.remaining(), 0);
    }

    #[tokio::test]
    async fn test_unanswered_request_times_out() {
        let (client, mut receiver) = create_mock_client::<Gadget>(10);
        let client = client.with_timeout(Duration::from_millis(20));

        let pending = tokio::spawn(async move { client.get(1).await });

        // Hold the reply until the caller has given up.
        let (_id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        let result = pending.await.unwrap();
        assert!(matches!(result, Err(FrameworkError::Timeout(_))));
        drop(responder);
    }
}
