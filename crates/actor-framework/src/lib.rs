//! # Actor Framework
//!
//! Building blocks for services whose state lives in actors: one Tokio task owns every record
//! of a resource type and answers typed requests sent over a channel.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the record type, its payloads, actions and hooks.
//! 2. **Runtime** ([`ResourceActor`]): the message loop and the insertion-ordered store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): the typed calling side, with an
//!    optional per-call timeout.
//!
//! Every resource gets the same request set: `Create`, `Get`, `List` (offset/limit, see
//! [`Page`]), `Update`, `Delete`, and `Action` for anything resource-specific.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own task and handles one request at a time, so writes to its
//!   store are serialized and reads are never torn.
//! - Different actors run in parallel.
//! - Callers can issue many requests concurrently; the channel queues them.
//!
//! ## Context Injection
//!
//! Dependencies reach an actor through `run(context)`, not `new()`. All actors and clients
//! can be created first and wired afterwards, whatever the dependency graph looks like.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Author { id: u32, name: String }
//! #[derive(Debug)] struct AuthorCreate { name: String }
//! #[derive(Debug, thiserror::Error)] #[error("author error")] struct AuthorError;
//!
//! #[async_trait]
//! impl ActorEntity for Author {
//!     type Id = u32; type Create = AuthorCreate; type Update = (); type Action = ();
//!     type ActionResult = (); type Context = (); type Error = AuthorError;
//!     fn from_create_params(id: u32, p: AuthorCreate) -> Result<Self, AuthorError> {
//!         Ok(Self { id, name: p.name })
//!     }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), AuthorError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), AuthorError> { Ok(()) }
//! }
//!
//! #[derive(Clone, Debug)] struct Book { id: u32, author: u32 }
//! #[derive(Debug)] struct BookCreate { author: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("unknown author {0}")] struct BookError(u32);
//!
//! #[async_trait]
//! impl ActorEntity for Book {
//!     type Id = u32; type Create = BookCreate; type Update = (); type Action = ();
//!     type ActionResult = (); type Error = BookError;
//!     // Books check their author through the author actor.
//!     type Context = ResourceClient<Author>;
//!
//!     fn from_create_params(id: u32, p: BookCreate) -> Result<Self, BookError> {
//!         Ok(Self { id, author: p.author })
//!     }
//!     async fn on_create(&mut self, authors: &ResourceClient<Author>) -> Result<(), BookError> {
//!         match authors.get(self.author).await {
//!             Ok(Some(_)) => Ok(()),
//!             _ => Err(BookError(self.author)),
//!         }
//!     }
//!     async fn on_update(&mut self, _: (), _: &Self::Context) -> Result<(), BookError> { Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &Self::Context) -> Result<(), BookError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (author_actor, authors) = ResourceActor::<Author>::new(8);
//!     let (book_actor, books) = ResourceActor::<Book>::new(8);
//!     tokio::spawn(author_actor.run(()));
//!     tokio::spawn(book_actor.run(authors.clone()));
//!
//!     let author = authors.create(AuthorCreate { name: "Le Guin".into() }).await.unwrap();
//!     assert!(books.create(BookCreate { author }).await.is_ok());
//!     assert!(books.create(BookCreate { author: 99 }).await.is_err());
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from queued expectations and
//! [`mock::create_mock_client`] hands the raw request stream to the test. Both plug into any
//! code that holds a [`ResourceClient`].

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod page;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use page::Page;
