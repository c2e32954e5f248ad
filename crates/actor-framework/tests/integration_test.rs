use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;
use std::fmt;

// --- Test Entity ---

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Code(String);

impl From<u32> for Code {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Badge {
    id: Code,
    name: String,
    stars: u32,
}

#[derive(Debug)]
struct BadgeCreate {
    id: Option<Code>,
    name: String,
}

#[derive(Debug)]
struct BadgeUpdate {
    name: Option<String>,
}

#[derive(Debug)]
enum BadgeAction {
    Star,
    Unstar,
}

#[derive(Debug, thiserror::Error)]
enum BadgeError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("no stars to remove")]
    NoStars,
}

#[async_trait]
impl ActorEntity for Badge {
    type Id = Code;
    type Create = BadgeCreate;
    type Update = BadgeUpdate;
    type Action = BadgeAction;
    type ActionResult = u32;
    type Context = ();
    type Error = BadgeError;

    fn preset_id(params: &BadgeCreate) -> Option<Code> {
        params.id.clone()
    }

    fn from_create_params(id: Code, params: BadgeCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(BadgeError::EmptyName);
        }
        Ok(Self {
            id,
            name: params.name,
            stars: 0,
        })
    }

    async fn on_update(&mut self, update: BadgeUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: BadgeAction, _ctx: &()) -> Result<u32, Self::Error> {
        match action {
            BadgeAction::Star => self.stars += 1,
            BadgeAction::Unstar => {
                self.stars = self.stars.checked_sub(1).ok_or(BadgeError::NoStars)?;
            }
        }
        Ok(self.stars)
    }
}

fn badge(name: &str) -> BadgeCreate {
    BadgeCreate {
        id: None,
        name: name.to_string(),
    }
}

fn preset(id: &str, name: &str) -> BadgeCreate {
    BadgeCreate {
        id: Some(Code(id.to_string())),
        name: name.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Badge>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(badge("gold")).await.unwrap();
    assert_eq!(id, Code("1".into()));

    assert_eq!(client.perform_action(id.clone(), BadgeAction::Star).await.unwrap(), 1);
    assert_eq!(client.perform_action(id.clone(), BadgeAction::Star).await.unwrap(), 2);

    let stored = client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(stored.stars, 2);

    let renamed = client
        .update(
            id.clone(),
            BadgeUpdate {
                name: Some("platinum".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "platinum");

    client.delete(id.clone()).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_keeps_insertion_order_and_full_total() {
    let (actor, client) = ResourceActor::<Badge>::new(10);
    tokio::spawn(actor.run(()));

    for name in ["a", "b", "c", "d", "e"] {
        client.create(badge(name)).await.unwrap();
    }

    let page = client.list(1, 2).await.unwrap();
    assert_eq!(page.total, 5);
    let names: Vec<_> = page.items.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["b", "c"]);

    let tail = client.list(4, 10).await.unwrap();
    assert_eq!(tail.total, 5);
    assert_eq!(tail.items.len(), 1);

    let beyond = client.list(9, 3).await.unwrap();
    assert_eq!(beyond.total, 5);
    assert!(beyond.items.is_empty());
}

#[tokio::test]
async fn test_delete_removes_from_listing() {
    let (actor, client) = ResourceActor::<Badge>::new(10);
    tokio::spawn(actor.run(()));

    let first = client.create(badge("a")).await.unwrap();
    client.create(badge("b")).await.unwrap();
    client.delete(first).await.unwrap();

    let page = client.list(0, 10).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "b");
}

#[tokio::test]
async fn test_preset_ids_are_kept_and_skipped_by_generator() {
    let (actor, client) = ResourceActor::<Badge>::new(10);
    tokio::spawn(actor.run(()));

    client.create(preset("1", "seeded")).await.unwrap();
    client.create(preset("2", "seeded too")).await.unwrap();

    let generated = client.create(badge("fresh")).await.unwrap();
    assert_eq!(generated, Code("3".into()));
}

#[tokio::test]
async fn test_duplicate_preset_id_is_rejected() {
    let (actor, client) = ResourceActor::<Badge>::new(10);
    tokio::spawn(actor.run(()));

    client.create(preset("7", "first")).await.unwrap();
    let err = client.create(preset("7", "second")).await.unwrap_err();
    assert!(matches!(err, FrameworkError::AlreadyExists(id) if id == "7"));

    let page = client.list(0, 10).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "first");
}

#[tokio::test]
async fn test_entity_errors_and_missing_ids() {
    let (actor, client) = ResourceActor::<Badge>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(badge("")).await.unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));

    let id = client.create(badge("silver")).await.unwrap();
    let err = client.perform_action(id, BadgeAction::Unstar).await.unwrap_err();
    assert!(err.to_string().contains("no stars"));

    let err = client
        .perform_action(Code("404".into()), BadgeAction::Star)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let (actor, client) = ResourceActor::<Badge>::new(4);
    tokio::spawn(actor.run(()));

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(badge(&format!("b{i}"))).await.unwrap()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_by(|a, b| a.0.cmp(&b.0));
    ids.dedup();
    assert_eq!(ids.len(), 20);
    assert_eq!(client.list(0, 100).await.unwrap().total, 20);
}

#[tokio::test]
async fn test_calls_fail_once_actor_is_gone() {
    let (actor, client) = ResourceActor::<Badge>::new(10);
    drop(actor);

    let err = client.get(Code("1".into())).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
