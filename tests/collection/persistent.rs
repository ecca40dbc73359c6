use crate::common::{users, User};
use model_collections::backend::{MemoryBackend, NullBackend};
use model_collections::{
    Backend, CollectionError, KeySource, PersistError, PersistentSequence, Sequence,
};
use std::collections::HashMap;
use std::fmt;

fn by_name() -> KeySource<User> {
    KeySource::func(|user: &User| user.name.clone())
}

#[test]
fn append_never_calls_backend() {
    let mut p =
        PersistentSequence::new(Sequence::<User>::new(), MemoryBackend::new(), by_name());
    p.append(User::new("A", 1)).unwrap();
    p.commit().unwrap();

    assert_eq!(p.len(), 1);
    assert_eq!(p.backend().commits(), 1);
    assert_eq!(p.backend().adds(), 0);
    assert!(p.backend().load().unwrap().is_empty());
}

#[test]
fn stage_all_then_commit_persists_by_key() {
    let mut p = PersistentSequence::new(
        Sequence::<User>::new(),
        MemoryBackend::new(),
        KeySource::field("name"),
    )
    .overwrite(true);
    p.extend(users(3)).unwrap();
    assert!(p.is_overwrite());

    assert_eq!(p.stage_all().unwrap(), 3);
    assert!(p.backend().load().unwrap().is_empty());
    p.commit().unwrap();

    let stored = p.backend().load().unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored["Name 2"], User::new("Name 2", 2));
}

#[test]
fn key_of_uses_key_source() {
    let p = PersistentSequence::new(
        Sequence::<User>::new(),
        NullBackend,
        KeySource::field("age"),
    );
    assert_eq!(p.key_of(&User::new("A", 7)).unwrap(), "7");

    let missing = PersistentSequence::new(
        Sequence::<User>::new(),
        NullBackend,
        KeySource::field("email"),
    );
    assert!(matches!(
        missing.key_of(&User::new("A", 7)),
        Err(CollectionError::KeyNotFound(_))
    ));
}

#[derive(Debug)]
struct Offline;

impl fmt::Display for Offline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("backend offline")
    }
}

impl std::error::Error for Offline {}

#[derive(Debug, Default)]
struct FailingBackend {
    commits: usize,
}

impl Backend<String, User> for FailingBackend {
    type Error = Offline;

    fn add(&mut self, _key: String, _value: User) -> Result<(), Offline> {
        Err(Offline)
    }

    fn load(&self) -> Result<HashMap<String, User>, Offline> {
        Err(Offline)
    }

    fn delete(&mut self, _key: &String) -> Result<(), Offline> {
        Err(Offline)
    }

    fn commit(&mut self) -> Result<(), Offline> {
        self.commits += 1;
        Err(Offline)
    }
}

#[test]
fn backend_failures_propagate() {
    let mut p = PersistentSequence::new(
        Sequence::<User>::new(),
        FailingBackend::default(),
        by_name(),
    );
    p.append(User::new("A", 1)).unwrap();

    assert!(matches!(p.commit(), Err(PersistError::Backend(Offline))));
    assert!(matches!(p.stage_all(), Err(PersistError::Backend(Offline))));
    assert_eq!(p.backend().commits, 1);
    assert_eq!(p.len(), 1);
}

#[test]
fn borrowed_backend_sees_commits() {
    let mut backend = MemoryBackend::new();
    {
        let mut p = PersistentSequence::new(Sequence::<User>::new(), &mut backend, by_name());
        p.append(User::new("A", 1)).unwrap();
        p.stage_all().unwrap();
        p.commit().unwrap();
    }
    assert_eq!(backend.commits(), 1);
    assert_eq!(backend.load().unwrap()["A"].age, 1);
}
