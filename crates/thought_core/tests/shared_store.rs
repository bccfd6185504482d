use std::sync::Arc;
use std::thread;
use thought_core::{ManualClock, SharedThoughtStore, StoreConfig, StoreError, SystemClock};

const OWNER: &str = "owner";

#[test]
fn clones_share_one_store() {
    let config = StoreConfig::new(OWNER).unwrap();
    let store = SharedThoughtStore::new(config, ManualClock::new(0));
    let handle = store.clone();

    let id = store.submit("alice", "hello", "c").unwrap();

    assert_eq!(handle.get(id).unwrap().content, "hello");
    assert_eq!(handle.get_by_user("alice"), vec![id]);
    assert_eq!(handle.get_by_category("c"), vec![id]);
    assert_eq!(handle.len(), 1);
}

#[test]
fn delete_rules_hold_through_shared_handle() {
    let config = StoreConfig::new(OWNER).unwrap();
    let store = SharedThoughtStore::new(config, ManualClock::new(0));
    let id = store.submit("alice", "hello", "c").unwrap();

    assert_eq!(store.delete("alice", id), Err(StoreError::NotAuthorized));
    store.delete(OWNER, id).unwrap();
    assert_eq!(store.delete(OWNER, id), Err(StoreError::NotFound(id)));
    assert!(store.is_empty());
    assert_eq!(store.get_by_user("alice"), vec![id]);
}

#[test]
fn concurrent_submissions_get_unique_contiguous_ids() {
    let config = StoreConfig::new(OWNER).unwrap();
    let store = SharedThoughtStore::new(config, SystemClock);

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let store = store.clone();
            thread::spawn(move || {
                let user = format!("user-{worker}");
                (0..25)
                    .map(|n| store.submit(&user, &format!("thought {n}"), "load").unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all_ids = Vec::new();
    for (worker, handle) in workers.into_iter().enumerate() {
        let ids = handle.join().unwrap();
        assert_eq!(store.get_by_user(&format!("user-{worker}")), ids);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        all_ids.extend(ids);
    }

    all_ids.sort_unstable();
    assert_eq!(all_ids, (0..100).collect::<Vec<u64>>());
    assert_eq!(store.get_by_category("load"), (0..100).collect::<Vec<u64>>());
    assert_eq!(store.len(), 100);
}

#[test]
fn indexed_ids_are_always_visible_to_readers() {
    let config = StoreConfig::new(OWNER).unwrap();
    let store = SharedThoughtStore::new(config, Arc::new(ManualClock::new(0)));

    let writer = {
        let store = store.clone();
        thread::spawn(move || {
            for n in 0..200 {
                store.submit("writer", &format!("t{n}"), "race").unwrap();
            }
        })
    };

    for _ in 0..200 {
        store.with_store(|inner| {
            for &id in inner.get_by_category("race") {
                assert!(inner.get(id).is_some(), "indexed id {id} missing from table");
            }
            assert_eq!(inner.get_by_category("race").len(), inner.len());
        });
    }

    writer.join().unwrap();
    assert_eq!(store.len(), 200);
}
