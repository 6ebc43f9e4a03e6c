// SPDX-License-Identifier: GPL-3.0-only

//! Store persistence across sessions

use chrono::Utc;
use polaroid_booth::constants::STORAGE_FILE_NAME;
use polaroid_booth::store::{ImageData, NewPhoto, PhotoPatch, PhotoStore, SettingsPatch};
use polaroid_booth::{JsonFileBackend, MemoryBackend, Placement, StateBackend, WriteBehind};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use uuid::Uuid;

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("polaroid-booth-test-{}", Uuid::new_v4()))
}

fn new_photo() -> NewPhoto {
    NewPhoto {
        id: Uuid::new_v4(),
        image_data: ImageData::from("data:image/jpeg;base64,/9j/4AAQSkZJRg=="),
        x: 64.25,
        y: 133.5,
        rotation: -3.75,
        caption: String::new(),
        created_at: Utc::now(),
        background_color: "#ffffff".to_string(),
    }
}

/// A short session: three photos, one edited, one raised, one removed
fn run_session(store: &mut PhotoStore) {
    let a = new_photo();
    let b = new_photo();
    let c = new_photo();
    let (a_id, b_id, c_id) = (a.id, b.id, c.id);

    store.add_photo(a);
    store.add_photo(b);
    store.add_photo(c);
    store.update_photo(a_id, PhotoPatch::caption("beach day"));
    store.update_settings(SettingsPatch::default_background_color("#ffd1dc"));
    store.bring_to_front(a_id);
    store.remove_photo(c_id);
    store.update_photo(b_id, PhotoPatch::position(400.0, 12.0));
}

#[test]
fn test_memory_round_trip_restores_identical_state() {
    let backend = MemoryBackend::new();
    let mut store = PhotoStore::open(backend.clone());
    run_session(&mut store);
    let before = store.snapshot();
    drop(store);

    let reopened = PhotoStore::open(backend);
    assert_eq!(*reopened.snapshot(), *before);
}

#[test]
fn test_file_round_trip_restores_identical_state() {
    let dir = scratch_dir();

    let mut store = PhotoStore::open(JsonFileBackend::new(&dir));
    run_session(&mut store);
    let before = store.snapshot();
    drop(store);

    assert!(dir.join(STORAGE_FILE_NAME).exists());

    let reopened = PhotoStore::open(JsonFileBackend::new(&dir));
    let after = reopened.snapshot();
    assert_eq!(*after, *before);
    assert_eq!(after.settings().default_background_color, "#ffd1dc");

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_scattered_placements_round_trip_exactly() {
    let dir = scratch_dir();
    let memory = MemoryBackend::new();
    let mut rng = StdRng::seed_from_u64(7);

    let mut in_memory = PhotoStore::open(memory.clone());
    let mut on_disk = PhotoStore::open(JsonFileBackend::new(&dir));
    for _ in 0..200 {
        let placement = Placement::random(&mut rng);
        let photo = NewPhoto {
            x: placement.position.x,
            y: placement.position.y,
            rotation: placement.rotation,
            ..new_photo()
        };
        in_memory.add_photo(photo.clone());
        on_disk.add_photo(photo);
    }
    let memory_before = in_memory.snapshot();
    let disk_before = on_disk.snapshot();
    drop(in_memory);
    drop(on_disk);

    assert_eq!(*PhotoStore::open(memory).snapshot(), *memory_before);
    assert_eq!(
        *PhotoStore::open(JsonFileBackend::new(&dir)).snapshot(),
        *disk_before
    );

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_counter_continues_after_reopen() {
    let backend = MemoryBackend::new();
    let mut store = PhotoStore::open(backend.clone());
    run_session(&mut store);
    let max_before = store.snapshot().max_stack_order();
    drop(store);

    let mut reopened = PhotoStore::open(backend);
    let photo = new_photo();
    let id = photo.id;
    reopened.add_photo(photo);

    let snapshot = reopened.snapshot();
    assert_eq!(snapshot.get(id).map(|p| p.stack_order), Some(max_before + 1));
}

#[test]
fn test_failed_writes_keep_session_state() {
    let backend = MemoryBackend::new();
    let mut store = PhotoStore::open(backend.clone());
    store.add_photo(new_photo());
    assert_eq!(backend.stored().map(|r| r.photos.len()), Some(1));

    backend.set_fail_writes(true);
    let photo = new_photo();
    let id = photo.id;
    assert!(store.add_photo(photo));
    assert!(store.update_photo(id, PhotoPatch::caption("still here")));

    // Session state moved on, the stored record did not
    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.get(id).map(|p| p.caption.as_str()), Some("still here"));
    assert_eq!(backend.stored().map(|r| r.photos.len()), Some(1));

    // The next successful write carries everything
    backend.set_fail_writes(false);
    store.bring_to_front(id);
    assert_eq!(backend.stored().map(|r| r.photos.len()), Some(2));
}

#[test]
fn test_quota_exceeded_is_reported_by_file_backend() {
    let dir = scratch_dir();
    let backend = JsonFileBackend::new(&dir).with_quota(64);

    let mut store = PhotoStore::open(backend);
    assert!(store.add_photo(new_photo()));
    assert_eq!(store.snapshot().len(), 1);
    assert!(!dir.join(STORAGE_FILE_NAME).exists());

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_corrupt_record_starts_empty() {
    let backend = MemoryBackend::with_raw("{\"photos\": [ { \"id\": 12");
    let store = PhotoStore::open(backend);

    let snapshot = store.snapshot();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.max_stack_order(), 1);
    assert_eq!(snapshot.settings().default_background_color, "#ffffff");
}

#[test]
fn test_corrupt_file_is_replaced_on_next_write() {
    let dir = scratch_dir();
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(STORAGE_FILE_NAME), "not json").unwrap();

    let mut store = PhotoStore::open(JsonFileBackend::new(&dir));
    assert!(store.snapshot().is_empty());
    store.add_photo(new_photo());
    drop(store);

    let record = JsonFileBackend::new(&dir).load().unwrap().unwrap();
    assert_eq!(record.photos.len(), 1);

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn test_write_behind_store_flushes_on_drop() {
    let backend = MemoryBackend::new();
    let writer = WriteBehind::spawn(backend.clone()).unwrap();

    let mut store = PhotoStore::open(writer);
    for _ in 0..10 {
        store.add_photo(new_photo());
    }
    let expected = store.snapshot().to_record();
    drop(store);

    assert_eq!(backend.stored(), Some(expected));
}
