use super::*;

/// Tests applying a change to a guild without a document.
///
/// Expected: Ok with defaults plus the change persisted
#[tokio::test]
async fn applies_change_to_default_document() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    let updated = repo
        .update(123, |settings| settings.bot_enabled = !settings.bot_enabled)
        .await?;

    assert!(!updated.bot_enabled);
    assert_eq!(repo.load(123).await?, updated);

    Ok(())
}

/// Tests that a failed load aborts the update without writing.
///
/// Expected: Err(StoreError::Corrupt) and the corrupt bytes untouched
#[tokio::test]
async fn does_not_overwrite_corrupt_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_raw_settings(123, "42")
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    let result = repo
        .update(123, |settings| settings.kick_message = "new".to_string())
        .await;

    assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    let raw = test.read_raw(123, "settings.json").await.unwrap();
    assert_eq!(raw.as_deref(), Some("42"));

    Ok(())
}

/// Tests concurrent updates of different fields on the same guild.
///
/// Verifies that the guild lock serializes load-modify-save so neither admin's change is
/// lost to the other's full-document overwrite.
///
/// Expected: Ok with both changes persisted
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_do_not_lose_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = ConfigStore::new(test.root());

    let mut handles = Vec::new();
    for i in 0..16u64 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            SettingsRepository::new(&store)
                .update(123, move |settings| {
                    settings
                        .extra
                        .insert(format!("counter_{}", i), json!(i));
                })
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap()?;
    }

    let settings = SettingsRepository::new(&store).load(123).await?;
    for i in 0..16u64 {
        assert_eq!(settings.extra.get(&format!("counter_{}", i)), Some(&json!(i)));
    }

    Ok(())
}
