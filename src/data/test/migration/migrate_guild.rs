use super::*;

/// Tests moving an embedded whitelist into whitelist.json.
///
/// Verifies that embedded entries are merged with the existing whitelist without duplicates
/// and that the `whitelist` key is removed from settings.
///
/// Expected: Ok(true), whitelist ["10", "20", "30"], no "whitelist" key in settings
#[tokio::test]
async fn moves_embedded_whitelist() -> Result<(), AppError> {
    let document = SettingsDocumentFactory::new()
        .legacy_whitelist(&["20", "30"])
        .build();
    let test = TestBuilder::new()
        .with_settings(123, document)
        .with_whitelist(123, json!(["10", "20"]))
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());

    let migrated = migrate_guild(&store, 123).await?;

    assert!(migrated);
    let whitelist = WhitelistRepository::new(&store).load(123).await?;
    assert_eq!(whitelist.iter().collect::<Vec<_>>(), vec!["10", "20", "30"]);

    let stored = test.read_settings_document(123).await.unwrap().unwrap();
    assert!(stored.get("whitelist").is_none());

    Ok(())
}

/// Tests renaming the legacy `log_channel` key.
///
/// Expected: Ok(true) and logs_channel set from log_channel
#[tokio::test]
async fn renames_log_channel() -> Result<(), AppError> {
    let document = SettingsDocumentFactory::new()
        .legacy_log_channel(555)
        .build();
    let test = TestBuilder::new()
        .with_settings(123, document)
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());

    assert!(migrate_guild(&store, 123).await?);

    let settings = SettingsRepository::new(&store).load(123).await?;
    assert_eq!(settings.logs_channel, Some(555));
    assert!(settings.extra.get("log_channel").is_none());

    Ok(())
}

/// Tests that an existing `logs_channel` wins over the legacy key.
///
/// Expected: Ok(true), logs_channel unchanged, log_channel dropped
#[tokio::test]
async fn keeps_existing_logs_channel() -> Result<(), AppError> {
    let document = SettingsDocumentFactory::new()
        .logs_channel(Some(111))
        .with("log_channel", json!(222))
        .build();
    let test = TestBuilder::new()
        .with_settings(123, document)
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());

    assert!(migrate_guild(&store, 123).await?);

    let stored = test.read_settings_document(123).await.unwrap().unwrap();
    assert_eq!(stored["logs_channel"], json!(111));
    assert!(stored.get("log_channel").is_none());

    Ok(())
}

/// Tests that a canonical document is left untouched.
///
/// Expected: Ok(false) and no whitelist.json created
#[tokio::test]
async fn skips_canonical_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings(123, SettingsDocumentFactory::new().build())
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());

    assert!(!migrate_guild(&store, 123).await?);
    assert!(test.read_whitelist_document(123).await.unwrap().is_none());

    Ok(())
}

/// Tests that running the migration twice is a no-op the second time.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let document = SettingsDocumentFactory::new()
        .legacy_whitelist(&["10"])
        .legacy_log_channel(555)
        .build();
    let test = TestBuilder::new()
        .with_settings(123, document)
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());

    assert!(migrate_guild(&store, 123).await?);
    assert!(!migrate_guild(&store, 123).await?);

    Ok(())
}
