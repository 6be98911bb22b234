use super::*;

/// Tests loading settings for a guild with no document.
///
/// Verifies that the repository returns the defaults and persists them so a direct read of
/// the file shows the same document.
///
/// Expected: Ok(GuildSettings::default()) and settings.json written
#[tokio::test]
async fn creates_default_document_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    let settings = repo.load(123).await?;

    assert_eq!(settings, GuildSettings::default());

    let stored = test.read_settings_document(123).await.unwrap();
    assert!(stored.is_some());
    let stored: GuildSettings = serde_json::from_value(stored.unwrap()).unwrap();
    assert_eq!(stored, settings);

    Ok(())
}

/// Tests loading a partially specified document.
///
/// Verifies that keys present in the document keep their stored value and only the missing
/// keys take defaults.
///
/// Expected: Ok with stored kick_message/bot_enabled and default dm_message/join_messages
#[tokio::test]
async fn fills_missing_keys_with_defaults() -> Result<(), AppError> {
    let document = SettingsDocumentFactory::new()
        .kick_message("Don't idle in voice")
        .bot_enabled(false)
        .without("dm_message")
        .without("join_messages")
        .build();
    let test = TestBuilder::new()
        .with_settings(123, document)
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    let settings = repo.load(123).await?;

    assert_eq!(settings.kick_message, "Don't idle in voice");
    assert!(!settings.bot_enabled);
    assert_eq!(settings.dm_message, DEFAULT_DM_MESSAGE);
    assert!(settings.join_messages);

    Ok(())
}

/// Tests loading a document in an old layout with very few keys.
///
/// Expected: Ok with logs_channel from the document and every other field default
#[tokio::test]
async fn loads_minimal_old_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings(123, json!({ "logs_channel": 987654321098765432u64 }))
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    let settings = repo.load(123).await?;

    assert_eq!(settings.logs_channel, Some(987654321098765432));
    assert_eq!(settings.kick_message, DEFAULT_KICK_MESSAGE);
    assert!(settings.bot_enabled);

    Ok(())
}

/// Tests that loading twice without a write returns equal results.
///
/// Expected: Ok with two structurally equal settings
#[tokio::test]
async fn repeated_loads_are_equal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings(123, json!({ "join_messages": false, "theme": "dark" }))
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    let first = repo.load(123).await?;
    let second = repo.load(123).await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests that an unparsable document is reported as corrupt.
///
/// Verifies that the repository surfaces the error instead of silently replacing the
/// document with defaults, and that the file is left untouched.
///
/// Expected: Err(StoreError::Corrupt) and the original bytes still on disk
#[tokio::test]
async fn fails_on_corrupt_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_raw_settings(123, "{ \"bot_enabled\": tru")
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    let result = repo.load(123).await;

    assert!(matches!(result, Err(StoreError::Corrupt { .. })));

    let raw = test.read_raw(123, "settings.json").await.unwrap();
    assert_eq!(raw.as_deref(), Some("{ \"bot_enabled\": tru"));

    Ok(())
}

/// Tests that a value of the wrong type is reported as corrupt.
///
/// Expected: Err(StoreError::Corrupt)
#[tokio::test]
async fn fails_on_wrong_field_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings(123, json!({ "bot_enabled": "yes" }))
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    let result = repo.load(123).await;

    assert!(matches!(result, Err(StoreError::Corrupt { .. })));

    Ok(())
}

/// Tests that one guild's corrupt document does not affect another guild.
///
/// Expected: Err for guild 1, Ok for guild 2
#[tokio::test]
async fn corrupt_document_is_isolated_per_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_raw_settings(1, "not json")
        .with_settings(2, json!({ "kick_message": "Bye" }))
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    assert!(repo.load(1).await.is_err());
    assert_eq!(repo.load(2).await?.kick_message, "Bye");

    Ok(())
}
