use super::*;

/// Tests saving settings for a guild with no directory yet.
///
/// Verifies that the guild directory is created and the full document is written.
///
/// Expected: Ok with every key present on disk
#[tokio::test]
async fn creates_guild_directory() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    let settings = GuildSettings {
        logs_channel: Some(42),
        ..Default::default()
    };
    repo.save(555, &settings).await?;

    let stored = test.read_settings_document(555).await.unwrap().unwrap();
    assert_eq!(stored["logs_channel"], json!(42));
    assert_eq!(stored["bot_enabled"], json!(true));
    assert_eq!(stored["kick_message"], json!(DEFAULT_KICK_MESSAGE));
    assert_eq!(stored["whitelist_enabled"], json!(false));

    Ok(())
}

/// Tests that unknown keys survive a load/save round-trip.
///
/// Expected: Ok with "theme" still present after saving a modified document
#[tokio::test]
async fn preserves_unknown_keys() -> Result<(), AppError> {
    let document = SettingsDocumentFactory::new()
        .with("theme", json!({ "accent": "purple" }))
        .build();
    let test = TestBuilder::new()
        .with_settings(123, document)
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    let mut settings = repo.load(123).await?;
    settings.bot_enabled = false;
    repo.save(123, &settings).await?;

    let stored = test.read_settings_document(123).await.unwrap().unwrap();
    assert_eq!(stored["theme"], json!({ "accent": "purple" }));
    assert_eq!(stored["bot_enabled"], json!(false));

    Ok(())
}

/// Tests that saved documents use 4-space indentation.
///
/// Expected: Ok with lines indented by four spaces
#[tokio::test]
async fn writes_pretty_printed_json() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = ConfigStore::new(test.root());
    let repo = SettingsRepository::new(&store);

    repo.save(123, &GuildSettings::default()).await?;

    let raw = test.read_raw(123, "settings.json").await.unwrap().unwrap();
    assert!(raw.contains("\n    \"bot_enabled\": true"));

    Ok(())
}
