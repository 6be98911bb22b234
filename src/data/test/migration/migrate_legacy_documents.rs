use super::*;

/// Tests migrating a root with several guilds.
///
/// Verifies that a corrupt guild is counted as failed while the others are still migrated.
///
/// Expected: Ok(MigrationReport { migrated: 1, failed: 1 })
#[tokio::test]
async fn migrates_each_guild_independently() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings(
            1,
            SettingsDocumentFactory::new()
                .legacy_whitelist(&["10"])
                .build(),
        )
        .with_raw_settings(2, "{ broken")
        .with_settings(3, SettingsDocumentFactory::new().build())
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());

    let report = migrate_legacy_documents(&store).await?;

    assert_eq!(
        report,
        MigrationReport {
            migrated: 1,
            failed: 1
        }
    );
    assert!(WhitelistRepository::new(&store).load(1).await?.contains("10"));

    Ok(())
}

/// Tests migrating a root directory that does not exist yet.
///
/// Expected: Ok(MigrationReport::default())
#[tokio::test]
async fn missing_root_is_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = ConfigStore::new(test.root().join("not-created"));

    let report = migrate_legacy_documents(&store).await?;

    assert_eq!(report, MigrationReport::default());

    Ok(())
}
