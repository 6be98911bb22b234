use super::*;

/// Tests loading the whitelist for a guild with no document.
///
/// Expected: Ok(empty whitelist) and `[]` persisted
#[tokio::test]
async fn creates_empty_document_when_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = ConfigStore::new(test.root());
    let repo = WhitelistRepository::new(&store);

    let whitelist = repo.load(123).await?;

    assert!(whitelist.is_empty());
    assert_eq!(
        test.read_whitelist_document(123).await.unwrap(),
        Some(json!([]))
    );

    Ok(())
}

/// Tests loading an existing whitelist document.
///
/// Expected: Ok with entries in stored order
#[tokio::test]
async fn returns_stored_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_whitelist(123, json!(["10", "20"]))
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = WhitelistRepository::new(&store);

    let whitelist = repo.load(123).await?;

    assert_eq!(whitelist.iter().collect::<Vec<_>>(), vec!["10", "20"]);
    assert!(whitelist.contains_id(20));

    Ok(())
}

/// Tests that a whitelist that is not an array of strings is reported as corrupt.
///
/// Expected: Err(StoreError::Corrupt)
#[tokio::test]
async fn fails_on_corrupt_document() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_whitelist(123, json!({ "members": ["10"] }))
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = WhitelistRepository::new(&store);

    let result = repo.load(123).await;

    assert!(matches!(result, Err(StoreError::Corrupt { .. })));

    Ok(())
}

/// Tests that the whitelist is kept separate per guild.
///
/// Expected: Ok with guild 2's whitelist empty
#[tokio::test]
async fn isolated_per_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_whitelist(1, json!(["10"]))
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = WhitelistRepository::new(&store);

    assert_eq!(repo.load(1).await?.len(), 1);
    assert_eq!(repo.load(2).await?, Whitelist::default());

    Ok(())
}
