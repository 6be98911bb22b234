use super::*;

/// Tests adding an ID that is already whitelisted.
///
/// Expected: Ok(false) and the document still ["10", "20"]
#[tokio::test]
async fn adding_existing_member_does_not_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_whitelist(123, json!(["10", "20"]))
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = WhitelistRepository::new(&store);

    let added = repo.update(123, |whitelist| whitelist.insert("20")).await?;

    assert!(!added);
    assert_eq!(
        test.read_whitelist_document(123).await.unwrap(),
        Some(json!(["10", "20"]))
    );

    Ok(())
}

/// Tests removing a whitelisted ID.
///
/// Expected: Ok(true) and the ID gone from disk
#[tokio::test]
async fn removes_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_whitelist(123, json!(["10", "20"]))
        .build()
        .await
        .unwrap();
    let store = ConfigStore::new(test.root());
    let repo = WhitelistRepository::new(&store);

    let removed = repo.update(123, |whitelist| whitelist.remove("10")).await?;

    assert!(removed);
    assert_eq!(
        test.read_whitelist_document(123).await.unwrap(),
        Some(json!(["20"]))
    );

    Ok(())
}

/// Tests concurrent additions to the same guild's whitelist.
///
/// Expected: Ok with every added ID present exactly once
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_additions_are_all_kept() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = ConfigStore::new(test.root());

    let mut handles = Vec::new();
    for i in 0..16u64 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            WhitelistRepository::new(&store)
                .update(123, move |whitelist| whitelist.insert(i.to_string()))
                .await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap()?);
    }

    let whitelist = WhitelistRepository::new(&store).load(123).await?;
    assert_eq!(whitelist.len(), 16);
    for i in 0..16u64 {
        assert!(whitelist.contains_id(i));
    }

    Ok(())
}
