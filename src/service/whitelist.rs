use crate::{
    data::{ConfigStore, WhitelistRepository},
    error::AppError,
    model::whitelist::{Whitelist, WhitelistPage},
};

pub struct WhitelistService<'a> {
    store: &'a ConfigStore,
}

impl<'a> WhitelistService<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// Exempts a member from voice moderation
    /// Returns false if the member was already whitelisted
    pub async fn add(&self, guild_id: u64, member_id: u64) -> Result<bool, AppError> {
        let added = WhitelistRepository::new(self.store)
            .update(guild_id, |whitelist| whitelist.insert(member_id.to_string()))
            .await?;

        if added {
            tracing::info!("Whitelisted member {} in guild {}", member_id, guild_id);
        }

        Ok(added)
    }

    /// Removes a member's exemption
    /// Returns false if the member was not whitelisted
    pub async fn remove(&self, guild_id: u64, member_id: u64) -> Result<bool, AppError> {
        let removed = WhitelistRepository::new(self.store)
            .update(guild_id, |whitelist| whitelist.remove(&member_id.to_string()))
            .await?;

        if removed {
            tracing::info!(
                "Removed member {} from whitelist in guild {}",
                member_id,
                guild_id
            );
        }

        Ok(removed)
    }

    /// Gets the full whitelist for a guild
    pub async fn get(&self, guild_id: u64) -> Result<Whitelist, AppError> {
        Ok(WhitelistRepository::new(self.store).load(guild_id).await?)
    }

    /// Gets one page of the whitelist, clamping out-of-range pages to the last one
    pub async fn get_page(&self, guild_id: u64, page: usize) -> Result<WhitelistPage, AppError> {
        Ok(self.get(guild_id).await?.page(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_utils::{builder::TestBuilder, factory::helpers::next_id};

    /// Tests adding a member twice.
    ///
    /// Expected: true then false, stored once
    #[tokio::test]
    async fn add_is_idempotent() -> Result<(), AppError> {
        let test = TestBuilder::new().build().await.unwrap();
        let store = ConfigStore::new(test.root());
        let service = WhitelistService::new(&store);
        let guild_id = next_id();
        let member_id = next_id();

        assert!(service.add(guild_id, member_id).await?);
        assert!(!service.add(guild_id, member_id).await?);

        assert_eq!(
            test.read_whitelist_document(guild_id).await.unwrap(),
            Some(json!([member_id.to_string()]))
        );

        Ok(())
    }

    /// Tests removing a member who is not whitelisted.
    ///
    /// Expected: false and the whitelist unchanged
    #[tokio::test]
    async fn remove_absent_member() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_whitelist(123, json!(["10"]))
            .build()
            .await
            .unwrap();
        let store = ConfigStore::new(test.root());
        let service = WhitelistService::new(&store);

        assert!(!service.remove(123, 20).await?);
        assert!(service.remove(123, 10).await?);
        assert!(service.get(123).await?.is_empty());

        Ok(())
    }

    /// Tests fetching the second page of a 12-member whitelist.
    ///
    /// Expected: the last two members on page index 1 of 2
    #[tokio::test]
    async fn get_page_returns_requested_slice() -> Result<(), AppError> {
        let members: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
        let test = TestBuilder::new()
            .with_whitelist(123, json!(members))
            .build()
            .await
            .unwrap();
        let store = ConfigStore::new(test.root());

        let page = WhitelistService::new(&store).get_page(123, 1).await?;

        assert_eq!(page.members, vec!["11", "12"]);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total, 12);

        Ok(())
    }
}
