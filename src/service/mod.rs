pub mod moderation;
pub mod prompt;
pub mod settings;
pub mod whitelist;
