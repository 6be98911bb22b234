mod migration;
mod settings;
mod whitelist;
