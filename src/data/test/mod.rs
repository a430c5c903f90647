mod account_link;
mod settings;
