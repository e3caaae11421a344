pub mod accept_ownership;
pub mod config;
pub mod helpers;
pub mod program_upgrade;
pub mod signers_update;
pub mod validators;
