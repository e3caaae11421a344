pub mod accept_ownership;
pub mod io;
pub mod program_upgrade;
pub mod signers_update;
