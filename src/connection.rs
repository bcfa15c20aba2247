//! Seam to the network layer.
//!
//! The form core never talks to a server itself: hosts inject whatever
//! transport they use, and tests substitute a fake. Both operations resolve
//! on the host's event loop; dropping the future cancels the request as far
//! as this crate is concerned.

use std::future::Future;

use crate::{
    domain::{AccountRecord, AccountUpdate},
    Result,
};

/// Read and write operations on the signed-in user's account.
#[cfg_attr(not(target_arch = "wasm32"), trait_variant::make(Send))]
pub trait Connection {
    /// Fetch the current account record.
    fn get_account(&self) -> impl Future<Output = Result<AccountRecord>>;

    /// Apply an account update.
    fn update_account(&self, update: AccountUpdate) -> impl Future<Output = Result<()>>;
}
