//! Single sign-on provider adapters.

pub mod google_account;

pub use google_account::GoogleAccount;
