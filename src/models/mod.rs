pub mod account;
pub mod message;

pub use account::{EmailAccount, EmailAccountRow, NewEmailAccount};
pub use message::{EmailMessage, UpdateEmailMessage};
