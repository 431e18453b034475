//! Contacts application handlers.

mod add_contact;
mod delete_contact;
mod list_contacts;

pub use add_contact::{AddContactCommand, AddContactHandler, AddContactResult};
pub use delete_contact::{DeleteContactCommand, DeleteContactHandler, DeleteContactResult};
pub use list_contacts::{ListContactsHandler, ListContactsQuery};
