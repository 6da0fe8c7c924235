//! The address book: a name-keyed, insertion-ordered collection of contacts.

mod address_book;

pub use address_book::{AddressBook, UpcomingBirthday};
