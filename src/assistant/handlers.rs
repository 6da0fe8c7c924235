//! Command handlers for the address book assistant.

use super::command::Command;
use crate::book::AddressBook;
use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use crate::models::ContactRecord;
use chrono::NaiveDate;

/// Outcome of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user
    Message(String),

    /// The session should save and end
    Exit,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Reply::Message(text.into())
    }
}

/// Applies assistant commands to an address book it owns.
#[derive(Debug, Clone)]
pub struct Assistant {
    book: AddressBook,
    birthday_window_days: i64,
}

impl Assistant {
    pub fn new(book: AddressBook, birthday_window_days: i64) -> Self {
        Self {
            book,
            birthday_window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Handle `command`, using `today` as the reference date for birthday lookups.
    pub fn handle(&mut self, command: Command, today: NaiveDate) -> BookResult<Reply> {
        let reply = match command {
            Command::Hello => Reply::message("How can I help you?"),
            Command::Add { name, phone } => self.add(&name, &phone)?,
            Command::Change { name, old, new } => {
                self.record_mut(&name)?.edit_phone(&old, &new)?;
                Reply::message(format!("Phone number for {} updated to {}.", name, new))
            }
            Command::Phone { name } => {
                let record = self.record(&name)?;
                if record.phones().is_empty() {
                    Reply::message(format!("{} has no phone numbers.", name))
                } else {
                    Reply::message(format!("{}'s phones: {}", name, join_phones(record)))
                }
            }
            Command::RemovePhone { name, phone } => {
                if self.record_mut(&name)?.remove_phone(&phone) {
                    Reply::message(format!("Phone number {} removed from {}.", phone, name))
                } else {
                    return Err(BookError::PhoneNotFound { name, phone });
                }
            }
            Command::Delete { name } => {
                if self.book.delete(&name) {
                    Reply::message(format!("Contact {} deleted.", name))
                } else {
                    return Err(BookError::ContactNotFound(name));
                }
            }
            Command::All => {
                if self.book.is_empty() {
                    Reply::message("The address book is empty.")
                } else {
                    let lines: Vec<String> = self.book.iter().map(ContactRecord::describe).collect();
                    Reply::message(lines.join("\n"))
                }
            }
            Command::AddBirthday { name, date } => {
                self.record_mut(&name)?.set_birthday(&date)?;
                Reply::message(format!("Birthday {} added for {}.", date, name))
            }
            Command::ShowBirthday { name } => match self.record(&name)?.birthday() {
                Some(birthday) => Reply::message(format!("{}'s birthday: {}", name, birthday)),
                None => Reply::message(format!("No birthday set for {}.", name)),
            },
            Command::Birthdays => {
                let upcoming = self.book.upcoming_birthdays(self.birthday_window_days, today);
                if upcoming.is_empty() {
                    Reply::message("No upcoming birthdays.")
                } else {
                    let lines: Vec<String> = upcoming
                        .iter()
                        .map(|u| format!("{}: {}", u.name, u.date.format(BIRTHDAY_FORMAT)))
                        .collect();
                    Reply::message(lines.join("\n"))
                }
            }
            Command::Exit => Reply::Exit,
        };

        Ok(reply)
    }

    fn add(&mut self, name: &str, phone: &str) -> BookResult<Reply> {
        // A rejected phone must not leave an empty contact behind.
        let phone = PhoneNumber::new(phone)?;

        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone.as_str())?;
            return Ok(Reply::message(format!("Phone {} added to {}.", phone, name)));
        }

        let mut record = ContactRecord::new(name)?;
        record.add_phone(phone.as_str())?;
        self.book.add(record);
        Ok(Reply::message(format!(
            "Contact {} with phone {} added.",
            name, phone
        )))
    }

    fn record(&self, name: &str) -> BookResult<&ContactRecord> {
        self.book
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn record_mut(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        self.book
            .find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }
}

fn join_phones(record: &ContactRecord) -> String {
    record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
