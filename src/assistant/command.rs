//! Assistant command grammar.
//!
//! One command per line: a command word followed by whitespace separated
//! arguments. Command words are case-insensitive; arguments are kept as typed.

use crate::error::{CommandError, CommandResult};
use std::str::FromStr;

/// A parsed assistant command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
}

/// Take exactly `N` arguments or report the command's usage.
fn take<const N: usize>(
    args: &[&str],
    command: &'static str,
    usage: &'static str,
) -> CommandResult<[String; N]> {
    if args.len() != N {
        return Err(CommandError::WrongArguments { command, usage });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or(CommandError::Empty)?.to_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match word.as_str() {
            "hello" => {
                take::<0>(&args, "hello", "hello")?;
                Command::Hello
            }
            "add" => {
                let [name, phone] = take(&args, "add", "add <name> <phone>")?;
                Command::Add { name, phone }
            }
            "change" => {
                let [name, old, new] =
                    take(&args, "change", "change <name> <old phone> <new phone>")?;
                Command::Change { name, old, new }
            }
            "phone" => {
                let [name] = take(&args, "phone", "phone <name>")?;
                Command::Phone { name }
            }
            "remove-phone" => {
                let [name, phone] =
                    take(&args, "remove-phone", "remove-phone <name> <phone>")?;
                Command::RemovePhone { name, phone }
            }
            "delete" => {
                let [name] = take(&args, "delete", "delete <name>")?;
                Command::Delete { name }
            }
            "all" => {
                take::<0>(&args, "all", "all")?;
                Command::All
            }
            "add-birthday" => {
                let [name, date] =
                    take(&args, "add-birthday", "add-birthday <name> <DD.MM.YYYY>")?;
                Command::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = take(&args, "show-birthday", "show-birthday <name>")?;
                Command::ShowBirthday { name }
            }
            "birthdays" => {
                take::<0>(&args, "birthdays", "birthdays")?;
                Command::Birthdays
            }
            "close" | "exit" => Command::Exit,
            _ => return Err(CommandError::Unknown(word)),
        };

        Ok(command)
    }
}
