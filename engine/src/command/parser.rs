use crate::command::{Command, ListFormat};
use crate::error::{Error, Result};

pub fn parse_command(line: &str) -> Result<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let Some((keyword, args)) = tokens.split_first() else {
        return Err(Error::Parse("empty command".to_string()));
    };

    match keyword.to_ascii_lowercase().as_str() {
        "add" => {
            // The name may contain spaces, so id and price are read from the end.
            if args.len() < 3 {
                return Err(Error::Parse("usage: add <name> <id> <price>".to_string()));
            }
            let (name, rest) = args.split_at(args.len() - 2);
            Ok(Command::Add {
                name: name.join(" "),
                id: parse_id(rest[0])?,
                price: parse_price(rest[1])?,
            })
        }

        "find" => match args {
            [id] => Ok(Command::Find { id: parse_id(id)? }),
            _ => Err(Error::Parse("usage: find <id>".to_string())),
        },

        "remove" => match args {
            [by, id] if by.eq_ignore_ascii_case("id") => {
                Ok(Command::RemoveById { id: parse_id(id)? })
            }
            [by, name @ ..] if by.eq_ignore_ascii_case("name") && !name.is_empty() => {
                Ok(Command::RemoveByName {
                    name: name.join(" "),
                })
            }
            _ => Err(Error::Parse(
                "usage: remove id <id> | remove name <name>".to_string(),
            )),
        },

        "rename" => match args {
            [id, name @ ..] if !name.is_empty() => Ok(Command::Rename {
                id: parse_id(id)?,
                name: name.join(" "),
            }),
            _ => Err(Error::Parse("usage: rename <id> <new name>".to_string())),
        },

        "reprice" => match args {
            [id, price] => Ok(Command::Reprice {
                id: parse_id(id)?,
                price: parse_price(price)?,
            }),
            _ => Err(Error::Parse("usage: reprice <id> <price>".to_string())),
        },

        "list" => {
            let format = match args {
                [] => ListFormat::Table,
                [f] if f.eq_ignore_ascii_case("table") => ListFormat::Table,
                [f] if f.eq_ignore_ascii_case("json") => ListFormat::Json,
                _ => return Err(Error::Parse("usage: list [table|json]".to_string())),
            };
            Ok(Command::List { format })
        }

        "clear" if args.is_empty() => Ok(Command::Clear),
        "clear" => Err(Error::Parse("usage: clear".to_string())),

        other => Err(Error::Unsupported(other.to_string())),
    }
}

fn parse_id(token: &str) -> Result<i32> {
    token
        .parse::<i32>()
        .map_err(|_| Error::Parse(format!("Invalid id: {}", token)))
}

fn parse_price(token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(Error::Parse(format!("Invalid price: {}", token))),
    }
}
