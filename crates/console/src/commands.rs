//! Console command syntax.
//!
//! Arguments are separated by whitespace; wrap an argument in double quotes to
//! include spaces (`add-outsourced "Hex bolt" 0.25 40 10 100 "Acme Fasteners"`).

use std::collections::VecDeque;
use std::str::FromStr;

use thiserror::Error;

use stockroom_core::{DomainError, Price, StockLevels};
use stockroom_inventory::{Part, PartId, PartSource};
use stockroom_products::{Product, ProductId};

pub const HELP: &str = "\
commands:
  parts | products                     show the tables
  find-part <id or name>               search parts (empty restores the list)
  find-product <id or name>            search products
  show-product <id>                    product details with its parts
  add-inhouse <name> <price> <stock> <min> <max> <machine-id>
  add-outsourced <name> <price> <stock> <min> <max> <company>
  modify-inhouse <id> <name> <price> <stock> <min> <max> <machine-id>
  modify-outsourced <id> <name> <price> <stock> <min> <max> <company>
  add-product <name> <price> <stock> <min> <max> [part-id ...]
  modify-product <id> <name> <price> <stock> <min> <max>
  associate <product-id> <part-id>
  dissociate <product-id> <part-id>
  delete-part <id> | delete-product <id>
  clear                                drop search results
  export                               print the inventory as JSON
  help | exit";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),

    #[error("unterminated quote")]
    UnterminatedQuote,

    #[error("{command}: missing {what}")]
    Missing {
        command: &'static str,
        what: &'static str,
    },

    #[error("{command}: unexpected argument {arg:?}")]
    Unexpected { command: &'static str, arg: String },

    #[error("{command}: {what} must be a non-negative whole number, got {value:?}")]
    InvalidNumber {
        command: &'static str,
        what: &'static str,
        value: String,
    },

    #[error("{command}: {source}")]
    Invalid {
        command: &'static str,
        #[source]
        source: DomainError,
    },
}

/// Form fields shared by both part variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartFields {
    pub name: String,
    pub price: Price,
    pub stock: StockLevels,
    pub source: PartSource,
}

impl PartFields {
    pub fn into_part(self, id: PartId) -> Part {
        Part::new(id, self.name, self.price, self.stock, self.source)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub price: Price,
    pub stock: StockLevels,
}

impl ProductFields {
    pub fn into_product(self, id: ProductId) -> Product {
        Product::new(id, self.name, self.price, self.stock)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListParts,
    ListProducts,
    FindPart(String),
    FindProduct(String),
    ShowProduct(ProductId),
    AddPart(PartFields),
    ModifyPart(PartId, PartFields),
    AddProduct {
        fields: ProductFields,
        parts: Vec<PartId>,
    },
    ModifyProduct(ProductId, ProductFields),
    Associate {
        product_id: ProductId,
        part_id: PartId,
    },
    Dissociate {
        product_id: ProductId,
        part_id: PartId,
    },
    DeletePart(PartId),
    DeleteProduct(ProductId),
    ClearSearch,
    Export,
    Help,
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        // Search queries are taken verbatim so ids and names read the same way
        // they would in a search box.
        match name {
            "find-part" => return Ok(Command::FindPart(rest.to_string())),
            "find-product" => return Ok(Command::FindProduct(rest.to_string())),
            _ => {}
        }

        let command = command_name(name)?;
        let mut args = Args::new(command, tokenize(rest)?);

        let parsed = match command {
            "parts" => Command::ListParts,
            "products" => Command::ListProducts,
            "show-product" => Command::ShowProduct(args.id("product id")?),
            "add-inhouse" => Command::AddPart(args.part_fields(Variant::InHouse)?),
            "add-outsourced" => Command::AddPart(args.part_fields(Variant::Outsourced)?),
            "modify-inhouse" => {
                let id = args.id("part id")?;
                Command::ModifyPart(id, args.part_fields(Variant::InHouse)?)
            }
            "modify-outsourced" => {
                let id = args.id("part id")?;
                Command::ModifyPart(id, args.part_fields(Variant::Outsourced)?)
            }
            "add-product" => {
                let fields = args.product_fields()?;
                let mut parts = Vec::new();
                while args.has_more() {
                    parts.push(args.id("part id")?);
                }
                Command::AddProduct { fields, parts }
            }
            "modify-product" => {
                let id = args.id("product id")?;
                Command::ModifyProduct(id, args.product_fields()?)
            }
            "associate" => Command::Associate {
                product_id: args.id("product id")?,
                part_id: args.id("part id")?,
            },
            "dissociate" => Command::Dissociate {
                product_id: args.id("product id")?,
                part_id: args.id("part id")?,
            },
            "delete-part" => Command::DeletePart(args.id("part id")?),
            "delete-product" => Command::DeleteProduct(args.id("product id")?),
            "clear" => Command::ClearSearch,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        args.finish()?;
        Ok(parsed)
    }
}

/// Map user input to the `'static` spelling used in error messages.
fn command_name(name: &str) -> Result<&'static str, CommandError> {
    const NAMES: &[&str] = &[
        "parts",
        "products",
        "show-product",
        "add-inhouse",
        "add-outsourced",
        "modify-inhouse",
        "modify-outsourced",
        "add-product",
        "modify-product",
        "associate",
        "dissociate",
        "delete-part",
        "delete-product",
        "clear",
        "export",
        "help",
        "?",
        "exit",
        "quit",
    ];
    NAMES
        .iter()
        .copied()
        .find(|known| *known == name)
        .ok_or_else(|| CommandError::Unknown(name.to_string()))
}

fn tokenize(text: &str) -> Result<VecDeque<String>, CommandError> {
    let mut tokens = VecDeque::new();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        let mut token = String::new();
        if c == '"' {
            chars.next();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some(c) => token.push(c),
                    None => return Err(CommandError::UnterminatedQuote),
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
        }
        tokens.push_back(token);
    }
    Ok(tokens)
}

#[derive(Clone, Copy)]
enum Variant {
    InHouse,
    Outsourced,
}

struct Args {
    command: &'static str,
    tokens: VecDeque<String>,
}

impl Args {
    fn new(command: &'static str, tokens: VecDeque<String>) -> Self {
        Self { command, tokens }
    }

    fn has_more(&self) -> bool {
        !self.tokens.is_empty()
    }

    fn next(&mut self, what: &'static str) -> Result<String, CommandError> {
        self.tokens.pop_front().ok_or(CommandError::Missing {
            command: self.command,
            what,
        })
    }

    fn invalid(&self, source: DomainError) -> CommandError {
        CommandError::Invalid {
            command: self.command,
            source,
        }
    }

    fn id<T>(&mut self, what: &'static str) -> Result<T, CommandError>
    where
        T: FromStr<Err = DomainError>,
    {
        let raw = self.next(what)?;
        raw.parse().map_err(|err| self.invalid(err))
    }

    fn number(&mut self, what: &'static str) -> Result<u32, CommandError> {
        let raw = self.next(what)?;
        raw.parse().map_err(|_| CommandError::InvalidNumber {
            command: self.command,
            what,
            value: raw,
        })
    }

    fn price(&mut self) -> Result<Price, CommandError> {
        let raw = self.next("price")?;
        Price::parse(&raw).map_err(|err| self.invalid(err))
    }

    fn stock(&mut self) -> Result<StockLevels, CommandError> {
        let on_hand = self.number("stock")?;
        let min = self.number("min")?;
        let max = self.number("max")?;
        StockLevels::new(on_hand, min, max).map_err(|err| self.invalid(err))
    }

    fn product_fields(&mut self) -> Result<ProductFields, CommandError> {
        Ok(ProductFields {
            name: self.next("name")?,
            price: self.price()?,
            stock: self.stock()?,
        })
    }

    fn part_fields(&mut self, variant: Variant) -> Result<PartFields, CommandError> {
        let name = self.next("name")?;
        let price = self.price()?;
        let stock = self.stock()?;
        let source = match variant {
            Variant::InHouse => PartSource::InHouse {
                machine_id: self.number("machine id")?,
            },
            Variant::Outsourced => PartSource::Outsourced {
                company_name: self.next("company name")?,
            },
        };
        Ok(PartFields {
            name,
            price,
            stock,
            source,
        })
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.tokens.pop_front() {
            Some(arg) => Err(CommandError::Unexpected {
                command: self.command,
                arg,
            }),
            None => Ok(()),
        }
    }
}
