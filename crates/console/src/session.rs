//! Read-eval loop tying commands, the main screen and the terminal together.

use std::io::{BufRead, Write};

use anyhow::Context;
use serde::Serialize;

use stockroom_inventory::{Part, PartSource};
use stockroom_products::Product;

use crate::commands::{Command, HELP};
use crate::dialogs::{Dialogs, Terminal};
use crate::screen::MainScreen;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Serialize)]
struct Export<'a> {
    parts: &'a [Part],
    products: &'a [Product],
}

/// Run until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    screen: &mut MainScreen,
    terminal: &mut Terminal<R, W>,
    prompt: &str,
) -> anyhow::Result<()> {
    loop {
        terminal.prompt(prompt).context("failed to write prompt")?;
        let Some(line) = terminal.read_line().context("failed to read command")? else {
            tracing::debug!("end of input");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                terminal.warn("Invalid Command", &err.to_string());
                continue;
            }
        };
        if execute(screen, terminal, command)? == Flow::Exit {
            break;
        }
        screen.refresh();
    }
    Ok(())
}

/// Carry out one command. Only output failures are errors; everything the
/// user did wrong ends up in a warning dialog.
pub fn execute<R: BufRead, W: Write>(
    screen: &mut MainScreen,
    terminal: &mut Terminal<R, W>,
    command: Command,
) -> anyhow::Result<Flow> {
    match command {
        Command::ListParts => write_parts(terminal.out(), screen.visible_parts())?,
        Command::ListProducts => write_products(terminal.out(), screen.visible_products())?,
        Command::FindPart(query) => {
            screen.search_parts(terminal, &query);
            write_parts(terminal.out(), screen.visible_parts())?;
        }
        Command::FindProduct(query) => {
            screen.search_products(terminal, &query);
            write_products(terminal.out(), screen.visible_products())?;
        }
        Command::ShowProduct(product_id) => {
            match (
                screen.inventory().lookup_product(product_id),
                screen.inventory().associated_parts(product_id),
            ) {
                (Some(product), Some(parts)) => {
                    let out = terminal.out();
                    write_products(&mut *out, std::slice::from_ref(product))?;
                    writeln!(out, "associated parts:")?;
                    let parts: Vec<Part> = parts.into_iter().cloned().collect();
                    write_parts(out, &parts)?;
                }
                _ => terminal.warn("No Product Selected", &format!("No product with id {product_id} exists.")),
            }
        }
        Command::AddPart(fields) => {
            let id = screen.next_part_id();
            if screen.add_part(terminal, fields.into_part(id)) {
                writeln!(terminal.out(), "added part {id}")?;
            }
        }
        Command::ModifyPart(id, fields) => {
            if screen.modify_part(terminal, id, fields.into_part(id)) {
                writeln!(terminal.out(), "modified part {id}")?;
            }
        }
        Command::AddProduct { fields, parts } => {
            let id = screen.next_product_id();
            let mut product = fields.into_product(id);
            let mut missing = Vec::new();
            for part_id in parts {
                match screen.inventory().lookup_part(part_id) {
                    Some(part) => product.add_associated_part(part),
                    None => missing.push(part_id.to_string()),
                }
            }
            if !missing.is_empty() {
                terminal.warn(
                    "Invalid Product",
                    &format!("Unknown part id(s): {}.", missing.join(", ")),
                );
            } else if screen.add_product(terminal, product) {
                writeln!(terminal.out(), "added product {id}")?;
            }
        }
        Command::ModifyProduct(id, fields) => {
            // The form edits the scalar fields; associations carry over.
            let current = screen.inventory().lookup_product(id).cloned();
            let mut product = fields.into_product(id);
            if let Some(current) = current {
                for part_id in current.associated_part_ids() {
                    product.add_associated_part_id(*part_id);
                }
            }
            if screen.modify_product(terminal, id, product) {
                writeln!(terminal.out(), "modified product {id}")?;
            }
        }
        Command::Associate {
            product_id,
            part_id,
        } => {
            if screen.associate_part(terminal, product_id, part_id) {
                writeln!(terminal.out(), "part {part_id} added to product {product_id}")?;
            }
        }
        Command::Dissociate {
            product_id,
            part_id,
        } => {
            if screen.dissociate_part(terminal, product_id, part_id) {
                writeln!(terminal.out(), "part {part_id} removed from product {product_id}")?;
            }
        }
        Command::DeletePart(id) => {
            if screen.delete_part(terminal, Some(id)) {
                writeln!(terminal.out(), "deleted part {id}")?;
            }
        }
        Command::DeleteProduct(id) => {
            if screen.delete_product(terminal, Some(id)) {
                writeln!(terminal.out(), "deleted product {id}")?;
            }
        }
        Command::ClearSearch => screen.clear_searches(),
        Command::Export => {
            let export = Export {
                parts: screen.inventory().all_parts(),
                products: screen.inventory().all_products(),
            };
            let json = serde_json::to_string_pretty(&export).context("failed to serialize inventory")?;
            writeln!(terminal.out(), "{json}")?;
        }
        Command::Help => writeln!(terminal.out(), "{HELP}")?,
        Command::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

fn write_parts(out: &mut impl Write, parts: &[Part]) -> std::io::Result<()> {
    writeln!(
        out,
        "{:>6}  {:<24} {:>7} {:>10}  {}",
        "ID", "Name", "Stock", "Price", "Source"
    )?;
    for part in parts {
        let source = match part.source() {
            PartSource::InHouse { machine_id } => format!("machine {machine_id}"),
            PartSource::Outsourced { company_name } => company_name.clone(),
        };
        writeln!(
            out,
            "{:>6}  {:<24} {:>7} {:>10}  {}",
            part.id_typed(),
            part.name(),
            part.stock().on_hand(),
            part.price().to_string(),
            source
        )?;
    }
    Ok(())
}

fn write_products(out: &mut impl Write, products: &[Product]) -> std::io::Result<()> {
    writeln!(
        out,
        "{:>6}  {:<24} {:>7} {:>10}  {}",
        "ID", "Name", "Stock", "Price", "Parts"
    )?;
    for product in products {
        writeln!(
            out,
            "{:>6}  {:<24} {:>7} {:>10}  {}",
            product.id_typed(),
            product.name(),
            product.stock().on_hand(),
            product.price().to_string(),
            product.associated_part_ids().len()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stockroom_inventory::PartId;
    use stockroom_products::ProductId;
    use stockroom_registry::Inventory;

    fn run_script(script: &str) -> (MainScreen, String) {
        let mut screen = MainScreen::new(Inventory::with_demo_data().unwrap());
        let mut terminal = Terminal::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run(&mut screen, &mut terminal, "> ").unwrap();
        let output = String::from_utf8(terminal.into_output()).unwrap();
        (screen, output)
    }

    #[test]
    fn search_shows_matching_rows_only() {
        let (_, output) = run_script("find-part outpart\nexit\n");
        assert!(output.contains("outPart1"));
        assert!(output.contains("outPart2"));
        assert!(!output.contains("inPart1"));
    }

    #[test]
    fn add_part_assigns_next_id() {
        let (screen, output) = run_script("add-inhouse \"Drive shaft\" 12.50 4 1 8 3\n");
        assert!(output.contains("added part 6"));
        let part = screen.inventory().lookup_part(PartId::new(6)).unwrap();
        assert_eq!(part.name(), "Drive shaft");
        assert_eq!(part.machine_id(), Some(3));
    }

    #[test]
    fn delete_flow_reads_confirmation_from_input() {
        let script = "dissociate 1 1\ny\ndissociate 1 4\ny\ndelete-product 1\ny\nproducts\n";
        let (screen, output) = run_script(script);
        assert!(output.contains("deleted product 1"));
        assert!(screen.inventory().lookup_product(ProductId::new(1)).is_none());
    }

    #[test]
    fn refused_delete_is_reported_as_warning() {
        let (screen, output) = run_script("delete-product 2\nyes\n");
        assert!(output.contains("[Product Not Deleted]"));
        assert!(screen.inventory().lookup_product(ProductId::new(2)).is_some());
    }

    #[test]
    fn add_product_rejects_unknown_parts() {
        let (screen, output) = run_script("add-product Kit 5.00 1 0 2 1 99\n");
        assert!(output.contains("Unknown part id(s): 99."));
        assert_eq!(screen.inventory().all_products().len(), 2);
    }

    #[test]
    fn modify_product_keeps_associations() {
        let (screen, _) = run_script("modify-product 2 Deluxe 15.00 2 1 5\n");
        let product = screen.inventory().lookup_product(ProductId::new(2)).unwrap();
        assert_eq!(product.name(), "Deluxe");
        assert_eq!(product.associated_part_ids(), &[PartId::new(2), PartId::new(5)]);
    }

    #[test]
    fn export_prints_json() {
        let (_, output) = run_script("export\n");
        let start = output.find('{').unwrap();
        let end = output.rfind('}').unwrap();
        let json: serde_json::Value = serde_json::from_str(&output[start..=end]).unwrap();
        assert_eq!(json["parts"].as_array().unwrap().len(), 4);
        assert_eq!(json["products"][0]["associated_parts"], serde_json::json!([1, 4]));
    }

    #[test]
    fn bad_commands_warn_and_continue() {
        let (_, output) = run_script("launch\nparts\n");
        assert!(output.contains("[Invalid Command] unknown command \"launch\""));
        assert!(output.contains("inPart1"));
    }
}
