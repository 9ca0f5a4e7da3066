//! # Store Menu
//!
//! The interactive menu loop: lists the catalog, shows stock totals, and
//! builds carts line by line before submitting them to the core.
//!
//! ## Cart Building Flow
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      Make an Order                         │
//! │                                                            │
//! │  show numbered listing of active products                  │
//! │       │                                                    │
//! │       ▼                                                    │
//! │  prompt product # ── empty input? ──► submit cart          │
//! │       │                                                    │
//! │       ▼                                                    │
//! │  prompt amount                                             │
//! │       ├── not a number / not positive ──► re-prompt        │
//! │       ├── above a capped product's max ──► re-prompt       │
//! │       └── ok ──► push order line                           │
//! │                                                            │
//! │  Store::order(lines) ──► print total or the core's error   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The per-order cap for capped products is enforced HERE, during line
//! entry; `Product::buy` never checks it. All other failures surface from
//! the core when the cart is submitted.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use shopfront_core::{OrderLine, Store};

/// Runs the menu loop until the user quits or input ends.
pub fn run(store: &mut Store) {
    loop {
        println!();
        println!("   Store Menu");
        println!("   ----------");
        println!("1. List all products in store");
        println!("2. Show total amount in store");
        println!("3. Make an order");
        println!("4. Quit");

        let Some(choice) = prompt("Please choose a number: ") else {
            break;
        };
        debug!(%choice, "menu choice");

        match choice.as_str() {
            "1" => {
                println!("------");
                display_all_products(store);
                println!("------");
            }
            "2" => println!("Total of {} items in store", store.total_quantity()),
            "3" => make_order(store),
            "4" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please choose a number between 1 and 4."),
        }
    }
}

/// One row of the numbered listing: what the cart builder needs to turn a
/// menu number back into an order line.
struct ListingEntry {
    id: String,
    max_per_order: Option<i64>,
}

/// Prints the active products numbered from 1 and returns the row metadata.
fn display_all_products(store: &Store) -> Vec<ListingEntry> {
    let mut entries = Vec::new();
    for (i, product) in store.active_products().iter().enumerate() {
        println!("{}. {}", i + 1, product);
        entries.push(ListingEntry {
            id: product.id().to_string(),
            max_per_order: product.max_per_order(),
        });
    }
    entries
}

/// Builds a cart interactively and submits it.
fn make_order(store: &mut Store) {
    println!("------");
    let listing = display_all_products(store);
    println!("------");

    let mut lines: Vec<OrderLine> = Vec::new();
    loop {
        println!("When you want to finish order, enter empty text.");
        let Some(raw_number) = prompt("Which product # do you want? ") else {
            break;
        };
        if raw_number.is_empty() {
            break;
        }

        let index = match parse_product_number(&raw_number, listing.len()) {
            Ok(index) => index,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        let Some(raw_amount) = prompt("What amount do you want? ") else {
            break;
        };
        let Ok(amount) = raw_amount.parse::<i64>() else {
            println!("Invalid input.");
            continue;
        };
        if let Err(message) = check_amount(listing[index].max_per_order, amount) {
            println!("{message}");
            continue;
        }

        lines.push(OrderLine::new(&listing[index].id, amount));
        println!("Product added to list!");
    }

    match store.order(&lines) {
        Ok(total) => {
            info!(%total, lines = lines.len(), "order completed");
            println!("********");
            println!("Order made! Total payment: {total}");
        }
        Err(error) => println!("Error while making order! {error}"),
    }
}

/// Parses a 1-based menu number into a 0-based listing index.
fn parse_product_number(raw: &str, listing_len: usize) -> Result<usize, String> {
    let number: usize = raw.parse().map_err(|_| "Invalid input.".to_string())?;
    if number < 1 || number > listing_len {
        return Err("Invalid product number.".to_string());
    }
    Ok(number - 1)
}

/// Pre-flight amount check for one order line.
///
/// Rejects non-positive amounts and amounts above a capped product's
/// per-order maximum. This is the cart-construction-time cap enforcement;
/// by the time `Store::order` runs, caps are no longer anyone's concern.
fn check_amount(max_per_order: Option<i64>, amount: i64) -> Result<(), String> {
    if amount <= 0 {
        return Err("Invalid amount.".to_string());
    }

    if let Some(maximum) = max_per_order {
        if amount > maximum {
            return Err(format!(
                "Error: Quantity exceeds maximum allowed ({maximum})."
            ));
        }
    }

    Ok(())
}

/// Prints a prompt and reads one trimmed line from stdin.
///
/// Returns `None` on end of input so the caller can wind down instead of
/// spinning on a closed pipe.
fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok()?;

    let mut buffer = String::new();
    match io::stdin().lock().read_line(&mut buffer) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buffer.trim().to_string()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
