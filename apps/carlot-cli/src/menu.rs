//! # Interactive Menus
//!
//! The text menus the `carlot` binary runs after a successful load.
//!
//! ## Menu Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Main Menu                                                              │
//! │   1. Valid Records ─────► table of cars in current order                │
//! │   2. Invalid Records ───► error file, line by line                      │
//! │   3. Sort Inventory ────► Sort Menu                                     │
//! │   │                        1 ID  2 Model  3 Quantity  4 Price           │
//! │   │                        5 Return                                     │
//! │   │                        (sorts descending, then prints the table)    │
//! │   4. Search Inventory ──► Search Menu (stays open until Return)         │
//! │   │                        1 ID/Model  2 Price (+-15%)  3 Return        │
//! │   5. Quit program                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An unrecognised selection prints an error and shows the same menu again.
//! End of input at any prompt quits.
//!
//! The menu is generic over its input and output so tests can drive it
//! with an in-memory script.

use std::io::{BufRead, Write};

use anyhow::Result;
use carlot_core::{SortField, PRICE_TOLERANCE};
use carlot_ingest::{IngestResult, Inventory, RejectSink};
use tracing::debug;

use crate::report::{write_car_table, write_invalid_records, write_search_results};

const VALID_TITLE: &str = "VALID ITEMS IN THE INVENTORY";

/// Sort-menu selector that leaves without sorting.
const SORT_RETURN: u8 = 5;

// =============================================================================
// Selections
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainChoice {
    Valid,
    Invalid,
    Sort,
    Search,
    Quit,
}

impl MainChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(MainChoice::Valid),
            2 => Some(MainChoice::Invalid),
            3 => Some(MainChoice::Sort),
            4 => Some(MainChoice::Search),
            5 => Some(MainChoice::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchChoice {
    Text,
    Price,
    Return,
}

impl SearchChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(SearchChoice::Text),
            2 => Some(SearchChoice::Price),
            3 => Some(SearchChoice::Return),
            _ => None,
        }
    }
}

/// What the caller should do after a submenu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Parses a price typed at the search prompt. A leading `$` is allowed.
fn parse_price_query(input: &str) -> Option<f64> {
    let text = input.trim();
    let text = text.strip_prefix('$').unwrap_or(text);
    text.parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}

// =============================================================================
// Menu
// =============================================================================

/// Drives the menus over an [`Inventory`].
pub struct Menu<'a, S, R, W> {
    inventory: &'a mut Inventory<S>,
    input: R,
    out: W,
}

impl<'a, S, R, W> Menu<'a, S, R, W>
where
    S: RejectSink,
    R: BufRead,
    W: Write,
{
    pub fn new(inventory: &'a mut Inventory<S>, input: R, out: W) -> Self {
        Menu {
            inventory,
            input,
            out,
        }
    }

    /// Runs the main menu until the user quits or input ends.
    pub fn run(mut self) -> Result<()> {
        loop {
            self.print_main_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let choice = MainChoice::parse(&line);
            debug!(?choice, "Main menu selection");

            let flow = match choice {
                Some(MainChoice::Valid) => {
                    self.print_valid()?;
                    Flow::Continue
                }
                Some(MainChoice::Invalid) => {
                    self.print_invalid()?;
                    Flow::Continue
                }
                Some(MainChoice::Sort) => self.sort_menu()?,
                Some(MainChoice::Search) => self.search_menu()?,
                Some(MainChoice::Quit) => Flow::Quit,
                None => {
                    writeln!(self.out, "ERROR: Invalid input. Please enter a valid option.")?;
                    writeln!(self.out)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.out, "Terminating Program")?;
        self.out.flush()?;
        Ok(())
    }

    /// Reads one line of input, echoing the newline the terminal would show.
    /// `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        writeln!(self.out)?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Main menu actions
    // -------------------------------------------------------------------------

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.out, "Main Menu:")?;
        writeln!(self.out, "Please select one of the following options:")?;
        writeln!(self.out, "1. Valid Records")?;
        writeln!(self.out, "2. Invalid Records")?;
        writeln!(self.out, "3. Sort Inventory")?;
        writeln!(self.out, "4. Search Inventory")?;
        writeln!(self.out, "5. Quit program")?;
        self.prompt("Selection: ")
    }

    fn print_valid(&mut self) -> Result<()> {
        let cars = self.inventory.list_valid();
        write_car_table(&mut self.out, VALID_TITLE, &cars)?;
        Ok(())
    }

    fn print_invalid(&mut self) -> Result<()> {
        let lines = self
            .inventory
            .error_lines()?
            .collect::<IngestResult<Vec<String>>>()?;
        write_invalid_records(&mut self.out, &lines)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Sort menu
    // -------------------------------------------------------------------------

    fn print_sort_menu(&mut self) -> Result<()> {
        writeln!(self.out, "Sort Menu:")?;
        writeln!(self.out, "Please select one of the following sorting options:")?;
        for (index, field) in SortField::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {field}", index + 1)?;
        }
        writeln!(self.out, "{SORT_RETURN}. Return to Main Menu")?;
        self.prompt("Selection: ")
    }

    fn sort_menu(&mut self) -> Result<Flow> {
        loop {
            self.print_sort_menu()?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };

            let selector = line.trim().parse::<u8>().ok();
            if selector == Some(SORT_RETURN) {
                writeln!(self.out, "Returning to Main Menu")?;
                writeln!(self.out)?;
                return Ok(Flow::Continue);
            }

            match selector.map(SortField::from_selector) {
                Some(Ok(field)) => {
                    writeln!(self.out, "Sorting by {field}")?;
                    writeln!(self.out)?;
                    self.inventory.sort_by(field);
                    self.print_valid()?;
                    return Ok(Flow::Continue);
                }
                _ => {
                    writeln!(
                        self.out,
                        "ERROR: Invalid menu selection. Please enter a valid option."
                    )?;
                    writeln!(self.out)?;
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Search menu
    // -------------------------------------------------------------------------

    fn print_search_menu(&mut self) -> Result<()> {
        writeln!(self.out, "Search Menu:")?;
        writeln!(self.out, "Please select one of the following options:")?;
        writeln!(self.out, "1. Search by ID/Model")?;
        writeln!(
            self.out,
            "2. Search by Price (+-{:.0}%)",
            PRICE_TOLERANCE * 100.0
        )?;
        writeln!(self.out, "3. Return to Main Menu")?;
        self.prompt("Selection: ")
    }

    fn search_menu(&mut self) -> Result<Flow> {
        loop {
            self.print_search_menu()?;
            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };

            let flow = match SearchChoice::parse(&line) {
                Some(SearchChoice::Text) => self.search_text()?,
                Some(SearchChoice::Price) => self.search_price()?,
                Some(SearchChoice::Return) => {
                    writeln!(self.out, "Returning to Main Menu")?;
                    writeln!(self.out)?;
                    return Ok(Flow::Continue);
                }
                None => {
                    writeln!(
                        self.out,
                        "ERROR: Invalid menu selection. Please enter a valid option."
                    )?;
                    writeln!(self.out)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn search_text(&mut self) -> Result<Flow> {
        self.prompt("Enter the Vehicle ID or Model Name: ")?;
        let Some(query) = self.read_line()? else {
            return Ok(Flow::Quit);
        };

        let title = format!("RECORDS CONTAINING '{}'", query.trim().to_uppercase());
        let cars = self.inventory.search_text(&query);
        debug!(query = query.trim(), matches = cars.len(), "Text search");
        write_search_results(&mut self.out, &title, &cars)?;
        Ok(Flow::Continue)
    }

    fn search_price(&mut self) -> Result<Flow> {
        self.prompt("Enter the price to search for: $")?;
        let Some(input) = self.read_line()? else {
            return Ok(Flow::Quit);
        };

        let Some(target) = parse_price_query(&input) else {
            writeln!(self.out, "ERROR: '{}' is not a valid Price", input.trim())?;
            writeln!(self.out)?;
            return Ok(Flow::Continue);
        };

        let title = format!(
            "RECORDS PRICED WITHIN {:.0}% OF ${target:.2}",
            PRICE_TOLERANCE * 100.0
        );
        let cars = self.inventory.search_price(target);
        debug!(price = target, matches = cars.len(), "Price search");
        write_search_results(&mut self.out, &title, &cars)?;
        Ok(Flow::Continue)
    }
}
