//! # Table Output
//!
//! Fixed-width tables printed by the menus.
//!
//! ```text
//! VALID ITEMS IN THE INVENTORY
//! ------------------------------------------------------
//! Vehicle ID     Model              Quantity       Price
//!
//! AB12MP349      FUSION5                  20    17000.00
//!
//! Total Records: 1
//! ------------------------------------------------------
//! ```
//!
//! Valid rows and error-file lines share the same column widths, so the
//! invalid-records table lines up under the same header.

use std::io::{self, Write};

use carlot_core::Car;
use carlot_ingest::{FileSink, Inventory, NUM_WIDTH, TEXT_WIDTH};

/// Width of the dash rules: the four columns side by side.
pub const RULE_WIDTH: usize = 2 * TEXT_WIDTH + 2 * NUM_WIDTH;

/// Printed instead of a table when a search comes back empty.
pub const NO_MATCHES: &str = "No records found matching the search criteria.";

/// Printed instead of a table when the error file has no lines.
pub const NO_INVALID: &str = "No Invalid Records Found.";

/// One valid car as a table row.
pub fn format_car_row(car: &Car) -> String {
    format!(
        "{:<tw$}{:<tw$}{:>nw$}{:>nw$.2}",
        car.id(),
        car.model(),
        car.quantity(),
        car.price(),
        tw = TEXT_WIDTH,
        nw = NUM_WIDTH
    )
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn write_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", rule())?;
    writeln!(
        out,
        "{:<tw$}{:<tw$}{:>nw$}{:>nw$}",
        "Vehicle ID",
        "Model",
        "Quantity",
        "Price",
        tw = TEXT_WIDTH,
        nw = NUM_WIDTH
    )?;
    writeln!(out)
}

fn write_footer<W: Write>(out: &mut W, total: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total Records: {total}")?;
    writeln!(out, "{}", rule())?;
    writeln!(out)?;
    writeln!(out)
}

/// Prints cars under `title`. An empty slice still prints the table.
pub fn write_car_table<W: Write>(out: &mut W, title: &str, cars: &[&Car]) -> io::Result<()> {
    write_header(out, title)?;
    for car in cars {
        writeln!(out, "{}", format_car_row(car))?;
    }
    write_footer(out, cars.len())
}

/// Prints search results, or [`NO_MATCHES`] when there are none.
pub fn write_search_results<W: Write>(out: &mut W, title: &str, cars: &[&Car]) -> io::Result<()> {
    if cars.is_empty() {
        writeln!(out, "{NO_MATCHES}")?;
        return writeln!(out);
    }
    write_car_table(out, title, cars)
}

/// Prints error-file lines as they were written, or [`NO_INVALID`].
pub fn write_invalid_records<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    if lines.is_empty() {
        writeln!(out, "{NO_INVALID}")?;
        return writeln!(out);
    }

    write_header(out, "INVALID RECORDS")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    write_footer(out, lines.len())
}

/// Printed once after loading, before the first menu: where rejects went
/// and whether the record limit cut the input short.
pub fn write_load_notices<W: Write>(out: &mut W, inventory: &Inventory<FileSink>) -> io::Result<()> {
    let report = inventory.report();
    let mut wrote = false;

    if report.rejected > 0 {
        writeln!(
            out,
            "{} invalid record(s) written to '{}'.",
            report.rejected,
            inventory.sink().path().display()
        )?;
        wrote = true;
    }

    if report.capacity_exceeded() {
        writeln!(
            out,
            "WARNING: The total number of records exceeds the maximum limit of {}. \
             {} record(s) beyond the limit were discarded.",
            report.capacity, report.discarded
        )?;
        wrote = true;
    }

    if wrote {
        writeln!(out)?;
    }
    Ok(())
}
