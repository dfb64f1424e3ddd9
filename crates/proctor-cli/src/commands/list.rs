//! The `proctor list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use crate::sets;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Set", "Questions", "Total Marks", "Time Limit"]);

    for set in sets::all_builtin() {
        table.add_row(vec![
            Cell::new(&set.name),
            Cell::new(set.questions.len()),
            Cell::new(set.total_marks()),
            Cell::new(format!("{} min", set.time_limit_mins)),
        ]);
    }

    println!("{table}");
    Ok(())
}
