// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use colored::Colorize;
use serde::Serialize;

use crate::table::{Table, TableColumn};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Prints a list as a table or as a JSON array.
pub fn print_list<T, C>(data: &[T], columns: &[C], format: OutputFormat) -> Result<(), Box<dyn Error>>
where
    T: Serialize,
    C: TableColumn<T>,
{
    match format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Table if data.is_empty() => {
            println!("{}", "Nothing to show".italic());
            Ok(())
        }
        OutputFormat::Table => {
            print!("{}", Table::new(columns, data));
            Ok(())
        }
    }
}

/// Prints a single record, as a one-row table or a JSON object.
pub fn print_one<T, C>(data: &T, columns: &[C], format: OutputFormat) -> Result<(), Box<dyn Error>>
where
    T: Serialize,
    C: TableColumn<T>,
{
    match format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Table => print_list(std::slice::from_ref(data), columns, format),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize output: {e}"))?;
    println!("{json}");
    Ok(())
}

/// Prints a short confirmation for commands without a result to show.
pub fn print_done(message: &str, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "ok": true, "message": message })),
        OutputFormat::Table => {
            println!("{} {}", "✔".green(), message);
            Ok(())
        }
    }
}

/// Splits a comma separated id list, dropping blanks.
pub fn split_ids(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
