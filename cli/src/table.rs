// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::fmt;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A column of a table over rows of `T`.
pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Renders rows as aligned, optionally colored text.
#[derive(Debug)]
pub struct Table<'a, T, C> {
    columns: &'a [C],
    data: &'a [T],
    header: bool,
    separator: &'a str,
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            header: true,
            separator: "  ",
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    fn widths(&self, rows: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
        let mut widths: Vec<usize> = match self.header {
            true => self.columns.iter().map(|c| c.name().width()).collect(),
            false => vec![0; self.columns.len()],
        };
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();
        let widths = self.widths(&rows);
        let last = self.columns.len().saturating_sub(1);

        if self.header {
            for (i, (col, width)) in self.columns.iter().zip(&widths).enumerate() {
                let name = col.name();
                let cell = pad(&name, *width, col.padding_direction(), i == last);
                write!(f, "{}", cell.bold())?;
                end_cell(f, i == last, self.separator)?;
            }
        }

        for (data, cells) in self.data.iter().zip(&rows) {
            for (i, ((col, cell), width)) in self.columns.iter().zip(cells).zip(&widths).enumerate()
            {
                let cell = pad(cell, *width, col.padding_direction(), i == last);
                match col.color(data) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }
                end_cell(f, i == last, self.separator)?;
            }
        }
        Ok(())
    }
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

fn end_cell(f: &mut fmt::Formatter<'_>, last: bool, separator: &str) -> fmt::Result {
    match last {
        true => writeln!(f),
        false => write!(f, "{separator}"),
    }
}
