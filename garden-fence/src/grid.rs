use std::fmt;

use miette::{Diagnostic, SourceSpan};
use nom::{
    character::complete::{newline, satisfy},
    multi::{many1, separated_list1},
    IResult, Parser,
};
use nom_locate::LocatedSpan;
use thiserror::Error;

// region: miette error handling
#[derive(Debug, Error, Diagnostic)]
pub enum GridError {
    #[error("input grid is empty")]
    #[diagnostic(
        code(garden_fence::empty_input),
        help("expected at least one row of plot labels")
    )]
    Empty,

    #[error("input grid is not rectangular")]
    #[diagnostic(
        code(garden_fence::ragged_rows),
        help("every row must have the same number of plot labels")
    )]
    RaggedRows {
        #[source_code]
        src: String,

        #[label("this row has {found} labels, expected {expected}")]
        span: SourceSpan,

        expected: usize,
        found: usize,
    },

    #[error("failed to parse grid: {0}")]
    #[diagnostic(
        code(garden_fence::parse),
        help("plot labels must be ASCII alphanumeric characters")
    )]
    Parse(String),
}
// endregion

/// Immutable rectangular grid of single-character plot labels, stored
/// row-major and addressed by linear index `idx = width * row + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    labels: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Loads a grid from its text form, one row per line.
    ///
    /// Fails fast before any region discovery: ragged rows and empty
    /// input are rejected here, as is any byte that is not a plot label.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let width = input.lines().next().ok_or(GridError::Empty)?.len();
        if width == 0 {
            return Err(GridError::Empty);
        }
        let height = input.lines().count();

        let mut offset = 0;
        for line in input.lines() {
            if line.len() != width {
                return Err(GridError::RaggedRows {
                    src: input.to_string(),
                    span: (offset, line.len().max(1)).into(),
                    expected: width,
                    found: line.len(),
                });
            }
            offset += line.len() + 1;
        }

        let (_, plots) = parser::parse_rows(LocatedSpan::new(input))
            .map_err(|e| GridError::Parse(format!("{}", e)))?;

        if plots.len() != width * height {
            return Err(GridError::Parse(format!(
                "expected {} plot labels, found {}",
                width * height,
                plots.len()
            )));
        }

        let mut labels = vec![' '; width * height];
        for plot in plots {
            let row = (plot.position.location_line() as usize).saturating_sub(1);
            let col = plot.position.get_column().saturating_sub(1);
            labels[width * row + col] = plot.label;
        }

        Ok(Self {
            labels,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at a linear coordinate.
    pub fn label(&self, idx: usize) -> char {
        self.labels[idx]
    }

    /// Linear coordinate of `(row, col)`.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        self.width * row + col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.labels.chunks(self.width) {
            for label in row {
                write!(f, "{}", label)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// region: nom parser
mod parser {
    use super::*;

    pub(super) type Span<'a> = LocatedSpan<&'a str>;

    #[derive(Debug, Clone, Copy)]
    pub(super) struct LocatedPlot<'a> {
        pub label: char,
        pub position: Span<'a>,
    }

    pub(super) fn parse_plot(input: Span) -> IResult<Span, LocatedPlot> {
        satisfy(|c: char| c.is_ascii_alphanumeric())
            .map(|c| LocatedPlot {
                label: c,
                position: input,
            })
            .parse(input)
    }

    pub(super) fn parse_rows(input: Span) -> IResult<Span, Vec<LocatedPlot>> {
        let (input, rows) = separated_list1(newline, many1(parse_plot))(input)?;
        Ok((input, rows.into_iter().flatten().collect()))
    }
}
// endregion
