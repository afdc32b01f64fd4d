//! Element records

/// Highest atomic number a card is produced for.
pub const MAX_ELEMENTS: usize = 118;

/// Position of an element in the conventional periodic-table grid.
///
/// Carried through from sources that provide it; the tile layout does not
/// use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub column: u32,
    pub row: u32,
}

/// One chemical element as read from a source.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub number: u32,
    pub symbol: String,
    pub name: String,
    pub mass: f64,
    /// Raw category string as the source spelled it
    pub category: String,
    pub grid: Option<GridPosition>,
}

impl Element {
    pub fn new(
        number: u32,
        symbol: impl Into<String>,
        name: impl Into<String>,
        mass: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            number,
            symbol: symbol.into(),
            name: name.into(),
            mass,
            category: category.into(),
            grid: None,
        }
    }

    pub fn with_grid(mut self, column: u32, row: u32) -> Self {
        self.grid = Some(GridPosition { column, row });
        self
    }

    /// Whether the atomic number is within `1..=118`.
    pub fn has_valid_number(&self) -> bool {
        (1..=MAX_ELEMENTS as u32).contains(&self.number)
    }

    /// Whether the symbol is one to three ASCII letters. Anything else would
    /// leak into the output file name.
    pub fn has_valid_symbol(&self) -> bool {
        (1..=3).contains(&self.symbol.len())
            && self.symbol.bytes().all(|b| b.is_ascii_alphabetic())
    }

    /// Output file name, e.g. `001_H.png`.
    pub fn file_name(&self) -> String {
        format!("{:03}_{}.png", self.number, self.symbol)
    }
}
