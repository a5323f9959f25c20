use thiserror::Error;

/// The inclusive range of years requested from the climate archive.
///
/// The default window spans 1990 through 2023, which yields roughly 34 yearly
/// samples per calendar day once sentinel values are filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClimatologyWindow {
    start_year: i32,
    end_year: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Climatology window start year {start} is after end year {end}")]
pub struct InvalidWindow {
    pub start: i32,
    pub end: i32,
}

impl ClimatologyWindow {
    /// Creates a window covering `start_year..=end_year`.
    pub fn new(start_year: i32, end_year: i32) -> Result<Self, InvalidWindow> {
        if start_year > end_year {
            return Err(InvalidWindow {
                start: start_year,
                end: end_year,
            });
        }
        Ok(Self {
            start_year,
            end_year,
        })
    }

    pub fn start_year(self) -> i32 {
        self.start_year
    }

    pub fn end_year(self) -> i32 {
        self.end_year
    }

    /// Number of calendar years the window covers.
    pub fn year_count(self) -> u32 {
        (self.end_year - self.start_year + 1) as u32
    }
}

impl Default for ClimatologyWindow {
    fn default() -> Self {
        Self {
            start_year: 1990,
            end_year: 2023,
        }
    }
}
