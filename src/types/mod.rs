pub mod day_of_year;
pub mod location;
pub mod report;
pub mod sample;
pub mod thresholds;
pub mod window;
