pub mod calendar;
pub mod daily_max;
pub mod series;
