pub mod market;

pub use market::{PricePoint, PriceSeries};
