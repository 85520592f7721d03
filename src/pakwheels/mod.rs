mod models;
mod scraper;
mod scraper_error;

pub use models::ScrapedListing;
pub use self::scraper::PakWheelsScraper;
pub use scraper_error::ScraperError;
