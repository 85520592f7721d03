// scraper.rs
use crate::listings::{Category, ListingStore};
use crate::pakwheels::{ScrapedListing, ScraperError};
use rand::Rng;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

const MISSING: &str = "N/A";

pub struct PakWheelsScraper {
    client: Client,
    delay: Duration,
}

impl PakWheelsScraper {
    pub fn new(timeout: Duration) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self {
            client,
            delay: Duration::from_secs(2),
        })
    }

    /// Base pause between category requests; a random second or two is added.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn source_url(category: Category) -> &'static str {
        match category {
            Category::UsedCars => "https://www.pakwheels.com/used-cars/",
            Category::NewCars => "https://www.pakwheels.com/new-cars/best-sedan/",
            Category::Bikes => "https://www.pakwheels.com/used-bikes/",
        }
    }

    /// Scrapes one category. A non-success status yields no listings.
    pub fn scrape(&self, category: Category) -> Result<Vec<ScrapedListing>, ScraperError> {
        let url = Self::source_url(category);
        tracing::info!(category = category.label(), url, "scraping");

        match self.fetch_html(url)? {
            Some(html) => parse_listings(category, &html),
            None => Ok(Vec::new()),
        }
    }

    /// Scrapes every category into the store. A failing category is logged
    /// and does not stop the others.
    pub fn scrape_all(&self, store: &ListingStore) -> Vec<(Category, Result<usize, ScraperError>)> {
        let mut results = Vec::with_capacity(Category::ALL.len());

        for (i, category) in Category::ALL.into_iter().enumerate() {
            if i > 0 {
                self.pause();
            }

            let result = self.scrape(category).and_then(|listings| {
                store
                    .save(category, &listings)
                    .map(|_| listings.len())
                    .map_err(|e| ScraperError::IoError(e.to_string()))
            });

            match &result {
                Ok(count) => tracing::info!(category = category.label(), count, "scrape complete"),
                Err(e) => tracing::error!(category = category.label(), error = %e, "scrape failed"),
            }

            results.push((category, result));
        }

        results
    }

    fn fetch_html(&self, url: &str) -> Result<Option<String>, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Failed to retrieve data");
            return Ok(None);
        }

        resp.text()
            .map(Some)
            .map_err(|e| ScraperError::Network(e.to_string()))
    }

    fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        let jitter = rand::thread_rng().gen_range(0..=1000);
        std::thread::sleep(self.delay + Duration::from_millis(jitter));
    }
}

/// Extracts listings from a category page.
pub fn parse_listings(category: Category, html: &str) -> Result<Vec<ScrapedListing>, ScraperError> {
    let document = Html::parse_document(html);

    match category {
        Category::UsedCars => parse_used_cars(&document),
        Category::NewCars => parse_new_cars(&document),
        Category::Bikes => parse_bikes(&document),
    }
}

// Used-car cards are only kept when title, price and location are all there.
fn parse_used_cars(document: &Html) -> Result<Vec<ScrapedListing>, ScraperError> {
    let card_sel = selector("div.cards-content")?;
    let title_sel = selector("h3.nomargin.truncate")?;
    let price_sel = selector("div.generic-green")?;
    let location_sel = selector("div.generic-gray")?;

    let listings = document
        .select(&card_sel)
        .filter_map(|card| {
            Some(ScrapedListing {
                title: first_text(card, &title_sel)?,
                price: first_text(card, &price_sel)?,
                location: Some(first_text(card, &location_sel)?),
                rating: None,
                reviews_count: None,
            })
        })
        .collect();

    Ok(listings)
}

fn parse_new_cars(document: &Html) -> Result<Vec<ScrapedListing>, ScraperError> {
    let card_sel = selector("li.col-md-3")?;
    let title_sel = selector("h3.nomargin.truncate")?;
    let price_sel = selector("div.generic-green.truncate.fs14")?;
    let rating_sel = selector("span.rating")?;
    let star_sel = selector("i.fa-star")?;
    let reviews_sel = selector("span.fs14.generic-gray.ml5.dib")?;

    let listings = document
        .select(&card_sel)
        .map(|card| {
            let rating = card
                .select(&rating_sel)
                .next()
                .map(|r| r.select(&star_sel).count() as u32)
                .unwrap_or(0);

            ScrapedListing {
                title: text_or_missing(card, &title_sel),
                price: text_or_missing(card, &price_sel),
                location: None,
                rating: Some(rating),
                reviews_count: Some(text_or_missing(card, &reviews_sel)),
            }
        })
        .collect();

    Ok(listings)
}

fn parse_bikes(document: &Html) -> Result<Vec<ScrapedListing>, ScraperError> {
    let card_sel = selector("li.col-md-3")?;
    let title_sel = selector("h3.nomargin.truncate")?;
    let price_sel = selector("div.generic-green")?;
    let location_sel = selector("div.generic-gray")?;

    let listings = document
        .select(&card_sel)
        .map(|card| ScrapedListing {
            title: text_or_missing(card, &title_sel),
            price: text_or_missing(card, &price_sel),
            location: Some(text_or_missing(card, &location_sel)),
            rating: None,
            reviews_count: None,
        })
        .collect();

    Ok(listings)
}

fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(format!("{css}: {e}")))
}

fn first_text(scope: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let element = scope.select(sel).next()?;
    Some(element.text().collect::<String>().trim().to_string())
}

fn text_or_missing(scope: ElementRef<'_>, sel: &Selector) -> String {
    first_text(scope, sel).unwrap_or_else(|| MISSING.to_string())
}
