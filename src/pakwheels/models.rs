use serde::Serialize;

// Key names match what the listing endpoints have always served:
//
// {
//   "Title": "Toyota Corolla 2018",
//   "Price": "PKR 45 lacs",
//   "Location": "Lahore",
//   "Rating": 4,
//   "Reviews Count": "(12 Reviews)"
// }

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapedListing {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "Rating", skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    #[serde(rename = "Reviews Count", skip_serializing_if = "Option::is_none")]
    pub reviews_count: Option<String>,
}
