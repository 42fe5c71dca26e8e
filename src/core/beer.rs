//! The catalog item and the bundled sample list

use serde::{Deserialize, Serialize};

/// A beer record as found in the static data files
///
/// Field names on the wire follow the data files (`alcohol`, `img`, `label`,
/// `serving`), the Rust names describe what the fields hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    /// Stable identifier, unique within a catalog
    pub id: String,

    /// Display name. Malformed data may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub description: String,

    /// Alcohol content in percent
    #[serde(rename = "alcohol", default)]
    pub alcohol_content: f64,

    /// Main image, relative to the data root
    #[serde(rename = "img", default)]
    pub image_ref: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brewery: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(rename = "serving", default, skip_serializing_if = "Option::is_none")]
    pub serving_notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// Label image, shown as the second thumbnail on the detail page
    #[serde(rename = "label", default, skip_serializing_if = "Option::is_none")]
    pub secondary_image_ref: Option<String>,
}

impl Beer {
    /// Create a summary record with only the fields the list needs
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        alcohol_content: f64,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            description: description.into(),
            alcohol_content,
            image_ref: image_ref.into(),
            brewery: None,
            style: None,
            serving_notes: None,
            availability: None,
            secondary_image_ref: None,
        }
    }

    /// Name to display, empty when the record has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// The list shipped with the application, shown before the first fetch completes
pub fn bundled_beers() -> Vec<Beer> {
    vec![
        Beer::new(
            "AffligemBlond",
            "Affligem Blond",
            "Affligem Blonde, the classic clear blonde abbey ale, with a gentle roundness and 6.8% alcohol. Low on bitterness, it is eminently drinkable.",
            6.8,
            "img/AffligemBlond.jpg",
        ),
        Beer::new(
            "AffligemDubbel",
            "Affligem Dubbel",
            "A reddish-brown abbey ale brewed with dark malts. The secondary fermentation gives a fruity aroma and a unique spicy character with a distinctive aftertaste. Secondary fermentation in the bottle.",
            6.8,
            "img/AffligemDubbel.jpg",
        ),
        Beer::new(
            "AffligemTripel",
            "Affligem Tripel",
            "The king of the abbey beers. It is amber-gold and pours with a deep head and original aroma, delivering a complex, full bodied flavour. Pure enjoyment! Secondary fermentation in the bottle.",
            8.5,
            "img/AffligemTripel.jpg",
        ),
    ]
}
