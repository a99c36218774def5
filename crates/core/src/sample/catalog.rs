//! The fictional retail universe the sample generator draws from.
//!
//! These constants exist only on the data-source side; the engine
//! itself treats categories, regions and stores as arbitrary strings.

/// Product categories, highest base price first.
pub const CATEGORIES: [&str; 5] = [
    "Electronics",
    "Fashion",
    "Home & Garden",
    "Sports",
    "Books",
];

/// Sales regions.
pub const REGIONS: [&str; 3] = ["North America", "Europe", "Asia"];

/// Store locations.
pub const STORES: [&str; 13] = [
    "NYC Store",
    "LA Store",
    "Chicago Store",
    "London Store",
    "Paris Store",
    "Milan Store",
    "Tokyo Store",
    "Seoul Store",
    "Singapore Store",
    "Miami Store",
    "Seattle Store",
    "Berlin Store",
    "Amsterdam Store",
];

/// Products sold under a category.
#[must_use]
pub fn products_for(category: &str) -> &'static [&'static str] {
    match category {
        "Electronics" => &[
            "iPhone 15 Pro",
            "MacBook Air",
            "AirPods Pro",
            "iPad Pro",
            "Apple Watch",
        ],
        "Fashion" => &[
            "Designer Jacket",
            "Luxury Handbag",
            "Premium Shoes",
            "Silk Scarf",
            "Leather Wallet",
        ],
        "Home & Garden" => &[
            "Smart Thermostat",
            "Robot Vacuum",
            "Air Purifier",
            "Coffee Maker",
            "Plant Pot",
        ],
        "Sports" => &[
            "Running Shoes",
            "Fitness Tracker",
            "Yoga Mat",
            "Dumbbells",
            "Protein Powder",
        ],
        "Books" => &[
            "Business Strategy",
            "Tech Handbook",
            "Cooking Guide",
            "Travel Journal",
            "Art History",
        ],
        _ => &[],
    }
}

/// Base price of a category; generated revenue lands in `[base, 2·base)`.
#[must_use]
pub fn base_price(category: &str) -> f64 {
    match category {
        "Electronics" => 500.0,
        "Fashion" => 300.0,
        _ => 200.0,
    }
}
