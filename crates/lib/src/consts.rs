//! Shared constants.

/// Application name, used for the platform data directory.
pub const APP_NAME: &str = "culinary-companion";

/// File name of the persisted state document inside the data directory.
pub const STATE_FILENAME: &str = "state.json";

/// Prefix of exported state files; the current date and `.json` are appended.
pub const EXPORT_PREFIX: &str = "culinary-companion-export-";

/// Category that absorbs items whose own category was deleted or never set.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CULINARY_DATA_DIR";

/// Seed tag vocabulary for a fresh state document.
pub const DEFAULT_TAGS: [&str; 8] = [
  "Breakfast",
  "Lunch",
  "Dinner",
  "Snack",
  "Dessert",
  "Vegetarian",
  "Vegan",
  "Quick",
];

/// Seed category vocabulary for a fresh state document.
pub const DEFAULT_CATEGORIES: [&str; 9] = [
  "Produce",
  "Dairy",
  "Meat",
  "Bakery",
  "Frozen",
  "Pantry",
  "Beverages",
  "Household",
  "Other",
];
