//! Built-in camp data shown before (or instead of) the live sheets.

use campinfo_shared::{CampData, CampMap, Contact, Meal};

/// Camp map PDF published on the camp website.
pub const MAP_URL: &str =
    "https://www.campshenandoah.org/wp-content/uploads/2025/01/camp-shenandoah-map-2022.pdf";

fn meal(name: &str, items: &[&str]) -> Meal {
    Meal {
        meal: name.into(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn contact(name: &str, role: &str, phone: &str, email: &str) -> Contact {
    Contact {
        name: name.into(),
        role: role.into(),
        phone: phone.into(),
        email: email.into(),
    }
}

/// The initial data set. Live feeds replace `schedule` and `contacts` when
/// they return usable rows; everything else stays as-is for the process lifetime.
pub fn default_camp_data() -> CampData {
    CampData {
        schedule: Vec::new(),
        dining: vec![
            meal(
                "Breakfast",
                &["Pancakes", "Scrambled Eggs", "Fruit", "Milk/Juice"],
            ),
            meal("Lunch", &["Taco Bar", "Rice", "Salad", "Cookies"]),
            meal(
                "Dinner",
                &["Spaghetti", "Garlic Bread", "Green Beans", "Ice Cream"],
            ),
        ],
        map: CampMap {
            image_url: MAP_URL.into(),
            notes: vec!["Tap to zoom".into()],
        },
        contacts: vec![
            contact(
                "Camp Office",
                "Main Line",
                "+1-540-555-0123",
                "office@campshenandoah.org",
            ),
            contact(
                "Camp Director",
                "Leadership",
                "+1-540-555-0456",
                "director@campshenandoah.org",
            ),
        ],
        trading_post: Vec::new(),
        program: Vec::new(),
    }
}
