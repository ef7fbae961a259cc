//! # Fixture data
//!
//! The curated initial content for Poseidon's Catch: the full Greek
//! seafood menu and guest testimonials used by the seed loader, plus the
//! small sample subset the in-memory backend seeds itself with so the
//! site is browsable without a database.

use super::models::{NewMenuItem, NewTestimonial};

fn item(
    name: &str,
    category: &str,
    description: &str,
    price: &str,
    image: &str,
    dietary: &[&str],
    featured: bool,
) -> NewMenuItem {
    NewMenuItem {
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        image: image.to_string(),
        dietary: dietary.iter().map(|d| d.to_string()).collect(),
        featured,
    }
}

fn testimonial(name: &str, rating: i32, comment: &str) -> NewTestimonial {
    NewTestimonial {
        name: name.to_string(),
        rating,
        comment: comment.to_string(),
        avatar: None,
    }
}

/// The full curated menu, inserted by the seed loader.
pub fn menu_items() -> Vec<NewMenuItem> {
    vec![
        item(
            "Grilled Octopus (Htapodi)",
            "appetizers",
            "Tender chargrilled octopus with olive oil, lemon, oregano, and capers",
            "$18.00",
            "/images/grilled-octopus.png",
            &["gluten-free"],
            true,
        ),
        item(
            "Saganaki Cheese",
            "appetizers",
            "Pan-fried Greek cheese flambéed with ouzo, served with fresh lemon",
            "$12.00",
            "https://images.unsplash.com/photo-1486297678162-eb2a19b0a32d?w=400&h=300&fit=crop",
            &["vegetarian"],
            false,
        ),
        item(
            "Grilled Calamari",
            "appetizers",
            "Tender squid grilled with garlic, parsley, and drizzled with lemon",
            "$16.00",
            "/images/grilled-calamari.png",
            &["gluten-free"],
            false,
        ),
        item(
            "Taramosalata",
            "appetizers",
            "Traditional Greek fish roe dip with olive oil, lemon, and toasted pita",
            "$10.00",
            "https://images.unsplash.com/photo-1621852004158-f3bc188ace2d?w=400&h=300&fit=crop",
            &["vegetarian"],
            false,
        ),
        item(
            "Whole Grilled Sea Bass",
            "mains",
            "Fresh Mediterranean sea bass grilled whole with herbs, olive oil, and lemon",
            "$34.00",
            "/images/grilled-sea-bass.png",
            &["gluten-free"],
            true,
        ),
        item(
            "Saganaki Prawns",
            "mains",
            "Jumbo prawns sautéed with tomatoes, feta, ouzo, and fresh herbs",
            "$28.00",
            "https://images.unsplash.com/photo-1565680018434-b513d5e5fd47?w=400&h=300&fit=crop",
            &["gluten-free"],
            true,
        ),
        item(
            "Seafood Moussaka",
            "mains",
            "Traditional moussaka with layers of eggplant, shrimp, scallops, and béchamel",
            "$26.00",
            "https://images.unsplash.com/photo-1563379091339-03b21ab4a4f8?w=400&h=300&fit=crop",
            &[],
            false,
        ),
        item(
            "Grilled Swordfish",
            "mains",
            "Fresh swordfish steak marinated in olive oil, oregano, and garlic",
            "$32.00",
            "/images/grilled-swordfish.png",
            &["gluten-free"],
            false,
        ),
        item(
            "Baklava",
            "desserts",
            "Layers of phyllo pastry with honey, walnuts, and pistachios",
            "$8.00",
            "https://images.unsplash.com/photo-1519676867240-f03562e64548?w=400&h=300&fit=crop",
            &["vegetarian"],
            false,
        ),
        item(
            "Greek Yogurt with Honey",
            "desserts",
            "Thick Greek yogurt drizzled with Aegean honey and crushed walnuts",
            "$6.00",
            "https://images.unsplash.com/photo-1488477181946-6428a0291777?w=400&h=300&fit=crop",
            &["vegetarian", "gluten-free"],
            false,
        ),
        item(
            "Ouzo",
            "drinks",
            "Traditional Greek anise-flavored aperitif, served with ice water",
            "$9.00",
            "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?w=400&h=300&fit=crop",
            &["vegan", "gluten-free"],
            false,
        ),
        item(
            "Greek White Wine",
            "drinks",
            "Assyrtiko from Santorini - crisp, mineral, perfect with seafood",
            "$12.00",
            "https://images.unsplash.com/photo-1547595628-c61a29f496f0?w=400&h=300&fit=crop",
            &["vegan", "gluten-free"],
            false,
        ),
        item(
            "Lobster Pasta",
            "mains",
            "Fresh lobster with linguine in a light tomato and white wine sauce",
            "$38.00",
            "/images/lobster-pasta.png",
            &[],
            true,
        ),
    ]
}

/// The full curated testimonial set, inserted by the seed loader.
pub fn testimonials() -> Vec<NewTestimonial> {
    vec![
        testimonial(
            "Sophia Martinez",
            5,
            "The grilled octopus was perfection! Transported me straight to the Greek islands. The sea bass was incredibly fresh.",
        ),
        testimonial(
            "James Patterson",
            5,
            "Authentic Greek seafood at its finest. The saganaki prawns with ouzo were divine. Best coastal dining in the city!",
        ),
        testimonial(
            "Maria Kostas",
            5,
            "Finally, a restaurant that captures true Aegean flavors! The whole sea bass reminded me of summers in Santorini.",
        ),
        testimonial(
            "Alexander Chen",
            5,
            "Outstanding fresh seafood and impeccable service. The terrace with ocean views made it a perfect anniversary dinner.",
        ),
        testimonial(
            "Elena Papadakis",
            5,
            "As a Greek native, I can say this is the real deal. The flavors, the preparation, everything is authentic and delicious!",
        ),
        testimonial(
            "David Thompson",
            5,
            "The lobster pasta was incredible! Fresh ingredients, generous portions, and the ambiance is perfect for a romantic dinner.",
        ),
    ]
}

/// Small subset seeded into [`MemStorage`](super::MemStorage) at
/// construction time, enough to browse the site with no database.
pub fn sample_menu_items() -> Vec<NewMenuItem> {
    menu_items()
        .into_iter()
        .filter(|i| i.featured)
        .take(3)
        .collect()
}

/// Testimonial subset for the in-memory backend.
pub fn sample_testimonials() -> Vec<NewTestimonial> {
    testimonials().into_iter().take(3).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_set_has_expected_sizes() {
        assert_eq!(menu_items().len(), 13);
        assert_eq!(testimonials().len(), 6);
    }

    #[test]
    fn sample_subset_is_small_and_featured() {
        let sample = sample_menu_items();
        assert_eq!(sample.len(), 3);
        assert!(sample.iter().all(|i| i.featured));
        assert_eq!(sample_testimonials().len(), 3);
    }

    #[test]
    fn every_rating_is_in_range() {
        assert!(testimonials().iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn known_categories_only() {
        let known = ["appetizers", "mains", "desserts", "drinks"];
        assert!(menu_items()
            .iter()
            .all(|i| known.contains(&i.category.as_str())));
    }
}
