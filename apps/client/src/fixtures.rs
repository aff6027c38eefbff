//! # Catalog Fixtures
//!
//! The two listings every fresh catalog starts with. The catalog is never
//! persisted, so these reappear on each launch.
//!
//! The first fixture's image originally pointed at a developer's local
//! file; both rows use the portable placeholder URI here.

use secondstyle_core::{Category, Condition, Listing, Size, PLACEHOLDER_IMAGE};

/// Builds the seed catalog, in insertion order.
pub fn seed_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            title: "T-shirt vintage Nike".to_string(),
            description: "T-shirt Nike des années 90 en excellent état".to_string(),
            price: "25.00".to_string(),
            size: Size::M,
            category: Category::TShirt,
            condition: Condition::ExcellentEtat,
            brand: "Nike".to_string(),
            color: "Bleu".to_string(),
            location: "Paris".to_string(),
            posted_date: "Il y a 2 jours".to_string(),
            seller_rating: "4.8".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
        },
        Listing {
            id: 2,
            title: "Robe d'été Zara".to_string(),
            description: "Belle robe d'été, portée une seule fois".to_string(),
            price: "35.00".to_string(),
            size: Size::S,
            category: Category::Robe,
            condition: Condition::NeufAvecEtiquettes,
            brand: "Zara".to_string(),
            color: "Rouge".to_string(),
            location: "Lyon".to_string(),
            posted_date: "Il y a 1 jour".to_string(),
            seller_rating: "4.9".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_fixture_rows() {
        let listings = seed_listings();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "T-shirt vintage Nike");
        assert_eq!(listings[1].title, "Robe d'été Zara");
    }

    #[test]
    fn test_fixture_images_are_portable() {
        for listing in seed_listings() {
            assert_eq!(listing.image, PLACEHOLDER_IMAGE);
        }
    }
}
