//! Static marketing content shown by the rotating views.

use serde::Serialize;

/// A product feature on the features carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Stable identifier.
    pub id: &'static str,
    /// Headline.
    pub title: &'static str,
    /// Body copy.
    pub description: &'static str,
}

/// A traveler quote on the testimonials carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    /// Stable identifier.
    pub id: &'static str,
    /// The quote.
    pub quote: &'static str,
    /// Who said it.
    pub author: &'static str,
    /// Their description.
    pub role: &'static str,
    /// Avatar initials.
    pub avatar: &'static str,
    /// Star rating, 1-5.
    pub rating: u8,
}

impl Testimonial {
    /// Filled and empty stars, e.g. `★★★★☆`.
    #[must_use]
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// Features, in carousel order.
pub const FEATURES: [Feature; 4] = [
    Feature {
        id: "wayfinding",
        title: "Real-Time Wayfinding",
        description: "Get turn-by-turn directions to any gate, restaurant, or service with live walking time estimates. Our intelligent routing system considers your current location and provides the fastest path through the airport.",
    },
    Feature {
        id: "connection",
        title: "Connection Assistant",
        description: "Tight connection? We'll guide you on the fastest route between gates with time to spare. Get alerts when it's time to head to your next gate and track your progress in real-time.",
    },
    Feature {
        id: "alerts",
        title: "Flight Alerts",
        description: "Get instant notifications for gate changes, delays, and boarding announcements. Never miss an important update about your flight with push notifications sent directly to your device.",
    },
    Feature {
        id: "recommendations",
        title: "Personalized Recommendations",
        description: "Discover restaurants and shops near your gate based on your preferences and available time. Get curated suggestions for dining, shopping, and relaxation options.",
    },
];

/// Testimonials, in carousel order.
pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        id: "1",
        quote: "This app saved my connection! I had 20 minutes between flights and the wayfinding feature got me to my gate with 5 minutes to spare. Absolutely essential for ATL.",
        author: "Sarah Mitchell",
        role: "Frequent Business Traveler",
        avatar: "SM",
        rating: 5,
    },
    Testimonial {
        id: "2",
        quote: "As someone who travels through Atlanta weekly, ATL Navigator has become indispensable. The real-time flight updates and gate notifications are incredibly accurate.",
        author: "Michael Chen",
        role: "Management Consultant",
        avatar: "MC",
        rating: 5,
    },
    Testimonial {
        id: "3",
        quote: "The lounge information and wait time estimates are spot on. I can now plan my layovers perfectly and make the most of my time at the airport.",
        author: "Emily Rodriguez",
        role: "International Traveler",
        avatar: "ER",
        rating: 5,
    },
    Testimonial {
        id: "4",
        quote: "Finally, an airport app that actually works! The interactive map made navigating the international terminal so much easier for my first time at ATL.",
        author: "David Thompson",
        role: "Leisure Traveler",
        avatar: "DT",
        rating: 4,
    },
    Testimonial {
        id: "5",
        quote: "The connection assistant feature is a game-changer. It calculated the exact walking time between my gates and even suggested the fastest route.",
        author: "Jennifer Park",
        role: "Sales Executive",
        avatar: "JP",
        rating: 5,
    },
];

/// Rotating hints in the hero search box.
pub const SEARCH_PLACEHOLDERS: [&str; 4] = [
    "Search flights (e.g., DL404)...",
    "Find gates (e.g., A17)...",
    "Discover restaurants...",
    "Locate lounges...",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_sizes() {
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 5);
        assert_eq!(SEARCH_PLACEHOLDERS.len(), 4);
    }

    #[test]
    fn test_ratings_in_range() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
        assert_eq!(TESTIMONIALS[3].stars(), "★★★★☆");
    }
}
