//! Built-in demonstration data.
//!
//! The mock catalog serves the same listings and shops for every city.

use chrono::Weekday;

use super::types::{
    Article, AuthorProfile, Comment, Landlord, Listing, Plan, PlanFeature,
    PopularRoute, PriceTier, Route, Shop, ShopCategory, ShopContact, SubscriptionTier,
    TransportMode, WeekHours, WEEK,
};

/// Cities offered by the header city selector.
pub const CITIES: [&str; 6] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
];

pub const DEFAULT_CITY: &str = "New York";

pub const LANDMARKS: [&str; 8] = [
    "Central Park",
    "Times Square",
    "Brooklyn Bridge",
    "Statue of Liberty",
    "Empire State Building",
    "High Line",
    "One World Trade Center",
    "Museum of Natural History",
];

pub const POPULAR_ROUTES: [PopularRoute; 3] = [
    PopularRoute {
        from: "Central Park",
        to: "Times Square",
        users: 1245,
    },
    PopularRoute {
        from: "Brooklyn Bridge",
        to: "Wall Street",
        users: 987,
    },
    PopularRoute {
        from: "High Line",
        to: "Chelsea Market",
        users: 756,
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "1".to_string(),
            title: "Lulu Maklul".to_string(),
            price: 2500,
            location: "Mogbazar".to_string(),
            rooms: 2,
            bathrooms: 2,
            area: 100,
            images: strings(&[
                "https://images.pexels.com/photos/1571460/pexels-photo-1571460.jpeg",
                "https://images.pexels.com/photos/1571463/pexels-photo-1571463.jpeg",
            ]),
            description: "Beautiful modern apartment with Hatirjheel views, updated kitchen, and luxury amenities.".to_string(),
            landlord: Landlord {
                name: "Syed Mohammed Sazid Ullah".to_string(),
                phone: "01645016880".to_string(),
                email: "sazid@example.com".to_string(),
                rating: 4.8,
            },
            rating: 4.7,
            reviews: 23,
            features: strings(&["No Air Conditioning", "Gym", "No Parking", "Smoke Free"]),
            virtual_tour: true,
        },
        Listing {
            id: "2".to_string(),
            title: "Abrar Heights".to_string(),
            price: 1800,
            location: "Modhubagh".to_string(),
            rooms: 1,
            bathrooms: 1,
            area: 300,
            images: strings(&[
                "https://images.pexels.com/photos/2724749/pexels-photo-2724749.jpeg",
                "https://images.pexels.com/photos/2635038/pexels-photo-2635038.jpeg",
            ]),
            description: "Charming single with exposed brick walls and great natural light.".to_string(),
            landlord: Landlord {
                name: "Abrar Chy".to_string(),
                phone: "01521783219".to_string(),
                email: "abrar@example.com".to_string(),
                rating: 4.5,
            },
            rating: 4.4,
            reviews: 18,
            features: strings(&["Top Floor", "Laundry", "Near Station"]),
            virtual_tour: false,
        },
        Listing {
            id: "3".to_string(),
            title: "Baper Hotel".to_string(),
            price: 4800,
            location: "Bashundhara R/A".to_string(),
            rooms: 3,
            bathrooms: 3,
            area: 1200,
            images: strings(&[
                "https://images.pexels.com/photos/1643383/pexels-photo-1643383.jpeg",
                "https://images.pexels.com/photos/1643384/pexels-photo-1643384.jpeg",
            ]),
            description: "Stunning apartment with panoramic city views and premium finishes.".to_string(),
            landlord: Landlord {
                name: "Sheikh Kamal".to_string(),
                phone: "01712345678".to_string(),
                email: "sheikh@example.com".to_string(),
                rating: 4.9,
            },
            rating: 4.9,
            reviews: 31,
            features: strings(&["Rooftop Access", "Gym", "Pool", "Parking"]),
            virtual_tour: true,
        },
    ]
}

/// Seven-day schedule: weekdays, then Saturday and Sunday.
fn week(weekday: &str, friday: &str, saturday: &str, sunday: &str) -> WeekHours {
    WEEK.iter()
        .map(|day| {
            let hours = match day {
                Weekday::Fri => friday,
                Weekday::Sat => saturday,
                Weekday::Sun => sunday,
                _ => weekday,
            };
            (*day, hours.to_string())
        })
        .collect()
}

pub fn shops() -> Vec<Shop> {
    let mut salon_hours = week(
        "9:00 AM - 7:00 PM",
        "9:00 AM - 8:00 PM",
        "8:00 AM - 6:00 PM",
        "10:00 AM - 5:00 PM",
    );
    salon_hours.insert(Weekday::Mon, "Closed".to_string());
    salon_hours.insert(Weekday::Thu, "9:00 AM - 8:00 PM".to_string());

    vec![
        Shop {
            id: "1".to_string(),
            name: "Harun Bhat Ghor".to_string(),
            category: ShopCategory::Restaurants,
            subcategory: "Italian".to_string(),
            address: "123 Main Street, Downtown".to_string(),
            distance: "0.3 miles".to_string(),
            rating: 4.8,
            reviews: 127,
            price: PriceTier::Moderate,
            images: strings(&[
                "https://images.pexels.com/photos/260922/pexels-photo-260922.jpeg",
                "https://images.pexels.com/photos/776538/pexels-photo-776538.jpeg",
            ]),
            description: "Family-owned Italian restaurant serving authentic dishes with fresh ingredients since 1985.".to_string(),
            hours: week(
                "11:00 AM - 10:00 PM",
                "11:00 AM - 11:00 PM",
                "11:00 AM - 11:00 PM",
                "12:00 PM - 9:00 PM",
            ),
            contact: ShopContact {
                phone: "+1 (555) 123-4567".to_string(),
                email: "info@tonysitalian.com".to_string(),
                website: Some("www.tonysitalian.com".to_string()),
            },
            features: strings(&["Outdoor Seating", "Takeout", "Delivery", "Wine Bar"]),
            deals: strings(&["20% off lunch specials Mon-Fri", "Happy Hour 4-6 PM"]),
            is_open: true,
        },
        Shop {
            id: "2".to_string(),
            name: "Sazid Fitness Center".to_string(),
            category: ShopCategory::Fitness,
            subcategory: "Gym".to_string(),
            address: "456 Oak Avenue, Midtown".to_string(),
            distance: "0.7 miles".to_string(),
            rating: 4.5,
            reviews: 89,
            price: PriceTier::Pricey,
            images: strings(&[
                "https://images.pexels.com/photos/1552242/pexels-photo-1552242.jpeg",
                "https://images.pexels.com/photos/1552252/pexels-photo-1552252.jpeg",
            ]),
            description: "State-of-the-art fitness facility with personal trainers and group classes.".to_string(),
            hours: week(
                "5:00 AM - 11:00 PM",
                "5:00 AM - 10:00 PM",
                "6:00 AM - 8:00 PM",
                "7:00 AM - 8:00 PM",
            ),
            contact: ShopContact {
                phone: "+1 (555) 987-6543".to_string(),
                email: "info@urbanfitness.com".to_string(),
                website: None,
            },
            features: strings(&["Personal Training", "Group Classes", "Pool", "Sauna"]),
            deals: strings(&[
                "First month free for new members",
                "50% off personal training packages",
            ]),
            is_open: true,
        },
        Shop {
            id: "3".to_string(),
            name: "Ifan's Beauty Salon".to_string(),
            category: ShopCategory::Beauty,
            subcategory: "Hair & Nails".to_string(),
            address: "789 Fashion District, Downtown".to_string(),
            distance: "0.5 miles".to_string(),
            rating: 4.9,
            reviews: 203,
            price: PriceTier::Moderate,
            images: strings(&[
                "https://images.pexels.com/photos/3065209/pexels-photo-3065209.jpeg",
                "https://images.pexels.com/photos/3065171/pexels-photo-3065171.jpeg",
            ]),
            description: "Full-service beauty salon offering hair styling, coloring, and nail services.".to_string(),
            hours: salon_hours,
            contact: ShopContact {
                phone: "+1 (555) 246-8135".to_string(),
                email: "appointments@bellasbeauty.com".to_string(),
                website: None,
            },
            features: strings(&["Hair Styling", "Coloring", "Manicure", "Pedicure"]),
            deals: strings(&["Student discount 15%", "Package deals available"]),
            is_open: false,
        },
        Shop {
            id: "4".to_string(),
            name: "Walton Electronics".to_string(),
            category: ShopCategory::Shopping,
            subcategory: "Electronics".to_string(),
            address: "321 Tech Boulevard, Uptown".to_string(),
            distance: "1.2 miles".to_string(),
            rating: 4.3,
            reviews: 156,
            price: PriceTier::Pricey,
            images: strings(&[
                "https://images.pexels.com/photos/325153/pexels-photo-325153.jpeg",
                "https://images.pexels.com/photos/356056/pexels-photo-356056.jpeg",
            ]),
            description: "Electronics store with latest gadgets, computers, and accessories.".to_string(),
            hours: week(
                "10:00 AM - 9:00 PM",
                "10:00 AM - 9:00 PM",
                "10:00 AM - 9:00 PM",
                "11:00 AM - 7:00 PM",
            ),
            contact: ShopContact {
                phone: "+1 (555) 369-2580".to_string(),
                email: "info@techmart.com".to_string(),
                website: Some("www.techmart.com".to_string()),
            },
            features: strings(&["Tech Support", "Warranty Service", "Price Matching"]),
            deals: strings(&[
                "Back to school sale 25% off laptops",
                "Extended warranty deals",
            ]),
            is_open: true,
        },
    ]
}

pub fn comments() -> Vec<Comment> {
    let raw: [(&str, &str, &str); 10] = [
        ("Alex Chen", "This is such an informative article! I finally understand how blockchain works and its potential applications.", "2 hours ago"),
        ("Sarah Williams", "Great explanation of decentralization and smart contracts. The security aspects are fascinating!", "4 hours ago"),
        ("Michael Rodriguez", "The section about cryptocurrency and mining was particularly eye-opening. Thank you for sharing!", "6 hours ago"),
        ("Jennifer Kim", "As a computer science teacher, I'll definitely be sharing this with my students.", "8 hours ago"),
        ("David Park", "The potential for blockchain in supply chain management is incredible. This technology will change everything.", "10 hours ago"),
        ("Lisa Thompson", "Excellent overview of both the benefits and challenges of blockchain technology.", "12 hours ago"),
        ("Robert Garcia", "I appreciate how you explained complex concepts in simple terms.", "14 hours ago"),
        ("Emma Johnson", "This article should be required reading for all technology students.", "16 hours ago"),
        ("James Wilson", "The future implications discussed at the end are thought-provoking. Blockchain will reshape many industries.", "18 hours ago"),
        ("Maria Lopez", "Looking forward to more articles on emerging technologies!", "20 hours ago"),
    ];

    raw.iter()
        .zip(1u32..)
        .map(|((author, content, timestamp), id)| Comment {
            id,
            author: author.to_string(),
            content: content.to_string(),
            timestamp: timestamp.to_string(),
        })
        .collect()
}

pub fn article() -> Article {
    Article {
        title: "Understanding Blockchain Technology",
        author: "Dr. Marcus Thompson",
        paragraphs: vec![
            "Blockchain technology represents one of the most revolutionary innovations of the 21st century, fundamentally changing how we think about data storage, security, and digital transactions. At its core, blockchain is a distributed ledger that maintains a continuously growing list of records, called blocks, which are linked and secured using cryptography.",
            "The key innovation of blockchain lies in its decentralized nature and immutable record-keeping. Unlike traditional centralized databases controlled by a single entity, blockchain networks are distributed across multiple nodes, making them highly resistant to tampering and single points of failure.",
            "Smart contracts are self-executing contracts with terms written directly into code. They run on blockchain networks and execute automatically when predetermined conditions are met, removing intermediaries and reducing costs.",
            "The future of blockchain extends far beyond cryptocurrency, with applications spanning healthcare, voting systems, intellectual property protection, and digital identity verification.",
        ],
    }
}

pub fn author_profile() -> AuthorProfile {
    AuthorProfile {
        name: "Dr. Marcus Thompson",
        headline: "Blockchain Researcher & Cryptocurrency Expert",
        bio: "Dr. Marcus Thompson is a leading blockchain researcher and cryptocurrency expert with over 12 years of experience in distributed systems and cryptography.",
        location: "Boston, Massachusetts",
        education: "Ph.D. Computer Science, MIT",
        joined: "March 2019",
        expertise: vec![
            "Blockchain Technology",
            "Cryptocurrency",
            "Smart Contracts",
            "Distributed Systems",
            "Cryptography",
        ],
        achievements: vec![
            "Published 60+ research papers on blockchain and distributed systems",
            "Recipient of the IEEE Blockchain Innovation Award 2023",
            "Technical advisor for multiple Fortune 500 companies on blockchain adoption",
            "Keynote speaker at 30+ international blockchain conferences",
            "Co-founder of the Blockchain Research Institute",
        ],
    }
}

/// The two routes the planner offers for any from/to pair.
pub fn routes(from: &str, to: &str, mode: TransportMode) -> Vec<Route> {
    vec![
        Route {
            id: "1".to_string(),
            name: "Fastest Route".to_string(),
            from: from.to_string(),
            to: to.to_string(),
            duration_minutes: 25,
            distance: "2.3 miles".to_string(),
            mode,
            steps: strings(&[
                "Head north on Broadway",
                "Turn right on 42nd Street",
                "Continue for 0.5 miles",
                "Turn left on 7th Avenue",
                "Destination will be on your right",
            ]),
            safety_rating: 4.5,
            landmarks: strings(&["Times Square", "Bryant Park"]),
        },
        Route {
            id: "2".to_string(),
            name: "Scenic Route".to_string(),
            from: from.to_string(),
            to: to.to_string(),
            duration_minutes: 35,
            distance: "2.8 miles".to_string(),
            mode,
            steps: strings(&[
                "Head east on 14th Street",
                "Turn north on Park Avenue",
                "Continue through Union Square",
                "Turn right on 23rd Street",
                "Destination ahead",
            ]),
            safety_rating: 4.8,
            landmarks: strings(&["Union Square", "Flatiron Building", "Madison Square Park"]),
        },
    ]
}

fn features(items: &[(&'static str, bool, bool)]) -> Vec<PlanFeature> {
    items
        .iter()
        .map(|&(name, included, premium)| PlanFeature {
            name,
            included,
            premium,
        })
        .collect()
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            tier: SubscriptionTier::Free,
            name: "Explorer",
            description: "Perfect for getting started with basic city navigation",
            monthly_price: 0.0,
            yearly_price: 0.0,
            popular: false,
            features: features(&[
                ("Basic housing search (up to 10 listings)", true, false),
                ("Street navigation with turn-by-turn directions", true, false),
                ("Shop locator with basic filters", true, false),
                ("Public transportation routes", true, false),
                ("Community reviews and ratings", true, false),
                ("Mobile app access", true, false),
                ("Advanced housing filters", false, false),
                ("Premium listings access", false, false),
                ("Real-time traffic updates", false, false),
                ("Offline maps", false, false),
                ("Priority customer support", false, false),
                ("Exclusive deals and discounts", false, false),
            ]),
        },
        Plan {
            tier: SubscriptionTier::Basic,
            name: "Navigator",
            description: "Enhanced features for regular city explorers",
            monthly_price: 9.99,
            yearly_price: 99.99,
            popular: false,
            features: features(&[
                ("Unlimited housing search access", true, false),
                ("Advanced housing filters & saved searches", true, false),
                ("Premium shop directory with detailed info", true, false),
                ("Real-time traffic updates", true, false),
                ("Offline maps download", true, false),
                ("Neighborhood safety ratings", true, false),
                ("Email support within 24 hours", true, false),
                ("Premium listings access", false, false),
                ("Virtual tours for all properties", false, false),
                ("Concierge service", false, false),
                ("Exclusive deals and discounts", false, false),
                ("Priority booking assistance", false, false),
            ]),
        },
        Plan {
            tier: SubscriptionTier::Premium,
            name: "City Expert",
            description: "Complete city living solution with premium perks",
            monthly_price: 19.99,
            yearly_price: 199.99,
            popular: true,
            features: features(&[
                ("Everything in Navigator plan", true, false),
                ("Premium listings with exclusive properties", true, true),
                ("Virtual tours for all properties", true, true),
                ("Personal concierge service", true, true),
                ("Exclusive deals and member discounts", true, true),
                ("Priority booking assistance", true, true),
                ("Advanced analytics and insights", true, true),
                ("Custom itinerary planning", true, true),
                ("24/7 priority support", true, true),
                ("White-glove relocation assistance", true, true),
                ("Access to exclusive events", true, true),
                ("Personal city guide recommendations", true, true),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::is_closed_text;

    #[test]
    fn test_listing_ids_unique() {
        let listings = listings();
        let mut ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), listings.len());
    }

    #[test]
    fn test_every_shop_has_a_full_week() {
        for shop in shops() {
            assert_eq!(shop.hours.len(), 7, "{} hours incomplete", shop.name);
        }
    }

    #[test]
    fn test_salon_closed_on_monday() {
        let shops = shops();
        let salon = shops.iter().find(|s| s.id == "3").unwrap();
        assert!(salon.hours_on(Weekday::Mon).is_some_and(is_closed_text));
        assert!(salon.hours_on(Weekday::Tue).is_some_and(|h| !is_closed_text(h)));
        assert_eq!(salon.hours_on(Weekday::Thu), Some("9:00 AM - 8:00 PM"));
    }

    #[test]
    fn test_ten_comments_with_sequential_ids() {
        let comments = comments();
        assert_eq!(comments.len(), 10);
        assert_eq!(comments.first().map(|c| c.id), Some(1));
        assert_eq!(comments.last().map(|c| c.id), Some(10));
    }

    #[test]
    fn test_every_plan_lists_twelve_features() {
        for plan in plans() {
            assert_eq!(plan.features.len(), 12, "{} feature list", plan.name);
        }
    }

    #[test]
    fn test_savings_measured_against_twelve_monthly_payments() {
        let savings: Vec<f64> = plans().iter().map(Plan::yearly_savings).collect();
        // 12 * 9.99 - 99.99 and 12 * 19.99 - 199.99
        assert!(savings[0].abs() < 1e-9);
        assert!((savings[1] - 19.89).abs() < 1e-9);
        assert!((savings[2] - 39.89).abs() < 1e-9);
    }

    #[test]
    fn test_routes_carry_requested_mode() {
        let routes = routes("High Line", "Chelsea Market", TransportMode::Cycling);
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(|r| r.mode == TransportMode::Cycling));
        assert!(routes.iter().all(|r| r.to == "Chelsea Market"));
    }
}
