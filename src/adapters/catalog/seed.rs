//! Built-in content set. Values mirror the marketing site's data tables
//! verbatim, including printed price strings and typography.

use crate::domain::catalog::{
    Attraction, Catalog, CityPlace, CityPlaceKind, CulturalEvent, Destination, Experience,
    ItineraryDay, PlaceKind, PopularDestination, ShortExperience, Stay, Testimonial,
    TravelInsight, TravelPackage,
};
use crate::domain::dining::{DiningCategory, Eatery, FeaturedDish, MenuItem, RestaurantMenu};
use crate::domain::transport::{FlightOption, RideOption, TrainOption};

pub(crate) fn seed_catalog() -> Catalog {
    Catalog {
        destinations: destinations(),
        stays: stays(),
        experiences: experiences(),
        packages: packages(),
        attractions: attractions(),
        short_experiences: short_experiences(),
        cultural_events: cultural_events(),
        testimonials: testimonials(),
        insights: insights(),
        eateries: eateries(),
        featured_dishes: featured_dishes(),
        restaurant_menus: restaurant_menus(),
        rides: rides(),
        flights: flights(),
        trains: trains(),
        popular_destinations: popular_destinations(),
        city_places: city_places(),
    }
}

fn destinations() -> Vec<Destination> {
    vec![
        Destination {
            name: "Victoria Falls".into(),
            region: "Livingstone".into(),
            summary: "Witness the Mosi-oa-Tunya — the Smoke that Thunders — with misty rainbows, river safaris, and heritage townships in Livingstone.".into(),
            travel_season: "June – August".into(),
            rating: 4.9,
            highlights: vec![
                "Sunset Zambezi cruise".into(),
                "Helicopter flight".into(),
                "Moonbow viewing".into(),
            ],
        },
        Destination {
            name: "Lower Zambezi National Park".into(),
            region: "Chiawa".into(),
            summary: "Float past elephant herds on canoe safaris, track leopards at dusk, and unwind in riverside camps along the Lower Zambezi.".into(),
            travel_season: "April – October".into(),
            rating: 4.8,
            highlights: vec![
                "Canoe safari".into(),
                "Sunrise game drive".into(),
                "Riverbank sundowners".into(),
            ],
        },
        Destination {
            name: "Liuwa Plain".into(),
            region: "Western Province".into(),
            summary: "Follow the second-largest wildebeest migration, sunsets over endless plains, and the cultural legacy of the Lozi kingdom.".into(),
            travel_season: "October – December".into(),
            rating: 4.7,
            highlights: vec![
                "Wildebeest migration".into(),
                "Birding paradise".into(),
                "Traditional ceremonies".into(),
            ],
        },
    ]
}

fn stays() -> Vec<Stay> {
    vec![
        Stay {
            name: "Tongabezi Lodge".into(),
            location: "Livingstone • Zambezi Riverfront".into(),
            summary: "Private river cottages, floating dining decks, and bespoke butler service moments from Victoria Falls.".into(),
            rating: 4.9,
            price_per_night_usd: 620.0,
            sustainability_level: "Community led".into(),
        },
        Stay {
            name: "Chinzombo Camp".into(),
            location: "South Luangwa • Luangwa River".into(),
            summary: "Ultra-modern safari villas with plunge pools, immersive guiding, and conservation-focused experiences.".into(),
            rating: 4.8,
            price_per_night_usd: 890.0,
            sustainability_level: "Conservation partner".into(),
        },
        Stay {
            name: "Royal Zambezi Lodge".into(),
            location: "Lower Zambezi • Game Management Area".into(),
            summary: "Authentic safari lodge with spa pavilions, private guides, and tiger fishing on the Zambezi.".into(),
            rating: 4.7,
            price_per_night_usd: 540.0,
            sustainability_level: "Eco certified".into(),
        },
    ]
}

fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            name: "Cultural Safari".into(),
            summary: "Exclusive experience combining traditional village visits with wildlife encounters in Zambia's hidden gems.".into(),
            duration: "4 days • 3 nights".into(),
            style: "Yamuloko".into(),
            rating: 4.9,
            price_usd: 1180.0,
            original_price_usd: 1480.0,
            discount: "20% off".into(),
        },
        Experience {
            name: "Zambezi Adventure".into(),
            summary: "Special canoe expedition along the Lower Zambezi with cultural immersion and wildlife viewing.".into(),
            duration: "6 days • 5 nights".into(),
            style: "Yamuloko".into(),
            rating: 4.8,
            price_usd: 1880.0,
            original_price_usd: 2350.0,
            discount: "20% off".into(),
        },
        Experience {
            name: "Victoria Falls Experience".into(),
            summary: "Luxury package featuring Victoria Falls helicopter tours, cultural dining, and traditional ceremonies.".into(),
            duration: "3 days • 2 nights".into(),
            style: "Yamuloko".into(),
            rating: 4.7,
            price_usd: 784.0,
            original_price_usd: 980.0,
            discount: "20% off".into(),
        },
    ]
}

fn day(day: u32, title: &str, description: &str) -> ItineraryDay {
    ItineraryDay { day, title: title.into(), description: description.into() }
}

fn packages() -> Vec<TravelPackage> {
    vec![
        TravelPackage {
            id: "yamuloko-special".into(),
            name: "Discovery Package".into(),
            summary: "Exclusive discount package featuring Zambia's hidden gems with authentic cultural experiences and wildlife encounters.".into(),
            duration: "5 days • 4 nights".into(),
            group_size: "2-6 people".into(),
            difficulty: "Easy".into(),
            price_usd: 1850.0,
            original_price_usd: 2450.0,
            discount: "25% off".into(),
            rating: 4.8,
            review_count: 73,
            includes: vec![
                "Accommodation".into(),
                "All meals".into(),
                "Cultural activities".into(),
                "Game drives".into(),
                "Local guides".into(),
            ],
            highlights: vec![
                "Traditional villages".into(),
                "Wildlife viewing".into(),
                "Cultural ceremonies".into(),
                "Local crafts".into(),
            ],
            itinerary: vec![
                day(1, "Arrival & Welcome", "Traditional welcome ceremony and cultural briefing"),
                day(2, "Village Experience", "Community visit and traditional craft workshops"),
                day(3, "Wildlife Safari", "Game drives and nature walks"),
                day(4, "Cultural Immersion", "Local festivals and traditional dining"),
                day(5, "Departure", "Final cultural exchange and departure"),
            ],
            best_time: "April - November".into(),
            category: "Culture & Wildlife".into(),
        },
        TravelPackage {
            id: "zambia-classic".into(),
            name: "Classic Zambia Safari".into(),
            summary: "Experience the best of Zambia's wildlife and natural wonders in this comprehensive 10-day adventure.".into(),
            duration: "10 days • 9 nights".into(),
            group_size: "2-8 people".into(),
            difficulty: "Moderate".into(),
            price_usd: 4850.0,
            original_price_usd: 5200.0,
            discount: "7% off".into(),
            rating: 4.9,
            review_count: 127,
            includes: vec![
                "Accommodation".into(),
                "All meals".into(),
                "Game drives".into(),
                "Airport transfers".into(),
                "Professional guide".into(),
            ],
            highlights: vec![
                "Victoria Falls".into(),
                "South Luangwa".into(),
                "Lower Zambezi".into(),
                "Cultural experiences".into(),
            ],
            itinerary: vec![
                day(1, "Arrival in Lusaka", "Airport transfer and city orientation"),
                day(2, "Fly to South Luangwa", "Walking safari and night game drive"),
                day(3, "South Luangwa Full Day", "Morning and afternoon game drives"),
                day(4, "Lower Zambezi Transfer", "Scenic flight and canoe safari"),
                day(5, "Lower Zambezi Adventure", "Game drives and river activities"),
                day(6, "Victoria Falls", "Falls tour and sunset cruise"),
                day(7, "Victoria Falls Activities", "Adventure activities and cultural tour"),
                day(8, "Livingstone Heritage", "Museum visits and local markets"),
                day(9, "Final Safari", "Last game drive and departure prep"),
                day(10, "Departure", "Airport transfer and departure"),
            ],
            best_time: "May - October".into(),
            category: "Wildlife & Nature".into(),
        },
        TravelPackage {
            id: "cultural-immersion".into(),
            name: "Cultural Heritage Journey".into(),
            summary: "Immerse yourself in Zambia's rich cultural heritage with traditional ceremonies and community visits.".into(),
            duration: "7 days • 6 nights".into(),
            group_size: "4-12 people".into(),
            difficulty: "Easy".into(),
            price_usd: 2980.0,
            original_price_usd: 3200.0,
            discount: "7% off".into(),
            rating: 4.8,
            review_count: 89,
            includes: vec![
                "Accommodation".into(),
                "All meals".into(),
                "Cultural activities".into(),
                "Local guides".into(),
                "Transportation".into(),
            ],
            highlights: vec![
                "Kuomboka Ceremony".into(),
                "Traditional villages".into(),
                "Craft workshops".into(),
                "Local festivals".into(),
            ],
            itinerary: vec![
                day(1, "Lusaka Arrival", "Cultural center visit and traditional dinner"),
                day(2, "Mongu Journey", "Travel to Barotseland and palace visit"),
                day(3, "Kuomboka Preparation", "Ceremony preparations and cultural briefing"),
                day(4, "Kuomboka Ceremony", "Royal barge ceremony and celebrations"),
                day(5, "Village Experience", "Traditional village stay and activities"),
                day(6, "Craft Workshops", "Pottery, weaving, and wood carving"),
                day(7, "Departure", "Final cultural exchange and departure"),
            ],
            best_time: "March - May".into(),
            category: "Culture & Heritage".into(),
        },
        TravelPackage {
            id: "luxury-escape".into(),
            name: "Luxury Zambia Escape".into(),
            summary: "Indulge in Zambia's finest luxury lodges with private guides, gourmet dining, and exclusive experiences.".into(),
            duration: "8 days • 7 nights".into(),
            group_size: "2-6 people".into(),
            difficulty: "Easy".into(),
            price_usd: 8950.0,
            original_price_usd: 9500.0,
            discount: "6% off".into(),
            rating: 5.0,
            review_count: 45,
            includes: vec![
                "Luxury accommodation".into(),
                "Gourmet meals".into(),
                "Private guides".into(),
                "Helicopter transfers".into(),
                "Spa treatments".into(),
            ],
            highlights: vec![
                "Tongabezi Lodge".into(),
                "Private helicopter tours".into(),
                "Exclusive game drives".into(),
                "Spa experiences".into(),
            ],
            itinerary: vec![
                day(1, "VIP Arrival", "Private transfer to luxury lodge"),
                day(2, "Victoria Falls Luxury", "Private falls tour and helicopter flight"),
                day(3, "Zambezi Romance", "Private river cruise and spa treatment"),
                day(4, "South Luangwa Luxury", "Helicopter transfer to luxury camp"),
                day(5, "Private Safari", "Exclusive game drives with private guide"),
                day(6, "Bush Luxury", "Bush breakfast and sunset cocktails"),
                day(7, "Final Indulgence", "Spa day and gourmet farewell dinner"),
                day(8, "Departure", "Private transfer and departure"),
            ],
            best_time: "Year-round".into(),
            category: "Luxury & Romance".into(),
        },
        TravelPackage {
            id: "adventure-explorer".into(),
            name: "Adventure Explorer".into(),
            summary: "For thrill-seekers: white-water rafting, bungee jumping, and extreme sports in Zambia's adventure capital.".into(),
            duration: "6 days • 5 nights".into(),
            group_size: "4-10 people".into(),
            difficulty: "Challenging".into(),
            price_usd: 3450.0,
            original_price_usd: 3650.0,
            discount: "5% off".into(),
            rating: 4.7,
            review_count: 156,
            includes: vec![
                "Adventure accommodation".into(),
                "All meals".into(),
                "Adventure activities".into(),
                "Safety equipment".into(),
                "Expert guides".into(),
            ],
            highlights: vec![
                "White-water rafting".into(),
                "Bungee jumping".into(),
                "Zip-lining".into(),
                "Rock climbing".into(),
            ],
            itinerary: vec![
                day(1, "Adventure Briefing", "Safety orientation and equipment fitting"),
                day(2, "Victoria Falls Extreme", "Bungee jumping and zip-lining"),
                day(3, "Zambezi Rapids", "Full-day white-water rafting"),
                day(4, "Rock & Rappel", "Rock climbing and rappelling adventures"),
                day(5, "Multi-Activity Day", "Canoeing, fishing, and hiking"),
                day(6, "Final Challenge", "Gorge swing and departure"),
            ],
            best_time: "June - September".into(),
            category: "Adventure & Sports".into(),
        },
    ]
}

fn attractions() -> Vec<Attraction> {
    vec![
        Attraction {
            name: "Victoria Falls".into(),
            location: "Livingstone".into(),
            category: "Natural Wonder".into(),
            rating: 4.9,
            review_count: 2847,
            duration: "Full Day".into(),
            price_from_usd: 45.0,
            summary: "One of the Seven Natural Wonders of the World, Victoria Falls is a breathtaking spectacle of nature.".into(),
            highlights: vec![
                "World's largest waterfall".into(),
                "Adventure activities".into(),
                "UNESCO World Heritage Site".into(),
            ],
        },
        Attraction {
            name: "South Luangwa National Park".into(),
            location: "Eastern Province".into(),
            category: "Wildlife Safari".into(),
            rating: 4.8,
            review_count: 1523,
            duration: "3-5 Days".into(),
            price_from_usd: 120.0,
            summary: "Home to some of Africa's finest wildlife viewing and the birthplace of the walking safari.".into(),
            highlights: vec![
                "Walking safaris".into(),
                "Big Five wildlife".into(),
                "Pristine wilderness".into(),
            ],
        },
        Attraction {
            name: "Lake Kariba".into(),
            location: "Southern Province".into(),
            category: "Lake Adventure".into(),
            rating: 4.7,
            review_count: 892,
            duration: "2-3 Days".into(),
            price_from_usd: 80.0,
            summary: "One of the world's largest man-made lakes, perfect for fishing, boating, and wildlife viewing.".into(),
            highlights: vec![
                "Houseboat cruises".into(),
                "Tiger fishing".into(),
                "Sunset views".into(),
            ],
        },
        Attraction {
            name: "Kafue National Park".into(),
            location: "Central Province".into(),
            category: "Wildlife Safari".into(),
            rating: 4.6,
            review_count: 654,
            duration: "3-4 Days".into(),
            price_from_usd: 95.0,
            summary: "Zambia's largest national park, offering diverse ecosystems and abundant wildlife.".into(),
            highlights: vec![
                "Diverse wildlife".into(),
                "Boat safaris".into(),
                "Remote wilderness".into(),
            ],
        },
        Attraction {
            name: "Lower Zambezi National Park".into(),
            location: "Lusaka Province".into(),
            category: "River Safari".into(),
            rating: 4.8,
            review_count: 743,
            duration: "2-4 Days".into(),
            price_from_usd: 110.0,
            summary: "Experience the untamed beauty of the Zambezi River with canoe safaris and game drives.".into(),
            highlights: vec![
                "Canoe safaris".into(),
                "Elephant herds".into(),
                "River activities".into(),
            ],
        },
        Attraction {
            name: "Kasanka National Park".into(),
            location: "Central Province".into(),
            category: "Bat Migration".into(),
            rating: 4.5,
            review_count: 432,
            duration: "2-3 Days".into(),
            price_from_usd: 70.0,
            summary: "Witness the world's largest mammal migration - millions of fruit bats.".into(),
            highlights: vec![
                "Bat migration".into(),
                "Unique wildlife".into(),
                "Conservation success".into(),
            ],
        },
    ]
}

fn short_experiences() -> Vec<ShortExperience> {
    vec![
        ShortExperience {
            name: "Traditional Village Tour".into(),
            category: "Cultural".into(),
            duration: "Half Day".into(),
            price_from_usd: 35.0,
            summary: "Experience authentic Zambian culture and traditions in local villages.".into(),
        },
        ShortExperience {
            name: "Copper Mine Heritage Tour".into(),
            category: "Historical".into(),
            duration: "Full Day".into(),
            price_from_usd: 55.0,
            summary: "Discover Zambia's mining heritage and its impact on the nation's development.".into(),
        },
        ShortExperience {
            name: "Zambezi River Cruise".into(),
            category: "Adventure".into(),
            duration: "3 Hours".into(),
            price_from_usd: 40.0,
            summary: "Enjoy a scenic cruise along the mighty Zambezi River with wildlife viewing.".into(),
        },
        ShortExperience {
            name: "Lusaka City Walking Tour".into(),
            category: "Urban".into(),
            duration: "4 Hours".into(),
            price_from_usd: 25.0,
            summary: "Explore Zambia's capital city, its markets, museums, and vibrant culture.".into(),
        },
    ]
}

fn cultural_events() -> Vec<CulturalEvent> {
    vec![
        CulturalEvent {
            title: "Kuomboka Ceremony".into(),
            description: "Every April, the Litunga of Barotseland relocates from the floodplains in a royal barge, accompanied by vibrant paddler choirs.".into(),
            period: "April".into(),
            location: "Mongu".into(),
        },
        CulturalEvent {
            title: "Nc'wala Festival".into(),
            description: "The Ngoni people celebrate the first fruits harvest with warrior dances, drums, and traditional blessings for the land.".into(),
            period: "February".into(),
            location: "Chipata".into(),
        },
        CulturalEvent {
            title: "Livingstone Cultural Tram".into(),
            description: "Evening journeys sharing local storytelling, marimba sounds, and culinary tastings along the historic tramway.".into(),
            period: "Year-round".into(),
            location: "Livingstone".into(),
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Sibongile Mwansa".into(),
            role: "Conservation Filmmaker".into(),
            quote: "The itinerary balanced wildlife, culture, and community visits. Our guests left with a deeper love for Zambia.".into(),
            rating: 5.0,
        },
        Testimonial {
            name: "Thomas Nguyen".into(),
            role: "Adventure Travel Designer".into(),
            quote: "From the canoe expedition to the walking safari, every guide was insightful and genuinely passionate about conservation.".into(),
            rating: 4.8,
        },
        Testimonial {
            name: "Naledi Chilala".into(),
            role: "Cultural Curator".into(),
            quote: "The cultural immersion was authentic and respectful. Partnerships with local artisans made our journey unforgettable.".into(),
            rating: 5.0,
        },
    ]
}

fn insights() -> Vec<TravelInsight> {
    vec![
        TravelInsight {
            title: "Best time to visit".into(),
            summary: "Dry season (May-October) is perfect for safaris, while November brings emerald green landscapes and migratory birds.".into(),
        },
        TravelInsight {
            title: "Visa & entry guidance".into(),
            summary: "Most travellers can secure e-visas in advance. KAZA Univisa grants multi-entry access to both Zambia and Zimbabwe.".into(),
        },
        TravelInsight {
            title: "Health & safety".into(),
            summary: "We advise routine vaccinations and malaria prophylaxis. Our partner lodges maintain top-notch safety standards.".into(),
        },
        TravelInsight {
            title: "Responsible travel".into(),
            summary: "Support community-run conservancies and reduce plastic use. Each journey contributes to conservation initiatives.".into(),
        },
    ]
}

fn eateries() -> Vec<Eatery> {
    vec![
        Eatery {
            name: "KFC Kabulonga".into(),
            cuisine: "Fast food".into(),
            rating: 4.2,
            delivery_time: "50-60 min".into(),
            location: "Kabulonga, Lusaka".into(),
            summary: "Finger lickin' good fried chicken and sides.".into(),
            tags: vec!["Chicken".into(), "Fast Food".into(), "American".into()],
            category: DiningCategory::Restaurants,
        },
        Eatery {
            name: "Pizza Inn Longacres".into(),
            cuisine: "Pizza".into(),
            rating: 4.2,
            delivery_time: "40-50 min".into(),
            location: "Longacres, Lusaka".into(),
            summary: "Fresh pizza with quality ingredients and great taste.".into(),
            tags: vec!["Pizza".into(), "Italian".into(), "Delivery".into()],
            category: DiningCategory::Restaurants,
        },
        Eatery {
            name: "Hungry Lion Chilumbulu".into(),
            cuisine: "Fast food".into(),
            rating: 3.9,
            delivery_time: "35-45 min".into(),
            location: "Chilumbulu, Lusaka".into(),
            summary: "Popular local fast food chain with chicken and burgers.".into(),
            tags: vec!["Chicken".into(), "Burgers".into(), "Local".into()],
            category: DiningCategory::Restaurants,
        },
        Eatery {
            name: "TIMKET FOODS LEWANIKA".into(),
            cuisine: "Fast food".into(),
            rating: 4.3,
            delivery_time: "50-60 min".into(),
            location: "Lewanika Road, Lusaka".into(),
            summary: "Quality fast food with local and international options.".into(),
            tags: vec!["Fast Food".into(), "Variety".into(), "Quality".into()],
            category: DiningCategory::Restaurants,
        },
        Eatery {
            name: "Zambian Kitchen".into(),
            cuisine: "Traditional".into(),
            rating: 4.9,
            delivery_time: "45-60 min".into(),
            location: "Freedom Way, Lusaka".into(),
            summary: "Authentic Zambian cuisine featuring nshima, village chicken, and local vegetables.".into(),
            tags: vec!["Authentic".into(), "Local".into(), "Nshima".into()],
            category: DiningCategory::Traditional,
        },
        Eatery {
            name: "Mama Africa".into(),
            cuisine: "Traditional".into(),
            rating: 4.6,
            delivery_time: "50-70 min".into(),
            location: "Great East Road, Lusaka".into(),
            summary: "Traditional Zambian food with cultural performances on weekends.".into(),
            tags: vec!["Cultural".into(), "Entertainment".into(), "Traditional".into()],
            category: DiningCategory::Traditional,
        },
        Eatery {
            name: "Hungry Lion".into(),
            cuisine: "Fast food".into(),
            rating: 4.3,
            delivery_time: "30-45 min".into(),
            location: "Multiple locations across Lusaka".into(),
            summary: "Popular fast food chain serving fried chicken and burgers.".into(),
            tags: vec!["Chicken".into(), "Quick".into(), "Affordable".into()],
            category: DiningCategory::FastFood,
        },
        Eatery {
            name: "Debonairs Pizza".into(),
            cuisine: "Pizza".into(),
            rating: 4.4,
            delivery_time: "35-50 min".into(),
            location: "East Park Mall, Lusaka".into(),
            summary: "South African pizza chain with unique African-inspired toppings.".into(),
            tags: vec!["Pizza".into(), "Delivery".into(), "South African".into()],
            category: DiningCategory::FastFood,
        },
    ]
}

fn featured_dishes() -> Vec<FeaturedDish> {
    vec![
        FeaturedDish { name: "Special shawarma".into(), price: "58 K".into() },
        FeaturedDish { name: "Chicken wings & chips".into(), price: "102 K".into() },
        FeaturedDish { name: "Plain chips".into(), price: "37 K".into() },
        FeaturedDish { name: "Double pizza".into(), price: "89 K".into() },
    ]
}

fn restaurant_menus() -> Vec<RestaurantMenu> {
    vec![RestaurantMenu {
        restaurant: "KUNFU PANDA".into(),
        cuisine: "Chinese".into(),
        rating: 4.1,
        review_count: 132,
        delivery_time: "55-65 min".into(),
        discount: "10%".into(),
        min_order: "100 K".into(),
        delivery_fee: "K 1".into(),
        items: vec![
            MenuItem {
                name: "Bubble tea 珍珠奶茶".into(),
                price: "50K".into(),
                portion: "500 ml".into(),
            },
            MenuItem {
                name: "Fried rice with chicken 鸡肉炒饭".into(),
                price: "150K".into(),
                portion: "550 g".into(),
            },
            MenuItem {
                name: "Steamed Dumplings".into(),
                price: "80K".into(),
                portion: "6 pieces".into(),
            },
            MenuItem {
                name: "Noodles with Vegetables".into(),
                price: "120K".into(),
                portion: "400 g".into(),
            },
            MenuItem {
                name: "Sweet and Sour Pork".into(),
                price: "180K".into(),
                portion: "400 g".into(),
            },
            MenuItem {
                name: "Kung Pao Chicken".into(),
                price: "160K".into(),
                portion: "450 g".into(),
            },
            MenuItem {
                name: "Hot Pot Soup".into(),
                price: "200K".into(),
                portion: "Serves 2-3".into(),
            },
            MenuItem {
                name: "Green Tea Ice Cream".into(),
                price: "45K".into(),
                portion: "2 scoops".into(),
            },
        ],
    }]
}

fn rides() -> Vec<RideOption> {
    vec![
        RideOption {
            name: "YANGO Economy".into(),
            ride_type: "Economy".into(),
            rating: 4.8,
            fare: "K25".into(),
            eta: "3-5 min".into(),
            capacity: "4 passengers".into(),
            features: vec![
                "Air conditioning".into(),
                "GPS tracking".into(),
                "Safe ride".into(),
            ],
        },
        RideOption {
            name: "YANGO Comfort".into(),
            ride_type: "Comfort".into(),
            rating: 4.9,
            fare: "K35".into(),
            eta: "2-4 min".into(),
            capacity: "4 passengers".into(),
            features: vec![
                "Premium car".into(),
                "Air conditioning".into(),
                "Bottled water".into(),
            ],
        },
        RideOption {
            name: "YANGO XL".into(),
            ride_type: "Large Group".into(),
            rating: 4.7,
            fare: "K45".into(),
            eta: "4-6 min".into(),
            capacity: "6-8 passengers".into(),
            features: vec![
                "Large vehicle".into(),
                "Extra luggage space".into(),
                "Family friendly".into(),
            ],
        },
    ]
}

fn flights() -> Vec<FlightOption> {
    vec![
        FlightOption {
            airline: "Zambia Airways".into(),
            flight_number: "ZA 101".into(),
            departure_time: "08:30".into(),
            departure_airport: "Kenneth Kaunda International Airport (LUN)".into(),
            departure_city: "Lusaka".into(),
            arrival_time: "10:45".into(),
            arrival_airport: "Harry Mwanga Nkumbula International Airport (LVI)".into(),
            arrival_city: "Livingstone".into(),
            duration: "2h 15m".into(),
            aircraft: "Boeing 737-800".into(),
            price: "$180".into(),
            class: "Economy".into(),
            amenities: vec![
                "WiFi".into(),
                "Refreshments".into(),
                "Checked Bag".into(),
            ],
            stops: "Direct".into(),
            rating: 4.2,
        },
        FlightOption {
            airline: "Proflight Zambia".into(),
            flight_number: "PF 205".into(),
            departure_time: "14:20".into(),
            departure_airport: "Kenneth Kaunda International Airport (LUN)".into(),
            departure_city: "Lusaka".into(),
            arrival_time: "16:30".into(),
            arrival_airport: "Harry Mwanga Nkumbula International Airport (LVI)".into(),
            arrival_city: "Livingstone".into(),
            duration: "2h 10m".into(),
            aircraft: "Jetstream 41".into(),
            price: "$165".into(),
            class: "Economy".into(),
            amenities: vec![
                "Light Refreshments".into(),
                "Checked Bag".into(),
            ],
            stops: "Direct".into(),
            rating: 4.0,
        },
        FlightOption {
            airline: "Ethiopian Airlines".into(),
            flight_number: "ET 835".into(),
            departure_time: "11:15".into(),
            departure_airport: "Kenneth Kaunda International Airport (LUN)".into(),
            departure_city: "Lusaka".into(),
            arrival_time: "15:40".into(),
            arrival_airport: "Simon Mwansa Kapwepwe International Airport (NLA)".into(),
            arrival_city: "Ndola".into(),
            duration: "4h 25m".into(),
            aircraft: "Boeing 737-800".into(),
            price: "$220".into(),
            class: "Economy".into(),
            amenities: vec![
                "WiFi".into(),
                "Meal Service".into(),
                "Entertainment".into(),
                "Checked Bag".into(),
            ],
            stops: "1 Stop (ADD)".into(),
            rating: 4.5,
        },
    ]
}

fn trains() -> Vec<TrainOption> {
    vec![
        TrainOption {
            operator: "Zambia Railways Limited".into(),
            train_number: "ZRL 001".into(),
            departure_time: "07:00".into(),
            departure_station: "Lusaka Central Station".into(),
            departure_city: "Lusaka".into(),
            arrival_time: "19:30".into(),
            arrival_station: "Livingstone Railway Station".into(),
            arrival_city: "Livingstone".into(),
            duration: "12h 30m".into(),
            service: "Express Passenger".into(),
            price: "$25".into(),
            class: "Economy Class".into(),
            amenities: vec![
                "Dining Car".into(),
                "Restrooms".into(),
                "Luggage Storage".into(),
            ],
            stops: "5 Stops".into(),
            rating: 3.8,
            route: "Lusaka - Kafue - Mazabuka - Choma - Livingstone".into(),
        },
        TrainOption {
            operator: "Zambia Railways Limited".into(),
            train_number: "ZRL 003".into(),
            departure_time: "06:30".into(),
            departure_station: "Lusaka Central Station".into(),
            departure_city: "Lusaka".into(),
            arrival_time: "14:45".into(),
            arrival_station: "Kitwe Railway Station".into(),
            arrival_city: "Kitwe".into(),
            duration: "8h 15m".into(),
            service: "Regional Service".into(),
            price: "$18".into(),
            class: "Economy Class".into(),
            amenities: vec![
                "Refreshments".into(),
                "Restrooms".into(),
                "Luggage Storage".into(),
            ],
            stops: "7 Stops".into(),
            rating: 3.5,
            route: "Lusaka - Kabwe - Kapiri Mposhi - Ndola - Kitwe".into(),
        },
        TrainOption {
            operator: "TAZARA Railway".into(),
            train_number: "TZ 101".into(),
            departure_time: "14:00".into(),
            departure_station: "New Kapiri Mposhi Station".into(),
            departure_city: "Kapiri Mposhi".into(),
            arrival_time: "08:30".into(),
            arrival_station: "Dar es Salaam Central Station".into(),
            arrival_city: "Dar es Salaam".into(),
            duration: "18h 30m".into(),
            service: "International Express".into(),
            price: "$45".into(),
            class: "Sleeper Class".into(),
            amenities: vec![
                "Sleeping Berths".into(),
                "Dining Car".into(),
                "Restrooms".into(),
                "Luggage Storage".into(),
            ],
            stops: "12 Stops".into(),
            rating: 4.1,
            route: "Kapiri Mposhi - Serenje - Kasama - Mbeya - Dar es Salaam".into(),
        },
        TrainOption {
            operator: "Zambia Railways Limited".into(),
            train_number: "ZRL 005".into(),
            departure_time: "15:30".into(),
            departure_station: "Lusaka Central Station".into(),
            departure_city: "Lusaka".into(),
            arrival_time: "22:15".into(),
            arrival_station: "Ndola Railway Station".into(),
            arrival_city: "Ndola".into(),
            duration: "6h 45m".into(),
            service: "Express Service".into(),
            price: "$22".into(),
            class: "First Class".into(),
            amenities: vec![
                "Air Conditioning".into(),
                "Dining Car".into(),
                "Wifi".into(),
                "Comfortable Seating".into(),
            ],
            stops: "3 Stops".into(),
            rating: 4.2,
            route: "Lusaka - Kabwe - Kapiri Mposhi - Ndola".into(),
        },
    ]
}

fn popular_destinations() -> Vec<PopularDestination> {
    fn entry(name: &str, region: &str, kind: PlaceKind) -> PopularDestination {
        PopularDestination { name: name.into(), region: region.into(), kind }
    }
    vec![
        entry("Victoria Falls", "Southern Province", PlaceKind::Attraction),
        entry("South Luangwa National Park", "Eastern Province", PlaceKind::Park),
        entry("Lower Zambezi National Park", "Southern Province", PlaceKind::Park),
        entry("Kafue National Park", "Central Province", PlaceKind::Park),
        entry("Lusaka", "Lusaka Province", PlaceKind::City),
        entry("Livingstone", "Southern Province", PlaceKind::City),
        entry("Kasanka National Park", "Central Province", PlaceKind::Park),
        entry("North Luangwa National Park", "Northern Province", PlaceKind::Park),
        entry("Bangweulu Wetlands", "Northern Province", PlaceKind::Attraction),
        entry("Liuwa Plain National Park", "Western Province", PlaceKind::Park),
        entry("Mosi-oa-Tunya National Park", "Southern Province", PlaceKind::Park),
        entry("Lochinvar National Park", "Southern Province", PlaceKind::Park),
        entry("Blue Lagoon National Park", "Central Province", PlaceKind::Park),
        entry("Sioma Ngwezi National Park", "Western Province", PlaceKind::Park),
        entry("Mufumbwe", "North-Western Province", PlaceKind::City),
    ]
}

fn city_places() -> Vec<CityPlace> {
    fn entry(name: &str, area: &str, kind: CityPlaceKind) -> CityPlace {
        CityPlace { name: name.into(), area: area.into(), kind }
    }
    vec![
        entry("Kenneth Kaunda International Airport", "Lusaka", CityPlaceKind::Airport),
        entry("Manda Hill Shopping Mall", "Lusaka", CityPlaceKind::Mall),
        entry("East Park Mall", "Lusaka", CityPlaceKind::Mall),
        entry("Levy Mwanawasa Hospital", "Lusaka", CityPlaceKind::Hospital),
        entry("University of Zambia", "Lusaka", CityPlaceKind::University),
        entry("Intercontinental Hotel", "Lusaka", CityPlaceKind::Hotel),
        entry("New Life Medical Centre", "Libala Stage 1", CityPlaceKind::Hospital),
        entry("Interland", "Burma Road", CityPlaceKind::Mall),
        entry("Ridgeway Campus", "Civic Centre", CityPlaceKind::University),
        entry("Ibex Hill", "Lusaka", CityPlaceKind::Residential),
        entry("Woodlands", "Chindo Road", CityPlaceKind::Residential),
        entry("Zcas University", "Civic Centre", CityPlaceKind::University),
        entry("Pinnacle Mall", "Woodlands", CityPlaceKind::Mall),
        entry("Crossroads Mall", "Great East Road", CityPlaceKind::Mall),
        entry("Arcades Shopping Mall", "Great East Road", CityPlaceKind::Mall),
        entry("Lusaka City Market", "City Centre", CityPlaceKind::Landmark),
        entry("Freedom Park", "Freedom Way", CityPlaceKind::Landmark),
        entry("Cairo Road", "City Centre", CityPlaceKind::Landmark),
        entry("Chilenje", "Lusaka", CityPlaceKind::Residential),
        entry("Kabulonga", "Lusaka", CityPlaceKind::Residential),
        entry("Roma", "Lusaka", CityPlaceKind::Residential),
        entry("Avondale", "Lusaka", CityPlaceKind::Residential),
        entry("Olympia", "Lusaka", CityPlaceKind::Residential),
        entry("Chelstone", "Lusaka", CityPlaceKind::Residential),
        entry("Garden Compound", "Lusaka", CityPlaceKind::Residential),
        entry("Matero", "Lusaka", CityPlaceKind::Residential),
        entry("Ng'ombe", "Lusaka", CityPlaceKind::Residential),
        entry("Kalingalinga", "Lusaka", CityPlaceKind::Residential),
        entry("Chawama", "Lusaka", CityPlaceKind::Residential),
    ]
}
