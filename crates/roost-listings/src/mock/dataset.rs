//! Static demo listings served when the upstream is unavailable or mock mode
//! is on.
//!
//! Records are finalized once on first use; callers only ever see clones.

use std::sync::LazyLock;

use roost_core::{Property, DEFAULT_CURRENCY};

use crate::asset::display_listing_date;

const IMG_BRIGHT: &str = "/static/img/listings/apartment-bright.png";
const IMG_FAMILY: &str = "/static/img/listings/family-home.png";
const IMG_STUDIO: &str = "/static/img/listings/studio.png";
const IMG_MODERN: &str = "/static/img/listings/apartment-modern.png";
const IMG_OFFICE: &str = "/static/img/listings/office-floor.png";

struct Seed {
    id: &'static str,
    title: &'static str,
    address: &'static str,
    description: &'static str,
    price: f64,
    image: &'static str,
    badges: &'static [&'static str],
    build_year: Option<i32>,
    listed_on: Option<&'static str>,
    bedrooms: u32,
    bathrooms: u32,
    area: u32,
    parking: u32,
}

impl Seed {
    fn to_property(&self) -> Property {
        let (listing_date, listing_year) = match self.listed_on.map(display_listing_date) {
            Some((date, year)) => (Some(date), year),
            None => (None, None),
        };
        Property {
            id: self.id.to_string(),
            title: self.title.to_string(),
            address: self.address.to_string(),
            description: self.description.to_string(),
            price: self.price,
            currency: DEFAULT_CURRENCY.to_string(),
            images: vec![self.image.to_string()],
            badges: self.badges.iter().map(|b| (*b).to_string()).collect(),
            build_year: self.build_year,
            listing_date,
            listing_year,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            parking: self.parking,
            ..Property::default()
        }
        .finalize()
    }
}

pub(super) static CATALOG: LazyLock<Vec<Property>> =
    LazyLock::new(|| SEEDS.iter().map(Seed::to_property).collect());

const SEEDS: &[Seed] = &[
    Seed {
        id: "mock-res-uttara-01",
        title: "Luxury Apartment in Uttara Sec 7",
        address: "House 12, Road 7, Sector 7, Uttara, Dhaka",
        description: "Bright three-bedroom flat with modern finishes, a short walk from the Sector 7 park and shops.",
        price: 45_000.0,
        image: IMG_BRIGHT,
        badges: &["To-let", "Verified", "Residential", "Fully Furnished"],
        build_year: Some(2020),
        listed_on: Some("2024-09-18"),
        bedrooms: 3,
        bathrooms: 3,
        area: 1800,
        parking: 2,
    },
    Seed {
        id: "mock-res-uttara-02",
        title: "Modern Family Home Uttara Sec 10",
        address: "Plot 25, Uttara Sec 10, Dhaka",
        description: "Four-bedroom family home with attached baths, a wide balcony and two covered parking bays.",
        price: 8_500_000.0,
        image: IMG_FAMILY,
        badges: &["For Sale", "Verified", "Residential"],
        build_year: Some(2018),
        listed_on: Some("2024-10-05"),
        bedrooms: 4,
        bathrooms: 4,
        area: 2200,
        parking: 2,
    },
    Seed {
        id: "mock-res-uttara-03",
        title: "Cozy Studio Apartment Uttara South",
        address: "Uttara South, Sector 3, Dhaka",
        description: "Compact studio close to the airport road, suited to a single professional.",
        price: 18_000.0,
        image: IMG_STUDIO,
        badges: &["To-let", "Verified", "Residential", "Semi-Furnished"],
        build_year: Some(2016),
        listed_on: Some("2024-08-12"),
        bedrooms: 1,
        bathrooms: 1,
        area: 650,
        parking: 1,
    },
    Seed {
        id: "mock-res-uttara-04",
        title: "Spacious 4BR Apartment Uttara Sec 12",
        address: "Road 15, Sector 12, Uttara, Dhaka",
        description: "Large corner unit on a quiet road with lift and generator backup.",
        price: 55_000.0,
        image: IMG_MODERN,
        badges: &["To-let", "Verified", "Residential", "Fully Furnished"],
        build_year: Some(2019),
        listed_on: Some("2024-09-01"),
        bedrooms: 4,
        bathrooms: 3,
        area: 2000,
        parking: 2,
    },
    Seed {
        id: "mock-com-uttara-01",
        title: "Premium Office Space Uttara Sec 11",
        address: "Building: Crystal Tower, Sector 11, Uttara, Dhaka",
        description: "Open-plan office floor with reception, two washrooms and dedicated parking.",
        price: 120_000.0,
        image: IMG_OFFICE,
        badges: &["To-let", "Verified", "Commercial", "Office Space"],
        build_year: Some(2015),
        listed_on: Some("2024-07-20"),
        bedrooms: 0,
        bathrooms: 2,
        area: 2500,
        parking: 3,
    },
    Seed {
        id: "mock-com-uttara-02",
        title: "Retail Shop Space Uttara Sec 4",
        address: "Shop 5, Ground Floor, Uttara Sec 4, Dhaka",
        description: "Ground-floor shop with street frontage on a busy market lane.",
        price: 3_500_000.0,
        image: IMG_FAMILY,
        badges: &["For Sale", "Verified", "Commercial", "Retail"],
        build_year: Some(2014),
        listed_on: Some("2024-06-15"),
        bedrooms: 0,
        bathrooms: 1,
        area: 800,
        parking: 0,
    },
    Seed {
        id: "mock-res-gulshan-01",
        title: "Elegant Penthouse in Gulshan 2",
        address: "Road 78, Gulshan 2, Dhaka",
        description: "Top-floor penthouse with a private terrace overlooking Gulshan lake.",
        price: 95_000.0,
        image: IMG_BRIGHT,
        badges: &["To-let", "Verified", "Residential", "Fully Furnished", "Luxury"],
        build_year: None,
        listed_on: None,
        bedrooms: 5,
        bathrooms: 5,
        area: 3500,
        parking: 3,
    },
    Seed {
        id: "mock-res-gulshan-02",
        title: "Modern 3BR Flat Gulshan 1",
        address: "House 45, Road 12, Gulshan 1, Dhaka",
        description: "Well-kept three-bedroom flat near Gulshan 1 circle.",
        price: 65_000.0,
        image: IMG_MODERN,
        badges: &["To-let", "Verified", "Residential", "Semi-Furnished"],
        build_year: None,
        listed_on: None,
        bedrooms: 3,
        bathrooms: 2,
        area: 1600,
        parking: 2,
    },
    Seed {
        id: "mock-com-gulshan-01",
        title: "Corporate Office Gulshan Avenue",
        address: "Gulshan Avenue, Gulshan 1, Dhaka",
        description: "Full corporate floor on the avenue with five parking bays.",
        price: 250_000.0,
        image: IMG_OFFICE,
        badges: &["To-let", "Verified", "Commercial", "Office Space", "Premium"],
        build_year: None,
        listed_on: None,
        bedrooms: 0,
        bathrooms: 4,
        area: 4000,
        parking: 5,
    },
    Seed {
        id: "mock-res-banani-01",
        title: "Luxurious Apartment Banani DOHS",
        address: "Block C, Road 5, Banani DOHS, Dhaka",
        description: "Four-bedroom apartment in a gated DOHS block.",
        price: 75_000.0,
        image: IMG_STUDIO,
        badges: &["To-let", "Verified", "Residential", "Fully Furnished"],
        build_year: None,
        listed_on: None,
        bedrooms: 4,
        bathrooms: 4,
        area: 2400,
        parking: 2,
    },
    Seed {
        id: "mock-res-banani-02",
        title: "2 Bedroom Apartment in Banani",
        address: "Road 11, Banani, Dhaka",
        description: "Two-bedroom flat on Road 11, close to restaurants and the Banani market.",
        price: 35_000.0,
        image: IMG_FAMILY,
        badges: &["To-let", "Verified", "Residential"],
        build_year: None,
        listed_on: None,
        bedrooms: 2,
        bathrooms: 2,
        area: 1100,
        parking: 1,
    },
    Seed {
        id: "mock-res-dhanmondi-01",
        title: "Beautiful Lake View Flat Dhanmondi",
        address: "Road 8/A, Dhanmondi, Dhaka",
        description: "Three-bedroom flat facing Dhanmondi lake.",
        price: 55_000.0,
        image: IMG_BRIGHT,
        badges: &["To-let", "Verified", "Residential", "Lake View"],
        build_year: None,
        listed_on: None,
        bedrooms: 3,
        bathrooms: 3,
        area: 1900,
        parking: 2,
    },
    Seed {
        id: "mock-res-dhanmondi-02",
        title: "Spacious Family Apartment Dhanmondi 15",
        address: "Road 15, Dhanmondi, Dhaka",
        description: "Four-bedroom apartment for sale in an established Dhanmondi building.",
        price: 12_000_000.0,
        image: IMG_MODERN,
        badges: &["For Sale", "Verified", "Residential"],
        build_year: None,
        listed_on: None,
        bedrooms: 4,
        bathrooms: 3,
        area: 2100,
        parking: 2,
    },
    Seed {
        id: "mock-com-dhanmondi-01",
        title: "Commercial Space Satmasjid Road",
        address: "Satmasjid Road, Dhanmondi, Dhaka",
        description: "Retail or showroom space on Satmasjid Road.",
        price: 85_000.0,
        image: IMG_OFFICE,
        badges: &["To-let", "Verified", "Commercial", "Retail"],
        build_year: None,
        listed_on: None,
        bedrooms: 0,
        bathrooms: 2,
        area: 1500,
        parking: 1,
    },
    Seed {
        id: "mock-res-mirpur-01",
        title: "Affordable Family Flat Mirpur 10",
        address: "Road 12, Mirpur 10, Dhaka",
        description: "Three-bedroom family flat near the Mirpur 10 metro station.",
        price: 22_000.0,
        image: IMG_STUDIO,
        badges: &["To-let", "Verified", "Residential"],
        build_year: None,
        listed_on: None,
        bedrooms: 3,
        bathrooms: 2,
        area: 1200,
        parking: 1,
    },
    Seed {
        id: "mock-res-mirpur-02",
        title: "Budget Friendly 2BR Mirpur 11",
        address: "Section 11, Mirpur, Dhaka",
        description: "Two-bedroom flat on a budget, walking distance to Mirpur 11 bazaar.",
        price: 16_000.0,
        image: IMG_FAMILY,
        badges: &["To-let", "Verified", "Residential"],
        build_year: None,
        listed_on: None,
        bedrooms: 2,
        bathrooms: 1,
        area: 900,
        parking: 0,
    },
    Seed {
        id: "mock-res-bashundhara-01",
        title: "Modern Apartment Bashundhara R/A",
        address: "Block G, Road 5, Bashundhara R/A, Dhaka",
        description: "Three-bedroom apartment in Block G with a children's play area.",
        price: 48_000.0,
        image: IMG_BRIGHT,
        badges: &["To-let", "Verified", "Residential", "Semi-Furnished"],
        build_year: None,
        listed_on: None,
        bedrooms: 3,
        bathrooms: 3,
        area: 1700,
        parking: 2,
    },
    Seed {
        id: "mock-res-bashundhara-02",
        title: "Luxury Villa Bashundhara",
        address: "Block D, Bashundhara R/A, Dhaka",
        description: "Six-bedroom detached villa with garden and four-car garage.",
        price: 25_000_000.0,
        image: IMG_MODERN,
        badges: &["For Sale", "Verified", "Residential", "Luxury"],
        build_year: None,
        listed_on: None,
        bedrooms: 6,
        bathrooms: 6,
        area: 4500,
        parking: 4,
    },
    Seed {
        id: "mock-res-mohammadpur-01",
        title: "Comfortable Flat Mohammadpur",
        address: "Nobodoy Housing, Mohammadpur, Dhaka",
        description: "Two-bedroom flat inside Nobodoy Housing.",
        price: 20_000.0,
        image: IMG_STUDIO,
        badges: &["To-let", "Verified", "Residential"],
        build_year: None,
        listed_on: None,
        bedrooms: 2,
        bathrooms: 2,
        area: 1000,
        parking: 1,
    },
    Seed {
        id: "mock-hostel-01",
        title: "Student Hostel Near NSU Bashundhara",
        address: "Near NSU, Bashundhara, Dhaka",
        description: "Shared student rooms with meals, a few minutes from NSU.",
        price: 8_000.0,
        image: IMG_FAMILY,
        badges: &["To-let", "Verified", "Hostel", "Shared"],
        build_year: None,
        listed_on: None,
        bedrooms: 1,
        bathrooms: 1,
        area: 250,
        parking: 0,
    },
    Seed {
        id: "mock-hostel-02",
        title: "Working Professional Hostel Uttara",
        address: "Sector 9, Uttara, Dhaka",
        description: "Furnished single rooms for working professionals.",
        price: 12_000.0,
        image: IMG_STUDIO,
        badges: &["To-let", "Verified", "Hostel", "Furnished"],
        build_year: None,
        listed_on: None,
        bedrooms: 1,
        bathrooms: 1,
        area: 350,
        parking: 0,
    },
    Seed {
        id: "mock-str-01",
        title: "Service Apartment Banani (Daily/Monthly)",
        address: "Road 17, Banani, Dhaka",
        description: "Furnished one-bedroom available by the night or the month.",
        price: 3_500.0,
        image: IMG_BRIGHT,
        badges: &["To-let", "Verified", "Short Term Rental", "Fully Furnished"],
        build_year: None,
        listed_on: None,
        bedrooms: 1,
        bathrooms: 1,
        area: 550,
        parking: 0,
    },
    Seed {
        id: "mock-str-02",
        title: "Serviced Studio Gulshan 2",
        address: "Road 86, Gulshan 2, Dhaka",
        description: "Serviced studio with daily housekeeping.",
        price: 4_500.0,
        image: IMG_MODERN,
        badges: &["To-let", "Verified", "Short Term Rental", "Luxury"],
        build_year: None,
        listed_on: None,
        bedrooms: 1,
        bathrooms: 1,
        area: 600,
        parking: 1,
    },
    Seed {
        id: "mock-res-baridhara-01",
        title: "Diplomatic Zone Apartment Baridhara",
        address: "Road 4, Baridhara, Dhaka",
        description: "Three-bedroom apartment in the diplomatic zone with round-the-clock security.",
        price: 110_000.0,
        image: IMG_BRIGHT,
        badges: &["To-let", "Verified", "Residential", "Fully Furnished"],
        build_year: Some(2021),
        listed_on: Some("2024-11-02"),
        bedrooms: 3,
        bathrooms: 3,
        area: 2300,
        parking: 2,
    },
    Seed {
        id: "mock-res-nikunja-01",
        title: "Family Apartment Nikunja 2",
        address: "Road 9, Nikunja 2, Dhaka",
        description: "Three-bedroom apartment near the airport, ready for handover.",
        price: 6_500_000.0,
        image: IMG_FAMILY,
        badges: &["For Sale", "Verified", "Residential"],
        build_year: Some(2017),
        listed_on: Some("2024-05-28"),
        bedrooms: 3,
        bathrooms: 2,
        area: 1550,
        parking: 1,
    },
];
