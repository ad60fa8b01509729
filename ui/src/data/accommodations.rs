//! Static accommodation catalogue and lookup by id.

#[derive(Debug, Clone, PartialEq)]
pub struct Host {
    pub name: &'static str,
    pub avatar: &'static str,
    pub joined: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Accommodation {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub rating: f32,
    pub reviews: u32,
    /// Nightly rate in whole currency units.
    pub price: u32,
    pub guests: u32,
    pub features: &'static [&'static str],
    pub images: &'static [&'static str],
    pub description: &'static str,
    pub amenities: &'static [&'static str],
    pub host: Host,
}

impl Accommodation {
    /// Card image (first gallery image).
    pub fn cover(&self) -> &'static str {
        self.images.first().copied().unwrap_or_default()
    }

    /// Card view only shows the first two feature tags.
    pub fn card_features(&self) -> &'static [&'static str] {
        &self.features[..self.features.len().min(2)]
    }

    pub fn details_href(&self) -> String {
        format!("/accommodations/details?id={}", self.id)
    }
}

pub static ACCOMMODATIONS: [Accommodation; 4] = [
    Accommodation {
        id: 1,
        name: "Atlas Mountain Eco-Lodge",
        location: "High Atlas Mountains, Morocco",
        rating: 4.9,
        reviews: 127,
        price: 85,
        guests: 4,
        features: &["Mountain View", "Organic Garden", "Solar Power"],
        images: &[
            "https://images.unsplash.com/photo-1571896349842-33c89424de2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1506744038136-46273834b3fb?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1493809842364-78817add7ffb?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1501436513145-30f24e19fcc4?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1502780402662-acc01917949e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        ],
        description: "Experience the serenity of the High Atlas Mountains at our eco-friendly lodge, blending sustainable living with breathtaking views. Enjoy organic meals, fresh mountain air, and hiking trails that connect you with nature.",
        amenities: &["Kitchen", "Wifi", "Free parking", "Garden", "Solar panels", "Compost toilet"],
        host: Host {
            name: "Mohammed",
            avatar: "https://randomuser.me/api/portraits/men/32.jpg",
            joined: "2021",
        },
    },
    Accommodation {
        id: 2,
        name: "Berber Traditional Farm Stay",
        location: "Ourika Valley, Morocco",
        rating: 4.8,
        reviews: 89,
        price: 65,
        guests: 6,
        features: &["Farm Experience", "Traditional Cooking", "Hiking Trails"],
        images: &[
            "https://images.unsplash.com/photo-1542314831-068cd1dbfeeb?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1556075798-4825dfaaf498?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1544734372-1b5f3da43e8f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1506744038136-46273834b3fb?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        ],
        description: "Live the rhythm of a working Berber farm in the Ourika Valley. Help with the harvest, learn to cook tagine over a wood fire, and fall asleep to the sound of the river after a day on the valley trails.",
        amenities: &["Kitchen", "Wifi", "Free parking", "Farm tours", "Cooking classes", "Terrace", "Rainwater harvesting", "Family rooms"],
        host: Host {
            name: "Aicha",
            avatar: "https://randomuser.me/api/portraits/women/44.jpg",
            joined: "2020",
        },
    },
    Accommodation {
        id: 3,
        name: "Sahara Desert Camp",
        location: "Merzouga Dunes, Morocco",
        rating: 4.7,
        reviews: 156,
        price: 120,
        guests: 8,
        features: &["Stargazing", "Camel Trekking", "Authentic Cuisine"],
        images: &[
            "/images/img.jpeg",
            "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        ],
        description: "Sleep under the clearest skies in Morocco at our solar-powered camp in the Erg Chebbi dunes. Evenings bring guided stargazing, Gnawa music around the fire, and slow-cooked desert cuisine.",
        amenities: &["Solar lighting", "Shared bathroom", "Breakfast included", "Telescope", "Camel trekking"],
        host: Host {
            name: "Youssef",
            avatar: "https://randomuser.me/api/portraits/men/46.jpg",
            joined: "2019",
        },
    },
    Accommodation {
        id: 4,
        name: "Coastal Argan Farm",
        location: "Essaouira Region, Morocco",
        rating: 4.6,
        reviews: 73,
        price: 75,
        guests: 5,
        features: &["Ocean View", "Argan Oil Workshop", "Beach Access"],
        images: &[
            "/images/img2.jpeg",
            "https://images.unsplash.com/photo-1544734372-1b5f3da43e8f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
            "https://images.unsplash.com/photo-1501436513145-30f24e19fcc4?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
        ],
        description: "An argan grove a few minutes from the Atlantic, run with the women's cooperative that presses our oil. Join a workshop, walk to the beach, and watch the sunset from the roof terrace.",
        amenities: &["Kitchen", "Wifi", "Beach access", "Argan workshop", "Sea view terrace", "Bicycles", "Free parking"],
        host: Host {
            name: "Fatima",
            avatar: "https://randomuser.me/api/portraits/women/68.jpg",
            joined: "2022",
        },
    },
];

/// Result of looking up an accommodation by its (query string) id.
///
/// Unknown or malformed ids still render the first record, but the fallback
/// stays visible to callers.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Accommodation),
    Fallback {
        requested: String,
        record: &'a Accommodation,
    },
}

impl<'a> Lookup<'a> {
    pub fn record(&self) -> &'a Accommodation {
        match self {
            Lookup::Found(record) | Lookup::Fallback { record, .. } => *record,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Lookup::Fallback { .. })
    }
}

/// Look up `raw_id` in `catalogue`, falling back to its first record.
///
/// Returns `None` only for an empty catalogue.
pub fn find_in<'a>(catalogue: &'a [Accommodation], raw_id: &str) -> Option<Lookup<'a>> {
    let first = catalogue.first()?;
    let found = raw_id
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(|id| catalogue.iter().find(|a| a.id == id));
    Some(match found {
        Some(record) => Lookup::Found(record),
        None => Lookup::Fallback {
            requested: raw_id.to_string(),
            record: first,
        },
    })
}

/// Look up in the built-in catalogue (never empty).
pub fn find(raw_id: &str) -> Lookup<'static> {
    let [first, ..] = &ACCOMMODATIONS;
    find_in(&ACCOMMODATIONS, raw_id).unwrap_or_else(|| Lookup::Fallback {
        requested: raw_id.to_string(),
        record: first,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u32> = ACCOMMODATIONS.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ACCOMMODATIONS.len());
    }

    #[test]
    fn finds_known_ids() {
        let lookup = find("3");
        assert_eq!(lookup, Lookup::Found(&ACCOMMODATIONS[2]));
        assert_eq!(lookup.record().name, "Sahara Desert Camp");
    }

    #[test]
    fn unknown_and_malformed_ids_fall_back_to_first_record() {
        for raw in ["", "0", "99", "abc", "-1", "1.5"] {
            let lookup = find(raw);
            assert!(lookup.is_fallback(), "{raw:?} should fall back");
            assert_eq!(lookup.record().id, 1);
        }
    }

    #[test]
    fn empty_catalogue_has_no_fallback() {
        assert!(find_in(&[], "1").is_none());
    }

    #[test]
    fn every_record_has_images_and_a_detail_link() {
        for a in ACCOMMODATIONS.iter() {
            assert!(!a.images.is_empty(), "{} has no images", a.name);
            assert_eq!(a.details_href(), format!("/accommodations/details?id={}", a.id));
            assert!(a.card_features().len() <= 2);
        }
    }
}
