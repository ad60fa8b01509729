//! Landing page content: services, "why choose us" features, impact stats
//! and the in-page anchors used by the navigation and footer.

use crate::i18n::Locale;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    SustainableTourism,
    Agritourism,
    RenewableEnergy,
    LocalResources,
    Collaboration,
    Innovation,
    Education,
    LocalImpact,
}

impl Service {
    pub const ALL: [Service; 8] = [
        Service::SustainableTourism,
        Service::Agritourism,
        Service::RenewableEnergy,
        Service::LocalResources,
        Service::Collaboration,
        Service::Innovation,
        Service::Education,
        Service::LocalImpact,
    ];

    /// Services linked from the footer.
    pub const FOOTER: [Service; 4] = [
        Service::SustainableTourism,
        Service::Agritourism,
        Service::RenewableEnergy,
        Service::LocalResources,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            Service::SustainableTourism => "🌿",
            Service::Agritourism => "🚜",
            Service::RenewableEnergy => "⚡",
            Service::LocalResources => "💎",
            Service::Collaboration => "🤝",
            Service::Innovation => "💡",
            Service::Education => "🎓",
            Service::LocalImpact => "❤️",
        }
    }

    /// Accent modifier for the icon badge.
    pub fn accent(self) -> &'static str {
        match self {
            Service::SustainableTourism => "accent--green",
            Service::Agritourism => "accent--amber",
            Service::RenewableEnergy => "accent--yellow",
            Service::LocalResources => "accent--purple",
            Service::Collaboration => "accent--blue",
            Service::Innovation => "accent--orange",
            Service::Education => "accent--indigo",
            Service::LocalImpact => "accent--red",
        }
    }

    pub fn title(self, locale: Locale) -> String {
        match self {
            Service::SustainableTourism => t!(locale, "services-sustainable-tourism-title"),
            Service::Agritourism => t!(locale, "services-agritourism-title"),
            Service::RenewableEnergy => t!(locale, "services-renewable-energy-title"),
            Service::LocalResources => t!(locale, "services-local-resources-title"),
            Service::Collaboration => t!(locale, "services-collaboration-title"),
            Service::Innovation => t!(locale, "services-innovation-title"),
            Service::Education => t!(locale, "services-education-title"),
            Service::LocalImpact => t!(locale, "services-local-impact-title"),
        }
    }

    pub fn description(self, locale: Locale) -> String {
        match self {
            Service::SustainableTourism => t!(locale, "services-sustainable-tourism-description"),
            Service::Agritourism => t!(locale, "services-agritourism-description"),
            Service::RenewableEnergy => t!(locale, "services-renewable-energy-description"),
            Service::LocalResources => t!(locale, "services-local-resources-description"),
            Service::Collaboration => t!(locale, "services-collaboration-description"),
            Service::Innovation => t!(locale, "services-innovation-description"),
            Service::Education => t!(locale, "services-education-description"),
            Service::LocalImpact => t!(locale, "services-local-impact-description"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Biodiversity,
    Workshops,
    Astronomy,
    Events,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Biodiversity,
        Feature::Workshops,
        Feature::Astronomy,
        Feature::Events,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            Feature::Biodiversity => "🌳",
            Feature::Workshops => "🔧",
            Feature::Astronomy => "⭐",
            Feature::Events => "📅",
        }
    }

    pub fn image(self) -> &'static str {
        match self {
            Feature::Biodiversity => "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            Feature::Workshops => "https://images.unsplash.com/photo-1556075798-4825dfaaf498?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            Feature::Astronomy => "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            Feature::Events => "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        }
    }

    pub fn title(self, locale: Locale) -> String {
        match self {
            Feature::Biodiversity => t!(locale, "why-biodiversity-title"),
            Feature::Workshops => t!(locale, "why-workshops-title"),
            Feature::Astronomy => t!(locale, "why-astronomy-title"),
            Feature::Events => t!(locale, "why-events-title"),
        }
    }

    pub fn description(self, locale: Locale) -> String {
        match self {
            Feature::Biodiversity => t!(locale, "why-biodiversity-description"),
            Feature::Workshops => t!(locale, "why-workshops-description"),
            Feature::Astronomy => t!(locale, "why-astronomy-description"),
            Feature::Events => t!(locale, "why-events-description"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStat {
    SquareMeters,
    Species,
    Workshops,
    DaysOpen,
}

impl ImpactStat {
    pub const ALL: [ImpactStat; 4] = [
        ImpactStat::SquareMeters,
        ImpactStat::Species,
        ImpactStat::Workshops,
        ImpactStat::DaysOpen,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ImpactStat::SquareMeters => "15,000",
            ImpactStat::Species => "50+",
            ImpactStat::Workshops => "100+",
            ImpactStat::DaysOpen => "365",
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            ImpactStat::SquareMeters => "accent--green",
            ImpactStat::Species => "accent--blue",
            ImpactStat::Workshops => "accent--purple",
            ImpactStat::DaysOpen => "accent--orange",
        }
    }

    pub fn label(self, locale: Locale) -> String {
        match self {
            ImpactStat::SquareMeters => t!(locale, "impact-square-meters"),
            ImpactStat::Species => t!(locale, "impact-species"),
            ImpactStat::Workshops => t!(locale, "impact-workshops"),
            ImpactStat::DaysOpen => t!(locale, "impact-days-open"),
        }
    }
}

/// Landing page sections reachable by anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Home,
    About,
    Services,
    Impact,
    Accommodations,
    Blog,
    Contact,
}

impl Anchor {
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Services => "services",
            Anchor::Impact => "impact",
            Anchor::Accommodations => "accommodations",
            Anchor::Blog => "blog",
            Anchor::Contact => "contact",
        }
    }

    /// Absolute so the link also works from the routed pages.
    pub fn href(self) -> String {
        format!("/#{}", self.id())
    }

    pub fn label(self, locale: Locale) -> String {
        match self {
            Anchor::Home => t!(locale, "nav-home"),
            Anchor::About => t!(locale, "nav-about"),
            Anchor::Services => t!(locale, "nav-services"),
            Anchor::Impact => t!(locale, "nav-impact"),
            Anchor::Accommodations => t!(locale, "nav-accommodations"),
            Anchor::Blog => t!(locale, "nav-blog"),
            Anchor::Contact => t!(locale, "nav-contact"),
        }
    }
}

pub const CONTACT_PHONE: &str = "+212 5XX XXX XXX";
pub const CONTACT_EMAIL: &str = "info@touriver.ma";
pub const HERO_IMAGE: &str = "https://mohatotech.com/touriver/assets/img/hero_1.jpg";
pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1544734372-1b5f3da43e8f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

/// Social profile links shown in the footer (label, glyph).
pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "f"),
    ("Instagram", "◎"),
    ("Twitter", "𝕏"),
    ("LinkedIn", "in"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_service_is_translated_in_every_locale() {
        for locale in Locale::ALL {
            for service in Service::ALL {
                assert!(!service.title(locale).is_empty());
                assert!(!service.description(locale).is_empty());
            }
        }
    }

    #[test]
    fn anchors_point_at_landing_sections() {
        assert_eq!(Anchor::Impact.href(), "/#impact");
        assert_eq!(Anchor::About.label(Locale::Fr), "À Propos");
    }

    #[test]
    fn services_keep_the_display_order() {
        assert_eq!(Service::title(Service::ALL[0], Locale::En), "Sustainable Tourism");
        assert_eq!(Service::title(Service::ALL[7], Locale::En), "Local Impact");
    }
}
