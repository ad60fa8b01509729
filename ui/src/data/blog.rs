//! Blog posts, their categories and the category filter.

use std::fmt;

use crate::i18n::Locale;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlogCategory {
    SustainableTourism,
    Agritourism,
    RenewableEnergy,
    Conservation,
    LocalResources,
    Astronomy,
    Education,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 7] = [
        BlogCategory::SustainableTourism,
        BlogCategory::Agritourism,
        BlogCategory::RenewableEnergy,
        BlogCategory::Conservation,
        BlogCategory::LocalResources,
        BlogCategory::Astronomy,
        BlogCategory::Education,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BlogCategory::SustainableTourism => "Sustainable Tourism",
            BlogCategory::Agritourism => "Agritourism",
            BlogCategory::RenewableEnergy => "Renewable Energy",
            BlogCategory::Conservation => "Conservation",
            BlogCategory::LocalResources => "Local Resources",
            BlogCategory::Astronomy => "Astronomy",
            BlogCategory::Education => "Education",
        }
    }

    /// Exact, case-sensitive label match.
    pub fn from_label(label: &str) -> Option<Self> {
        BlogCategory::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selection on the blog page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(BlogCategory),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// `"All"` is the sentinel; anything else must be an exact category label.
    pub fn from_label(label: &str) -> Option<Self> {
        if label == Self::ALL_LABEL {
            Some(CategoryFilter::All)
        } else {
            BlogCategory::from_label(label).map(CategoryFilter::Only)
        }
    }

    /// The filter bar: `All` first, then every category in display order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(BlogCategory::ALL.map(CategoryFilter::Only))
    }

    /// Button text: the localized "All", or the category's own label.
    pub fn label(self, locale: Locale) -> String {
        match self {
            CategoryFilter::All => t!(locale, "blog-category-all"),
            CategoryFilter::Only(category) => category.label().to_string(),
        }
    }

    pub fn matches(self, post: &BlogPost) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => post.category == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub author: &'static str,
    pub category: BlogCategory,
    /// Publish date, ISO `YYYY-MM-DD`.
    pub date: &'static str,
    /// Estimated read time in minutes.
    pub read_time: u32,
    pub image: &'static str,
    pub featured: bool,
}

/// Keep the posts accepted by `filter`, in their original order.
pub fn filter_posts<'a>(posts: &'a [BlogPost], filter: CategoryFilter) -> Vec<&'a BlogPost> {
    posts.iter().filter(|post| filter.matches(post)).collect()
}

pub static FEATURED_POST: BlogPost = BlogPost {
    id: 1,
    title: "The Future of Sustainable Tourism in Morocco",
    excerpt: "Exploring how eco-tourism initiatives are transforming rural communities while preserving Morocco's natural heritage for future generations.",
    author: "Dr. Amina El-Mansouri",
    category: BlogCategory::SustainableTourism,
    date: "2024-01-20",
    read_time: 8,
    image: "https://images.unsplash.com/photo-1539650116574-75c0c6d90095?ixlib=rb-4.0.3&auto=format&fit=crop&w=1200&q=80",
    featured: true,
};

pub static BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 2,
        title: "Traditional Berber Farming Meets Modern Sustainability",
        excerpt: "How ancient agricultural wisdom is guiding contemporary eco-farming practices in the Atlas Mountains.",
        author: "Mohamed Benali",
        category: BlogCategory::Agritourism,
        date: "2024-01-18",
        read_time: 6,
        image: "https://images.unsplash.com/photo-1556075798-4825dfaaf498?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        featured: false,
    },
    BlogPost {
        id: 3,
        title: "Solar Power Revolution in Rural Morocco",
        excerpt: "Discover how renewable energy projects are bringing electricity to remote villages and supporting eco-tourism development.",
        author: "Sarah Johnson",
        category: BlogCategory::RenewableEnergy,
        date: "2024-01-15",
        read_time: 7,
        image: "https://images.unsplash.com/photo-1497440001374-f26997328c1b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        featured: false,
    },
    BlogPost {
        id: 4,
        title: "Preserving Biodiversity Through Community Conservation",
        excerpt: "Learn about innovative conservation programs that involve local communities in protecting Morocco's unique ecosystems.",
        author: "Dr. Hassan Alami",
        category: BlogCategory::Conservation,
        date: "2024-01-12",
        read_time: 5,
        image: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        featured: false,
    },
    BlogPost {
        id: 5,
        title: "Argan Oil: From Tree to Table",
        excerpt: "The complete journey of Morocco's liquid gold and its role in sustainable agriculture and women's empowerment.",
        author: "Fatima Zahra",
        category: BlogCategory::LocalResources,
        date: "2024-01-10",
        read_time: 4,
        image: "https://images.unsplash.com/photo-1544734372-1b5f3da43e8f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        featured: false,
    },
    BlogPost {
        id: 6,
        title: "Astronomical Tourism: Morocco's Dark Sky Heritage",
        excerpt: "Why Morocco is becoming a premier destination for stargazing and astronomical education programs.",
        author: "Ahmed Benkirane",
        category: BlogCategory::Astronomy,
        date: "2024-01-08",
        read_time: 6,
        image: "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        featured: false,
    },
    BlogPost {
        id: 7,
        title: "Educational Workshops: Learning by Doing",
        excerpt: "How hands-on educational experiences are teaching visitors about sustainable living and environmental conservation.",
        author: "Laila Bennani",
        category: BlogCategory::Education,
        date: "2024-01-05",
        read_time: 5,
        image: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        featured: false,
    },
];

/// Landing-page teaser: one featured post plus recent ones.
pub static PREVIEW_POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        title: "Sustainable Farming Practices in the Atlas Mountains",
        excerpt: "Discover how traditional Berber farming methods are leading the way in sustainable agriculture and eco-tourism development.",
        author: "Touriver Team",
        category: BlogCategory::Agritourism,
        date: "2024-01-15",
        read_time: 5,
        image: "https://images.unsplash.com/photo-1556075798-4825dfaaf498?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        featured: true,
    },
    BlogPost {
        id: 2,
        title: "Renewable Energy Solutions for Rural Communities",
        excerpt: "How solar and wind power are transforming remote villages and supporting sustainable tourism initiatives.",
        author: "Touriver Team",
        category: BlogCategory::RenewableEnergy,
        date: "2024-01-10",
        read_time: 7,
        image: "https://images.unsplash.com/photo-1497440001374-f26997328c1b?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        featured: false,
    },
    BlogPost {
        id: 3,
        title: "Preserving Biodiversity Through Community Tourism",
        excerpt: "Learn about conservation efforts that involve local communities in protecting Morocco's unique ecosystems.",
        author: "Touriver Team",
        category: BlogCategory::Conservation,
        date: "2024-01-05",
        read_time: 6,
        image: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_returns_every_post_in_order() {
        let shown = filter_posts(BLOG_POSTS, CategoryFilter::All);
        assert_eq!(shown.len(), BLOG_POSTS.len());
        assert!(shown.iter().zip(BLOG_POSTS).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn sentinel_and_labels_parse_exactly() {
        assert_eq!(CategoryFilter::from_label("All"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_label("Astronomy"),
            Some(CategoryFilter::Only(BlogCategory::Astronomy))
        );
        assert_eq!(CategoryFilter::from_label("all"), None);
        assert_eq!(CategoryFilter::from_label("astronomy"), None);
        assert_eq!(CategoryFilter::from_label("Astro"), None);
    }

    #[test]
    fn filter_bar_lists_all_first() {
        let options: Vec<_> = CategoryFilter::options().collect();
        assert_eq!(options.len(), 8);
        assert_eq!(options[0], CategoryFilter::All);
    }

    #[test]
    fn all_button_is_localized_categories_are_not() {
        assert_eq!(CategoryFilter::All.label(Locale::Fr), "Tous");
        assert_eq!(
            CategoryFilter::Only(BlogCategory::Education).label(Locale::Ar),
            "Education"
        );
    }

    #[test]
    fn featured_post_is_flagged() {
        assert!(FEATURED_POST.featured);
        assert_eq!(PREVIEW_POSTS.iter().filter(|p| p.featured).count(), 1);
    }

    proptest! {
        #[test]
        fn only_filter_is_exact_subset(index in 0usize..BlogCategory::ALL.len()) {
            let category = BlogCategory::ALL[index];
            let shown = filter_posts(BLOG_POSTS, CategoryFilter::Only(category));
            let expected: Vec<u32> = BLOG_POSTS
                .iter()
                .filter(|p| p.category.label() == category.label())
                .map(|p| p.id)
                .collect();
            let got: Vec<u32> = shown.iter().map(|p| p.id).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
