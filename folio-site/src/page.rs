// Page composition
//
// Pairs each piece of content with the reveal profile it enters with. Lists
// stagger their entries by index so sibling cards cascade in.

use chrono::Datelike;
use folio_utils::content::{Accent, ContactLink, PortfolioCard, SiteContent};
use folio_utils::reveal::{compute_profile, AnimationProfile, Direction};

/// Delay step between consecutive highlight tiles
pub const HIGHLIGHT_STAGGER_SECONDS: f64 = 0.05;

/// Delay step between consecutive portfolio cards
pub const PORTFOLIO_STAGGER_SECONDS: f64 = 0.06;

/// Values fixed once at startup and read by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteContext {
    /// Year shown in the footer copyright line
    pub year: i32,
}

impl SiteContext {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    /// Read the local clock
    pub fn from_clock() -> Self {
        Self::new(chrono::Local::now().year())
    }
}

/// Content paired with the profile it enters with
#[derive(Debug, Clone, PartialEq)]
pub struct Revealed<T> {
    pub item: T,
    pub profile: AnimationProfile,
}

impl<T> Revealed<T> {
    pub fn new(item: T, direction: Direction, delay_seconds: f64) -> Self {
        Self {
            item,
            profile: compute_profile(direction, delay_seconds),
        }
    }
}

/// Pair every item with a profile delayed by `step * index`
pub fn stagger<'a, T>(
    items: &'a [T],
    step: f64,
    direction_for: impl Fn(usize) -> Direction,
) -> Vec<Revealed<&'a T>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| Revealed::new(item, direction_for(i), step * i as f64))
        .collect()
}

/// Highlights alternate sides: even tiles from the left edge, odd from the right
fn highlight_direction(index: usize) -> Direction {
    if index % 2 == 1 {
        Direction::Left
    } else {
        Direction::Right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    About,
    Highlights,
    Portfolio,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Highlights,
        SectionId::Portfolio,
        SectionId::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Highlights => "highlights",
            SectionId::Portfolio => "portfolio",
            SectionId::Contact => "contact",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Highlights => "Highlights",
            SectionId::Portfolio => "Portfolio",
            SectionId::Contact => "Contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::About => "About Me",
            SectionId::Highlights => "Highlights",
            SectionId::Portfolio => "Art & Portfolio",
            SectionId::Contact => "Get in touch",
        }
    }

    pub fn accent(&self) -> Accent {
        match self {
            SectionId::About => Accent::Cyan,
            SectionId::Highlights => Accent::Purple,
            SectionId::Portfolio => Accent::Pink,
            SectionId::Contact => Accent::Emerald,
        }
    }

    fn heading_direction(&self) -> Direction {
        match self {
            SectionId::About | SectionId::Contact => Direction::Left,
            SectionId::Highlights => Direction::Right,
            SectionId::Portfolio => Direction::Up,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hero<'a> {
    pub name: Revealed<&'a str>,
    pub tagline: Revealed<&'a str>,
    /// Row holding the contact and email buttons
    pub actions: Revealed<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody<'a> {
    About(Revealed<&'a str>),
    Highlights(Vec<Revealed<&'a String>>),
    Portfolio {
        cards: Vec<Revealed<&'a PortfolioCard>>,
        note: Option<&'a str>,
    },
    Contact(Revealed<&'a [ContactLink]>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    pub id: SectionId,
    pub heading: Revealed<&'static str>,
    pub body: SectionBody<'a>,
}

/// The composed page: every element with its entrance profile
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    pub content: &'a SiteContent,
    pub context: SiteContext,
    pub hero: Hero<'a>,
    pub sections: Vec<Section<'a>>,
}

impl<'a> Page<'a> {
    pub fn compose(content: &'a SiteContent, context: SiteContext) -> Self {
        let hero = Hero {
            name: Revealed::new(content.name.as_str(), Direction::None, 0.0),
            tagline: Revealed::new(content.tagline.as_str(), Direction::None, 0.12),
            actions: Revealed::new(content.mailto(), Direction::None, 0.2),
        };

        let sections = SectionId::ALL
            .iter()
            .map(|&id| Section {
                id,
                heading: Revealed::new(id.title(), id.heading_direction(), 0.0),
                body: Self::body(id, content),
            })
            .collect();

        Self {
            content,
            context,
            hero,
            sections,
        }
    }

    fn body(id: SectionId, content: &'a SiteContent) -> SectionBody<'a> {
        match id {
            SectionId::About => {
                SectionBody::About(Revealed::new(content.about.as_str(), Direction::Left, 0.1))
            },
            SectionId::Highlights => SectionBody::Highlights(stagger(
                &content.highlights,
                HIGHLIGHT_STAGGER_SECONDS,
                highlight_direction,
            )),
            SectionId::Portfolio => SectionBody::Portfolio {
                cards: stagger(&content.portfolio, PORTFOLIO_STAGGER_SECONDS, |_| Direction::Up),
                note: content.portfolio_note.as_deref(),
            },
            SectionId::Contact => SectionBody::Contact(Revealed::new(
                content.contact.as_slice(),
                Direction::Left,
                0.08,
            )),
        }
    }

    /// Every profile on the page, in document order
    pub fn profiles(&self) -> Vec<AnimationProfile> {
        let mut profiles = vec![
            self.hero.name.profile,
            self.hero.tagline.profile,
            self.hero.actions.profile,
        ];
        for section in &self.sections {
            profiles.push(section.heading.profile);
            match &section.body {
                SectionBody::About(text) => profiles.push(text.profile),
                SectionBody::Highlights(items) => {
                    profiles.extend(items.iter().map(|item| item.profile))
                },
                SectionBody::Portfolio { cards, .. } => {
                    profiles.extend(cards.iter().map(|card| card.profile))
                },
                SectionBody::Contact(links) => profiles.push(links.profile),
            }
        }
        profiles
    }

    pub fn animated_elements(&self) -> usize {
        self.profiles().len()
    }

    pub fn footer_text(&self) -> String {
        format!(
            "© {} {} — All Rights Reserved",
            self.context.year, self.content.name
        )
    }
}
