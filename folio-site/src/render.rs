// HTML rendering
//
// Animated elements start in their profile's initial state (inline style) and
// carry the profile as `data-reveal` JSON for the inline reveal script.

use crate::page::{Hero, Page, Revealed, Section, SectionBody, SectionId};
use folio_client::animation::RevealAnimation;
use folio_utils::content::{ContactLink, LinkKind, PortfolioCard};
use folio_utils::reveal::AnimationProfile;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLESHEET: &str = include_str!("../assets/site.css");
const REVEAL_SCRIPT: &str = include_str!("../assets/reveal.js");

/// Inline style holding an element at its pre-reveal state
pub fn initial_style(profile: &AnimationProfile) -> String {
    // A fresh animation has not been observed yet, so it reports the initial state
    let frame = RevealAnimation::new(*profile).frame_at(0.0);
    format!(
        "opacity: {}; transform: {};",
        frame.opacity,
        frame.css_transform()
    )
}

pub fn render_page(page: &Page) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.content.name) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                (nav(page))
                main #top .page {
                    (hero(&page.hero, page))
                    @for section in &page.sections {
                        (render_section(section))
                    }
                }
                footer .footer { (page.footer_text()) }
                script { (PreEscaped(REVEAL_SCRIPT)) }
            }
        }
    }
}

fn nav(page: &Page) -> Markup {
    html! {
        header .nav {
            div .nav-inner {
                a .brand href="#top" { (page.content.name) }
                nav .nav-links {
                    @for id in SectionId::ALL {
                        a href={ "#" (id.anchor()) } { (id.nav_label()) }
                    }
                }
            }
        }
    }
}

fn hero(hero: &Hero, page: &Page) -> Markup {
    html! {
        section .hero {
            h1 class="reveal brand hero-title"
                data-reveal=(hero.name.profile.to_json())
                style=(initial_style(&hero.name.profile)) {
                (hero.name.item)
            }
            p class="reveal hero-tagline"
                data-reveal=(hero.tagline.profile.to_json())
                style=(initial_style(&hero.tagline.profile)) {
                (hero.tagline.item)
            }
            div class="reveal hero-actions"
                data-reveal=(hero.actions.profile.to_json())
                style=(initial_style(&hero.actions.profile)) {
                a class="button primary" href={ "#" (SectionId::Contact.anchor()) } { "Contact" }
                @if !page.content.email.is_empty() {
                    a class="button secondary" href=(hero.actions.item) { "Email me" }
                }
            }
        }
    }
}

fn render_section(section: &Section) -> Markup {
    let accent = section.id.accent();
    html! {
        section .section id=(section.id.anchor()) {
            h2 class={ "reveal heading accent-" (accent.to_string()) }
                style={ (initial_style(&section.heading.profile)) " color: " (accent.css_color()) ";" }
                data-reveal=(section.heading.profile.to_json()) {
                (section.heading.item)
            }
            @match &section.body {
                SectionBody::About(text) => {
                    p class="reveal about"
                        data-reveal=(text.profile.to_json())
                        style=(initial_style(&text.profile)) {
                        (text.item)
                    }
                },
                SectionBody::Highlights(items) => {
                    div .grid {
                        @for highlight in items {
                            div class="reveal tile"
                                data-reveal=(highlight.profile.to_json())
                                style=(initial_style(&highlight.profile)) {
                                (highlight.item.as_str())
                            }
                        }
                    }
                },
                SectionBody::Portfolio { cards, note } => {
                    div .grid .cards {
                        @for card in cards {
                            (portfolio_card(card))
                        }
                    }
                    @if let Some(note) = note {
                        p .note { (note) }
                    }
                },
                SectionBody::Contact(links) => {
                    div class="reveal contact-links"
                        data-reveal=(links.profile.to_json())
                        style=(initial_style(&links.profile)) {
                        @for link in links.item.iter() {
                            (contact_link(link))
                        }
                    }
                },
            }
        }
    }
}

fn portfolio_card(card: &Revealed<&PortfolioCard>) -> Markup {
    html! {
        a class="reveal card"
            href=(card.item.href)
            data-reveal=(card.profile.to_json())
            style={ (initial_style(&card.profile)) " background: " (card.item.gradient.to_css()) ";" } {
            div .card-face {
                span .card-title { (card.item.title) }
            }
        }
    }
}

fn contact_link(link: &ContactLink) -> Markup {
    let class = match link.kind {
        LinkKind::Primary => "button contact-primary",
        LinkKind::Secondary => "button secondary",
    };
    let external = link.is_external();
    html! {
        a class=(class)
            href=(link.href)
            target=[external.then_some("_blank")]
            rel=[external.then_some("noreferrer")] {
            (link.label)
        }
    }
}
