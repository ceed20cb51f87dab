//! Static portfolio content. Everything here is read-only and rebuilt fresh
//! per request; there is deliberately no storage behind it.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
    pub sketch_image: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Book {
    pub title: String,
    pub author: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FavoriteRead {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LifeAdvice {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct About {
    pub intro: String,
    pub paragraphs: Vec<String>,
    pub favorite_reads: Vec<FavoriteRead>,
    pub approach_to_life: Vec<LifeAdvice>,
}

fn project(title: &str, description: &str, link: &str, sketch: &str, cta: &str) -> Project {
    Project {
        title: title.into(),
        description: description.into(),
        link: link.into(),
        sketch_image: sketch.into(),
        cta_label: cta.into(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "Central Park Croquet Club",
            "A social club in NYC built around croquet, charcuterie, and low-stakes excuses to bring good people together.",
            "https://partiful.com/e/Rkb0hfZU46fuLXBwSyWc",
            "/sketches/croquet_club.png",
            "Join the club",
        ),
        project(
            "A Costa Rican Christmas",
            "A Hallmark-style Christmas rom-com script set in Tamarindo — sun, nostalgia, and second chances.",
            "https://docs.google.com/document/d/1ta_xubeNVRwAkxasdHlHxKYekMueIUVPIkiHg6UplwY/edit?usp=sharing",
            "/sketches/costa_rica.png",
            "Read the script",
        ),
        project(
            "Icebreakr",
            "A playful tool for better conversations and curated prompts.",
            "https://icebreakr-five.vercel.app/",
            "/sketches/icebreakr.png",
            "Answer a question",
        ),
    ]
}

pub fn books() -> Vec<Book> {
    [
        ("The Sovereign Individual", "James Dale Davidson & William Rees-Mogg"),
        ("Read Write Own", "Chris Dixon"),
        ("The Beginning of Infinity", "David Deutsch"),
        ("The War of Art", "Steven Pressfield"),
    ]
    .iter()
    .map(|(title, author)| Book {
        title: (*title).into(),
        author: (*author).into(),
    })
    .collect()
}

pub fn goodreads_profile() -> String {
    "https://www.goodreads.com/user/show/186990419-william-reynoir".into()
}

pub fn about() -> About {
    About {
        intro: "I’m Will Reynoir—a writer, builder, and lifelong wanderer of ideas. I spend my days exploring how the world works, why people do what they do, and what we can create when ambition meets curiosity. Whether through essays, startups, or community projects, I try to leave things a little better, a little clearer, and a little more interesting than I found them.".into(),
        paragraphs: vec![
            "I was born and raised in New Orleans, a city that shaped my love for culture, stories, and gathering people together. I’m someone who chases adventure—sometimes literally, like living in 12 Cities in 12 Months, and sometimes through quieter wonderings about politics, human nature, or why we build the systems we do. I love sports (especially the Saints, LSU, Tulane, Pelican, & Borussia Dortmund), writing & reading, some gaming, hosting events in Central Park, and finding meaning in the everyday. At my core, I’m an optimist who believes life gets better when you create your own lore and invite others into it.".into(),
            "Today, I’m the Head of Operations at Votre, a crypto startup reimagining what a modern digital investment bank can be. I work across compliance, product, legal, strategy, investor relations, and launch execution—basically whatever it takes to turn ambitious ideas into reality. My background spans institutional crypto, business development, government, and a long history of being able to GSD (get S*** done).".into(),
        ],
        favorite_reads: vec![
            read(
                "Financial Nihilism",
                "Travis Kling",
                "https://www.epsilontheory.com/a/financial-nihilism/",
                "Explores the cultural malaise that sets in when markets are decoupled from fundamentals, policy feels arbitrary, and money stops meaningfully reflecting effort. Kling argues that the resulting nihilism explains both reckless speculation and a desire to build parallel systems.",
            ),
            read(
                "The State of Culture, 2024",
                "Ted Gioia",
                "https://substack.com/inbox/post/141676786",
                "Gioia surveys the creative landscape and concludes that genuine culture is thriving in the margins while legacy gatekeepers obsess over financial engineering. The piece is both a warning about homogenized mainstream tastes and a celebration of the indie surge.",
            ),
            read(
                "Build What’s Fundable",
                "Kyle Harrison",
                "https://investing101.substack.com/p/build-whats-fundable",
                "A pragmatic manifesto for founders: great ideas need to intersect with capital incentives, market timing, and believable execution plans. Harrison lays out how to tell the story investors need to hear without abandoning the soul of the product.",
            ),
            read(
                "Here’s How to Live: Create",
                "Derek Sivers",
                "https://sive.rs/htl23",
                "The opening paragraphs distill a rule for living: produce more than you consume, and let creation be your compass. Sivers argues that making things is the surest path to meaning, autonomy, and a life that compounds in public.",
            ),
        ],
        approach_to_life: [
            "There’s a difference between being a nice guy and a good man. A nice guy will get along with people, don’t know what they stand for or against. A good man has ideals that they’ll stand for, and they’ll stand against, and when they are tested, a good man is not a nice guy. Be a good man.",
            "Try to do something good every day",
            "You shouldn’t try to make yourself seem like the smartest one in the room to others; you should make those who talk to you feel like they are the smartest person in the room",
            "How can you trust someone with a secret if you’re not even able to keep it to yourself?",
            "When giving advice, don’t give answers but frameworks",
            "Be humble in your preparation and confident in your performance",
            "Success is being excited to go to work and being excited to come home.",
            "Never trust a man who promises to do tomorrow what they had the power to do yesterday",
            "Work for the work itself, not for the money. Even better - find other people who also want to work for the work itself on something you are passionate about",
        ]
        .iter()
        .map(|text| LifeAdvice {
            text: (*text).into(),
        })
        .collect(),
    }
}

fn read(title: &str, creator: &str, url: &str, summary: &str) -> FavoriteRead {
    FavoriteRead {
        title: title.into(),
        creator: Some(creator.into()),
        url: Some(url.into()),
        summary: Some(summary.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advice_serializes_as_text_records() {
        let value = serde_json::to_value(about()).unwrap();
        let advice = value["approach_to_life"].as_array().unwrap();
        assert!(!advice.is_empty());
        assert_eq!(advice[1]["text"], "Try to do something good every day");
    }

    #[test]
    fn optional_read_fields_are_omitted_when_absent() {
        let bare = FavoriteRead {
            title: "Untitled".into(),
            creator: None,
            url: None,
            summary: None,
        };
        let value = serde_json::to_value(bare).unwrap();
        assert!(value.get("creator").is_none());
    }
}
