//! Atom 1.0 feed generation.

use super::common::{FeedEntry, collect_entries, latest_date};
use crate::{config::SiteConfig, post::Post, utils::date::PostDate};
use anyhow::{Context, Result};
use atom_syndication::{
    Category, CategoryBuilder, Entry, EntryBuilder, Feed, FeedBuilder, FixedDateTime,
    GeneratorBuilder, Link, LinkBuilder, Person, PersonBuilder, Text,
};

/// Render an Atom 1.0 feed for `posts`.
pub fn render_atom(posts: &[Post], config: &SiteConfig) -> Result<String> {
    let entries = collect_entries(posts, config);
    let info = &config.site.info;
    let base_url = info.base_url();

    let atom_entries = entries
        .iter()
        .map(entry_to_atom_entry)
        .collect::<Result<Vec<Entry>>>()?;

    let updated = match latest_date(&entries) {
        Some(date) => to_fixed(date)?,
        None => FixedDateTime::default(),
    };

    let self_link: Link = LinkBuilder::default()
        .href(format!("{}/{}", base_url, config.site.feed.path.display()))
        .rel("self".to_string())
        .mime_type(Some("application/atom+xml".to_string()))
        .build();

    let alternate_link: Link = LinkBuilder::default()
        .href(base_url.to_string())
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = if info.author.trim().is_empty() {
        Vec::new()
    } else {
        let email = Some(info.email.clone()).filter(|e| !e.trim().is_empty());
        vec![
            PersonBuilder::default()
                .name(info.author.clone())
                .email(email)
                .build(),
        ]
    };

    let feed: Feed = FeedBuilder::default()
        .title(Text::plain(info.title.clone()))
        .id(base_url)
        .updated(updated)
        .authors(authors)
        .links(vec![self_link, alternate_link])
        .subtitle(Some(Text::plain(info.description.clone())))
        .generator(Some(
            GeneratorBuilder::default()
                .value("slugfeed")
                .version(Some(env!("CARGO_PKG_VERSION").to_string()))
                .build(),
        ))
        .lang(Some(info.language.clone()))
        .entries(atom_entries)
        .build();

    Ok(feed.to_string())
}

fn to_fixed(date: PostDate) -> Result<FixedDateTime> {
    date.to_rfc3339()
        .parse()
        .with_context(|| format!("invalid date {date}"))
}

fn entry_to_atom_entry(entry: &FeedEntry) -> Result<Entry> {
    let updated = to_fixed(entry.pub_date)?;

    let link: Link = LinkBuilder::default()
        .href(&entry.link)
        .rel("alternate".to_string())
        .build();

    let categories: Vec<Category> = entry
        .categories
        .iter()
        .map(|term| CategoryBuilder::default().term(term.clone()).build())
        .collect();

    let summary = Some(entry.description.clone())
        .filter(|s| !s.is_empty())
        .map(Text::plain);

    Ok(EntryBuilder::default()
        .title(Text::plain(entry.title.clone()))
        .id(&entry.link)
        .updated(updated)
        .published(Some(updated))
        .links(vec![link])
        .summary(summary)
        .categories(categories)
        .build())
}

#[cfg(test)]
mod tests {
    use super::super::common::test_helpers::{make_config, make_post};
    use super::*;

    #[test]
    fn test_entry_to_atom_entry() {
        let entry = FeedEntry {
            title: "Test Post".to_string(),
            pub_date: PostDate::new(2024, 1, 15, 10, 30, 0),
            description: "A test summary".to_string(),
            link: "https://example.com/blog/test-post".to_string(),
            categories: vec!["Engineering".to_string()],
        };

        let atom = entry_to_atom_entry(&entry).unwrap();
        assert_eq!(atom.title().as_str(), "Test Post");
        assert_eq!(atom.id(), "https://example.com/blog/test-post");
        assert!(atom.updated().to_rfc3339().starts_with("2024-01-15T10:30:00"));
        assert_eq!(atom.summary().map(Text::as_str), Some("A test summary"));
        assert_eq!(atom.categories()[0].term(), "Engineering");
    }

    #[test]
    fn test_empty_description_has_no_summary() {
        let entry = FeedEntry {
            title: "T".to_string(),
            pub_date: PostDate::from_ymd(2024, 1, 15),
            description: String::new(),
            link: "https://example.com/blog/t".to_string(),
            categories: Vec::new(),
        };
        assert!(entry_to_atom_entry(&entry).unwrap().summary().is_none());
    }

    #[test]
    fn test_render_atom() {
        let mut config = make_config();
        config.site.feed.path = "atom.xml".into();
        let posts = vec![
            make_post("Older", Some("2023-06-01"), "", "Old."),
            make_post("Newest", Some("2024-02-01T08:00:00Z"), "Life", "New."),
        ];

        let xml = render_atom(&posts, &config).unwrap();
        let feed: Feed = xml.parse().unwrap();
        assert_eq!(feed.title().as_str(), "Test Blog");
        assert_eq!(feed.id(), "https://example.com");
        assert_eq!(feed.lang(), Some("en-GB"));
        assert!(feed.updated().to_rfc3339().starts_with("2024-02-01T08:00:00"));
        assert_eq!(feed.links()[0].href(), "https://example.com/atom.xml");
        assert_eq!(feed.entries().len(), 2);
        assert_eq!(feed.entries()[0].title().as_str(), "Newest");
    }
}
