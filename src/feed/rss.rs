//! RSS 2.0 feed generation.

use super::common::{FeedEntry, collect_entries, latest_date};
use crate::{config::SiteConfig, post::Post};
use anyhow::{Result, anyhow};
use rss::{Category, CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};

/// Render an RSS 2.0 channel for `posts`.
pub fn render_rss(posts: &[Post], config: &SiteConfig) -> Result<String> {
    let entries = collect_entries(posts, config);
    let info = &config.site.info;

    let items: Vec<_> = entries.iter().map(entry_to_rss_item).collect();

    let channel = ChannelBuilder::default()
        .title(&info.title)
        .link(info.url.as_deref().unwrap_or_default())
        .description(&info.description)
        .language(Some(info.language.clone()))
        .generator(Some(format!("slugfeed {}", env!("CARGO_PKG_VERSION"))))
        .last_build_date(latest_date(&entries).map(|date| date.to_rfc2822()))
        .managing_editor(managing_editor(config))
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn entry_to_rss_item(entry: &FeedEntry) -> rss::Item {
    let categories: Vec<Category> = entry
        .categories
        .iter()
        .map(|name| CategoryBuilder::default().name(name.clone()).build())
        .collect();

    ItemBuilder::default()
        .title(Some(entry.title.clone()))
        .link(Some(entry.link.clone()))
        .guid(Some(
            GuidBuilder::default()
                .permalink(true)
                .value(entry.link.clone())
                .build(),
        ))
        .description(Some(entry.description.clone()))
        .pub_date(Some(entry.pub_date.to_rfc2822()))
        .categories(categories)
        .build()
}

/// RSS person format: "email (Name)"
fn managing_editor(config: &SiteConfig) -> Option<String> {
    let info = &config.site.info;
    match (info.email.trim(), info.author.trim()) {
        ("", _) => None,
        (email, "") => Some(email.to_string()),
        (email, name) => Some(format!("{email} ({name})")),
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_helpers::{make_config, make_post};
    use super::*;
    use crate::utils::date::PostDate;

    #[test]
    fn test_entry_to_rss_item() {
        let entry = FeedEntry {
            title: "Test Post".to_string(),
            pub_date: PostDate::from_ymd(2024, 1, 15),
            description: "A test summary".to_string(),
            link: "https://example.com/blog/test-post".to_string(),
            categories: vec!["Life".to_string()],
        };

        let item = entry_to_rss_item(&entry);
        assert_eq!(item.title(), Some("Test Post"));
        assert_eq!(item.link(), Some("https://example.com/blog/test-post"));
        assert_eq!(item.description(), Some("A test summary"));
        assert_eq!(item.pub_date(), Some("Mon, 15 Jan 2024 00:00:00 GMT"));
        assert_eq!(item.categories()[0].name(), "Life");

        let guid = item.guid().unwrap();
        assert!(guid.is_permalink());
        assert_eq!(guid.value(), "https://example.com/blog/test-post");
    }

    #[test]
    fn test_managing_editor() {
        let config = make_config();
        assert_eq!(
            managing_editor(&config),
            Some("test@example.com (Test Author)".to_string())
        );

        let mut config = make_config();
        config.site.info.email = String::new();
        assert_eq!(managing_editor(&config), None);
    }

    #[test]
    fn test_render_rss() {
        let config = make_config();
        let posts = vec![
            make_post("Hello World", Some("2024-01-15"), "Life", "First post & more."),
            make_post("Undated", None, "", "Skipped."),
        ];

        let xml = render_rss(&posts, &config).unwrap();
        assert!(xml.contains("<title>Test Blog</title>"));
        assert!(xml.contains("<language>en-GB</language>"));
        assert!(xml.contains("<link>https://example.com/blog/life/hello-world</link>"));
        assert!(xml.contains("<category>Life</category>"));
        assert!(xml.contains("Mon, 15 Jan 2024 00:00:00 GMT"));
        assert!(!xml.contains("Undated"));

        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();
        assert_eq!(channel.items().len(), 1);
        assert_eq!(channel.items()[0].description(), Some("First post & more."));
    }

    #[test]
    fn test_render_rss_empty() {
        let config = make_config();
        let xml = render_rss(&[], &config).unwrap();
        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();
        assert!(channel.items().is_empty());
        assert!(channel.last_build_date().is_none());
    }
}
