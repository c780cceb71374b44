//! Query command implementation.
//!
//! Prints post metadata as JSON, newest first:
//!
//! ```json
//! [{"path": "engineering/graphql.md", "url": "/blog/engineering/graphql-fragments",
//!   "title": "...", "date": "2021-05-01T00:00:00Z", "categories": ["Engineering"],
//!   "description": null, "draft": false, "excerpt": "..."}]
//! ```

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use super::args::QueryArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::permalink::Categories;
use crate::post::{Post, load_posts};
use crate::utils::date::PostDate;
use crate::utils::plural::plural_count;

/// Result for a single queried post
#[derive(Debug, Serialize)]
pub struct PostQueryResult {
    pub path: String,
    pub url: String,
    pub title: String,
    pub date: Option<PostDate>,
    pub categories: Categories,
    pub description: Option<String>,
    pub draft: bool,
    pub excerpt: String,
}

impl PostQueryResult {
    fn from_post(post: &Post, config: &SiteConfig) -> Self {
        let path = post
            .source
            .strip_prefix(&config.build.content)
            .unwrap_or(&post.source);

        Self {
            path: path.to_string_lossy().replace('\\', "/"),
            url: post.url(),
            title: post.title().to_string(),
            date: post.date(),
            categories: post.categories().clone(),
            description: post.meta.description.clone(),
            draft: post.is_draft(),
            excerpt: post.excerpt(),
        }
    }
}

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let posts = load_posts(&config.build.content, config.build.drafts)?;
    log!("query"; "found {}", plural_count(posts.len(), "post"));

    let results = query_posts(&posts, config);
    let output = format_results(&results, args.fields.as_deref())?;

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{formatted}")?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}

pub fn query_posts(posts: &[Post], config: &SiteConfig) -> Vec<PostQueryResult> {
    posts
        .par_iter()
        .map(|post| PostQueryResult::from_post(post, config))
        .collect()
}

/// Serialize results, keeping only `fields` when given.
fn format_results(results: &[PostQueryResult], fields: Option<&[String]>) -> Result<JsonValue> {
    let pages = results
        .iter()
        .map(|result| {
            let value = serde_json::to_value(result)?;
            Ok(match (fields, value) {
                (Some(fields), JsonValue::Object(map)) => filter_fields(map, fields),
                (_, value) => value,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(JsonValue::Array(pages))
}

fn filter_fields(map: Map<String, JsonValue>, fields: &[String]) -> JsonValue {
    let filtered: Map<String, JsonValue> = fields
        .iter()
        .filter_map(|field| map.get(field).map(|v| (field.clone(), v.clone())))
        .collect();
    JsonValue::Object(filtered)
}
