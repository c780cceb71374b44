//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Jekyll-style blog permalinks, excerpts and feeds
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: slugfeed.toml)
    #[arg(short = 'C', long, default_value = "slugfeed.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the feed and redirect pages
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the URL for a post title
    Slug {
        #[command(flatten)]
        args: SlugArgs,
    },

    /// Print the plain-text excerpt of a Markdown file
    #[command(visible_alias = "e")]
    Excerpt {
        #[command(flatten)]
        args: ExcerptArgs,
    },

    /// Print post metadata as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Include draft posts
    #[arg(short, long)]
    pub drafts: bool,

    /// Enable feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub rss: Option<bool>,

    /// Override site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// local development, without modifying slugfeed.toml.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Slug command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SlugArgs {
    /// Post title
    pub title: String,

    /// Category (repeatable, in order)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Print only the slug, without the `/blog/` prefix
    #[arg(short, long)]
    pub path_only: bool,
}

/// Excerpt command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExcerptArgs {
    /// Markdown file. Use `-` or omit to read stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Include draft posts in results
    #[arg(short, long)]
    pub drafts: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Filter output to specific fields (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("slugfeed").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_args() {
        let cli = parse(&["build", "--drafts", "--rss", "-U", "https://example.com", "-V"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert!(build_args.drafts);
        assert_eq!(build_args.rss, Some(true));
        assert_eq!(build_args.site_url.as_deref(), Some("https://example.com"));
        assert!(build_args.verbose);

        let cli = parse(&["build", "--rss=false"]);
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(build_args.rss, Some(false));
    }

    #[test]
    fn test_slug_args() {
        let cli = parse(&["slug", "My Title", "-c", "Engineering", "-c", "GraphQL", "--path-only"]);
        let Commands::Slug { args } = cli.command else {
            panic!("expected slug");
        };
        assert_eq!(args.title, "My Title");
        assert_eq!(args.categories, ["Engineering", "GraphQL"]);
        assert!(args.path_only);
    }

    #[test]
    fn test_global_options() {
        let cli = parse(&["-C", "site.toml", "-c", "posts", "query", "--pretty"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert_eq!(cli.content, Some(PathBuf::from("posts")));
        assert!(matches!(cli.command, Commands::Query { .. }));
    }

    #[test]
    fn test_query_fields() {
        let cli = parse(&["query", "-f", "title,url"]);
        let Commands::Query { args } = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.fields, Some(vec!["title".to_string(), "url".to_string()]));
    }
}
