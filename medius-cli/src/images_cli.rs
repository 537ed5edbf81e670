//! Medius images CLI commands
//!
//! Assembles the registry and shows what a build run would process.

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use medius_core::api::{Labels, DEFAULT_INSTANCETYPE_LABEL, DEFAULT_PREFERENCE_LABEL};
use medius_core::registry::{default_gatherers, Focus, RegistryConfig};
use medius_core::{new_registry, Entry};

#[derive(Subcommand, Debug)]
pub enum ImagesCommand {
    /// List the registry entries a build run would process
    List {
        /// Focus string: empty, "<name>:*", or an exact "<name>:<version>"
        #[clap(long, default_value = "")]
        focus: String,

        /// Also list entries the focus skips
        #[clap(long)]
        all: bool,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show one registry entry
    Show {
        /// Exact describe string, e.g. "ubuntu:22.04"
        describe: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Explain how a focus string is interpreted
    Focus {
        /// Focus string to explain
        focus: String,
    },
}

impl ImagesCommand {
    pub async fn execute(self, config: &RegistryConfig) -> Result<()> {
        match self {
            ImagesCommand::List { focus, all, json } => {
                execute_list(config, &focus, all, json).await
            }
            ImagesCommand::Show { describe, json } => execute_show(config, &describe, json).await,
            ImagesCommand::Focus { focus } => execute_focus(config, &focus).await,
        }
    }
}

async fn assemble(config: &RegistryConfig) -> Vec<Entry> {
    let gatherers = default_gatherers(config);
    new_registry(&gatherers).await
}

/// JSON view of a registry entry
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntryView<'a> {
    describe: String,
    name: &'a str,
    version: &'a str,
    use_for_docs: bool,
    use_for_latest: bool,
    skip_when_not_focused: bool,
    selected: bool,
    #[serde(skip_serializing_if = "Labels::is_empty")]
    labels: Labels,
    #[serde(skip_serializing_if = "Option::is_none")]
    download_url: Option<String>,
}

impl<'a> EntryView<'a> {
    fn new(entry: &'a Entry, selected: bool) -> Self {
        let metadata = entry.artifact.metadata();
        Self {
            describe: entry.describe(),
            name: &metadata.name,
            version: &metadata.version,
            use_for_docs: entry.use_for_docs,
            use_for_latest: entry.use_for_latest,
            skip_when_not_focused: entry.skip_when_not_focused,
            selected,
            labels: metadata.labels.clone(),
            download_url: entry.artifact.details().map(|d| d.download_url),
        }
    }
}

/// Table row for registry listings
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Artifact")]
    describe: String,
    #[tabled(rename = "Docs")]
    docs: &'static str,
    #[tabled(rename = "Latest")]
    latest: &'static str,
    #[tabled(rename = "Focus Only")]
    focus_only: &'static str,
    #[tabled(rename = "Instancetype")]
    instancetype: String,
    #[tabled(rename = "Preference")]
    preference: String,
    #[tabled(rename = "Selected")]
    selected: &'static str,
}

fn mark(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        ""
    }
}

impl From<&EntryView<'_>> for EntryRow {
    fn from(view: &EntryView<'_>) -> Self {
        let label = |key: &str| view.labels.get(key).cloned().unwrap_or_default();
        Self {
            describe: view.describe.clone(),
            docs: mark(view.use_for_docs),
            latest: mark(view.use_for_latest),
            focus_only: mark(view.skip_when_not_focused),
            instancetype: label(DEFAULT_INSTANCETYPE_LABEL),
            preference: label(DEFAULT_PREFERENCE_LABEL),
            selected: mark(view.selected),
        }
    }
}

async fn execute_list(config: &RegistryConfig, focus: &str, all: bool, json: bool) -> Result<()> {
    let registry = assemble(config).await;
    let focus = Focus::parse(focus);

    let views: Vec<EntryView> = registry
        .iter()
        .map(|entry| EntryView::new(entry, !focus.skips(entry)))
        .filter(|view| all || view.selected)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if views.is_empty() {
        println!("No registry entries selected by focus: {focus}");
        return Ok(());
    }

    let selected = views.iter().filter(|view| view.selected).count();
    println!(
        "\n{} of {} registry entries selected ({focus}):\n",
        selected,
        registry.len()
    );

    let table_rows: Vec<EntryRow> = views.iter().map(EntryRow::from).collect();
    let table = Table::new(&table_rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("{table}");
    Ok(())
}

async fn execute_show(config: &RegistryConfig, describe: &str, json: bool) -> Result<()> {
    let registry = assemble(config).await;

    let entry = registry
        .iter()
        .find(|entry| entry.describe() == describe)
        .with_context(|| format!("Artifact '{describe}' not found in registry"))?;
    let metadata = entry.artifact.metadata();
    let details = entry.artifact.details();

    if json {
        let output = serde_json::json!({
            "describe": entry.describe(),
            "metadata": metadata,
            "details": details,
            "useForDocs": entry.use_for_docs,
            "useForLatest": entry.use_for_latest,
            "skipWhenNotFocused": entry.skip_when_not_focused,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("Artifact: {}", entry.describe());
    if !metadata.description.is_empty() {
        println!("Description: {}", metadata.description);
    }
    if let Some(user_data) = &metadata.example_user_data {
        println!("Login user: {}", user_data.username);
    }

    println!();
    println!("Flags:");
    println!("  use for docs:            {}", entry.use_for_docs);
    println!("  use for latest:          {}", entry.use_for_latest);
    println!("  skip when not focused:   {}", entry.skip_when_not_focused);

    if !metadata.labels.is_empty() {
        println!();
        println!("Labels:");
        for (key, value) in &metadata.labels {
            println!("  {key}={value}");
        }
    }

    if let Some(details) = details {
        println!();
        println!("Source:");
        println!("  {}", details.download_url);
        if let Some(sha) = &details.sha256_sum {
            println!("  sha256: {sha}");
        }
    }

    Ok(())
}

async fn execute_focus(config: &RegistryConfig, focus: &str) -> Result<()> {
    let registry = assemble(config).await;
    let parsed = Focus::parse(focus);

    println!("Focus {focus:?} selects {parsed}");
    let selected: Vec<String> = registry
        .iter()
        .filter(|entry| !parsed.skips(entry))
        .map(Entry::describe)
        .collect();

    if selected.is_empty() {
        println!("No registry entries match.");
    } else {
        for describe in selected {
            println!("  {describe}");
        }
    }

    Ok(())
}
