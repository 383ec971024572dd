//! Report assembly
//!
//! Orchestrates one run: build the membership sets, fan out the four
//! retrievals (new/updated x formulae/casks), then normalize, classify,
//! style and lay out each surviving section. Column widths are computed
//! over all sections together so the whole report aligns uniformly.

pub mod layout;
pub mod style;

use std::collections::HashSet;
use std::path::PathBuf;
use std::thread;

use crate::brew;
use crate::changes::{self, ChangeKind};
use crate::cli::Cli;
use crate::error::{self, Result, TapfreshError};
use crate::history;
use layout::layout_rows;
use style::{Membership, StyleOptions, StyledEntry, style_name};

/// Package catalog: the core (formulae) or cask tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Formulae,
    Casks,
}

impl Catalog {
    pub fn tap(self) -> &'static str {
        match self {
            Catalog::Formulae => "homebrew/core",
            Catalog::Casks => "homebrew/cask",
        }
    }

    /// Path prefix of package definition files inside the tap checkout
    pub fn prefix(self) -> &'static str {
        match self {
            Catalog::Formulae => "Formula/",
            Catalog::Casks => "Casks/",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            Catalog::Formulae => "formulae",
            Catalog::Casks => "casks",
        }
    }
}

/// Change category: newly added or updated packages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    New,
    Updated,
}

impl Category {
    pub fn kind(self) -> ChangeKind {
        match self {
            Category::New => ChangeKind::Added,
            Category::Updated => ChangeKind::Modified,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::New => "New",
            Category::Updated => "Updated",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::New => "new",
            Category::Updated => "updated",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Category::New => "🆕",
            Category::Updated => "🔄",
        }
    }
}

/// Fixed print order of report sections
pub const GROUPS: [(Catalog, Category); 4] = [
    (Catalog::Formulae, Category::New),
    (Catalog::Formulae, Category::Updated),
    (Catalog::Casks, Category::New),
    (Catalog::Casks, Category::Updated),
];

/// Read-only membership sets, built once per run
pub struct MembershipSets {
    pub installed: HashSet<String>,
    pub looked_up: HashSet<String>,
}

impl MembershipSets {
    pub fn membership(&self, name: &str) -> Membership {
        Membership {
            installed: self.installed.contains(name),
            looked_up: self.looked_up.contains(name),
        }
    }
}

/// One run's configuration, derived from CLI flags
pub struct ReportOptions {
    pub days: u32,
    pub formulae: bool,
    pub casks: bool,
    pub new: bool,
    pub updated: bool,
    pub style: StyleOptions,
    pub json: bool,
    pub verbose: bool,
    pub history_file: Option<PathBuf>,
}

impl ReportOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            days: cli.days,
            formulae: !cli.only_cask,
            casks: !cli.only_formula,
            new: !cli.only_updated,
            updated: !cli.only_new,
            style: StyleOptions {
                dim_looked_up: !cli.no_dim_looked_up,
                hide_looked_up: cli.hide_looked_up,
                plain: cli.plain,
                truncate_chars: usize::from(cli.truncate_chars),
            },
            json: cli.json,
            verbose: cli.verbose,
            history_file: cli.history_file.clone(),
        }
    }

    /// Section gating: catalog enabled AND category enabled
    fn enabled(&self, catalog: Catalog, category: Category) -> bool {
        let catalog_on = match catalog {
            Catalog::Formulae => self.formulae,
            Catalog::Casks => self.casks,
        };
        let category_on = match category {
            Category::New => self.new,
            Category::Updated => self.updated,
        };
        catalog_on && category_on
    }
}

/// One enabled (catalog, category) group with its resolved tap checkout
struct GroupPlan {
    catalog: Catalog,
    category: Category,
    checkout: PathBuf,
}

/// A printable section: header plus surviving entries, in sorted name order
pub struct ReportSection {
    pub title: String,
    pub entries: Vec<StyledEntry>,
}

/// Strip the directory part and the `.rb` extension from a raw changed path
pub fn normalize(raw: &str) -> String {
    let base = raw.rsplit('/').next().unwrap_or(raw);
    base.strip_suffix(".rb").unwrap_or(base).to_string()
}

/// Normalize a raw group into sorted, deduplicated package names
fn section_names(raw: &[String]) -> Vec<String> {
    let mut names: Vec<String> = raw
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| normalize(line))
        .collect();
    names.sort();
    names.dedup();
    names
}

fn section_title(catalog: Catalog, category: Category, plain: bool) -> String {
    if plain {
        format!("{} {}:", category.label(), catalog.noun())
    } else {
        format!("{} {} {}:", category.glyph(), category.label(), catalog.noun())
    }
}

/// Build one section: normalize, classify, style, drop suppressed entries
fn build_section(
    catalog: Catalog,
    category: Category,
    raw: &[String],
    sets: &MembershipSets,
    opts: &StyleOptions,
) -> ReportSection {
    let entries = section_names(raw)
        .iter()
        .map(|name| style_name(name, sets.membership(name), opts))
        .filter(|entry| !entry.suppressed)
        .collect();

    ReportSection {
        title: section_title(catalog, category, opts.plain),
        entries,
    }
}

/// Render all non-empty sections, aligned by the longest visible entry
/// across the whole report
pub fn render(sections: &[ReportSection], output_width: usize) -> String {
    let global_max = sections
        .iter()
        .flat_map(|section| section.entries.iter())
        .map(|entry| entry.visible_len)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for section in sections.iter().filter(|s| !s.entries.is_empty()) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&section.title);
        out.push('\n');
        out.push_str(&layout_rows(&section.entries, global_max, output_width));
    }
    out
}

/// Resolve the enabled groups, reusing one tap path lookup per catalog
fn plan_groups(opts: &ReportOptions) -> Result<Vec<GroupPlan>> {
    let mut resolved: Vec<(Catalog, PathBuf)> = Vec::new();
    let mut plans = Vec::new();

    for (catalog, category) in GROUPS {
        if !opts.enabled(catalog, category) {
            continue;
        }
        let checkout = match resolved.iter().find(|(c, _)| *c == catalog) {
            Some((_, path)) => path.clone(),
            None => {
                let path = brew::tap_path(catalog.tap())?;
                if opts.verbose {
                    eprintln!("Tap {} at {}", catalog.tap(), path.display());
                }
                resolved.push((catalog, path.clone()));
                path
            }
        };
        plans.push(GroupPlan {
            catalog,
            category,
            checkout,
        });
    }

    Ok(plans)
}

/// Fan out one retrieval thread per group and join them all.
///
/// A failed group degrades to an empty result with a warning; it never
/// aborts the other groups.
fn collect_raw(plans: &[GroupPlan], opts: &ReportOptions) -> Vec<Vec<String>> {
    thread::scope(|scope| {
        let handles: Vec<_> = plans
            .iter()
            .map(|plan| {
                scope.spawn(move || {
                    changes::recent_changes(
                        plan.catalog.tap(),
                        &plan.checkout,
                        opts.days,
                        plan.category.kind(),
                        plan.catalog.prefix(),
                    )
                })
            })
            .collect();

        handles
            .into_iter()
            .zip(plans)
            .map(|(handle, plan)| {
                let outcome = handle.join().unwrap_or_else(|_| {
                    Err(error::tap_unavailable(
                        plan.catalog.tap(),
                        "retrieval thread panicked",
                    ))
                });
                match outcome {
                    Ok(raw) => {
                        if opts.verbose {
                            eprintln!(
                                "{} {} {}: {} changed files",
                                plan.category.label(),
                                plan.catalog.noun(),
                                plan.catalog.tap(),
                                raw.len()
                            );
                        }
                        raw
                    }
                    Err(e) => {
                        eprintln!(
                            "Warning: skipping {} {}: {}",
                            plan.category.label().to_lowercase(),
                            plan.catalog.noun(),
                            e
                        );
                        Vec::new()
                    }
                }
            })
            .collect()
    })
}

/// Machine-readable report: one array per enabled section
fn json_report(
    plans: &[GroupPlan],
    raw_groups: &[Vec<String>],
    sets: &MembershipSets,
    hide_looked_up: bool,
) -> serde_json::Value {
    let mut report = serde_json::Map::new();

    for (plan, raw) in plans.iter().zip(raw_groups) {
        let entries: Vec<serde_json::Value> = section_names(raw)
            .iter()
            .filter(|name| !(hide_looked_up && sets.looked_up.contains(*name)))
            .map(|name| {
                let membership = sets.membership(name);
                serde_json::json!({
                    "name": name,
                    "installed": membership.installed,
                    "looked_up": membership.looked_up,
                })
            })
            .collect();

        report.insert(
            format!("{}_{}", plan.category.key(), plan.catalog.noun()),
            serde_json::Value::Array(entries),
        );
    }

    serde_json::Value::Object(report)
}

/// Run one report
pub fn run(opts: &ReportOptions) -> Result<()> {
    let sets = MembershipSets {
        installed: brew::installed_set()?,
        looked_up: history::looked_up_set(opts.history_file.as_deref())?,
    };

    let plans = plan_groups(opts)?;
    let raw_groups = collect_raw(&plans, opts);

    if opts.json {
        let value = json_report(&plans, &raw_groups, &sets, opts.style.hide_looked_up);
        let rendered =
            serde_json::to_string_pretty(&value).map_err(|e| TapfreshError::IoError {
                message: e.to_string(),
            })?;
        println!("{rendered}");
        return Ok(());
    }

    let sections: Vec<ReportSection> = plans
        .iter()
        .zip(&raw_groups)
        .map(|(plan, raw)| build_section(plan.catalog, plan.category, raw, &sets, &opts.style))
        .collect();

    let rendered = render(&sections, layout::output_width());
    if rendered.is_empty() {
        println!("No recent changes in the last {} days.", opts.days);
    } else {
        print!("{rendered}");
    }

    Ok(())
}
