//! translens CLI
//!
//! Command-line front end over the string-selection and search engines:
//! - `search` - search strings across locales and repositories
//! - `strings` - dump a product's in-scope string table
//! - `coverage` - missing-string counts per locale against a reference

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use translens::cli::{Cli, Commands, CoverageArgs, SearchArgs, StringsArgs};
use translens::{
    locale_in_context, AppError, Cache, JsonDirSource, Product, ProductSelection, Repository,
    RepositoryScope, SearchEngine, SearchQuery, SearchResults, StringTableSource,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let source = JsonDirSource::new(&cli.data_dir);
    let cache = Cache::new();

    let result = match cli.command {
        Commands::Search(args) => execute_search(&source, &cache, args),
        Commands::Strings(args) => execute_strings(&source, &cache, args),
        Commands::Coverage(args) => execute_coverage(&source, &cache, args),
    };

    if let Err(err) = result {
        match err.downcast_ref::<AppError>() {
            Some(app) => eprintln!("Error [{}]: {}", app.error_code(), app),
            None => eprintln!("Error: {}", err),
        }
        std::process::exit(1);
    }

    Ok(())
}

fn execute_search(source: &JsonDirSource, cache: &Cache, args: SearchArgs) -> Result<()> {
    if args.locales.len() > 3 {
        return Err(AppError::InvalidInput(format!(
            "at most 3 locales per search, got {}",
            args.locales.len()
        ))
        .into());
    }

    let locales: Vec<&str> = args.locales.iter().map(String::as_str).collect();
    let query = SearchQuery::new()
        .terms(&args.query)
        .locales(&locales)
        .whole_words(args.whole_words)
        .case_insensitive(!args.case_sensitive)
        .perfect_match(args.perfect_match)
        .scope(RepositoryScope::parse_or_default(&args.repo))
        .limit(args.limit);

    let engine = SearchEngine::new(source);

    // The repository loop is ours to drive; a product scope intersects
    // each pass with that product's view before merging.
    let mut results = SearchResults::new();
    for repository in query.repository_scope().repositories() {
        let mut pass = engine.run(&query, repository)?;
        if let Some(product) = &args.product {
            restrict_to_product(source, cache, product, repository, &mut pass);
        }
        for (locale, table) in pass {
            results.entry(locale).or_default().extend(table);
        }
    }

    if args.json {
        let body = json!({
            "query": query.terms_str(),
            "regex": query.regex_source(),
            "limit": query.results_limit(),
            "results": results,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    // Requested order, not map order
    for locale in &args.locales {
        let table = &results[locale];
        if table.is_empty() {
            println!(
                "No matching results for \"{}\" in {}",
                query.terms_str(),
                locale
            );
            continue;
        }
        let shown = table.len().min(query.results_limit());
        println!(
            "Displaying {} of {} results for \"{}\" in {}:",
            shown,
            table.len(),
            query.terms_str(),
            locale
        );
        for (entity, text) in table.iter().take(shown) {
            println!("  {}\t{}", entity, text);
        }
    }

    Ok(())
}

/// Drop search hits that are outside the product's in-scope table.
///
/// The engine loaded each table under the repository's own locale code,
/// so the product view must be built from the same normalized code or an
/// aliased pair (Gaia's `es` for a requested `es-ES`) compares against
/// an empty view and loses every match.
fn restrict_to_product(
    source: &dyn StringTableSource,
    cache: &Cache,
    product: &str,
    repository: Repository,
    pass: &mut SearchResults,
) {
    for (locale, table) in pass.iter_mut() {
        let effective = locale_in_context(locale, repository);
        let view = ProductSelection::new(
            source,
            cache,
            Product::parse_or_default(product),
            &effective,
            repository,
        );
        table.retain(|entity, _| view.strings().contains_key(entity));
    }
}

fn execute_strings(source: &JsonDirSource, cache: &Cache, args: StringsArgs) -> Result<()> {
    let mut selection =
        ProductSelection::from_names(source, cache, &args.product, &args.locale, &args.repo);
    if args.no_access_keys {
        selection.exclude_access_keys();
    }

    if args.devtools {
        let devtools = selection.dev_tools_strings();
        return print_table(&devtools, args.json);
    }

    print_table(selection.strings(), args.json)
}

fn print_table(table: &translens::StringTable, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(table)?);
        return Ok(());
    }
    for (entity, text) in table {
        println!("{}\t{}", entity, text);
    }
    Ok(())
}

#[derive(Serialize)]
struct CoverageEntry {
    total_missing: usize,
    devtools_missing: usize,
}

fn execute_coverage(source: &JsonDirSource, cache: &Cache, args: CoverageArgs) -> Result<()> {
    let repository = Repository::parse_or_default(&args.repo);

    let mut reference = ProductSelection::new(
        source,
        cache,
        translens::Product::Firefox,
        &args.reference,
        repository,
    );
    reference.exclude_access_keys();
    let total = reference.strings().len();
    let total_devtools = reference.dev_tools_strings().len();

    let mut report: BTreeMap<String, CoverageEntry> = BTreeMap::new();
    for locale in &args.locales {
        let mut target = ProductSelection::new(
            source,
            cache,
            translens::Product::Firefox,
            locale,
            repository,
        );
        target.exclude_access_keys();
        report.insert(
            locale.clone(),
            CoverageEntry {
                total_missing: total.saturating_sub(target.strings().len()),
                devtools_missing: total_devtools
                    .saturating_sub(target.dev_tools_strings().len()),
            },
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Reference {} has {} strings ({} devtools)",
        args.reference, total, total_devtools
    );
    for (locale, entry) in &report {
        println!(
            "{}: {} missing, {} devtools missing",
            locale, entry.total_missing, entry.devtools_missing
        );
    }

    Ok(())
}
