use clap::{Parser, Subcommand};
use folio::{
    DirectoryTemplateRepository, DocumentRecord, FilePreferenceStore, FolioError, IssuerInfo,
    PreferenceStore, RendererBuilder, suggested_filename,
};
use folio_traits::TEMPLATE_PREFERENCE_KEY;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Lay out invoices and receipts as PDF.
#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Render configuration (JSON). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of user template JSON files.
    #[arg(long, global = true)]
    templates_dir: Option<PathBuf>,

    /// Preference file holding the preferred template.
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a record to PDF.
    Render {
        /// Record JSON file.
        record: PathBuf,
        /// Issuer JSON file.
        issuer: PathBuf,
        /// Output path. Defaults to a name derived from the record.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Template id, overriding the record and the stored preference.
        #[arg(short, long)]
        template: Option<String>,
    },
    /// List available templates.
    Templates,
    /// Store the preferred template id.
    SetTemplate { id: String },
}

fn main() -> Result<(), FolioError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = RendererBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.with_config_file(path)?;
    }
    if let Some(dir) = &cli.templates_dir {
        builder = builder.with_repository(Arc::new(DirectoryTemplateRepository::open(dir)?));
    }
    let prefs = match &cli.prefs {
        Some(path) => Some(Arc::new(FilePreferenceStore::open(path)?)),
        None => None,
    };
    if let Some(store) = &prefs {
        builder = builder.with_preferences(store.clone());
    }
    let renderer = builder.build()?;

    match cli.command {
        Command::Render {
            record,
            issuer,
            output,
            template,
        } => {
            let record: DocumentRecord = read_json(&record)?;
            let issuer: IssuerInfo = read_json(&issuer)?;
            let output = output.unwrap_or_else(|| PathBuf::from(suggested_filename(&record)));

            let document = renderer.render_pdf(&record, &issuer, template.as_deref())?;
            document.save(&output)?;
            let stats = document.stats();
            println!(
                "Wrote {} ({} page(s), {} row(s))",
                output.display(),
                stats.pages,
                stats.item_rows
            );
            if !stats.footer_drawn {
                println!("Note: footer omitted, last page was full");
            }
        }
        Command::Templates => {
            for template in renderer.templates() {
                let premium = if template.is_premium { " *" } else { "" };
                println!(
                    "{:<12} {:<12} {:<10} {}{}",
                    template.id.as_str(),
                    template.name,
                    template.category,
                    folio::variant_for(template.id.as_str(), &template),
                    premium
                );
            }
        }
        Command::SetTemplate { id } => {
            let Some(store) = prefs else {
                return Err(FolioError::Config(
                    "set-template needs --prefs <file>".to_string(),
                ));
            };
            if !renderer.catalog().contains(&id) {
                return Err(folio::CatalogError::NotFound(id).into());
            }
            store.set(TEMPLATE_PREFERENCE_KEY, &id)?;
            println!("Preferred template set to '{}'", id);
        }
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, FolioError> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}
