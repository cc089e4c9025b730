//! Command handlers.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use regform_lib::forms::{FormKind, mount_signup, mount_student};
use regform_lib::sink::SubmissionSink;
use regform_lib::storage::{SnapshotStore, SqliteBackend, StorageBackend};
use regform_lib::{Form, FormConfig, SubmitOutcome};

use crate::paths;
use crate::{Cli, Command};

/// Dispatch a parsed command line.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::Fields { form } => fields(*form),
        Command::Submit { form, values, dedup } => {
            let config = FormConfig::default()
                .with_storage_key(form.id())
                .with_deduplication(*dedup);
            match form {
                FormKind::Student => submit(mount_student(config)?, values),
                FormKind::Signup => submit(mount_signup(open_backend(cli)?, config)?, values),
            }
        }
        Command::Show { form } => {
            let store = snapshot_store(cli, *form)?;
            match store.load()? {
                Some(snapshot) => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                None => println!("No saved values for {}", form),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Clear { form } => {
            snapshot_store(cli, *form)?.clear()?;
            println!("Cleared saved values for {}", form);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn fields(kind: FormKind) -> Result<ExitCode> {
    let schema = kind.schema()?;
    println!("{}", kind.title());
    for field in schema.fields() {
        let marker = if field.is_required() { "*" } else { " " };
        println!("{} {} ({})", marker, field.name(), field.label());
        for rule in field.rules() {
            println!("      {}", rule);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn submit<S: SubmissionSink>(mut form: Form<S>, values: &[(String, String)]) -> Result<ExitCode> {
    if let Some(warning) = form.warning() {
        eprintln!("Warning: {}", warning);
    }

    match fill_and_submit(&mut form, values)? {
        SubmitOutcome::Submitted => {
            println!("Submitted via {} sink", form.sink().name());
            println!("{}", serde_json::to_string_pretty(&form.snapshot())?);
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Duplicate => {
            println!("Already submitted; nothing changed");
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Invalid(errors) => {
            for error in &errors {
                eprintln!("{}", error);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Type each value into its field, leave the field, then submit.
fn fill_and_submit<S: SubmissionSink>(
    form: &mut Form<S>,
    values: &[(String, String)],
) -> Result<SubmitOutcome> {
    for (name, value) in values {
        if !form.schema().contains(name) {
            bail!("unknown field '{}'", name);
        }
        form.input(name.as_str(), value.as_str());
        form.blur(name.as_str());
    }
    form.submit().context("submission failed")
}

fn open_backend(cli: &Cli) -> Result<Arc<dyn StorageBackend>> {
    let path = match &cli.db {
        Some(path) => path.clone(),
        None => default_db()?,
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    log::debug!("opening form database at {}", path.display());
    let backend = SqliteBackend::open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Arc::new(backend))
}

fn default_db() -> Result<PathBuf> {
    paths::forms_db().context("could not determine a data directory; pass --db")
}

fn snapshot_store(cli: &Cli, kind: FormKind) -> Result<SnapshotStore> {
    if !kind.persists() {
        bail!("the {} form logs submissions and keeps no saved values", kind);
    }
    Ok(SnapshotStore::from_shared(open_backend(cli)?, kind.id()))
}
