//! sprout's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration loading and
//! dispatch into the generation flows.

use std::path::PathBuf;

use sprout::{
    cli::{get_args, Args},
    config::{get_config, Config},
    error::{default_error_handler, Error, Result},
    generators::{
        find_module_files, generate_templates, list_options, non_page_file_manipulation,
        process_tabs_request,
    },
    request::{ArtifactKind, GeneratorRequest},
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args).await {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the artifact kind and names from the arguments
/// 2. Loads project configuration (files, defaults, environment overrides)
/// 3. Dispatches into the page, tabs or module-registered flow
/// 4. Reports every created file
async fn run(args: Args) -> Result<()> {
    if args.list {
        for option in list_options() {
            let qualifier = if option.multiple { " (accepts multiple names)" } else { "" };
            println!("{}{}", option.kind, qualifier);
        }
        return Ok(());
    }

    let kind: ArtifactKind = args.artifact_type.as_deref().unwrap_or_default().parse()?;
    let (name, extra_names) = match args.names.split_first() {
        Some(split) => split,
        None => return Err(Error::Config("an artifact name is required".to_string())),
    };

    let project_root = std::env::current_dir()
        .map_err(|source| Error::FileSystem { path: PathBuf::from("."), source })?;
    let config = get_config(&project_root)?;

    let request = GeneratorRequest::new(kind, name.as_str())
        .with_spec(args.spec)
        .with_ng_module(!args.skip_module);

    let created = match kind {
        ArtifactKind::Page => generate_templates(&config, &request).await?,
        ArtifactKind::Tabs => process_tabs_request(&config, &request, extra_names).await?,
        _ => {
            let module_path = match args.module {
                Some(path) => path,
                None => select_module_file(&config, kind)?,
            };
            non_page_file_manipulation(&config, &request, &module_path).await?
        }
    };

    for path in &created {
        println!("create '{}'", path.display());
    }
    Ok(())
}

/// Picks the module file to register the artifact in when the caller did
/// not name one: a single discovered candidate is used directly, several
/// trigger an interactive selection.
fn select_module_file(config: &Config, kind: ArtifactKind) -> Result<PathBuf> {
    let mut candidates = find_module_files(config, &[ArtifactKind::Page, kind])?;
    match candidates.len() {
        0 => Err(Error::Config("no module files found; pass --module <PATH>".to_string())),
        1 => Ok(candidates.remove(0)),
        _ => {
            let items: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
            let selection = dialoguer::FuzzySelect::new()
                .with_prompt("Register in which module file?")
                .default(0)
                .items(&items)
                .interact()
                .map_err(|e| Error::Config(e.to_string()))?;
            Ok(candidates.remove(selection))
        }
    }
}
