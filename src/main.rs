//! inam-ui's main application entry point and orchestration logic.
//! Handles command-line argument parsing, wires the configuration, registry
//! and template root into the generator, and formats results for the
//! terminal. Exits non-zero on any resolution or generation failure.

use std::path::PathBuf;

use inam_ui::{
    cli::{get_args, AddArgs, Args, Command},
    config::load_config,
    deps::{check_dependencies, report_dependencies},
    error::{default_error_handler, Result},
    generator::{GenerateOutcome, GenerateRequest, Generator},
    list::{print_listing, ListFilter},
    locate::find_template_root,
    logger::init_logger,
    prompt::{prompt_component, prompt_target_path},
    registry::ComponentRegistry,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::List(list_args)) => {
            print_listing(&ListFilter {
                category: list_args.category,
                search: list_args.search,
            });
            Ok(())
        }
        Some(Command::Add(add)) => run_add(add),
        None => run_add(args.add),
    }
}

/// Component generation flow.
///
/// # Flow
/// 1. Loads configuration from the working directory
/// 2. Warns about missing project dependencies (unless skipped)
/// 3. Resolves the component and target path, prompting when absent
/// 4. Locates the shipped templates directory
/// 5. Runs the generator and reports the outcome
fn run_add(add: AddArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd)?;

    if config.check_dependencies && !add.skip_checks {
        report_dependencies(&check_dependencies(&cwd));
    }

    let registry = ComponentRegistry::builtin();

    let (component, target_dir) = match add.component {
        Some(component) => {
            let target_dir = add
                .path
                .unwrap_or_else(|| PathBuf::from(&config.default_path));
            (component, target_dir)
        }
        None => {
            let component = prompt_component(&registry)?;
            let target_dir = match add.path {
                Some(path) => path,
                None => PathBuf::from(prompt_target_path(&config.default_path)?),
            };
            (component, target_dir)
        }
    };

    let template_root = find_template_root()?;
    let generator = Generator::new(registry, template_root);

    let request = GenerateRequest {
        component,
        target_dir,
        force: add.force,
        add_header: config.add_file_header,
    };

    match generator.generate(&request)? {
        GenerateOutcome::Written(path) => {
            println!(
                "Successfully generated \"{}\" at {}",
                request.component,
                path.display()
            );
            Ok(())
        }
        GenerateOutcome::SkippedExisting(path) => {
            // A benign skip, but still a failed invocation for scripts.
            log::warn!(
                "Component \"{}\" already exists at {}. Use --force to overwrite.",
                request.component,
                path.display()
            );
            std::process::exit(1);
        }
    }
}
