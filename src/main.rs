mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile, WalkerSettings, GITHUB_TOKEN_ENV};
use npm_license_walker::adapters::outbound::formatters::TextTreeFormatter;
use npm_license_walker::adapters::outbound::network::{
    CachingPackageRegistry, GitHubContentClient, NpmRegistryClient, RequestLimiter,
};
use npm_license_walker::application::dto::{WalkRequest, WalkResponse};
use npm_license_walker::application::factories::{
    PresenterFactory, PresenterType, ReporterFactory, ReporterType,
};
use npm_license_walker::application::use_cases::WalkLicensesUseCase;
use npm_license_walker::ports::outbound::{PackageRegistry, ProgressReporter, TreeFormatter};
use npm_license_walker::shared::error::ExitCode;
use npm_license_walker::shared::Result;
use std::io::IsTerminal;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments and 0 for --help/--version
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    let presenter_type = PresenterType::from_output(args.output.clone());
    let color_capable = presenter_type.supports_color() && std::io::stdout().is_terminal();
    let settings = WalkerSettings::resolve(
        &args,
        config.as_ref(),
        std::env::var(GITHUB_TOKEN_ENV).ok(),
        color_capable,
    );

    let progress_reporter = ReporterFactory::create(ReporterType::from_verbose(settings.verbose));
    if let Some(config) = &config {
        for warning in config.warnings() {
            progress_reporter.report_error(&warning);
        }
    }
    if settings.github_token.is_none() {
        progress_reporter.report(&format!(
            "ℹ️  No GitHub token configured; set {} to raise the API rate limit.",
            GITHUB_TOKEN_ENV
        ));
    }

    // Create adapters (Dependency Injection)
    let limiter = RequestLimiter::new(settings.max_concurrent_requests);
    let package_registry = NpmRegistryClient::new(&settings.registry_url, limiter.clone())?;
    let repository_host = GitHubContentClient::new(
        &settings.github_api_url,
        settings.github_token.clone(),
        limiter,
    )?
    .with_raw_content_url(&settings.github_raw_url);

    let request = WalkRequest::new(args.packages);
    let response = if settings.cache_metadata {
        walk(
            CachingPackageRegistry::new(package_registry),
            repository_host,
            progress_reporter,
            request,
        )
        .await?
    } else {
        walk(package_registry, repository_host, progress_reporter, request).await?
    };

    let formatter = TextTreeFormatter::with_color(settings.color);
    let rendered: String = response
        .trees
        .iter()
        .map(|tree| formatter.format(&tree.roots))
        .collect();

    let presenter = PresenterFactory::create(presenter_type);
    presenter.present(&rendered)?;

    Ok(())
}

/// `--config` must load; otherwise a file in the current directory is optional
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => Ok(Some(load_config_from_path(path)?)),
        None => discover_config(&std::env::current_dir()?),
    }
}

async fn walk<R: PackageRegistry>(
    package_registry: R,
    repository_host: GitHubContentClient,
    progress_reporter: Box<dyn ProgressReporter>,
    request: WalkRequest,
) -> Result<WalkResponse> {
    let use_case = WalkLicensesUseCase::new(package_registry, repository_host, progress_reporter);
    use_case.execute(request).await
}
