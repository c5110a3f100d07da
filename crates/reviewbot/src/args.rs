use anyhow::Result;
use clap::Parser;
use reviewbot_config::{
    ApiDriver, Config, EnvInputReader, InputReader, MemoryInputReader, OverrideInputReader,
};
use reviewbot_core::{
    reporting::{ActionsReporter, Reporter},
    use_cases::{
        action::{ActionOutcome, RunActionInterface},
        inputs::input_names,
    },
    CoreContext, CoreModule,
};
use reviewbot_ghapi_github::GithubApiService;
use reviewbot_ghapi_interface::ApiService;
use reviewbot_ghapi_null::NullApiService;
use shaku::HasComponent;
use tracing::info;

/// Request random reviewers on a pull request.
///
/// Inputs are read from `INPUT_*` environment variables, like a GitHub
/// Actions step.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Target repository (`owner/name`), instead of `GITHUB_REPOSITORY`.
    #[arg(long)]
    repository: Option<String>,

    /// Force dry-run mode.
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn apply_to_config(&self, config: &mut Config) {
        if let Some(repository) = &self.repository {
            config.repository = repository.clone();
        }
    }

    fn input_overrides(&self) -> MemoryInputReader {
        let mut overrides = MemoryInputReader::new();
        if self.dry_run {
            overrides.set_input(input_names::DRY_RUN, "true");
        }

        overrides
    }
}

pub(crate) struct ActionContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub reporter: Box<dyn Reporter + Send + Sync>,
    pub input_reader: Box<dyn InputReader + Send + Sync>,
}

impl ActionContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            reporter: self.reporter.as_ref(),
            input_reader: self.input_reader.as_ref(),
        }
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(mut config: Config, args: Args) -> Result<ActionOutcome> {
        args.apply_to_config(&mut config);

        let input_reader = OverrideInputReader::new(EnvInputReader::new(), args.input_overrides());
        let api_service = Self::build_api_service(&config, &input_reader);

        let ctx = ActionContext {
            config,
            core_module: CoreModule::builder().build(),
            api_service,
            reporter: Box::new(ActionsReporter::stdout()),
            input_reader: Box::new(input_reader),
        };

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(runtime.block_on(Self::run_action(&ctx)))
    }

    pub(crate) async fn run_action(ctx: &ActionContext) -> ActionOutcome {
        let run_action: &dyn RunActionInterface = ctx.core_module.resolve_ref();
        run_action.run(&ctx.as_core_context()).await
    }

    fn build_api_service(
        config: &Config,
        input_reader: &dyn InputReader,
    ) -> Box<dyn ApiService + Send + Sync> {
        if config.api.driver == ApiDriver::GitHub {
            info!("Using GithubApiService API driver");
            // An empty token is rejected by input validation before any call.
            Box::new(GithubApiService::new(
                config.clone(),
                input_reader.get_input(input_names::TOKEN),
            ))
        } else {
            info!("Using NullApiService API driver");
            Box::new(NullApiService::new())
        }
    }
}
