use crate::api::client::OpenVkClient;
use crate::config::{self, AppPaths, Settings};
use crate::error::{AppError, AppResult};
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub verbose: u8,
    pub paths: AppPaths,
    pub settings: Settings,
    pub client: OpenVkClient,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(profile: String, json: bool, verbose: u8) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile);
        let paths = AppPaths::discover()?;
        let settings = config::load_settings(&paths, &profile)?;
        if settings.access_token().is_err() {
            return Err(AppError::Config(format!(
                "missing access_token in {}. add it and rerun",
                paths.settings_file(&profile).display()
            )));
        }

        let output = Output::new(json, verbose > 0 || settings.debug());
        let client = OpenVkClient::new(&settings, output)?;

        Ok(Self {
            profile,
            verbose,
            paths,
            settings,
            client,
            output,
        })
    }
}
