pub mod paths;
pub mod profile;
pub mod settings;

pub use paths::AppPaths;
pub use profile::resolve_profile;
pub use settings::Settings;

use crate::error::{AppError, AppResult};

pub fn load_settings(paths: &AppPaths, profile: &str) -> AppResult<Settings> {
    let path = paths.settings_file(profile);
    if !path.exists() {
        settings::save(path.clone(), &Settings::default())?;
        return Err(AppError::Config(format!(
            "created profile template at {}. add your access_token and rerun",
            path.display()
        )));
    }

    settings::load(path)
}
