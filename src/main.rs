mod model;
mod server;

use std::process::ExitCode;

use server::{
    config::{env::Env, Profile},
    extension::ExtensionRegistry,
    observability::logging,
    startup,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let logs = logging::init_subscriber();
    let env = Env::from_process();

    let profile = match Profile::from_env(&env) {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let registry = ExtensionRegistry::new();
    let app = match startup::bootstrap(profile, &env, &registry, &logs).await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Startup aborted: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = app.run().await {
        tracing::error!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
