//! Demo entry point: wires the app from the environment, signs in the
//! seeded admin account and prints what the dashboard would show.

use ekdkn::application::App;
use ekdkn::config::AppConfig;
use ekdkn::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!(environment = ?config.environment, "Starting EKDKN core");

    let app = App::from_config(&config).await?;

    let email = "admin@ekdkn.org";
    match app.session.try_login(email, &config.auth.demo_password).await {
        Ok(user) => tracing::info!(user_id = %user.id, role = %user.role, "Signed in"),
        Err(e) => {
            tracing::warn!(error = %e, email = %email, "Demo sign-in failed");
            return Ok(());
        }
    }

    let areas: Vec<String> = app
        .session
        .visible_areas()
        .await
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("visible areas: {}", areas.join(", "));

    let stats = app.store.dashboard_stats().await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);

    app.session.logout().await;
    Ok(())
}
