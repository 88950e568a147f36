use anyhow::Context as _;
use example::Contact;
use tracing::info;
use tracing_subscriber::EnvFilter;
use validatable_model::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let input = std::env::args()
        .nth(1)
        .context("usage: validate_contact '<contact json>'")?;
    let mut contact: Contact =
        serde_json::from_str(&input).context("failed to parse contact")?;
    info!(?contact, "validating contact");

    if contact.validate_with(FailureMode::Collect)? {
        println!("contact is valid");
        return Ok(());
    }

    println!("contact is invalid:");
    for (field, messages) in contact.get_errors().iter() {
        for message in messages {
            println!("  {field}: {message}");
        }
    }
    std::process::exit(1);
}
